//! src/view/components/help_overlay.rs

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::view::theme;

const BINDINGS: [(&str, &str); 11] = [
    ("Tab / ↓", "next field"),
    ("Shift+Tab / ↑", "previous field"),
    ("← / →", "cycle a choice field"),
    ("m / f / o", "pick gender when its selector is focused"),
    ("Space", "toggle checkbox / type a space"),
    ("Enter", "activate button, toggle checkbox, or move on"),
    ("Backspace", "delete last character"),
    ("Esc", "dismiss toast / close overlay"),
    ("F1 / Ctrl+H", "toggle this help"),
    ("Ctrl+Q / Ctrl+C", "quit"),
    ("Enter (success view)", "launch the simulator"),
];

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame<'_>, area: Rect) {
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .title_style(theme::title_style())
            .border_style(theme::panel_border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines: Vec<Line<'static>> = BINDINGS
            .iter()
            .map(|(key, what)| {
                Line::from(vec![
                    Span::styled(format!("  {key:<20}"), theme::value_style()),
                    Span::styled((*what).to_owned(), theme::label_style()),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
