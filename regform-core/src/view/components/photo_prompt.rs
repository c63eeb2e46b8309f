//! src/view/components/photo_prompt.rs
//! ============================================================================
//! # PhotoPrompt: Picture Path Input
//!
//! The terminal stand-in for the platform file chooser: a single-line path
//! prompt. Confirming an empty buffer chooses nothing and changes nothing.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::model::app_state::AppState;
use crate::view::theme;

pub struct PhotoPrompt;

impl PhotoPrompt {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Choose profile picture ")
            .title_style(theme::title_style())
            .border_style(theme::panel_border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(vec![
                Span::styled("Path: ".to_owned(), theme::label_style()),
                Span::styled(app.ui.input.clone(), theme::value_style()),
                Span::styled("█", theme::focused_style()),
            ]),
            Line::default(),
            Line::from(Span::styled(
                "PNG, JPEG, GIF, WebP, or BMP · Enter confirm · Esc cancel",
                theme::placeholder_style(),
            )),
        ];

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
