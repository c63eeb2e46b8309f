//! src/view/components/success_screen.rs
//! ============================================================================
//! # SuccessScreen: Terminal Confirmation View
//!
//! Shown once the submission timer completes. The only way forward is
//! launching the external simulator (or quitting); there is no path back
//! into the form.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::model::app_state::AppState;
use crate::view::theme;

pub struct SuccessScreen;

impl SuccessScreen {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::panel_border_style())
            .title(" Registration complete ")
            .title_style(theme::title_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let record_line = match app.submitted {
            Some(id) => format!("Reference: {id}"),
            None => String::new(),
        };

        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                "✓ Your vehicle registration has been recorded.",
                theme::checkbox_style(true),
            )),
            Line::from(Span::styled(record_line, theme::label_style())),
            Line::default(),
            Line::from(vec![
                Span::styled("Press ".to_owned(), theme::label_style()),
                Span::styled("Enter".to_owned(), theme::value_style()),
                Span::styled(
                    " to open the traffic simulator in your browser.".to_owned(),
                    theme::label_style(),
                ),
            ]),
        ];

        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            inner,
        );
    }
}
