//! src/view/components/status_bar.rs
//! ============================================================================
//! # StatusBar: Persistent Hint/Status Display
//!
//! Bottom line of the UI: key hints for the current phase on the left,
//! selection summary on the right.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::app_state::{AppState, FormPhase};
use crate::view::theme;

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let (msg, style) = match app.phase {
            FormPhase::Editing => (
                "Tab/↑↓ move · ←→ choose · Space/Enter toggle · F1 help · Ctrl+Q quit",
                Style::default().fg(theme::COMMENT),
            ),
            FormPhase::Submitting => (
                "Submitting registration…",
                Style::default().fg(theme::YELLOW),
            ),
            FormPhase::Success => (
                "Enter launch simulation · q quit",
                Style::default().fg(theme::GREEN),
            ),
        };

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(area);

        let left = Paragraph::new(Line::from(Span::styled(format!(" {msg}"), style)))
            .alignment(Alignment::Left);

        let vehicles = app.draft.selected_kinds().count();
        let right = Paragraph::new(Line::from(Span::styled(
            format!("{vehicles} vehicle(s) selected "),
            Style::default().fg(theme::PURPLE),
        )))
        .alignment(Alignment::Right);

        frame.render_widget(left, chunks[0]);
        frame.render_widget(right, chunks[1]);
    }
}
