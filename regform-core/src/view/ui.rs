//! src/view/ui.rs
//! ============================================================================
//! # View: TUI Render Orchestrator
//!
//! One draw per frame: the editing form (or the success screen), the status
//! bar, and whichever overlay is active. The toast notification floats in
//! the top-right corner above everything else.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
};

use crate::model::app_state::{AppState, FormPhase};
use crate::model::ui_state::UIOverlay;
use crate::view::components::{
    FormPanel, HelpOverlay, NotificationOverlay, PhotoPrompt, StatusBar, SuccessScreen,
    VehiclePanel,
};
use crate::view::theme;

pub struct View;

impl View {
    /// Draws the full UI for one frame; called from `terminal.draw`.
    pub fn redraw(frame: &mut Frame<'_>, app: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(10),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let title = Paragraph::new(" Traffic Demo · Vehicle Registration")
            .style(theme::title_style())
            .alignment(Alignment::Left);
        frame.render_widget(title, chunks[0]);

        match app.phase {
            FormPhase::Success => SuccessScreen::render(frame, app, chunks[1]),
            FormPhase::Editing | FormPhase::Submitting => {
                let body = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .split(chunks[1]);

                FormPanel::render(frame, app, body[0]);
                VehiclePanel::render(frame, app, body[1]);
            }
        }

        StatusBar::render(frame, app, chunks[2]);

        match app.ui.overlay {
            UIOverlay::Help => HelpOverlay::render(frame, Self::centered(frame.area(), 50, 60)),
            UIOverlay::PhotoPrompt => {
                PhotoPrompt::render(frame, app, Self::centered(frame.area(), 70, 30));
            }
            UIOverlay::None => {}
        }

        if let Some(notification) = &app.ui.notification {
            NotificationOverlay::render(frame, notification, Self::toast_area(frame.area()));
        }
    }

    /// Centered overlay rectangle, sized as a percentage of the full frame.
    fn centered(full: Rect, pct_w: u16, pct_h: u16) -> Rect {
        let w = (full.width * pct_w / 100).max(20);
        let h = (full.height * pct_h / 100).max(5);
        let x = full.x + (full.width.saturating_sub(w)) / 2;
        let y = full.y + (full.height.saturating_sub(h)) / 2;
        Rect::new(x, y, w.min(full.width), h.min(full.height))
    }

    /// Toast box anchored to the top-right corner.
    fn toast_area(full: Rect) -> Rect {
        let w = (full.width / 3).clamp(24, 48).min(full.width);
        let h = 5;
        let toast = Rect::new(full.x + full.width.saturating_sub(w), full.y + 1, w, h);
        toast.intersection(full)
    }
}
