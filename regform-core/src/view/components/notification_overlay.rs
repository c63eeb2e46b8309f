//! src/view/components/notification_overlay.rs

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::model::ui_state::{Notification, NotificationLevel};
use crate::view::theme;

pub struct NotificationOverlay;

impl NotificationOverlay {
    pub fn render(frame: &mut Frame<'_>, notification: &Notification, area: Rect) {
        frame.render_widget(Clear, area);

        let (border_style, icon) = match notification.level {
            NotificationLevel::Info => (Style::default().fg(theme::CYAN), "ℹ"),
            NotificationLevel::Success => (Style::default().fg(theme::GREEN), "✓"),
            NotificationLevel::Warning => (Style::default().fg(theme::YELLOW), "⚠"),
            NotificationLevel::Error => (Style::default().fg(theme::RED), "✕"),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {icon} {} ", notification.title))
            .title_style(border_style.bold())
            .border_style(border_style)
            .style(Style::default().bg(theme::BACKGROUND));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let message = Paragraph::new(notification.message.as_str())
            .style(Style::default().fg(theme::FOREGROUND))
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Left);
        frame.render_widget(message, inner);
    }
}
