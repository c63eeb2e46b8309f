//! src/model/ui_state.rs
//! ============================================================================
//! # UIState: Focus, Overlays, and Transient Notifications
//!
//! Holds everything the view needs that is not part of the registration
//! draft itself: which control has focus, which overlay is open, the photo
//! path prompt buffer, and the toast notification that surfaces validation
//! failures and the success confirmation.

use std::time::{Duration, Instant};

use compact_str::CompactString;

use crate::model::registration::{FieldId, VehicleKind};

/// Focusable controls, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// A scalar field (text input or choice selector).
    Field(FieldId),
    /// A vehicle slot checkbox.
    Slot(VehicleKind),
    /// A vehicle slot's registration number input.
    SlotRegNo(VehicleKind),
    /// Free-text vehicle type, only meaningful for the "other" slot.
    SlotCustomType,
    /// Profile picture chooser button.
    Photo,
    /// The submit button.
    Submit,
}

/// Fixed tab order over every focusable control.
pub const FOCUS_RING: [Focus; 20] = [
    Focus::Field(FieldId::OwnerName),
    Focus::Field(FieldId::Phone),
    Focus::Field(FieldId::Age),
    Focus::Field(FieldId::Gender),
    Focus::Field(FieldId::City),
    Focus::Field(FieldId::State),
    Focus::Field(FieldId::Email),
    Focus::Field(FieldId::Experience),
    Focus::Field(FieldId::RoutePreference),
    Focus::Slot(VehicleKind::TwoWheeler),
    Focus::SlotRegNo(VehicleKind::TwoWheeler),
    Focus::Slot(VehicleKind::FourWheeler),
    Focus::SlotRegNo(VehicleKind::FourWheeler),
    Focus::Slot(VehicleKind::Heavy),
    Focus::SlotRegNo(VehicleKind::Heavy),
    Focus::Slot(VehicleKind::Other),
    Focus::SlotRegNo(VehicleKind::Other),
    Focus::SlotCustomType,
    Focus::Photo,
    Focus::Submit,
];

/// UI overlays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UIOverlay {
    #[default]
    None,
    Help,
    /// Path prompt standing in for the platform file chooser.
    PhotoPrompt,
}

/// Notification severity; `Error` maps to the destructive toast flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Transient toast with title, description, and severity.
#[derive(Debug, Clone)]
pub struct Notification {
    pub title: CompactString,
    pub message: CompactString,
    pub level: NotificationLevel,
    pub timestamp: Instant,
    pub auto_dismiss: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct UIState {
    pub focus: Focus,
    pub overlay: UIOverlay,
    /// Buffer for the photo path prompt.
    pub input: String,
    pub notification: Option<Notification>,
}

impl Default for UIState {
    fn default() -> Self {
        Self::new()
    }
}

impl UIState {
    pub fn new() -> Self {
        Self {
            focus: FOCUS_RING[0],
            overlay: UIOverlay::None,
            input: String::new(),
            notification: None,
        }
    }

    fn focus_position(&self) -> usize {
        FOCUS_RING
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0)
    }

    /// Advance focus, wrapping at the end of the ring.
    pub fn focus_next(&mut self) {
        let pos = self.focus_position();
        self.focus = FOCUS_RING[(pos + 1) % FOCUS_RING.len()];
    }

    /// Move focus backwards, wrapping at the start of the ring.
    pub fn focus_prev(&mut self) {
        let pos = self.focus_position();
        self.focus = FOCUS_RING[(pos + FOCUS_RING.len() - 1) % FOCUS_RING.len()];
    }

    // Notification system with inline helpers
    pub fn show_notification(
        &mut self,
        title: impl Into<CompactString>,
        message: impl Into<CompactString>,
        level: NotificationLevel,
        auto_dismiss: Option<Duration>,
    ) {
        self.notification = Some(Notification {
            title: title.into(),
            message: message.into(),
            level,
            timestamp: Instant::now(),
            auto_dismiss,
        });
    }

    #[inline]
    pub fn show_info(&mut self, title: impl Into<CompactString>, message: impl Into<CompactString>) {
        self.show_notification(
            title,
            message,
            NotificationLevel::Info,
            Some(Duration::from_secs(3)),
        );
    }

    #[inline]
    pub fn show_success(
        &mut self,
        title: impl Into<CompactString>,
        message: impl Into<CompactString>,
    ) {
        self.show_notification(
            title,
            message,
            NotificationLevel::Success,
            Some(Duration::from_secs(4)),
        );
    }

    #[inline]
    pub fn show_warning(
        &mut self,
        title: impl Into<CompactString>,
        message: impl Into<CompactString>,
    ) {
        self.show_notification(
            title,
            message,
            NotificationLevel::Warning,
            Some(Duration::from_secs(5)),
        );
    }

    /// Error toasts are sticky until dismissed or replaced.
    #[inline]
    pub fn show_error(
        &mut self,
        title: impl Into<CompactString>,
        message: impl Into<CompactString>,
    ) {
        self.show_notification(title, message, NotificationLevel::Error, None);
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Auto-dismiss an expired notification. Returns true when one was
    /// removed so the caller can request a redraw.
    pub fn update_notification(&mut self) -> bool {
        if let Some(notification) = &self.notification
            && let Some(auto_dismiss) = notification.auto_dismiss
            && notification.timestamp.elapsed() > auto_dismiss
        {
            self.notification = None;
            return true;
        }
        false
    }

    // Photo prompt input management
    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    pub fn insert_input_char(&mut self, ch: char) {
        self.input.push(ch);
    }

    pub fn delete_input_char(&mut self) -> bool {
        self.input.pop().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_ring_wraps_both_ways() {
        let mut ui = UIState::new();
        assert_eq!(ui.focus, Focus::Field(FieldId::OwnerName));

        ui.focus_prev();
        assert_eq!(ui.focus, Focus::Submit);

        ui.focus_next();
        assert_eq!(ui.focus, Focus::Field(FieldId::OwnerName));

        for _ in 0..FOCUS_RING.len() {
            ui.focus_next();
        }
        assert_eq!(ui.focus, Focus::Field(FieldId::OwnerName));
    }

    #[test]
    fn custom_type_sits_after_other_reg_no() {
        let mut ui = UIState::new();
        ui.focus = Focus::SlotRegNo(VehicleKind::Other);
        ui.focus_next();
        assert_eq!(ui.focus, Focus::SlotCustomType);
    }

    #[test]
    fn expired_notification_is_dismissed() {
        let mut ui = UIState::new();
        ui.show_notification(
            "Saved",
            "done",
            NotificationLevel::Info,
            Some(Duration::from_millis(0)),
        );
        std::thread::sleep(Duration::from_millis(5));
        assert!(ui.update_notification());
        assert!(ui.notification.is_none());
    }

    #[test]
    fn error_notification_is_sticky() {
        let mut ui = UIState::new();
        ui.show_error("Validation failed", "Missing required field: owner name");
        assert!(!ui.update_notification());
        assert!(ui.notification.is_some());

        ui.dismiss_notification();
        assert!(ui.notification.is_none());
    }

    #[test]
    fn prompt_input_editing() {
        let mut ui = UIState::new();
        for ch in "/tmp/a.png".chars() {
            ui.insert_input_char(ch);
        }
        assert_eq!(ui.input, "/tmp/a.png");
        assert!(ui.delete_input_char());
        assert_eq!(ui.input, "/tmp/a.pn");
        ui.clear_input();
        assert!(!ui.delete_input_char());
    }
}
