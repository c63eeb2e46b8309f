//! src/controller/keymap.rs
//! ============================================================================
//! # Keymap: Terminal Key Events to Actions
//!
//! Stateless mapping from a key press to an [`Action`], resolved against the
//! current application state: characters go to the focused input while
//! editing, overlays capture Enter/Esc, and the success view repurposes
//! Enter for launching the simulator.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::controller::actions::Action;
use crate::model::app_state::{AppState, FormPhase};
use crate::model::registration::{FieldId, Gender};
use crate::model::ui_state::{Focus, UIOverlay};

/// Resolve a key event to an action, or `None` when the key is inert.
pub fn action_for(app: &AppState, key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global chords work in every phase and overlay.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => return Some(Action::Quit),
            KeyCode::Char('h') => return Some(Action::ToggleHelp),
            _ => {}
        }
    }
    if key.code == KeyCode::F(1) {
        return Some(Action::ToggleHelp);
    }

    match app.ui.overlay {
        UIOverlay::Help => {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char(_) => Some(Action::CloseOverlay),
                _ => None,
            };
        }
        UIOverlay::PhotoPrompt => {
            return match key.code {
                KeyCode::Enter => Some(Action::ConfirmPhotoPrompt),
                KeyCode::Esc => Some(Action::CloseOverlay),
                KeyCode::Backspace => Some(Action::Backspace),
                KeyCode::Char(ch) => Some(Action::InsertChar(ch)),
                _ => None,
            };
        }
        UIOverlay::None => {}
    }

    match app.phase {
        FormPhase::Success => match key.code {
            KeyCode::Enter | KeyCode::Char('l') => Some(Action::LaunchSimulation),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        },
        // Submitting is non-interactive apart from quitting.
        FormPhase::Submitting => match key.code {
            KeyCode::Esc => Some(Action::DismissNotification),
            _ => None,
        },
        FormPhase::Editing => match key.code {
            KeyCode::Tab | KeyCode::Down => Some(Action::FocusNext),
            KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrev),
            KeyCode::Left => Some(Action::CycleChoice(-1)),
            KeyCode::Right => Some(Action::CycleChoice(1)),
            // Enter and Space activate the focused control; in a text
            // field, Enter moves on and Space types.
            KeyCode::Enter => Some(activate(app).unwrap_or(Action::FocusNext)),
            KeyCode::Char(' ') => Some(activate(app).unwrap_or(Action::InsertChar(' '))),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Esc => Some(Action::DismissNotification),
            KeyCode::Char(ch) if app.ui.focus == Focus::Field(FieldId::Gender) => {
                gender_shortcut(ch)
            }
            KeyCode::Char(ch) => Some(Action::InsertChar(ch)),
            _ => None,
        },
    }
}

/// Semantic action for the focused control, or `None` for text inputs.
fn activate(app: &AppState) -> Option<Action> {
    match app.ui.focus {
        Focus::Slot(kind) => Some(Action::ToggleSlot(kind)),
        Focus::Photo => Some(Action::OpenPhotoPrompt),
        Focus::Submit => Some(Action::Submit),
        _ => None,
    }
}

/// With the gender selector focused, m/f/o pick a value directly.
fn gender_shortcut(ch: char) -> Option<Action> {
    match ch.to_ascii_lowercase() {
        'm' => Some(Action::SelectGender(Gender::Male)),
        'f' => Some(Action::SelectGender(Gender::Female)),
        'o' => Some(Action::SelectGender(Gender::Other)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::model::registration::VehicleKind;
    use crate::sink::TracingSink;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    fn state() -> AppState {
        let (tx, rx) = mpsc::unbounded_channel();
        // These tests never dispatch tasks, so the receiver can leak.
        Box::leak(Box::new(rx));
        AppState::new(Arc::new(Config::default()), Arc::new(TracingSink), tx)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn chars_type_into_text_fields() {
        let app = state();
        assert_eq!(
            action_for(&app, press(KeyCode::Char('a'))),
            Some(Action::InsertChar('a'))
        );
    }

    #[test]
    fn space_toggles_checkboxes_but_types_in_text() {
        let mut app = state();
        app.ui.focus = Focus::Slot(VehicleKind::TwoWheeler);
        assert_eq!(
            action_for(&app, press(KeyCode::Char(' '))),
            Some(Action::ToggleSlot(VehicleKind::TwoWheeler))
        );

        app.ui.focus = Focus::Field(FieldId::OwnerName);
        assert_eq!(
            action_for(&app, press(KeyCode::Char(' '))),
            Some(Action::InsertChar(' '))
        );
    }

    #[test]
    fn enter_resolves_by_focus() {
        let mut app = state();
        app.ui.focus = Focus::Submit;
        assert_eq!(action_for(&app, press(KeyCode::Enter)), Some(Action::Submit));

        app.ui.focus = Focus::Photo;
        assert_eq!(
            action_for(&app, press(KeyCode::Enter)),
            Some(Action::OpenPhotoPrompt)
        );

        // In a text field Enter just moves focus along.
        app.ui.focus = Focus::Field(FieldId::City);
        assert_eq!(action_for(&app, press(KeyCode::Enter)), Some(Action::FocusNext));
    }

    #[test]
    fn gender_shortcuts_on_focused_selector() {
        let mut app = state();
        app.ui.focus = Focus::Field(FieldId::Gender);
        assert_eq!(
            action_for(&app, press(KeyCode::Char('f'))),
            Some(Action::SelectGender(Gender::Female))
        );
        assert_eq!(action_for(&app, press(KeyCode::Char('z'))), None);
    }

    #[test]
    fn success_view_repurposes_enter() {
        let mut app = state();
        app.phase = FormPhase::Success;
        assert_eq!(
            action_for(&app, press(KeyCode::Enter)),
            Some(Action::LaunchSimulation)
        );
        assert_eq!(action_for(&app, press(KeyCode::Char('q'))), Some(Action::Quit));
    }

    #[test]
    fn submitting_ignores_editing_keys() {
        let mut app = state();
        app.phase = FormPhase::Submitting;
        assert_eq!(action_for(&app, press(KeyCode::Enter)), None);
        assert_eq!(action_for(&app, press(KeyCode::Char('a'))), None);
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        let mut app = state();
        app.phase = FormPhase::Submitting;
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(&app, key), Some(Action::Quit));
    }

    #[test]
    fn photo_prompt_captures_text() {
        let mut app = state();
        app.ui.overlay = UIOverlay::PhotoPrompt;
        assert_eq!(
            action_for(&app, press(KeyCode::Char('x'))),
            Some(Action::InsertChar('x'))
        );
        assert_eq!(
            action_for(&app, press(KeyCode::Enter)),
            Some(Action::ConfirmPhotoPrompt)
        );
        assert_eq!(action_for(&app, press(KeyCode::Esc)), Some(Action::CloseOverlay));
    }
}
