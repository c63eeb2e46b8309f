//! src/model/app_state.rs
//! ============================================================================
//! # AppState: Registration Form Application State
//!
//! `AppState` unifies everything one form-filling session owns: the mutable
//! [`RegistrationDraft`], the [`UIState`], the form phase state machine
//! (Editing -> Submitting -> Success), the channel background tasks use to
//! post actions back, and the submission sink handle.
//!
//! Every mutation happens here, one action at a time, driven by the
//! controller. Field updates never validate; the full rule set runs once at
//! submit and surfaces exactly one error per attempt.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::controller::actions::Action;
use crate::model::registration::{FieldId, Gender, RegistrationDraft, VehicleKind};
use crate::model::ui_state::{Focus, UIOverlay, UIState};
use crate::model::validate;
use crate::sink::SubmissionSink;
use crate::tasks::{photo_task, submit_task};

/// View-level state machine. Editing is initial; failed validation stays in
/// Editing; Success is terminal apart from launching the simulator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    /// Submission timer running; the submit control is disabled.
    Submitting,
    Success,
}

/// Core application state for the registration form.
pub struct AppState {
    pub config: Arc<Config>,
    pub draft: RegistrationDraft,
    pub ui: UIState,
    pub phase: FormPhase,
    pub action_tx: mpsc::UnboundedSender<Action>,
    pub sink: Arc<dyn SubmissionSink>,
    pub redraw: bool,
    /// Id of the emitted record, shown on the success screen.
    pub submitted: Option<Uuid>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        sink: Arc<dyn SubmissionSink>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> Self {
        Self {
            config,
            draft: RegistrationDraft::default(),
            ui: UIState::new(),
            phase: FormPhase::Editing,
            action_tx,
            sink,
            redraw: true,
            submitted: None,
            started_at: Instant::now(),
        }
    }

    const fn editing(&self) -> bool {
        matches!(self.phase, FormPhase::Editing)
    }

    /// Route a typed character into the focused input. The age field only
    /// admits digits and the phone field digits plus common separators,
    /// mirroring the declared input types of the original form.
    pub fn insert_char(&mut self, ch: char) {
        if !self.editing() {
            return;
        }

        if self.ui.overlay == UIOverlay::PhotoPrompt {
            self.ui.insert_input_char(ch);
            self.redraw = true;
            return;
        }

        let accepted = match self.ui.focus {
            Focus::Field(FieldId::OwnerName) => push_char(&mut self.draft.owner_name, ch, 64),
            Focus::Field(FieldId::Phone) => {
                (ch.is_ascii_digit() || "+- ()".contains(ch))
                    && push_char(&mut self.draft.phone, ch, 16)
            }
            Focus::Field(FieldId::Age) => {
                ch.is_ascii_digit() && push_char(&mut self.draft.age, ch, 3)
            }
            Focus::Field(FieldId::City) => push_char(&mut self.draft.city, ch, 64),
            Focus::Field(FieldId::Email) => push_char(&mut self.draft.email, ch, 128),
            Focus::SlotRegNo(kind) => {
                push_char(&mut self.draft.slot_mut(kind).reg_no, ch.to_ascii_uppercase(), 16)
            }
            Focus::SlotCustomType => {
                push_char(&mut self.draft.slot_mut(VehicleKind::Other).custom_type, ch, 32)
            }
            // Choice fields and buttons ignore typed characters.
            _ => false,
        };

        if accepted {
            self.redraw = true;
        }
    }

    /// Delete the last character of the focused input.
    pub fn backspace(&mut self) {
        if !self.editing() {
            return;
        }

        if self.ui.overlay == UIOverlay::PhotoPrompt {
            if self.ui.delete_input_char() {
                self.redraw = true;
            }
            return;
        }

        let removed = match self.ui.focus {
            Focus::Field(FieldId::OwnerName) => self.draft.owner_name.pop().is_some(),
            Focus::Field(FieldId::Phone) => self.draft.phone.pop().is_some(),
            Focus::Field(FieldId::Age) => self.draft.age.pop().is_some(),
            Focus::Field(FieldId::City) => self.draft.city.pop().is_some(),
            Focus::Field(FieldId::Email) => self.draft.email.pop().is_some(),
            Focus::SlotRegNo(kind) => self.draft.slot_mut(kind).reg_no.pop().is_some(),
            Focus::SlotCustomType => self
                .draft
                .slot_mut(VehicleKind::Other)
                .custom_type
                .pop()
                .is_some(),
            _ => false,
        };

        if removed {
            self.redraw = true;
        }
    }

    /// Cycle the focused choice field. `step` is +1 (right) or -1 (left).
    /// Optional choices cycle through an explicit "none" position; the
    /// mandatory ones only move between real values.
    pub fn cycle_choice(&mut self, step: i8) {
        if !self.editing() {
            return;
        }

        match self.ui.focus {
            Focus::Field(FieldId::Gender) => {
                let next = cycled(&Gender::ALL, self.draft.gender, step);
                // Exclusive choice: replaces any previous selection.
                if let Some(g) = next {
                    self.draft.select_gender(g);
                }
            }
            Focus::Field(FieldId::State) => {
                self.draft.state = cycled(
                    &crate::model::registration::RegionState::ALL,
                    self.draft.state,
                    step,
                );
            }
            Focus::Field(FieldId::Experience) => {
                self.draft.experience = cycled_optional(
                    &crate::model::registration::ExperienceBucket::ALL,
                    self.draft.experience,
                    step,
                );
            }
            Focus::Field(FieldId::RoutePreference) => {
                self.draft.route_preference = cycled_optional(
                    &crate::model::registration::RoutePreference::ALL,
                    self.draft.route_preference,
                    step,
                );
            }
            _ => return,
        }
        self.redraw = true;
    }

    pub fn select_gender(&mut self, gender: Gender) {
        if !self.editing() {
            return;
        }
        self.draft.select_gender(gender);
        self.redraw = true;
    }

    pub fn toggle_slot(&mut self, kind: VehicleKind) {
        if !self.editing() {
            return;
        }
        self.draft.toggle_slot(kind);
        self.redraw = true;
    }

    pub fn toggle_help(&mut self) {
        self.ui.overlay = match self.ui.overlay {
            UIOverlay::Help => UIOverlay::None,
            _ => UIOverlay::Help,
        };
        self.redraw = true;
    }

    pub fn open_photo_prompt(&mut self) {
        if !self.editing() {
            return;
        }
        self.ui.overlay = UIOverlay::PhotoPrompt;
        self.ui.clear_input();
        self.redraw = true;
    }

    pub fn close_overlay(&mut self) {
        self.ui.overlay = UIOverlay::None;
        self.redraw = true;
    }

    /// Confirm the photo path prompt. An empty path means no file was
    /// chosen and nothing changes; an unsupported extension is rejected the
    /// way the browser's image filter would; otherwise the decode task is
    /// spawned and will post `PhotoLoaded` when done.
    pub fn confirm_photo_prompt(&mut self) {
        let path = self.ui.input.trim().to_owned();
        self.close_overlay();

        if path.is_empty() {
            return;
        }

        let path = PathBuf::from(path);
        if !photo_task::is_supported_image(&path) {
            warn!("Rejected non-image file: {}", path.display());
            self.ui
                .show_error("Unsupported file", "Choose a PNG, JPEG, GIF, WebP, or BMP image");
            return;
        }

        info!("Loading profile picture from {}", path.display());
        photo_task::spawn_photo_decode(path, self.action_tx.clone());
    }

    /// A decode task finished; replace any previously held picture.
    pub fn photo_loaded(&mut self, data_url: String) {
        self.draft.photo = Some(data_url);
        self.ui
            .show_info("Profile picture", "Picture attached to the registration");
        self.redraw = true;
    }

    /// Run validation and, on success, build and emit the record, then
    /// start the simulated-submission timer. While the timer runs the
    /// phase guard makes further submits no-ops, so a record is emitted at
    /// most once per session.
    pub fn submit(&mut self) {
        if !self.editing() {
            return;
        }

        let record = match validate::build_record(&self.draft, Utc::now()) {
            Ok(record) => record,
            Err(e) => {
                info!("Submit rejected: {e}");
                self.ui.show_error("Validation failed", e.to_string());
                self.redraw = true;
                return;
            }
        };

        if let Err(e) = self.sink.emit(&record) {
            // The simulated submission itself always succeeds; a sink
            // failure is diagnostic only.
            error!("Submission sink error: {e}");
        }

        info!(record_id = %record.id, "Registration accepted, starting submission timer");
        self.phase = FormPhase::Submitting;
        self.submitted = Some(record.id);
        submit_task::spawn_submission_timer(
            record.id,
            self.config.submit.delay,
            self.action_tx.clone(),
        );
        self.redraw = true;
    }

    /// The submission timer fired; enter the terminal success view.
    pub fn submission_complete(&mut self, id: Uuid) {
        if self.phase != FormPhase::Submitting {
            return;
        }
        info!(record_id = %id, "Submission complete");
        self.phase = FormPhase::Success;
        self.ui.show_success(
            "Registration complete",
            "Your vehicle registration has been recorded",
        );
        self.redraw = true;
    }

    /// Open the external simulator in a new browsing context. Only
    /// reachable from the success view; nothing is passed and no response
    /// is awaited.
    pub fn launch_simulation(&mut self) {
        if self.phase != FormPhase::Success {
            return;
        }

        let cmd = &self.config.simulator.launcher_cmd;
        let url = &self.config.simulator.url;
        match tokio::process::Command::new(cmd).arg(url).spawn() {
            Ok(_) => {
                info!("Launched simulator: {cmd} {url}");
                self.ui.show_info("Simulation", "Opening the traffic simulator");
            }
            Err(e) => {
                error!("Failed to launch simulator via '{cmd}': {e}");
                self.ui
                    .show_error("Launch failed", format!("Could not run '{cmd}': {e}"));
            }
        }
        self.redraw = true;
    }

    pub fn dismiss_notification(&mut self) {
        self.ui.dismiss_notification();
        self.redraw = true;
    }

    /// Periodic tick: expire the toast when its deadline passes.
    pub fn tick(&mut self) {
        if self.ui.update_notification() {
            self.redraw = true;
        }
    }
}

/// Append a character, refusing growth past `max` characters.
fn push_char(buf: &mut String, ch: char, max: usize) -> bool {
    if buf.chars().count() >= max {
        return false;
    }
    buf.push(ch);
    true
}

/// Next value in `all` relative to `current`, wrapping; `None` starts at
/// the first (or last, stepping backwards) value.
fn cycled<T: Copy + PartialEq>(all: &[T], current: Option<T>, step: i8) -> Option<T> {
    let len = all.len();
    let next = match current.and_then(|c| all.iter().position(|v| *v == c)) {
        Some(pos) => (pos + len).wrapping_add_signed(step as isize) % len,
        None if step >= 0 => 0,
        None => len - 1,
    };
    Some(all[next])
}

/// Like [`cycled`] but with an explicit "none" position so optional
/// choices can be cleared again by cycling.
fn cycled_optional<T: Copy + PartialEq>(all: &[T], current: Option<T>, step: i8) -> Option<T> {
    let len = all.len() + 1; // position 0 is "none"
    let pos = current
        .and_then(|c| all.iter().position(|v| *v == c))
        .map_or(0, |p| p + 1);
    let next = (pos + len).wrapping_add_signed(step as isize) % len;
    if next == 0 { None } else { Some(all[next - 1]) }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &"Config")
            .field("draft", &self.draft)
            .field("ui", &self.ui)
            .field("phase", &self.phase)
            .field("submitted", &self.submitted)
            .field("redraw", &self.redraw)
            .field("started_at", &self.started_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::registration::{RegionState, RegistrationRecord};
    use std::sync::Mutex;

    /// Sink that captures every emitted record for assertions.
    #[derive(Default)]
    struct CapturingSink {
        records: Mutex<Vec<RegistrationRecord>>,
    }

    impl SubmissionSink for CapturingSink {
        fn emit(&self, record: &RegistrationRecord) -> Result<(), crate::AppError> {
            self.records.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    fn test_state() -> (AppState, Arc<CapturingSink>, mpsc::UnboundedReceiver<Action>) {
        let sink = Arc::new(CapturingSink::default());
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let state = AppState::new(Arc::new(Config::default()), sink.clone(), action_tx);
        (state, sink, action_rx)
    }

    fn fill_valid(state: &mut AppState) {
        state.draft.owner_name = "Asha Rao".into();
        state.draft.phone = "9876543210".into();
        state.draft.age = "29".into();
        state.draft.city = "Hyderabad".into();
        state.draft.gender = Some(Gender::Female);
        state.draft.state = Some(RegionState::Telangana);
        let bike = state.draft.slot_mut(VehicleKind::TwoWheeler);
        bike.selected = true;
        bike.reg_no = "TS09AB1234".into();
    }

    #[tokio::test]
    async fn failed_validation_stays_in_editing() {
        let (mut state, sink, _rx) = test_state();
        state.submit();

        assert_eq!(state.phase, FormPhase::Editing);
        assert!(sink.records.lock().unwrap().is_empty());
        let toast = state.ui.notification.as_ref().unwrap();
        assert_eq!(toast.level, crate::model::ui_state::NotificationLevel::Error);
        assert!(toast.message.contains("owner name"));
    }

    #[tokio::test]
    async fn valid_submit_emits_once_and_enters_submitting() {
        let (mut state, sink, _rx) = test_state();
        fill_valid(&mut state);

        state.submit();
        assert_eq!(state.phase, FormPhase::Submitting);

        // Second click while Submitting: guarded, nothing emitted again.
        state.submit();
        assert_eq!(sink.records.lock().unwrap().len(), 1);

        let records = sink.records.lock().unwrap();
        assert_eq!(records[0].personal_info.age, 29);
        assert_eq!(records[0].vehicles.len(), 1);
        assert_eq!(records[0].vehicles[0].reg_no, "TS09AB1234");
    }

    #[tokio::test]
    async fn submission_complete_reaches_success() {
        let (mut state, _sink, _rx) = test_state();
        fill_valid(&mut state);

        state.submit();
        let id = state.submitted.unwrap();
        state.submission_complete(id);

        assert_eq!(state.phase, FormPhase::Success);

        // Editing operations are inert once the form is submitted.
        state.insert_char('x');
        assert_eq!(state.draft.owner_name, "Asha Rao");
        state.submit();
        assert_eq!(state.phase, FormPhase::Success);
    }

    #[tokio::test]
    async fn stale_completion_is_ignored_in_editing() {
        let (mut state, _sink, _rx) = test_state();
        state.submission_complete(Uuid::new_v4());
        assert_eq!(state.phase, FormPhase::Editing);
    }

    #[tokio::test]
    async fn typed_input_routes_to_focused_field() {
        let (mut state, _sink, _rx) = test_state();

        state.ui.focus = Focus::Field(FieldId::Age);
        state.insert_char('2');
        state.insert_char('x'); // non-digit rejected
        state.insert_char('9');
        assert_eq!(state.draft.age, "29");

        state.ui.focus = Focus::SlotRegNo(VehicleKind::TwoWheeler);
        for ch in "ts09ab1234".chars() {
            state.insert_char(ch);
        }
        assert_eq!(state.draft.slot(VehicleKind::TwoWheeler).reg_no, "TS09AB1234");
        // Editing a slot field does not implicitly select the slot.
        assert!(!state.draft.slot(VehicleKind::TwoWheeler).selected);

        state.backspace();
        assert_eq!(state.draft.slot(VehicleKind::TwoWheeler).reg_no, "TS09AB123");
    }

    #[tokio::test]
    async fn gender_cycles_exclusively() {
        let (mut state, _sink, _rx) = test_state();
        state.ui.focus = Focus::Field(FieldId::Gender);

        state.cycle_choice(1);
        assert_eq!(state.draft.gender, Some(Gender::Male));
        state.cycle_choice(1);
        assert_eq!(state.draft.gender, Some(Gender::Female));
        state.cycle_choice(-1);
        assert_eq!(state.draft.gender, Some(Gender::Male));
    }

    #[tokio::test]
    async fn optional_choice_cycles_back_to_none() {
        let (mut state, _sink, _rx) = test_state();
        state.ui.focus = Focus::Field(FieldId::Experience);

        assert_eq!(state.draft.experience, None);
        state.cycle_choice(1);
        assert!(state.draft.experience.is_some());
        state.cycle_choice(-1);
        assert_eq!(state.draft.experience, None);
    }

    #[tokio::test]
    async fn empty_photo_prompt_changes_nothing() {
        let (mut state, _sink, _rx) = test_state();
        state.draft.photo = Some("data:image/png;base64,AAAA".into());

        state.open_photo_prompt();
        state.confirm_photo_prompt();

        assert_eq!(state.ui.overlay, UIOverlay::None);
        assert_eq!(
            state.draft.photo.as_deref(),
            Some("data:image/png;base64,AAAA")
        );
    }

    #[tokio::test]
    async fn photo_loaded_replaces_previous_picture() {
        let (mut state, _sink, _rx) = test_state();
        state.photo_loaded("data:image/png;base64,AAAA".into());
        state.photo_loaded("data:image/jpeg;base64,BBBB".into());
        assert_eq!(
            state.draft.photo.as_deref(),
            Some("data:image/jpeg;base64,BBBB")
        );
    }
}
