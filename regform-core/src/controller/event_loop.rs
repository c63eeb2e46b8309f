//! src/controller/event_loop.rs
//! ============================================================================
//! # Controller: Async Event Loop
//!
//! The Controller merges three event sources into a single ordered stream of
//! [`Action`]s: terminal input (crossterm's `EventStream`), actions posted
//! back by background tasks over the mpsc channel, and a periodic tick for
//! toast expiry. Each action is dispatched to completion against the shared
//! `AppState` before the next is taken, which is the entire concurrency
//! discipline this application needs.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event as TermEvent, EventStream};
use futures::StreamExt;
use tokio::sync::{Mutex, MutexGuard, mpsc};
use tokio::time::{Interval, interval};
use tracing::{debug, warn};

use crate::controller::actions::Action;
use crate::controller::keymap;
use crate::model::app_state::AppState;

const TICK_INTERVAL: Duration = Duration::from_millis(200);

pub struct Controller {
    pub app: Arc<Mutex<AppState>>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    events: EventStream,
    tick: Interval,
}

impl Controller {
    pub fn new(app: Arc<Mutex<AppState>>, action_rx: mpsc::UnboundedReceiver<Action>) -> Self {
        Self {
            app,
            action_rx,
            events: EventStream::new(),
            tick: interval(TICK_INTERVAL),
        }
    }

    /// Wait for the next action from any source. Returns `None` when every
    /// source has ended (in practice: the terminal stream closed).
    pub async fn next_action(&mut self) -> Option<Action> {
        loop {
            tokio::select! {
                maybe_event = self.events.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if let Some(action) = self.map_terminal_event(event).await {
                                return Some(action);
                            }
                            // Inert event; keep waiting.
                        }
                        Some(Err(e)) => {
                            warn!("Terminal event stream error: {e}");
                        }
                        None => return None,
                    }
                }

                maybe_action = self.action_rx.recv() => {
                    match maybe_action {
                        Some(action) => return Some(action),
                        // All senders dropped; tasks can no longer post.
                        None => return None,
                    }
                }

                _ = self.tick.tick() => {
                    return Some(Action::Tick);
                }
            }
        }
    }

    /// Receive only task-posted actions, bypassing the terminal stream
    /// (which has no tty under test).
    #[cfg(test)]
    pub(crate) async fn recv_posted(&mut self) -> Option<Action> {
        self.action_rx.recv().await
    }

    /// Resolve a raw terminal event against the current state.
    async fn map_terminal_event(&self, event: TermEvent) -> Option<Action> {
        match event {
            TermEvent::Key(key) => {
                let app: MutexGuard<'_, AppState> = self.app.lock().await;
                keymap::action_for(&app, key)
            }
            TermEvent::Resize(w, h) => Some(Action::Resize(w, h)),
            _ => None,
        }
    }

    /// Apply one action to the shared state.
    pub async fn dispatch(&self, action: Action) {
        debug!(?action, "Dispatching action");
        let mut app: MutexGuard<'_, AppState> = self.app.lock().await;

        match action {
            // Quit is handled by the main loop before dispatch.
            Action::Quit => {}
            Action::Resize(_, _) => app.redraw = true,
            Action::Tick => app.tick(),

            Action::FocusNext => {
                app.ui.focus_next();
                app.redraw = true;
            }
            Action::FocusPrev => {
                app.ui.focus_prev();
                app.redraw = true;
            }
            Action::InsertChar(ch) => app.insert_char(ch),
            Action::Backspace => app.backspace(),
            Action::CycleChoice(step) => app.cycle_choice(step),

            Action::SelectGender(gender) => app.select_gender(gender),
            Action::ToggleSlot(kind) => app.toggle_slot(kind),

            Action::OpenPhotoPrompt => app.open_photo_prompt(),
            Action::ConfirmPhotoPrompt => app.confirm_photo_prompt(),
            Action::PhotoLoaded { data_url } => app.photo_loaded(data_url),

            Action::Submit => app.submit(),
            Action::SubmissionComplete { id } => app.submission_complete(id),
            Action::LaunchSimulation => app.launch_simulation(),

            Action::ToggleHelp => app.toggle_help(),
            Action::CloseOverlay => app.close_overlay(),
            Action::DismissNotification => app.dismiss_notification(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::model::app_state::FormPhase;
    use crate::model::registration::{FieldId, Gender, RegionState, VehicleKind};
    use crate::model::ui_state::Focus;
    use crate::sink::TracingSink;

    fn controller() -> (Controller, mpsc::UnboundedSender<Action>) {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let state = AppState::new(
            Arc::new(Config::default()),
            Arc::new(TracingSink),
            action_tx.clone(),
        );
        (Controller::new(Arc::new(Mutex::new(state)), action_rx), action_tx)
    }

    #[tokio::test]
    async fn dispatch_routes_field_edits() {
        let (controller, _tx) = controller();

        controller.dispatch(Action::InsertChar('A')).await;
        controller.dispatch(Action::FocusNext).await;
        controller.dispatch(Action::InsertChar('9')).await;

        let app = controller.app.lock().await;
        assert_eq!(app.draft.owner_name, "A");
        assert_eq!(app.draft.phone, "9");
    }

    #[tokio::test]
    async fn task_actions_flow_through_the_channel() {
        let (mut controller, tx) = controller();

        tx.send(Action::PhotoLoaded {
            data_url: "data:image/png;base64,AAAA".into(),
        })
        .unwrap();

        let action = controller.recv_posted().await.unwrap();
        controller.dispatch(action).await;

        let app = controller.app.lock().await;
        assert_eq!(app.draft.photo.as_deref(), Some("data:image/png;base64,AAAA"));
    }

    #[tokio::test]
    async fn full_submission_flow_reaches_success() {
        let (mut controller, _tx) = controller();

        {
            let mut app = controller.app.lock().await;
            app.draft.owner_name = "Asha Rao".into();
            app.draft.phone = "9876543210".into();
            app.draft.age = "29".into();
            app.draft.city = "Hyderabad".into();
            app.draft.gender = Some(Gender::Female);
            app.draft.state = Some(RegionState::Telangana);
            app.ui.focus = Focus::Field(FieldId::OwnerName);
            let bike = app.draft.slot_mut(VehicleKind::TwoWheeler);
            bike.selected = true;
            bike.reg_no = "TS09AB1234".into();
        }

        controller.dispatch(Action::Submit).await;
        assert_eq!(controller.app.lock().await.phase, FormPhase::Submitting);

        // The timer task posts completion through the action channel.
        let action = controller.recv_posted().await.unwrap();
        assert!(matches!(action, Action::SubmissionComplete { .. }));
        controller.dispatch(action).await;

        assert_eq!(controller.app.lock().await.phase, FormPhase::Success);
    }
}
