//! src/controller/actions.rs
//! ============================================================================
//! # Actions: Centralized Application Commands
//!
//! Defines the `Action` enum, which represents all user-triggered form
//! operations and internal events the application responds to. Raw terminal
//! events are mapped into these by [`crate::controller::keymap`]; background
//! tasks post their completions through the same channel.

use uuid::Uuid;

use crate::model::registration::{Gender, VehicleKind};

/// High-level command the application can perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// A terminal resize event.
    Resize(u16, u16),
    /// Internal tick for periodic updates (toast expiry).
    Tick,

    /// Move focus forward through the tab ring.
    FocusNext,
    /// Move focus backwards through the tab ring.
    FocusPrev,
    /// Type a character into the focused input.
    InsertChar(char),
    /// Delete the last character of the focused input.
    Backspace,
    /// Cycle the focused choice field (+1 right, -1 left).
    CycleChoice(i8),

    /// Set the gender directly (exclusive choice).
    SelectGender(Gender),
    /// Flip one vehicle slot's selection.
    ToggleSlot(VehicleKind),

    /// Open the photo path prompt.
    OpenPhotoPrompt,
    /// Confirm the photo path prompt with its current buffer.
    ConfirmPhotoPrompt,
    /// A decode task produced the picture's data-URL.
    PhotoLoaded { data_url: String },

    /// Run validation and start the submission if it passes.
    Submit,
    /// The simulated-submission timer fired.
    SubmissionComplete { id: Uuid },
    /// Open the external simulator (success view only).
    LaunchSimulation,

    /// Toggle the help overlay.
    ToggleHelp,
    /// Close the active overlay.
    CloseOverlay,
    /// Dismiss the current toast.
    DismissNotification,
}
