pub mod error;

pub mod config;

pub mod controller {
    pub mod actions;
    pub use actions::Action;

    pub mod event_loop;
    pub use event_loop::Controller;

    pub mod keymap;
}

pub mod model {
    pub mod app_state;
    pub use app_state::{AppState, FormPhase};

    pub mod registration;
    pub use registration::{
        FieldId, Gender, RegionState, RegistrationDraft, RegistrationRecord, SlotState,
        VehicleEntry, VehicleKind,
    };

    pub mod validate;
    pub use validate::ValidationError;

    pub mod ui_state;
    pub use ui_state::{Focus, Notification, NotificationLevel, UIOverlay, UIState};
}

pub mod view {
    pub mod theme;

    pub mod ui;
    pub use ui::View;

    pub mod components {
        pub mod form_panel;
        pub use form_panel::FormPanel;
        pub mod help_overlay;
        pub use help_overlay::HelpOverlay;
        pub mod notification_overlay;
        pub use notification_overlay::NotificationOverlay;
        pub mod photo_prompt;
        pub use photo_prompt::PhotoPrompt;
        pub mod status_bar;
        pub use status_bar::StatusBar;
        pub mod success_screen;
        pub use success_screen::SuccessScreen;
        pub mod vehicle_panel;
        pub use vehicle_panel::VehiclePanel;
    }

    pub use components::*;
}

pub mod tasks {
    pub mod photo_task;
    pub mod submit_task;
}

pub mod sink;
pub use sink::{SubmissionSink, TracingSink};

pub mod logging;
pub use logging::Logger;

pub use error::AppError;

pub use model::{app_state::AppState, registration::RegistrationDraft, ui_state::UIState};
