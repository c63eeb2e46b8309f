//! src/error.rs
//! ============================================================================
//! # `AppError`: Unified Error Type for the Registration Form
//!
//! This module defines the comprehensive error enum (`AppError`) used across
//! the entire application. Each variant carries enough context for
//! diagnostics, and all major modules are expected to use
//! `Result<T, AppError>` for consistency. User-input problems live in
//! [`ValidationError`](crate::model::validate::ValidationError) and are
//! wrapped here so they can travel through the same channels.

use std::{io, path::PathBuf};
use thiserror::Error;

use crate::model::validate::ValidationError;

/// Unified error type for all registration form operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Standard IO error, auto-converted from `io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// Config file I/O error with path.
    #[error("Failed to read config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Serialization or deserialization error (e.g., JSON record emission).
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Draft failed a submit-time validation rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Profile picture file could not be read.
    #[error("Failed to read picture {path:?}: {source}")]
    PhotoRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Chosen file does not look like an image the form accepts.
    #[error("Unsupported image file: {0:?}")]
    UnsupportedImage(PathBuf),

    /// Simulator launcher process failed to start.
    #[error("Failed to launch '{cmd}': {reason}")]
    LauncherFailed { cmd: String, reason: String },

    /// Async task failure or join error.
    #[error("Async task failed: {0}")]
    Task(String),

    /// Terminal I/O or rendering error.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Any other error, with description.
    #[error("Unexpected error: {0}")]
    Other(String),
}

impl AppError {
    #[must_use]
    /// Attach extra context to an error.
    pub fn with_context<S: Into<String>>(self, ctx: S) -> Self {
        Self::Other(format!("{}: {}", ctx.into(), self))
    }

    /// Create a photo read failure error.
    pub fn photo_read<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::PhotoRead {
            path: path.into(),
            source,
        }
    }

    /// Create a launcher failure error.
    pub fn launcher_failed<S1: Into<String>, S2: Into<String>>(cmd: S1, reason: S2) -> Self {
        Self::LauncherFailed {
            cmd: cmd.into(),
            reason: reason.into(),
        }
    }
}

// Allow conversion from `anyhow::Error` as fallback.
impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        Self::Other(e.to_string())
    }
}
