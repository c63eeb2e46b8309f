//! src/config.rs
//! ============================================================================
//! # Config: Application Configuration Loader and Saver
//!
//! Manages the user-editable settings for the registration form. Loads and
//! saves settings as TOML from the proper cross-platform config path using
//! the [`directories`](https://docs.rs/directories) crate.
//!
//! - XDG-compliant config discovery and writing (Linux, macOS, Windows)
//! - Robust defaulting if no config file exists
//! - Async load/save for smooth integration with Tokio

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use tokio::fs as TokioFs;

/// App theme (color scheme) selector.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,

    Light,

    Dark,

    Custom(String),
}

/// Settings for the simulated submission round-trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitConfig {
    /// Fixed delay between a valid submit and the success view.
    #[serde(with = "humantime_serde")]
    pub delay: Duration,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(1500),
        }
    }
}

/// How to reach the external digital-twin simulator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Fixed external destination; no parameters are passed.
    pub url: String,

    /// Command used to open the URL in a new browsing context.
    pub launcher_cmd: String,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            url: "https://traffic-twin.example.org/simulation".to_owned(),
            launcher_cmd: default_launcher(),
        }
    }
}

fn default_launcher() -> String {
    if cfg!(target_os = "macos") {
        "open".to_owned()
    } else if cfg!(target_os = "windows") {
        "explorer".to_owned()
    } else {
        "xdg-open".to_owned()
    }
}

/// Main configuration struct for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub theme: Theme,

    #[serde(default)]
    pub submit: SubmitConfig,

    #[serde(default)]
    pub simulator: SimulatorConfig,
}

impl Config {
    /// Loads config from TOML file at the XDG-compliant app config dir, or
    /// returns defaults (writing them out for next time).
    pub async fn load() -> anyhow::Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            info!("Loading config from {}", path.display());
            let text = TokioFs::read_to_string(&path).await?;
            let cfg: Self = toml::from_str(&text)?;

            Ok(cfg)
        } else {
            info!(
                "No config file found at {}, using default configuration. Creating it now.",
                path.display()
            );

            let default_config = Self::default();
            default_config.save().await?;

            Ok(default_config)
        }
    }

    /// Saves config to TOML file at the XDG-compliant app config dir.
    pub async fn save(&self) -> anyhow::Result<()> {
        let path = Self::config_path()?;

        info!("Saving config to {}", path.display());

        if let Some(parent) = path.parent() {
            TokioFs::create_dir_all(parent).await?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        TokioFs::write(&path, toml_str).await?;

        Ok(())
    }

    /// Returns the canonical config file path using `directories::ProjectDirs`.
    pub fn config_path() -> anyhow::Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("org", "example", "RegForm")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory."))?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}
