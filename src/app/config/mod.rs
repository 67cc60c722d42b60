// SPDX-License-Identifier: MPL-2.0
//! Loading and saving of user settings in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - UI language
//! - `[notifications]` - toast entry delay, transition and dwell times
//! - `[download]` - simulated processing delay
//!
//! Every field is optional; missing values fall back to [`defaults`].
//! The theme preference is not stored here: it lives in the local key-value
//! store (see [`crate::app::persisted_state`]).
//!
//! # Examples
//!
//! ```no_run
//! use tiksaver::app::config;
//!
//! let (config, warning) = config::load();
//! if warning.is_none() {
//!     println!("processing delay: {:?}", config.download.processing_delay());
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::notifications::ToastTiming;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "hi").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Toast notification timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enter_delay_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_ms: Option<u64>,

    /// Time from insertion until the toast starts leaving.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dwell_ms: Option<u64>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enter_delay_ms: Some(DEFAULT_TOAST_ENTER_DELAY_MS),
            transition_ms: Some(DEFAULT_TOAST_TRANSITION_MS),
            dwell_ms: Some(DEFAULT_TOAST_DWELL_MS),
        }
    }
}

impl NotificationConfig {
    /// Builds toast timing from the configured values, clamped to sane bounds.
    #[must_use]
    pub fn timing(&self) -> ToastTiming {
        let clamp = |value: Option<u64>, default: u64| {
            Duration::from_millis(value.unwrap_or(default).min(MAX_TOAST_TIMING_MS))
        };

        let enter_delay = clamp(self.enter_delay_ms, DEFAULT_TOAST_ENTER_DELAY_MS);
        // A zero-length transition would divide by zero when computing progress.
        let transition = clamp(self.transition_ms, DEFAULT_TOAST_TRANSITION_MS)
            .max(Duration::from_millis(1));
        let dwell = clamp(self.dwell_ms, DEFAULT_TOAST_DWELL_MS).max(enter_delay + transition);

        ToastTiming {
            enter_delay,
            transition,
            dwell,
        }
    }
}

/// Simulated download settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DownloadConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_delay_ms: Option<u64>,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: Some(DEFAULT_PROCESSING_DELAY_MS),
        }
    }
}

impl DownloadConfig {
    /// Returns the processing delay, clamped to [`MAX_PROCESSING_DELAY_MS`].
    #[must_use]
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(
            self.processing_delay_ms
                .unwrap_or(DEFAULT_PROCESSING_DELAY_MS)
                .min(MAX_PROCESSING_DELAY_MS),
        )
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub notifications: NotificationConfig,

    #[serde(default)]
    pub download: DownloadConfig,
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };

    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            log::warn!("Ignoring unreadable config {}: {err}", path.display());
            (
                Config::default(),
                Some("notification-config-load-error".to_string()),
            )
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}
