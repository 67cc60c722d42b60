// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme preference.
//!
//! The preference is read once from local storage at startup, flipped by the
//! navbar toggle and written back on every change.

use crate::app::persisted_state::{LocalStorage, THEME_KEY};
use iced::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Parses a stored value. Anything other than `"dark"` is light.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => ThemePreference::Dark,
            _ => ThemePreference::Light,
        }
    }

    /// Reads the preference from `storage`, defaulting to light.
    #[must_use]
    pub fn load(storage: &LocalStorage) -> Self {
        Self::from_stored(storage.get(THEME_KEY))
    }

    /// Writes the preference to `storage`.
    ///
    /// Returns an i18n warning key if the write failed.
    pub fn persist(self, storage: &mut LocalStorage) -> Option<String> {
        storage.set(THEME_KEY, self.as_str())
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Toggle glyph: moon offers dark mode, sun offers light mode.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            ThemePreference::Light => "🌙",
            ThemePreference::Dark => "☀️",
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        match self {
            ThemePreference::Light => Theme::Light,
            ThemePreference::Dark => Theme::Dark,
        }
    }
}

/// Flips the preference, persists it and returns a warning key on write failure.
pub fn toggle(preference: &mut ThemePreference, storage: &mut LocalStorage) -> Option<String> {
    *preference = preference.toggled();
    log::info!("Theme switched to {}", preference.as_str());
    preference.persist(storage)
}
