// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations use the Fluent localization system. Two locales are bundled
//! into the binary: `en-US` (default) and `hi`.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, or system settings
//! - Embedded `.ftl` translation files
//! - Runtime language switching
//! - Visible `MISSING: <key>` marker for untranslated keys

pub mod fluent;
