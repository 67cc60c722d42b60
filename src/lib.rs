// SPDX-License-Identifier: MPL-2.0
//! `tiksaver` is a bilingual front-end for a TikTok video downloader built with
//! the Iced GUI framework.
//!
//! The download itself is simulated: a valid link is acknowledged, held in a
//! processing state for a configurable delay, then reported as complete. The
//! crate also covers URL validation, toast notifications, modal dialogs, a
//! persisted Light/Dark theme and Fluent-based localization.

pub mod app;
pub mod download;
pub mod error;
pub mod i18n;
pub mod ui;
