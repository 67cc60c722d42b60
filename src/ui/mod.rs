// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one owns a `Message` enum and, where the parent needs to react, returns an
//! `Event` from its `update`.
//!
//! # Page
//!
//! - [`navbar`] - Brand, section links, theme toggle and hamburger menu
//! - [`page`] - Hero form, quick options and informational sections
//! - [`modal`] - Bulk, profile and ringtone dialogs
//! - [`notifications`] - Single-slot toast notifications
//!
//! # Shared Infrastructure
//!
//! - [`scroll`] - Section anchors and smooth scrolling
//! - [`styles`] - Centralized styling (buttons, containers, toasts)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark preference and its persistence

pub mod design_tokens;
pub mod modal;
pub mod navbar;
pub mod notifications;
pub mod page;
pub mod scroll;
pub mod styles;
pub mod theming;
