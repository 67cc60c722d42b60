// SPDX-License-Identifier: MPL-2.0
//! Style tables for all UI components.
//!
//! Visual constants live in [`crate::ui::design_tokens`]; the functions here
//! map them onto Iced widget styles for the active theme.

pub mod button;
pub mod container;
pub mod modal;
pub mod severity;
pub mod slider;
pub mod toast;
