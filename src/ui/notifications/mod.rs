// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for user feedback.
//!
//! A single toast slides in from the right edge, dwells, then slides out and
//! removes itself. Its background color is keyed by [`Severity`].
//!
//! # Components
//!
//! - [`notification`] - `Notification` struct and severity levels
//! - [`manager`] - single-slot `Manager` with clock-driven lifecycle
//! - [`toast`] - toast overlay rendering
//!
//! # Usage
//!
//! ```
//! use tiksaver::ui::notifications::{Manager, Severity};
//!
//! let mut manager = Manager::new();
//! manager.notify("notification-processing", Severity::Info);
//! manager.notify("notification-ready", Severity::Success);
//!
//! // Latest wins.
//! assert_eq!(manager.visible_count(), 1);
//! ```

mod manager;
mod notification;
mod toast;

pub(crate) use manager::ease_in_out;
pub use manager::{Manager, Message as NotificationMessage, Phase, ToastTiming};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
