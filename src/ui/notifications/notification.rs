// SPDX-License-Identifier: MPL-2.0
//! A single toast: what it says, how it is coloured, and when it was raised.
//!
//! Text is stored as a Fluent key and resolved when the toast is drawn, so a
//! toast raised before a locale switch still renders in the current language.

use crate::ui::styles::severity;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one raised toast, used to ignore dismissals of a replaced one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    pub fn new() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Toast colour class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Processing started or an option was picked (blue).
    #[default]
    Info,
    /// The simulated download finished (green).
    Success,
    /// The pasted link was missing or not a TikTok URL (red).
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(&self) -> Color {
        severity::background(*self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    key: String,
    issued_at: Instant,
}

impl Notification {
    /// Raises a toast now with the text behind `key`.
    pub fn new(severity: Severity, key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            key: key.into(),
            issued_at: Instant::now(),
        }
    }

    pub fn info(key: impl Into<String>) -> Self {
        Self::new(Severity::Info, key)
    }

    pub fn success(key: impl Into<String>) -> Self {
        Self::new(Severity::Success, key)
    }

    pub fn error(key: impl Into<String>) -> Self {
        Self::new(Severity::Error, key)
    }

    /// Backdates or postpones the toast. Its lifecycle is timed from here.
    #[must_use]
    pub fn issued_at(mut self, instant: Instant) -> Self {
        self.issued_at = instant;
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn raised_at(&self) -> Instant {
        self.issued_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn each_toast_gets_a_fresh_id() {
        let processing = Notification::info("notification-processing");
        let again = Notification::info("notification-processing");
        assert_ne!(processing.id(), again.id());
    }

    #[test]
    fn shorthand_constructors_pick_severity() {
        let cases = [
            (Notification::info("notification-processing"), Severity::Info),
            (Notification::success("notification-ready"), Severity::Success),
            (Notification::error("notification-url-invalid"), Severity::Error),
        ];
        for (notification, severity) in cases {
            assert_eq!(notification.severity(), severity);
        }
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn url_errors_stand_out_from_progress_toasts() {
        assert_ne!(Severity::Error.color(), Severity::Info.color());
        assert_ne!(Severity::Error.color(), Severity::Success.color());
        assert_ne!(Severity::Info.color(), Severity::Success.color());
    }

    #[test]
    fn key_and_timestamp_are_kept() {
        let later = Instant::now() + Duration::from_secs(5);
        let notification = Notification::success("notification-ready").issued_at(later);

        assert_eq!(notification.key(), "notification-ready");
        assert_eq!(notification.raised_at(), later);
    }
}
