// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns at most one notification. Pushing a new one drops the
//! current toast immediately, without an exit animation, so overlapping calls
//! collapse to "latest wins". There is no queue.
//!
//! A toast's lifetime is measured from its creation instant:
//!
//! ```text
//! 0 ── enter_delay ── +transition ──────── dwell ── +transition
//!   Pending      Entering        Visible        Leaving       (removed)
//! ```

use super::notification::{Notification, NotificationId, Severity};
use crate::app::config::{
    DEFAULT_TOAST_DWELL_MS, DEFAULT_TOAST_ENTER_DELAY_MS, DEFAULT_TOAST_TRANSITION_MS,
};
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Advance the lifecycle clock.
    Tick(Instant),
}

/// Timing of the toast slide-in, dwell and slide-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTiming {
    /// Delay between insertion and the start of the slide-in.
    pub enter_delay: Duration,
    /// Length of each slide transition.
    pub transition: Duration,
    /// Time from insertion until the slide-out starts.
    pub dwell: Duration,
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self {
            enter_delay: Duration::from_millis(DEFAULT_TOAST_ENTER_DELAY_MS),
            transition: Duration::from_millis(DEFAULT_TOAST_TRANSITION_MS),
            dwell: Duration::from_millis(DEFAULT_TOAST_DWELL_MS),
        }
    }
}

impl ToastTiming {
    /// Total time a toast stays attached.
    #[must_use]
    pub fn lifetime(&self) -> Duration {
        self.dwell + self.transition
    }
}

/// Where a toast is in its lifecycle. Progress values are in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Attached but still off-screen.
    Pending,
    /// Sliding in.
    Entering(f32),
    /// Fully shown.
    Visible,
    /// Sliding out.
    Leaving(f32),
}

impl Phase {
    /// Fraction of the toast that is on screen.
    #[must_use]
    pub fn visible_fraction(self) -> f32 {
        match self {
            Phase::Pending => 0.0,
            Phase::Entering(progress) => ease_in_out(progress),
            Phase::Visible => 1.0,
            Phase::Leaving(progress) => 1.0 - ease_in_out(progress),
        }
    }
}

/// Owns the single live notification.
#[derive(Debug, Default)]
pub struct Manager {
    current: Option<Notification>,
    timing: ToastTiming,
}

impl Manager {
    /// Creates a new empty notification manager with default timing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timing(timing: ToastTiming) -> Self {
        Self {
            current: None,
            timing,
        }
    }

    #[must_use]
    pub fn timing(&self) -> ToastTiming {
        self.timing
    }

    /// Shows `notification`, replacing the current one if any.
    pub fn push(&mut self, notification: Notification) {
        if let Some(previous) = self.current.replace(notification) {
            log::debug!("Replacing toast {:?}", previous.key());
        }
    }

    /// Shows a notification built from an i18n key and a severity.
    pub fn notify(&mut self, key: impl Into<String>, severity: Severity) {
        self.push(Notification::new(severity, key));
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if it was the current notification. Stale IDs are ignored.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id() == id) {
            self.current = None;
            return true;
        }
        false
    }

    /// Removes the current notification if its lifetime has elapsed at `now`.
    pub fn tick_at(&mut self, now: Instant) {
        let expired = self.current.as_ref().is_some_and(|n| {
            now.saturating_duration_since(n.raised_at()) >= self.timing.lifetime()
        });
        if expired {
            self.current = None;
        }
    }

    /// Lifecycle phase of the current notification at `now`.
    #[must_use]
    pub fn phase_at(&self, now: Instant) -> Option<Phase> {
        let notification = self.current.as_ref()?;
        let elapsed = now.saturating_duration_since(notification.raised_at());
        let timing = &self.timing;

        let phase = if elapsed < timing.enter_delay {
            Phase::Pending
        } else if elapsed < timing.enter_delay + timing.transition {
            Phase::Entering(progress(elapsed - timing.enter_delay, timing.transition))
        } else if elapsed < timing.dwell {
            Phase::Visible
        } else {
            Phase::Leaving(progress(elapsed - timing.dwell, timing.transition))
        };
        Some(phase)
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick(now) => {
                self.tick_at(*now);
            }
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Returns the number of attached notifications (0 or 1).
    #[must_use]
    pub fn visible_count(&self) -> usize {
        usize::from(self.current.is_some())
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        self.current.is_some()
    }
}

fn progress(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

/// Cubic ease-in-out over `[0, 1]`.
pub(crate) fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn manager_with(start: Instant, key: &str) -> Manager {
        let mut manager = Manager::new();
        manager.push(Notification::info(key).issued_at(start));
        manager
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert!(!manager.has_notifications());
        assert!(manager.phase_at(Instant::now()).is_none());
    }

    #[test]
    fn push_replaces_current_notification() {
        // Latest wins: the first toast is dropped without an exit phase.
        let mut manager = Manager::new();
        manager.push(Notification::info("first"));
        manager.push(Notification::error("second"));

        assert_eq!(manager.visible_count(), 1);
        let current = manager.current().expect("current");
        assert_eq!(current.key(), "second");
        assert_eq!(current.severity(), Severity::Error);
    }

    #[test]
    fn notify_builds_notification_from_key_and_severity() {
        let mut manager = Manager::new();
        manager.notify("notification-ready", Severity::Success);

        let current = manager.current().expect("current");
        assert_eq!(current.key(), "notification-ready");
        assert_eq!(current.severity(), Severity::Success);
    }

    #[test]
    fn phases_follow_default_timing() {
        let start = Instant::now();
        let manager = manager_with(start, "test");

        assert_eq!(manager.phase_at(start), Some(Phase::Pending));
        assert_eq!(manager.phase_at(start + ms(99)), Some(Phase::Pending));
        assert_eq!(manager.phase_at(start + ms(100)), Some(Phase::Entering(0.0)));
        assert_eq!(manager.phase_at(start + ms(250)), Some(Phase::Entering(0.5)));
        assert_eq!(manager.phase_at(start + ms(400)), Some(Phase::Visible));
        assert_eq!(manager.phase_at(start + ms(2999)), Some(Phase::Visible));
        assert_eq!(manager.phase_at(start + ms(3000)), Some(Phase::Leaving(0.0)));
        assert_eq!(manager.phase_at(start + ms(3150)), Some(Phase::Leaving(0.5)));
    }

    #[test]
    fn tick_removes_expired_notification() {
        let start = Instant::now();
        let mut manager = manager_with(start, "test");

        manager.tick_at(start + ms(3299));
        assert!(manager.has_notifications());

        manager.tick_at(start + ms(3300));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn custom_timing_is_respected() {
        let start = Instant::now();
        let mut manager = Manager::with_timing(ToastTiming {
            enter_delay: ms(0),
            transition: ms(10),
            dwell: ms(20),
        });
        manager.push(Notification::success("fast").issued_at(start));

        assert_eq!(manager.phase_at(start + ms(15)), Some(Phase::Visible));
        manager.tick_at(start + ms(30));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn dismiss_removes_current() {
        let mut manager = Manager::new();
        let notification = Notification::success("test");
        let id = notification.id();
        manager.push(notification);

        assert!(manager.dismiss(id));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn dismiss_of_replaced_notification_is_ignored() {
        let mut manager = Manager::new();
        let stale = Notification::info("old");
        let stale_id = stale.id();
        manager.push(stale);
        manager.push(Notification::info("new"));

        assert!(!manager.dismiss(stale_id));
        assert_eq!(manager.current().map(Notification::key), Some("new"));
    }

    #[test]
    fn handle_message_dispatches() {
        let start = Instant::now();
        let mut manager = manager_with(start, "test");

        manager.handle_message(&Message::Tick(start + ms(10)));
        assert!(manager.has_notifications());

        let id = manager.current().map(Notification::id).expect("current");
        manager.handle_message(&Message::Dismiss(id));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn visible_fraction_runs_from_hidden_to_shown_and_back() {
        assert_eq!(Phase::Pending.visible_fraction(), 0.0);
        assert_eq!(Phase::Entering(0.0).visible_fraction(), 0.0);
        assert_eq!(Phase::Entering(1.0).visible_fraction(), 1.0);
        assert_eq!(Phase::Visible.visible_fraction(), 1.0);
        assert_eq!(Phase::Leaving(1.0).visible_fraction(), 0.0);
        assert!((Phase::Entering(0.5).visible_fraction() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn ease_in_out_is_monotonic() {
        let mut last = 0.0;
        for step in 0..=20 {
            let value = ease_in_out(step as f32 / 20.0);
            assert!(value >= last);
            last = value;
        }
    }
}
