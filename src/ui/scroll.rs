// SPDX-License-Identifier: MPL-2.0
//! In-page anchors and smooth scrolling.
//!
//! Sections have fixed heights, so each anchor resolves to a constant offset
//! in the page scrollable. Navigating to an anchor animates the offset with an
//! ease-in-out curve instead of jumping.

use crate::ui::notifications::ease_in_out;
use std::time::{Duration, Instant};

/// Identifier of the page scrollable.
pub const PAGE_SCROLL_ID: &str = "page-scrollable";

/// Length of a smooth scroll animation.
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(450);

/// In-page navigation targets, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Features,
    HowTo,
    Faq,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Features,
        Section::HowTo,
        Section::Faq,
    ];

    /// Fixed height of the section in the page layout.
    #[must_use]
    pub fn height(self) -> f32 {
        match self {
            Section::Home => 560.0,
            Section::Features => 420.0,
            Section::HowTo => 360.0,
            Section::Faq => 420.0,
        }
    }

    /// Vertical offset of the section's top edge.
    #[must_use]
    pub fn anchor(self) -> f32 {
        Self::ALL
            .iter()
            .take_while(|section| **section != self)
            .map(|section| section.height())
            .sum()
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Section::Home => "nav-home",
            Section::Features => "nav-features",
            Section::HowTo => "nav-how-to",
            Section::Faq => "nav-faq",
        }
    }
}

/// A running scroll animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl SmoothScroll {
    #[must_use]
    pub fn new(from: f32, to: f32, started_at: Instant) -> Self {
        Self {
            from,
            to,
            started_at,
            duration: SMOOTH_SCROLL_DURATION,
        }
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Offset at `now`; equals the target once the animation has elapsed.
    #[must_use]
    pub fn offset_at(&self, now: Instant) -> f32 {
        let t = self.progress(now);
        self.from + (self.to - self.from) * ease_in_out(t)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

/// Scroll position of the page plus any animation in flight.
#[derive(Debug, Clone, Default)]
pub struct PageScroll {
    offset: f32,
    max_offset: Option<f32>,
    animation: Option<SmoothScroll>,
}

impl PageScroll {
    /// Records the viewport reported by the scrollable.
    pub fn on_viewport(&mut self, offset: f32, max_offset: f32) {
        self.offset = offset;
        self.max_offset = Some(max_offset.max(0.0));
    }

    /// Starts animating toward `section`, clamped to the scrollable range.
    pub fn start(&mut self, section: Section, now: Instant) {
        let mut target = section.anchor();
        if let Some(max) = self.max_offset {
            target = target.min(max);
        }
        log::debug!("Scrolling to {section:?} ({target}px)");
        self.animation = Some(SmoothScroll::new(self.offset, target, now));
    }

    /// Advances the animation and returns the offset to apply, if any.
    pub fn step(&mut self, now: Instant) -> Option<f32> {
        let animation = self.animation?;
        let offset = animation.offset_at(now);
        if animation.is_finished(now) {
            self.animation = None;
        }
        self.offset = offset;
        Some(offset)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Converts an absolute offset to the `[0, 1]` range of the scrollable.
    #[must_use]
    pub fn relative(&self, offset: f32) -> f32 {
        match self.max_offset {
            Some(max) if max > 0.0 => (offset / max).clamp(0.0, 1.0),
            _ => 0.0,
        }
    }
}
