// SPDX-License-Identifier: MPL-2.0
//! Ringtone clip range.
//!
//! Both ends are whole seconds in `[0, 30]` and `start < end` holds after every
//! update. Moving one end onto or past the other pushes the other one second
//! beyond it. At the bounds, where the partner cannot move, the moved end is
//! pulled back instead.

/// Upper bound for both ends, in seconds.
pub const MAX_SECONDS: u8 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingtoneRange {
    start: u8,
    end: u8,
}

impl Default for RingtoneRange {
    fn default() -> Self {
        Self {
            start: 0,
            end: MAX_SECONDS,
        }
    }
}

impl RingtoneRange {
    #[must_use]
    pub fn start(&self) -> u8 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> u8 {
        self.end
    }

    /// Moves the start. If it reaches the end, the end is pushed to `start + 1`.
    pub fn set_start(&mut self, value: u8) {
        let start = value.min(MAX_SECONDS - 1);
        self.start = start;
        if start >= self.end {
            self.end = start + 1;
        }
    }

    /// Moves the end. If it reaches the start, the start is pushed to `end - 1`.
    pub fn set_end(&mut self, value: u8) {
        let end = value.clamp(1, MAX_SECONDS);
        self.end = end;
        if end <= self.start {
            self.start = end - 1;
        }
    }
}
