// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Notifications**: toast entry delay, slide transition and dwell time
//! - **Download**: simulated processing delay

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Delay between inserting a toast and starting its slide-in (milliseconds).
pub const DEFAULT_TOAST_ENTER_DELAY_MS: u64 = 100;

/// Duration of the slide-in and slide-out transitions (milliseconds).
pub const DEFAULT_TOAST_TRANSITION_MS: u64 = 300;

/// Time from insertion until the slide-out starts (milliseconds).
pub const DEFAULT_TOAST_DWELL_MS: u64 = 3000;

/// Upper bound accepted for any toast timing value (milliseconds).
pub const MAX_TOAST_TIMING_MS: u64 = 60_000;

// ==========================================================================
// Download Defaults
// ==========================================================================

/// Simulated processing time between "processing" and "ready" (milliseconds).
pub const DEFAULT_PROCESSING_DELAY_MS: u64 = 2000;

/// Upper bound accepted for the processing delay (milliseconds).
pub const MAX_PROCESSING_DELAY_MS: u64 = 60_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_TOAST_TRANSITION_MS > 0);
    assert!(DEFAULT_TOAST_ENTER_DELAY_MS + DEFAULT_TOAST_TRANSITION_MS < DEFAULT_TOAST_DWELL_MS);
    assert!(DEFAULT_TOAST_DWELL_MS <= MAX_TOAST_TIMING_MS);
    assert!(DEFAULT_PROCESSING_DELAY_MS <= MAX_PROCESSING_DELAY_MS);
};
