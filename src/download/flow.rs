// SPDX-License-Identifier: MPL-2.0
//! Simulated download state machine.
//!
//! ```text
//! Idle ──submit──▶ Validating ──invalid──▶ Idle          (error toast)
//!                      │
//!                    valid
//!                      ▼
//!                 Processing ──complete──▶ Done ──▶ Idle  (info, then success toast)
//! ```
//!
//! The machine never sleeps itself. `submit` returns the effects to perform,
//! including a [`Effect::ScheduleCompletion`] request; the caller waits for
//! the delay and then calls [`DownloadFlow::complete`]. Tests can call
//! `complete` straight away.

use super::validator::{self, TikTokUrl};
use crate::app::config::DEFAULT_PROCESSING_DELAY_MS;
use crate::ui::notifications::Notification;
use std::time::Duration;

/// Called once a simulated download finishes. A real downloader plugs in here.
pub trait CompletionHook {
    fn on_complete(&mut self, url: &TikTokUrl);
}

/// Default hook: nothing is downloaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedDownload;

impl CompletionHook for SimulatedDownload {
    fn on_complete(&mut self, url: &TikTokUrl) {
        log::info!("Simulated download finished for {url}");
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    Validating,
    Processing(TikTokUrl),
    Done,
}

/// Side effects requested by the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Notify(Notification),
    /// Call [`DownloadFlow::complete`] after this delay.
    ScheduleCompletion(Duration),
}

#[derive(Debug)]
pub struct DownloadFlow<H: CompletionHook = SimulatedDownload> {
    state: FlowState,
    delay: Duration,
    hook: H,
}

impl Default for DownloadFlow<SimulatedDownload> {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(DEFAULT_PROCESSING_DELAY_MS),
            SimulatedDownload,
        )
    }
}

impl<H: CompletionHook> DownloadFlow<H> {
    #[must_use]
    pub fn new(delay: Duration, hook: H) -> Self {
        Self {
            state: FlowState::Idle,
            delay,
            hook,
        }
    }

    #[must_use]
    pub fn state(&self) -> &FlowState {
        &self.state
    }

    #[must_use]
    pub fn is_processing(&self) -> bool {
        matches!(self.state, FlowState::Processing(_))
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub fn hook(&self) -> &H {
        &self.hook
    }

    /// Validates `input` and starts processing if it is a TikTok URL.
    ///
    /// Submissions while a download is processing are ignored.
    pub fn submit(&mut self, input: &str) -> Vec<Effect> {
        if self.is_processing() {
            log::debug!("Ignoring submit while processing");
            return Vec::new();
        }

        self.state = FlowState::Validating;
        match validator::validate(input) {
            Err(err) => {
                log::debug!("Rejected input: {err}");
                self.state = FlowState::Idle;
                vec![Effect::Notify(Notification::error(err.i18n_key()))]
            }
            Ok(url) => {
                log::info!("Processing {url}");
                self.state = FlowState::Processing(url);
                vec![
                    Effect::Notify(Notification::info("notification-processing")),
                    Effect::ScheduleCompletion(self.delay),
                ]
            }
        }
    }

    /// Finishes processing: runs the hook and reports success.
    ///
    /// Does nothing unless a download is processing.
    pub fn complete(&mut self) -> Vec<Effect> {
        let FlowState::Processing(url) = std::mem::replace(&mut self.state, FlowState::Done)
        else {
            self.state = FlowState::Idle;
            return Vec::new();
        };

        self.hook.on_complete(&url);
        self.state = FlowState::Idle;
        vec![Effect::Notify(Notification::success("notification-ready"))]
    }
}

/// Waits out the processing delay.
pub async fn wait(delay: Duration) {
    tokio::time::sleep(delay).await;
}
