// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::modal;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::page;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Page(page::Message),
    Modal(modal::Message),
    Notification(notifications::NotificationMessage),
    /// The simulated processing delay has elapsed.
    ProcessingElapsed,
    /// Animation frame for toasts and smooth scrolling.
    Tick(Instant),
    WindowResized(Size),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `hi`, `en-US`).
    pub lang: Option<String>,
    /// Optional data directory override (for `state.cbor`).
    /// Takes precedence over `TIKSAVER_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for `settings.toml`).
    /// Takes precedence over `TIKSAVER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
