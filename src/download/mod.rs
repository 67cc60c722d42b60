// SPDX-License-Identifier: MPL-2.0
//! Input validation, quick-action options and the simulated download flow.

pub mod flow;
pub mod options;
pub mod validator;

pub use flow::{CompletionHook, DownloadFlow, Effect, FlowState, SimulatedDownload};
pub use options::{DownloadOption, OptionAction};
pub use validator::{validate, TikTokUrl};
