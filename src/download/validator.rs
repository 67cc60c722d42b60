// SPDX-License-Identifier: MPL-2.0
//! Structural TikTok URL check.
//!
//! Only the shape of the text is checked: no network request is made and the
//! video is not required to exist.

use crate::error::UrlError;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Unanchored: the pattern may match anywhere in the input.
static TIKTOK_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://(www\.)?tiktok\.com/.+").expect("TikTok URL regex should compile")
});

/// A trimmed input that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TikTokUrl(String);

impl TikTokUrl {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TikTokUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validates user input as a TikTok URL.
///
/// Empty or whitespace-only input is [`UrlError::Missing`]; anything else
/// that does not contain `http(s)://[www.]tiktok.com/...` is
/// [`UrlError::Invalid`].
pub fn validate(input: &str) -> Result<TikTokUrl, UrlError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlError::Missing);
    }
    if !TIKTOK_URL_PATTERN.is_match(trimmed) {
        return Err(UrlError::Invalid);
    }
    Ok(TikTokUrl(trimmed.to_string()))
}
