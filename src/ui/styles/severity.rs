// SPDX-License-Identifier: MPL-2.0
//! Severity to color mapping.

use crate::ui::design_tokens::palette;
use crate::ui::notifications::Severity;
use iced::Color;

/// Background color for a toast of the given severity.
#[must_use]
pub fn background(severity: Severity) -> Color {
    match severity {
        Severity::Error => palette::ERROR,
        Severity::Success => palette::SUCCESS,
        Severity::Info => palette::INFO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severities_map_to_reference_colors() {
        assert_eq!(background(Severity::Error), palette::ERROR);
        assert_eq!(background(Severity::Success), palette::SUCCESS);
        assert_eq!(background(Severity::Info), palette::INFO);
    }
}
