// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Top navigation bar.
pub fn navbar(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(Background::Color(base.color)),
        text_color: Some(base.text),
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Alternating section band; weaker than the page background.
pub fn band(theme: &Theme) -> container::Style {
    let weak = theme.extended_palette().background.weak;

    container::Style {
        background: Some(Background::Color(weak.color)),
        text_color: Some(weak.text),
        ..Default::default()
    }
}

/// Feature cards and FAQ entries.
///
/// The color is derived from the active Iced `Theme` background so cards
/// stay readable in both light and dark modes.
pub fn card(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(Background::Color(base.color)),
        text_color: Some(base.text),
        border: Border {
            color: palette::GRAY_300,
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Hero banner on a dark surface in both themes.
pub fn hero(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_follows_theme() {
        assert_ne!(card(&Theme::Light).background, card(&Theme::Dark).background);
    }

    #[test]
    fn hero_text_is_white() {
        assert_eq!(hero(&Theme::Light).text_color, Some(palette::WHITE));
    }
}
