// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary call to action (download buttons).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::BRAND_PINK_DARK,
        button::Status::Pressed => Color {
            a: opacity::HOVER,
            ..palette::BRAND_PINK_DARK
        },
        button::Status::Disabled => palette::GRAY_300,
        button::Status::Active => palette::BRAND_PINK,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: if matches!(status, button::Status::Hovered) {
            shadow::MD
        } else {
            shadow::NONE
        },
        snap: true,
    }
}

/// Quick-action option buttons below the URL field.
/// Adapts to light/dark theme.
pub fn option(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_800, WHITE)
    };

    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::BRAND_CYAN,
        _ => palette::GRAY_300,
    };

    button::Style {
        background: Some(Background::Color(bg_color)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless text button used for navbar links and icon toggles.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let text = theme.extended_palette().background.base.text;
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::SUBTLE,
            ..palette::GRAY_600
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: match status {
            button::Status::Hovered => palette::BRAND_PINK,
            _ => text,
        },
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(palette::BRAND_PINK)));
        assert_eq!(style.text_color, WHITE);
    }

    #[test]
    fn option_button_highlights_on_hover() {
        let normal = option(&Theme::Light, button::Status::Active);
        let hover = option(&Theme::Light, button::Status::Hovered);
        assert_ne!(normal.border.color, hover.border.color);
    }

    #[test]
    fn link_has_no_background_at_rest() {
        let style = link(&Theme::Light, button::Status::Active);
        assert!(style.background.is_none());
    }
}
