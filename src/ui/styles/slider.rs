// SPDX-License-Identifier: MPL-2.0
//! Slider-specific style definitions.

use crate::ui::design_tokens::palette;
use iced::widget::slider;
use iced::{Background, Border, Color, Theme};

/// Ringtone range sliders: brand-colored fill, theme-aware rail.
pub fn ringtone(theme: &Theme, status: slider::Status) -> slider::Style {
    let is_light = matches!(theme, Theme::Light);
    let rail = if is_light {
        palette::GRAY_300
    } else {
        palette::GRAY_600
    };
    let handle = match status {
        slider::Status::Hovered | slider::Status::Dragged => palette::BRAND_PINK_DARK,
        slider::Status::Active => palette::BRAND_PINK,
    };

    slider::Style {
        rail: slider::Rail {
            backgrounds: (
                Background::Color(palette::BRAND_PINK),
                Background::Color(rail),
            ),
            width: 4.0,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 2.0.into(),
            },
        },
        handle: slider::Handle {
            shape: slider::HandleShape::Circle { radius: 8.0 },
            background: Background::Color(handle),
            border_width: 2.0,
            border_color: palette::WHITE,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_darkens_while_dragged() {
        let active = ringtone(&Theme::Light, slider::Status::Active);
        let dragged = ringtone(&Theme::Light, slider::Status::Dragged);
        assert_ne!(active.handle.background, dragged.handle.background);
    }
}
