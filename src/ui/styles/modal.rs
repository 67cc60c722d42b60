// SPDX-License-Identifier: MPL-2.0
//! Modal backdrop and panel styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-window dimming layer behind a modal.
#[must_use]
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Modal content panel, following the active theme background.
#[must_use]
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(Background::Color(base.color)),
        text_color: Some(base.text),
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}
