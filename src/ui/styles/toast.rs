// SPDX-License-Identifier: MPL-2.0
//! Toast styles.

use super::severity;
use crate::ui::design_tokens::{palette, radius, shadow};
use crate::ui::notifications::Severity;
use iced::widget::container as container_widget;
use iced::{Background, Border, Color, Shadow, Theme};

/// Toast surface: severity background, white text, faded by `alpha`.
#[must_use]
pub fn container(_theme: &Theme, severity: Severity, alpha: f32) -> container_widget::Style {
    let alpha = alpha.clamp(0.0, 1.0);
    let background = severity::background(severity);

    container_widget::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..background
        })),
        text_color: Some(text_color(alpha)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color {
                a: shadow::MD.color.a * alpha,
                ..shadow::MD.color
            },
            ..shadow::MD
        },
        ..Default::default()
    }
}

#[must_use]
pub fn text_color(alpha: f32) -> Color {
    Color {
        a: alpha.clamp(0.0, 1.0),
        ..palette::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_background_follows_severity() {
        let style = container(&Theme::Light, Severity::Error, 1.0);
        assert_eq!(style.background, Some(Background::Color(palette::ERROR)));
        assert_eq!(style.text_color, Some(palette::WHITE));
    }

    #[test]
    fn toast_fades_with_alpha() {
        let style = container(&Theme::Dark, Severity::Info, 0.25);
        match style.background {
            Some(Background::Color(color)) => assert_eq!(color.a, 0.25),
            other => panic!("expected color background, got {other:?}"),
        }
    }
}
