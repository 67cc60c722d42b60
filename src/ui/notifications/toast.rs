// SPDX-License-Identifier: MPL-2.0
//! Toast overlay rendering.
//!
//! The toast sits below the navbar at the top-right corner. While entering it
//! slides in from the window edge and fades in; leaving plays the reverse.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{mouse_area, text, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length, Theme};
use std::time::Instant;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast with the given on-screen fraction.
    pub fn view<'a>(
        notification: &'a Notification,
        i18n: &'a I18n,
        fraction: f32,
    ) -> Element<'a, Message> {
        let message_text = Self::resolve_text(notification, i18n);
        let severity = notification.severity();

        let body = Container::new(
            Text::new(message_text)
                .size(typography::BODY)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(styles::toast::text_color(fraction)),
                }),
        )
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding([spacing::SM, spacing::MD])
        .style(move |theme: &Theme| styles::toast::container(theme, severity, fraction));

        mouse_area(body)
            .on_press(Message::Dismiss(notification.id()))
            .into()
    }

    /// Renders the overlay for the manager's current toast at `now`.
    ///
    /// Returns an empty element when nothing is attached.
    pub fn view_overlay<'a>(
        manager: &'a Manager,
        i18n: &'a I18n,
        now: Instant,
    ) -> Element<'a, Message> {
        let (Some(notification), Some(phase)) = (manager.current(), manager.phase_at(now)) else {
            return Space::new().width(Length::Shrink).height(Length::Shrink).into();
        };

        let fraction = phase.visible_fraction();
        if fraction <= 0.0 {
            return Space::new().width(Length::Shrink).height(Length::Shrink).into();
        }

        let row = Row::new()
            .align_y(alignment::Vertical::Top)
            .push(Space::new().width(Length::Fill))
            .push(Self::view(notification, i18n, fraction))
            .push(Space::new().width(Length::Fixed(slide_margin(fraction))));

        Column::new()
            .push(Space::new().height(Length::Fixed(sizing::TOAST_TOP_OFFSET)))
            .push(row)
            .width(Length::Fill)
            .into()
    }

    fn resolve_text(notification: &Notification, i18n: &I18n) -> String {
        i18n.tr(notification.key())
    }
}

/// Right margin for a toast at the given on-screen fraction.
fn slide_margin(fraction: f32) -> f32 {
    sizing::TOAST_RIGHT_OFFSET * fraction.clamp(0.0, 1.0)
}
