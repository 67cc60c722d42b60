// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: navbar and page, the open dialog, the toast.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::modal::{self, ModalHost};
use crate::ui::navbar::{self, NavState, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::page::{self, ViewContext as PageViewContext};
use crate::ui::theming::ThemePreference;
use iced::widget::{Column, Stack};
use iced::{Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: ThemePreference,
    pub nav: NavState,
    pub window_width: f32,
    pub url_input: &'a str,
    pub modals: &'a ModalHost,
    pub notifications: &'a notifications::Manager,
    pub now: Instant,
}

/// Renders the page with its overlays.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let compact = navbar::is_compact(ctx.window_width);

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        state: ctx.nav,
        theme: ctx.theme,
        compact,
    })
    .map(Message::Navbar);

    let page_view = page::view(PageViewContext {
        i18n: ctx.i18n,
        url: ctx.url_input,
        compact,
    })
    .map(Message::Page);

    let base = Column::new()
        .push(navbar_view)
        .push(page_view)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if let Some(open) = ctx.modals.current() {
        stack = stack.push(modal::view(open, ctx.i18n).map(Message::Modal));
    }

    stack
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n, ctx.now).map(Message::Notification))
        .into()
}
