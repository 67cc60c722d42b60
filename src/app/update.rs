// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::persisted_state::LocalStorage;
use super::Message;
use crate::download::{flow, DownloadFlow, Effect, SimulatedDownload};
use crate::i18n::fluent::I18n;
use crate::ui::modal::{self, Event as ModalEvent, ModalHost};
use crate::ui::navbar::{self, Event as NavbarEvent, NavState};
use crate::ui::notifications;
use crate::ui::page;
use crate::ui::scroll::{PageScroll, PAGE_SCROLL_ID};
use crate::ui::theming::{self, ThemePreference};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub storage: &'a mut LocalStorage,
    pub theme: &'a mut ThemePreference,
    pub nav: &'a mut NavState,
    pub window_width: &'a mut f32,
    pub url_input: &'a mut String,
    pub flow: &'a mut DownloadFlow<SimulatedDownload>,
    pub modals: &'a mut ModalHost,
    pub notifications: &'a mut notifications::Manager,
    pub scroll: &'a mut PageScroll,
    pub now: &'a mut Instant,
}

/// Handles navbar messages: menu toggling, theme switching and anchor links.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.nav) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::ToggleTheme => {
            if let Some(key) = theming::toggle(ctx.theme, ctx.storage) {
                log::warn!("{}", ctx.i18n.tr(&key));
            }
            Task::none()
        }
        NavbarEvent::ScrollTo(section) => {
            ctx.scroll.start(section, Instant::now());
            Task::none()
        }
    }
}

/// Handles the hero form, option buttons and scroll reports.
pub fn handle_page_message(ctx: &mut UpdateContext<'_>, message: page::Message) -> Task<Message> {
    match message {
        page::Message::UrlChanged(value) => {
            *ctx.url_input = value;
            Task::none()
        }
        page::Message::Download => {
            let effects = ctx.flow.submit(ctx.url_input);
            apply_effects(ctx, effects)
        }
        page::Message::OptionSelected(option) => {
            let action = option.dispatch();
            ctx.notifications.push(action.notification);
            if let Some(variant) = action.modal {
                ctx.modals.open(variant);
            }
            Task::none()
        }
        page::Message::Scrolled { offset, max_offset } => {
            ctx.scroll.on_viewport(offset, max_offset);
            Task::none()
        }
    }
}

/// Handles dialog messages. Submitting a dialog has no effect beyond logging.
pub fn handle_modal_message(ctx: &mut UpdateContext<'_>, message: modal::Message) -> Task<Message> {
    if let ModalEvent::Submitted(variant) = ctx.modals.update(message) {
        log::debug!("{variant:?} dialog submitted; nothing to download");
    }
    Task::none()
}

/// Finishes the simulated download once its delay has elapsed.
pub fn handle_processing_elapsed(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let effects = ctx.flow.complete();
    apply_effects(ctx, effects)
}

/// Advances toast lifecycles and any running scroll animation.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    *ctx.now = now;
    ctx.notifications.tick_at(now);

    match ctx.scroll.step(now) {
        Some(offset) => operation::snap_to(
            Id::new(PAGE_SCROLL_ID),
            RelativeOffset {
                x: 0.0,
                y: ctx.scroll.relative(offset),
            },
        ),
        None => Task::none(),
    }
}

fn apply_effects(ctx: &mut UpdateContext<'_>, effects: Vec<Effect>) -> Task<Message> {
    let mut tasks = Vec::new();
    for effect in effects {
        match effect {
            Effect::Notify(notification) => ctx.notifications.push(notification),
            Effect::ScheduleCompletion(delay) => {
                tasks.push(Task::perform(flow::wait(delay), |()| {
                    Message::ProcessingElapsed
                }));
            }
        }
    }
    Task::batch(tasks)
}
