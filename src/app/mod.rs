// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page, the navbar,
//! dialogs and toasts.
//!
//! The `App` struct wires together the domains (download flow, localization,
//! theme preference) and translates messages into side effects like timers,
//! preference writes or scroll operations.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::download::{DownloadFlow, SimulatedDownload};
use crate::i18n::fluent::I18n;
use crate::ui::modal::ModalHost;
use crate::ui::navbar::NavState;
use crate::ui::notifications;
use crate::ui::scroll::PageScroll;
use crate::ui::theming::ThemePreference;
use iced::{window, Element, Subscription, Task, Theme};
use persisted_state::LocalStorage;
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    /// Key-value store holding the theme preference.
    storage: LocalStorage,
    theme: ThemePreference,
    nav: NavState,
    window_width: f32,
    /// Contents of the hero URL field.
    url_input: String,
    flow: DownloadFlow<SimulatedDownload>,
    modals: ModalHost,
    notifications: notifications::Manager,
    scroll: PageScroll,
    /// Clock of the last animation tick.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme", &self.theme)
            .field("flow", self.flow.state())
            .field("modal_open", &self.modals.is_open())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; flags are consumed exactly once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            storage: LocalStorage::in_memory(),
            theme: ThemePreference::default(),
            nav: NavState::default(),
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            url_input: String::new(),
            flow: DownloadFlow::default(),
            modals: ModalHost::new(),
            notifications: notifications::Manager::new(),
            scroll: PageScroll::default(),
            now: Instant::now(),
        }
    }
}

impl App {
    /// Loads settings and the stored theme, then builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir, flags.config_dir);

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);
        let (storage, storage_warning) = LocalStorage::load();

        for key in [config_warning, storage_warning].into_iter().flatten() {
            log::warn!("{}", i18n.tr(&key));
        }

        let theme = ThemePreference::load(&storage);
        log::info!(
            "Starting with locale {} and {} theme",
            i18n.current_locale(),
            theme.as_str()
        );

        let app = App {
            i18n,
            storage,
            theme,
            flow: DownloadFlow::new(config.download.processing_delay(), SimulatedDownload),
            notifications: notifications::Manager::with_timing(config.notifications.timing()),
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.notifications.has_notifications(),
            self.scroll.is_animating(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            storage: &mut self.storage,
            theme: &mut self.theme,
            nav: &mut self.nav,
            window_width: &mut self.window_width,
            url_input: &mut self.url_input,
            flow: &mut self.flow,
            modals: &mut self.modals,
            notifications: &mut self.notifications,
            scroll: &mut self.scroll,
            now: &mut self.now,
        };

        match message {
            Message::Navbar(navbar_message) => update::handle_navbar_message(&mut ctx, navbar_message),
            Message::Page(page_message) => update::handle_page_message(&mut ctx, page_message),
            Message::Modal(modal_message) => update::handle_modal_message(&mut ctx, modal_message),
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::ProcessingElapsed => update::handle_processing_elapsed(&mut ctx),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::WindowResized(size) => {
                *ctx.window_width = size.width;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme: self.theme,
            nav: self.nav,
            window_width: self.window_width,
            url_input: &self.url_input,
            modals: &self.modals,
            notifications: &self.notifications,
            now: self.now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::FlowState;
    use crate::ui::modal::{self, ClickTarget, ModalVariant};
    use crate::ui::navbar;
    use crate::ui::notifications::Severity;
    use crate::ui::page;
    use crate::ui::scroll::Section;
    use std::time::Duration;

    fn current_toast(app: &App) -> Option<(&str, Severity)> {
        app.notifications
            .current()
            .map(|n| (n.key(), n.severity()))
    }

    #[test]
    fn empty_submit_shows_missing_url_error() {
        let mut app = App::default();
        let _ = app.update(Message::Page(page::Message::Download));

        assert_eq!(
            current_toast(&app),
            Some(("notification-url-missing", Severity::Error))
        );
        assert_eq!(app.flow.state(), &FlowState::Idle);
    }

    #[test]
    fn valid_submit_processes_then_reports_ready() {
        let mut app = App::default();
        let _ = app.update(Message::Page(page::Message::UrlChanged(
            "https://www.tiktok.com/@user/video/42".to_string(),
        )));
        let _ = app.update(Message::Page(page::Message::Download));

        assert_eq!(
            current_toast(&app),
            Some(("notification-processing", Severity::Info))
        );
        assert!(app.flow.is_processing());

        let _ = app.update(Message::ProcessingElapsed);
        assert_eq!(
            current_toast(&app),
            Some(("notification-ready", Severity::Success))
        );
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn option_with_dialog_opens_modal_and_notifies() {
        let mut app = App::default();
        let _ = app.update(Message::Page(page::Message::OptionSelected(
            crate::download::DownloadOption::Ringtone,
        )));

        assert_eq!(
            current_toast(&app),
            Some(("notification-option-ringtone", Severity::Info))
        );
        assert_eq!(
            app.modals.current().map(modal::Modal::variant),
            Some(ModalVariant::Ringtone)
        );
    }

    #[test]
    fn backdrop_click_closes_modal_but_panel_click_does_not() {
        let mut app = App::default();
        let _ = app.update(Message::Page(page::Message::OptionSelected(
            crate::download::DownloadOption::Bulk,
        )));

        let _ = app.update(Message::Modal(modal::Message::Clicked(ClickTarget::Panel)));
        assert!(app.modals.is_open());

        let _ = app.update(Message::Modal(modal::Message::Clicked(
            ClickTarget::Backdrop,
        )));
        assert!(!app.modals.is_open());
    }

    #[test]
    fn theme_toggle_persists_and_round_trips() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_eq!(app.theme(), Theme::Dark);
        assert_eq!(app.storage.get("theme"), Some("dark"));

        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_eq!(app.theme(), Theme::Light);
        assert_eq!(app.storage.get("theme"), Some("light"));
    }

    #[test]
    fn navigating_starts_smooth_scroll_and_ticks_finish_it() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Section::HowTo)));
        assert!(app.scroll.is_animating());

        let later = Instant::now() + Duration::from_secs(1);
        let _ = app.update(Message::Tick(later));
        assert!(!app.scroll.is_animating());
        assert_eq!(app.scroll.offset(), Section::HowTo.anchor());
    }

    #[test]
    fn tick_expires_toasts() {
        let mut app = App::default();
        let _ = app.update(Message::Page(page::Message::Download));
        assert!(app.notifications.has_notifications());

        let later = Instant::now() + Duration::from_secs(10);
        let _ = app.update(Message::Tick(later));
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn window_resize_is_tracked() {
        let mut app = App::default();
        let _ = app.update(Message::WindowResized(iced::Size::new(500.0, 800.0)));
        assert_eq!(app.window_width, 500.0);
    }

    #[test]
    fn view_renders_with_modal_and_toast() {
        let mut app = App::default();
        let _ = app.update(Message::Page(page::Message::OptionSelected(
            crate::download::DownloadOption::Profile,
        )));
        let _ = app.view();
    }
}
