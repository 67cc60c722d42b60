// SPDX-License-Identifier: MPL-2.0
//! Navigation bar.
//!
//! Wide windows show the section links inline. Below the mobile breakpoint
//! they collapse behind a hamburger button that opens a dropdown menu. The
//! theme toggle is always visible.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::scroll::Section;
use crate::ui::styles;
use crate::ui::theming::ThemePreference;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, Column, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};

/// Open/closed markers for the mobile menu.
///
/// The menu panel and the hamburger button each carry an "active" marker;
/// they are always flipped together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_active: bool,
    pub hamburger_active: bool,
}

impl NavState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.menu_active
    }

    fn toggle(&mut self) {
        self.menu_active = !self.menu_active;
        self.hamburger_active = !self.hamburger_active;
    }

    fn close(&mut self) {
        self.menu_active = false;
        self.hamburger_active = false;
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: NavState,
    pub theme: ThemePreference,
    /// Whether the window is narrower than the mobile breakpoint.
    pub compact: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    ToggleTheme,
    Navigate(Section),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    ToggleTheme,
    ScrollTo(Section),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, state: &mut NavState) -> Event {
    match message {
        Message::ToggleMenu => {
            state.toggle();
            Event::None
        }
        Message::ToggleTheme => Event::ToggleTheme,
        Message::Navigate(section) => {
            state.close();
            Event::ScrollTo(section)
        }
    }
}

/// Whether a window of `width` logical pixels uses the hamburger layout.
#[must_use]
pub fn is_compact(width: f32) -> bool {
    width < sizing::MOBILE_BREAKPOINT
}

/// Render the navigation bar, plus the dropdown when the mobile menu is open.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);
    content = content.push(build_top_bar(&ctx));

    if ctx.compact && ctx.state.is_open() {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("brand-name")).size(typography::TITLE);

    let theme_button = button(Text::new(ctx.theme.glyph()).size(typography::TITLE_SM))
        .on_press(Message::ToggleTheme)
        .padding(spacing::XS)
        .style(styles::button::link);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding([0.0, spacing::LG])
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    if ctx.compact {
        let glyph = if ctx.state.hamburger_active { "✕" } else { "☰" };
        let hamburger = button(Text::new(glyph).size(typography::TITLE_SM))
            .on_press(Message::ToggleMenu)
            .padding(spacing::XS)
            .style(styles::button::link);
        row = row.push(theme_button).push(hamburger);
    } else {
        for section in Section::ALL {
            row = row.push(nav_link(ctx.i18n, section));
        }
        row = row.push(theme_button);
    }

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::navbar)
        .into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let items = Section::ALL.iter().fold(
        Column::new().spacing(spacing::XXS).width(Length::Fill),
        |column, section| column.push(nav_link(ctx.i18n, *section)),
    );

    Container::new(items)
        .width(Length::Fill)
        .padding(spacing::XS)
        .align_x(Horizontal::Left)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::SM.into(),
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
            },
            ..Default::default()
        })
        .into()
}

fn nav_link<'a>(i18n: &I18n, section: Section) -> Element<'a, Message> {
    button(Text::new(i18n.tr(section.i18n_key())).size(typography::BODY_LG))
        .on_press(Message::Navigate(section))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::link)
        .into()
}
