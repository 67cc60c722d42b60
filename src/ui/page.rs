// SPDX-License-Identifier: MPL-2.0
//! Page body: hero with the URL form and quick options, then the
//! informational sections.
//!
//! Every section is rendered at its fixed [`Section::height`] so the anchor
//! offsets used for smooth scrolling stay valid.

use crate::download::DownloadOption;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::scroll::{Section, PAGE_SCROLL_ID};
use crate::ui::styles;
use iced::widget::scrollable::Viewport;
use iced::widget::{button, text_input, Column, Container, Id, Row, Scrollable, Text};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub url: &'a str,
    pub compact: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    UrlChanged(String),
    Download,
    OptionSelected(DownloadOption),
    /// The scrollable moved: current offset and maximum offset.
    Scrolled { offset: f32, max_offset: f32 },
}

/// Render the scrollable page.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new().width(Length::Fill);
    for section in Section::ALL {
        column = column.push(
            Container::new(section_content(&ctx, section))
                .width(Length::Fill)
                .height(Length::Fixed(section.height()))
                .padding(spacing::XL)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .style(section_style(section)),
        );
    }
    column = column.push(
        Container::new(Text::new(ctx.i18n.tr("footer-text")).size(typography::CAPTION))
            .width(Length::Fill)
            .padding(spacing::LG)
            .align_x(alignment::Horizontal::Center),
    );

    Scrollable::new(column)
        .id(Id::new(PAGE_SCROLL_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| {
            let bounds = viewport.bounds();
            let content = viewport.content_bounds();
            Message::Scrolled {
                offset: viewport.absolute_offset().y,
                max_offset: (content.height - bounds.height).max(0.0),
            }
        })
        .into()
}

fn section_style(section: Section) -> fn(&iced::Theme) -> iced::widget::container::Style {
    match section {
        Section::Home => styles::container::hero,
        Section::Features | Section::Faq => styles::container::band,
        Section::HowTo => |_theme| iced::widget::container::Style::default(),
    }
}

fn section_content<'a>(ctx: &ViewContext<'a>, section: Section) -> Element<'a, Message> {
    match section {
        Section::Home => hero(ctx),
        Section::Features => features(ctx),
        Section::HowTo => how_to(ctx.i18n),
        Section::Faq => faq(ctx.i18n),
    }
}

fn hero<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let input = text_input(&i18n.tr("url-placeholder"), ctx.url)
        .on_input(Message::UrlChanged)
        .on_submit(Message::Download)
        .padding(spacing::SM)
        .size(typography::BODY_LG)
        .width(Length::Fill);

    let download = button(
        Text::new(i18n.tr("download-button"))
            .size(typography::BODY_LG)
            .align_x(alignment::Horizontal::Center),
    )
    .on_press(Message::Download)
    .padding([spacing::SM, spacing::LG])
    .style(styles::button::primary);

    let form: Element<'a, Message> = if ctx.compact {
        Column::new()
            .spacing(spacing::SM)
            .push(input)
            .push(download.width(Length::Fill))
            .into()
    } else {
        Row::new()
            .spacing(spacing::SM)
            .height(Length::Fixed(sizing::INPUT_HEIGHT))
            .align_y(alignment::Vertical::Center)
            .push(input)
            .push(download)
            .into()
    };

    let options = DownloadOption::ALL.iter().fold(
        Row::new().spacing(spacing::XS),
        |row, option| {
            row.push(
                button(Text::new(i18n.tr(option.label_key())).size(typography::BODY))
                    .on_press(Message::OptionSelected(*option))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::option),
            )
        },
    );

    Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::HERO_MAX_WIDTH)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(i18n.tr("hero-title"))
                .size(typography::DISPLAY)
                .align_x(alignment::Horizontal::Center),
        )
        .push(
            Text::new(i18n.tr("hero-subtitle"))
                .size(typography::BODY_LG)
                .align_x(alignment::Horizontal::Center),
        )
        .push(form)
        .push(options.wrap())
        .into()
}

fn features<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let cards = [
        ("feature-hd-title", "feature-hd-body"),
        ("feature-watermark-title", "feature-watermark-body"),
        ("feature-free-title", "feature-free-body"),
    ]
    .map(|(title, body)| card(i18n.tr(title), i18n.tr(body)));

    let grid: Element<'a, Message> = if ctx.compact {
        Column::with_children(cards).spacing(spacing::MD).into()
    } else {
        Row::with_children(cards).spacing(spacing::MD).into()
    };

    titled(i18n.tr("features-title"), grid)
}

fn how_to<'a>(i18n: &I18n) -> Element<'a, Message> {
    let steps = ["how-to-step-1", "how-to-step-2", "how-to-step-3"]
        .iter()
        .fold(Column::new().spacing(spacing::SM), |column, key| {
            column.push(Text::new(i18n.tr(key)).size(typography::BODY_LG))
        });

    titled(i18n.tr("how-to-title"), steps.into())
}

fn faq<'a>(i18n: &I18n) -> Element<'a, Message> {
    let entries = [
        ("faq-question-1", "faq-answer-1"),
        ("faq-question-2", "faq-answer-2"),
    ]
    .iter()
    .fold(Column::new().spacing(spacing::MD), |column, (q, a)| {
        column.push(card(i18n.tr(q), i18n.tr(a)))
    });

    titled(i18n.tr("faq-title"), entries.into())
}

fn titled<'a>(title: String, body: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::HERO_MAX_WIDTH)
        .push(Text::new(title).size(typography::TITLE))
        .push(body)
        .into()
}

fn card<'a>(title: String, body: String) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(title).size(typography::TITLE_SM))
            .push(Text::new(body).size(typography::BODY)),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_view_renders_in_both_layouts() {
        let i18n = I18n::default();
        let _wide = view(ViewContext {
            i18n: &i18n,
            url: "",
            compact: false,
        });
        let _compact = view(ViewContext {
            i18n: &i18n,
            url: "https://tiktok.com/@user/video/1",
            compact: true,
        });
    }
}
