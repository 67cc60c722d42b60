// SPDX-License-Identifier: MPL-2.0
//! Modal overlay rendering.

use super::{ClickTarget, Message, Modal};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::modal::ringtone::MAX_SECONDS;
use crate::ui::styles;
use iced::widget::{
    button, mouse_area, opaque, slider, text_editor, text_input, Column, Container, Row, Space,
    Text,
};
use iced::{alignment, Element, Length};

/// Renders the backdrop and panel for `modal`, to be stacked over the page.
///
/// The panel sits inside an opaque layer, so presses inside it never reach
/// the backdrop's mouse area.
pub fn view<'a>(modal: &'a Modal, i18n: &'a I18n) -> Element<'a, Message> {
    let panel = Container::new(panel_content(modal, i18n))
        .width(Length::Fill)
        .max_width(sizing::MODAL_MAX_WIDTH)
        .padding(spacing::LG)
        .style(styles::modal::panel);

    let panel = opaque(mouse_area(panel).on_press(Message::Clicked(ClickTarget::Panel)));

    let backdrop = Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::modal::backdrop);

    opaque(mouse_area(backdrop).on_press(Message::Clicked(ClickTarget::Backdrop)))
}

fn panel_content<'a>(modal: &'a Modal, i18n: &'a I18n) -> Element<'a, Message> {
    let variant = modal.variant();

    let close = button(Text::new(i18n.tr("modal-close")).size(typography::CLOSE_GLYPH))
        .on_press(Message::CloseRequested)
        .padding([0.0, spacing::XS])
        .style(styles::button::link);

    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(Text::new(i18n.tr(variant.title_key())).size(typography::TITLE))
        .push(Space::new().width(Length::Fill))
        .push(close);

    let body: Element<'a, Message> = match modal {
        Modal::Bulk { urls } => Column::new()
            .spacing(spacing::SM)
            .push(
                text_editor(urls)
                    .placeholder(i18n.tr(variant.placeholder_key()))
                    .height(Length::Fixed(sizing::BULK_TEXTAREA_HEIGHT))
                    .on_action(Message::BulkEdited),
            )
            .push(action_button(i18n.tr("modal-download-button")))
            .into(),
        Modal::Profile { username } => Column::new()
            .spacing(spacing::SM)
            .push(
                text_input(&i18n.tr(variant.placeholder_key()), username)
                    .on_input(Message::UsernameChanged)
                    .on_submit(Message::Submit)
                    .padding(spacing::SM),
            )
            .push(action_button(i18n.tr("modal-download-button")))
            .into(),
        Modal::Ringtone { url, range } => Column::new()
            .spacing(spacing::SM)
            .push(
                text_input(&i18n.tr(variant.placeholder_key()), url)
                    .on_input(Message::RingtoneUrlChanged)
                    .padding(spacing::SM),
            )
            .push(range_row(
                i18n.tr("ringtone-start-label"),
                range.start(),
                Message::StartChanged,
                i18n,
            ))
            .push(range_row(
                i18n.tr("ringtone-end-label"),
                range.end(),
                Message::EndChanged,
                i18n,
            ))
            .push(action_button(i18n.tr("ringtone-create-button")))
            .into(),
    };

    Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(Text::new(i18n.tr(variant.description_key())).size(typography::BODY))
        .push(body)
        .into()
}

fn range_row<'a>(
    label: String,
    value: u8,
    on_change: fn(u8) -> Message,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let value_label = i18n.tr_with_args("ringtone-seconds", &[("seconds", &value.to_string())]);

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(label).size(typography::BODY).width(Length::Fixed(64.0)))
        .push(slider(0..=MAX_SECONDS, value, on_change).style(styles::slider::ringtone))
        .push(
            Text::new(value_label)
                .size(typography::BODY)
                .width(Length::Fixed(40.0)),
        )
        .into()
}

fn action_button<'a>(label: String) -> Element<'a, Message> {
    button(
        Text::new(label)
            .size(typography::BODY_LG)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .on_press(Message::Submit)
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::button::primary)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::modal::{ModalHost, ModalVariant};

    #[test]
    fn click_inside_panel_is_routed_to_panel_and_keeps_dialog_open() {
        let i18n = I18n::default();
        let mut host = ModalHost::new();
        host.open(ModalVariant::Bulk);
        let description = i18n.tr(ModalVariant::Bulk.description_key());

        let messages: Vec<Message> = {
            let modal = host.current().expect("dialog is open");
            let mut ui = iced_test::simulator(view(modal, &i18n));
            ui.click(description.as_str())
                .expect("description text is rendered");
            ui.into_messages().collect()
        };

        assert!(messages
            .iter()
            .any(|message| matches!(message, Message::Clicked(ClickTarget::Panel))));
        assert!(!messages
            .iter()
            .any(|message| matches!(message, Message::Clicked(ClickTarget::Backdrop))));

        for message in messages {
            host.update(message);
        }
        assert!(host.is_open());
    }
}
