// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.
//!
//! The base screen is a small playground exercising both feedback helpers;
//! the toast overlay and the confirmation modal are layered above it.

use super::Message;
use crate::i18n::I18n;
use crate::ui::confirm;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub message_input: &'a str,
    pub severity_input: &'a str,
    pub items: &'a [String],
    pub notifications: &'a Manager,
    pub confirm: &'a confirm::State<Message>,
}

/// Renders the demo screen with the feedback overlays stacked on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let base = view_playground(&ctx);
    let toast_overlay = Toast::view_overlay(ctx.notifications).map(Message::Notification);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(toast_overlay);

    // The modal goes on top of everything, toasts included
    if ctx.confirm.is_open() {
        layers = layers.push(ctx.confirm.view(ctx.i18n).map(Message::Confirm));
    }

    layers.into()
}

fn view_playground<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let heading = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_SM);

    let message_input = text_input(
        &ctx.i18n.tr("demo-message-placeholder"),
        ctx.message_input,
    )
    .on_input(Message::MessageInputChanged)
    .padding(spacing::XS)
    .size(typography::BODY);

    let severity_input = text_input(
        &ctx.i18n.tr("demo-severity-placeholder"),
        ctx.severity_input,
    )
    .on_input(Message::SeverityInputChanged)
    .padding(spacing::XS)
    .size(typography::BODY);

    let show_button = button(Text::new(ctx.i18n.tr("demo-show-toast")).size(typography::BODY))
        .on_press(Message::ShowToast)
        .padding([spacing::XXS, spacing::MD])
        .style(styles::button::primary);

    let toast_controls = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(message_input)
        .push(severity_input)
        .push(show_button);

    let items_heading = Text::new(ctx.i18n.tr("demo-items-heading")).size(typography::TITLE_SM);

    let mut items_list = Column::new().spacing(spacing::XS);
    if ctx.items.is_empty() {
        items_list = items_list.push(Text::new(ctx.i18n.tr("demo-empty-list")).size(typography::BODY));
    } else {
        for (index, item) in ctx.items.iter().enumerate() {
            let delete_button =
                button(Text::new(ctx.i18n.tr("demo-delete")).size(typography::CAPTION))
                    .on_press(Message::RequestDelete(index))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::button::secondary);

            items_list = items_list.push(
                Row::new()
                    .spacing(spacing::SM)
                    .align_y(alignment::Vertical::Center)
                    .push(
                        Container::new(Text::new(item.as_str()).size(typography::BODY))
                            .width(Length::Fill),
                    )
                    .push(delete_button),
            );
        }
    }

    let panel_content = Column::new()
        .spacing(spacing::LG)
        .push(heading)
        .push(toast_controls)
        .push(items_heading)
        .push(items_list);

    let panel = Container::new(panel_content)
        .width(Length::Fixed(sizing::DIALOG_WIDTH + sizing::TOAST_WIDTH))
        .padding(spacing::XL)
        .style(styles::container::panel);

    Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Top)
        .padding(spacing::XL)
        .into()
}
