// SPDX-License-Identifier: MPL-2.0
//! Confirmation dialog state machine and modal widget.
//!
//! The dialog owns its message text and control labels as explicit state;
//! the view is a pure function of that state, so there is no implicit
//! precondition on the surrounding widget tree.

use super::responder::Responder;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, overlay};
use iced::widget::{button, center, mouse_area, opaque, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Messages emitted by the dialog controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The affirmative control was activated.
    Confirm,
    /// A dismiss control (cancel button or backdrop) was activated.
    Dismiss,
}

/// An armed confirmation request: the question and its outcome slot.
struct Request<M> {
    message: String,
    responder: Responder<M>,
}

/// Confirmation dialog state.
///
/// At most one request is armed at a time; arming a new one replaces (and
/// silently cancels) the previous request.
pub struct State<M> {
    request: Option<Request<M>>,
}

impl<M> Default for State<M> {
    fn default() -> Self {
        Self { request: None }
    }
}

impl<M> State<M> {
    /// Creates a dialog with no armed request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a confirmation request.
    ///
    /// `on_result` maps the outcome to a caller message: `true` when the
    /// affirmative control is chosen, `false` for every dismissal path. It
    /// fires at most once per request.
    pub fn open(&mut self, message: impl Into<String>, on_result: impl FnOnce(bool) -> M + 'static) {
        self.request = Some(Request {
            message: message.into(),
            responder: Responder::new(on_result),
        });
    }

    /// Returns whether a request is armed (the modal is visible).
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.request.is_some()
    }

    /// Returns the armed question text, if any.
    #[must_use]
    pub fn message_text(&self) -> Option<&str> {
        self.request.as_ref().map(|r| r.message.as_str())
    }

    /// Handles a dialog message: closes the dialog and resolves the outcome.
    ///
    /// The returned caller message, if any, should be fed back into the
    /// application's update loop. Activations arriving after the dialog
    /// closed resolve nothing.
    pub fn update(&mut self, message: Message) -> Option<M> {
        let confirmed = matches!(message, Message::Confirm);
        let mut request = self.request.take()?;
        request.responder.resolve(confirmed)
    }

    /// Renders the modal: dimmed backdrop plus the centered dialog card.
    ///
    /// Renders nothing when no request is armed. Pressing the backdrop is a
    /// dismissal path, equivalent to the cancel button.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let Some(request) = &self.request else {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        };

        let title = Text::new(i18n.tr("confirm-title"))
            .size(typography::TITLE_MD)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        // The question is rendered verbatim, never interpreted as markup
        let body = Text::new(request.message.as_str())
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let cancel_button = button(Text::new(i18n.tr("confirm-cancel")).size(typography::BODY))
            .on_press(Message::Dismiss)
            .padding([spacing::XXS, spacing::MD])
            .style(button_styles::secondary);

        let ok_button = button(Text::new(i18n.tr("confirm-ok")).size(typography::BODY))
            .on_press(Message::Confirm)
            .padding([spacing::XXS, spacing::MD])
            .style(button_styles::primary);

        let actions = Row::new()
            .spacing(spacing::SM)
            .push(cancel_button)
            .push(ok_button);

        let card_content = Column::new()
            .spacing(spacing::MD)
            .push(title)
            .push(body)
            .push(
                Container::new(actions)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Right),
            );

        let card = Container::new(card_content)
            .width(Length::Fixed(sizing::DIALOG_WIDTH))
            .padding(spacing::LG)
            .style(overlay::dialog);

        // The inner opaque layer keeps card clicks from reaching the
        // backdrop's dismiss handler
        opaque(mouse_area(center(opaque(card)).style(overlay::backdrop)).on_press(Message::Dismiss))
    }
}

impl<M> std::fmt::Debug for State<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("open", &self.is_open())
            .field("message", &self.message_text())
            .finish()
    }
}
