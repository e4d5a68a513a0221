// SPDX-License-Identifier: MPL-2.0
//! Modal dialog asking for the name of the album about to be saved.
//!
//! Rendered as a card stacked over the selection screen behind a dimmed
//! backdrop. Clicking the backdrop or pressing Escape cancels; submitting
//! requires a non-blank name (the persister still validates separators).

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{
    button, center, mouse_area, opaque, text_input, Column, Container, Row, Stack, Text,
};
use iced::{alignment, Element, Length};

/// State of the name prompt: the text entered so far.
#[derive(Debug, Clone, Default)]
pub struct State {
    value: String,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    fn submittable(&self) -> bool {
        !self.value.trim().is_empty()
    }
}

/// Messages emitted by the name prompt.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    ConfirmPressed,
    CancelPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The user confirmed this (trimmed, non-blank) album name.
    Submit(String),
    Cancel,
}

/// Process a name prompt message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::NameChanged(value) => {
            state.value = value;
            Event::None
        }
        Message::ConfirmPressed => {
            if state.submittable() {
                Event::Submit(state.value.trim().to_string())
            } else {
                Event::None
            }
        }
        Message::CancelPressed => Event::Cancel,
    }
}

/// Render the dialog card.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("name-prompt-title")).size(typography::TITLE_SM);
    let label = Text::new(i18n.tr("name-prompt-label")).size(typography::BODY);

    let input = text_input(&i18n.tr("name-prompt-placeholder"), &state.value)
        .on_input(Message::NameChanged)
        .on_submit(Message::ConfirmPressed)
        .size(typography::BODY_LG)
        .padding(spacing::XS);

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new(i18n.tr("name-prompt-cancel")).size(typography::BODY))
                .on_press(Message::CancelPressed)
                .padding(spacing::XS)
                .style(button_styles::subtle),
        )
        .push(
            button(Text::new(i18n.tr("name-prompt-save")).size(typography::BODY))
                .on_press_maybe(state.submittable().then_some(Message::ConfirmPressed))
                .padding(spacing::XS)
                .style(button_styles::primary),
        );

    let content = Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(label)
        .push(input)
        .push(
            Container::new(actions)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right),
        );

    Container::new(content)
        .width(Length::Fixed(sizing::NAME_PROMPT_WIDTH))
        .padding(spacing::LG)
        .style(container_styles::card)
        .into()
}

/// Stacks `dialog` over `base` behind a dimmed backdrop; clicking the
/// backdrop emits `on_blur`.
pub fn modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    dialog: Element<'a, M>,
    on_blur: M,
) -> Element<'a, M> {
    let backdrop = opaque(
        mouse_area(
            Container::new(center(opaque(dialog)))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(container_styles::backdrop),
        )
        .on_press(on_blur),
    );

    Stack::new().push(base).push(backdrop).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_updates_the_value() {
        let mut state = State::new();
        let event = update(&mut state, Message::NameChanged("Trip1".into()));

        assert_eq!(event, Event::None);
        assert_eq!(state.value(), "Trip1");
    }

    #[test]
    fn blank_names_cannot_be_submitted() {
        let mut state = State::new();
        update(&mut state, Message::NameChanged("   ".into()));

        assert_eq!(update(&mut state, Message::ConfirmPressed), Event::None);
    }

    #[test]
    fn submitted_names_are_trimmed() {
        let mut state = State::new();
        update(&mut state, Message::NameChanged("  Vacation  ".into()));

        match update(&mut state, Message::ConfirmPressed) {
            Event::Submit(name) => assert_eq!(name, "Vacation"),
            other => panic!("expected Submit event, got {other:?}"),
        }
    }

    #[test]
    fn cancel_always_cancels() {
        let mut state = State::new();
        update(&mut state, Message::NameChanged("kept".into()));

        assert_eq!(update(&mut state, Message::CancelPressed), Event::Cancel);
    }
}
