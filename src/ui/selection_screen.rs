// SPDX-License-Identifier: MPL-2.0
//! Main screen: the list of selected images and the album actions.
//!
//! The list shows basenames; a single entry can be highlighted and the
//! remove action targets that highlight. All five actions (add, remove,
//! view, save, exit) bubble up to the shell as typed events.

use crate::album::MAX_ALBUM_IMAGES;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// State for the selection screen (tracks the highlighted entry).
#[derive(Debug, Clone, Default)]
pub struct State {
    highlighted: Option<String>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently highlighted display name, if any.
    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }

    /// Drops the highlight (after a removal or when the list is rebuilt).
    pub fn clear_highlight(&mut self) {
        self.highlighted = None;
    }
}

/// Contextual data needed to render the selection screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    /// Basenames of the selected images, in selection order.
    pub names: Vec<String>,
}

/// Messages emitted by the selection screen.
#[derive(Debug, Clone)]
pub enum Message {
    EntryPressed(String),
    AddPressed,
    RemovePressed,
    ViewPressed,
    SavePressed,
    ExitPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    AddImages,
    /// Remove the entry with this display name.
    RemoveImage { selected_name: String },
    ViewAlbum,
    SaveAlbum,
    Exit,
}

/// Process a selection screen message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::EntryPressed(name) => {
            // Pressing the highlighted entry clears the highlight.
            if state.highlighted.as_deref() == Some(name.as_str()) {
                state.highlighted = None;
            } else {
                state.highlighted = Some(name);
            }
            Event::None
        }
        Message::AddPressed => Event::AddImages,
        Message::RemovePressed => match state.highlighted.clone() {
            Some(selected_name) => Event::RemoveImage { selected_name },
            // Removing with nothing highlighted is a no-op.
            None => Event::None,
        },
        Message::ViewPressed => Event::ViewAlbum,
        Message::SavePressed => Event::SaveAlbum,
        Message::ExitPressed => Event::Exit,
    }
}

/// Render the selection screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading = Text::new(ctx.i18n.tr("selection-heading")).size(typography::TITLE_MD);

    let count = ctx.names.len().to_string();
    let max = MAX_ALBUM_IMAGES.to_string();
    let counter = Text::new(ctx.i18n.tr_with_args(
        "selection-count",
        &[("count", count.as_str()), ("max", max.as_str())],
    ))
    .size(typography::CAPTION);

    let list: Element<'a, Message> = if ctx.names.is_empty() {
        Text::new(ctx.i18n.tr("selection-empty"))
            .size(typography::BODY)
            .into()
    } else {
        let rows = ctx.names.iter().map(|name| {
            let selected = ctx.state.highlighted() == Some(name.as_str());
            button(Text::new(name.clone()).size(typography::BODY))
                .width(Length::Fill)
                .height(Length::Fixed(sizing::LIST_ROW_HEIGHT))
                .on_press(Message::EntryPressed(name.clone()))
                .style(button_styles::list_row(selected))
                .into()
        });
        scrollable(Column::with_children(rows).spacing(spacing::XXS)).into()
    };

    let list_panel = Container::new(list)
        .width(Length::Fixed(sizing::SELECTION_LIST_WIDTH))
        .height(Length::Fill)
        .padding(spacing::XS)
        .style(container_styles::panel);

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new(ctx.i18n.tr("button-add-images")).size(typography::BODY))
                .on_press(Message::AddPressed)
                .padding(spacing::XS)
                .style(button_styles::primary),
        )
        .push(
            button(Text::new(ctx.i18n.tr("button-remove-image")).size(typography::BODY))
                .on_press_maybe(ctx.state.highlighted().map(|_| Message::RemovePressed))
                .padding(spacing::XS)
                .style(button_styles::destructive),
        )
        .push(
            button(Text::new(ctx.i18n.tr("button-view-album")).size(typography::BODY))
                .on_press(Message::ViewPressed)
                .padding(spacing::XS)
                .style(button_styles::primary),
        )
        .push(
            button(Text::new(ctx.i18n.tr("button-save-album")).size(typography::BODY))
                .on_press(Message::SavePressed)
                .padding(spacing::XS)
                .style(button_styles::primary),
        )
        .push(
            button(Text::new(ctx.i18n.tr("button-exit")).size(typography::BODY))
                .on_press(Message::ExitPressed)
                .padding(spacing::XS)
                .style(button_styles::subtle),
        );

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(counter)
        .push(list_panel)
        .push(actions);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressing_an_entry_highlights_it() {
        let mut state = State::new();
        let event = update(&mut state, Message::EntryPressed("one.png".into()));

        assert_eq!(event, Event::None);
        assert_eq!(state.highlighted(), Some("one.png"));
    }

    #[test]
    fn pressing_the_highlighted_entry_clears_the_highlight() {
        let mut state = State::new();
        update(&mut state, Message::EntryPressed("one.png".into()));
        update(&mut state, Message::EntryPressed("one.png".into()));

        assert_eq!(state.highlighted(), None);
    }

    #[test]
    fn remove_without_highlight_is_a_no_op() {
        let mut state = State::new();
        assert_eq!(update(&mut state, Message::RemovePressed), Event::None);
    }

    #[test]
    fn remove_with_highlight_names_the_entry() {
        let mut state = State::new();
        update(&mut state, Message::EntryPressed("two.png".into()));

        match update(&mut state, Message::RemovePressed) {
            Event::RemoveImage { selected_name } => assert_eq!(selected_name, "two.png"),
            other => panic!("expected RemoveImage event, got {other:?}"),
        }
    }

    #[test]
    fn action_buttons_map_to_their_events() {
        let mut state = State::new();
        assert_eq!(update(&mut state, Message::AddPressed), Event::AddImages);
        assert_eq!(update(&mut state, Message::ViewPressed), Event::ViewAlbum);
        assert_eq!(update(&mut state, Message::SavePressed), Event::SaveAlbum);
        assert_eq!(update(&mut state, Message::ExitPressed), Event::Exit);
    }
}
