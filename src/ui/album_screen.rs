// SPDX-License-Identifier: MPL-2.0
//! Modal album preview: thumbnails in a fixed-column grid.
//!
//! Cells flow left-to-right, top-to-bottom following an [`AlbumLayout`].
//! Thumbnails that failed to load were already skipped (and reported) by
//! the shell, so the grid packs the surviving cells and pads the final
//! row with placeholders to stay rectangular.

use crate::album::AlbumLayout;
use crate::i18n::fluent::I18n;
use crate::media::ThumbnailData;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{button, image, scrollable, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the album screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Successfully loaded thumbnails, in selection order.
    pub thumbnails: &'a [ThumbnailData],
    pub layout: AlbumLayout,
}

/// Messages emitted by the album screen.
#[derive(Debug, Clone)]
pub enum Message {
    Dismiss,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Dismiss,
}

/// Process an album screen message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::Dismiss => Event::Dismiss,
    }
}

/// Render the album grid.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("album-window-title")).size(typography::TITLE_MD);

    let back_button = button(
        Text::new(format!("← {}", ctx.i18n.tr("album-back-button"))).size(typography::BODY),
    )
    .on_press(Message::Dismiss)
    .padding(spacing::XS)
    .style(button_styles::subtle);

    let mut grid = Column::new().spacing(spacing::SM);
    for row_cells in ctx.thumbnails.chunks(ctx.layout.columns) {
        let mut row = Row::new().spacing(spacing::SM);
        for thumbnail in row_cells {
            row = row.push(thumbnail_cell(thumbnail));
        }
        for _ in row_cells.len()..ctx.layout.columns {
            row = row.push(placeholder_cell());
        }
        grid = grid.push(row);
    }

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(
            Row::new()
                .spacing(spacing::MD)
                .align_y(alignment::Vertical::Center)
                .push(back_button)
                .push(title),
        )
        .push(scrollable(grid));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn thumbnail_cell<'a>(thumbnail: &'a ThumbnailData) -> Element<'a, Message> {
    Container::new(image(thumbnail.handle.clone()))
        .width(Length::Fixed(sizing::THUMBNAIL_CELL))
        .height(Length::Fixed(sizing::THUMBNAIL_CELL))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(container_styles::thumbnail_cell)
        .into()
}

fn placeholder_cell<'a>() -> Element<'a, Message> {
    Container::new(Text::new(""))
        .width(Length::Fixed(sizing::THUMBNAIL_CELL))
        .height(Length::Fixed(sizing::THUMBNAIL_CELL))
        .style(container_styles::placeholder_cell)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_maps_to_the_dismiss_event() {
        assert_eq!(update(Message::Dismiss), Event::Dismiss);
    }
}
