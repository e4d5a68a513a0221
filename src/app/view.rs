// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current
//! screen, the toast overlay, and the album-name dialog when it is open.

use super::{App, Message, Screen};
use crate::ui::album_screen;
use crate::ui::name_prompt;
use crate::ui::notifications::Toast;
use crate::ui::selection_screen;
use iced::widget::{Container, Stack, Text};
use iced::{Element, Length};

/// Renders the current application view based on the active screen.
pub(super) fn view(app: &App) -> Element<'_, Message> {
    let screen_view: Element<'_, Message> = match app.screen {
        Screen::Selection => selection_screen::view(selection_screen::ViewContext {
            i18n: &app.i18n,
            state: &app.selection_screen,
            names: app.selection.display_names(),
        })
        .map(Message::Selection),
        Screen::Album => view_album(app),
    };

    let toasts = Toast::view_overlay(&app.notifications, &app.i18n).map(Message::Notification);
    let base: Element<'_, Message> = Stack::new().push(screen_view).push(toasts).into();

    match app.name_prompt.as_ref() {
        Some(prompt) => name_prompt::modal(
            base,
            name_prompt::view(prompt, &app.i18n).map(Message::NamePrompt),
            Message::NamePrompt(name_prompt::Message::CancelPressed),
        ),
        None => base,
    }
}

fn view_album(app: &App) -> Element<'_, Message> {
    match app.album_view.as_ref() {
        Some(album_view) => album_screen::view(album_screen::ViewContext {
            i18n: &app.i18n,
            thumbnails: &album_view.thumbnails,
            layout: album_view.layout,
        })
        .map(Message::Album),
        // Unreachable through normal flow; keep a graceful fallback.
        None => Container::new(Text::new(app.i18n.tr("album-window-title")))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    }
}
