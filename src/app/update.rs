// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the main `update` function and the specialized
//! handlers for the five user actions (add, remove, view, save, exit).
//! Every handler runs to completion before the next message is processed;
//! the only asynchronous steps are the file dialog and thumbnail loading,
//! whose results come back as messages.

use super::{AlbumView, App, Message, Screen, ThumbnailSlot};
use crate::album::grid::ALBUM_WINDOW_WIDTH;
use crate::album::selection::AddOutcome;
use crate::album::{self, AlbumLayout, MAX_ALBUM_IMAGES};
use crate::media::extensions::{IMAGE_EXTENSIONS, IMAGE_FILTER_NAME};
use crate::media::{self, MAX_THUMBNAIL_HEIGHT, MAX_THUMBNAIL_WIDTH};
use crate::ui::album_screen;
use crate::ui::name_prompt;
use crate::ui::notifications::{Manager, Notification};
use crate::ui::selection_screen;
use iced::{window, Size, Task};
use std::path::PathBuf;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Selection(message) => {
            match selection_screen::update(&mut app.selection_screen, message) {
                selection_screen::Event::None => Task::none(),
                selection_screen::Event::AddImages => handle_add_images(app),
                selection_screen::Event::RemoveImage { selected_name } => {
                    handle_remove_image(app, &selected_name)
                }
                selection_screen::Event::ViewAlbum => handle_view_album(app),
                selection_screen::Event::SaveAlbum => handle_save_requested(app),
                selection_screen::Event::Exit => window::get_latest().and_then(window::close),
            }
        }
        Message::ImagesPicked(paths) => handle_images_picked(app, paths),
        Message::AlbumThumbnailsLoaded(slots) => handle_thumbnails_loaded(app, slots),
        Message::Album(message) => match album_screen::update(message) {
            album_screen::Event::Dismiss => handle_album_dismissed(app),
        },
        Message::NamePrompt(message) => {
            let Some(prompt) = app.name_prompt.as_mut() else {
                return Task::none();
            };
            match name_prompt::update(prompt, message) {
                name_prompt::Event::None => Task::none(),
                name_prompt::Event::Submit(name) => {
                    app.name_prompt = None;
                    handle_save_album(app, &name)
                }
                name_prompt::Event::Cancel => {
                    app.name_prompt = None;
                    Task::none()
                }
            }
        }
        Message::Notification(message) => {
            app.notifications.handle_message(&message);
            Task::none()
        }
        Message::Tick(_) => {
            app.notifications.tick();
            Task::none()
        }
        Message::EscapePressed => handle_escape(app),
    }
}

/// Opens the multi-file picker, unless the selection is already full (the
/// user is informed and no dialog appears).
fn handle_add_images(app: &mut App) -> Task<Message> {
    if app.selection.is_full() {
        app.notifications.push(
            Notification::warning("notification-limit-reached")
                .with_arg("max", MAX_ALBUM_IMAGES.to_string()),
        );
        return Task::none();
    }

    let title = app.i18n.tr("button-add-images");
    let last_directory = app.last_picked_dir.clone();
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_title(&title)
                .add_filter(IMAGE_FILTER_NAME, &IMAGE_EXTENSIONS);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            match dialog.pick_files().await {
                Some(handles) => handles
                    .iter()
                    .map(|handle| handle.path().to_path_buf())
                    .collect(),
                // Cancelled: an empty batch is a no-op downstream.
                None => Vec::new(),
            }
        },
        Message::ImagesPicked,
    )
}

/// Feeds picked paths through the selection's add rules and reports the
/// outcome.
fn handle_images_picked(app: &mut App, paths: Vec<PathBuf>) -> Task<Message> {
    if paths.is_empty() {
        return Task::none();
    }

    if let Some(parent) = paths[0].parent() {
        app.last_picked_dir = Some(parent.to_path_buf());
    }

    // The dialog normally returns existing files; startup-style races
    // (file deleted between pick and add) are silently skipped, as the
    // original program did.
    let existing: Vec<PathBuf> = paths.into_iter().filter(|path| path.exists()).collect();
    let outcome = app.selection.add(existing);
    report_add_outcome(&mut app.notifications, &outcome);

    Task::none()
}

/// Reports an add outcome: how many images were appended, how many were
/// already selected, and whether the capacity limit cut the batch short.
pub(super) fn report_add_outcome(notifications: &mut Manager, outcome: &AddOutcome) {
    if !outcome.added.is_empty() {
        notifications.push(
            Notification::success("notification-images-added")
                .with_arg("count", outcome.added.len().to_string()),
        );
    }
    if outcome.duplicates > 0 {
        notifications.push(
            Notification::info("notification-duplicates-skipped")
                .with_arg("count", outcome.duplicates.to_string()),
        );
    }
    if outcome.at_capacity > 0 {
        notifications.push(
            Notification::warning("notification-limit-reached")
                .with_arg("max", MAX_ALBUM_IMAGES.to_string()),
        );
    }
}

fn handle_remove_image(app: &mut App, selected_name: &str) -> Task<Message> {
    match app.selection.remove_by_name(selected_name) {
        Ok(_) => app.selection_screen.clear_highlight(),
        Err(error) => app.notifications.push(Notification::from_error(&error)),
    }
    Task::none()
}

/// Validates the album bound and kicks off thumbnail loading; the album
/// screen is entered when the batch completes.
fn handle_view_album(app: &mut App) -> Task<Message> {
    if app.loading_album {
        return Task::none();
    }

    if let Err(error) = AlbumLayout::for_images(app.selection.len()) {
        app.notifications.push(Notification::from_error(&error));
        return Task::none();
    }

    app.loading_album = true;
    let paths = app.selection.paths().to_vec();
    Task::perform(
        load_album_thumbnails(paths),
        Message::AlbumThumbnailsLoaded,
    )
}

/// Decodes every album thumbnail off the UI thread, keeping per-file
/// failures alongside successes.
async fn load_album_thumbnails(paths: Vec<PathBuf>) -> Vec<ThumbnailSlot> {
    tokio::task::spawn_blocking(move || {
        paths
            .into_iter()
            .map(|path| {
                let result =
                    media::load_thumbnail(&path, MAX_THUMBNAIL_WIDTH, MAX_THUMBNAIL_HEIGHT);
                ThumbnailSlot { path, result }
            })
            .collect()
    })
    .await
    .unwrap_or_default()
}

fn handle_thumbnails_loaded(app: &mut App, slots: Vec<ThumbnailSlot>) -> Task<Message> {
    app.loading_album = false;

    // The grid is shaped by the requested image count; unloadable files
    // are reported per item and skipped from the cells.
    let layout = match AlbumLayout::for_images(slots.len()) {
        Ok(layout) => layout,
        Err(error) => {
            app.notifications.push(Notification::from_error(&error));
            return Task::none();
        }
    };

    let mut thumbnails = Vec::with_capacity(slots.len());
    for slot in slots {
        match slot.result {
            Ok(thumbnail) => thumbnails.push(thumbnail),
            Err(error) => app.notifications.push(Notification::from_error(&error)),
        }
    }

    app.album_view = Some(AlbumView { thumbnails, layout });
    app.screen = Screen::Album;

    let size = Size::new(ALBUM_WINDOW_WIDTH, layout.window_height());
    window::get_latest().and_then(move |id| window::resize(id, size))
}

fn handle_album_dismissed(app: &mut App) -> Task<Message> {
    app.album_view = None;
    app.screen = Screen::Selection;

    let size = Size::new(
        super::WINDOW_DEFAULT_WIDTH as f32,
        super::WINDOW_DEFAULT_HEIGHT as f32,
    );
    window::get_latest().and_then(move |id| window::resize(id, size))
}

/// Opens the album-name dialog, unless the selection size already rules
/// the save out.
fn handle_save_requested(app: &mut App) -> Task<Message> {
    if let Err(error) = app.selection.validate_album_size() {
        app.notifications.push(Notification::from_error(&error));
        return Task::none();
    }

    app.name_prompt = Some(name_prompt::State::new());
    Task::none()
}

/// Runs the persister; the selection is kept either way so the user can
/// continue editing or fix the name and retry.
fn handle_save_album(app: &mut App, name: &str) -> Task<Message> {
    match album::save_album(&app.albums_root, name, app.selection.paths()) {
        Ok(saved) => {
            app.notifications.push(
                Notification::success("notification-album-saved")
                    .with_arg("name", name)
                    .with_arg("path", saved.path.display().to_string()),
            );
        }
        Err(error) => app.notifications.push(Notification::from_error(&error)),
    }
    Task::none()
}

/// Escape dismisses the topmost modal surface: the name prompt first,
/// then the album screen.
fn handle_escape(app: &mut App) -> Task<Message> {
    if app.name_prompt.is_some() {
        app.name_prompt = None;
        return Task::none();
    }
    if app.screen == Screen::Album {
        return handle_album_dismissed(app);
    }
    Task::none()
}
