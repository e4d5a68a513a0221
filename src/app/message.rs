// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::ThumbnailData;
use crate::ui::album_screen;
use crate::ui::name_prompt;
use crate::ui::notifications;
use crate::ui::selection_screen;
use std::path::PathBuf;
use std::time::Instant;

/// Outcome of loading one thumbnail for the album view.
///
/// Failures are carried alongside successes so the shell can report each
/// unloadable file and still render the rest of the grid.
#[derive(Debug, Clone)]
pub struct ThumbnailSlot {
    pub path: PathBuf,
    pub result: Result<ThumbnailData, Error>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Selection(selection_screen::Message),
    Album(album_screen::Message),
    NamePrompt(name_prompt::Message),
    Notification(notifications::NotificationMessage),
    /// Result of the multi-file picker dialog (empty when cancelled).
    ImagesPicked(Vec<PathBuf>),
    /// All thumbnails for a requested album view finished loading.
    AlbumThumbnailsLoaded(Vec<ThumbnailSlot>),
    /// Escape dismisses the topmost modal surface (prompt, then album).
    EscapePressed,
    /// Periodic tick driving notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ro`, `en-US`).
    pub lang: Option<String>,
    /// Image paths to preselect on startup, subject to the usual add rules.
    pub image_paths: Vec<PathBuf>,
}
