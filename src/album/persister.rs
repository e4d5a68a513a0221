// SPDX-License-Identifier: MPL-2.0
//! Saving a selection as an album: a named directory of file copies.
//!
//! An album is created exactly once. The copy loop has no rollback; a
//! failing copy leaves the files copied so far on disk and reports the
//! offending path.

use crate::album::selection::{display_name, validate_album_size};
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Albums root created under the working directory when no override is
/// configured.
pub const DEFAULT_ALBUMS_DIR: &str = "Albums";

/// Successful save: where the album landed and how many files it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedAlbum {
    pub path: PathBuf,
    pub copied: usize,
}

/// Returns `Err(InvalidAlbumName)` for names that are blank, are `.` or
/// `..`, or contain a path separator, since any of those could land the
/// album outside `root`.
fn validate_album_name(name: &str) -> Result<()> {
    let trimmed = name.trim();
    let escapes_root = trimmed.is_empty()
        || trimmed == "."
        || trimmed == ".."
        || trimmed.contains('/')
        || trimmed.contains('\\');
    if escapes_root {
        return Err(Error::InvalidAlbumName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Creates `<root>/<name>` and copies every image into it, preserving
/// basenames.
///
/// The albums root is created lazily on first save. The album directory
/// must not already exist; there is no merge and no overwrite.
///
/// # Errors
///
/// - [`Error::InvalidAlbumName`] for names that would escape the root.
/// - [`Error::Validation`] when the image count is outside [5, 10].
/// - [`Error::DuplicateAlbum`] when `<root>/<name>` already exists
///   (nothing is created in that case).
/// - [`Error::Copy`] naming the first source file that failed to copy;
///   earlier copies stay on disk.
pub fn save_album(root: &Path, name: &str, images: &[PathBuf]) -> Result<SavedAlbum> {
    validate_album_name(name)?;
    validate_album_size(images.len())?;

    fs::create_dir_all(root)?;

    let album_dir = root.join(name.trim());
    if album_dir.exists() {
        return Err(Error::DuplicateAlbum {
            name: name.trim().to_string(),
        });
    }
    fs::create_dir(&album_dir)?;

    let mut copied = 0;
    for source in images {
        let destination = album_dir.join(display_name(source));
        fs::copy(source, &destination).map_err(|e| Error::Copy {
            path: source.clone(),
            reason: e.to_string(),
        })?;
        copied += 1;
    }

    Ok(SavedAlbum {
        path: album_dir,
        copied,
    })
}
