// SPDX-License-Identifier: MPL-2.0
//! The in-session album selection: an ordered list of unique image paths.
//!
//! Uniqueness is by exact path string. Removal matches by basename because
//! that is what the list widget displays; see DESIGN.md for the rationale
//! behind the asymmetry.

use crate::error::{Error, Result, ValidationError};
use std::path::{Path, PathBuf};

/// Minimum number of images an album must hold to be viewed or saved.
pub const MIN_ALBUM_IMAGES: usize = 5;
/// Maximum number of images the selection (and any album) may hold.
pub const MAX_ALBUM_IMAGES: usize = 10;

/// Checks the [5, 10] album bound shared by the view and save operations.
///
/// # Errors
///
/// Returns [`Error::Validation`] with `TooFew` below the minimum and
/// `TooMany` above the maximum.
pub fn validate_album_size(count: usize) -> Result<()> {
    if count < MIN_ALBUM_IMAGES {
        return Err(ValidationError::TooFew { count }.into());
    }
    if count > MAX_ALBUM_IMAGES {
        return Err(ValidationError::TooMany { count }.into());
    }
    Ok(())
}

/// Result of one `add` batch: what was appended and what was skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddOutcome {
    /// Candidates appended to the selection, in batch order.
    pub added: Vec<PathBuf>,
    /// Candidates skipped because their exact path was already selected.
    pub duplicates: usize,
    /// Candidates skipped because the selection had reached capacity.
    pub at_capacity: usize,
}

impl AddOutcome {
    /// True when nothing in the batch was appended.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty()
    }
}

/// Ordered, deduplicated set of selected image paths, capped at
/// [`MAX_ALBUM_IMAGES`].
#[derive(Debug, Clone, Default)]
pub struct Selection {
    images: Vec<PathBuf>,
}

/// Basename shown for a selected path in the list and used for removal.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// True once the selection holds [`MAX_ALBUM_IMAGES`] entries.
    pub fn is_full(&self) -> bool {
        self.images.len() >= MAX_ALBUM_IMAGES
    }

    pub fn contains<P: AsRef<Path>>(&self, path: P) -> bool {
        self.images.iter().any(|p| p == path.as_ref())
    }

    /// Selected paths in insertion order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.images
    }

    /// Basenames in insertion order, as shown in the list widget.
    pub fn display_names(&self) -> Vec<String> {
        self.images.iter().map(|p| display_name(p)).collect()
    }

    /// Appends each candidate unless it is already selected or the
    /// selection is at capacity. The batch is attempted path by path, so
    /// a batch that only partially fits still appends the leading part.
    pub fn add<I>(&mut self, candidates: I) -> AddOutcome
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut outcome = AddOutcome::default();
        for candidate in candidates {
            if self.contains(&candidate) {
                outcome.duplicates += 1;
            } else if self.is_full() {
                outcome.at_capacity += 1;
            } else {
                self.images.push(candidate.clone());
                outcome.added.push(candidate);
            }
        }
        outcome
    }

    /// Removes the first entry whose basename equals `name` and returns
    /// its full path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when no entry matches: the displayed
    /// selection went stale (e.g. removed twice in quick succession).
    pub fn remove_by_name(&mut self, name: &str) -> Result<PathBuf> {
        let position = self
            .images
            .iter()
            .position(|path| display_name(path) == name)
            .ok_or_else(|| Error::NotFound {
                name: name.to_string(),
            })?;
        Ok(self.images.remove(position))
    }

    /// Checks this selection against the [5, 10] album bound.
    pub fn validate_album_size(&self) -> Result<()> {
        validate_album_size(self.images.len())
    }
}
