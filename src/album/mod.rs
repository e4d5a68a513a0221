// SPDX-License-Identifier: MPL-2.0
//! Album domain logic: the bounded image selection, the grid layout for
//! previews, and persistence of a selection as a directory of copies.

pub mod grid;
pub mod persister;
pub mod selection;

pub use grid::AlbumLayout;
pub use persister::{save_album, SavedAlbum, DEFAULT_ALBUMS_DIR};
pub use selection::{
    validate_album_size, AddOutcome, Selection, MAX_ALBUM_IMAGES, MIN_ALBUM_IMAGES,
};
