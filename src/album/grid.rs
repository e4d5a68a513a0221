// SPDX-License-Identifier: MPL-2.0
//! Grid geometry for the album preview screen.
//!
//! Thumbnails flow left-to-right, top-to-bottom in a fixed-column grid:
//! five columns for albums of more than five images, otherwise one column
//! per image (a single row). The last row is padded with placeholder
//! cells so the grid stays rectangular, and albums spanning two rows get
//! a taller window.

use crate::album::selection::validate_album_size;
use crate::error::Result;

/// Column cap once an album spans more than one row.
pub const MAX_GRID_COLUMNS: usize = 5;

/// Album window width in logical pixels.
pub const ALBUM_WINDOW_WIDTH: f32 = 1800.0;
/// Album window height for a single-row album.
pub const ALBUM_WINDOW_HEIGHT_SHORT: f32 = 450.0;
/// Album window height once the grid spans two rows.
pub const ALBUM_WINDOW_HEIGHT_TALL: f32 = 700.0;

/// Geometry of the thumbnail grid for a validated album size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlbumLayout {
    /// Number of images the layout was computed for.
    pub image_count: usize,
    /// Fixed column count of the grid.
    pub columns: usize,
    /// Number of grid rows.
    pub rows: usize,
    /// Placeholder cells padding the final row.
    pub trailing_placeholders: usize,
}

impl AlbumLayout {
    /// Computes the grid for `image_count` images.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Validation`] when the count is
    /// outside the [5, 10] album bound.
    pub fn for_images(image_count: usize) -> Result<Self> {
        validate_album_size(image_count)?;

        let columns = if image_count > MAX_GRID_COLUMNS {
            MAX_GRID_COLUMNS
        } else {
            image_count
        };
        let rows = image_count.div_ceil(columns);
        let trailing_placeholders = rows * columns - image_count;

        Ok(Self {
            image_count,
            columns,
            rows,
            trailing_placeholders,
        })
    }

    /// Window height for this layout: taller once the grid spans more
    /// than one row.
    pub fn window_height(&self) -> f32 {
        if self.rows > 1 {
            ALBUM_WINDOW_HEIGHT_TALL
        } else {
            ALBUM_WINDOW_HEIGHT_SHORT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ValidationError};

    #[test]
    fn five_images_form_a_single_full_row() {
        let layout = AlbumLayout::for_images(5).expect("5 images are a valid album");
        assert_eq!(layout.columns, 5);
        assert_eq!(layout.rows, 1);
        assert_eq!(layout.trailing_placeholders, 0);
        assert_eq!(layout.window_height(), ALBUM_WINDOW_HEIGHT_SHORT);
    }

    #[test]
    fn six_images_span_two_rows_with_four_placeholders() {
        let layout = AlbumLayout::for_images(6).expect("6 images are a valid album");
        assert_eq!(layout.columns, 5);
        assert_eq!(layout.rows, 2);
        assert_eq!(layout.trailing_placeholders, 4);
        assert_eq!(layout.window_height(), ALBUM_WINDOW_HEIGHT_TALL);
    }

    #[test]
    fn ten_images_fill_two_rows_exactly() {
        let layout = AlbumLayout::for_images(10).expect("10 images are a valid album");
        assert_eq!(layout.columns, 5);
        assert_eq!(layout.rows, 2);
        assert_eq!(layout.trailing_placeholders, 0);
    }

    #[test]
    fn seven_images_pad_three_cells() {
        let layout = AlbumLayout::for_images(7).expect("7 images are a valid album");
        assert_eq!(layout.rows, 2);
        assert_eq!(layout.trailing_placeholders, 3);
    }

    #[test]
    fn counts_below_five_are_too_few() {
        for count in 0..5 {
            match AlbumLayout::for_images(count) {
                Err(Error::Validation(ValidationError::TooFew { count: c })) => {
                    assert_eq!(c, count);
                }
                other => panic!("expected TooFew for {count}, got {other:?}"),
            }
        }
    }

    #[test]
    fn eleven_images_are_too_many() {
        match AlbumLayout::for_images(11) {
            Err(Error::Validation(ValidationError::TooMany { count })) => assert_eq!(count, 11),
            other => panic!("expected TooMany, got {other:?}"),
        }
    }
}
