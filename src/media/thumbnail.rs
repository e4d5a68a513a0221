// SPDX-License-Identifier: MPL-2.0
//! Bounded thumbnail creation for album previews.
//!
//! A thumbnail is an aspect-preserving downscale of a source image that
//! fits within a bounding box, re-encoded to PNG. Images already inside
//! the box are re-encoded at their original size; nothing is ever
//! upscaled.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::{GenericImageView, ImageFormat};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

/// Maximum thumbnail width in pixels.
pub const MAX_THUMBNAIL_WIDTH: u32 = 300;
/// Maximum thumbnail height in pixels.
pub const MAX_THUMBNAIL_HEIGHT: u32 = 300;

/// A decoded, bounded preview of a source image.
///
/// The PNG bytes are kept in an `Arc` so cloning the thumbnail (messages
/// are `Clone`) does not duplicate pixel data; the display handle shares
/// the same encoding.
#[derive(Debug, Clone)]
pub struct ThumbnailData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    png: Arc<Vec<u8>>,
}

impl ThumbnailData {
    /// Returns the PNG re-encoding backing the display handle.
    pub fn encoded_png(&self) -> &[u8] {
        &self.png
    }
}

/// Load the image at `path` and produce a thumbnail no larger than
/// `max_width`x`max_height`, preserving aspect ratio.
///
/// # Errors
///
/// Returns [`Error::ImageLoad`] when the file is missing, unreadable, or
/// not a decodable image. Callers report the failure per file and keep
/// processing the rest of the album.
pub fn load_thumbnail<P: AsRef<Path>>(
    path: P,
    max_width: u32,
    max_height: u32,
) -> Result<ThumbnailData> {
    let path = path.as_ref();

    let bytes = fs::read(path).map_err(|e| Error::ImageLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let decoded = image_rs::load_from_memory(&bytes).map_err(|e| Error::ImageLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let (width, height) = decoded.dimensions();
    let bounded = if width > max_width || height > max_height {
        decoded.thumbnail(max_width, max_height)
    } else {
        decoded
    };
    let (width, height) = bounded.dimensions();

    let mut png = Vec::new();
    bounded
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| Error::ImageLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let png = Arc::new(png);
    let handle = image::Handle::from_bytes(png.to_vec());

    Ok(ThumbnailData {
        handle,
        width,
        height,
        png,
    })
}
