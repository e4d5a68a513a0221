// SPDX-License-Identifier: MPL-2.0
//! Image handling: the accepted format set and bounded thumbnail creation.

pub mod extensions;
pub mod thumbnail;

pub use thumbnail::{load_thumbnail, ThumbnailData, MAX_THUMBNAIL_HEIGHT, MAX_THUMBNAIL_WIDTH};
