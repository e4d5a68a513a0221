// SPDX-License-Identifier: MPL-2.0
//! The accepted image extension set and the matching file-dialog filter.

use std::path::Path;

/// Extensions accepted by the file picker and the startup arguments.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Filter name shown by the native file dialog next to the extension list.
pub const IMAGE_FILTER_NAME: &str = "Images";

/// Returns `true` when `path` carries one of the accepted image extensions.
///
/// The comparison is case-insensitive; a path without an extension is not
/// an image.
pub fn is_supported_image<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|candidate| ext.eq_ignore_ascii_case(candidate))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_listed_extension() {
        for ext in IMAGE_EXTENSIONS {
            let name = format!("photo.{}", ext);
            assert!(is_supported_image(&name), "{} should be accepted", name);
        }
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(is_supported_image("HOLIDAY.JPG"));
        assert!(is_supported_image("scan.PnG"));
    }

    #[test]
    fn rejects_unlisted_extensions_and_bare_names() {
        assert!(!is_supported_image("movie.mp4"));
        assert!(!is_supported_image("vector.svg"));
        assert!(!is_supported_image("README"));
        assert!(!is_supported_image(""));
    }
}
