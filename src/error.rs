// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// The file at `path` is missing, unreadable, or not a decodable image.
    ImageLoad { path: PathBuf, reason: String },
    /// Selection count outside the [5, 10] album bound at view/save time.
    Validation(ValidationError),
    /// A displayed name no longer matches any selected image (stale selection).
    NotFound { name: String },
    /// An album directory with that name already exists under the albums root.
    DuplicateAlbum { name: String },
    /// The album name is blank or would escape the albums root.
    InvalidAlbumName { name: String },
    /// Copying one source file into the album directory failed.
    Copy { path: PathBuf, reason: String },
}

/// Album size violations for the view and save operations.
///
/// The selection itself may transiently hold 0-10 entries while being
/// edited; only viewing and saving require the closed interval [5, 10].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    TooFew { count: usize },
    TooMany { count: usize },
}

impl Error {
    /// Returns the i18n message key used to report this error to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::ImageLoad { .. } => "error-image-load",
            Error::Validation(ValidationError::TooFew { .. }) => "error-album-too-few",
            Error::Validation(ValidationError::TooMany { .. }) => "error-album-too-many",
            Error::NotFound { .. } => "error-image-not-found",
            Error::DuplicateAlbum { .. } => "error-album-duplicate",
            Error::InvalidAlbumName { .. } => "error-album-invalid-name",
            Error::Copy { .. } => "error-album-copy",
        }
    }

    /// Interpolation arguments accompanying [`Error::i18n_key`].
    ///
    /// Keys match the placeholders in the Fluent messages (`$path`,
    /// `$name`, `$count`, `$reason`).
    pub fn i18n_args(&self) -> Vec<(String, String)> {
        match self {
            Error::Io(reason) | Error::Config(reason) => {
                vec![("reason".into(), reason.clone())]
            }
            Error::ImageLoad { path, reason } => vec![
                ("path".into(), path.display().to_string()),
                ("reason".into(), reason.clone()),
            ],
            Error::Validation(
                ValidationError::TooFew { count } | ValidationError::TooMany { count },
            ) => {
                vec![("count".into(), count.to_string())]
            }
            Error::NotFound { name }
            | Error::DuplicateAlbum { name }
            | Error::InvalidAlbumName { name } => vec![("name".into(), name.clone())],
            Error::Copy { path, reason } => vec![
                ("path".into(), path.display().to_string()),
                ("reason".into(), reason.clone()),
            ],
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::TooFew { count } => {
                write!(f, "album needs at least 5 images, got {}", count)
            }
            ValidationError::TooMany { count } => {
                write!(f, "album holds at most 10 images, got {}", count)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::ImageLoad { path, reason } => {
                write!(f, "Failed to load image {}: {}", path.display(), reason)
            }
            Error::Validation(e) => write!(f, "Invalid album: {}", e),
            Error::NotFound { name } => {
                write!(f, "Image '{}' is no longer in the selection", name)
            }
            Error::DuplicateAlbum { name } => {
                write!(f, "Album '{}' already exists", name)
            }
            Error::InvalidAlbumName { name } => {
                write!(f, "'{}' is not a valid album name", name)
            }
            Error::Copy { path, reason } => {
                write!(f, "Failed to copy {}: {}", path.display(), reason)
            }
        }
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Validation(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
