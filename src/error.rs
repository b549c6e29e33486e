// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Svg(String),
    Config(String),
    Gallery(GalleryError),
}

/// Construction-time problems with the gallery contents.
///
/// None of these can happen while navigating: once a store exists its
/// cursor is always valid.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryError {
    /// The store was given no entries to show.
    Empty,

    /// The catalog names an image that is not bundled with the application.
    MissingResource(String),

    /// The catalog manifest could not be parsed.
    InvalidCatalog(String),
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::Empty => write!(f, "Gallery has no entries"),
            GalleryError::MissingResource(name) => {
                write!(f, "Missing gallery resource: {}", name)
            }
            GalleryError::InvalidCatalog(msg) => write!(f, "Invalid catalog: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Gallery(e) => write!(f, "Gallery Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<GalleryError> for Error {
    fn from(err: GalleryError) -> Self {
        Error::Gallery(err)
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
