// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Resource(ResourceError),
    Image(String),
}

/// Specific error types for card resource problems.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceError {
    /// A file referenced by the card manifest does not exist
    Missing(PathBuf),

    /// The card manifest itself could not be read
    ManifestUnreadable(String),

    /// The card manifest exists but is not valid TOML
    ManifestInvalid(String),

    /// The card directory does not exist
    DirectoryNotFound(PathBuf),
}

impl ResourceError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ResourceError::Missing(_) => "error-resource-missing",
            ResourceError::ManifestUnreadable(_) => "error-manifest-unreadable",
            ResourceError::ManifestInvalid(_) => "error-manifest-invalid",
            ResourceError::DirectoryNotFound(_) => "error-card-dir-not-found",
        }
    }
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::Missing(path) => {
                write!(f, "Missing card resource: {}", path.display())
            }
            ResourceError::ManifestUnreadable(msg) => {
                write!(f, "Card manifest unreadable: {}", msg)
            }
            ResourceError::ManifestInvalid(msg) => {
                write!(f, "Card manifest invalid: {}", msg)
            }
            ResourceError::DirectoryNotFound(path) => {
                write!(f, "Card directory not found: {}", path.display())
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Resource(e) => write!(f, "Resource Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ResourceError> for Error {
    fn from(err: ResourceError) -> Self {
        Error::Resource(err)
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

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
