// src/error.rs

//! Error types for recipe storage and parsing

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the recipe model, codec, and store
#[derive(Debug, Error)]
pub enum Error {
    /// The recipe behind a handle or index does not exist
    #[error("Recipe not found: {0}")]
    NotFound(String),

    /// A stored document is malformed or missing a required field
    #[error("Failed to decode recipe: {0}")]
    Decode(#[from] serde_json::Error),

    /// A stored document is not valid UTF-8
    #[error("Recipe file is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Failed to encode recipe: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The storage root exists but is not a directory
    #[error("Storage path is not a directory: {}", .0.display())]
    StorageRoot(PathBuf),
}

/// Result type for recipe operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True for errors that mean "the record is gone" rather than "something broke"
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound(_) => true,
            Error::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// True for stored documents that exist but cannot be turned into a recipe
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::Decode(_) | Error::Encoding(_))
    }
}
