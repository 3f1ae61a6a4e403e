//! Error handling for the type tour.

use std::io;

/// Specialized error type for the type tour
#[derive(Debug, thiserror::Error)]
pub enum TourError {
    /// Error reading a file
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Error parsing JSON configuration or values
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A mandatory field was absent while building a shape
    #[error("Missing field `{field}` while building {shape}")]
    MissingField {
        shape: &'static str,
        field: &'static str,
    },

    /// A key that is not part of a record's key union
    #[error("Unknown key `{key}` for {shape}")]
    UnknownKey { shape: &'static str, key: String },

    /// A value that is not a member of an enumeration
    #[error("`{value}` is not a member of {enumeration}")]
    UnknownMember {
        enumeration: &'static str,
        value: String,
    },

    /// A value asserted to have a type it does not have
    #[error("Type assertion failed: expected {expected}, found {found}")]
    AssertionError {
        expected: &'static str,
        found: String,
    },
}

/// Result type for type tour operations
pub type Result<T> = std::result::Result<T, TourError>;
