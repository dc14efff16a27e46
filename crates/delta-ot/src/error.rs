//! Error types for document operations.

use delta_ot_core::{CoreError, ValidationError};
use thiserror::Error;

/// Errors that can occur while maintaining a document replica.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Encoding or decoding failed.
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// The edit or initial contents were structurally invalid.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Applying the edit would grow the document past the configured limit.
    #[error("document too long: {length} exceeds limit {max_length}")]
    MaxLengthExceeded { length: usize, max_length: usize },

    /// A state hash could not be parsed.
    #[error("invalid state hash: {0}")]
    InvalidHash(#[from] hex::FromHexError),
}

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, DocumentError>;
