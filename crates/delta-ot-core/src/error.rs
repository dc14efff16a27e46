//! Error types for the delta core.
//!
//! The algebra itself (push, compose, transform, position mapping) is total and
//! never fails. Errors only arise at the boundaries: decoding an envelope and
//! validating op lists that were supplied from outside.

use thiserror::Error;

/// Errors raised while decoding or constructing deltas from external input.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("malformed op: {0}")]
    MalformedOp(String),

    #[error("encoding error: {0}")]
    EncodingError(String),

    #[error("decoding error: {0}")]
    DecodingError(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::DecodingError(e.to_string())
    }
}

/// Structural problems found in an op list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("op {index} has zero length")]
    ZeroLengthOp { index: usize },

    #[error("op {index} is not an insert; a document may only contain inserts")]
    NotADocument { index: usize },

    #[error("edit spans {base_length} characters but the document only has {document_length}")]
    LengthMismatch {
        base_length: usize,
        document_length: usize,
    },
}
