//! Structural checks for op lists that did not come through [`Delta::push`].
//!
//! Deltas built with the builder methods are canonical by construction.
//! Decoded or hand-assembled lists are used verbatim, so callers that accept
//! them from outside can check them here first.

use crate::delta::Delta;
use crate::error::ValidationError;
use crate::op::Op;

/// Reject zero-length ops.
pub fn validate_delta(delta: &Delta) -> Result<(), ValidationError> {
    match delta.iter().position(Op::is_empty) {
        Some(index) => Err(ValidationError::ZeroLengthOp { index }),
        None => Ok(()),
    }
}

/// Check that `delta` is a well-formed document: non-empty inserts only.
pub fn validate_document(delta: &Delta) -> Result<(), ValidationError> {
    validate_delta(delta)?;
    match delta.iter().position(|op| !op.is_insert()) {
        Some(index) => Err(ValidationError::NotADocument { index }),
        None => Ok(()),
    }
}

/// Check that `edit` is well formed and fits a document of `document_length`
/// characters.
pub fn validate_edit(edit: &Delta, document_length: usize) -> Result<(), ValidationError> {
    validate_delta(edit)?;
    let base_length = edit.base_length();
    if base_length > document_length {
        return Err(ValidationError::LengthMismatch {
            base_length,
            document_length,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_delta_is_valid() {
        let delta = Delta::new().retain(2, None).insert("a", None).delete(1);
        assert_eq!(validate_delta(&delta), Ok(()));
    }

    #[test]
    fn test_zero_length_op_rejected() {
        let delta = Delta::from_ops(vec![Op::insert("a", None), Op::retain(0, None)]);
        assert_eq!(
            validate_delta(&delta),
            Err(ValidationError::ZeroLengthOp { index: 1 })
        );
    }

    #[test]
    fn test_document() {
        let doc = Delta::new().insert("Hello", None);
        assert_eq!(validate_document(&doc), Ok(()));
        assert_eq!(validate_document(&Delta::new()), Ok(()));

        let edit = Delta::new().insert("Hello", None).retain(1, None);
        assert_eq!(
            validate_document(&edit),
            Err(ValidationError::NotADocument { index: 1 })
        );
    }

    #[test]
    fn test_edit_length() {
        let edit = Delta::new().retain(3, None).insert("xyz", None).delete(2);
        assert_eq!(validate_edit(&edit, 5), Ok(()));
        assert_eq!(validate_edit(&edit, 9), Ok(()));
        assert_eq!(
            validate_edit(&edit, 4),
            Err(ValidationError::LengthMismatch {
                base_length: 5,
                document_length: 4,
            })
        );
    }
}
