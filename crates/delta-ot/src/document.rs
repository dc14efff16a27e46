//! A single replica of a rich-text document.
//!
//! The document is kept as a delta made only of inserts. Edits are composed
//! into it one at a time; each accepted edit bumps the revision counter.
//! Concurrent edits from other replicas are reconciled with
//! [`Document::rebase`] before being applied.

use delta_ot_core::{validate_document, validate_edit, Delta};
use tracing::{debug, warn};

use crate::error::{DocumentError, Result};
use crate::hash::StateHash;

/// Configuration for a document replica.
#[derive(Debug, Clone)]
pub struct DocumentConfig {
    /// Whether to validate edits before composing them in.
    pub validate_on_apply: bool,
    /// Upper bound on document length in characters, if any.
    pub max_length: Option<usize>,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            validate_on_apply: true,
            max_length: None,
        }
    }
}

/// A document replica: contents, revision and configuration.
#[derive(Debug, Clone)]
pub struct Document {
    contents: Delta,
    revision: u64,
    config: DocumentConfig,
}

impl Document {
    /// Create an empty document at revision 0.
    pub fn new(config: DocumentConfig) -> Self {
        Self {
            contents: Delta::new(),
            revision: 0,
            config,
        }
    }

    /// Create a document from existing contents.
    ///
    /// The contents must be a document delta (inserts only) and fit the
    /// configured length limit. They are re-normalized, so decoded op lists
    /// split at arbitrary points hash the same as their merged form.
    pub fn from_delta(contents: Delta, config: DocumentConfig) -> Result<Self> {
        validate_document(&contents)?;
        let contents: Delta = contents.into_iter().collect();
        check_length(contents.length(), config.max_length)?;
        Ok(Self {
            contents,
            revision: 0,
            config,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn contents(&self) -> &Delta {
        &self.contents
    }

    /// Number of edits applied since creation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Length in characters.
    pub fn length(&self) -> usize {
        self.contents.length()
    }

    /// Plain text, formatting dropped.
    pub fn text(&self) -> String {
        self.contents.text()
    }

    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// Canonical JSON encoding of the contents.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(delta_ot_core::to_json(&self.contents)?)
    }

    /// Hash of the canonical encoding, for comparing replicas.
    pub fn state_hash(&self) -> Result<StateHash> {
        StateHash::of(&self.contents)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Editing
    // ─────────────────────────────────────────────────────────────────────────

    /// Compose `edit` into the document and return the new revision.
    ///
    /// On error the document is left untouched.
    pub fn apply(&mut self, edit: &Delta) -> Result<u64> {
        if self.config.validate_on_apply {
            if let Err(err) = validate_edit(edit, self.length()) {
                warn!(revision = self.revision, error = %err, "rejected edit");
                return Err(err.into());
            }
        }

        let contents = self.contents.compose(edit);
        if let Err(err) = check_length(contents.length(), self.config.max_length) {
            warn!(revision = self.revision, error = %err, "rejected edit");
            return Err(err);
        }

        self.contents = contents;
        self.revision += 1;
        debug!(
            revision = self.revision,
            ops = edit.len(),
            length = self.contents.length(),
            "applied edit"
        );
        Ok(self.revision)
    }

    /// Rewrite `local` so it applies after the concurrent `remote` edit.
    ///
    /// Both edits must have been made against the same document. When both
    /// insert at the same position, `local_wins` puts the local text first.
    pub fn rebase(local: &Delta, remote: &Delta, local_wins: bool) -> Delta {
        let rebased = remote.transform(local, !local_wins);
        debug!(
            local_ops = local.len(),
            remote_ops = remote.len(),
            rebased_ops = rebased.len(),
            local_wins,
            "rebased edit"
        );
        rebased
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DocumentConfig::default())
    }
}

fn check_length(length: usize, max_length: Option<usize>) -> Result<()> {
    match max_length {
        Some(max_length) if length > max_length => {
            Err(DocumentError::MaxLengthExceeded { length, max_length })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delta_ot_core::attributes::from_pairs;
    use delta_ot_core::{Op, ValidationError};

    #[test]
    fn test_new_document_is_empty() {
        let doc = Document::default();
        assert_eq!(doc.revision(), 0);
        assert_eq!(doc.length(), 0);
        assert!(doc.contents().is_empty());
        assert_eq!(doc.to_json().unwrap(), b"{}");
    }

    #[test]
    fn test_apply_bumps_revision() {
        let mut doc = Document::default();
        assert_eq!(doc.apply(&Delta::new().insert("Hello", None)).unwrap(), 1);
        assert_eq!(
            doc.apply(&Delta::new().retain(5, None).insert(" world", None)).unwrap(),
            2
        );
        assert_eq!(doc.text(), "Hello world");
        assert_eq!(doc.revision(), 2);
        assert!(doc.contents().is_document());
    }

    #[test]
    fn test_apply_formatting() {
        let mut doc = Document::from_delta(Delta::new().insert("Hello", None), Default::default())
            .unwrap();
        doc.apply(&Delta::new().retain(2, Some(from_pairs([("bold", true)]))))
            .unwrap();
        assert_eq!(
            doc.contents(),
            &Delta::new()
                .insert("He", Some(from_pairs([("bold", true)])))
                .insert("llo", None)
        );
    }

    #[test]
    fn test_apply_rejects_edit_longer_than_document() {
        let mut doc = Document::from_delta(Delta::new().insert("abc", None), Default::default())
            .unwrap();
        let err = doc.apply(&Delta::new().retain(2, None).delete(5)).unwrap_err();
        assert!(matches!(
            err,
            DocumentError::Validation(ValidationError::LengthMismatch {
                base_length: 7,
                document_length: 3,
            })
        ));
        assert_eq!(doc.revision(), 0);
        assert_eq!(doc.text(), "abc");
    }

    #[test]
    fn test_apply_rejects_zero_length_op() {
        let mut doc = Document::default();
        let edit = Delta::from_ops(vec![Op::insert("", None)]);
        assert!(matches!(
            doc.apply(&edit),
            Err(DocumentError::Validation(ValidationError::ZeroLengthOp { index: 0 }))
        ));
    }

    #[test]
    fn test_validation_can_be_disabled() {
        let config = DocumentConfig {
            validate_on_apply: false,
            ..Default::default()
        };
        let mut doc = Document::from_delta(Delta::new().insert("abc", None), config).unwrap();
        // The overhanging retain survives composition.
        doc.apply(&Delta::new().retain(5, Some(from_pairs([("bold", true)]))))
            .unwrap();
        assert_eq!(doc.revision(), 1);
        assert_eq!(doc.text(), "abc");
        assert!(!doc.contents().is_document());
    }

    #[test]
    fn test_max_length() {
        let config = DocumentConfig {
            max_length: Some(5),
            ..Default::default()
        };
        let mut doc = Document::new(config.clone());
        doc.apply(&Delta::new().insert("abcde", None)).unwrap();
        let err = doc.apply(&Delta::new().insert("f", None)).unwrap_err();
        assert!(matches!(
            err,
            DocumentError::MaxLengthExceeded {
                length: 6,
                max_length: 5
            }
        ));
        assert_eq!(doc.revision(), 1);

        assert!(Document::from_delta(Delta::new().insert("abcdef", None), config).is_err());
    }

    #[test]
    fn test_from_delta_normalizes() {
        let split = Delta::from_ops(vec![
            Op::insert("a", None),
            Op::insert("b", None),
            Op::insert("c", Some(from_pairs([("bold", true)]))),
        ]);
        let doc = Document::from_delta(split, Default::default()).unwrap();
        assert_eq!(
            doc.contents(),
            &Delta::new()
                .insert("ab", None)
                .insert("c", Some(from_pairs([("bold", true)])))
        );
    }

    #[test]
    fn test_from_delta_requires_document() {
        let err = Document::from_delta(Delta::new().retain(1, None), Default::default())
            .unwrap_err();
        assert!(matches!(
            err,
            DocumentError::Validation(ValidationError::NotADocument { index: 0 })
        ));
    }

    #[test]
    fn test_rebase_converges() {
        let base = Delta::new().insert("abc", None);
        let mut left = Document::from_delta(base.clone(), Default::default()).unwrap();
        let mut right = Document::from_delta(base, Default::default()).unwrap();

        let left_edit = Delta::new().retain(1, None).insert("L", None);
        let right_edit = Delta::new().retain(1, None).insert("R", None);

        left.apply(&left_edit).unwrap();
        right.apply(&right_edit).unwrap();

        left.apply(&Document::rebase(&right_edit, &left_edit, false))
            .unwrap();
        right
            .apply(&Document::rebase(&left_edit, &right_edit, true))
            .unwrap();

        assert_eq!(left.text(), "aLRbc");
        assert_eq!(left.contents(), right.contents());
        assert_eq!(left.state_hash().unwrap(), right.state_hash().unwrap());
    }
}
