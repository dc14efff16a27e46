//! Proptest generators for property-based testing.
//!
//! Documents are built from a small alphabet (ASCII plus multi-byte
//! characters) and a handful of attribute keys so that generated edits
//! collide often: same positions, same keys, overlapping deletes.

use proptest::prelude::*;

use delta_ot_core::{AttrValue, Attributes, Delta};

/// Attribute keys used by the generators.
pub const ATTRIBUTE_KEYS: &[&str] = &["bold", "italic", "color", "size"];

/// Generate an attribute key.
pub fn attr_key() -> impl Strategy<Value = String> {
    prop::sample::select(ATTRIBUTE_KEYS).prop_map(String::from)
}

/// Generate a non-null attribute value.
pub fn attr_value() -> impl Strategy<Value = AttrValue> {
    prop_oneof![
        any::<bool>().prop_map(AttrValue::Bool),
        (0i64..=32).prop_map(AttrValue::Int),
        "[a-z]{1,6}".prop_map(AttrValue::String),
    ]
}

/// Attributes as carried by inserted text: non-null values, possibly none.
pub fn insert_attributes() -> impl Strategy<Value = Option<Attributes>> {
    prop::option::of(prop::collection::btree_map(attr_key(), attr_value(), 1..=2))
}

/// Attributes as carried by formatting retains: values may be null.
pub fn format_attributes() -> impl Strategy<Value = Option<Attributes>> {
    let value = prop_oneof![3 => attr_value(), 1 => Just(AttrValue::Null)];
    prop::option::of(prop::collection::btree_map(attr_key(), value, 1..=2))
}

/// Generate a short run of text, mixing one- and multi-byte characters.
pub fn text() -> impl Strategy<Value = String> {
    "[ab c你好]{1,6}".prop_map(String::from)
}

/// Generate a document: a delta of inserts only.
pub fn document(max_runs: usize) -> impl Strategy<Value = Delta> {
    prop::collection::vec((text(), insert_attributes()), 0..=max_runs).prop_map(|runs| {
        runs.into_iter()
            .fold(Delta::new(), |delta, (text, attrs)| delta.insert(text, attrs))
    })
}

/// One step of a generated edit, before it is fitted to a document length.
#[derive(Debug, Clone)]
pub enum EditStep {
    Insert(String, Option<Attributes>),
    Delete(usize),
    Retain(usize, Option<Attributes>),
}

/// Generate an edit step.
pub fn edit_step() -> impl Strategy<Value = EditStep> {
    prop_oneof![
        (text(), insert_attributes()).prop_map(|(t, a)| EditStep::Insert(t, a)),
        (1usize..=6).prop_map(EditStep::Delete),
        (1usize..=6, format_attributes()).prop_map(|(n, a)| EditStep::Retain(n, a)),
    ]
}

/// Build a chopped edit from `steps` that never reads past `length`.
pub fn fit_edit(steps: &[EditStep], length: usize) -> Delta {
    let mut remaining = length;
    let mut delta = Delta::new();
    for step in steps {
        delta = match step {
            EditStep::Insert(text, attrs) => delta.insert(text.as_str(), attrs.clone()),
            EditStep::Delete(n) => {
                let n = (*n).min(remaining);
                remaining -= n;
                delta.delete(n)
            }
            EditStep::Retain(n, attrs) => {
                let n = (*n).min(remaining);
                remaining -= n;
                delta.retain(n, attrs.clone())
            }
        };
    }
    delta.chop()
}

/// Generate an edit applicable to a document of `length` characters.
pub fn edit(length: usize) -> impl Strategy<Value = Delta> {
    prop::collection::vec(edit_step(), 0..=6).prop_map(move |steps| fit_edit(&steps, length))
}

/// A document and two concurrent edits made against it.
#[derive(Debug, Clone)]
pub struct ConcurrentEdits {
    pub document: Delta,
    pub a: Delta,
    pub b: Delta,
}

impl Arbitrary for ConcurrentEdits {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        document(5)
            .prop_flat_map(|document| {
                let length = document.length();
                (Just(document), edit(length), edit(length))
            })
            .prop_map(|(document, a, b)| ConcurrentEdits { document, a, b })
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delta_ot::{Document, Selection};
    use delta_ot_core::{from_json, to_json, validate_document, validate_edit, Op};

    proptest! {
        #[test]
        fn test_generated_inputs_are_valid(edits: ConcurrentEdits) {
            prop_assert!(validate_document(&edits.document).is_ok());
            prop_assert!(validate_edit(&edits.a, edits.document.length()).is_ok());
            prop_assert!(validate_edit(&edits.b, edits.document.length()).is_ok());
        }

        #[test]
        fn test_compose_identity(edits: ConcurrentEdits) {
            let empty = Delta::new();
            prop_assert_eq!(edits.document.compose(&empty), edits.document.clone());
            prop_assert_eq!(empty.compose(&edits.document), edits.document.clone());
            prop_assert_eq!(edits.a.compose(&empty), edits.a.clone());
            prop_assert_eq!(empty.compose(&edits.a), edits.a);
        }

        #[test]
        fn test_compose_keeps_document(edits: ConcurrentEdits) {
            let after = edits.document.compose(&edits.a);
            prop_assert!(after.is_document());
            prop_assert_eq!(
                after.length() as isize,
                edits.document.length() as isize + edits.a.change_length()
            );
        }

        #[test]
        fn test_compose_associative(edits: ConcurrentEdits) {
            let b_after_a = edits.a.transform(&edits.b, true);
            let left = edits.document.compose(&edits.a).compose(&b_after_a);
            let right = edits.document.compose(&edits.a.compose(&b_after_a));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn test_transform_converges(edits: ConcurrentEdits) {
            let ConcurrentEdits { document, a, b } = edits;
            let left = document.compose(&a).compose(&a.transform(&b, true));
            let right = document.compose(&b).compose(&b.transform(&a, false));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn test_invert_restores_document(edits: ConcurrentEdits) {
            let ConcurrentEdits { document, a, .. } = edits;
            let inverse = a.invert(&document);
            let restored = document.compose(&a).compose(&inverse);
            prop_assert_eq!(restored, document);
        }

        #[test]
        fn test_slice_whole(edits: ConcurrentEdits) {
            prop_assert_eq!(edits.document.slice(0, edits.document.length()), edits.document.clone());
            prop_assert_eq!(edits.a.slice(0, edits.a.length()), edits.a);
        }

        #[test]
        fn test_slice_concat(edits: ConcurrentEdits, cut in 0usize..40) {
            let doc = edits.document;
            let cut = cut.min(doc.length());
            let joined = doc.slice(0, cut).concat(&doc.slice(cut, doc.length()));
            prop_assert_eq!(joined, doc);
        }

        #[test]
        fn test_position_stays_in_bounds(edits: ConcurrentEdits, index in 0usize..40, insert_after: bool) {
            let index = index.min(edits.document.length());
            let after = edits.document.compose(&edits.a);
            prop_assert!(edits.a.transform_position(index, insert_after) <= after.length());
        }

        #[test]
        fn test_selection_collapsed_stays_collapsed(edits: ConcurrentEdits, index in 0usize..40, insert_after: bool) {
            let cursor = Selection::cursor(index.min(edits.document.length()));
            prop_assert!(cursor.transform(&edits.a, insert_after).is_collapsed());
        }

        #[test]
        fn test_insert_normalized_before_delete(n in 0usize..5, m in 1usize..5, text in text()) {
            let a = Delta::new().retain(n, None).delete(m).insert(text.as_str(), None);
            let b = Delta::new().retain(n, None).insert(text.as_str(), None).delete(m);
            prop_assert_eq!(&a, &b);
            prop_assert!(a.ops().last().is_some_and(Op::is_delete));
        }

        #[test]
        fn test_wire_preserves_normalized(edits: ConcurrentEdits) {
            let bytes = to_json(&edits.a).unwrap();
            prop_assert_eq!(from_json(&bytes).unwrap(), edits.a);
        }

        #[test]
        fn test_replicas_converge(edits: ConcurrentEdits) {
            let ConcurrentEdits { document, a, b } = edits;
            let mut left = Document::from_delta(document.clone(), Default::default()).unwrap();
            let mut right = Document::from_delta(document, Default::default()).unwrap();

            left.apply(&a).unwrap();
            right.apply(&b).unwrap();
            left.apply(&Document::rebase(&b, &a, false)).unwrap();
            right.apply(&Document::rebase(&a, &b, true)).unwrap();

            prop_assert_eq!(left.state_hash().unwrap(), right.state_hash().unwrap());
        }
    }
}
