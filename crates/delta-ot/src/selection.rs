//! Cursor and selection tracking across edits.

use delta_ot_core::Delta;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A selected range of characters; `length == 0` is a plain cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Selection {
    pub index: usize,
    pub length: usize,
}

impl Selection {
    pub fn new(index: usize, length: usize) -> Self {
        Self { index, length }
    }

    /// A collapsed selection at `index`.
    pub fn cursor(index: usize) -> Self {
        Self { index, length: 0 }
    }

    pub fn is_collapsed(&self) -> bool {
        self.length == 0
    }

    /// Exclusive end of the range.
    pub fn end(&self) -> usize {
        self.index.saturating_add(self.length)
    }

    /// Map this selection through `edit`.
    ///
    /// Both ends move independently, so text inserted inside the range grows
    /// it and deleted text shrinks it. `insert_after` controls what happens to
    /// an end that sits exactly where `edit` inserts; see
    /// [`Delta::transform_position`].
    pub fn transform(&self, edit: &Delta, insert_after: bool) -> Selection {
        let index = edit.transform_position(self.index, insert_after);
        let selection = if self.is_collapsed() {
            Selection::cursor(index)
        } else {
            let end = edit.transform_position(self.end(), insert_after);
            Selection::new(index, end.saturating_sub(index))
        };
        trace!(from = ?self, to = ?selection, "transformed selection");
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_past_insert_before_it() {
        let edit = Delta::new().insert("abc", None);
        assert_eq!(Selection::cursor(2).transform(&edit, false), Selection::cursor(5));
    }

    #[test]
    fn test_cursor_at_insert_point() {
        let edit = Delta::new().retain(2, None).insert("xy", None);
        assert_eq!(Selection::cursor(2).transform(&edit, true), Selection::cursor(2));
        assert_eq!(Selection::cursor(2).transform(&edit, false), Selection::cursor(4));
    }

    #[test]
    fn test_collapsed_stays_collapsed() {
        let edit = Delta::new().retain(1, None).delete(4).insert("z", None);
        for index in 0..8 {
            for insert_after in [true, false] {
                let moved = Selection::cursor(index).transform(&edit, insert_after);
                assert!(moved.is_collapsed());
            }
        }
    }

    #[test]
    fn test_range_grows_with_inner_insert() {
        let edit = Delta::new().retain(3, None).insert("new", None);
        let selection = Selection::new(1, 4);
        assert_eq!(selection.transform(&edit, false), Selection::new(1, 7));
    }

    #[test]
    fn test_range_shrinks_with_inner_delete() {
        let edit = Delta::new().retain(2, None).delete(2);
        let selection = Selection::new(1, 4);
        assert_eq!(selection.transform(&edit, false), Selection::new(1, 2));
    }

    #[test]
    fn test_range_fully_deleted() {
        let edit = Delta::new().delete(10);
        let selection = Selection::new(2, 3);
        assert_eq!(selection.transform(&edit, false), Selection::new(0, 0));
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Selection::new(3, 2)).unwrap();
        assert_eq!(json, r#"{"index":3,"length":2}"#);
        let back: Selection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Selection::new(3, 2));
    }
}
