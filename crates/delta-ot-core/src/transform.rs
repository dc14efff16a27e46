//! Transform: reconcile concurrent edits, and map positions across an edit.
//!
//! Given two edits `a` and `b` made against the same document,
//! `a.transform(&b, priority)` rewrites `b` so it can be applied after `a`.
//! Applying `a` then `a.transform(&b, true)` yields the same document as
//! applying `b` then `b.transform(&a, false)`.
//!
//! `priority` decides ties: when both edits insert at the same position, the
//! side with priority is treated as having inserted first.

use crate::attributes;
use crate::delta::Delta;
use crate::op::{Action, Op, OpType};

impl Delta {
    /// Rewrite `other` to apply after `self`.
    pub fn transform(&self, other: &Delta, priority: bool) -> Delta {
        let mut this_iter = self.op_iter();
        let mut other_iter = other.op_iter();
        let mut delta = Delta::new();

        while this_iter.has_next() || other_iter.has_next() {
            if this_iter.peek_type() == OpType::Insert
                && (priority || other_iter.peek_type() != OpType::Insert)
            {
                // Skip over text `self` inserted.
                let inserted = this_iter.next_op();
                delta.push(Op::retain(inserted.len(), None));
                continue;
            }
            if other_iter.peek_type() == OpType::Insert {
                delta.push(other_iter.next_op());
                continue;
            }

            let length = this_iter.peek_length().min(other_iter.peek_length());
            let this_op = this_iter.take(length);
            let other_op = other_iter.take(length);

            if this_op.is_delete() {
                // Already gone: whatever `other` did to it is moot.
                continue;
            }
            if other_op.is_delete() {
                delta.push(other_op);
            } else {
                let attrs =
                    attributes::transform(this_op.attributes(), other_op.attributes(), priority);
                delta.push(Op::retain(length, attrs));
            }
        }

        delta.chop()
    }

    /// Map a character index in the document before `self` to the document
    /// after it.
    ///
    /// With `insert_after` set, an index sitting exactly where `self` inserts
    /// stays in front of the inserted text; otherwise it is pushed past it.
    /// An index inside deleted text collapses to the start of the deletion.
    pub fn transform_position(&self, index: usize, insert_after: bool) -> usize {
        let mut index = index;
        let mut offset = 0;

        for op in self.iter() {
            if offset > index {
                break;
            }
            let length = op.len();
            match op.action() {
                Action::Delete(_) => {
                    index -= length.min(index - offset);
                    continue;
                }
                Action::Insert(_) if offset < index || !insert_after => {
                    index = index.saturating_add(length);
                }
                _ => {}
            }
            offset = offset.saturating_add(length);
        }

        index
    }
}
