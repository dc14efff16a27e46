//! Compose: fold two sequential edits into one.
//!
//! `a.compose(&b)` is the single delta equivalent to applying `a` and then
//! `b`. Both deltas are walked in lockstep; inserts from `b` always win the
//! current position and deletes from `a` are emitted before anything of `b`
//! is consumed, since `b` never saw the text `a` removed.

use crate::attributes;
use crate::delta::Delta;
use crate::op::{Action, Op, OpType};

impl Delta {
    /// Compose `other` after `self`.
    pub fn compose(&self, other: &Delta) -> Delta {
        let mut this_iter = self.op_iter();
        let mut other_iter = other.op_iter();
        let mut delta = Delta::new();

        while this_iter.has_next() && other_iter.has_next() {
            if other_iter.peek_type() == OpType::Insert {
                delta.push(other_iter.next_op());
                continue;
            }
            if this_iter.peek_type() == OpType::Delete {
                delta.push(this_iter.next_op());
                continue;
            }

            let length = this_iter.peek_length().min(other_iter.peek_length());
            let this_op = this_iter.take(length);
            let other_op = other_iter.take(length);

            if other_op.is_delete() {
                // Deleting freshly inserted text cancels out.
                if this_op.is_retain() {
                    delta.push(other_op);
                }
                continue;
            }

            // Formatting on inserted text drops nulls; on retained text they
            // must survive to clear the base document.
            let keep_null = this_op.is_retain();
            let attrs = attributes::compose(this_op.attributes(), other_op.attributes(), keep_null);
            let op = match this_op.into_parts().0 {
                Action::Insert(text) => Op::insert(text, attrs),
                _ => Op::retain(length, attrs),
            };
            delta.push(op);
        }

        delta.extend(this_iter.rest());
        delta.extend(other_iter.rest());
        delta.chop()
    }
}
