//! Delta: an ordered, self-normalizing sequence of ops.
//!
//! A delta is either a document (inserts only) or an edit (any mix of
//! retain, insert and delete). Normal form is maintained on append by
//! [`Delta::push`], never by validating afterwards:
//!
//! - zero-length ops are dropped;
//! - adjacent ops with the same action and equal attributes are merged;
//! - an insert appended after a trailing delete is placed before it.
//!
//! The algorithms ([`Delta::compose`], [`Delta::transform`], ...) never mutate
//! their inputs and always build a fresh delta.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::attributes::{self, Attributes};
use crate::iter::OpIterator;
use crate::op::{Action, Op};

/// An ordered list of ops.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Delta {
    ops: Vec<Op>,
}

impl Delta {
    /// Create an empty delta.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an op list verbatim.
    ///
    /// The list is not re-normalized; callers supplying external lists are
    /// expected to hand over canonical ops. See
    /// [`validate_delta`](crate::validation::validate_delta).
    pub fn from_ops(ops: Vec<Op>) -> Self {
        Self { ops }
    }

    /// The ops.
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Take ownership of the ops.
    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }

    /// Number of ops (not characters; see [`Delta::length`]).
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether there are no ops at all.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Iterate the ops by reference.
    pub fn iter(&self) -> std::slice::Iter<'_, Op> {
        self.ops.iter()
    }

    /// A cursor over the ops, splitting them at arbitrary lengths.
    pub fn op_iter(&self) -> OpIterator<'_> {
        OpIterator::new(&self.ops)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Building
    // ─────────────────────────────────────────────────────────────────────────

    /// Append an insert. Empty text is ignored.
    pub fn insert(mut self, text: impl Into<String>, attributes: Option<Attributes>) -> Self {
        self.push(Op::insert(text, attributes));
        self
    }

    /// Append a delete. A zero count is ignored.
    pub fn delete(mut self, count: usize) -> Self {
        self.push(Op::delete(count));
        self
    }

    /// Append a retain. A zero count is ignored.
    pub fn retain(mut self, count: usize, attributes: Option<Attributes>) -> Self {
        self.push(Op::retain(count, attributes));
        self
    }

    /// Append an op, keeping the delta in normal form.
    pub fn push(&mut self, op: Op) -> &mut Self {
        if op.is_empty() {
            return self;
        }

        let mut index = self.ops.len();

        // Inserts always land before a trailing delete.
        if op.is_insert() && self.ops.last().is_some_and(Op::is_delete) {
            index -= 1;
        }

        if index > 0 && self.ops[index - 1].try_merge(&op) {
            return self;
        }

        self.ops.insert(index, op);
        self
    }

    /// Drop a trailing attribute-less retain.
    pub fn chop(mut self) -> Self {
        if self
            .ops
            .last()
            .is_some_and(|op| op.is_retain() && op.attributes().is_none())
        {
            self.ops.pop();
        }
        self
    }

    /// `self` followed by every op of `other`, merged through push.
    pub fn concat(&self, other: &Delta) -> Delta {
        let mut delta = self.clone();
        delta.extend(other.ops.iter().cloned());
        delta
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Total length of all ops, in characters.
    ///
    /// Saturates at `usize::MAX`.
    pub fn length(&self) -> usize {
        self.ops.iter().map(Op::len).fold(0, usize::saturating_add)
    }

    /// How much this edit grows (positive) or shrinks (negative) a document.
    pub fn change_length(&self) -> isize {
        let signed = |n: usize| isize::try_from(n).unwrap_or(isize::MAX);
        self.ops.iter().fold(0isize, |acc, op| match op.action() {
            Action::Insert(_) => acc.saturating_add(signed(op.len())),
            Action::Delete(n) => acc.saturating_sub(signed(*n)),
            Action::Retain(_) => acc,
        })
    }

    /// Length of the document this edit reads: retained plus deleted characters.
    pub fn base_length(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| !op.is_insert())
            .map(Op::len)
            .fold(0, usize::saturating_add)
    }

    /// Whether this delta describes a document (inserts only).
    pub fn is_document(&self) -> bool {
        self.ops.iter().all(Op::is_insert)
    }

    /// Concatenated text of all inserts.
    pub fn text(&self) -> String {
        self.ops.iter().filter_map(Op::insert_text).collect()
    }

    /// The part of this delta covering characters `[start, end)`.
    pub fn slice(&self, start: usize, end: usize) -> Delta {
        let mut delta = Delta::new();
        let mut iter = self.op_iter();
        let mut index = 0;

        while index < end && iter.has_next() {
            let op = if index < start {
                iter.take(start - index)
            } else {
                let op = iter.take(end - index);
                delta.push(op.clone());
                op
            };
            index += op.len();
        }

        delta
    }

    /// The edit that undoes `self`, given the document `base` it applied to.
    ///
    /// Inserts become deletes, deletes re-insert the text (with formatting)
    /// they removed from `base`, and formatting retains restore the formatting
    /// `base` had.
    pub fn invert(&self, base: &Delta) -> Delta {
        let mut inverted = Delta::new();
        let mut base_index: usize = 0;

        for op in &self.ops {
            match op.action() {
                Action::Insert(_) => {
                    inverted.push(Op::delete(op.len()));
                }
                Action::Retain(n) if op.attributes().is_none() => {
                    inverted.push(Op::retain(*n, None));
                    base_index = base_index.saturating_add(*n);
                }
                Action::Retain(n) => {
                    for base_op in base.slice(base_index, base_index.saturating_add(*n)).ops {
                        let applied =
                            attributes::compose(base_op.attributes(), op.attributes(), false);
                        let restore = attributes::diff(applied.as_ref(), base_op.attributes());
                        inverted.push(Op::retain(base_op.len(), restore));
                    }
                    base_index = base_index.saturating_add(*n);
                }
                Action::Delete(n) => {
                    inverted.extend(base.slice(base_index, base_index.saturating_add(*n)).ops);
                    base_index = base_index.saturating_add(*n);
                }
            }
        }

        inverted.chop()
    }
}

impl Extend<Op> for Delta {
    fn extend<I: IntoIterator<Item = Op>>(&mut self, iter: I) {
        for op in iter {
            self.push(op);
        }
    }
}

impl FromIterator<Op> for Delta {
    fn from_iter<I: IntoIterator<Item = Op>>(iter: I) -> Self {
        let mut delta = Delta::new();
        delta.extend(iter);
        delta
    }
}

impl<'a> IntoIterator for &'a Delta {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

impl IntoIterator for Delta {
    type Item = Op;
    type IntoIter = std::vec::IntoIter<Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl Serialize for Delta {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut envelope = serializer.serialize_struct("Delta", 1)?;
        if self.ops.is_empty() {
            envelope.skip_field("ops")?;
        } else {
            envelope.serialize_field("ops", &self.ops)?;
        }
        envelope.end()
    }
}

impl<'de> Deserialize<'de> for Delta {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Envelope {
            #[serde(default)]
            ops: Option<Vec<Op>>,
        }

        let envelope = Envelope::deserialize(deserializer)?;
        Ok(Delta::from_ops(envelope.ops.unwrap_or_default()))
    }
}
