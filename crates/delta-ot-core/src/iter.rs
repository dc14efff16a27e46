//! A cursor over a delta's ops that can consume them at any granularity.
//!
//! Compose and transform walk two deltas in lockstep, so they repeatedly ask
//! for "at most N characters" of the current op. The cursor splits ops on
//! demand and remembers how far into the current op it is.
//!
//! Once exhausted, the cursor behaves as an unbounded attribute-less retain:
//! [`OpIterator::peek_length`] is `usize::MAX`, [`OpIterator::peek_type`] is
//! [`OpType::Retain`], and [`OpIterator::take`] hands out plain retains.

use crate::delta::Delta;
use crate::op::{byte_offset, Action, Op, OpType};

/// Cursor over a slice of ops.
#[derive(Debug, Clone)]
pub struct OpIterator<'a> {
    ops: &'a [Op],
    index: usize,
    /// Characters already consumed from `ops[index]`.
    offset: usize,
    /// Bytes already consumed from `ops[index]` when it is an insert.
    byte_offset: usize,
    /// Cached length of `ops[index]`.
    op_len: usize,
}

impl<'a> OpIterator<'a> {
    pub fn new(ops: &'a [Op]) -> Self {
        Self {
            ops,
            index: 0,
            offset: 0,
            byte_offset: 0,
            op_len: ops.first().map_or(0, Op::len),
        }
    }

    /// Whether any input remains.
    pub fn has_next(&self) -> bool {
        self.index < self.ops.len()
    }

    /// The op under the cursor (unsplit), if any.
    pub fn peek(&self) -> Option<&'a Op> {
        self.ops.get(self.index)
    }

    /// Characters left in the op under the cursor.
    pub fn peek_length(&self) -> usize {
        if self.has_next() {
            self.op_len - self.offset
        } else {
            usize::MAX
        }
    }

    /// Action of the op under the cursor.
    pub fn peek_type(&self) -> OpType {
        self.peek().map_or(OpType::Retain, Op::op_type)
    }

    /// Consume at most `max` characters, splitting the current op if needed.
    pub fn take(&mut self, max: usize) -> Op {
        let Some(op) = self.peek() else {
            return Op::retain(max, None);
        };

        let remaining = self.op_len - self.offset;
        if max >= remaining {
            let taken = self.remainder(op);
            self.advance();
            return taken;
        }

        let part = match op.action() {
            Action::Insert(text) => {
                let start = self.byte_offset;
                let end = start + byte_offset(&text[start..], max);
                self.byte_offset = end;
                Op::insert(&text[start..end], op.attributes().cloned())
            }
            Action::Delete(_) => Op::delete(max),
            Action::Retain(_) => Op::retain(max, op.attributes().cloned()),
        };
        self.offset += max;
        part
    }

    /// Consume whatever is left of the current op.
    pub fn next_op(&mut self) -> Op {
        self.take(usize::MAX)
    }

    /// Drain everything that is left into a fresh delta, ops kept as they are.
    pub fn rest(&mut self) -> Delta {
        let mut ops = Vec::with_capacity(self.ops.len().saturating_sub(self.index));
        if let Some(op) = self.peek() {
            ops.push(self.remainder(op));
            ops.extend(self.ops[self.index + 1..].iter().cloned());
        }
        self.index = self.ops.len();
        self.offset = 0;
        self.byte_offset = 0;
        self.op_len = 0;
        Delta::from_ops(ops)
    }

    fn remainder(&self, op: &Op) -> Op {
        if self.offset == 0 {
            return op.clone();
        }
        let remaining = self.op_len - self.offset;
        match op.action() {
            Action::Insert(text) => {
                Op::insert(&text[self.byte_offset..], op.attributes().cloned())
            }
            Action::Delete(_) => Op::delete(remaining),
            Action::Retain(_) => Op::retain(remaining, op.attributes().cloned()),
        }
    }

    fn advance(&mut self) {
        self.index += 1;
        self.offset = 0;
        self.byte_offset = 0;
        self.op_len = self.peek().map_or(0, Op::len);
    }
}
