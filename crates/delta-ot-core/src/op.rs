//! Op: the atomic edit unit.
//!
//! An op is exactly one action (insert text, delete a count, retain a count)
//! plus optional formatting attributes. The action is an enum, so an op with
//! zero or several actions cannot be constructed.

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::attributes::{non_empty, Attributes};
use crate::error::CoreError;

/// The action an op performs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    /// Insert text. Length is counted in Unicode scalar values.
    Insert(String),
    /// Delete this many characters.
    Delete(usize),
    /// Keep this many characters, optionally reformatting them.
    Retain(usize),
}

/// Discriminator for [`Action`], without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpType {
    Insert,
    Delete,
    Retain,
}

impl Action {
    /// The payload-free discriminator.
    pub fn op_type(&self) -> OpType {
        match self {
            Action::Insert(_) => OpType::Insert,
            Action::Delete(_) => OpType::Delete,
            Action::Retain(_) => OpType::Retain,
        }
    }
}

/// A single operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Op {
    action: Action,
    attributes: Option<Attributes>,
}

impl Op {
    /// Create an insert op. Empty attribute maps are dropped.
    pub fn insert(text: impl Into<String>, attributes: Option<Attributes>) -> Self {
        Self {
            action: Action::Insert(text.into()),
            attributes: attributes.and_then(non_empty),
        }
    }

    /// Create a delete op. Deletes never carry attributes.
    pub fn delete(count: usize) -> Self {
        Self {
            action: Action::Delete(count),
            attributes: None,
        }
    }

    /// Create a retain op. Empty attribute maps are dropped.
    pub fn retain(count: usize, attributes: Option<Attributes>) -> Self {
        Self {
            action: Action::Retain(count),
            attributes: attributes.and_then(non_empty),
        }
    }

    /// The action.
    pub fn action(&self) -> &Action {
        &self.action
    }

    /// The action discriminator.
    pub fn op_type(&self) -> OpType {
        self.action.op_type()
    }

    /// The attributes, if any.
    pub fn attributes(&self) -> Option<&Attributes> {
        self.attributes.as_ref()
    }

    /// Split into action and attributes.
    pub fn into_parts(self) -> (Action, Option<Attributes>) {
        (self.action, self.attributes)
    }

    /// Length in characters (codepoints for inserts, the count otherwise).
    pub fn len(&self) -> usize {
        match &self.action {
            Action::Insert(text) => text.chars().count(),
            Action::Delete(n) | Action::Retain(n) => *n,
        }
    }

    /// Whether the op covers zero characters.
    pub fn is_empty(&self) -> bool {
        match &self.action {
            Action::Insert(text) => text.is_empty(),
            Action::Delete(n) | Action::Retain(n) => *n == 0,
        }
    }

    pub fn is_insert(&self) -> bool {
        matches!(self.action, Action::Insert(_))
    }

    pub fn is_delete(&self) -> bool {
        matches!(self.action, Action::Delete(_))
    }

    pub fn is_retain(&self) -> bool {
        matches!(self.action, Action::Retain(_))
    }

    /// The inserted text, for insert ops.
    pub fn insert_text(&self) -> Option<&str> {
        match &self.action {
            Action::Insert(text) => Some(text),
            _ => None,
        }
    }

    /// Merge `other` into `self` if both have the same action and equal
    /// attributes. Returns whether the merge happened.
    ///
    /// Counts that would overflow `usize` are left as two ops.
    pub(crate) fn try_merge(&mut self, other: &Op) -> bool {
        if self.attributes != other.attributes {
            return false;
        }
        match (&mut self.action, &other.action) {
            (Action::Insert(text), Action::Insert(more)) => {
                text.push_str(more);
                true
            }
            (Action::Delete(n), Action::Delete(m)) | (Action::Retain(n), Action::Retain(m)) => {
                match n.checked_add(*m) {
                    Some(sum) => {
                        *n = sum;
                        true
                    }
                    None => false,
                }
            }
            _ => false,
        }
    }
}

/// Byte offset of the `chars`-th codepoint in `text` (or `text.len()`).
pub(crate) fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map_or(text.len(), |(offset, _)| offset)
}

impl Serialize for Op {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.attributes.is_some() { 2 } else { 1 };
        let mut map = serializer.serialize_map(Some(len))?;
        match &self.action {
            Action::Insert(text) => map.serialize_entry("insert", text)?,
            Action::Delete(n) => map.serialize_entry("delete", n)?,
            Action::Retain(n) => map.serialize_entry("retain", n)?,
        }
        if let Some(attributes) = &self.attributes {
            map.serialize_entry("attributes", attributes)?;
        }
        map.end()
    }
}

/// Wire shape of an op before the single-action check.
#[derive(Deserialize)]
pub(crate) struct RawOp {
    #[serde(default)]
    insert: Option<String>,
    #[serde(default)]
    delete: Option<usize>,
    #[serde(default)]
    retain: Option<usize>,
    #[serde(default)]
    attributes: Option<Attributes>,
}

impl TryFrom<RawOp> for Op {
    type Error = CoreError;

    fn try_from(raw: RawOp) -> Result<Self, Self::Error> {
        match (raw.insert, raw.delete, raw.retain) {
            (Some(text), None, None) => Ok(Op::insert(text, raw.attributes)),
            (None, Some(n), None) => Ok(Op::delete(n)),
            (None, None, Some(n)) => Ok(Op::retain(n, raw.attributes)),
            (None, None, None) => Err(CoreError::MalformedOp(
                "op has none of insert, delete, retain".into(),
            )),
            _ => Err(CoreError::MalformedOp(
                "op has more than one of insert, delete, retain".into(),
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Op {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawOp::deserialize(deserializer)?;
        Op::try_from(raw).map_err(D::Error::custom)
    }
}
