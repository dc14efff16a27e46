//! Formatting attributes and their algebra.
//!
//! Attributes are opaque key/value pairs attached to inserts and retains.
//! The algebra never interprets values; it only merges, diffs and copies them.
//! An explicit [`AttrValue::Null`] is a tombstone meaning "clear this key",
//! which is different from the key being absent ("not mentioned").
//!
//! Every function here returns `None` instead of an empty map, so an op never
//! carries `Some(empty)`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// An opaque attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Explicit null: clears the key when composed.
    Null,
    Bool(bool),
    Int(i64),
    /// Integers above `i64::MAX`; keeps them out of `Float`.
    UInt(u64),
    Float(f64),
    String(String),
}

impl AttrValue {
    /// Check if this is the explicit null tombstone.
    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Null => write!(f, "null"),
            AttrValue::Bool(b) => write!(f, "{}", b),
            AttrValue::Int(i) => write!(f, "{}", i),
            AttrValue::UInt(u) => write!(f, "{}", u),
            AttrValue::Float(x) => write!(f, "{}", x),
            AttrValue::String(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

impl From<i64> for AttrValue {
    fn from(i: i64) -> Self {
        AttrValue::Int(i)
    }
}

impl From<i32> for AttrValue {
    fn from(i: i32) -> Self {
        AttrValue::Int(i.into())
    }
}

impl From<u64> for AttrValue {
    fn from(u: u64) -> Self {
        i64::try_from(u).map_or(AttrValue::UInt(u), AttrValue::Int)
    }
}

impl From<f64> for AttrValue {
    fn from(x: f64) -> Self {
        AttrValue::Float(x)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::String(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::String(s)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttrValue::Null, Into::into)
    }
}

/// A formatting map. Keys are kept sorted so encoding is deterministic.
pub type Attributes = BTreeMap<String, AttrValue>;

/// Build an attribute map from key/value pairs.
pub fn from_pairs<K, V, I>(pairs: I) -> Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Normalize an owned map: empty becomes `None`.
pub fn non_empty(attributes: Attributes) -> Option<Attributes> {
    if attributes.is_empty() {
        None
    } else {
        Some(attributes)
    }
}

/// Compose `b` on top of `a`.
///
/// The result starts as a copy of `b`; keys only `a` mentions are carried over.
/// With `keep_null` false, an explicit null in `b` removes the key and any
/// remaining nulls are stripped.
pub fn compose(
    a: Option<&Attributes>,
    b: Option<&Attributes>,
    keep_null: bool,
) -> Option<Attributes> {
    let mut attributes = b.cloned().unwrap_or_default();

    if let Some(a) = a {
        for (key, value) in a {
            match b.and_then(|b| b.get(key)) {
                Some(AttrValue::Null) if !keep_null => {
                    attributes.remove(key);
                }
                Some(_) => {}
                None => {
                    attributes.insert(key.clone(), value.clone());
                }
            }
        }
    }

    if !keep_null {
        attributes.retain(|_, v| !v.is_null());
    }

    non_empty(attributes)
}

/// The attributes that turn `a` into `b`.
///
/// Keys whose value differs are emitted with `b`'s value, or an explicit null
/// when `b` no longer has the key. A missing key and an explicit null compare
/// equal.
pub fn diff(a: Option<&Attributes>, b: Option<&Attributes>) -> Option<Attributes> {
    let empty = Attributes::new();
    let a = a.unwrap_or(&empty);
    let b = b.unwrap_or(&empty);

    let mut attributes = Attributes::new();
    for key in a.keys().chain(b.keys()) {
        if attributes.contains_key(key) {
            continue;
        }
        let before = a.get(key).unwrap_or(&AttrValue::Null);
        let after = b.get(key).unwrap_or(&AttrValue::Null);
        if before != after {
            attributes.insert(key.clone(), after.clone());
        }
    }

    non_empty(attributes)
}

/// Rewrite `b` so it applies after the concurrent change `a`.
///
/// Without priority `b` wins outright. With priority `a` wins: keys `a`
/// already touched are dropped from `b`, null-valued ones included.
pub fn transform(
    a: Option<&Attributes>,
    b: Option<&Attributes>,
    priority: bool,
) -> Option<Attributes> {
    let Some(a) = a else {
        return b.cloned();
    };
    let b = b?;
    if !priority {
        return Some(b.clone());
    }

    let attributes = b
        .iter()
        .filter(|(key, _)| !a.contains_key(*key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    non_empty(attributes)
}
