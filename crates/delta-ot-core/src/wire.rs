//! JSON envelope encoding.
//!
//! The wire shape is `{"ops":[...]}` where each op object carries exactly one
//! of `insert`, `delete` or `retain`, optionally followed by `attributes`:
//!
//! ```json
//! {"ops":[{"insert":"你好"},{"retain":2,"attributes":{"bold":true}}]}
//! ```
//!
//! Encoding is deterministic: the action key comes first, `attributes` last
//! (omitted when absent), attribute keys are sorted. An empty delta encodes as
//! `{}`. Decoding accepts a missing `ops`, `"ops":null` and `"ops":[]` alike,
//! and keeps the decoded op list exactly as given.

use serde::Deserialize;

use crate::attributes::AttrValue;
use crate::delta::Delta;
use crate::error::CoreError;
use crate::op::{Op, RawOp};

/// Envelope with ops still in their unchecked wire shape.
#[derive(Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    ops: Option<Vec<RawOp>>,
}

impl TryFrom<RawEnvelope> for Delta {
    type Error = CoreError;

    fn try_from(raw: RawEnvelope) -> Result<Self, Self::Error> {
        let ops = raw
            .ops
            .unwrap_or_default()
            .into_iter()
            .map(Op::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Delta::from_ops(ops))
    }
}

/// Decode a delta from JSON bytes.
///
/// Invalid JSON fails with [`CoreError::DecodingError`]; an op naming no
/// action, or more than one, fails with [`CoreError::MalformedOp`].
pub fn from_json(bytes: &[u8]) -> Result<Delta, CoreError> {
    let raw: RawEnvelope = serde_json::from_slice(bytes)?;
    raw.try_into()
}

/// Decode a delta from a JSON string.
pub fn from_json_str(s: &str) -> Result<Delta, CoreError> {
    let raw: RawEnvelope = serde_json::from_str(s)?;
    raw.try_into()
}

/// Encode a delta to canonical JSON bytes.
///
/// Fails with [`CoreError::EncodingError`] when an attribute holds a NaN or
/// infinite float, which JSON cannot represent.
pub fn to_json(delta: &Delta) -> Result<Vec<u8>, CoreError> {
    check_encodable(delta)?;
    serde_json::to_vec(delta).map_err(|e| CoreError::EncodingError(e.to_string()))
}

/// Encode a delta to a canonical JSON string.
pub fn to_json_string(delta: &Delta) -> Result<String, CoreError> {
    check_encodable(delta)?;
    serde_json::to_string(delta).map_err(|e| CoreError::EncodingError(e.to_string()))
}

fn check_encodable(delta: &Delta) -> Result<(), CoreError> {
    for (index, op) in delta.iter().enumerate() {
        for (key, value) in op.attributes().into_iter().flatten() {
            if let AttrValue::Float(x) = value {
                if !x.is_finite() {
                    return Err(CoreError::EncodingError(format!(
                        "op {index}: attribute {key:?} is {x}, not a finite number"
                    )));
                }
            }
        }
    }
    Ok(())
}
