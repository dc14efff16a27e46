//! Golden test vectors for deterministic verification.
//!
//! Every vector is pure JSON so other implementations of the delta format can
//! run the same cases: wire vectors pin the canonical encoding, algebra
//! vectors pin compose and transform results.

use delta_ot_core::{from_json_str, to_json_string, CoreError, Delta};
use serde::Serialize;

/// A wire encoding vector: decoding `input` and re-encoding yields `expected`.
#[derive(Debug, Clone, Serialize)]
pub struct WireVector {
    pub name: &'static str,
    pub input: &'static str,
    pub expected: &'static str,
}

/// Which algebra operation an [`AlgebraVector`] exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// `a.compose(b)`
    Compose,
    /// `a.transform(b, priority)`
    Transform { priority: bool },
}

/// An algebra vector: `a <operation> b == expected`, all as wire JSON.
#[derive(Debug, Clone, Serialize)]
pub struct AlgebraVector {
    pub name: &'static str,
    pub operation: Operation,
    pub a: &'static str,
    pub b: &'static str,
    pub expected: &'static str,
}

/// Get all wire vectors.
pub fn wire_vectors() -> Vec<WireVector> {
    vec![
        WireVector {
            name: "retain then insert",
            input: r#"{"ops":[{"retain":54},{"insert":"g"}]}"#,
            expected: r#"{"ops":[{"retain":54},{"insert":"g"}]}"#,
        },
        WireVector {
            name: "retain with attributes",
            input: r#"{"ops":[{"retain":35},{"retain":11,"attributes":{"bold":true}}]}"#,
            expected: r#"{"ops":[{"retain":35},{"retain":11,"attributes":{"bold":true}}]}"#,
        },
        WireVector {
            name: "multibyte insert",
            input: r#"{"ops":[{"insert":"你好"},{"retain":2,"attributes":{"bold":true}}]}"#,
            expected: r#"{"ops":[{"insert":"你好"},{"retain":2,"attributes":{"bold":true}}]}"#,
        },
        WireVector {
            name: "delete",
            input: r#"{"ops":[{"retain":8},{"delete":7}]}"#,
            expected: r#"{"ops":[{"retain":8},{"delete":7}]}"#,
        },
        WireVector {
            name: "explicit null attribute",
            input: r#"{"ops":[{"retain":3,"attributes":{"link":null}}]}"#,
            expected: r#"{"ops":[{"retain":3,"attributes":{"link":null}}]}"#,
        },
        WireVector {
            name: "attribute keys sorted",
            input: r#"{"ops":[{"insert":"a","attributes":{"size":12,"color":"red","bold":true}}]}"#,
            expected: r#"{"ops":[{"insert":"a","attributes":{"bold":true,"color":"red","size":12}}]}"#,
        },
        WireVector {
            name: "attributes before action",
            input: r#"{"ops":[{"attributes":{"italic":true},"insert":"x"}]}"#,
            expected: r#"{"ops":[{"insert":"x","attributes":{"italic":true}}]}"#,
        },
        WireVector {
            name: "empty ops array",
            input: r#"{"ops":[]}"#,
            expected: "{}",
        },
        WireVector {
            name: "null ops",
            input: r#"{"ops":null}"#,
            expected: "{}",
        },
        WireVector {
            name: "missing ops",
            input: "{}",
            expected: "{}",
        },
    ]
}

/// Get all compose and transform vectors.
pub fn algebra_vectors() -> Vec<AlgebraVector> {
    vec![
        AlgebraVector {
            name: "insert formatted by retain drops nulls",
            operation: Operation::Compose,
            a: r#"{"ops":[{"insert":"A"}]}"#,
            b: r#"{"ops":[{"retain":1,"attributes":{"bold":true,"color":"red","font":null}}]}"#,
            expected: r#"{"ops":[{"insert":"A","attributes":{"bold":true,"color":"red"}}]}"#,
        },
        AlgebraVector {
            name: "retain formatted by retain keeps nulls",
            operation: Operation::Compose,
            a: r#"{"ops":[{"retain":1,"attributes":{"color":"blue"}}]}"#,
            b: r#"{"ops":[{"retain":1,"attributes":{"bold":true,"color":"red","font":null}}]}"#,
            expected: r#"{"ops":[{"retain":1,"attributes":{"bold":true,"color":"red","font":null}}]}"#,
        },
        AlgebraVector {
            name: "multibyte delete",
            operation: Operation::Compose,
            a: r#"{"ops":[{"insert":"你好，世界!"}]}"#,
            b: r#"{"ops":[{"retain":5},{"delete":1}]}"#,
            expected: r#"{"ops":[{"insert":"你好，世界"}]}"#,
        },
        AlgebraVector {
            name: "delete swallows retain and insert",
            operation: Operation::Compose,
            a: r#"{"ops":[{"retain":4},{"insert":"Hello"}]}"#,
            b: r#"{"ops":[{"delete":9}]}"#,
            expected: r#"{"ops":[{"delete":4}]}"#,
        },
        AlgebraVector {
            name: "insert lands before earlier delete",
            operation: Operation::Compose,
            a: r#"{"ops":[{"delete":1}]}"#,
            b: r#"{"ops":[{"insert":"B"}]}"#,
            expected: r#"{"ops":[{"insert":"B"},{"delete":1}]}"#,
        },
        AlgebraVector {
            name: "insert tie with priority",
            operation: Operation::Transform { priority: true },
            a: r#"{"ops":[{"insert":"A"}]}"#,
            b: r#"{"ops":[{"insert":"B"}]}"#,
            expected: r#"{"ops":[{"retain":1},{"insert":"B"}]}"#,
        },
        AlgebraVector {
            name: "insert tie without priority",
            operation: Operation::Transform { priority: false },
            a: r#"{"ops":[{"insert":"A"}]}"#,
            b: r#"{"ops":[{"insert":"B"}]}"#,
            expected: r#"{"ops":[{"insert":"B"}]}"#,
        },
        AlgebraVector {
            name: "alternating edits",
            operation: Operation::Transform { priority: false },
            a: r#"{"ops":[{"retain":2},{"insert":"si"},{"delete":5}]}"#,
            b: r#"{"ops":[{"retain":1},{"insert":"e"},{"delete":5},{"retain":1},{"insert":"ow"}]}"#,
            expected: r#"{"ops":[{"retain":1},{"insert":"e"},{"delete":1},{"retain":2},{"insert":"ow"}]}"#,
        },
        AlgebraVector {
            name: "concurrent deletes cancel",
            operation: Operation::Transform { priority: true },
            a: r#"{"ops":[{"delete":3}]}"#,
            b: r#"{"ops":[{"delete":3}]}"#,
            expected: "{}",
        },
        AlgebraVector {
            name: "formatting conflict with priority",
            operation: Operation::Transform { priority: true },
            a: r#"{"ops":[{"retain":1,"attributes":{"color":"blue"}}]}"#,
            b: r#"{"ops":[{"retain":1,"attributes":{"bold":true,"color":"red"}}]}"#,
            expected: r#"{"ops":[{"retain":1,"attributes":{"bold":true}}]}"#,
        },
    ]
}

/// Encode the result of a wire vector.
pub fn run_wire_vector(vector: &WireVector) -> Result<String, CoreError> {
    to_json_string(&from_json_str(vector.input)?)
}

/// Encode the result of an algebra vector.
pub fn run_algebra_vector(vector: &AlgebraVector) -> Result<String, CoreError> {
    let a = from_json_str(vector.a)?;
    let b = from_json_str(vector.b)?;
    let out: Delta = match vector.operation {
        Operation::Compose => a.compose(&b),
        Operation::Transform { priority } => a.transform(&b, priority),
    };
    to_json_string(&out)
}

/// Run every vector and report `(name, matches, actual)`.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    let wire = wire_vectors()
        .into_iter()
        .map(|v| (v.name, run_wire_vector(&v), v.expected));
    let algebra = algebra_vectors()
        .into_iter()
        .map(|v| (v.name, run_algebra_vector(&v), v.expected));

    wire.chain(algebra)
        .map(|(name, actual, expected)| match actual {
            Ok(json) => (name.to_string(), json == expected, json),
            Err(err) => (name.to_string(), false, err.to_string()),
        })
        .collect()
}
