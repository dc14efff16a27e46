//! # Delta OT
//!
//! Replicated rich-text documents built on the delta algebra in
//! [`delta_ot_core`].
//!
//! ## Overview
//!
//! - **Document**: a replica's contents, revision counter and configuration
//! - **Rebase**: rewrite a local edit to apply after a concurrent remote one
//! - **Selection**: keep cursors and ranges in place as edits land
//! - **Convergence**: compare replicas by length and state hash
//!
//! ## Usage
//!
//! ```rust
//! use delta_ot::{Delta, Document, DocumentConfig};
//!
//! let mut left = Document::new(DocumentConfig::default());
//! let mut right = Document::new(DocumentConfig::default());
//!
//! let base = Delta::new().insert("Hello", None);
//! left.apply(&base).unwrap();
//! right.apply(&base).unwrap();
//!
//! // Concurrent edits against "Hello".
//! let from_left = Delta::new().retain(5, None).insert("!", None);
//! let from_right = Delta::new().insert(">> ", None);
//! left.apply(&from_left).unwrap();
//! right.apply(&from_right).unwrap();
//!
//! // Exchange and rebase.
//! left.apply(&Document::rebase(&from_right, &from_left, false)).unwrap();
//! right.apply(&Document::rebase(&from_left, &from_right, true)).unwrap();
//!
//! assert_eq!(left.text(), ">> Hello!");
//! assert_eq!(left.state_hash().unwrap(), right.state_hash().unwrap());
//! ```
//!
//! ## Re-exports
//!
//! - `delta_ot::core` - the pure algebra (ops, deltas, wire format, validation)

pub mod convergence;
pub mod document;
pub mod error;
pub mod hash;
pub mod selection;

pub use delta_ot_core as core;

pub use convergence::{verify_convergence, ConvergenceResult};
pub use document::{Document, DocumentConfig};
pub use error::{DocumentError, Result};
pub use hash::StateHash;
pub use selection::Selection;

pub use delta_ot_core::{AttrValue, Attributes, Delta, Op, OpType};
