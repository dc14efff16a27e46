//! # Delta OT Core
//!
//! Pure primitives for operational transformation over rich text: ops,
//! deltas and the algebra that combines them.
//!
//! This crate contains no I/O, no storage, no networking and no logging. Every
//! operation is a pure function that builds a new [`Delta`] and leaves its
//! inputs untouched.
//!
//! ## Key Types
//!
//! - [`Op`] - a single insert, delete or retain with optional attributes
//! - [`Delta`] - an ordered, self-normalizing list of ops
//! - [`OpIterator`] - a cursor that consumes ops at arbitrary granularity
//! - [`Attributes`] / [`AttrValue`] - opaque formatting, with explicit null
//!
//! ## Algebra
//!
//! - [`Delta::compose`] - fold two sequential edits into one
//! - [`Delta::transform`] - rewrite an edit to apply after a concurrent one
//! - [`Delta::transform_position`] - map a cursor index across an edit
//! - [`attributes::compose`], [`attributes::diff`], [`attributes::transform`]
//!
//! ```rust
//! use delta_ot_core::Delta;
//!
//! let a = Delta::new().retain(2, None).insert("si", None).delete(5);
//! let b = Delta::new()
//!     .retain(1, None)
//!     .insert("e", None)
//!     .delete(5)
//!     .retain(1, None)
//!     .insert("ow", None);
//!
//! let b_after_a = a.transform(&b, false);
//! assert_eq!(
//!     b_after_a,
//!     Delta::new()
//!         .retain(1, None)
//!         .insert("e", None)
//!         .delete(1)
//!         .retain(2, None)
//!         .insert("ow", None)
//! );
//! ```
//!
//! ## Wire format
//!
//! Deltas encode to the `{"ops":[...]}` JSON envelope. See [`wire`].

pub mod attributes;
mod compose;
pub mod delta;
pub mod error;
pub mod iter;
pub mod op;
mod transform;
pub mod validation;
pub mod wire;

pub use attributes::{AttrValue, Attributes};
pub use delta::Delta;
pub use error::{CoreError, ValidationError};
pub use iter::OpIterator;
pub use op::{Action, Op, OpType};
pub use validation::{validate_delta, validate_document, validate_edit};
pub use wire::{from_json, from_json_str, to_json, to_json_string};
