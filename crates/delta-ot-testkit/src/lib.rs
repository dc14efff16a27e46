//! # Delta OT Testkit
//!
//! Testing utilities for delta-ot.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: JSON cases with expected outputs for cross-implementation checks
//! - **Generators**: Proptest strategies for documents and concurrent edits
//! - **Fixtures**: Replica sets for multi-party scenarios
//!
//! ## Golden Vectors
//!
//! ```rust
//! use delta_ot_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, actual) in verify_all_vectors() {
//!     assert!(matches, "{name}: {actual}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use delta_ot_testkit::generators::ConcurrentEdits;
//!
//! proptest! {
//!     #[test]
//!     fn transform_converges(edits: ConcurrentEdits) {
//!         let ConcurrentEdits { document, a, b } = edits;
//!         let left = document.compose(&a).compose(&a.transform(&b, true));
//!         let right = document.compose(&b).compose(&b.transform(&a, false));
//!         prop_assert_eq!(left, right);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use delta_ot::Delta;
//! use delta_ot_testkit::fixtures::multi_replica_fixture;
//!
//! let mut set = multi_replica_fixture(2).unwrap();
//! set.apply_concurrent(&[
//!     Delta::new().insert("a", None),
//!     Delta::new().insert("b", None),
//! ])
//! .unwrap();
//! assert!(set.converged().unwrap());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{multi_replica_fixture, sample_document, ReplicaSet};
pub use generators::{fit_edit, ConcurrentEdits, EditStep};
pub use vectors::{algebra_vectors, verify_all_vectors, wire_vectors, AlgebraVector, WireVector};
