//! Convergence verification between replicas.
//!
//! After exchanging edits, replicas compare their length and state hash. Equal
//! hashes mean equal canonical encodings, and therefore equal documents.

use tracing::debug;

use crate::document::Document;
use crate::error::Result;
use crate::hash::StateHash;

/// Result of convergence verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvergenceResult {
    /// Both replicas hold identical documents.
    Converged,
    /// Replicas differ (may still have edits in flight).
    NotConverged { reason: String },
}

impl ConvergenceResult {
    /// Check if replicas have converged.
    pub fn is_converged(&self) -> bool {
        matches!(self, ConvergenceResult::Converged)
    }
}

/// Compare a local document against a remote replica's summary.
///
/// Length is checked first since it is free; the state hash settles the rest.
pub fn verify_convergence(
    local: &Document,
    remote_length: usize,
    remote_hash: &StateHash,
) -> Result<ConvergenceResult> {
    let local_length = local.length();
    if local_length != remote_length {
        return Ok(ConvergenceResult::NotConverged {
            reason: format!("length mismatch: local={local_length}, remote={remote_length}"),
        });
    }

    let local_hash = local.state_hash()?;
    if &local_hash != remote_hash {
        debug!(local = ?local_hash, remote = ?remote_hash, "state hash mismatch");
        return Ok(ConvergenceResult::NotConverged {
            reason: "state hash mismatch".into(),
        });
    }

    Ok(ConvergenceResult::Converged)
}
