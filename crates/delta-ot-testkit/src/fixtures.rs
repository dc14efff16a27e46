//! Test fixtures and helpers.
//!
//! Common setup code for multi-replica scenarios.

use delta_ot::{
    verify_convergence, ConvergenceResult, Delta, Document, DocumentConfig, Result,
};
use delta_ot_core::attributes::from_pairs;
use delta_ot_core::Attributes;

/// A set of replicas that all started from the same document.
#[derive(Debug, Clone)]
pub struct ReplicaSet {
    pub replicas: Vec<Document>,
}

impl ReplicaSet {
    /// Create `count` replicas of `base`.
    pub fn new(base: &Delta, count: usize) -> Result<Self> {
        Self::with_config(base, count, DocumentConfig::default())
    }

    pub fn with_config(base: &Delta, count: usize, config: DocumentConfig) -> Result<Self> {
        let replicas = (0..count)
            .map(|_| Document::from_delta(base.clone(), config.clone()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { replicas })
    }

    /// Deliver one round of concurrent edits.
    ///
    /// Replica `i` makes `edits[i]` against the shared state (replicas without
    /// an edit make none). The edits are then ordered by replica index, as a
    /// relay would, and every replica receives the others' edits in that
    /// order, rebasing them past its own edit while it is still unacknowledged.
    ///
    /// Returns the edits in delivered form: edit `k` rewritten to apply after
    /// edits `0..k`.
    pub fn apply_concurrent(&mut self, edits: &[Delta]) -> Result<Vec<Delta>> {
        let mut ordered: Vec<Delta> = Vec::with_capacity(edits.len());
        for edit in edits {
            let rebased = ordered
                .iter()
                .fold(edit.clone(), |pending, earlier| earlier.transform(&pending, true));
            ordered.push(rebased);
        }

        for (i, replica) in self.replicas.iter_mut().enumerate() {
            let Some(own) = edits.get(i) else {
                for edit in &ordered {
                    replica.apply(edit)?;
                }
                continue;
            };

            replica.apply(own)?;
            let mut pending = own.clone();
            for earlier in &ordered[..i] {
                replica.apply(&pending.transform(earlier, false))?;
                pending = earlier.transform(&pending, true);
            }
            for later in &ordered[i + 1..] {
                replica.apply(later)?;
            }
        }

        Ok(ordered)
    }

    /// Compare every replica against the first.
    pub fn convergence(&self) -> Result<Vec<ConvergenceResult>> {
        let Some(first) = self.replicas.first() else {
            return Ok(Vec::new());
        };
        let hash = first.state_hash()?;
        self.replicas[1..]
            .iter()
            .map(|replica| verify_convergence(replica, first.length(), &hash))
            .collect()
    }

    /// Whether all replicas hold the same document.
    pub fn converged(&self) -> Result<bool> {
        Ok(self.convergence()?.iter().all(ConvergenceResult::is_converged))
    }
}

/// A formatted sample document: "Hello " bold, "world" plain, "!" red.
pub fn sample_document() -> Delta {
    Delta::new()
        .insert("Hello ", Some(bold()))
        .insert("world", None)
        .insert("!", Some(from_pairs([("color", "red")])))
}

/// `{"bold": true}`
pub fn bold() -> Attributes {
    from_pairs([("bold", true)])
}

/// Create `count` replicas of [`sample_document`].
pub fn multi_replica_fixture(count: usize) -> Result<ReplicaSet> {
    ReplicaSet::new(&sample_document(), count)
}
