//! Outbound Ports (Driven Ports / SPI)

use crate::domain::entities::DependencyGraph;
use crate::domain::value_objects::{AdmissionSeq, TxHash};
use std::collections::HashSet;

/// Read-only view of the pool's dependency graph.
///
/// The owning pool must keep the graph stable (not mutated) for as long as a
/// calculator borrows it.
pub trait TransactionGraph {
    /// Admission order of a resident transaction, `None` if not resident.
    fn admission_seq(&self, hash: &TxHash) -> Option<AdmissionSeq>;

    /// Direct pool-resident parents, `None` if not resident.
    fn parents_of(&self, hash: &TxHash) -> Option<&HashSet<TxHash>>;

    fn contains(&self, hash: &TxHash) -> bool {
        self.admission_seq(hash).is_some()
    }

    fn is_anchor(&self, hash: &TxHash) -> Option<bool> {
        self.parents_of(hash).map(HashSet::is_empty)
    }
}

impl<C> TransactionGraph for DependencyGraph<C> {
    fn admission_seq(&self, hash: &TxHash) -> Option<AdmissionSeq> {
        self.get(hash).map(|node| node.seq())
    }

    fn parents_of(&self, hash: &TxHash) -> Option<&HashSet<TxHash>> {
        self.parents(hash)
    }
}
