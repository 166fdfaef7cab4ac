//! Value objects for transaction ordering

use primitive_types::H256;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Transaction identity (content hash)
pub type TxHash = H256;

/// Position of a node in admission order.
///
/// Assigned once when a node enters the graph and never reused, so it gives a
/// total order over resident nodes that does not depend on their hashes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AdmissionSeq(pub u64);

impl AdmissionSeq {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for AdmissionSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Compute the identity of a serialized transaction (double SHA-256).
pub fn tx_hash_of(bytes: &[u8]) -> TxHash {
    let first = Sha256::digest(bytes);
    let second = Sha256::digest(first);
    H256::from_slice(&second)
}
