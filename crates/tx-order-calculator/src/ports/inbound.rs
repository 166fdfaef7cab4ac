//! Inbound Ports (Driving Ports / API)

use crate::domain::errors::OrderingError;
use crate::domain::value_objects::{AdmissionSeq, TxHash};

/// Primary transaction ordering API, as seen by the memory pool and the
/// block-template assembler.
pub trait TransactionOrderingApi: Send + Sync {
    /// Opaque validation context carried with each transaction.
    type Context;

    /// Admit a transaction and wire it to its pool-resident parents.
    ///
    /// Parents that are not resident are treated as settled outside the pool.
    fn admit(
        &self,
        hash: TxHash,
        context: Self::Context,
        parents: &[TxHash],
    ) -> Result<AdmissionSeq, OrderingError>;

    /// Retire confirmed or evicted transactions, severing their edges.
    ///
    /// Returns how many of `hashes` were resident.
    fn retire(&self, hashes: &[TxHash]) -> usize;

    /// Order the requested transactions plus their non-anchor ancestors.
    ///
    /// The result is a hard precedence constraint: a transaction never
    /// appears before one of its pool-resident ancestors.
    fn order_transactions(&self, requested: &[TxHash]) -> Result<Vec<TxHash>, OrderingError>;
}
