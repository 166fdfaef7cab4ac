//! Transaction Ordering Service
//!
//! Owns the pool's dependency graph and serializes access to it.
//!
//! ## Thread Safety
//!
//! The graph sits behind a `parking_lot::RwLock`. Admission and retirement
//! take the write lock; ordering takes the read lock for the whole
//! calculation, so concurrent orderings run in parallel and never observe a
//! half-applied edge.

use crate::algorithms::TransactionOrderCalculator;
use crate::config::OrderingConfig;
use crate::domain::entities::DependencyGraph;
use crate::domain::errors::OrderingError;
use crate::domain::value_objects::{AdmissionSeq, TxHash};
use crate::ports::inbound::TransactionOrderingApi;
use parking_lot::RwLock;
use tracing::{debug, info, warn};

/// Transaction Ordering Service
///
/// Orchestrates:
/// 1. Admission of transactions with their in-pool parents
/// 2. Retirement of confirmed or evicted transactions
/// 3. Ordering of requested subsets through a fresh calculator per call
pub struct TransactionOrderingService<C> {
    config: OrderingConfig,
    graph: RwLock<DependencyGraph<C>>,
}

impl<C> TransactionOrderingService<C> {
    /// Create a new service with default config
    pub fn new() -> Self {
        Self::with_config(OrderingConfig::default())
    }

    /// Create a new service with custom config
    pub fn with_config(config: OrderingConfig) -> Self {
        Self {
            config,
            graph: RwLock::new(DependencyGraph::new()),
        }
    }

    pub fn config(&self) -> &OrderingConfig {
        &self.config
    }

    /// Order every resident transaction.
    pub fn order_all(&self) -> Result<Vec<TxHash>, OrderingError> {
        let graph = self.graph.read();
        let mut calculator = TransactionOrderCalculator::with_config(&*graph, self.config.clone());
        for hash in graph.hashes() {
            calculator.enqueue(*hash)?;
        }
        calculator.order_transactions()
    }

    /// Anchor status of a resident transaction, `None` if unknown.
    pub fn is_anchor(&self, hash: &TxHash) -> Option<bool> {
        self.graph.read().is_anchor(hash)
    }

    pub fn contains(&self, hash: &TxHash) -> bool {
        self.graph.read().contains(hash)
    }

    /// Run `f` against the graph under the read lock.
    pub fn with_graph<R>(&self, f: impl FnOnce(&DependencyGraph<C>) -> R) -> R {
        f(&self.graph.read())
    }

    pub fn len(&self) -> usize {
        self.graph.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.read().is_empty()
    }
}

impl<C> Default for TransactionOrderingService<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Send + Sync> TransactionOrderingApi for TransactionOrderingService<C> {
    type Context = C;

    fn admit(
        &self,
        hash: TxHash,
        context: C,
        parents: &[TxHash],
    ) -> Result<AdmissionSeq, OrderingError> {
        let mut graph = self.graph.write();
        let seq = graph.insert(hash, context)?;

        let mut linked = 0;
        for parent in parents {
            if !graph.contains(parent) {
                continue;
            }
            match graph.connect(*parent, hash) {
                Ok(true) => linked += 1,
                Ok(false) => {}
                Err(err) => {
                    warn!(tx = ?hash, error = %err, "Rejected admission");
                    graph.remove(&hash);
                    return Err(err);
                }
            }
        }

        debug!(tx = ?hash, %seq, linked, "Admitted transaction");
        Ok(seq)
    }

    fn retire(&self, hashes: &[TxHash]) -> usize {
        let mut graph = self.graph.write();
        let retired = hashes
            .iter()
            .filter(|hash| graph.remove(hash).is_some())
            .count();

        info!(
            requested = hashes.len(),
            retired,
            remaining = graph.len(),
            "Retired transactions"
        );
        retired
    }

    fn order_transactions(&self, requested: &[TxHash]) -> Result<Vec<TxHash>, OrderingError> {
        let graph = self.graph.read();
        let mut calculator = TransactionOrderCalculator::with_config(&*graph, self.config.clone());
        for hash in requested {
            calculator.enqueue(*hash)?;
        }
        calculator.order_transactions()
    }
}
