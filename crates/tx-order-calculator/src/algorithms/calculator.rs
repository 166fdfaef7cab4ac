//! Transaction Order Calculator
//!
//! A transient, single-use computation: register the transactions of interest
//! with [`TransactionOrderCalculator::enqueue`], then consume the calculator
//! with [`TransactionOrderCalculator::order_transactions`].

use super::kahns::kahns_topological_sort;
use super::selection::select_non_anchor_closure;
use crate::config::OrderingConfig;
use crate::domain::errors::OrderingError;
use crate::domain::invariants::{
    invariant_minimal_selection, invariant_no_duplicates, invariant_parents_precede,
};
use crate::domain::value_objects::{AdmissionSeq, TxHash};
use crate::ports::outbound::TransactionGraph;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Orders a requested subset of a dependency graph.
///
/// Borrows the graph immutably for its whole life, so the graph cannot be
/// mutated between `enqueue` and `order_transactions`.
pub struct TransactionOrderCalculator<'g, G: TransactionGraph + ?Sized> {
    graph: &'g G,
    config: OrderingConfig,
    /// Request set keyed by admission order; enqueue order is irrelevant
    requested: BTreeMap<AdmissionSeq, TxHash>,
}

impl<'g, G: TransactionGraph + ?Sized> TransactionOrderCalculator<'g, G> {
    /// Create a calculator with default config
    pub fn new(graph: &'g G) -> Self {
        Self::with_config(graph, OrderingConfig::default())
    }

    /// Create a calculator with custom config
    pub fn with_config(graph: &'g G, config: OrderingConfig) -> Self {
        Self {
            graph,
            config,
            requested: BTreeMap::new(),
        }
    }

    /// Add a transaction to the request set. Enqueuing it again has no effect.
    pub fn enqueue(&mut self, hash: TxHash) -> Result<(), OrderingError> {
        let seq = self
            .graph
            .admission_seq(&hash)
            .ok_or(OrderingError::UnknownNode(hash))?;

        if self.requested.contains_key(&seq) {
            return Ok(());
        }

        if self.requested.len() >= self.config.max_request_size {
            warn!(
                max = self.config.max_request_size,
                "Request size limit reached, rejecting enqueue"
            );
            return Err(OrderingError::RequestTooLarge {
                size: self.requested.len() + 1,
                max: self.config.max_request_size,
            });
        }

        self.requested.insert(seq, hash);
        Ok(())
    }

    /// Number of distinct transactions enqueued so far
    pub fn len(&self) -> usize {
        self.requested.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requested.is_empty()
    }

    /// Order the requested transactions and their non-anchor ancestors.
    ///
    /// Anchors that were not requested are left out. Every node appears once,
    /// after all of its pool-resident ancestors that also appear.
    pub fn order_transactions(self) -> Result<Vec<TxHash>, OrderingError> {
        if self.requested.is_empty() {
            return Ok(Vec::new());
        }

        let selected =
            select_non_anchor_closure(self.graph, &self.requested, self.config.max_selection_size)?;
        let ordered = kahns_topological_sort(self.graph, &selected)?;

        debug!(
            requested = self.requested.len(),
            ordered = ordered.len(),
            "Transaction ordering complete"
        );

        debug_assert!(invariant_no_duplicates(&ordered));
        debug_assert!(invariant_parents_precede(self.graph, &ordered));
        debug_assert!({
            let requested: Vec<TxHash> = self.requested.values().copied().collect();
            invariant_minimal_selection(self.graph, &requested, &ordered)
        });

        Ok(ordered)
    }
}
