//! Error types for transaction ordering

use super::value_objects::TxHash;
use thiserror::Error;

/// All errors that can occur while maintaining the graph or ordering it
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderingError {
    /// Selected nodes could not be linearized because they depend on each other
    #[error("Cycle detected in dependency graph: {unresolved} transactions unresolved")]
    CycleDetected { unresolved: usize },

    /// Referenced transaction is not resident in the graph
    #[error("Unknown transaction: {0:?}")]
    UnknownNode(TxHash),

    /// Transaction is already resident in the graph
    #[error("Duplicate transaction: {0:?}")]
    DuplicateNode(TxHash),

    /// Transaction cannot spend from itself
    #[error("Transaction cannot depend on itself: {0:?}")]
    SelfDependency(TxHash),

    /// Too many distinct transactions enqueued
    #[error("Request size exceeded: {size} > {max}")]
    RequestTooLarge { size: usize, max: usize },

    /// Too many transactions selected for ordering (anti-DoS)
    #[error("Selection size exceeded: {size} > {max}")]
    SelectionTooLarge { size: usize, max: usize },
}
