//! Algorithms module for transaction ordering
//!
//! Contains:
//! - Non-anchor ancestor selection
//! - Kahn's topological sort over the selected set
//! - The single-use order calculator tying both together

pub mod calculator;
pub mod kahns;
pub mod selection;

pub use calculator::TransactionOrderCalculator;
pub use kahns::kahns_topological_sort;
pub use selection::{select_non_anchor_closure, Selection};
