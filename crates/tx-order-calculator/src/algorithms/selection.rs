//! Selection of the nodes that need explicit placement
//!
//! Requested nodes are always selected. Walking parent-ward from them, a parent
//! is selected only if it is itself a non-anchor, and the walk continues only
//! through selected parents. Anchors end the walk and are left out.

use crate::domain::errors::OrderingError;
use crate::domain::value_objects::{AdmissionSeq, TxHash};
use crate::ports::outbound::TransactionGraph;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Selected nodes with their admission sequence.
pub type Selection = HashMap<TxHash, AdmissionSeq>;

/// Collect the requested nodes plus the closure of their non-anchor ancestors.
///
/// Each node is visited at most once, so the walk terminates even if the
/// graph has been corrupted with a cycle.
pub fn select_non_anchor_closure<G>(
    graph: &G,
    requested: &BTreeMap<AdmissionSeq, TxHash>,
    max_selection_size: usize,
) -> Result<Selection, OrderingError>
where
    G: TransactionGraph + ?Sized,
{
    let mut selected: Selection = requested.iter().map(|(seq, hash)| (*hash, *seq)).collect();
    check_size(selected.len(), max_selection_size)?;

    let mut stack: Vec<TxHash> = requested.values().copied().collect();

    while let Some(current) = stack.pop() {
        let parents = graph
            .parents_of(&current)
            .ok_or(OrderingError::UnknownNode(current))?;

        for parent in parents {
            if selected.contains_key(parent) {
                continue;
            }
            if graph
                .is_anchor(parent)
                .ok_or(OrderingError::UnknownNode(*parent))?
            {
                continue;
            }

            let seq = graph
                .admission_seq(parent)
                .ok_or(OrderingError::UnknownNode(*parent))?;
            selected.insert(*parent, seq);
            check_size(selected.len(), max_selection_size)?;
            stack.push(*parent);
        }
    }

    debug!(
        requested = requested.len(),
        selected = selected.len(),
        "Selected non-anchor ancestry"
    );

    Ok(selected)
}

fn check_size(size: usize, max: usize) -> Result<(), OrderingError> {
    if size > max {
        return Err(OrderingError::SelectionTooLarge { size, max });
    }
    Ok(())
}
