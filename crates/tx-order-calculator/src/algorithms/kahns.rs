//! Kahn's Topological Sort Algorithm
//!
//! O(V + E) over the selected subgraph, detects cycles.

use super::selection::Selection;
use crate::domain::errors::OrderingError;
use crate::domain::value_objects::{AdmissionSeq, TxHash};
use crate::ports::outbound::TransactionGraph;
use std::collections::{BTreeSet, HashMap};
use tracing::warn;

/// Linearize the selected nodes so every parent precedes its children.
///
/// Only edges between two selected nodes are considered. Among nodes that are
/// ready at the same time the one admitted first goes first, which makes the
/// result a function of the graph and the selection alone.
pub fn kahns_topological_sort<G>(
    graph: &G,
    selected: &Selection,
) -> Result<Vec<TxHash>, OrderingError>
where
    G: TransactionGraph + ?Sized,
{
    if selected.is_empty() {
        return Ok(Vec::new());
    }

    // 1. In-degree and child lists restricted to the selection
    let mut in_degree: HashMap<TxHash, usize> = HashMap::with_capacity(selected.len());
    let mut children: HashMap<TxHash, Vec<TxHash>> = HashMap::new();

    for hash in selected.keys() {
        let parents = graph
            .parents_of(hash)
            .ok_or(OrderingError::UnknownNode(*hash))?;

        let mut degree = 0;
        for parent in parents.iter().filter(|parent| selected.contains_key(*parent)) {
            children.entry(*parent).or_default().push(*hash);
            degree += 1;
        }
        in_degree.insert(*hash, degree);
    }

    // 2. Initialize queue with zero in-degree nodes, earliest admission first
    let mut ready: BTreeSet<(AdmissionSeq, TxHash)> = in_degree
        .iter()
        .filter(|(_, &degree)| degree == 0)
        .map(|(hash, _)| (selected[hash], *hash))
        .collect();

    // 3. Peel
    let mut ordered = Vec::with_capacity(selected.len());

    while let Some((_, hash)) = ready.pop_first() {
        ordered.push(hash);

        let Some(dependents) = children.get(&hash) else {
            continue;
        };
        for child in dependents {
            let Some(degree) = in_degree.get_mut(child) else {
                continue;
            };
            *degree -= 1;
            if *degree == 0 {
                ready.insert((selected[child], *child));
            }
        }
    }

    // 4. Cycle detection: anything left could never become ready
    if ordered.len() < selected.len() {
        let unresolved = selected.len() - ordered.len();
        warn!(unresolved, "Cycle detected among selected transactions");
        return Err(OrderingError::CycleDetected { unresolved });
    }

    Ok(ordered)
}
