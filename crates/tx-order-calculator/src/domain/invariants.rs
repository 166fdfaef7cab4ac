//! Domain invariants for transaction ordering
//!
//! Checkers used by debug assertions in the calculator and by tests.

use super::entities::DependencyGraph;
use super::value_objects::TxHash;
use crate::ports::outbound::TransactionGraph;
use std::collections::{HashMap, HashSet};

/// INVARIANT-1: Transposed Adjacency
/// `parent ∈ parents(child)` exactly when `child ∈ children(parent)`, and
/// every referenced hash is resident.
pub fn invariant_adjacency_transposed<C>(graph: &DependencyGraph<C>) -> bool {
    let mut edges = 0;

    for node in graph.nodes() {
        for parent in node.parents() {
            let Some(children) = graph.children(parent) else {
                return false;
            };
            if !children.contains(&node.hash()) {
                return false;
            }
            edges += 1;
        }
        for child in node.children() {
            let Some(parents) = graph.parents(child) else {
                return false;
            };
            if !parents.contains(&node.hash()) {
                return false;
            }
        }
    }

    edges == graph.edge_count()
}

/// INVARIANT-2: No Cycles
/// The dependency graph must be a DAG.
pub fn invariant_no_cycles<C>(graph: &DependencyGraph<C>) -> bool {
    let mut visited = HashSet::new();
    let mut rec_stack = HashSet::new();

    for hash in graph.hashes() {
        if has_cycle_dfs(graph, *hash, &mut visited, &mut rec_stack) {
            return false;
        }
    }

    true
}

fn has_cycle_dfs<C>(
    graph: &DependencyGraph<C>,
    node: TxHash,
    visited: &mut HashSet<TxHash>,
    rec_stack: &mut HashSet<TxHash>,
) -> bool {
    if rec_stack.contains(&node) {
        return true;
    }

    if visited.contains(&node) {
        return false;
    }

    visited.insert(node);
    rec_stack.insert(node);

    if let Some(children) = graph.children(&node) {
        for &child in children {
            if has_cycle_dfs(graph, child, visited, rec_stack) {
                return true;
            }
        }
    }

    rec_stack.remove(&node);
    false
}

/// INVARIANT-3: Topological Order
/// If A is a direct or transitive parent of B and both are in `ordered`,
/// A appears before B.
pub fn invariant_topological_order<G>(graph: &G, ordered: &[TxHash]) -> bool
where
    G: TransactionGraph + ?Sized,
{
    let position: HashMap<TxHash, usize> = ordered
        .iter()
        .enumerate()
        .map(|(index, hash)| (*hash, index))
        .collect();

    for (index, hash) in ordered.iter().enumerate() {
        let mut seen = HashSet::new();
        let mut stack = vec![*hash];

        while let Some(current) = stack.pop() {
            let Some(parents) = graph.parents_of(&current) else {
                continue;
            };
            for parent in parents {
                if !seen.insert(*parent) {
                    continue;
                }
                if matches!(position.get(parent), Some(&at) if at >= index) {
                    return false;
                }
                stack.push(*parent);
            }
        }
    }

    true
}

/// INVARIANT-3b: Parents Precede
/// Every direct parent of an emitted node that is itself emitted appears
/// earlier. O(V + E).
///
/// Equivalent to INVARIANT-3 for calculator output: any path between two
/// emitted nodes runs through non-anchors, which are all emitted too.
pub fn invariant_parents_precede<G>(graph: &G, ordered: &[TxHash]) -> bool
where
    G: TransactionGraph + ?Sized,
{
    let position: HashMap<TxHash, usize> = ordered
        .iter()
        .enumerate()
        .map(|(index, hash)| (*hash, index))
        .collect();

    ordered.iter().enumerate().all(|(index, hash)| {
        graph.parents_of(hash).map_or(true, |parents| {
            parents
                .iter()
                .filter_map(|parent| position.get(parent))
                .all(|&at| at < index)
        })
    })
}

/// INVARIANT-4: Deduplication
/// Every transaction appears at most once.
pub fn invariant_no_duplicates(ordered: &[TxHash]) -> bool {
    let mut seen = HashSet::with_capacity(ordered.len());
    ordered.iter().all(|hash| seen.insert(*hash))
}

/// INVARIANT-5: Minimal Selection
/// Every requested transaction is emitted, and every other emitted
/// transaction is a non-anchor.
pub fn invariant_minimal_selection<G>(graph: &G, requested: &[TxHash], ordered: &[TxHash]) -> bool
where
    G: TransactionGraph + ?Sized,
{
    let requested: HashSet<&TxHash> = requested.iter().collect();
    let emitted: HashSet<&TxHash> = ordered.iter().collect();

    if !requested.is_subset(&emitted) {
        return false;
    }

    ordered
        .iter()
        .filter(|hash| !requested.contains(hash))
        .all(|hash| graph.is_anchor(hash) == Some(false))
}
