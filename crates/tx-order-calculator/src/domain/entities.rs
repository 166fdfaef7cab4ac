//! Core entities for transaction ordering
//!
//! The graph is an arena keyed by transaction hash. Nodes refer to each other
//! only by hash, so removing a node is a matter of deleting edge entries and
//! nothing can keep a retired node alive.

use super::errors::OrderingError;
use super::value_objects::{AdmissionSeq, TxHash};
use std::collections::{HashMap, HashSet};

/// One pool-resident transaction and its direct spend relationships.
#[derive(Clone, Debug)]
pub struct DependencyNode<C = ()> {
    /// Transaction identity
    hash: TxHash,
    /// Admission order, used as the deterministic tie-breaker
    seq: AdmissionSeq,
    /// Validation context carried on behalf of the pool
    context: C,
    /// Pool-resident transactions this one spends from
    parents: HashSet<TxHash>,
    /// Pool-resident transactions spending from this one
    children: HashSet<TxHash>,
}

impl<C> DependencyNode<C> {
    fn new(hash: TxHash, seq: AdmissionSeq, context: C) -> Self {
        Self {
            hash,
            seq,
            context,
            parents: HashSet::new(),
            children: HashSet::new(),
        }
    }

    pub fn hash(&self) -> TxHash {
        self.hash
    }

    pub fn seq(&self) -> AdmissionSeq {
        self.seq
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn parents(&self) -> &HashSet<TxHash> {
        &self.parents
    }

    pub fn children(&self) -> &HashSet<TxHash> {
        &self.children
    }

    /// True if nothing in the pool must precede this node.
    ///
    /// Always derived from the current parent set; edges may change between calls.
    pub fn is_anchor(&self) -> bool {
        self.parents.is_empty()
    }
}

/// Dependency graph over pool-resident transactions.
///
/// Every mutation validates its inputs before writing, and writes both
/// directions of an edge together, so `parent ∈ parents(child)` holds exactly
/// when `child ∈ children(parent)`.
#[derive(Clone, Debug)]
pub struct DependencyGraph<C = ()> {
    /// All nodes by hash
    nodes: HashMap<TxHash, DependencyNode<C>>,
    /// Sequence handed to the next admitted node
    next_seq: AdmissionSeq,
    /// Number of parent -> child edges
    edge_count: usize,
}

impl<C> DependencyGraph<C> {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            next_seq: AdmissionSeq(0),
            edge_count: 0,
        }
    }

    /// Admit a node with no edges.
    pub fn insert(&mut self, hash: TxHash, context: C) -> Result<AdmissionSeq, OrderingError> {
        if self.nodes.contains_key(&hash) {
            return Err(OrderingError::DuplicateNode(hash));
        }

        let seq = self.next_seq;
        self.next_seq = seq.next();
        self.nodes.insert(hash, DependencyNode::new(hash, seq, context));
        Ok(seq)
    }

    /// Record that `child` spends an output of `parent`.
    ///
    /// Returns `false` if the edge already existed. The caller must not
    /// introduce a cycle; only the trivial self-edge is rejected here.
    pub fn connect(&mut self, parent: TxHash, child: TxHash) -> Result<bool, OrderingError> {
        if parent == child {
            return Err(OrderingError::SelfDependency(parent));
        }
        if !self.nodes.contains_key(&parent) {
            return Err(OrderingError::UnknownNode(parent));
        }

        let Some(child_node) = self.nodes.get_mut(&child) else {
            return Err(OrderingError::UnknownNode(child));
        };
        if !child_node.parents.insert(parent) {
            return Ok(false);
        }
        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.insert(child);
        }

        self.edge_count += 1;
        Ok(true)
    }

    /// Remove a single edge. Returns `false` if it did not exist.
    pub fn disconnect(&mut self, parent: &TxHash, child: &TxHash) -> bool {
        let removed = self
            .nodes
            .get_mut(child)
            .map(|node| node.parents.remove(parent))
            .unwrap_or(false);
        if !removed {
            return false;
        }

        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.remove(child);
        }
        self.edge_count -= 1;
        true
    }

    /// Remove every edge incident to the given nodes, in both directions.
    ///
    /// Unknown hashes are ignored. The nodes themselves stay resident.
    pub fn sever(&mut self, hashes: &[TxHash]) {
        for hash in hashes {
            let Some(node) = self.nodes.get_mut(hash) else {
                continue;
            };
            let parents = std::mem::take(&mut node.parents);
            let children = std::mem::take(&mut node.children);
            self.edge_count -= parents.len() + children.len();

            for parent in &parents {
                if let Some(parent_node) = self.nodes.get_mut(parent) {
                    parent_node.children.remove(hash);
                }
            }
            for child in &children {
                if let Some(child_node) = self.nodes.get_mut(child) {
                    child_node.parents.remove(hash);
                }
            }
        }
    }

    /// Sever and drop a node, returning its context.
    ///
    /// Former children of a removed node may become anchors.
    pub fn remove(&mut self, hash: &TxHash) -> Option<C> {
        self.sever(std::slice::from_ref(hash));
        self.nodes.remove(hash).map(|node| node.context)
    }

    pub fn get(&self, hash: &TxHash) -> Option<&DependencyNode<C>> {
        self.nodes.get(hash)
    }

    pub fn contains(&self, hash: &TxHash) -> bool {
        self.nodes.contains_key(hash)
    }

    pub fn parents(&self, hash: &TxHash) -> Option<&HashSet<TxHash>> {
        self.nodes.get(hash).map(|node| &node.parents)
    }

    pub fn children(&self, hash: &TxHash) -> Option<&HashSet<TxHash>> {
        self.nodes.get(hash).map(|node| &node.children)
    }

    /// Anchor status of a resident node, `None` if unknown.
    pub fn is_anchor(&self, hash: &TxHash) -> Option<bool> {
        self.nodes.get(hash).map(DependencyNode::is_anchor)
    }

    /// Check if an edge exists parent -> child
    pub fn has_edge(&self, parent: &TxHash, child: &TxHash) -> bool {
        self.parents(child)
            .map(|parents| parents.contains(parent))
            .unwrap_or(false)
    }

    /// Resident hashes, in no particular order
    pub fn hashes(&self) -> impl Iterator<Item = &TxHash> + '_ {
        self.nodes.keys()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &DependencyNode<C>> + '_ {
        self.nodes.values()
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl<C> Default for DependencyGraph<C> {
    fn default() -> Self {
        Self::new()
    }
}
