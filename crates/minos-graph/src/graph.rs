use std::collections::HashMap;

use uuid::Uuid;

// ─────────────────────────────────────────────
// Target
// ─────────────────────────────────────────────

/// One adjacency entry: the far endpoint and the edge weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub node: usize,
    pub weight: f64,
}

// ─────────────────────────────────────────────
// DenseGraph
// ─────────────────────────────────────────────

/// An immutable weighted graph snapshot keyed by dense internal ids.
///
/// Internal ids are `0..node_count`, assigned by the loader in source
/// discovery order. The external↔internal duality is an arena + index
/// pair: `to_external` is the arena, `to_internal` the index. Adjacency
/// is array-backed in both directions so every algorithm gets O(1)
/// random access and cache-friendly edge scans.
///
/// Once built the graph is never mutated; it is `Sync` and shared across
/// worker threads without locks.
#[derive(Debug)]
pub struct DenseGraph {
    pub(crate) to_external: Vec<Uuid>,
    pub(crate) to_internal: HashMap<Uuid, usize>,
    pub(crate) outgoing: Vec<Vec<Target>>,
    pub(crate) incoming: Vec<Vec<Target>>,
}

impl DenseGraph {
    /// Number of nodes. Internal ids are exactly `0..node_count()`.
    pub fn node_count(&self) -> usize {
        self.to_external.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_external.is_empty()
    }

    /// Number of directed edges (each counted once).
    pub fn edge_count(&self) -> usize {
        self.outgoing.iter().map(|v| v.len()).sum()
    }

    /// Translate an external id into the dense internal id.
    pub fn to_internal(&self, external: &Uuid) -> Option<usize> {
        self.to_internal.get(external).copied()
    }

    /// Translate an internal id back to the host's external id.
    ///
    /// `node` must be in `[0, node_count)`.
    pub fn to_external(&self, node: usize) -> Uuid {
        self.to_external[node]
    }

    /// Outgoing edges of `node`, in load order.
    pub fn outgoing(&self, node: usize) -> &[Target] {
        &self.outgoing[node]
    }

    /// Incoming edges of `node`, in load order.
    pub fn incoming(&self, node: usize) -> &[Target] {
        &self.incoming[node]
    }

    pub fn degree_out(&self, node: usize) -> usize {
        self.outgoing[node].len()
    }

    pub fn degree_in(&self, node: usize) -> usize {
        self.incoming[node].len()
    }

    /// External ids in internal-id order; sinks iterate this when writing
    /// per-node results back to the host.
    pub fn external_ids(&self) -> impl Iterator<Item = Uuid> + '_ {
        self.to_external.iter().copied()
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
