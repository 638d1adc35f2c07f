//! Multi-step strongly-connected-components decomposition.
//!
//! Two alternating stages over a shrinking active set:
//!
//! 1. **Trim** — peel nodes with zero in- or out-degree inside the active
//!    subgraph; such nodes cannot sit on a nontrivial cycle and become
//!    singleton components immediately.
//! 2. **Forward/backward partition** — from a pivot, the intersection of
//!    the forward- and backward-reachable sets is exactly the pivot's
//!    component; the three remaining regions are independent subproblems
//!    and recurse in parallel.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};

use minos_graph::DenseGraph;
use tracing::debug;

const UNASSIGNED: usize = usize::MAX;

/// Regions below this size recurse inline; spawning a pool task costs
/// more than decomposing a handful of nodes.
const PARALLEL_CUTOFF: usize = 64;

// ─────────────────────────────────────────────
// SccPartition
// ─────────────────────────────────────────────

/// A labeling of every node into its strongly connected component.
///
/// Two nodes share a label iff they are mutually reachable. Label values
/// are arbitrary (assignment order varies with scheduling); the
/// equivalence classes they induce do not.
#[derive(Debug, Clone)]
pub struct SccPartition {
    labels: Vec<usize>,
    set_count: usize,
    min_set_size: usize,
    max_set_size: usize,
}

impl SccPartition {
    /// Component label per internal id.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Label of one node. `node` must be in `[0, node_count)`.
    pub fn label(&self, node: usize) -> usize {
        self.labels[node]
    }

    pub fn set_count(&self) -> usize {
        self.set_count
    }

    pub fn min_set_size(&self) -> usize {
        self.min_set_size
    }

    pub fn max_set_size(&self) -> usize {
        self.max_set_size
    }

    pub fn into_labels(self) -> Vec<usize> {
        self.labels
    }
}

// ─────────────────────────────────────────────
// Computation
// ─────────────────────────────────────────────

/// Decompose the whole graph into strongly connected components.
///
/// Total over any finite directed graph — there are no error paths.
/// Independent regions are dispatched onto the rayon pool; the partition
/// is identical regardless of how they interleave, since each node's
/// label is written by exactly one task and membership is a structural
/// property of the graph.
pub fn multistep_scc(graph: &DenseGraph) -> SccPartition {
    let node_count = graph.node_count();
    let labels: Vec<AtomicUsize> = (0..node_count)
        .map(|_| AtomicUsize::new(UNASSIGNED))
        .collect();
    let next_label = AtomicUsize::new(0);

    decompose(graph, (0..node_count).collect(), &labels, &next_label);

    let labels: Vec<usize> = labels.into_iter().map(AtomicUsize::into_inner).collect();
    debug_assert!(labels.iter().all(|&l| l != UNASSIGNED));

    let mut sizes: HashMap<usize, usize> = HashMap::new();
    for &label in &labels {
        *sizes.entry(label).or_default() += 1;
    }
    let set_count = sizes.len();
    let min_set_size = sizes.values().copied().min().unwrap_or(0);
    let max_set_size = sizes.values().copied().max().unwrap_or(0);

    debug!(node_count, set_count, max_set_size, "scc decomposition complete");

    SccPartition {
        labels,
        set_count,
        min_set_size,
        max_set_size,
    }
}

/// Trim the region, then split it around a pivot and recurse into the
/// three remaining sub-regions. The scope join is the fan-in: a call
/// returns only when its whole region is labeled.
fn decompose(
    graph: &DenseGraph,
    nodes: Vec<usize>,
    labels: &[AtomicUsize],
    next_label: &AtomicUsize,
) {
    let mut active: HashSet<usize> = nodes.into_iter().collect();
    trim(graph, &mut active, labels, next_label);

    // Lowest remaining id keeps pivot choice independent of scheduling.
    let pivot = match active.iter().min() {
        Some(&p) => p,
        None => return,
    };

    let forward = reachable(graph, pivot, &active, false);
    let backward = reachable(graph, pivot, &active, true);

    // F ∩ B is the pivot's component; the rest splits three ways.
    let label = next_label.fetch_add(1, Ordering::Relaxed);
    let mut forward_rest = Vec::new();
    let mut backward_rest = Vec::new();
    for &node in &forward {
        if backward.contains(&node) {
            labels[node].store(label, Ordering::Relaxed);
        } else {
            forward_rest.push(node);
        }
    }
    for &node in &backward {
        if !forward.contains(&node) {
            backward_rest.push(node);
        }
    }
    let remainder: Vec<usize> = active
        .iter()
        .copied()
        .filter(|node| !forward.contains(node) && !backward.contains(node))
        .collect();

    rayon::scope(|s| {
        for region in [forward_rest, backward_rest, remainder] {
            if region.is_empty() {
                continue;
            }
            if region.len() < PARALLEL_CUTOFF {
                decompose(graph, region, labels, next_label);
            } else {
                s.spawn(move |_| decompose(graph, region, labels, next_label));
            }
        }
    });
}

/// Worklist trim: peel nodes whose in- or out-degree within `active` is
/// zero, labeling each as a singleton, until no node qualifies.
fn trim(
    graph: &DenseGraph,
    active: &mut HashSet<usize>,
    labels: &[AtomicUsize],
    next_label: &AtomicUsize,
) {
    let mut out_deg: HashMap<usize, usize> = HashMap::with_capacity(active.len());
    let mut in_deg: HashMap<usize, usize> = HashMap::with_capacity(active.len());
    for &node in active.iter() {
        out_deg.insert(
            node,
            graph
                .outgoing(node)
                .iter()
                .filter(|t| active.contains(&t.node))
                .count(),
        );
        in_deg.insert(
            node,
            graph
                .incoming(node)
                .iter()
                .filter(|t| active.contains(&t.node))
                .count(),
        );
    }

    let mut worklist: VecDeque<usize> = active
        .iter()
        .copied()
        .filter(|node| out_deg[node] == 0 || in_deg[node] == 0)
        .collect();

    while let Some(node) = worklist.pop_front() {
        if !active.remove(&node) {
            continue; // queued twice (both degrees hit zero)
        }
        labels[node].store(next_label.fetch_add(1, Ordering::Relaxed), Ordering::Relaxed);

        for edge in graph.outgoing(node) {
            if active.contains(&edge.node) {
                if let Some(d) = in_deg.get_mut(&edge.node) {
                    *d -= 1;
                    if *d == 0 {
                        worklist.push_back(edge.node);
                    }
                }
            }
        }
        for edge in graph.incoming(node) {
            if active.contains(&edge.node) {
                if let Some(d) = out_deg.get_mut(&edge.node) {
                    *d -= 1;
                    if *d == 0 {
                        worklist.push_back(edge.node);
                    }
                }
            }
        }
    }
}

/// Nodes reachable from `pivot` within `active`, following outgoing
/// edges — or incoming ones when `backwards` is set.
fn reachable(
    graph: &DenseGraph,
    pivot: usize,
    active: &HashSet<usize>,
    backwards: bool,
) -> HashSet<usize> {
    let mut visited = HashSet::new();
    visited.insert(pivot);
    let mut stack = vec![pivot];

    while let Some(node) = stack.pop() {
        let edges = if backwards {
            graph.incoming(node)
        } else {
            graph.outgoing(node)
        };
        for edge in edges {
            if active.contains(&edge.node) && visited.insert(edge.node) {
                stack.push(edge.node);
            }
        }
    }
    visited
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
