//! Single-source shortest paths over the dense snapshot.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use minos_graph::{DenseGraph, GraphError};
use ordered_float::OrderedFloat;
use tracing::debug;

// ─────────────────────────────────────────────
// ShortestPaths
// ─────────────────────────────────────────────

/// Distances from one source node.
///
/// Unreachable nodes hold `f64::INFINITY`.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: usize,
    distances: Vec<f64>,
}

impl ShortestPaths {
    pub fn source(&self) -> usize {
        self.source
    }

    /// Distance per internal id.
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Distance to one node. `node` must be in `[0, node_count)`.
    pub fn distance(&self, node: usize) -> f64 {
        self.distances[node]
    }

    pub fn into_distances(self) -> Vec<f64> {
        self.distances
    }
}

// ─────────────────────────────────────────────
// Computation
// ─────────────────────────────────────────────

/// Label-setting shortest-path relaxation from `source`.
///
/// Maintains a min-priority frontier keyed by tentative distance with a
/// lowest-internal-id tie-break, so extraction order — and therefore the
/// computation — is deterministic for a fixed graph. Edge weights are
/// assumed non-negative; that is a precondition, not a runtime check.
/// Self-loops and parallel edges relax like any other edge, the cheapest
/// parallel edge prevailing naturally.
///
/// Runs in O((V+E) log V).
pub fn shortest_paths(graph: &DenseGraph, source: usize) -> Result<ShortestPaths, GraphError> {
    let node_count = graph.node_count();
    if source >= node_count {
        return Err(GraphError::SourceOutOfRange { node: source, node_count });
    }

    let mut distances = vec![f64::INFINITY; node_count];
    // min-heap: (distance, node), both reversed so ties pop the lowest id
    let mut frontier: BinaryHeap<(Reverse<OrderedFloat<f64>>, Reverse<usize>)> = BinaryHeap::new();

    distances[source] = 0.0;
    frontier.push((Reverse(OrderedFloat(0.0)), Reverse(source)));

    let mut settled = 0usize;
    while let Some((Reverse(OrderedFloat(distance)), Reverse(node))) = frontier.pop() {
        // Stale entry — a shorter path to `node` was settled earlier.
        if distance > distances[node] {
            continue;
        }
        settled += 1;

        for edge in graph.outgoing(node) {
            let tentative = distance + edge.weight;
            if tentative < distances[edge.node] {
                distances[edge.node] = tentative;
                frontier.push((Reverse(OrderedFloat(tentative)), Reverse(edge.node)));
            }
        }
    }

    debug!(source, settled, "shortest paths computed");

    Ok(ShortestPaths { source, distances })
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use minos_graph::{GraphLoader, MemoryGraphSource};
    use uuid::Uuid;

    use super::*;

    // ── helpers ──────────────────────────────────────────

    /// Build a graph from an edge list; internal ids equal list indices.
    fn build(n: usize, edges: &[(usize, usize, f64)]) -> (DenseGraph, Vec<Uuid>) {
        let mut src = MemoryGraphSource::new();
        let ids: Vec<Uuid> = (0..n).map(|_| src.add_node("Node")).collect();
        for &(a, b, w) in edges {
            src.add_weighted_relationship(ids[a], ids[b], "EDGE", "cost", w);
        }
        let graph = GraphLoader::new(&src)
            .with_weight_property("cost", f64::MAX)
            .load()
            .unwrap();
        (graph, ids)
    }

    /// Three parallel paths s→x of total costs 8, 12 and 20, a return
    /// edge x→s closing the cycle, and an isolated node q:
    ///
    /// ```text
    ///         5     5      5
    ///      (a)---(b)---(c)----.
    ///    5/ 2\2  2 \2  2 \2  2 \
    ///  (s)---(g)---(h)---(i)---(x)--->(s)
    ///    3\  /3 3  /3 3  /3 3  /
    ///      (d)---(e)---(f)----°
    /// ```
    fn three_path_graph() -> (DenseGraph, Vec<Uuid>) {
        let (s, a, b, c, d, e, f, g, h, i, x) = (0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10);
        build(
            12, // node 11 is q, no edges
            &[
                (s, a, 5.0),
                (a, b, 5.0),
                (b, c, 5.0),
                (c, x, 5.0),
                (a, g, 2.0),
                (b, h, 2.0),
                (c, i, 2.0),
                (s, d, 3.0),
                (d, e, 3.0),
                (e, f, 3.0),
                (f, x, 3.0),
                (d, g, 3.0),
                (e, h, 3.0),
                (f, i, 3.0),
                (s, g, 2.0),
                (g, h, 2.0),
                (h, i, 2.0),
                (i, x, 2.0),
                (x, s, 2.0),
            ],
        )
    }

    // ── worked example ───────────────────────────────────

    #[test]
    fn three_path_graph_takes_the_cheap_route() {
        let (graph, ids) = three_path_graph();
        let paths = shortest_paths(&graph, 0).unwrap();

        let x = graph.to_internal(&ids[10]).unwrap();
        let q = graph.to_internal(&ids[11]).unwrap();
        assert_eq!(paths.distance(x), 8.0);
        assert_eq!(paths.distance(q), f64::INFINITY);
    }

    // ── basic properties ─────────────────────────────────

    #[test]
    fn source_distance_is_zero_and_none_negative() {
        let (graph, _) = three_path_graph();
        let paths = shortest_paths(&graph, 0).unwrap();

        assert_eq!(paths.distance(0), 0.0);
        for &d in paths.distances() {
            assert!(d >= 0.0);
        }
    }

    #[test]
    fn single_node_graph_reaches_itself_at_zero() {
        let (graph, _) = build(1, &[]);
        let paths = shortest_paths(&graph, 0).unwrap();
        assert_eq!(paths.distances(), &[0.0]);
    }

    #[test]
    fn disconnected_nodes_stay_infinite() {
        let (graph, _) = build(3, &[(0, 1, 1.0)]);
        let paths = shortest_paths(&graph, 0).unwrap();
        assert_eq!(paths.distance(1), 1.0);
        assert_eq!(paths.distance(2), f64::INFINITY);
    }

    #[test]
    fn edges_are_directed() {
        let (graph, _) = build(2, &[(0, 1, 1.0)]);
        let paths = shortest_paths(&graph, 1).unwrap();
        assert_eq!(paths.distance(0), f64::INFINITY);
    }

    #[test]
    fn source_out_of_range_is_rejected() {
        let (graph, _) = build(2, &[(0, 1, 1.0)]);
        let err = shortest_paths(&graph, 2).unwrap_err();
        assert!(matches!(
            err,
            GraphError::SourceOutOfRange { node: 2, node_count: 2 }
        ));
    }

    // ── edge-shape handling ──────────────────────────────

    #[test]
    fn cheapest_parallel_edge_prevails() {
        let (graph, _) = build(2, &[(0, 1, 5.0), (0, 1, 2.0), (0, 1, 9.0)]);
        let paths = shortest_paths(&graph, 0).unwrap();
        assert_eq!(paths.distance(1), 2.0);
    }

    #[test]
    fn self_loops_do_not_disturb_distances() {
        let (graph, _) = build(2, &[(0, 0, 1.0), (0, 1, 3.0)]);
        let paths = shortest_paths(&graph, 0).unwrap();
        assert_eq!(paths.distance(0), 0.0);
        assert_eq!(paths.distance(1), 3.0);
    }

    #[test]
    fn relaxation_crosses_a_cheaper_long_route() {
        // 0→1→2 at 1+1 beats the direct 0→2 at 5
        let (graph, _) = build(3, &[(0, 2, 5.0), (0, 1, 1.0), (1, 2, 1.0)]);
        let paths = shortest_paths(&graph, 0).unwrap();
        assert_eq!(paths.distance(2), 2.0);
    }

    // ── determinism & monotonicity ───────────────────────

    #[test]
    fn repeated_runs_are_identical() {
        let (graph, _) = three_path_graph();
        let first = shortest_paths(&graph, 0).unwrap();
        let second = shortest_paths(&graph, 0).unwrap();
        assert_eq!(first.distances(), second.distances());
    }

    #[test]
    fn increasing_an_edge_weight_never_shrinks_distances() {
        let edges = [(0, 1, 2.0), (1, 2, 2.0), (0, 2, 5.0)];
        let (graph, _) = build(3, &edges);
        let before = shortest_paths(&graph, 0).unwrap();

        let mut bumped = edges;
        bumped[1].2 = 4.0; // 1→2 now costs 4
        let (graph, _) = build(3, &bumped);
        let after = shortest_paths(&graph, 0).unwrap();

        for (b, a) in before.distances().iter().zip(after.distances()) {
            assert!(a >= b);
        }
        assert_eq!(after.distance(2), 5.0); // direct edge wins now
    }
}
