//! End-to-end invocation surface: load → compute → write, with phase
//! timing collected into the result record.

use minos_graph::{GraphError, GraphLoader, GraphSource};
use uuid::Uuid;

use crate::results::{SccResult, ShortestPathsResult};
use crate::scc::multistep_scc;
use crate::shortest_paths::shortest_paths;
use crate::sink::ResultSink;

/// Load the configured snapshot, run shortest paths from the node with
/// external id `start`, and hand the distance slice to `sink`.
///
/// Fails with [`GraphError::UnknownNode`] when `start` is not part of the
/// loaded selection. Nothing is written on any failure path.
pub fn run_shortest_paths<S, K>(
    loader: GraphLoader<'_, S>,
    start: Uuid,
    sink: &mut K,
) -> Result<ShortestPathsResult, GraphError>
where
    S: GraphSource,
    K: ResultSink<[f64]>,
{
    let mut builder = ShortestPathsResult::builder();

    let graph = builder.time_load(|| loader.load())?;
    let source = graph
        .to_internal(&start)
        .ok_or(GraphError::UnknownNode(start))?;

    let paths = builder.time_compute(|| shortest_paths(&graph, source))?;
    builder.time_write(|| sink.write(&graph, paths.distances()))?;

    Ok(builder.with_distances(paths.into_distances()).build())
}

/// Load the configured snapshot, decompose it into strongly connected
/// components, and hand the label slice to `sink`.
pub fn run_scc<S, K>(loader: GraphLoader<'_, S>, sink: &mut K) -> Result<SccResult, GraphError>
where
    S: GraphSource,
    K: ResultSink<[usize]>,
{
    let mut builder = SccResult::builder();

    let graph = builder.time_load(|| loader.load())?;
    let partition = builder.time_compute(|| multistep_scc(&graph));
    builder.time_write(|| sink.write(&graph, partition.labels()))?;

    Ok(builder
        .with_set_count(partition.set_count())
        .with_min_set_size(partition.min_set_size())
        .with_max_set_size(partition.max_set_size())
        .build())
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
