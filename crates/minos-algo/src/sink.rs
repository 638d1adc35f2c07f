//! Write-back capability injected by the host.

use minos_graph::{DenseGraph, GraphError};

/// Receives an algorithm's per-node payload for externally visible
/// write-back. The engine never persists anything itself; it only times
/// the call to populate `write_millis`. Implementations translate
/// internal ids through `graph.to_external` / `graph.external_ids`.
pub trait ResultSink<P: ?Sized> {
    fn write(&mut self, graph: &DenseGraph, payload: &P) -> Result<(), GraphError>;
}

impl<P: ?Sized, F> ResultSink<P> for F
where
    F: FnMut(&DenseGraph, &P) -> Result<(), GraphError>,
{
    fn write(&mut self, graph: &DenseGraph, payload: &P) -> Result<(), GraphError> {
        self(graph, payload)
    }
}

/// Sink for callers that only want the computation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardSink;

impl<P: ?Sized> ResultSink<P> for DiscardSink {
    fn write(&mut self, _graph: &DenseGraph, _payload: &P) -> Result<(), GraphError> {
        Ok(())
    }
}
