use std::collections::HashMap;

use tracing::debug;

use crate::error::GraphError;
use crate::graph::{DenseGraph, Target};
use crate::source::{GraphSource, NodeSelector, RelationshipSelector};

/// Upper bound of the dense id space. The adjacency arrays are 32-bit
/// indexable; a source yielding more nodes than this cannot be loaded.
pub const MAX_NODE_COUNT: usize = u32::MAX as usize;

// ─────────────────────────────────────────────
// GraphLoader
// ─────────────────────────────────────────────

/// Builds a [`DenseGraph`] from a [`GraphSource`].
///
/// Construction streams the source exactly twice: one pass over the node
/// selection assigning dense internal ids in discovery order, one pass
/// over the relationship selection translating endpoints and recording
/// weights. Either pass failing aborts the load — no partial graph is
/// ever returned.
///
/// ```
/// # use minos_graph::{GraphLoader, MemoryGraphSource};
/// let mut src = MemoryGraphSource::new();
/// let a = src.add_node("City");
/// let b = src.add_node("City");
/// src.add_weighted_relationship(a, b, "ROAD", "cost", 3.0);
///
/// let graph = GraphLoader::new(&src)
///     .with_label("City")
///     .with_relationship_type("ROAD")
///     .with_weight_property("cost", 1.0)
///     .load()
///     .unwrap();
/// assert_eq!(graph.node_count(), 2);
/// ```
#[derive(Debug)]
pub struct GraphLoader<'s, S: GraphSource> {
    source: &'s S,
    nodes: NodeSelector,
    relationships: RelationshipSelector,
    weight_property: Option<String>,
    default_weight: f64,
}

impl<'s, S: GraphSource> GraphLoader<'s, S> {
    pub fn new(source: &'s S) -> Self {
        Self {
            source,
            nodes: NodeSelector::All,
            relationships: RelationshipSelector::All,
            weight_property: None,
            default_weight: 1.0,
        }
    }

    /// Restrict the node selection to one label.
    pub fn with_label(mut self, label: &str) -> Self {
        self.nodes = NodeSelector::Label(label.to_string());
        self
    }

    /// Restrict the relationship selection to one type.
    pub fn with_relationship_type(mut self, rel_type: &str) -> Self {
        self.relationships = RelationshipSelector::Type(rel_type.to_string());
        self
    }

    /// Read edge weights from the named numeric property, substituting
    /// `default_weight` on relationships that do not carry it.
    ///
    /// Without this call every edge gets weight `1.0`.
    pub fn with_weight_property(mut self, property: &str, default_weight: f64) -> Self {
        self.weight_property = Some(property.to_string());
        self.default_weight = default_weight;
        self
    }

    /// Stream the source and freeze the dense snapshot.
    pub fn load(&self) -> Result<DenseGraph, GraphError> {
        if let Some(property) = &self.weight_property {
            if property.is_empty() {
                return Err(GraphError::InvalidSelector(
                    "weight property name must not be empty".to_string(),
                ));
            }
        }

        // Pass 1: dense id assignment in discovery order.
        let mut to_external = Vec::new();
        let mut to_internal = HashMap::new();
        for external in self.source.nodes(&self.nodes)? {
            if to_external.len() == MAX_NODE_COUNT {
                return Err(GraphError::IdSpaceExhausted {
                    count: to_external.len() as u64 + 1,
                    max: MAX_NODE_COUNT as u64,
                });
            }
            if to_internal.insert(external, to_external.len()).is_some() {
                return Err(GraphError::DuplicateNode(external));
            }
            to_external.push(external);
        }

        // Pass 2: endpoint translation + weight accumulation.
        let node_count = to_external.len();
        let mut outgoing = vec![Vec::new(); node_count];
        let mut incoming = vec![Vec::new(); node_count];
        let mut relationship_count = 0usize;
        let records = self
            .source
            .relationships(&self.relationships, self.weight_property.as_deref())?;
        for record in records {
            let source = *to_internal
                .get(&record.source)
                .ok_or(GraphError::DanglingEndpoint(record.source))?;
            let target = *to_internal
                .get(&record.target)
                .ok_or(GraphError::DanglingEndpoint(record.target))?;
            let weight = record.weight.unwrap_or(self.default_weight);

            outgoing[source].push(Target { node: target, weight });
            incoming[target].push(Target { node: source, weight });
            relationship_count += 1;
        }

        debug!(
            nodes = node_count,
            relationships = relationship_count,
            "graph snapshot loaded"
        );

        Ok(DenseGraph {
            to_external,
            to_internal,
            outgoing,
            incoming,
        })
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
