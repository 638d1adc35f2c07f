use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::GraphError;

// ─────────────────────────────────────────────
// Selectors
// ─────────────────────────────────────────────

/// Which nodes of the host graph take part in a load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeSelector {
    /// Every node the source knows about.
    #[default]
    All,
    /// Only nodes carrying this label.
    Label(String),
}

impl NodeSelector {
    pub fn matches(&self, label: &str) -> bool {
        match self {
            Self::All => true,
            Self::Label(wanted) => wanted == label,
        }
    }
}

/// Which relationships of the host graph take part in a load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationshipSelector {
    /// Every relationship the source knows about.
    #[default]
    All,
    /// Only relationships of this type.
    Type(String),
}

impl RelationshipSelector {
    pub fn matches(&self, rel_type: &str) -> bool {
        match self {
            Self::All => true,
            Self::Type(wanted) => wanted == rel_type,
        }
    }
}

// ─────────────────────────────────────────────
// RelationshipRecord
// ─────────────────────────────────────────────

/// One relationship as streamed out of a [`GraphSource`].
///
/// `weight` is the value of the weight property the loader asked for,
/// or `None` when the relationship does not carry that property.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelationshipRecord {
    pub source: Uuid,
    pub target: Uuid,
    pub weight: Option<f64>,
}

// ─────────────────────────────────────────────
// GraphSource
// ─────────────────────────────────────────────

/// The external graph collaborator.
///
/// The host owns storage; this trait is the read-only window the loader
/// streams through, exactly once per pass. Identifiers must be stable for
/// the lifetime of one load, and `nodes` must enumerate in a stable order
/// (internal ids are assigned in discovery order).
pub trait GraphSource {
    /// Enumerate the external ids of all nodes matching `selector`.
    fn nodes<'a>(
        &'a self,
        selector: &NodeSelector,
    ) -> Result<Box<dyn Iterator<Item = Uuid> + 'a>, GraphError>;

    /// Enumerate all relationships matching `selector`.
    ///
    /// When `weight_property` is given, each record's `weight` carries that
    /// property's numeric value where present.
    fn relationships<'a>(
        &'a self,
        selector: &RelationshipSelector,
        weight_property: Option<&str>,
    ) -> Result<Box<dyn Iterator<Item = RelationshipRecord> + 'a>, GraphError>;
}

// ─────────────────────────────────────────────
// MemoryGraphSource
// ─────────────────────────────────────────────

#[derive(Debug, Clone)]
struct MemoryNode {
    id: Uuid,
    label: String,
}

#[derive(Debug, Clone)]
struct MemoryRelationship {
    source: Uuid,
    target: Uuid,
    rel_type: String,
    properties: HashMap<String, f64>,
}

/// An in-memory [`GraphSource`].
///
/// Hosts that already hold their graph in process can feed the loader
/// through this instead of implementing the trait themselves; it is also
/// the fixture every test in the workspace builds on.
#[derive(Debug, Clone, Default)]
pub struct MemoryGraphSource {
    nodes: Vec<MemoryNode>,
    relationships: Vec<MemoryRelationship>,
}

impl MemoryGraphSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node; returns its freshly generated external id.
    pub fn add_node(&mut self, label: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.nodes.push(MemoryNode { id, label: label.to_string() });
        id
    }

    /// Register a relationship with no properties.
    pub fn add_relationship(&mut self, source: Uuid, target: Uuid, rel_type: &str) {
        self.relationships.push(MemoryRelationship {
            source,
            target,
            rel_type: rel_type.to_string(),
            properties: HashMap::new(),
        });
    }

    /// Register a relationship carrying one numeric property.
    pub fn add_weighted_relationship(
        &mut self,
        source: Uuid,
        target: Uuid,
        rel_type: &str,
        property: &str,
        value: f64,
    ) {
        let mut properties = HashMap::new();
        properties.insert(property.to_string(), value);
        self.relationships.push(MemoryRelationship {
            source,
            target,
            rel_type: rel_type.to_string(),
            properties,
        });
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }
}

impl GraphSource for MemoryGraphSource {
    fn nodes<'a>(
        &'a self,
        selector: &NodeSelector,
    ) -> Result<Box<dyn Iterator<Item = Uuid> + 'a>, GraphError> {
        let selector = selector.clone();
        Ok(Box::new(
            self.nodes
                .iter()
                .filter(move |n| selector.matches(&n.label))
                .map(|n| n.id),
        ))
    }

    fn relationships<'a>(
        &'a self,
        selector: &RelationshipSelector,
        weight_property: Option<&str>,
    ) -> Result<Box<dyn Iterator<Item = RelationshipRecord> + 'a>, GraphError> {
        let selector = selector.clone();
        let property = weight_property.map(str::to_string);
        Ok(Box::new(
            self.relationships
                .iter()
                .filter(move |r| selector.matches(&r.rel_type))
                .map(move |r| RelationshipRecord {
                    source: r.source,
                    target: r.target,
                    weight: property
                        .as_deref()
                        .and_then(|p| r.properties.get(p).copied()),
                }),
        ))
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
