//! # minos-graph
//!
//! Dense graph snapshot layer of the Minos analytics engine.
//!
//! The host application owns graph storage; this crate turns a read-only
//! view of it into a compact, immutable, array-backed graph that the
//! algorithm layer can traverse lock-free:
//! - [`source::GraphSource`]  — the external collaborator contract
//! - [`loader::GraphLoader`]  — two-pass streaming construction
//! - [`graph::DenseGraph`]    — dense-id adjacency with external↔internal mapping

pub mod error;
pub mod graph;
pub mod loader;
pub mod source;

pub use error::GraphError;
pub use graph::{DenseGraph, Target};
pub use loader::{GraphLoader, MAX_NODE_COUNT};
pub use source::{
    GraphSource, MemoryGraphSource, NodeSelector, RelationshipRecord, RelationshipSelector,
};
