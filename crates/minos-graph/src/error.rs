use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid selector: {0}")]
    InvalidSelector(String),

    #[error("duplicate node {0} in source enumeration")]
    DuplicateNode(Uuid),

    #[error("relationship endpoint {0} is outside the node selection")]
    DanglingEndpoint(Uuid),

    #[error("node count {count} exceeds the addressable id space (max {max})")]
    IdSpaceExhausted { count: u64, max: u64 },

    #[error("source node {node} out of range for graph of {node_count} nodes")]
    SourceOutOfRange { node: usize, node_count: usize },

    #[error("node {0} not present in the loaded graph")]
    UnknownNode(Uuid),

    #[error("source error: {0}")]
    Source(String),
}
