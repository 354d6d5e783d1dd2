//! Network-specific error types.

use ohm_core::{CoreError, EdgeId, NodeId};
use thiserror::Error;

pub type NetworkResult<T> = Result<T, NetworkError>;

/// Network construction and validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// A resistor was rejected at insertion: self-loop, non-positive or NaN
    /// resistance. Open circuits (`+inf` ohms) are legal.
    #[error("invalid edge {edge:?}: {what}")]
    InvalidEdge { edge: String, what: &'static str },

    /// An operation referenced a node that doesn't exist (or is no longer live).
    #[error("unknown node {node}")]
    UnknownNode { node: NodeId },

    /// The two terminals of a network must be distinct junctions.
    #[error("start and end terminals must be distinct (both are node {node})")]
    IdenticalTerminals { node: NodeId },

    /// An edge slot references an endpoint outside the node arena.
    #[error("edge {edge} references an out-of-range endpoint")]
    InvalidEdgeRef { edge: EdgeId },
}

impl From<NetworkError> for CoreError {
    fn from(err: NetworkError) -> Self {
        match err {
            NetworkError::InvalidEdge { .. } => CoreError::InvalidArg { what: "edge" },
            NetworkError::UnknownNode { .. } => CoreError::InvalidArg { what: "node" },
            NetworkError::IdenticalTerminals { .. } => CoreError::InvalidArg { what: "terminals" },
            NetworkError::InvalidEdgeRef { .. } => CoreError::Invariant {
                what: "edge endpoints",
            },
        }
    }
}
