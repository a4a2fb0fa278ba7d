use thiserror::Error;

use crate::graph::Node;

/// Errors returned by the mutating and partition operations of the graphs in
/// this crate. A call that returns an error has not modified the graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A node or edge was added after the graph was locked.
    #[error("graph is locked, cannot {operation}")]
    LockedGraph { operation: &'static str },

    /// The two-colouring found two adjacent nodes of the same colour, which
    /// means the graph contains an odd cycle.
    #[error("graph is not bipartite: nodes {} and {} are adjacent and share a colour", .conflict.0, .conflict.1)]
    NotBipartite { conflict: (Node, Node) },

    /// The partition was queried before a successful lock.
    #[error("graph is not locked")]
    NotLocked,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
