use thiserror::Error;

/// The error type for all fallible graph operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex ID outside of `0..size` was passed to an edge or color
    /// operation.
    #[error("vertex {vertex} is out of range for graph of size {size}")]
    OutOfRange { vertex: usize, size: usize },

    /// The graph was requested with zero vertices.
    #[error("graph size must be greater than zero")]
    ZeroSize,

    /// The storage backend name is not recognized.
    #[error("unknown storage backend `{0}`, expected `matrix` or `list`")]
    UnknownBackend(String),

    /// The operation requires an acyclic graph, but the given edge closes a
    /// cycle.
    #[error("graph contains cycle through edge {from} -> {to}")]
    Cycle { from: usize, to: usize },
}

impl GraphError {
    pub(crate) fn out_of_range(vertex: usize, size: usize) -> Self {
        Self::OutOfRange { vertex, size }
    }
}
