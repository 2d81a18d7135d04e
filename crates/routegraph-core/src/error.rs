//! Error types for routegraph-core.

use thiserror::Error;

use crate::edge::VertexId;

/// Graph error types.
///
/// Path-finding failure is not an error: a search that finds nothing
/// returns an empty path instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An edge endpoint does not refer to an existing vertex.
    #[error("Unable to add edge: vertex {from} or {to} not found.")]
    InvalidEndpoint {
        /// Source endpoint of the rejected edge.
        from: VertexId,
        /// Target endpoint of the rejected edge.
        to: VertexId,
    },
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;
