use crate::graph::VertexId;

/// Errors returned by graph operations.
///
/// Every error is recoverable: an operation that fails leaves the graph
/// exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A vertex index that does not name a vertex in the graph.
    #[error("invalid vertex id {id} (graph has {count} vertices)")]
    InvalidVertex { id: VertexId, count: usize },
    /// A label that does not name any vertex in the graph.
    #[error("no vertex labelled {0:?}")]
    UnknownLabel(String),
    /// The graph already holds its configured maximum number of vertices.
    #[error("vertex capacity of {0} reached")]
    CapacityExceeded(usize),
    /// The graph requires unique labels and the label is already taken.
    #[error("a vertex labelled {0:?} already exists")]
    DuplicateLabel(String),
    /// Both endpoints of an edge are the same vertex.
    #[error("edge endpoints must differ (got {0} twice)")]
    SelfLoop(VertexId),
    /// No sequence of edges connects the two vertices.
    #[error("no path from vertex {from} to vertex {to}")]
    NoPath { from: VertexId, to: VertexId },
}

pub type Result<T> = std::result::Result<T, GraphError>;
