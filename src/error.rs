//! Error types for graph construction and spanning-tree computation.
//!
//! Defines error enums exposed by the public API and a convenient result
//! alias. Every error carries a stable machine-readable code for logging
//! surfaces.

use thiserror::Error;

/// Errors detected while building a [`crate::Graph`].
///
/// All input validation happens at construction time; once a graph exists it
/// is structurally sound and the algorithm never re-validates it during
/// rounds.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum GraphError {
    /// An edge referenced a vertex outside the set added so far.
    #[error("edge references vertex {vertex}, but vertex_count is {vertex_count}")]
    UnknownVertex {
        /// The invalid vertex index referenced by the edge.
        vertex: usize,
        /// The number of vertices added to the builder.
        vertex_count: usize,
    },
    /// An edge connected a vertex to itself.
    #[error("self-loop on vertex {vertex} is not allowed in a simple graph")]
    SelfLoop {
        /// The vertex carrying the rejected self-loop.
        vertex: usize,
    },
    /// A second edge was added between the same pair of vertices.
    #[error("duplicate edge between vertices {left} and {right}")]
    DuplicateEdge {
        /// The smaller endpoint of the duplicated pair.
        left: usize,
        /// The larger endpoint of the duplicated pair.
        right: usize,
    },
    /// Adjacency was not symmetric, indicating a logic error in construction.
    #[error("adjacency from vertex {left} to {right} has no mirror entry")]
    AsymmetricAdjacency {
        /// The vertex holding the one-sided adjacency entry.
        left: usize,
        /// The neighbour missing the mirror entry.
        right: usize,
    },
}

impl GraphError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> GraphErrorCode {
        match self {
            Self::UnknownVertex { .. } => GraphErrorCode::UnknownVertex,
            Self::SelfLoop { .. } => GraphErrorCode::SelfLoop,
            Self::DuplicateEdge { .. } => GraphErrorCode::DuplicateEdge,
            Self::AsymmetricAdjacency { .. } => GraphErrorCode::AsymmetricAdjacency,
        }
    }
}

/// Machine-readable error codes for [`GraphError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphErrorCode {
    /// An edge referenced a vertex outside the set added so far.
    UnknownVertex,
    /// An edge connected a vertex to itself.
    SelfLoop,
    /// A second edge was added between the same pair of vertices.
    DuplicateEdge,
    /// Adjacency was not symmetric.
    AsymmetricAdjacency,
}

impl GraphErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnknownVertex => "GRAPH_UNKNOWN_VERTEX",
            Self::SelfLoop => "GRAPH_SELF_LOOP",
            Self::DuplicateEdge => "GRAPH_DUPLICATE_EDGE",
            Self::AsymmetricAdjacency => "GRAPH_ASYMMETRIC_ADJACENCY",
        }
    }
}

/// Errors returned while configuring or running the Borůvka scheduler.
///
/// A disconnected input is not an error: the algorithm terminates with a
/// spanning forest and reports the final component count through
/// [`crate::SpanningForest::component_count`].
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum BoruvkaError {
    /// The caller requested an MST for an empty graph.
    #[error("cannot compute a spanning tree for an empty graph")]
    EmptyGraph,
    /// The configured worker count was zero.
    #[error("worker count must be at least 1 (got {got})")]
    InvalidWorkerCount {
        /// The invalid worker count supplied by the caller.
        got: usize,
    },
}

impl BoruvkaError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> BoruvkaErrorCode {
        match self {
            Self::EmptyGraph => BoruvkaErrorCode::EmptyGraph,
            Self::InvalidWorkerCount { .. } => BoruvkaErrorCode::InvalidWorkerCount,
        }
    }
}

/// Machine-readable error codes for [`BoruvkaError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BoruvkaErrorCode {
    /// The caller requested an MST for an empty graph.
    EmptyGraph,
    /// The configured worker count was zero.
    InvalidWorkerCount,
}

impl BoruvkaErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyGraph => "BORUVKA_EMPTY_GRAPH",
            Self::InvalidWorkerCount => "BORUVKA_INVALID_WORKER_COUNT",
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, BoruvkaError>;
