//! Directed graph algorithms over two interchangeable representations.
//!
//! This crate provides small, self-contained graph algorithms on:
//!
//! - **ListGraph**: per-vertex adjacency sequences (parallel edges and loops allowed)
//! - **MatrixGraph**: dense n x n adjacency matrix of integers
//!
//! Both representations support transpose, square (two-hop reachability)
//! and breadth-first traversal. `ListGraph` can additionally be reduced to a
//! simple undirected graph, and `MatrixGraph` can locate a universal sink.
//!
//! Operations that take a vertex index are permissive: out-of-range edges
//! are dropped and an out-of-range BFS start yields an empty order. Every
//! such entry point has a `try_*` counterpart that reports
//! [`GraphError::InvalidNodeId`] instead.
//!
//! # Example
//!
//! ```
//! use adjgraph::{ListGraph, MatrixGraph, NodeId};
//!
//! // 4-cycle: 0 -> 1 -> 2 -> 3 -> 0
//! let cycle = ListGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
//! assert_eq!(
//!     cycle.bfs(NodeId(0)),
//!     vec![NodeId(0), NodeId(1), NodeId(2), NodeId(3)]
//! );
//! assert_eq!(cycle.square().neighbors(NodeId(0)), &[NodeId(1), NodeId(2)]);
//!
//! let matrix = MatrixGraph::from(&cycle);
//! assert_eq!(matrix.find_universal_sink(), None);
//! ```

pub mod algorithms;
pub mod models;
pub mod testing;

// Re-export main types
pub use algorithms::simplify::to_simple_undirected;
pub use algorithms::sink::find_universal_sink;
pub use algorithms::square::{square_list, square_matrix, SquareConfig};
pub use algorithms::traversal::{
    bfs_distances, bfs_order, bfs_with_parents, reconstruct_path, shortest_path, Adjacency,
    BfsConfig,
};
pub use models::list::ListGraph;
pub use models::matrix::MatrixGraph;
pub use models::node::{Distance, NodeId};

/// Graph error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Vertex index outside `[0, num_vertices)`.
    #[error("Invalid node ID: {node} (graph has {num_vertices} vertices)")]
    InvalidNodeId {
        /// Offending vertex index.
        node: u32,
        /// Vertex count of the graph it was checked against.
        num_vertices: usize,
    },

    /// Matrix rows do not form a square grid.
    #[error("Matrix dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Operation needs at least one vertex.
    #[error("Empty graph")]
    EmptyGraph,
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
