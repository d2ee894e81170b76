//! Graph algorithms.
//!
//! This module provides the algorithms shared by both representations:
//! - [`traversal`]: Breadth-first search (order, distances, paths)
//! - [`square`]: Square graph (two-hop reachability)
//! - [`sink`]: Universal sink detection
//! - [`simplify`]: Simple undirected reduction

pub mod simplify;
pub mod sink;
pub mod square;
pub mod traversal;

pub use simplify::to_simple_undirected;
pub use sink::find_universal_sink;
pub use square::{square_list, square_matrix, SquareConfig};
pub use traversal::{
    bfs_distances, bfs_distances_with_config, bfs_order, bfs_order_with_config, bfs_with_parents,
    reconstruct_path, shortest_path, try_bfs_order, Adjacency, BfsConfig,
};
