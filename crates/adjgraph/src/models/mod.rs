//! Graph data models.
//!
//! This module provides the two graph representations and their vertex types:
//! - [`ListGraph`]: Adjacency-list directed multigraph
//! - [`MatrixGraph`]: Dense adjacency matrix
//! - [`NodeId`], [`Distance`]: Graph node types

pub mod list;
pub mod matrix;
pub mod node;

pub use list::ListGraph;
pub use matrix::MatrixGraph;
pub use node::{Distance, NodeId};
