//! Adjacency-list graph representation.
//!
//! Each vertex owns an ordered sequence of destination vertices. The
//! sequence order is insertion order and drives the traversal order of
//! every algorithm run on the graph.
//!
//! Memory layout:
//! - `adjacency[u]` = destinations of all edges leaving `u`, duplicates allowed
//! - `adjacency.len()` = number of vertices, fixed at construction

use std::fmt;

use tracing::{debug, trace};

use super::node::NodeId;
use crate::algorithms::simplify;
use crate::algorithms::square::{self, SquareConfig};
use crate::algorithms::traversal::{self, BfsConfig};
use crate::{GraphError, Result};

/// Directed multigraph stored as per-vertex adjacency sequences.
///
/// Parallel edges and self-loops are kept as inserted. Derived graphs
/// (transpose, square, simple form) are returned as new values and never
/// share storage with `self`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListGraph {
    adjacency: Vec<Vec<NodeId>>,
}

impl ListGraph {
    /// Create a graph with `num_vertices` vertices and no edges.
    pub fn new(num_vertices: usize) -> Self {
        debug!("Creating list graph (num_vertices={})", num_vertices);
        Self {
            adjacency: vec![Vec::new(); num_vertices],
        }
    }

    /// Create a graph from an edge list.
    ///
    /// Out-of-range pairs are dropped, as with [`ListGraph::add_edge`].
    ///
    /// # Example
    ///
    /// ```
    /// use adjgraph::ListGraph;
    ///
    /// // Graph: 0 -> 1 -> 2, plus a dropped edge to vertex 9
    /// let graph = ListGraph::from_edges(3, &[(0, 1), (1, 2), (2, 9)]);
    /// assert_eq!(graph.edge_count(), 2);
    /// ```
    pub fn from_edges(num_vertices: usize, edges: &[(u32, u32)]) -> Self {
        let mut graph = Self::new(num_vertices);
        for &(src, dst) in edges {
            graph.add_edge(NodeId(src), NodeId(dst));
        }
        graph
    }

    /// Create a graph from raw adjacency sequences.
    ///
    /// The vertex count is `adjacency.len()`. Fails with
    /// [`GraphError::InvalidNodeId`] if any destination is out of range.
    pub fn from_adjacency(adjacency: Vec<Vec<u32>>) -> Result<Self> {
        let num_vertices = adjacency.len();
        if let Some(&node) = adjacency
            .iter()
            .flatten()
            .find(|&&dst| dst as usize >= num_vertices)
        {
            return Err(GraphError::InvalidNodeId { node, num_vertices });
        }

        Ok(Self {
            adjacency: adjacency
                .into_iter()
                .map(|row| row.into_iter().map(NodeId).collect())
                .collect(),
        })
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Check if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of edges, counting parallel edges and loops individually.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Check if `node` is a vertex of this graph.
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.adjacency.len()
    }

    /// Per-vertex adjacency sequences.
    pub fn adjacency(&self) -> &[Vec<NodeId>] {
        &self.adjacency
    }

    /// Destinations of edges leaving `node`, in insertion order.
    ///
    /// Empty for out-of-range nodes.
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        match self.adjacency.get(node.index()) {
            Some(row) => row.as_slice(),
            None => &[],
        }
    }

    /// Get the out-degree of a node, counting parallel edges.
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.neighbors(node).len()
    }

    /// Check if at least one edge exists from src to dst.
    pub fn has_edge(&self, src: NodeId, dst: NodeId) -> bool {
        self.neighbors(src).contains(&dst)
    }

    /// Iterate over all edges as `(src, dst)` pairs, grouped by source.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(src, row)| {
            let src = NodeId::from(src);
            row.iter().map(move |&dst| (src, dst))
        })
    }

    /// Add a directed edge from `src` to `dst`.
    ///
    /// Silently ignored if either endpoint is out of range. Parallel edges
    /// and self-loops are appended as-is.
    pub fn add_edge(&mut self, src: NodeId, dst: NodeId) {
        if let Err(err) = self.try_add_edge(src, dst) {
            trace!("Ignoring edge {} -> {}: {}", src, dst, err);
        }
    }

    /// Add a directed edge, reporting out-of-range endpoints.
    pub fn try_add_edge(&mut self, src: NodeId, dst: NodeId) -> Result<()> {
        self.check_node(src)?;
        self.check_node(dst)?;
        self.adjacency[src.index()].push(dst);
        Ok(())
    }

    pub(crate) fn check_node(&self, node: NodeId) -> Result<()> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(GraphError::InvalidNodeId {
                node: node.get(),
                num_vertices: self.num_vertices(),
            })
        }
    }

    /// Create transpose (reverse graph).
    ///
    /// Every edge `(u, v)` becomes `(v, u)`; multiplicities are preserved.
    /// Runs in O(V + E).
    pub fn transpose(&self) -> Self {
        let mut transposed = Self::new(self.num_vertices());
        for (src, dst) in self.edges() {
            transposed.adjacency[dst.index()].push(src);
        }
        transposed
    }

    /// Square graph with self-loops excluded.
    ///
    /// See [`square::square_list`].
    pub fn square(&self) -> Self {
        square::square_list(self, &SquareConfig::default())
    }

    /// Square graph with configuration.
    pub fn square_with_config(&self, config: &SquareConfig) -> Self {
        square::square_list(self, config)
    }

    /// Breadth-first visitation order from `start`.
    ///
    /// Empty if `start` is out of range.
    pub fn bfs(&self, start: NodeId) -> Vec<NodeId> {
        traversal::bfs_order(self, start)
    }

    /// Breadth-first visitation order, reporting an invalid start.
    pub fn try_bfs(&self, start: NodeId) -> Result<Vec<NodeId>> {
        traversal::try_bfs_order(self, start, &BfsConfig::default())
    }

    /// Reduce this multigraph to a simple undirected graph.
    ///
    /// See [`simplify::to_simple_undirected`].
    pub fn to_simple_undirected(&self) -> Self {
        simplify::to_simple_undirected(self)
    }
}

impl fmt::Display for ListGraph {
    /// One line per vertex: `u: v1 v2 ...`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (src, row) in self.adjacency.iter().enumerate() {
            write!(f, "{}:", src)?;
            for dst in row {
                write!(f, " {}", dst)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
