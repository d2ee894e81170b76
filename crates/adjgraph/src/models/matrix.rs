//! Dense adjacency-matrix graph representation.
//!
//! Cells are stored row-major in a single `Vec<i32>`:
//! - `cells[i * n + j]` = value of the edge from `i` to `j`
//! - zero means "no edge", any other value means "edge present"
//!
//! Edge values are not interpreted beyond zero/non-zero.

use std::fmt;

use tracing::{debug, trace};

use super::list::ListGraph;
use super::node::NodeId;
use crate::algorithms::sink;
use crate::algorithms::square::{self, SquareConfig};
use crate::algorithms::traversal::{self, BfsConfig};
use crate::{GraphError, Result};

/// Directed graph stored as an n x n integer matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatrixGraph {
    n: usize,
    cells: Vec<i32>,
}

impl MatrixGraph {
    /// Create an `n` x `n` graph with no edges.
    pub fn new(n: usize) -> Self {
        debug!("Creating matrix graph (n={})", n);
        Self {
            n,
            cells: vec![0; n * n],
        }
    }

    /// Create a graph from an edge list, setting each listed cell to 1.
    ///
    /// Out-of-range pairs are dropped.
    pub fn from_edges(n: usize, edges: &[(u32, u32)]) -> Self {
        let mut graph = Self::new(n);
        for &(src, dst) in edges {
            graph.add_edge(NodeId(src), NodeId(dst));
        }
        graph
    }

    /// Create a graph from explicit rows.
    ///
    /// Fails with [`GraphError::DimensionMismatch`] unless every row has
    /// exactly `rows.len()` entries.
    ///
    /// # Example
    ///
    /// ```
    /// use adjgraph::{MatrixGraph, NodeId};
    ///
    /// let graph = MatrixGraph::from_rows(vec![vec![0, 1], vec![0, 0]]).unwrap();
    /// assert!(graph.has_edge(NodeId(0), NodeId(1)));
    ///
    /// assert!(MatrixGraph::from_rows(vec![vec![0, 1, 0], vec![0, 0, 0]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self> {
        let n = rows.len();
        if let Some(row) = rows.iter().find(|row| row.len() != n) {
            return Err(GraphError::DimensionMismatch {
                expected: n,
                actual: row.len(),
            });
        }

        Ok(Self {
            n,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.n
    }

    /// Check if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Check if `node` is a vertex of this graph.
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.n
    }

    /// Number of non-zero cells.
    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|&&value| value != 0).count()
    }

    /// Row of `node`, indexed by destination.
    ///
    /// Empty for out-of-range nodes.
    pub fn row(&self, node: NodeId) -> &[i32] {
        if !self.contains(node) {
            return &[];
        }
        let start = node.index() * self.n;
        &self.cells[start..start + self.n]
    }

    /// Iterate over all rows in vertex order.
    pub fn rows(&self) -> impl Iterator<Item = &[i32]> + '_ {
        // chunks(0) panics; an empty grid has no cells to chunk anyway.
        self.cells.chunks(self.n.max(1))
    }

    /// Copy the grid out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.rows().map(<[i32]>::to_vec).collect()
    }

    /// Value stored for the edge from src to dst, if both are in range.
    pub fn value(&self, src: NodeId, dst: NodeId) -> Option<i32> {
        if self.contains(src) && self.contains(dst) {
            Some(self.cell(src.index(), dst.index()))
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn cell(&self, row: usize, col: usize) -> i32 {
        self.cells[row * self.n + col]
    }

    /// Check if edge exists from src to dst.
    pub fn has_edge(&self, src: NodeId, dst: NodeId) -> bool {
        self.value(src, dst).is_some_and(|value| value != 0)
    }

    /// Get the out-degree of a node.
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.row(node).iter().filter(|&&value| value != 0).count()
    }

    /// Get the in-degree of a node.
    pub fn in_degree(&self, node: NodeId) -> usize {
        if !self.contains(node) {
            return 0;
        }
        (0..self.n)
            .filter(|&row| self.cell(row, node.index()) != 0)
            .count()
    }

    /// Iterate over all present edges in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.rows().enumerate().flat_map(|(src, row)| {
            let src = NodeId::from(src);
            row.iter()
                .enumerate()
                .filter(|&(_, &value)| value != 0)
                .map(move |(dst, _)| (src, NodeId::from(dst)))
        })
    }

    /// Set the value of the edge from `src` to `dst`.
    ///
    /// A value of 0 removes the edge. Silently ignored if either endpoint
    /// is out of range.
    pub fn set_edge(&mut self, src: NodeId, dst: NodeId, value: i32) {
        if let Err(err) = self.try_set_edge(src, dst, value) {
            trace!("Ignoring cell {} -> {} = {}: {}", src, dst, value, err);
        }
    }

    /// Set an edge value, reporting out-of-range endpoints.
    pub fn try_set_edge(&mut self, src: NodeId, dst: NodeId, value: i32) -> Result<()> {
        self.check_node(src)?;
        self.check_node(dst)?;
        self.cells[src.index() * self.n + dst.index()] = value;
        Ok(())
    }

    /// Add an edge with value 1. Same bounds policy as [`MatrixGraph::set_edge`].
    pub fn add_edge(&mut self, src: NodeId, dst: NodeId) {
        self.set_edge(src, dst, 1);
    }

    /// Add an edge with value 1, reporting out-of-range endpoints.
    pub fn try_add_edge(&mut self, src: NodeId, dst: NodeId) -> Result<()> {
        self.try_set_edge(src, dst, 1)
    }

    pub(crate) fn check_node(&self, node: NodeId) -> Result<()> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(GraphError::InvalidNodeId {
                node: node.get(),
                num_vertices: self.n,
            })
        }
    }

    /// Create transpose (reverse graph).
    ///
    /// `result[j][i] = self[i][j]` for every cell, values included.
    /// Runs in O(V^2).
    pub fn transpose(&self) -> Self {
        let mut transposed = Self::new(self.n);
        for i in 0..self.n {
            for j in 0..self.n {
                transposed.cells[j * self.n + i] = self.cell(i, j);
            }
        }
        transposed
    }

    /// Square graph with self-loops excluded.
    ///
    /// See [`square::square_matrix`].
    pub fn square(&self) -> Self {
        square::square_matrix(self, &SquareConfig::default())
    }

    /// Square graph with configuration.
    pub fn square_with_config(&self, config: &SquareConfig) -> Self {
        square::square_matrix(self, config)
    }

    /// Breadth-first visitation order from `start`, scanning columns in
    /// increasing order.
    ///
    /// Empty if `start` is out of range.
    pub fn bfs(&self, start: NodeId) -> Vec<NodeId> {
        traversal::bfs_order(self, start)
    }

    /// Breadth-first visitation order, reporting an invalid start.
    pub fn try_bfs(&self, start: NodeId) -> Result<Vec<NodeId>> {
        traversal::try_bfs_order(self, start, &BfsConfig::default())
    }

    /// Locate the universal sink, if any.
    ///
    /// See [`sink::find_universal_sink`].
    pub fn find_universal_sink(&self) -> Option<NodeId> {
        sink::find_universal_sink(self)
    }
}

impl From<&ListGraph> for MatrixGraph {
    /// Parallel edges collapse into a single cell of value 1.
    fn from(list: &ListGraph) -> Self {
        let mut matrix = MatrixGraph::new(list.num_vertices());
        for (src, dst) in list.edges() {
            matrix.add_edge(src, dst);
        }
        matrix
    }
}

impl From<&MatrixGraph> for ListGraph {
    /// One edge per non-zero cell, destinations in increasing order.
    fn from(matrix: &MatrixGraph) -> Self {
        let mut list = ListGraph::new(matrix.num_vertices());
        for (src, dst) in matrix.edges() {
            list.add_edge(src, dst);
        }
        list
    }
}

impl fmt::Display for MatrixGraph {
    /// One line per row, cells separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let mut cells = row.iter();
            if let Some(first) = cells.next() {
                write!(f, "{}", first)?;
            }
            for value in cells {
                write!(f, " {}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
