//! Breadth-first search over any graph representation.
//!
//! The algorithms here are written once against the [`Adjacency`] trait, so
//! list and matrix graphs share one implementation and differ only in the
//! order their successors are produced:
//! - [`ListGraph`]: adjacency order (insertion order)
//! - [`MatrixGraph`]: increasing column index
//!
//! Three views of the same traversal are exposed: visitation order, layer
//! distances, and a parent tree for path reconstruction.

use std::collections::VecDeque;

use tracing::trace;

use crate::models::{Distance, ListGraph, MatrixGraph, NodeId};
use crate::{GraphError, Result};

/// Read-only successor access shared by both graph representations.
pub trait Adjacency {
    /// Number of vertices.
    fn num_vertices(&self) -> usize;

    /// Destinations of edges leaving `node`, in the representation's
    /// natural order. Empty for out-of-range nodes.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_;

    /// Check if `node` is a vertex of this graph.
    fn contains(&self, node: NodeId) -> bool {
        node.index() < self.num_vertices()
    }
}

impl Adjacency for ListGraph {
    fn num_vertices(&self) -> usize {
        ListGraph::num_vertices(self)
    }

    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.neighbors(node).iter().copied()
    }
}

impl Adjacency for MatrixGraph {
    fn num_vertices(&self) -> usize {
        MatrixGraph::num_vertices(self)
    }

    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.row(node)
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != 0)
            .map(|(col, _)| NodeId::from(col))
    }
}

/// BFS configuration.
#[derive(Debug, Clone)]
pub struct BfsConfig {
    /// Maximum distance to explore.
    pub max_distance: u32,
}

impl Default for BfsConfig {
    fn default() -> Self {
        Self {
            max_distance: u32::MAX - 1,
        }
    }
}

impl BfsConfig {
    /// Create new BFS configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum distance.
    pub fn with_max_distance(mut self, max: u32) -> Self {
        self.max_distance = max;
        self
    }
}

/// Full record of one breadth-first search.
struct Search {
    order: Vec<NodeId>,
    distances: Vec<Distance>,
    parents: Vec<NodeId>,
}

/// Queue-based BFS from pre-validated sources.
///
/// Sources are their own parents. Out-of-range successors are skipped.
fn search<G: Adjacency>(graph: &G, sources: &[NodeId], config: &BfsConfig) -> Search {
    let n = graph.num_vertices();
    let mut distances = vec![Distance::INFINITY; n];
    let mut parents = vec![NodeId::INVALID; n];
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    for &src in sources {
        if distances[src.index()] == Distance::INFINITY {
            distances[src.index()] = Distance::ZERO;
            parents[src.index()] = src;
            queue.push_back(src);
        }
    }

    while let Some(node) = queue.pop_front() {
        order.push(node);
        let current_dist = distances[node.index()];

        if current_dist.0 >= config.max_distance {
            continue;
        }

        for neighbor in graph.successors(node) {
            if !graph.contains(neighbor) {
                continue;
            }
            if distances[neighbor.index()] == Distance::INFINITY {
                distances[neighbor.index()] = current_dist.increment();
                parents[neighbor.index()] = node;
                queue.push_back(neighbor);
            }
        }
    }

    Search {
        order,
        distances,
        parents,
    }
}

fn check_sources<G: Adjacency>(graph: &G, sources: &[NodeId]) -> Result<()> {
    let num_vertices = graph.num_vertices();
    if num_vertices == 0 {
        return Err(GraphError::EmptyGraph);
    }
    match sources.iter().find(|&&src| !graph.contains(src)) {
        Some(src) => Err(GraphError::InvalidNodeId {
            node: src.get(),
            num_vertices,
        }),
        None => Ok(()),
    }
}

/// Visitation order of a breadth-first search from `start`.
///
/// Each reachable vertex appears exactly once, at its first discovery.
/// Returns an empty order if `start` is out of range.
///
/// # Example
///
/// ```
/// use adjgraph::{bfs_order, ListGraph, NodeId};
///
/// let graph = ListGraph::from_edges(4, &[(0, 2), (0, 1), (1, 3)]);
/// assert_eq!(
///     bfs_order(&graph, NodeId(0)),
///     vec![NodeId(0), NodeId(2), NodeId(1), NodeId(3)]
/// );
/// assert!(bfs_order(&graph, NodeId(4)).is_empty());
/// ```
pub fn bfs_order<G: Adjacency>(graph: &G, start: NodeId) -> Vec<NodeId> {
    bfs_order_with_config(graph, start, &BfsConfig::default())
}

/// Visitation order with configuration.
pub fn bfs_order_with_config<G: Adjacency>(
    graph: &G,
    start: NodeId,
    config: &BfsConfig,
) -> Vec<NodeId> {
    if !graph.contains(start) {
        trace!(
            "BFS start {} out of range (num_vertices={})",
            start,
            graph.num_vertices()
        );
        return Vec::new();
    }
    search(graph, &[start], config).order
}

/// Visitation order, reporting an empty graph or an invalid start.
pub fn try_bfs_order<G: Adjacency>(
    graph: &G,
    start: NodeId,
    config: &BfsConfig,
) -> Result<Vec<NodeId>> {
    check_sources(graph, &[start])?;
    Ok(search(graph, &[start], config).order)
}

/// Layer distances from one or more sources.
///
/// Uses a queue-based approach with O(V + E) complexity on lists and
/// O(V^2) on matrices.
///
/// # Returns
///
/// Vector of distances, one per node. Distance::INFINITY for unreachable nodes.
pub fn bfs_distances<G: Adjacency>(graph: &G, sources: &[NodeId]) -> Result<Vec<Distance>> {
    bfs_distances_with_config(graph, sources, &BfsConfig::default())
}

/// Layer distances with configuration.
pub fn bfs_distances_with_config<G: Adjacency>(
    graph: &G,
    sources: &[NodeId],
    config: &BfsConfig,
) -> Result<Vec<Distance>> {
    check_sources(graph, sources)?;
    Ok(search(graph, sources, config).distances)
}

/// Multi-source BFS returning parent pointers for path reconstruction.
pub fn bfs_with_parents<G: Adjacency>(
    graph: &G,
    sources: &[NodeId],
) -> Result<(Vec<Distance>, Vec<NodeId>)> {
    check_sources(graph, sources)?;
    let Search {
        distances, parents, ..
    } = search(graph, sources, &BfsConfig::default());
    Ok((distances, parents))
}

/// Reconstruct path from source to target using parent pointers.
pub fn reconstruct_path(parents: &[NodeId], target: NodeId) -> Option<Vec<NodeId>> {
    let target_idx = target.index();
    if target_idx >= parents.len() || !parents[target_idx].is_valid() {
        return None;
    }

    let mut path = vec![target];
    let mut current = target;

    // Walk back to source
    while parents[current.index()] != current {
        current = parents[current.index()];
        if !current.is_valid() {
            return None;
        }
        path.push(current);
    }

    path.reverse();
    Some(path)
}

/// Fewest-edge path from `src` to `dst`, or `None` if `dst` is unreachable.
pub fn shortest_path<G: Adjacency>(
    graph: &G,
    src: NodeId,
    dst: NodeId,
) -> Result<Option<Vec<NodeId>>> {
    check_sources(graph, &[src, dst])?;
    let (_, parents) = bfs_with_parents(graph, &[src])?;
    Ok(reconstruct_path(&parents, dst))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_line_graph(n: usize) -> ListGraph {
        // 0 -> 1 -> 2 -> ... -> n-1
        let edges: Vec<_> = (0..n - 1).map(|i| (i as u32, i as u32 + 1)).collect();
        ListGraph::from_edges(n, &edges)
    }

    fn make_star_graph(n: usize) -> ListGraph {
        // 0 -> 1, 0 -> 2, ..., 0 -> n-1
        let edges: Vec<_> = (1..n).map(|i| (0, i as u32)).collect();
        ListGraph::from_edges(n, &edges)
    }

    fn ids(order: &[NodeId]) -> Vec<u32> {
        order.iter().map(NodeId::get).collect()
    }

    #[test]
    fn test_bfs_order_cycle() {
        let graph = ListGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert_eq!(ids(&bfs_order(&graph, NodeId(0))), vec![0, 1, 2, 3]);
        assert_eq!(ids(&bfs_order(&graph, NodeId(2))), vec![2, 3, 0, 1]);
    }

    #[test]
    fn test_bfs_order_follows_adjacency_order() {
        let list = ListGraph::from_edges(4, &[(0, 3), (0, 1), (3, 2)]);
        assert_eq!(ids(&bfs_order(&list, NodeId(0))), vec![0, 3, 1, 2]);

        // Matrix scans columns in increasing order instead.
        let matrix = MatrixGraph::from(&list);
        assert_eq!(ids(&bfs_order(&matrix, NodeId(0))), vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_bfs_order_skips_unreachable_and_duplicates() {
        let graph = ListGraph::from_edges(5, &[(0, 1), (0, 1), (1, 0), (1, 1), (3, 4)]);
        assert_eq!(ids(&bfs_order(&graph, NodeId(0))), vec![0, 1]);
    }

    #[test]
    fn test_bfs_order_out_of_range_start() {
        let graph = make_line_graph(3);
        assert!(bfs_order(&graph, NodeId(3)).is_empty());
        assert!(bfs_order(&ListGraph::new(0), NodeId(0)).is_empty());
        assert!(bfs_order(&MatrixGraph::new(2), NodeId::INVALID).is_empty());
    }

    #[test]
    fn test_try_bfs_order_errors() {
        let graph = make_line_graph(3);
        assert!(matches!(
            try_bfs_order(&graph, NodeId(7), &BfsConfig::default()),
            Err(GraphError::InvalidNodeId { node: 7, .. })
        ));
        assert!(matches!(
            try_bfs_order(&ListGraph::new(0), NodeId(0), &BfsConfig::default()),
            Err(GraphError::EmptyGraph)
        ));
    }

    #[test]
    fn test_bfs_order_max_distance() {
        let graph = make_line_graph(10);
        let config = BfsConfig::new().with_max_distance(2);
        let order = bfs_order_with_config(&graph, NodeId(0), &config);
        assert_eq!(ids(&order), vec![0, 1, 2]);
    }

    #[test]
    fn test_bfs_line_graph() {
        let adj = make_line_graph(5);
        let distances = bfs_distances(&adj, &[NodeId(0)]).unwrap();

        assert_eq!(distances[0], Distance::new(0));
        assert_eq!(distances[1], Distance::new(1));
        assert_eq!(distances[2], Distance::new(2));
        assert_eq!(distances[3], Distance::new(3));
        assert_eq!(distances[4], Distance::new(4));
    }

    #[test]
    fn test_bfs_star_graph() {
        let adj = make_star_graph(5);
        let distances = bfs_distances(&adj, &[NodeId(0)]).unwrap();

        assert_eq!(distances[0], Distance::new(0));
        for distance in &distances[1..] {
            assert_eq!(*distance, Distance::new(1));
        }
    }

    #[test]
    fn test_bfs_multi_source() {
        // Line graph: 0 -> 1 -> 2 -> 3 -> 4
        let adj = make_line_graph(5);
        let distances = bfs_distances(&adj, &[NodeId(0), NodeId(3)]).unwrap();

        assert_eq!(distances[0], Distance::new(0));
        assert_eq!(distances[3], Distance::new(0));
        assert_eq!(distances[4], Distance::new(1));
        assert_eq!(distances[2], Distance::new(2));
    }

    #[test]
    fn test_bfs_unreachable() {
        // Two disconnected components: 0 -> 1, 2 -> 3
        let adj = MatrixGraph::from_edges(4, &[(0, 1), (2, 3)]);
        let distances = bfs_distances(&adj, &[NodeId(0)]).unwrap();

        assert_eq!(distances[0], Distance::new(0));
        assert_eq!(distances[1], Distance::new(1));
        assert_eq!(distances[2], Distance::INFINITY);
        assert_eq!(distances[3], Distance::INFINITY);
    }

    #[test]
    fn test_bfs_max_distance() {
        let adj = make_line_graph(10);
        let config = BfsConfig::new().with_max_distance(3);
        let distances = bfs_distances_with_config(&adj, &[NodeId(0)], &config).unwrap();

        assert_eq!(distances[3], Distance::new(3));
        // Beyond max_distance
        assert_eq!(distances[4], Distance::INFINITY);
    }

    #[test]
    fn test_bfs_with_parents() {
        let adj = make_line_graph(5);
        let (distances, parents) = bfs_with_parents(&adj, &[NodeId(0)]).unwrap();

        assert_eq!(distances[4], Distance::new(4));

        let path = reconstruct_path(&parents, NodeId(4)).unwrap();
        assert_eq!(
            path,
            vec![NodeId(0), NodeId(1), NodeId(2), NodeId(3), NodeId(4)]
        );
    }

    #[test]
    fn test_reconstruct_path_unreached() {
        let adj = ListGraph::from_edges(3, &[(0, 1)]);
        let (_, parents) = bfs_with_parents(&adj, &[NodeId(0)]).unwrap();
        assert_eq!(reconstruct_path(&parents, NodeId(2)), None);
        assert_eq!(reconstruct_path(&parents, NodeId(9)), None);
    }

    #[test]
    fn test_shortest_path_prefers_fewest_edges() {
        // 0 -> 1 -> 2 -> 3 and a shortcut 0 -> 2
        let adj = ListGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (0, 2)]);
        let path = shortest_path(&adj, NodeId(0), NodeId(3)).unwrap().unwrap();
        assert_eq!(path, vec![NodeId(0), NodeId(2), NodeId(3)]);

        assert_eq!(shortest_path(&adj, NodeId(3), NodeId(0)).unwrap(), None);
        assert_eq!(
            shortest_path(&adj, NodeId(1), NodeId(1)).unwrap(),
            Some(vec![NodeId(1)])
        );
    }

    #[test]
    fn test_invalid_source_error() {
        let adj = make_line_graph(3);
        let result = bfs_distances(&adj, &[NodeId(100)]);
        assert!(matches!(result, Err(GraphError::InvalidNodeId { .. })));

        let result = shortest_path(&adj, NodeId(0), NodeId(100));
        assert!(matches!(result, Err(GraphError::InvalidNodeId { .. })));
    }

    #[test]
    fn test_empty_graph_error() {
        let result = bfs_distances(&MatrixGraph::new(0), &[NodeId(0)]);
        assert!(matches!(result, Err(GraphError::EmptyGraph)));
    }
}
