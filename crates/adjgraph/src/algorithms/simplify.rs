//! Multigraph to simple undirected graph reduction.

use std::collections::BTreeSet;

use tracing::debug;

use crate::models::{ListGraph, NodeId};

/// Reduce a directed multigraph to a simple undirected graph.
///
/// Loops are removed and every remaining edge `(u, v)` contributes the
/// unordered pair `{u, v}` once, however many parallel or reverse edges
/// produce it. Each pair is stored in both directions. The order of
/// destinations within a vertex's sequence is unspecified.
///
/// Runs in O(V + E log E).
///
/// # Example
///
/// ```
/// use adjgraph::{ListGraph, NodeId};
///
/// let multi = ListGraph::from_edges(3, &[(0, 1), (1, 0), (0, 1), (2, 2)]);
/// let simple = multi.to_simple_undirected();
/// assert_eq!(simple.neighbors(NodeId(0)), &[NodeId(1)]);
/// assert_eq!(simple.neighbors(NodeId(1)), &[NodeId(0)]);
/// assert!(simple.neighbors(NodeId(2)).is_empty());
/// ```
pub fn to_simple_undirected(graph: &ListGraph) -> ListGraph {
    let pairs: BTreeSet<(NodeId, NodeId)> = graph
        .edges()
        .filter(|&(src, dst)| src != dst && graph.contains(dst))
        .map(|(src, dst)| (src.min(dst), src.max(dst)))
        .collect();

    let mut simple = ListGraph::new(graph.num_vertices());
    for &(a, b) in &pairs {
        simple.add_edge(a, b);
        simple.add_edge(b, a);
    }

    debug!(
        "Simplified list graph (num_vertices={}, edges {} -> {} pairs)",
        graph.num_vertices(),
        graph.edge_count(),
        pairs.len()
    );
    simple
}
