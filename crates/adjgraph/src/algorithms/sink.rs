//! Universal sink detection.
//!
//! A universal sink is a vertex with out-degree 0 and an incoming edge from
//! every other vertex. At most one can exist: any other vertex has an edge
//! into the sink and so is not a sink itself.

use tracing::trace;

use crate::models::{MatrixGraph, NodeId};

/// Find the universal sink of a matrix graph in O(V).
///
/// Walks two cursors over the matrix. A non-zero cell `(i, j)` rules out
/// `i` (it has an outgoing edge), a zero cell rules out `j` (it misses an
/// incoming edge, or `j == i`). The surviving row is the only candidate and
/// is then verified by scanning its row and column.
///
/// # Example
///
/// ```
/// use adjgraph::{MatrixGraph, NodeId};
///
/// // Every vertex points at 2, and 2 points nowhere.
/// let graph = MatrixGraph::from_edges(3, &[(0, 2), (1, 2), (0, 1)]);
/// assert_eq!(graph.find_universal_sink(), Some(NodeId(2)));
/// ```
pub fn find_universal_sink(graph: &MatrixGraph) -> Option<NodeId> {
    let n = graph.num_vertices();
    let (mut i, mut j) = (0, 0);

    while i < n && j < n {
        if graph.cell(i, j) != 0 {
            i += 1;
        } else {
            j += 1;
        }
    }

    if i >= n {
        trace!("No universal sink candidate (n={})", n);
        return None;
    }

    let candidate = NodeId::from(i);
    if graph.out_degree(candidate) != 0 {
        trace!("Sink candidate {} has outgoing edges", candidate);
        return None;
    }
    if (0..n).any(|row| row != i && graph.cell(row, i) == 0) {
        trace!("Sink candidate {} misses an incoming edge", candidate);
        return None;
    }

    Some(candidate)
}
