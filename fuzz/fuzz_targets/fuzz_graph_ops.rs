//! Fuzz target for graph operations on both representations.
//!
//! Replays a random sequence of edge mutations (in-range and out-of-range)
//! against a list graph and a matrix graph of the same size, then checks
//! the derived graphs against each other and against their definitions.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use adjgraph::testing::{
    check_bfs_order, check_simple_undirected, check_square_list, edge_multiset,
};
use adjgraph::{ListGraph, MatrixGraph, NodeId};

/// Operations that can be performed on the graphs.
#[derive(Debug, Arbitrary)]
enum GraphOp {
    /// Add an edge to both graphs. Indices may be out of range.
    Add { src: u8, dst: u8 },
    /// Set a matrix cell only; zero removes the edge.
    Set { src: u8, dst: u8, value: i8 },
    /// Run BFS from a start vertex.
    Bfs { start: u8 },
}

/// Fuzz input: graph size and operation sequence.
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    /// Number of vertices (kept small so O(V^3) square stays cheap).
    num_vertices: u8,
    /// Operations to perform.
    ops: Vec<GraphOp>,
}

fuzz_target!(|input: FuzzInput| {
    // Limit operations
    if input.ops.len() > 500 {
        return;
    }

    let n = (input.num_vertices % 24) as usize;
    let mut list = ListGraph::new(n);
    let mut matrix = MatrixGraph::new(n);

    for op in &input.ops {
        match *op {
            GraphOp::Add { src, dst } => {
                let (src, dst) = (NodeId(src as u32), NodeId(dst as u32));
                let in_range = list.contains(src) && list.contains(dst);
                let before = list.edge_count();

                list.add_edge(src, dst);
                matrix.add_edge(src, dst);

                // Out-of-range requests must leave the graph untouched.
                let expected = if in_range { before + 1 } else { before };
                assert_eq!(list.edge_count(), expected);
                assert_eq!(list.try_add_edge(src, dst).is_ok(), in_range);
            }
            GraphOp::Set { src, dst, value } => {
                matrix.set_edge(NodeId(src as u32), NodeId(dst as u32), value as i32);
            }
            GraphOp::Bfs { start } => {
                let start = NodeId(start as u32);
                let order = list.bfs(start);
                assert!(check_bfs_order(&list, start, &order).is_ok());
                let order = matrix.bfs(start);
                assert!(check_bfs_order(&matrix, start, &order).is_ok());
            }
        }
    }

    // Transpose involution
    let twice = list.transpose().transpose();
    assert_eq!(edge_multiset(twice.edges()), edge_multiset(list.edges()));
    assert_eq!(matrix.transpose().transpose(), matrix);

    // Square against its definition, and list/matrix agreement
    let squared = list.square();
    assert!(check_square_list(&list, &squared).is_ok());
    assert_eq!(
        MatrixGraph::from(&squared),
        MatrixGraph::from(&list).square()
    );

    // Simplification is simple, symmetric and idempotent
    let simple = list.to_simple_undirected();
    assert!(check_simple_undirected(&simple).is_ok());
    let again = simple.to_simple_undirected();
    assert_eq!(edge_multiset(again.edges()), edge_multiset(simple.edges()));

    // A reported sink satisfies the definition
    if let Some(sink) = matrix.find_universal_sink() {
        assert_eq!(matrix.out_degree(sink), 0);
        assert_eq!(matrix.in_degree(sink), n - 1);
    }
});
