//! Integration tests for the adjacency-list representation.

mod common;

use std::collections::BTreeSet;

use adjgraph::testing::{check_simple_undirected, check_square_list, edge_multiset, neighbor_set};
use adjgraph::{GraphError, ListGraph, NodeId, SquareConfig};

fn cycle4() -> ListGraph {
    ListGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)])
}

fn set(ids: &[u32]) -> BTreeSet<NodeId> {
    ids.iter().copied().map(NodeId).collect()
}

/// Test the 4-cycle scenario end to end.
#[test]
fn test_four_cycle_scenario() {
    common::init_tracing();
    let graph = cycle4();

    assert_eq!(
        graph.bfs(NodeId(0)),
        vec![NodeId(0), NodeId(1), NodeId(2), NodeId(3)]
    );

    let squared = graph.square();
    assert_eq!(neighbor_set(&squared, NodeId(0)), set(&[1, 2]));
    assert!(check_square_list(&graph, &squared).is_ok());
}

/// Test that transposing twice restores the edge multiset.
#[test]
fn test_transpose_involution_multigraph() {
    common::init_tracing();
    let graph = ListGraph::from_edges(4, &[(2, 0), (0, 1), (0, 1), (3, 3), (1, 0), (2, 3)]);
    let twice = graph.transpose().transpose();

    assert_eq!(edge_multiset(twice.edges()), edge_multiset(graph.edges()));
}

/// Test that transpose reverses every edge and orders by original source.
#[test]
fn test_transpose_reverses_edges() {
    let graph = ListGraph::from_edges(3, &[(2, 1), (0, 1), (1, 2)]);
    let transposed = graph.transpose();

    assert_eq!(transposed.neighbors(NodeId(1)), &[NodeId(0), NodeId(2)]);
    assert_eq!(transposed.neighbors(NodeId(2)), &[NodeId(1)]);
    assert!(transposed.neighbors(NodeId(0)).is_empty());
}

/// Test that out-of-range insertions are dropped while the strict variant reports them.
#[test]
fn test_bounds_policy() {
    common::init_tracing();
    let mut graph = ListGraph::new(3);
    graph.add_edge(NodeId(0), NodeId(3));
    graph.add_edge(NodeId(3), NodeId(0));
    assert_eq!(graph.edge_count(), 0);

    let err = graph.try_add_edge(NodeId(0), NodeId(3)).unwrap_err();
    assert_eq!(
        err,
        GraphError::InvalidNodeId {
            node: 3,
            num_vertices: 3
        }
    );
    assert_eq!(err.to_string(), "Invalid node ID: 3 (graph has 3 vertices)");

    assert!(graph.bfs(NodeId(3)).is_empty());
    assert!(graph.try_bfs(NodeId(3)).is_err());
}

/// Test how a self-loop in the input propagates into derived graphs.
#[test]
fn test_input_self_loop_policy() {
    // 0 -> 0, 0 -> 1, 1 -> 2
    let graph = ListGraph::from_edges(3, &[(0, 0), (0, 1), (1, 2)]);

    // Transpose keeps the loop.
    assert!(graph.transpose().has_edge(NodeId(0), NodeId(0)));

    // Square drops it by default; 0 still reaches 2 through 1.
    let squared = graph.square();
    assert_eq!(squared.neighbors(NodeId(0)), &[NodeId(1), NodeId(2)]);

    // Square keeps it when asked.
    let closure = graph.square_with_config(&SquareConfig::new().with_self_loops());
    assert_eq!(
        closure.neighbors(NodeId(0)),
        &[NodeId(0), NodeId(1), NodeId(2)]
    );

    // Simplification always drops it.
    let simple = graph.to_simple_undirected();
    assert!(!simple.has_edge(NodeId(0), NodeId(0)));

    // BFS ignores it.
    assert_eq!(graph.bfs(NodeId(0)), vec![NodeId(0), NodeId(1), NodeId(2)]);
}

/// Test that a 2-hop path back to the source never becomes a loop.
#[test]
fn test_square_excludes_two_hop_return() {
    let graph = ListGraph::from_edges(3, &[(0, 1), (1, 0), (1, 2)]);
    let squared = graph.square();

    assert_eq!(neighbor_set(&squared, NodeId(0)), set(&[1, 2]));
    assert_eq!(neighbor_set(&squared, NodeId(1)), set(&[0, 2]));
    assert!(check_square_list(&graph, &squared).is_ok());
}

/// Test simplification of a dense multigraph.
#[test]
fn test_simplify_multigraph() {
    let graph = ListGraph::from_edges(
        4,
        &[(0, 1), (1, 0), (0, 1), (1, 2), (2, 1), (2, 2), (3, 0), (0, 3), (3, 3)],
    );
    let simple = graph.to_simple_undirected();

    assert!(check_simple_undirected(&simple).is_ok());
    assert_eq!(neighbor_set(&simple, NodeId(0)), set(&[1, 3]));
    assert_eq!(neighbor_set(&simple, NodeId(1)), set(&[0, 2]));
    assert_eq!(neighbor_set(&simple, NodeId(2)), set(&[1]));
    assert_eq!(neighbor_set(&simple, NodeId(3)), set(&[0]));
}

/// Test that derived graphs are independent snapshots.
#[test]
fn test_derived_graphs_do_not_alias() {
    let mut graph = ListGraph::from_edges(3, &[(0, 1)]);
    let transposed = graph.transpose();
    let squared = graph.square();

    graph.add_edge(NodeId(1), NodeId(2));

    assert_eq!(transposed.edge_count(), 1);
    assert_eq!(squared.edge_count(), 1);
    assert_eq!(graph.edge_count(), 2);
}

/// Test the display format used by command-line callers.
#[test]
fn test_display_rows() {
    let text = cycle4().square().to_string();
    assert_eq!(text, "0: 1 2\n1: 2 3\n2: 3 0\n3: 0 1\n");
}

/// Test operations on a graph with no vertices.
#[test]
fn test_zero_vertices() {
    let graph = ListGraph::new(0);
    assert!(graph.transpose().is_empty());
    assert!(graph.square().is_empty());
    assert!(graph.to_simple_undirected().is_empty());
    assert!(graph.bfs(NodeId(0)).is_empty());
    assert_eq!(graph.try_bfs(NodeId(0)), Err(GraphError::EmptyGraph));
}
