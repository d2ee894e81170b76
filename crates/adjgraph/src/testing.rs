//! Shared validation logic and random graph generation.
//!
//! The checkers here recompute each property from first principles (no BFS,
//! no square) so they can validate the algorithms rather than restate
//! them. They return a description of the first violation found.
//!
//! [`EdgeSampler`] draws random edge lists from a seedable RNG; a fixed
//! seed reproduces the same graphs across runs.

use std::collections::{BTreeMap, BTreeSet};

use rand::prelude::*;

use crate::algorithms::traversal::Adjacency;
use crate::models::{Distance, ListGraph, MatrixGraph, NodeId};

/// Outcome of a property check.
pub type CheckResult = std::result::Result<(), String>;

/// Random edge-list generator.
pub struct EdgeSampler {
    rng: StdRng,
}

impl EdgeSampler {
    /// Create a sampler. `None` seeds from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Create a reproducible sampler.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    /// Vertex count in `[min, max]`.
    pub fn vertex_count(&mut self, min: usize, max: usize) -> usize {
        self.rng.gen_range(min..=max)
    }

    /// Edge count between `n` and half of the `n * (n - 1)` possible
    /// loop-free edges.
    pub fn edge_count(&mut self, num_vertices: usize) -> usize {
        let min = num_vertices;
        let max = (num_vertices * num_vertices.saturating_sub(1) / 2).max(min);
        self.rng.gen_range(min..=max)
    }

    /// `num_edges` uniformly drawn edges without self-loops.
    ///
    /// Parallel edges may repeat. Empty when there are fewer than two
    /// vertices, since no loop-free edge exists.
    pub fn edges(&mut self, num_vertices: usize, num_edges: usize) -> Vec<(u32, u32)> {
        let n = vertex_bound(num_vertices);
        if n < 2 {
            return Vec::new();
        }
        (0..num_edges)
            .map(|_| {
                let src = self.rng.gen_range(0..n);
                // Skip over src so every other vertex is equally likely.
                let dst = self.rng.gen_range(0..n - 1);
                (src, if dst >= src { dst + 1 } else { dst })
            })
            .collect()
    }

    /// `num_edges` uniformly drawn edges, self-loops included.
    pub fn multigraph_edges(&mut self, num_vertices: usize, num_edges: usize) -> Vec<(u32, u32)> {
        let n = vertex_bound(num_vertices);
        if n == 0 {
            return Vec::new();
        }
        (0..num_edges)
            .map(|_| (self.rng.gen_range(0..n), self.rng.gen_range(0..n)))
            .collect()
    }

    /// Random loop-free graph in both representations, built from the same
    /// edge list.
    pub fn graph_pair(&mut self, num_vertices: usize, num_edges: usize) -> (ListGraph, MatrixGraph) {
        let edges = self.edges(num_vertices, num_edges);
        (
            ListGraph::from_edges(num_vertices, &edges),
            MatrixGraph::from_edges(num_vertices, &edges),
        )
    }
}

fn vertex_bound(num_vertices: usize) -> u32 {
    u32::try_from(num_vertices).unwrap_or(u32::MAX)
}

/// Count of each `(src, dst)` pair.
pub fn edge_multiset(
    edges: impl IntoIterator<Item = (NodeId, NodeId)>,
) -> BTreeMap<(NodeId, NodeId), usize> {
    let mut counts = BTreeMap::new();
    for edge in edges {
        *counts.entry(edge).or_insert(0) += 1;
    }
    counts
}

/// Distinct destinations of `node`.
pub fn neighbor_set(graph: &ListGraph, node: NodeId) -> BTreeSet<NodeId> {
    graph.neighbors(node).iter().copied().collect()
}

/// Vertices reachable from `src` in exactly one or two hops.
pub fn two_hop_targets(graph: &ListGraph, src: NodeId, self_loops: bool) -> BTreeSet<NodeId> {
    let mut targets = BTreeSet::new();
    for &mid in graph.neighbors(src) {
        targets.insert(mid);
        targets.extend(graph.neighbors(mid).iter().copied());
    }
    if !self_loops {
        targets.remove(&src);
    }
    targets
}

/// Hop distance from `start` to every vertex by repeated relaxation.
///
/// O(V * E); independent of the queue-based search.
pub fn hop_distances<G: Adjacency>(graph: &G, start: NodeId) -> Vec<Distance> {
    let n = graph.num_vertices();
    let mut distances = vec![Distance::INFINITY; n];
    if !graph.contains(start) {
        return distances;
    }
    distances[start.index()] = Distance::ZERO;

    let mut changed = true;
    while changed {
        changed = false;
        for u in 0..n {
            let through = distances[u].increment();
            if through == Distance::INFINITY {
                continue;
            }
            for v in graph.successors(NodeId::from(u)) {
                if graph.contains(v) && through < distances[v.index()] {
                    distances[v.index()] = through;
                    changed = true;
                }
            }
        }
    }
    distances
}

/// Check that `order` is a valid BFS visitation order from `start`.
///
/// Valid means: starts at `start`, contains every reachable vertex exactly
/// once and nothing else, and never visits a farther layer before a nearer
/// one. An out-of-range start must produce an empty order.
pub fn check_bfs_order<G: Adjacency>(graph: &G, start: NodeId, order: &[NodeId]) -> CheckResult {
    if !graph.contains(start) {
        if order.is_empty() {
            return Ok(());
        }
        return Err(format!("out-of-range start {} produced {:?}", start, order));
    }
    if order.first() != Some(&start) {
        return Err(format!("order {:?} does not begin at {}", order, start));
    }

    let distances = hop_distances(graph, start);
    let mut seen = BTreeSet::new();
    let mut last_layer = Distance::ZERO;
    for &node in order {
        if !seen.insert(node) {
            return Err(format!("{} visited twice", node));
        }
        let layer = distances.get(node.index()).copied().unwrap_or(Distance::INFINITY);
        if !layer.is_reachable() {
            return Err(format!("{} is not reachable from {}", node, start));
        }
        if layer < last_layer {
            return Err(format!("{} (layer {}) after layer {}", node, layer.0, last_layer.0));
        }
        last_layer = layer;
    }

    let reachable = distances.iter().filter(|d| d.is_reachable()).count();
    if seen.len() != reachable {
        return Err(format!(
            "visited {} vertices, {} are reachable",
            seen.len(),
            reachable
        ));
    }
    Ok(())
}

/// Check that `squared` is the loop-free square of `original`.
pub fn check_square_list(original: &ListGraph, squared: &ListGraph) -> CheckResult {
    if original.num_vertices() != squared.num_vertices() {
        return Err(format!(
            "square has {} vertices, original {}",
            squared.num_vertices(),
            original.num_vertices()
        ));
    }
    for u in 0..original.num_vertices() {
        let src = NodeId::from(u);
        let row = squared.neighbors(src);
        let distinct = neighbor_set(squared, src);
        if distinct.len() != row.len() {
            return Err(format!("{} has duplicate destinations {:?}", src, row));
        }
        let expected = two_hop_targets(original, src, false);
        if distinct != expected {
            return Err(format!("{}: got {:?}, expected {:?}", src, distinct, expected));
        }
    }
    Ok(())
}

/// Check that `graph` is simple and undirected: no loops, no parallel edges,
/// and every edge present in both directions.
pub fn check_simple_undirected(graph: &ListGraph) -> CheckResult {
    for (src, dst) in graph.edges() {
        if src == dst {
            return Err(format!("loop at {}", src));
        }
        if !graph.has_edge(dst, src) {
            return Err(format!("{} -> {} has no reverse edge", src, dst));
        }
    }
    if let Some((edge, count)) = edge_multiset(graph.edges())
        .into_iter()
        .find(|&(_, count)| count > 1)
    {
        return Err(format!("{:?} appears {} times", edge, count));
    }
    Ok(())
}
