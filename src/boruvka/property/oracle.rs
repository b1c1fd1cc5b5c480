//! Sequential Kruskal oracle for spanning-forest property verification.
//!
//! A simple, trusted, single-threaded implementation of Kruskal's algorithm
//! used as a reference in property tests. The sort order intentionally
//! mirrors `Edge::Ord` (weight, then ordinal) so that both implementations
//! accept exactly the same edge set and total-weight comparisons are exact.

use crate::graph::Graph;

use super::helpers::find_root;

/// Result of the sequential Kruskal oracle.
#[derive(Clone, Debug)]
pub(super) struct SequentialMstResult {
    /// Total weight of the spanning tree/forest.
    pub total_weight: i64,
    /// Number of edges in the spanning tree/forest.
    pub edge_count: usize,
    /// Number of connected components after construction.
    pub component_count: usize,
}

/// Computes a minimum spanning forest using sequential Kruskal's algorithm.
pub(super) fn sequential_kruskal(graph: &Graph) -> SequentialMstResult {
    let vertex_count = graph.vertex_count();
    let mut edges = graph.edges().to_vec();
    edges.sort_unstable();

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut rank: Vec<u8> = vec![0; vertex_count];
    let mut components = vertex_count;
    let mut total_weight: i64 = 0;
    let mut edge_count: usize = 0;

    for edge in &edges {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left != right {
            union_by_rank(&mut parent, &mut rank, left, right);
            total_weight += edge.weight();
            edge_count += 1;
            components -= 1;
        }
    }

    SequentialMstResult {
        total_weight,
        edge_count,
        component_count: components,
    }
}

/// Selects the root and child for a union operation.
///
/// Prefers the node with the higher rank; when ranks are equal, the smaller
/// index becomes root to keep the choice deterministic.
fn choose_root(rank: &[u8], a: usize, b: usize) -> (usize, usize) {
    match rank[a].cmp(&rank[b]) {
        std::cmp::Ordering::Greater => (a, b),
        std::cmp::Ordering::Less => (b, a),
        std::cmp::Ordering::Equal if a <= b => (a, b),
        std::cmp::Ordering::Equal => (b, a),
    }
}

/// Union by rank, breaking ties by smaller index.
fn union_by_rank(parent: &mut [usize], rank: &mut [u8], a: usize, b: usize) {
    let (root, child) = choose_root(rank, a, b);
    parent[child] = root;
    if rank[root] == rank[child] {
        rank[root] = rank[root].saturating_add(1);
    }
}
