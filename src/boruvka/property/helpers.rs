//! Shared helper functions for Borůvka property-based tests.

use crate::graph::Graph;

/// Path-compressing find for union-find verification.
pub(super) fn find_root(parent: &mut [usize], mut vertex: usize) -> usize {
    while parent[vertex] != vertex {
        parent[vertex] = parent[parent[vertex]];
        vertex = parent[vertex];
    }
    vertex
}

/// Counts connected components of the input graph by union-find replay
/// over its full edge set.
pub(super) fn count_input_components(graph: &Graph) -> usize {
    let vertex_count = graph.vertex_count();
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut components = vertex_count;

    for edge in graph.edges() {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left != right {
            parent[right] = left;
            components -= 1;
        }
    }

    components
}
