//! Per-component cheapest-crossing-edge search.
//!
//! A crossing edge has one endpoint inside the component and the other
//! outside it under the frozen label snapshot for the current round. The
//! search is a pure query: it mutates nothing, so any number of components
//! can be searched concurrently.

use crate::graph::{Edge, Graph};

/// Returns the cheapest edge leaving the component formed by `members`.
///
/// Ties on weight are broken by the smaller edge ordinal, so the result is
/// deterministic regardless of adjacency iteration order or thread
/// scheduling. Returns `None` when the component has no crossing edge,
/// which means it is a complete connected component of the graph — an
/// expected terminal condition for disconnected inputs, not a failure.
pub(crate) fn cheapest_crossing_edge(
    graph: &Graph,
    members: &[usize],
    labels: &[usize],
) -> Option<Edge> {
    let mut best: Option<Edge> = None;
    for &vertex in members {
        let home = labels[vertex];
        for edge in graph.incident_edges(vertex) {
            if labels[edge.other_endpoint(vertex)] == home {
                continue;
            }
            if best.is_none_or(|current| *edge < current) {
                best = Some(*edge);
            }
        }
    }
    best
}
