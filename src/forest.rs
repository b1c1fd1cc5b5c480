//! Result types for spanning tree/forest computation.
//!
//! The accumulator is append-only: every append is gated by the component
//! registry's check-and-merge, so no duplicate edge and no cycle-forming
//! edge can ever be recorded. There is no removal operation.

use crate::graph::Edge;

/// The output of a Borůvka spanning tree/forest computation.
///
/// When the input graph is connected the forest is a minimum spanning tree.
/// For a disconnected graph the result is one minimum spanning tree per
/// connected component, and [`SpanningForest::component_count`] lets the
/// caller distinguish the two cases.
///
/// # Examples
/// ```
/// use boruvka::{GraphBuilder, compute_mst};
///
/// let mut builder = GraphBuilder::new();
/// let a = builder.add_vertex("a");
/// let b = builder.add_vertex("b");
/// builder.add_edge(a, b, 5)?;
/// let graph = builder.build()?;
///
/// let forest = compute_mst(&graph)?;
/// assert!(forest.is_tree());
/// assert_eq!(forest.edges().len(), 1);
/// assert_eq!(forest.total_weight(), 5);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningForest {
    edges: Vec<Edge>,
    components: Vec<usize>,
    component_count: usize,
    rounds: usize,
}

impl SpanningForest {
    /// Returns the accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the sum of the accepted edges' weights.
    #[must_use]
    pub fn total_weight(&self) -> i64 {
        self.edges.iter().map(Edge::weight).sum()
    }

    /// Returns the resolved component label for every vertex.
    ///
    /// Two vertices share a label exactly when they ended up in the same
    /// spanning tree. Labels are union-find representatives, not contiguous.
    #[must_use]
    #[rustfmt::skip]
    pub fn components(&self) -> &[usize] { &self.components }

    /// Returns the number of connected components in the resulting forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns the number of search-and-merge rounds that were executed.
    #[must_use]
    #[rustfmt::skip]
    pub fn rounds(&self) -> usize { self.rounds }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }
}

/// Append-only collector for accepted spanning-tree edges.
#[derive(Debug, Default)]
pub(crate) struct ForestAccumulator {
    edges: Vec<Edge>,
}

impl ForestAccumulator {
    /// Records an accepted edge. Callers must hold a successful merge from
    /// the component registry for this edge.
    pub(crate) fn append(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Returns a snapshot of the edges accepted so far.
    #[rustfmt::skip]
    pub(crate) fn edges(&self) -> &[Edge] { &self.edges }

    /// Finalises the accumulator into a caller-facing result.
    pub(crate) fn into_forest(
        self,
        components: Vec<usize>,
        component_count: usize,
        rounds: usize,
    ) -> SpanningForest {
        SpanningForest {
            edges: self.edges,
            components,
            component_count,
            rounds,
        }
    }
}
