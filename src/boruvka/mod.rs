//! Parallel Borůvka round scheduler.
//!
//! Drives the contract-until-one-component loop. Each round freezes the
//! component partition, fans the cheapest-crossing-edge search out over
//! Rayon (one contiguous slice of components per worker), then applies the
//! surviving candidates through the union-find merge gate on the scheduler
//! thread. The Rayon join at the end of the search phase is the per-round
//! barrier: it is created fresh every round rather than shared across the
//! computation, and a worker panic aborts the whole run instead of silently
//! dropping a component's candidate.

mod min_edge;
mod union_find;

use std::{collections::HashMap, num::NonZeroUsize};

use rayon::prelude::*;
use tracing::{debug, info, instrument};

use crate::{
    BoruvkaBuilder, Result,
    error::BoruvkaError,
    forest::{ForestAccumulator, SpanningForest},
    graph::{Edge, Graph},
};

use self::{min_edge::cheapest_crossing_edge, union_find::ComponentRegistry};

/// Computes a minimum spanning forest with the default worker count.
///
/// Convenience wrapper over [`BoruvkaBuilder`] and [`Boruvka::run`].
///
/// # Errors
/// Returns [`BoruvkaError::EmptyGraph`] when the graph has no vertices.
///
/// # Examples
/// ```
/// use boruvka::{GraphBuilder, compute_mst};
///
/// let mut builder = GraphBuilder::new();
/// let a = builder.add_vertex("a");
/// let b = builder.add_vertex("b");
/// let c = builder.add_vertex("c");
/// let d = builder.add_vertex("d");
/// builder.add_edge(a, b, 1)?;
/// builder.add_edge(b, c, 2)?;
/// builder.add_edge(c, d, 3)?;
/// builder.add_edge(a, d, 4)?;
/// let graph = builder.build()?;
///
/// let forest = compute_mst(&graph)?;
/// assert_eq!(forest.total_weight(), 6);
/// assert!(forest.is_tree());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn compute_mst(graph: &Graph) -> Result<SpanningForest> {
    BoruvkaBuilder::new().build()?.run(graph)
}

/// Entry point for running the parallel Borůvka algorithm.
///
/// Construct through [`BoruvkaBuilder`]. The instance is stateless between
/// runs; the same scheduler can process any number of graphs.
#[derive(Clone, Debug)]
pub struct Boruvka {
    workers: NonZeroUsize,
}

impl Boruvka {
    pub(crate) fn new(workers: NonZeroUsize) -> Self {
        Self { workers }
    }

    /// Returns the fixed worker count used for the search phase.
    #[must_use]
    pub fn workers(&self) -> NonZeroUsize {
        self.workers
    }

    /// Computes a minimum spanning forest of `graph`.
    ///
    /// Runs search-and-merge rounds until a single component remains or no
    /// round produces a merge (the disconnected-graph fixpoint). The result
    /// is deterministic: ties between equal-weight edges are always broken
    /// by the smaller edge ordinal.
    ///
    /// # Errors
    /// Returns [`BoruvkaError::EmptyGraph`] when the graph has no vertices.
    #[instrument(
        name = "boruvka.run",
        err,
        skip(self, graph),
        fields(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            workers = %self.workers,
        ),
    )]
    pub fn run(&self, graph: &Graph) -> Result<SpanningForest> {
        let vertex_count = graph.vertex_count();
        if vertex_count == 0 {
            return Err(BoruvkaError::EmptyGraph);
        }

        let mut registry = ComponentRegistry::new(vertex_count);
        let mut accumulator = ForestAccumulator::default();
        let mut rounds = 0;

        while registry.components() > 1 {
            let labels = registry.labels();
            let components = group_components(&labels);
            rounds += 1;

            let candidates = self.search_round(graph, &components, &labels);
            let candidate_count = candidates.len();
            let accepted = merge_round(candidates, &labels, &mut registry, &mut accumulator);
            debug!(
                round = rounds,
                components = registry.components(),
                candidates = candidate_count,
                accepted,
                "round complete"
            );

            if accepted == 0 {
                // Every remaining component is a full connected component of
                // the graph; the result is a spanning forest.
                break;
            }
        }

        let components = registry.labels();
        let component_count = registry.components();
        info!(
            edges = accumulator.edges().len(),
            components = component_count,
            rounds,
            "spanning forest complete"
        );
        Ok(accumulator.into_forest(components, component_count, rounds))
    }

    /// Search phase: finds each component's cheapest crossing edge.
    ///
    /// The component list is split into at most `workers` contiguous slices
    /// and searched in parallel. Workers share no mutable state; they read
    /// only the immutable graph and the frozen label snapshot.
    fn search_round(
        &self,
        graph: &Graph,
        components: &[Vec<usize>],
        labels: &[usize],
    ) -> Vec<Edge> {
        let slice_len = components.len().div_ceil(self.workers.get()).max(1);
        components
            .par_chunks(slice_len)
            .flat_map_iter(|slice| {
                slice
                    .iter()
                    .filter_map(|members| cheapest_crossing_edge(graph, members, labels))
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

/// Groups vertices by their component representative.
///
/// Components are ordered by representative index and member lists are
/// ascending, so the per-round work partition is reproducible.
fn group_components(labels: &[usize]) -> Vec<Vec<usize>> {
    let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); labels.len()];
    for (vertex, &root) in labels.iter().enumerate() {
        buckets[root].push(vertex);
    }
    buckets.retain(|members| !members.is_empty());
    buckets
}

/// Merge phase: dedupes candidates and applies them through the merge gate.
///
/// Across all candidates proposing to merge the same unordered component
/// pair, exactly one survives: the lowest weight, tie-broken by ordinal.
/// Survivors are applied in deterministic `(weight, ordinal)` order; a
/// candidate whose endpoints were already joined transitively earlier in
/// the same round is rejected by `try_union` and discarded.
fn merge_round(
    candidates: Vec<Edge>,
    labels: &[usize],
    registry: &mut ComponentRegistry,
    accumulator: &mut ForestAccumulator,
) -> usize {
    let mut best: HashMap<(usize, usize), Edge> = HashMap::with_capacity(candidates.len());
    for edge in candidates {
        let (a, b) = (labels[edge.source()], labels[edge.target()]);
        let pair = if a <= b { (a, b) } else { (b, a) };
        best.entry(pair)
            .and_modify(|current| {
                if edge < *current {
                    *current = edge;
                }
            })
            .or_insert(edge);
    }

    let mut survivors: Vec<Edge> = best.into_values().collect();
    survivors.sort_unstable();

    let mut accepted = 0;
    for edge in survivors {
        if registry.try_union(edge.source(), edge.target()) {
            accumulator.append(edge);
            accepted += 1;
        }
    }
    accepted
}
