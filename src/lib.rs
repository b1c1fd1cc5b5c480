//! Parallel Borůvka minimum spanning tree construction.
//!
//! This crate computes a minimum spanning tree (or forest, when the input is
//! disconnected) of a weighted, undirected, simple graph. The algorithm runs
//! in rounds: every connected component searches for its cheapest outgoing
//! edge in parallel, then all non-cycle-forming candidates are contracted at
//! once. Each round at least halves the component count, so the loop
//! terminates in O(log V) rounds.
//!
//! The crate is a library core: callers construct a [`Graph`] through
//! [`GraphBuilder`] and consume the resulting [`SpanningForest`]. There is no
//! I/O surface.
//!
//! # Examples
//! ```
//! use boruvka::{GraphBuilder, compute_mst};
//!
//! let mut builder = GraphBuilder::new();
//! let a = builder.add_vertex("a");
//! let b = builder.add_vertex("b");
//! let c = builder.add_vertex("c");
//! builder.add_edge(a, b, 1)?;
//! builder.add_edge(b, c, 2)?;
//! builder.add_edge(a, c, 4)?;
//! let graph = builder.build()?;
//!
//! let forest = compute_mst(&graph)?;
//! assert!(forest.is_tree());
//! assert_eq!(forest.total_weight(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod boruvka;
mod builder;
mod error;
mod forest;
mod graph;

pub use crate::{
    boruvka::{Boruvka, compute_mst},
    builder::{BoruvkaBuilder, DEFAULT_WORKERS},
    error::{BoruvkaError, BoruvkaErrorCode, GraphError, GraphErrorCode, Result},
    forest::SpanningForest,
    graph::{Edge, Graph, GraphBuilder},
};
