//! Weighted, undirected, simple graph model.
//!
//! Vertices are dense `usize` indices handed out by [`GraphBuilder`] in
//! insertion order. Each edge is stored once, in canonical
//! `source <= target` form, and referenced from both endpoints' adjacency
//! maps, giving O(1) lookup of the edge between any two vertices. A built
//! [`Graph`] is immutable; component membership during the algorithm is
//! tracked outside the graph.

use std::{collections::HashMap, sync::Arc};

use crate::error::GraphError;

/// An undirected edge with an integer weight and a deterministic ordinal.
///
/// The ordinal records the order in which edges were added and breaks ties
/// between equal weights, so spanning-tree results are reproducible
/// regardless of iteration order or thread scheduling.
///
/// # Examples
/// ```
/// use boruvka::GraphBuilder;
///
/// let mut builder = GraphBuilder::new();
/// let a = builder.add_vertex("a");
/// let b = builder.add_vertex("b");
/// builder.add_edge(b, a, 7)?;
/// let graph = builder.build()?;
///
/// let edge = graph.edge_between(a, b).expect("edge exists");
/// // Endpoints are canonicalised to source <= target.
/// assert_eq!((edge.source(), edge.target()), (a, b));
/// assert_eq!(edge.weight(), 7);
/// # Ok::<(), boruvka::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: i64,
    ordinal: u64,
}

impl Edge {
    /// Returns the smaller endpoint index.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> usize { self.source }

    /// Returns the larger endpoint index.
    #[must_use]
    #[rustfmt::skip]
    pub fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> i64 { self.weight }

    /// Returns the deterministic tie-break ordinal assigned at insertion.
    #[must_use]
    #[rustfmt::skip]
    pub fn ordinal(&self) -> u64 { self.ordinal }

    /// Returns the endpoint opposite to `vertex`.
    ///
    /// `vertex` must be one of the edge's endpoints; passing any other index
    /// returns [`Edge::source`].
    #[must_use]
    pub fn other_endpoint(&self, vertex: usize) -> usize {
        if vertex == self.source {
            self.target
        } else {
            self.source
        }
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.ordinal.cmp(&other.ordinal))
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Incrementally assembles a [`Graph`], validating input as it arrives.
///
/// Vertex indices are dense and returned by [`GraphBuilder::add_vertex`];
/// edges are rejected immediately when they reference unknown vertices,
/// form self-loops, or duplicate an existing pair. [`GraphBuilder::build`]
/// performs a final symmetry check over the adjacency so the algorithm
/// never has to re-validate during rounds.
///
/// # Examples
/// ```
/// use boruvka::GraphBuilder;
///
/// let mut builder = GraphBuilder::new();
/// let a = builder.add_vertex("a");
/// let b = builder.add_vertex("b");
/// builder.add_edge(a, b, 3)?;
/// let graph = builder.build()?;
/// assert_eq!(graph.vertex_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// # Ok::<(), boruvka::GraphError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    names: Vec<Arc<str>>,
    adjacency: Vec<HashMap<usize, usize>>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named vertex and returns its dense index.
    pub fn add_vertex(&mut self, name: impl Into<Arc<str>>) -> usize {
        let index = self.names.len();
        self.names.push(name.into());
        self.adjacency.push(HashMap::new());
        index
    }

    /// Adds an undirected edge between two existing vertices.
    ///
    /// The edge is stored once in canonical `source <= target` form and
    /// registered in both endpoints' adjacency maps. Returns the edge's
    /// ordinal index.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when an endpoint has not been
    /// added, [`GraphError::SelfLoop`] when both endpoints coincide, and
    /// [`GraphError::DuplicateEdge`] when the pair is already connected.
    pub fn add_edge(&mut self, a: usize, b: usize, weight: i64) -> Result<usize, GraphError> {
        let vertex_count = self.names.len();
        for vertex in [a, b] {
            if vertex >= vertex_count {
                return Err(GraphError::UnknownVertex {
                    vertex,
                    vertex_count,
                });
            }
        }
        if a == b {
            return Err(GraphError::SelfLoop { vertex: a });
        }

        let (source, target) = if a <= b { (a, b) } else { (b, a) };
        if self.adjacency[source].contains_key(&target) {
            return Err(GraphError::DuplicateEdge {
                left: source,
                right: target,
            });
        }

        let index = self.edges.len();
        self.edges.push(Edge {
            source,
            target,
            weight,
            ordinal: index as u64,
        });
        self.adjacency[source].insert(target, index);
        self.adjacency[target].insert(source, index);
        Ok(index)
    }

    /// Finalises the graph, running the one-time adjacency symmetry check.
    ///
    /// # Errors
    /// Returns [`GraphError::AsymmetricAdjacency`] when an adjacency entry
    /// has no mirror on the opposite endpoint. The builder maintains
    /// symmetry itself, so this only fires on an internal logic error.
    pub fn build(self) -> Result<Graph, GraphError> {
        for (vertex, neighbours) in self.adjacency.iter().enumerate() {
            for (&neighbour, &edge) in neighbours {
                if self.adjacency[neighbour].get(&vertex) != Some(&edge) {
                    return Err(GraphError::AsymmetricAdjacency {
                        left: vertex,
                        right: neighbour,
                    });
                }
            }
        }

        Ok(Graph {
            names: self.names,
            adjacency: self.adjacency,
            edges: self.edges,
        })
    }
}

/// An immutable, validated, weighted undirected simple graph.
///
/// Construct through [`GraphBuilder`]. All structural checks happen at build
/// time; reads during the algorithm are lock-free and allocation-free.
#[derive(Clone, Debug)]
pub struct Graph {
    names: Vec<Arc<str>>,
    adjacency: Vec<HashMap<usize, usize>>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.names.len() }

    /// Returns the number of edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Returns the caller-supplied name of a vertex.
    ///
    /// # Panics
    /// Panics when `vertex` is out of bounds.
    #[must_use]
    pub fn name(&self, vertex: usize) -> &str {
        &self.names[vertex]
    }

    /// Returns every edge in insertion (ordinal) order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the edge connecting `a` and `b`, if one exists.
    ///
    /// Lookup is O(1) in either endpoint order.
    #[must_use]
    pub fn edge_between(&self, a: usize, b: usize) -> Option<&Edge> {
        let index = *self.adjacency.get(a)?.get(&b)?;
        self.edges.get(index)
    }

    /// Iterates over the edges incident to `vertex`.
    ///
    /// # Panics
    /// Panics when `vertex` is out of bounds.
    pub fn incident_edges(&self, vertex: usize) -> impl Iterator<Item = &Edge> {
        self.adjacency[vertex].values().map(|&index| &self.edges[index])
    }
}
