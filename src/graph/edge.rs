//! Edge handle and edge record for the graph store.
//!
//! This module provides [`EdgeId`], a strongly-typed identifier for edges, and
//! [`Edge`], the directed weighted arc stored in its source vertex's adjacency list.

use std::fmt;

use crate::graph::VertexId;

/// Weight given to edges added without an explicit weight.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A strongly-typed identifier for edges within a graph.
///
/// Edge IDs are assigned sequentially by [`Graph::add_edge`](crate::Graph::add_edge)
/// and [`Graph::add_weighted_edge`](crate::Graph::add_weighted_edge) and are never
/// reused within one graph. Parallel arcs between the same pair of vertices have
/// distinct IDs.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Creates a new `EdgeId` from a raw value.
    ///
    /// This constructor is primarily intended for internal use and testing.
    #[must_use]
    #[inline]
    pub const fn new(raw: usize) -> Self {
        EdgeId(raw)
    }

    /// Returns the raw value of this identifier.
    #[must_use]
    #[inline]
    pub const fn raw(self) -> usize {
        self.0
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A directed, weighted arc between two vertices.
///
/// An `Edge` refers to its endpoints by [`VertexId`] and is identified by its
/// [`EdgeId`]. It is a small `Copy` record: algorithms hand out edges by value
/// (for example as the parent edge in a shortest-path tree), and equality of two
/// records means they describe the same arc of the same graph.
///
/// An undirected connection is modelled as two opposite edges.
///
/// # Examples
///
/// ```rust
/// use graphkit::Graph;
///
/// let mut graph: Graph<char> = Graph::new();
/// let a = graph.add_vertex('a');
/// let b = graph.add_vertex('b');
/// graph.add_weighted_edge(a, b, 2.5)?;
///
/// let edge = graph.are_adjacent(a, b).unwrap();
/// assert_eq!(edge.source, a);
/// assert_eq!(edge.target, b);
/// assert_eq!(edge.weight, 2.5);
/// # Ok::<(), graphkit::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Identity of this arc
    pub id: EdgeId,
    /// Vertex the arc leaves
    pub source: VertexId,
    /// Vertex the arc enters
    pub target: VertexId,
    /// Weight of the arc
    pub weight: f64,
}

impl Edge {
    /// Returns `true` if the edge starts and ends at the same vertex.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Returns the endpoint opposite to `vertex`, or `None` if `vertex` is not an endpoint.
    #[must_use]
    pub fn opposite(&self, vertex: VertexId) -> Option<VertexId> {
        if vertex == self.source {
            Some(self.target)
        } else if vertex == self.target {
            Some(self.source)
        } else {
            None
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.target, self.weight)
    }
}
