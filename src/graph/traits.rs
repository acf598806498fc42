//! Trait definitions for graph abstractions.
//!
//! This module defines the traits that let the algorithms in
//! [`algorithms`](crate::algorithms) run over any graph representation that can
//! enumerate its vertices and hand out each vertex's outgoing edges.
//!
//! # Architecture
//!
//! - [`GraphBase`] - Vertex count, vertex iteration and a dense vertex position
//! - [`OutEdges`] - Forward traversal through a vertex's adjacency list
//!
//! # Dense Positions
//!
//! Vertex handles are identity based and may be sparse after removals. Algorithms
//! keep their per-vertex state in vectors indexed by
//! [`vertex_index`](GraphBase::vertex_index), which must return a distinct value in
//! `0..vertex_count()` for every vertex currently in the graph.

use crate::graph::{Edge, VertexId};

/// Base trait providing core graph properties.
///
/// # Examples
///
/// ```rust
/// use graphkit::{graph::GraphBase, Graph};
///
/// let mut graph: Graph<&str> = Graph::new();
/// let a = graph.add_vertex("A");
/// graph.add_vertex("B");
///
/// assert_eq!(GraphBase::vertex_count(&graph), 2);
/// assert_eq!(graph.vertex_index(a), Some(0));
/// ```
pub trait GraphBase {
    /// Returns the number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    /// Returns an iterator over all vertex handles in the graph.
    ///
    /// The order must be the order of [`vertex_index`](GraphBase::vertex_index).
    fn vertex_ids(&self) -> impl Iterator<Item = VertexId>;

    /// Returns the dense position of `vertex`, or `None` if it is not in the graph.
    ///
    /// Positions are unique and lie in `0..vertex_count()`. They may change when
    /// the graph is mutated, so they must not be stored across mutations.
    fn vertex_index(&self, vertex: VertexId) -> Option<usize>;
}

/// Trait for graphs that expose the outgoing edges of each vertex.
///
/// Implementations are expected to return the vertex's own adjacency list, so that
/// walking the result costs O(out-degree) rather than a scan of the whole graph.
pub trait OutEdges: GraphBase {
    /// Returns an iterator over the edges leaving `vertex`.
    ///
    /// Unknown vertices have no outgoing edges.
    fn out_edges(&self, vertex: VertexId) -> impl Iterator<Item = &Edge>;

    /// Returns an iterator over every edge of the graph, grouped by source vertex.
    fn all_edges(&self) -> impl Iterator<Item = &Edge> {
        self.vertex_ids().flat_map(move |vertex| self.out_edges(vertex))
    }
}
