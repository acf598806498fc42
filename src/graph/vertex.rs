//! Vertex handle implementation for the graph store.
//!
//! This module provides the [`VertexId`] type, a strongly-typed handle for vertices
//! within a [`Graph`](crate::Graph). Handles are identity based: they are never reused
//! within one graph and stay valid when other vertices are removed, even though the
//! store compacts its internal storage on removal.

use std::fmt;

/// A strongly-typed handle for a vertex within a graph.
///
/// `VertexId` wraps a `usize` that is assigned sequentially by
/// [`Graph::add_vertex`](crate::Graph::add_vertex). Unlike a storage position, the
/// handle of a vertex never changes, so it can safely be used as a key in maps that
/// outlive removals of other vertices.
///
/// # Usage
///
/// Vertex handles are used to:
///
/// - Reference vertices when adding edges
/// - Look up vertex payloads
/// - Key the per-vertex results of traversal and shortest-path algorithms
///
/// # Examples
///
/// ```rust
/// use graphkit::{Graph, VertexId};
/// use std::collections::HashMap;
///
/// let mut graph: Graph<&str> = Graph::new();
/// let a: VertexId = graph.add_vertex("A");
/// let b: VertexId = graph.add_vertex("B");
/// assert_ne!(a, b);
///
/// let mut labels: HashMap<VertexId, i32> = HashMap::new();
/// labels.insert(a, 42);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Creates a new `VertexId` from a raw value.
    ///
    /// This constructor is primarily intended for internal use and testing.
    /// Normal usage should obtain handles from [`Graph::add_vertex`](crate::Graph::add_vertex).
    #[must_use]
    #[inline]
    pub const fn new(raw: usize) -> Self {
        VertexId(raw)
    }

    /// Returns the raw value of this handle.
    ///
    /// This is the creation sequence number of the vertex, not its current storage
    /// position. Use [`GraphBase::vertex_index`](crate::graph::GraphBase::vertex_index)
    /// for a dense position.
    #[must_use]
    #[inline]
    pub const fn raw(self) -> usize {
        self.0
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn test_vertex_id_roundtrip() {
        let id = VertexId::new(7);
        assert_eq!(id.raw(), 7);
    }

    #[test]
    fn test_vertex_id_formatting() {
        let id = VertexId::new(3);
        assert_eq!(format!("{id}"), "v3");
        assert_eq!(format!("{id:?}"), "VertexId(3)");
    }

    #[test]
    fn test_vertex_id_ordering() {
        let ids = [VertexId::new(2), VertexId::new(0), VertexId::new(1)];
        let mut sorted = ids;
        sorted.sort();
        assert_eq!(sorted, [VertexId::new(0), VertexId::new(1), VertexId::new(2)]);
    }

    #[test]
    fn test_vertex_id_as_key() {
        let mut map: HashMap<VertexId, &str> = HashMap::new();
        map.insert(VertexId::new(0), "zero");
        map.insert(VertexId::new(1), "one");
        assert_eq!(map.get(&VertexId::new(1)), Some(&"one"));

        let set: HashSet<VertexId> = [VertexId::new(4), VertexId::new(4)].into_iter().collect();
        assert_eq!(set.len(), 1);
    }
}
