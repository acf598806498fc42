//! Single-source shortest paths.
//!
//! Both algorithms produce a [`ShortestPathTree`]: for every vertex reachable
//! from the source, its distance and the last edge on one shortest path.
//!
//! | Algorithm | Weights | Cost |
//! |-----------|---------|------|
//! | [`bellman_ford`] | any, reports reachable negative cycles | O(V·E) |
//! | [`dijkstra`] | non-negative only | O((V + E) log_d V) |

mod bellman_ford;
mod dijkstra;

use std::collections::HashMap;

pub use bellman_ford::bellman_ford;
pub use dijkstra::{dijkstra, dijkstra_with_arity};

use crate::graph::{Edge, VertexId};

/// Shortest-path tree rooted at a source vertex.
///
/// Only reachable vertices have an entry. The source has distance 0 and no
/// parent edge; every other reachable vertex has exactly one parent edge, and
/// following parent edges always leads back to the source.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: VertexId,
    parents: HashMap<VertexId, Edge>,
    distances: HashMap<VertexId, f64>,
}

impl ShortestPathTree {
    /// Builds the tree from per-position state, `ids[i]` being the vertex at
    /// position `i`. Unreached positions have an infinite distance.
    pub(crate) fn from_dense(
        source: VertexId,
        ids: &[VertexId],
        distances: &[f64],
        parents: &[Option<Edge>],
    ) -> Self {
        let mut tree = ShortestPathTree {
            source,
            parents: HashMap::new(),
            distances: HashMap::new(),
        };
        for (i, &vertex) in ids.iter().enumerate() {
            if distances[i].is_finite() {
                tree.distances.insert(vertex, distances[i]);
                if let Some(edge) = parents[i] {
                    tree.parents.insert(vertex, edge);
                }
            }
        }
        tree
    }

    /// Returns the source vertex.
    #[must_use]
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Returns the last edge on the shortest path to `vertex`.
    ///
    /// `None` for the source and for unreached vertices.
    #[must_use]
    pub fn parent_edge(&self, vertex: VertexId) -> Option<&Edge> {
        self.parents.get(&vertex)
    }

    /// Returns the shortest-path distance to `vertex`, `f64::INFINITY` if unreached.
    #[must_use]
    pub fn distance(&self, vertex: VertexId) -> f64 {
        self.distances.get(&vertex).copied().unwrap_or(f64::INFINITY)
    }

    /// Returns `true` if `vertex` is reachable from the source.
    #[must_use]
    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distances.contains_key(&vertex)
    }

    /// Returns the edges of the shortest path from the source to `vertex`.
    ///
    /// The path to the source itself is empty; unreached vertices yield `None`.
    #[must_use]
    pub fn path_to(&self, vertex: VertexId) -> Option<Vec<Edge>> {
        if !self.is_reachable(vertex) {
            return None;
        }

        let mut path = Vec::new();
        let mut current = vertex;
        while current != self.source {
            let edge = self.parents.get(&current)?;
            path.push(*edge);
            current = edge.source;
            if path.len() > self.parents.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }

    /// Returns the parent edge of every reachable vertex except the source.
    #[must_use]
    pub fn parent_map(&self) -> &HashMap<VertexId, Edge> {
        &self.parents
    }

    /// Returns the distance of every reachable vertex.
    #[must_use]
    pub fn distances(&self) -> &HashMap<VertexId, f64> {
        &self.distances
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeId;

    fn edge(id: usize, source: usize, target: usize, weight: f64) -> Edge {
        Edge {
            id: EdgeId::new(id),
            source: VertexId::new(source),
            target: VertexId::new(target),
            weight,
        }
    }

    fn chain_tree() -> ShortestPathTree {
        let ids = [VertexId::new(0), VertexId::new(1), VertexId::new(2), VertexId::new(3)];
        let distances = [0.0, 1.0, 3.0, f64::INFINITY];
        let parents = [None, Some(edge(0, 0, 1, 1.0)), Some(edge(1, 1, 2, 2.0)), None];
        ShortestPathTree::from_dense(ids[0], &ids, &distances, &parents)
    }

    #[test]
    fn test_distances_and_reachability() {
        let tree = chain_tree();
        assert_eq!(tree.source(), VertexId::new(0));
        assert_eq!(tree.distance(VertexId::new(2)), 3.0);
        assert_eq!(tree.distance(VertexId::new(3)), f64::INFINITY);
        assert!(tree.is_reachable(VertexId::new(0)));
        assert!(!tree.is_reachable(VertexId::new(3)));
        assert_eq!(tree.distances().len(), 3);
    }

    #[test]
    fn test_parent_edges() {
        let tree = chain_tree();
        assert_eq!(tree.parent_edge(VertexId::new(0)), None);
        assert_eq!(tree.parent_edge(VertexId::new(2)).map(|e| e.id), Some(EdgeId::new(1)));
        assert_eq!(tree.parent_map().len(), 2);
    }

    #[test]
    fn test_path_to() {
        let tree = chain_tree();
        let path = tree.path_to(VertexId::new(2)).unwrap();
        let ids: Vec<EdgeId> = path.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![EdgeId::new(0), EdgeId::new(1)]);
        assert_eq!(tree.path_to(VertexId::new(0)), Some(Vec::new()));
        assert_eq!(tree.path_to(VertexId::new(3)), None);
    }
}
