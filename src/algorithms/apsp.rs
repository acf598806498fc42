//! All-pairs shortest paths with Floyd-Warshall.
//!
//! The result keeps two dense `V × V` matrices: the distance between every
//! ordered pair, and the first edge of one shortest path between them. Paths
//! are rebuilt on demand by following first edges.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    graph::{Edge, OutEdges, VertexId},
    Error, Result,
};

/// Shortest paths between every ordered pair of vertices.
#[derive(Debug, Clone)]
pub struct AllPairsShortestPaths {
    vertices: Vec<VertexId>,
    index: HashMap<VertexId, usize>,
    distances: Vec<f64>,
    next: Vec<Option<Edge>>,
}

impl AllPairsShortestPaths {
    fn cell(&self, x: VertexId, y: VertexId) -> Option<usize> {
        let row = *self.index.get(&x)?;
        let column = *self.index.get(&y)?;
        Some(row * self.vertices.len() + column)
    }

    /// Returns the vertices covered by the matrices, in matrix order.
    #[must_use]
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Returns the first edge of a shortest path from `x` to `y`.
    ///
    /// `None` if `y` is unreachable from `x`, if `x == y`, or if either vertex
    /// was not in the graph.
    #[must_use]
    pub fn next_hop(&self, x: VertexId, y: VertexId) -> Option<&Edge> {
        self.cell(x, y).and_then(|cell| self.next[cell].as_ref())
    }

    /// Returns the shortest-path distance from `x` to `y`.
    ///
    /// `0` for `x == y`, `f64::INFINITY` if `y` is unreachable or either vertex
    /// is unknown.
    #[must_use]
    pub fn distance(&self, x: VertexId, y: VertexId) -> f64 {
        self.cell(x, y)
            .map_or(f64::INFINITY, |cell| self.distances[cell])
    }

    /// Returns the edges of a shortest path from `x` to `y`.
    ///
    /// The path from a vertex to itself is empty. `None` if `y` is unreachable
    /// from `x` or either vertex is unknown.
    #[must_use]
    pub fn path(&self, x: VertexId, y: VertexId) -> Option<Vec<Edge>> {
        let cell = self.cell(x, y)?;
        if x == y {
            return Some(Vec::new());
        }
        if !self.distances[cell].is_finite() {
            return None;
        }

        let mut path = Vec::new();
        let mut current = x;
        while current != y {
            let edge = self.next_hop(current, y)?;
            path.push(*edge);
            current = edge.target;
            if path.len() > self.vertices.len() {
                return None;
            }
        }
        Some(path)
    }

    /// Returns the total weight of the path rebuilt by [`path`](Self::path).
    ///
    /// `0` for `x == y`, `f64::INFINITY` if there is no path.
    #[must_use]
    pub fn path_weight(&self, x: VertexId, y: VertexId) -> f64 {
        self.path(x, y)
            .map_or(f64::INFINITY, |path| path.iter().map(|e| e.weight).sum())
    }
}

/// Computes shortest paths between every ordered pair of vertices.
///
/// The matrices are seeded from the edges, keeping the cheapest of parallel
/// edges. A self loop only enters the seed when its weight is negative, so
/// that the diagonal starts at 0 otherwise. Then every vertex `k` in turn is
/// tried as an intermediate: whenever `x → k → y` is shorter than the best
/// known `x → y`, the distance is updated and the first edge towards `y`
/// becomes the first edge towards `k`.
///
/// # Errors
///
/// [`Error::NegativeCycle`] if any diagonal entry ends up negative, i.e. some
/// vertex lies on a negative cycle. The cycle does not have to be reachable
/// from anywhere in particular.
///
/// # Complexity
///
/// - Time: O(V³)
/// - Space: O(V²)
///
/// # Examples
///
/// ```rust
/// use graphkit::{algorithms::floyd_warshall, Graph};
///
/// let mut graph: Graph<u32> = Graph::new();
/// let a = graph.add_vertex(0);
/// let b = graph.add_vertex(1);
/// let c = graph.add_vertex(2);
/// graph.add_weighted_edge(a, b, 2.0)?;
/// graph.add_weighted_edge(b, c, 2.0)?;
/// graph.add_weighted_edge(a, c, 10.0)?;
///
/// let paths = floyd_warshall(&graph)?;
/// assert_eq!(paths.path_weight(a, c), 4.0);
/// assert_eq!(paths.next_hop(a, c).map(|e| e.target), Some(b));
/// # Ok::<(), graphkit::Error>(())
/// ```
#[tracing::instrument(skip_all, fields(vertices = graph.vertex_count()))]
pub fn floyd_warshall<G: OutEdges>(graph: &G) -> Result<AllPairsShortestPaths> {
    let vertices: Vec<VertexId> = graph.vertex_ids().collect();
    let n = vertices.len();
    let index: HashMap<VertexId, usize> = vertices
        .iter()
        .enumerate()
        .map(|(i, &vertex)| (vertex, i))
        .collect();

    let mut distances = vec![f64::INFINITY; n * n];
    let mut next: Vec<Option<Edge>> = vec![None; n * n];
    for i in 0..n {
        distances[i * n + i] = 0.0;
    }

    for edge in graph.all_edges() {
        let (Some(&x), Some(&y)) = (index.get(&edge.source), index.get(&edge.target)) else {
            continue;
        };
        let cell = x * n + y;
        if edge.weight < distances[cell] {
            distances[cell] = edge.weight;
            next[cell] = Some(*edge);
        }
    }

    for k in 0..n {
        for x in 0..n {
            let through = distances[x * n + k];
            if !through.is_finite() {
                continue;
            }
            let hop = next[x * n + k];
            for y in 0..n {
                let candidate = through + distances[k * n + y];
                if candidate < distances[x * n + y] {
                    distances[x * n + y] = candidate;
                    next[x * n + y] = hop;
                }
            }
        }
    }

    if let Some(i) = (0..n).find(|&i| distances[i * n + i] < 0.0) {
        debug!(vertex = %vertices[i], "vertex lies on a negative cycle");
        return Err(Error::NegativeCycle);
    }

    debug!(pairs = n * n, "floyd-warshall finished");
    Ok(AllPairsShortestPaths {
        vertices,
        index,
        distances,
        next,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::graph_from_arcs;

    #[test]
    fn test_detour_beats_direct_edge() {
        let (graph, v) = graph_from_arcs(3, &[(0, 1, 2.0), (1, 2, 2.0), (0, 2, 10.0)]);
        let paths = floyd_warshall(&graph).unwrap();

        assert_eq!(paths.distance(v[0], v[2]), 4.0);
        assert_eq!(paths.path_weight(v[0], v[2]), 4.0);
        let hops: Vec<VertexId> = paths.path(v[0], v[2]).unwrap().iter().map(|e| e.target).collect();
        assert_eq!(hops, vec![v[1], v[2]]);
    }

    #[test]
    fn test_diagonal_and_unreachable() {
        let (graph, v) = graph_from_arcs(3, &[(0, 1, 1.0), (1, 1, 3.0)]);
        let paths = floyd_warshall(&graph).unwrap();

        assert_eq!(paths.distance(v[1], v[1]), 0.0);
        assert_eq!(paths.next_hop(v[1], v[1]), None);
        assert_eq!(paths.path(v[1], v[1]), Some(Vec::new()));
        assert_eq!(paths.path_weight(v[0], v[0]), 0.0);

        assert_eq!(paths.distance(v[1], v[0]), f64::INFINITY);
        assert_eq!(paths.path(v[1], v[0]), None);
        assert_eq!(paths.path_weight(v[2], v[0]), f64::INFINITY);
    }

    #[test]
    fn test_negative_edges_without_cycle() {
        let (graph, v) = graph_from_arcs(4, &[(0, 1, 4.0), (0, 2, 1.0), (2, 1, -2.0), (1, 3, 1.0)]);
        let paths = floyd_warshall(&graph).unwrap();
        assert_eq!(paths.distance(v[0], v[3]), 0.0);
        assert_eq!(paths.path_weight(v[0], v[3]), 0.0);
        assert_eq!(paths.path(v[0], v[3]).map(|p| p.len()), Some(3));
    }

    #[test]
    fn test_negative_cycle_anywhere() {
        let (graph, _) = graph_from_arcs(4, &[(0, 1, 1.0), (2, 3, -3.0), (3, 2, 1.0)]);
        assert!(matches!(floyd_warshall(&graph), Err(Error::NegativeCycle)));
    }

    #[test]
    fn test_negative_self_loop() {
        let (graph, _) = graph_from_arcs(2, &[(0, 1, 1.0), (1, 1, -1.0)]);
        assert!(matches!(floyd_warshall(&graph), Err(Error::NegativeCycle)));
    }

    #[test]
    fn test_parallel_edges_cheapest_seeded() {
        let (graph, v) = graph_from_arcs(2, &[(0, 1, 5.0), (0, 1, 2.0), (0, 1, 3.0)]);
        let paths = floyd_warshall(&graph).unwrap();
        assert_eq!(paths.distance(v[0], v[1]), 2.0);
        assert_eq!(paths.next_hop(v[0], v[1]).map(|e| e.weight), Some(2.0));
    }

    #[test]
    fn test_unknown_vertex() {
        let (mut graph, v) = graph_from_arcs(2, &[(0, 1, 1.0)]);
        let stale = graph.add_vertex(9);
        graph.remove_vertex(stale);
        let paths = floyd_warshall(&graph).unwrap();

        assert_eq!(paths.vertices(), &v[..]);
        assert_eq!(paths.distance(stale, v[1]), f64::INFINITY);
        assert_eq!(paths.path(v[0], stale), None);
    }

    #[test]
    fn test_empty_graph() {
        let (graph, _) = graph_from_arcs(0, &[]);
        let paths = floyd_warshall(&graph).unwrap();
        assert!(paths.vertices().is_empty());
    }
}
