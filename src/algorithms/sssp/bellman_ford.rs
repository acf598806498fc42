//! Bellman-Ford shortest paths.

use tracing::{debug, trace};

use crate::{
    algorithms::sssp::ShortestPathTree,
    graph::{Edge, OutEdges, VertexId},
    Error, Result,
};

/// Computes shortest paths from `source`, allowing negative edge weights.
///
/// Every edge is relaxed in up to `|V| - 1` passes; the loop stops early once a
/// pass relaxes nothing. A final pass then looks for an edge that can still be
/// relaxed, which exists exactly when a negative cycle is reachable from the
/// source.
///
/// # Arguments
///
/// * `graph` - The graph to search
/// * `source` - The vertex distances are measured from
///
/// # Errors
///
/// - [`Error::VertexNotFound`] if `source` is not in the graph
/// - [`Error::NegativeCycle`] if a negative cycle is reachable from `source`.
///   Negative cycles elsewhere in the graph do not affect the result.
///
/// # Complexity
///
/// - Time: O(V·E)
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust
/// use graphkit::{algorithms::bellman_ford, Graph};
///
/// let mut graph: Graph<&str> = Graph::new();
/// let a = graph.add_vertex("A");
/// let b = graph.add_vertex("B");
/// let c = graph.add_vertex("C");
/// graph.add_weighted_edge(a, b, 4.0)?;
/// graph.add_weighted_edge(a, c, 2.0)?;
/// graph.add_weighted_edge(c, b, -1.0)?;
///
/// let tree = bellman_ford(&graph, a)?;
/// assert_eq!(tree.distance(b), 1.0);
/// assert_eq!(tree.parent_edge(b).map(|e| e.source), Some(c));
/// # Ok::<(), graphkit::Error>(())
/// ```
#[tracing::instrument(skip_all, fields(source = %source, vertices = graph.vertex_count()))]
pub fn bellman_ford<G: OutEdges>(graph: &G, source: VertexId) -> Result<ShortestPathTree> {
    let start = graph
        .vertex_index(source)
        .ok_or(Error::VertexNotFound(source))?;

    let ids: Vec<VertexId> = graph.vertex_ids().collect();
    let edges: Vec<(usize, usize, &Edge)> = graph
        .all_edges()
        .filter_map(|edge| {
            let from = graph.vertex_index(edge.source)?;
            let to = graph.vertex_index(edge.target)?;
            Some((from, to, edge))
        })
        .collect();

    let mut distances = vec![f64::INFINITY; ids.len()];
    let mut parents: Vec<Option<Edge>> = vec![None; ids.len()];
    distances[start] = 0.0;

    let mut passes = 0;
    for _ in 1..ids.len() {
        passes += 1;
        let mut relaxed = false;
        for &(from, to, edge) in &edges {
            if !distances[from].is_finite() {
                continue;
            }
            let candidate = distances[from] + edge.weight;
            if candidate < distances[to] {
                trace!(edge = %edge, distance = candidate, "relaxed");
                distances[to] = candidate;
                parents[to] = Some(*edge);
                relaxed = true;
            }
        }
        if !relaxed {
            break;
        }
    }

    let cycle = edges.iter().find(|&&(from, to, edge)| {
        distances[from].is_finite() && distances[from] + edge.weight < distances[to]
    });
    if let Some((_, _, edge)) = cycle {
        debug!(passes, edge = %edge, "negative cycle reachable from source");
        return Err(Error::NegativeCycle);
    }

    debug!(passes, edges = edges.len(), "bellman-ford finished");
    Ok(ShortestPathTree::from_dense(source, &ids, &distances, &parents))
}
