//! Dijkstra shortest paths on a d-ary heap.

use tracing::{debug, trace};

use crate::{
    algorithms::sssp::ShortestPathTree,
    graph::{Edge, OutEdges, VertexId},
    structures::{DHeap, HeapHandle, DEFAULT_ARITY},
    Error, Result,
};

/// Computes shortest paths from `source` on a graph with non-negative weights.
///
/// Uses a [`DHeap`] with the default arity of 4. See [`dijkstra_with_arity`].
///
/// # Errors
///
/// - [`Error::VertexNotFound`] if `source` is not in the graph
/// - [`Error::NegativeWeight`] if any edge has a negative weight
///
/// # Examples
///
/// ```rust
/// use graphkit::{algorithms::dijkstra, Graph};
///
/// let mut graph: Graph<&str> = Graph::new();
/// let a = graph.add_vertex("A");
/// let b = graph.add_vertex("B");
/// let c = graph.add_vertex("C");
/// graph.add_weighted_edge(a, b, 7.0)?;
/// graph.add_weighted_edge(a, c, 2.0)?;
/// graph.add_weighted_edge(c, b, 3.0)?;
///
/// let tree = dijkstra(&graph, a)?;
/// assert_eq!(tree.distance(b), 5.0);
/// assert_eq!(tree.path_to(b).map(|path| path.len()), Some(2));
/// # Ok::<(), graphkit::Error>(())
/// ```
pub fn dijkstra<G: OutEdges>(graph: &G, source: VertexId) -> Result<ShortestPathTree> {
    dijkstra_with_arity(graph, source, DEFAULT_ARITY)
}

/// Computes shortest paths from `source` using a heap with `arity` children per node.
///
/// Each vertex gets a heap entry the first time its distance improves; later
/// improvements lower that entry's key in place. A vertex is settled when it
/// leaves the heap and its outgoing edges are then relaxed exactly once.
///
/// Negative weights would break the settle order, so every edge is checked
/// before the search starts.
///
/// # Arguments
///
/// * `graph` - The graph to search
/// * `source` - The vertex distances are measured from
/// * `arity` - Children per heap node; larger values favor dense graphs
///
/// # Errors
///
/// - [`Error::InvalidArity`] if `arity < 2`
/// - [`Error::VertexNotFound`] if `source` is not in the graph
/// - [`Error::NegativeWeight`] for the first edge found with a negative weight
///
/// # Complexity
///
/// - Time: O(V·d·log_d V + E·log_d V)
/// - Space: O(V)
#[tracing::instrument(skip_all, fields(source = %source, arity = arity, vertices = graph.vertex_count()))]
pub fn dijkstra_with_arity<G: OutEdges>(
    graph: &G,
    source: VertexId,
    arity: usize,
) -> Result<ShortestPathTree> {
    let mut heap: DHeap<f64, usize> = DHeap::with_arity(arity)?;
    let start = graph
        .vertex_index(source)
        .ok_or(Error::VertexNotFound(source))?;
    if let Some(edge) = graph.all_edges().find(|edge| edge.weight < 0.0) {
        debug!(edge = %edge, "negative edge weight");
        return Err(Error::NegativeWeight {
            edge: edge.id,
            weight: edge.weight,
        });
    }

    let ids: Vec<VertexId> = graph.vertex_ids().collect();
    let mut distances = vec![f64::INFINITY; ids.len()];
    let mut parents: Vec<Option<Edge>> = vec![None; ids.len()];
    let mut handles: Vec<Option<HeapHandle>> = vec![None; ids.len()];
    let mut settled = vec![false; ids.len()];
    let mut settled_count = 0;

    distances[start] = 0.0;
    handles[start] = Some(heap.insert(0.0, start));

    while let Some((distance, index)) = heap.delete_min() {
        settled[index] = true;
        settled_count += 1;

        for edge in graph.out_edges(ids[index]) {
            let Some(target) = graph.vertex_index(edge.target) else {
                continue;
            };
            if settled[target] {
                continue;
            }
            let candidate = distance + edge.weight;
            if candidate < distances[target] {
                trace!(edge = %edge, distance = candidate, "relaxed");
                distances[target] = candidate;
                parents[target] = Some(*edge);
                match handles[target] {
                    Some(handle) => {
                        heap.decrease_key(handle, candidate);
                    }
                    None => handles[target] = Some(heap.insert(candidate, target)),
                }
            }
        }
    }

    debug!(settled = settled_count, "dijkstra finished");
    Ok(ShortestPathTree::from_dense(source, &ids, &distances, &parents))
}
