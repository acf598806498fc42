
pub use counting::*;

use crate::graph::{Graph, VertexId};

// Helper function to create a graph with vertices 0..vertices (payload = index)
// and the given weighted arcs between those indices
pub fn graph_from_arcs(vertices: usize, arcs: &[(usize, usize, f64)]) -> (Graph<usize>, Vec<VertexId>) {
    let mut graph = Graph::with_capacity(vertices);
    let ids: Vec<VertexId> = (0..vertices).map(|i| graph.add_vertex(i)).collect();
    for &(source, target, weight) in arcs {
        graph
            .add_weighted_edge(ids[source], ids[target], weight)
            .unwrap();
    }
    (graph, ids)
}
