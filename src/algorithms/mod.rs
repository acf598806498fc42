//! Graph algorithms.
//!
//! Every algorithm borrows a graph immutably, owns its working state for the
//! duration of one call and recomputes its result from scratch.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`bfs`] - Breadth-first search with parents and levels
//! - [`dfs`] - Depth-first search with discovery and finish times
//!
//! ## Single-Source Shortest Paths
//!
//! - [`bellman_ford`] - Negative weights allowed, reports negative cycles
//! - [`dijkstra`] / [`dijkstra_with_arity`] - Non-negative weights, d-ary heap
//! - [`ShortestPathTree`] - Result of both
//!
//! ## All-Pairs Shortest Paths
//!
//! - [`floyd_warshall`] - Dense distance and next-hop matrices
//! - [`AllPairsShortestPaths`] - Result with path reconstruction
//!
//! ## Minimum Spanning Tree
//!
//! - [`kruskal`] - Sorted edges plus union-find
//! - [`boruvka`] - Rounds of cheapest outgoing edges per component
//! - [`tree_weight`] - Total weight of a returned tree
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | BFS/DFS | O(V + E) | Reachability, levels, tree structure |
//! | Bellman-Ford | O(V·E) | Negative weights, cycle detection |
//! | Dijkstra | O((V + E) log V) | Non-negative weights |
//! | Floyd-Warshall | O(V³) | Dense graphs, every pair |
//! | Kruskal / Boruvka | O(E log E) | Spanning trees |
//!
//! # Generic Graphs
//!
//! Traversal and shortest-path algorithms are generic over
//! [`OutEdges`](crate::graph::OutEdges). The spanning-tree algorithms build a
//! new [`Graph`](crate::Graph) and therefore take one directly.
//!
//! # Examples
//!
//! ```rust
//! use graphkit::{algorithms, Graph};
//!
//! let mut graph: Graph<&str> = Graph::new();
//! let a = graph.add_vertex("A");
//! let b = graph.add_vertex("B");
//! let c = graph.add_vertex("C");
//! graph.add_weighted_edge(a, b, 1.0)?;
//! graph.add_weighted_edge(b, c, 2.0)?;
//! graph.add_weighted_edge(a, c, 5.0)?;
//!
//! let tree = algorithms::dijkstra(&graph, a)?;
//! assert_eq!(tree.distance(c), 3.0);
//!
//! let paths = algorithms::floyd_warshall(&graph)?;
//! assert_eq!(paths.distance(a, c), 3.0);
//!
//! let mst = algorithms::kruskal(&graph)?;
//! assert_eq!(algorithms::tree_weight(&mst), 3.0);
//! # Ok::<(), graphkit::Error>(())
//! ```

mod apsp;
mod mst;
mod sssp;
mod traversal;

pub use apsp::{floyd_warshall, AllPairsShortestPaths};
pub use mst::{
    boruvka, boruvka_with, boruvka_with_kind, kruskal, kruskal_with, kruskal_with_kind,
    tree_weight,
};
pub use sssp::{bellman_ford, dijkstra, dijkstra_with_arity, ShortestPathTree};
pub use traversal::{bfs, dfs, DfsVisit, VisitedVertex};
