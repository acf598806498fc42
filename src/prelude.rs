//! # graphkit Prelude
//!
//! This module provides a convenient prelude for the most commonly used types,
//! traits and functions of the graphkit library.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all graphkit operations
pub use crate::Error;

/// The result type used throughout graphkit
pub use crate::Result;

// ================================================================================================
// Graph Store
// ================================================================================================

/// Graph store, handles and edges
pub use crate::graph::{Edge, EdgeId, Graph, VertexId, DEFAULT_WEIGHT};

/// Traits the algorithms are generic over
pub use crate::graph::{GraphBase, OutEdges};

// ================================================================================================
// Data Structures
// ================================================================================================

/// Addressable d-ary heap
pub use crate::structures::{DHeap, HeapHandle};

/// Union-find contract, strategies and runtime selection
pub use crate::structures::{
    DisjointSets, QuickFind, QuickFindSize, QuickUnionRank, SetId, UnionFind, UnionFindKind,
};

// ================================================================================================
// Algorithms
// ================================================================================================

/// Traversal
pub use crate::algorithms::{bfs, dfs, DfsVisit, VisitedVertex};

/// Shortest paths
pub use crate::algorithms::{
    bellman_ford, dijkstra, dijkstra_with_arity, floyd_warshall, AllPairsShortestPaths,
    ShortestPathTree,
};

/// Spanning trees
pub use crate::algorithms::{
    boruvka, boruvka_with, boruvka_with_kind, kruskal, kruskal_with, kruskal_with_kind,
    tree_weight,
};

// ================================================================================================
// Input
// ================================================================================================

/// Edge-list loading
pub use crate::io::{parse_edge_list, read_edge_list, EdgeList, MAX_VERTEX_INDEX};
