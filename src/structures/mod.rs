//! Auxiliary data structures used by the graph algorithms.
//!
//! - [`DHeap`]: addressable d-ary min-heap, the priority queue behind Dijkstra
//! - [`UnionFind`] and its strategies: disjoint sets, used by Kruskal and Boruvka

mod heap;
mod unionfind;

pub use heap::{DHeap, HeapHandle, DEFAULT_ARITY};
pub use unionfind::{
    DisjointSets, QuickFind, QuickFindSize, QuickUnionRank, SetId, UnionFind, UnionFindKind,
};
