//! Minimum spanning trees.
//!
//! Both algorithms treat every directed edge as an undirected connection and
//! return a new [`Graph`] with the same vertices as the input (same handles and
//! payloads). Each tree edge appears in both directions, so the tree can be
//! walked from any vertex. On a disconnected graph the result is a minimum
//! spanning forest.
//!
//! The disjoint-set strategy is a type parameter (`*_with`) or a runtime
//! [`UnionFindKind`] (`*_with_kind`); the plain functions use [`QuickUnionRank`].
//!
//! | Algorithm | Cost |
//! |-----------|------|
//! | [`kruskal`] | O(E log E) |
//! | [`boruvka`] | O(E log V) rounds-bounded |
//!
//! [`UnionFindKind`]: crate::structures::UnionFindKind
//! [`QuickUnionRank`]: crate::structures::QuickUnionRank

mod boruvka;
mod kruskal;

pub use boruvka::{boruvka, boruvka_with, boruvka_with_kind};
pub use kruskal::{kruskal, kruskal_with, kruskal_with_kind};

use crate::{
    graph::{Edge, Graph},
    Result,
};

/// Returns the total weight of a tree built by [`kruskal`] or [`boruvka`].
///
/// Every tree edge is stored twice, so this is half of [`Graph::total_weight`].
#[must_use]
pub fn tree_weight<D>(tree: &Graph<D>) -> f64 {
    tree.total_weight() / 2.0
}

/// Inserts `edge` into `tree` in both directions with its weight.
fn add_undirected<D>(tree: &mut Graph<D>, edge: &Edge) -> Result<()> {
    tree.add_weighted_edge(edge.source, edge.target, edge.weight)?;
    tree.add_weighted_edge(edge.target, edge.source, edge.weight)?;
    Ok(())
}
