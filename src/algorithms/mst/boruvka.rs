//! Boruvka's minimum spanning tree.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::{
    algorithms::mst::add_undirected,
    graph::{Edge, Graph, GraphBase, VertexId},
    structures::{DisjointSets, QuickUnionRank, SetId, UnionFind, UnionFindKind},
    Result,
};

/// Orders edges by weight, then by id, so that every component agrees on
/// which of several equal-weight edges is the cheapest.
fn lighter(a: &Edge, b: &Edge) -> bool {
    match a.weight.total_cmp(&b.weight) {
        Ordering::Less => true,
        Ordering::Greater => false,
        Ordering::Equal => a.id < b.id,
    }
}

/// Computes a minimum spanning tree with Boruvka's algorithm.
///
/// Uses [`QuickUnionRank`] for the disjoint sets. See [`boruvka_with`].
///
/// # Errors
///
/// Only propagates errors from inserting tree edges, which cannot fail for
/// edges of `graph`.
///
/// # Examples
///
/// ```rust
/// use graphkit::{algorithms::{boruvka, tree_weight}, Graph};
///
/// let mut graph: Graph<u32> = Graph::new();
/// let v: Vec<_> = (0..4).map(|i| graph.add_vertex(i)).collect();
/// graph.add_weighted_edge(v[0], v[1], 1.0)?;
/// graph.add_weighted_edge(v[1], v[2], 2.0)?;
/// graph.add_weighted_edge(v[2], v[3], 3.0)?;
/// graph.add_weighted_edge(v[3], v[0], 4.0)?;
///
/// let tree = boruvka(&graph)?;
/// assert_eq!(tree_weight(&tree), 6.0);
/// # Ok::<(), graphkit::Error>(())
/// ```
pub fn boruvka<D: Clone>(graph: &Graph<D>) -> Result<Graph<D>> {
    boruvka_with::<QuickUnionRank<VertexId>, D>(graph)
}

/// Computes a minimum spanning tree with Boruvka's algorithm, using the
/// disjoint-set strategy `U`.
///
/// Works in rounds. Each round picks, for every component, the cheapest edge
/// leaving it, then adds all picked edges to the tree and merges their
/// components. An edge picked by both of its components is added once, since
/// its endpoints are already joined when it comes up the second time. The
/// number of components at least halves per round on connected input.
///
/// The loop ends when one component is left or a round finds no edge leaving
/// any component; the latter happens on disconnected input, which yields a
/// minimum spanning forest.
///
/// # Errors
///
/// Only propagates errors from inserting tree edges, which cannot fail for
/// edges of `graph`.
///
/// # Complexity
///
/// - Time: O(E log V) plus the union-find cost of `U`
/// - Space: O(V + E)
pub fn boruvka_with<U, D>(graph: &Graph<D>) -> Result<Graph<D>>
where
    U: UnionFind<VertexId> + Default,
    D: Clone,
{
    boruvka_in(graph, U::default())
}

/// Computes a minimum spanning tree with Boruvka's algorithm, using the
/// disjoint-set strategy selected by `kind`.
///
/// # Errors
///
/// Only propagates errors from inserting tree edges, which cannot fail for
/// edges of `graph`.
pub fn boruvka_with_kind<D: Clone>(graph: &Graph<D>, kind: UnionFindKind) -> Result<Graph<D>> {
    boruvka_in(graph, DisjointSets::new(kind))
}

#[tracing::instrument(skip_all, fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
fn boruvka_in<U, D>(graph: &Graph<D>, mut sets: U) -> Result<Graph<D>>
where
    U: UnionFind<VertexId>,
    D: Clone,
{
    let members: Vec<SetId> = graph.vertices().map(|v| sets.make_set(v)).collect();
    let edges: Vec<(SetId, SetId, &Edge)> = graph
        .edges()
        .filter_map(|edge| {
            let x = graph.vertex_index(edge.source)?;
            let y = graph.vertex_index(edge.target)?;
            Some((members[x], members[y], edge))
        })
        .collect();

    let mut tree = graph.empty_like();
    let mut rounds = 0;

    while sets.set_count() > 1 {
        rounds += 1;

        // Cheapest edge leaving each component, indexed by its representative
        let mut cheapest: Vec<Option<&Edge>> = vec![None; members.len()];
        for &(x, y, edge) in &edges {
            let (root_x, root_y) = (sets.find(x), sets.find(y));
            if root_x == root_y {
                continue;
            }
            for root in [root_x, root_y] {
                let slot = &mut cheapest[root.raw()];
                if slot.map_or(true, |best| lighter(edge, best)) {
                    *slot = Some(edge);
                }
            }
        }

        let mut added = 0;
        for edge in cheapest.into_iter().flatten() {
            let (Some(x), Some(y)) = (
                graph.vertex_index(edge.source),
                graph.vertex_index(edge.target),
            ) else {
                continue;
            };
            let (root_x, root_y) = (sets.find(members[x]), sets.find(members[y]));
            if root_x != root_y {
                sets.union(root_x, root_y);
                add_undirected(&mut tree, edge)?;
                added += 1;
            }
        }

        trace!(round = rounds, added, components = sets.set_count(), "round finished");
        if added == 0 {
            break;
        }
    }

    debug!(rounds, components = sets.set_count(), "boruvka finished");
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::{
        algorithms::mst::{kruskal, tree_weight},
        structures::{QuickFind, QuickFindSize},
        test::graph_from_arcs,
    };

    #[test]
    fn test_four_cycle() {
        let (graph, v) = graph_from_arcs(4, &[(0, 1, 1.0), (1, 2, 2.0), (2, 3, 3.0), (3, 0, 4.0)]);
        let tree = boruvka(&graph).unwrap();

        assert_eq!(tree_weight(&tree), 6.0);
        assert_eq!(tree.edge_count(), 6);
        assert!(tree.are_adjacent(v[0], v[3]).is_none());
    }

    #[test]
    fn test_edge_picked_twice_added_once() {
        // 0-1 is the cheapest edge of both singleton components
        let (graph, v) = graph_from_arcs(3, &[(0, 1, 1.0), (1, 2, 5.0)]);
        let tree = boruvka(&graph).unwrap();
        assert_eq!(tree.edge_count(), 4);
        assert_eq!(tree.out_degree(v[0]), 1);
        assert_eq!(tree_weight(&tree), 6.0);
    }

    #[test]
    fn test_equal_weights_no_cycle() {
        // Every edge ties; without a consistent tie-break a triangle could close
        let (graph, _) = graph_from_arcs(3, &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)]);
        let tree = boruvka(&graph).unwrap();
        assert_eq!(tree.edge_count(), 4);
        assert_eq!(tree_weight(&tree), 2.0);
    }

    #[test]
    fn test_disconnected_forest_terminates() {
        let (graph, _) = graph_from_arcs(5, &[(0, 1, 3.0), (1, 2, 1.0), (0, 2, 2.0), (3, 4, 7.0)]);
        let tree = boruvka(&graph).unwrap();
        assert_eq!(tree.edge_count(), 6);
        assert_eq!(tree_weight(&tree), 10.0);
    }

    #[test]
    fn test_isolated_vertices() {
        let (graph, _) = graph_from_arcs(3, &[]);
        let tree = boruvka(&graph).unwrap();
        assert_eq!(tree.vertex_count(), 3);
        assert_eq!(tree.edge_count(), 0);
    }

    #[test]
    fn test_agrees_with_kruskal_for_every_strategy() {
        let (graph, _) = graph_from_arcs(
            7,
            &[
                (0, 1, 7.0),
                (0, 3, 5.0),
                (1, 2, 8.0),
                (1, 3, 9.0),
                (1, 4, 7.0),
                (2, 4, 5.0),
                (3, 4, 15.0),
                (3, 5, 6.0),
                (4, 5, 8.0),
                (4, 6, 9.0),
                (5, 6, 11.0),
            ],
        );
        let expected = tree_weight(&kruskal(&graph).unwrap());
        assert_eq!(expected, 39.0);

        assert_eq!(tree_weight(&boruvka(&graph).unwrap()), expected);
        assert_eq!(tree_weight(&boruvka_with::<QuickFind<VertexId>, _>(&graph).unwrap()), expected);
        assert_eq!(tree_weight(&boruvka_with::<QuickFindSize<VertexId>, _>(&graph).unwrap()), expected);
        for kind in UnionFindKind::iter() {
            let tree = boruvka_with_kind(&graph, kind).unwrap();
            assert_eq!(tree_weight(&tree), expected);
            assert_eq!(tree.edge_count(), 12);
        }
    }
}
