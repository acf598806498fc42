//! Kruskal's minimum spanning tree.

use tracing::debug;

use crate::{
    algorithms::mst::add_undirected,
    graph::{Edge, Graph, GraphBase, VertexId},
    structures::{DisjointSets, QuickUnionRank, SetId, UnionFind, UnionFindKind},
    Result,
};

/// Computes a minimum spanning tree with Kruskal's algorithm.
///
/// Uses [`QuickUnionRank`] for the disjoint sets. See [`kruskal_with`].
///
/// # Errors
///
/// Only propagates errors from inserting tree edges, which cannot fail for
/// edges of `graph`.
///
/// # Examples
///
/// ```rust
/// use graphkit::{algorithms::{kruskal, tree_weight}, Graph};
///
/// let mut graph: Graph<u32> = Graph::new();
/// let v: Vec<_> = (0..4).map(|i| graph.add_vertex(i)).collect();
/// graph.add_weighted_edge(v[0], v[1], 1.0)?;
/// graph.add_weighted_edge(v[1], v[2], 2.0)?;
/// graph.add_weighted_edge(v[2], v[3], 3.0)?;
/// graph.add_weighted_edge(v[3], v[0], 4.0)?;
///
/// let tree = kruskal(&graph)?;
/// assert_eq!(tree.edge_count(), 6);
/// assert_eq!(tree_weight(&tree), 6.0);
/// # Ok::<(), graphkit::Error>(())
/// ```
pub fn kruskal<D: Clone>(graph: &Graph<D>) -> Result<Graph<D>> {
    kruskal_with::<QuickUnionRank<VertexId>, D>(graph)
}

/// Computes a minimum spanning tree with Kruskal's algorithm, using the
/// disjoint-set strategy `U`.
///
/// Every vertex starts in its own set. The edges are sorted by weight, with a
/// stable sort so that equal weights keep the graph's edge order, and scanned
/// once: an edge joins the tree exactly when its endpoints are still in
/// different sets, which are then merged.
///
/// # Errors
///
/// Only propagates errors from inserting tree edges, which cannot fail for
/// edges of `graph`.
///
/// # Complexity
///
/// - Time: O(E log E) plus the union-find cost of `U`
/// - Space: O(V + E)
pub fn kruskal_with<U, D>(graph: &Graph<D>) -> Result<Graph<D>>
where
    U: UnionFind<VertexId> + Default,
    D: Clone,
{
    kruskal_in(graph, U::default())
}

/// Computes a minimum spanning tree with Kruskal's algorithm, using the
/// disjoint-set strategy selected by `kind`.
///
/// # Errors
///
/// Only propagates errors from inserting tree edges, which cannot fail for
/// edges of `graph`.
pub fn kruskal_with_kind<D: Clone>(graph: &Graph<D>, kind: UnionFindKind) -> Result<Graph<D>> {
    kruskal_in(graph, DisjointSets::new(kind))
}

#[tracing::instrument(skip_all, fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
fn kruskal_in<U, D>(graph: &Graph<D>, mut sets: U) -> Result<Graph<D>>
where
    U: UnionFind<VertexId>,
    D: Clone,
{
    let members: Vec<SetId> = graph.vertices().map(|v| sets.make_set(v)).collect();

    let mut edges: Vec<&Edge> = graph.edges().collect();
    edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut tree = graph.empty_like();
    let target = graph.vertex_count().saturating_sub(1);
    let mut added = 0;

    for edge in edges {
        if added == target {
            break;
        }
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

    debug!(tree_edges = added, components = sets.set_count(), "kruskal finished");
    Ok(tree)
}
