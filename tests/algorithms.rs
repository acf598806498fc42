//! Integration tests for the graph algorithms.
//!
//! Fixed scenarios pin down known results; randomized scenarios use a seeded
//! `StdRng` and compare algorithms against each other or against brute force.

use std::collections::HashSet;

use graphkit::{
    algorithms::{
        bellman_ford, bfs, boruvka, boruvka_with_kind, dfs, dijkstra, dijkstra_with_arity,
        floyd_warshall, kruskal, kruskal_with_kind, tree_weight,
    },
    io::parse_edge_list,
    structures::UnionFindKind,
    Error, Graph, VertexId,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

const SEEDS: std::ops::Range<u64> = 0..25;

/// Creates `vertices` vertices and `edges` random arcs with weights in `weights`.
fn random_graph(
    rng: &mut StdRng,
    vertices: usize,
    edges: usize,
    weights: std::ops::Range<f64>,
) -> (Graph<usize>, Vec<VertexId>) {
    let mut graph = Graph::new();
    let ids: Vec<VertexId> = (0..vertices).map(|i| graph.add_vertex(i)).collect();
    for _ in 0..edges {
        let x = ids[rng.gen_range(0..vertices)];
        let y = ids[rng.gen_range(0..vertices)];
        // Integral weights keep sums exact
        let weight = rng.gen_range(weights.clone()).round();
        graph.add_weighted_edge(x, y, weight).unwrap();
    }
    (graph, ids)
}

/// Vertices reachable from `source`, by fixpoint over the edge set.
fn reachable(graph: &Graph<usize>, source: VertexId) -> HashSet<VertexId> {
    let mut seen = HashSet::from([source]);
    loop {
        let before = seen.len();
        for edge in graph.edges() {
            if seen.contains(&edge.source) {
                seen.insert(edge.target);
            }
        }
        if seen.len() == before {
            return seen;
        }
    }
}

#[test]
fn bellman_ford_detects_negative_cycle() {
    let list = parse_edge_list("0\t1\t1\n1\t2\t-3\n2\t1\t1\n").unwrap();
    let source = list.vertex(0).unwrap();
    assert!(matches!(
        bellman_ford(&list.graph, source),
        Err(Error::NegativeCycle)
    ));
}

#[test]
fn floyd_warshall_prefers_detour() {
    let list = parse_edge_list("0\t1\t2\n1\t2\t2\n0\t2\t10\n").unwrap();
    let (a, c) = (list.vertex(0).unwrap(), list.vertex(2).unwrap());
    let paths = floyd_warshall(&list.graph).unwrap();
    assert_eq!(paths.path_weight(a, c), 4.0);
}

#[test]
fn spanning_trees_of_weighted_square() {
    let list = parse_edge_list("0 1 1\n1 2 2\n2 3 3\n3 0 4\n").unwrap();
    let by_kruskal = kruskal(&list.graph).unwrap();
    let by_boruvka = boruvka(&list.graph).unwrap();

    assert_eq!(tree_weight(&by_kruskal), 6.0);
    assert_eq!(tree_weight(&by_boruvka), 6.0);
    for tree in [&by_kruskal, &by_boruvka] {
        assert_eq!(tree.vertex_count(), 4);
        assert_eq!(tree.edge_count(), 6);
        for edge in tree.edges() {
            assert!(tree.are_adjacent(edge.target, edge.source).is_some());
        }
    }
}

#[test]
fn dijkstra_rejects_negative_weight() {
    let list = parse_edge_list("0 1 2\n1 2 -1\n").unwrap();
    match dijkstra(&list.graph, list.vertex(0).unwrap()) {
        Err(Error::NegativeWeight { weight, .. }) => assert_eq!(weight, -1.0),
        other => panic!("expected NegativeWeight, got {other:?}"),
    }
}

#[test]
fn algorithms_reject_unknown_source() {
    let mut graph: Graph<usize> = Graph::new();
    let kept = graph.add_vertex(0);
    let removed = graph.add_vertex(1);
    graph.add_edge(kept, removed).unwrap();
    graph.remove_vertex(removed);

    assert!(matches!(bellman_ford(&graph, removed), Err(Error::VertexNotFound(_))));
    assert!(matches!(dijkstra(&graph, removed), Err(Error::VertexNotFound(_))));
    assert!(bfs(&graph, removed).is_empty());
    assert_eq!(dfs(&graph, removed).len(), 1);
    assert!(graph.add_edge(kept, removed).is_err());
}

#[test]
fn algorithms_after_vertex_removal() {
    // Removing a vertex moves another one internally; handles must stay valid
    let list = parse_edge_list("0 1 1\n1 2 1\n2 3 1\n0 3 5\n3 4 1\n").unwrap();
    let mut graph = list.graph;
    let v: Vec<VertexId> = list.vertices;
    graph.remove_vertex(v[1]);

    let tree = dijkstra(&graph, v[0]).unwrap();
    assert_eq!(tree.distance(v[3]), 5.0);
    assert_eq!(tree.distance(v[4]), 6.0);
    assert!(!tree.is_reachable(v[2]));

    let paths = floyd_warshall(&graph).unwrap();
    assert_eq!(paths.distance(v[0], v[4]), 6.0);
    assert_eq!(paths.distance(v[2], v[4]), 2.0);
}

#[test]
fn bfs_visits_exactly_the_reachable_set() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let (graph, ids) = random_graph(&mut rng, 30, 45, 1.0..2.0);
        let source = ids[rng.gen_range(0..ids.len())];
        let visits = bfs(&graph, source);

        let visited: HashSet<VertexId> = visits.iter().map(|v| v.vertex).collect();
        assert_eq!(visited.len(), visits.len(), "seed {seed}: vertex visited twice");
        assert_eq!(visited, reachable(&graph, source), "seed {seed}");

        // Levels never decrease, and each parent sits exactly one level up
        assert!(visits.windows(2).all(|w| w[0].depth <= w[1].depth));
        for visit in &visits[1..] {
            let parent = visit.parent.unwrap();
            let parent = visits.iter().find(|v| v.vertex == parent).unwrap();
            assert_eq!(parent.depth + 1, visit.depth, "seed {seed}");
            assert!(graph.are_adjacent(parent.vertex, visit.vertex).is_some());
        }

        // BFS depth equals the unit-weight shortest distance
        let mut unit = Graph::new();
        let unit_ids: Vec<VertexId> = ids.iter().map(|&v| unit.add_vertex(v)).collect();
        for edge in graph.edges() {
            let (x, y) = (
                *graph.vertex(edge.source).unwrap(),
                *graph.vertex(edge.target).unwrap(),
            );
            unit.add_edge(unit_ids[x], unit_ids[y]).unwrap();
        }
        let tree = dijkstra(&unit, source).unwrap();
        for visit in &visits {
            assert_eq!(tree.distance(visit.vertex), visit.depth as f64);
        }
    }
}

#[test]
fn dfs_times_form_a_laminar_family() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let (graph, ids) = random_graph(&mut rng, 25, 40, 1.0..2.0);
        let visits = dfs(&graph, ids[rng.gen_range(0..ids.len())]);

        assert_eq!(visits.len(), graph.vertex_count(), "seed {seed}");
        let mut times: Vec<usize> = visits
            .iter()
            .flat_map(|v| [v.discovery, v.finish])
            .collect();
        times.sort_unstable();
        assert_eq!(times, (1..=2 * visits.len()).collect::<Vec<_>>());

        for x in &visits {
            assert!(x.discovery < x.finish);
            for y in &visits {
                let disjoint = x.finish < y.discovery || y.finish < x.discovery;
                assert!(
                    disjoint || x.is_ancestor_of(y) || y.is_ancestor_of(x),
                    "seed {seed}: {x:?} and {y:?} overlap"
                );
            }
        }

        // Discovery order is record order
        assert!(visits.windows(2).all(|w| w[0].discovery < w[1].discovery));
    }
}

#[test]
fn dijkstra_agrees_with_bellman_ford() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let (graph, ids) = random_graph(&mut rng, 40, 160, 0.0..20.0);
        let source = ids[0];

        let expected = bellman_ford(&graph, source).unwrap();
        for arity in [2, 3, 4, 7] {
            let tree = dijkstra_with_arity(&graph, source, arity).unwrap();
            for &vertex in &ids {
                assert_eq!(
                    tree.distance(vertex),
                    expected.distance(vertex),
                    "seed {seed}, arity {arity}"
                );
                if let Some(path) = tree.path_to(vertex) {
                    let weight: f64 = path.iter().map(|e| e.weight).sum();
                    assert_eq!(weight, tree.distance(vertex));
                }
            }
        }
    }
}

#[test]
fn floyd_warshall_agrees_with_bellman_ford() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        // Non-negative weights rule out negative cycles
        let (graph, ids) = random_graph(&mut rng, 15, 50, 0.0..10.0);
        let paths = floyd_warshall(&graph).unwrap();

        for &x in &ids {
            let tree = bellman_ford(&graph, x).unwrap();
            for &y in &ids {
                assert_eq!(paths.distance(x, y), tree.distance(y), "seed {seed}");
                assert_eq!(paths.path_weight(x, y), tree.distance(y), "seed {seed}");
            }
        }
    }
}

#[test]
fn negative_cycle_reported_by_both_algorithms() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let (mut graph, ids) = random_graph(&mut rng, 12, 20, 1.0..5.0);
        // Close a negative triangle reachable from vertex 0
        graph.add_weighted_edge(ids[0], ids[1], 1.0).unwrap();
        graph.add_weighted_edge(ids[1], ids[2], 1.0).unwrap();
        graph.add_weighted_edge(ids[2], ids[1], -100.0).unwrap();

        assert!(matches!(bellman_ford(&graph, ids[0]), Err(Error::NegativeCycle)));
        assert!(matches!(floyd_warshall(&graph), Err(Error::NegativeCycle)));
    }
}

#[test]
fn spanning_trees_agree_across_algorithms_and_strategies() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let (graph, ids) = random_graph(&mut rng, 30, 70, 1.0..50.0);
        let expected = tree_weight(&kruskal(&graph).unwrap());

        for kind in [
            UnionFindKind::QuickFind,
            UnionFindKind::QuickFindSize,
            UnionFindKind::QuickUnionRank,
        ] {
            let by_kruskal = kruskal_with_kind(&graph, kind).unwrap();
            let by_boruvka = boruvka_with_kind(&graph, kind).unwrap();
            assert_eq!(tree_weight(&by_kruskal), expected, "seed {seed}, {kind}");
            assert_eq!(tree_weight(&by_boruvka), expected, "seed {seed}, {kind}");
            assert_eq!(by_kruskal.edge_count(), by_boruvka.edge_count());
        }

        // A spanning forest connects exactly what the input connects
        let tree = boruvka(&graph).unwrap();
        let undirected = {
            let mut g = graph.clone();
            for edge in graph.edges() {
                g.add_weighted_edge(edge.target, edge.source, edge.weight)
                    .unwrap();
            }
            g
        };
        for &v in &ids {
            let in_tree: HashSet<VertexId> = bfs(&tree, v).iter().map(|x| x.vertex).collect();
            assert_eq!(in_tree, reachable(&undirected, v), "seed {seed}");
        }
    }
}
