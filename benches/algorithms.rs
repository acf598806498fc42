//! Benchmarks for the graph algorithms on seeded random graphs.
//!
//! - Shortest paths: Dijkstra per heap arity against Bellman-Ford
//! - All pairs: Floyd-Warshall on a small dense graph
//! - Spanning trees: Kruskal and Boruvka

extern crate graphkit;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use graphkit::{
    algorithms::{bellman_ford, boruvka, dijkstra_with_arity, floyd_warshall, kruskal},
    Graph, VertexId,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

/// Creates a connected graph: a random spanning chain plus `extra` random edges.
fn random_graph(vertices: usize, extra: usize, seed: u64) -> (Graph<usize>, Vec<VertexId>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::with_capacity(vertices);
    let ids: Vec<VertexId> = (0..vertices).map(|i| graph.add_vertex(i)).collect();

    for pair in ids.windows(2) {
        let weight = rng.gen_range(1.0..100.0);
        graph.add_weighted_edge(pair[0], pair[1], weight).unwrap();
        graph.add_weighted_edge(pair[1], pair[0], weight).unwrap();
    }
    for _ in 0..extra {
        let x = ids[rng.gen_range(0..vertices)];
        let y = ids[rng.gen_range(0..vertices)];
        graph
            .add_weighted_edge(x, y, rng.gen_range(1.0..100.0))
            .unwrap();
    }
    (graph, ids)
}

/// Benchmark single-source shortest paths on a sparse graph.
fn bench_shortest_paths(c: &mut Criterion) {
    let (graph, ids) = random_graph(2_000, 10_000, 7);

    let mut group = c.benchmark_group("sssp");
    for arity in [2, 4, 8] {
        group.bench_with_input(BenchmarkId::new("dijkstra", arity), &arity, |b, &arity| {
            b.iter(|| black_box(dijkstra_with_arity(&graph, ids[0], arity).unwrap()));
        });
    }
    group.bench_function("bellman_ford", |b| {
        b.iter(|| black_box(bellman_ford(&graph, ids[0]).unwrap()));
    });
    group.finish();
}

/// Benchmark all-pairs shortest paths on a small dense graph.
fn bench_all_pairs(c: &mut Criterion) {
    let (graph, _) = random_graph(150, 5_000, 11);

    c.bench_function("floyd_warshall_150", |b| {
        b.iter(|| black_box(floyd_warshall(&graph).unwrap()));
    });
}

/// Benchmark both spanning-tree algorithms on the same graph.
fn bench_spanning_trees(c: &mut Criterion) {
    let (graph, _) = random_graph(2_000, 10_000, 13);

    let mut group = c.benchmark_group("mst");
    group.bench_function("kruskal", |b| {
        b.iter(|| black_box(kruskal(&graph).unwrap()));
    });
    group.bench_function("boruvka", |b| {
        b.iter(|| black_box(boruvka(&graph).unwrap()));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_shortest_paths,
    bench_all_pairs,
    bench_spanning_trees
);
criterion_main!(benches);
