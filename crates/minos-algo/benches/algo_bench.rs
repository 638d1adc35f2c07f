//! Criterion benchmarks for the Minos algorithm layer.
//!
//! Run with:
//! ```bash
//! cargo bench -p minos-algo
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use minos_algo::{multistep_scc, shortest_paths};
use minos_graph::{DenseGraph, GraphLoader, MemoryGraphSource};
use uuid::Uuid;

// ── helpers ─────────────────────────────────────────────────────────────────

fn chain_source(n: usize) -> MemoryGraphSource {
    let mut src = MemoryGraphSource::new();
    let ids: Vec<Uuid> = (0..n).map(|_| src.add_node("Node")).collect();
    for w in ids.windows(2) {
        src.add_weighted_relationship(w[0], w[1], "EDGE", "cost", 1.0);
    }
    src
}

fn load(src: &MemoryGraphSource) -> DenseGraph {
    GraphLoader::new(src)
        .with_weight_property("cost", 1.0)
        .load()
        .unwrap()
}

/// `k` disjoint cycles of `len` nodes, chained with one-way bridges.
fn cycles_graph(k: usize, len: usize) -> DenseGraph {
    let mut src = MemoryGraphSource::new();
    let ids: Vec<Uuid> = (0..k * len).map(|_| src.add_node("Node")).collect();
    for c in 0..k {
        let base = c * len;
        for i in 0..len {
            src.add_relationship(ids[base + i], ids[base + (i + 1) % len], "EDGE");
        }
        if c > 0 {
            src.add_relationship(ids[base - len], ids[base], "EDGE");
        }
    }
    GraphLoader::new(&src).load().unwrap()
}

// ── loader ──────────────────────────────────────────────────────────────────

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("loader/load");

    for &n in &[100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("chain", n), &n, |b, &n| {
            let src = chain_source(n);
            b.iter(|| load(&src));
        });
    }

    group.finish();
}

// ── shortest paths ──────────────────────────────────────────────────────────

fn bench_shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("algo/shortest_paths");

    for &n in &[100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("chain", n), &n, |b, &n| {
            let graph = load(&chain_source(n));
            b.iter(|| shortest_paths(&graph, 0).unwrap());
        });
    }

    group.finish();
}

// ── scc ─────────────────────────────────────────────────────────────────────

fn bench_scc(c: &mut Criterion) {
    let mut group = c.benchmark_group("algo/multistep_scc");

    for &k in &[4usize, 16, 64] {
        group.bench_with_input(BenchmarkId::new("cycles_x250", k), &k, |b, &k| {
            let graph = cycles_graph(k, 250);
            b.iter(|| multistep_scc(&graph));
        });
    }

    group.finish();
}

// ── criterion wiring ────────────────────────────────────────────────────────

criterion_group!(benches, bench_load, bench_shortest_paths, bench_scc);
criterion_main!(benches);
