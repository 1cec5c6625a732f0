//! Benchmark for BalancedTree vs standard BTreeSet.
//!
//! Compares the AVL tree against Rust's standard BTreeSet for the operations
//! the driver times: batch insertion and membership probes.

use balanced_tree::BalancedTree;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::BTreeSet;
use std::hint::black_box;

/// Deterministic pseudo-random keys so runs are comparable.
fn scrambled_keys(size: i32) -> Vec<i32> {
    (0..size)
        .map(|index| index.wrapping_mul(7_919).wrapping_add(13) % (size * 4))
        .collect()
}

// =============================================================================
// insert Benchmark
// =============================================================================

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert");

    for size in [100, 1000, 10000] {
        let keys = scrambled_keys(size);

        group.bench_with_input(BenchmarkId::new("BalancedTree", size), &keys, |bencher, keys| {
            bencher.iter(|| {
                let mut tree = BalancedTree::new();
                for &key in keys {
                    tree.insert(black_box(key));
                }
                black_box(tree)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), &keys, |bencher, keys| {
            bencher.iter(|| {
                let mut set = BTreeSet::new();
                for &key in keys {
                    set.insert(black_box(key));
                }
                black_box(set)
            });
        });
    }

    group.finish();
}

// =============================================================================
// contains Benchmark
// =============================================================================

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("contains");

    for size in [100, 1000, 10000] {
        let keys = scrambled_keys(size);
        let tree: BalancedTree<i32> = keys.iter().copied().collect();
        let set: BTreeSet<i32> = keys.iter().copied().collect();

        group.bench_with_input(BenchmarkId::new("BalancedTree", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut hits = 0;
                for key in 0..size {
                    if tree.contains(&black_box(key)) {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut hits = 0;
                for key in 0..size {
                    if set.contains(&black_box(key)) {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });
    }

    group.finish();
}

// =============================================================================
// remove Benchmark
// =============================================================================

fn benchmark_remove(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remove");

    for size in [100, 1000, 10000] {
        let keys = scrambled_keys(size);
        let tree: BalancedTree<i32> = keys.iter().copied().collect();

        group.bench_with_input(BenchmarkId::new("BalancedTree", size), &keys, |bencher, keys| {
            bencher.iter_batched(
                || tree.clone(),
                |mut tree| {
                    for key in keys {
                        tree.remove(black_box(key));
                    }
                    black_box(tree)
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// =============================================================================
// iteration Benchmark
// =============================================================================

fn benchmark_iteration(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("iteration");

    for size in [100, 1000, 10000] {
        let tree: BalancedTree<i32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("in_order", size), &size, |bencher, _| {
            bencher.iter(|| black_box(tree.keys().copied().sum::<i32>()));
        });

        group.bench_with_input(BenchmarkId::new("level_order", size), &size, |bencher, _| {
            bencher.iter(|| black_box(tree.level_order().map(|node| *node.key()).sum::<i32>()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_contains,
    benchmark_remove,
    benchmark_iteration
);
criterion_main!(benches);
