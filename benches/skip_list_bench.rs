// Benchmark suite for the ranked skip list
//
// Mirrors the classic sorted-set workloads:
// - insert: build a list from random scores
// - get_by_rank / get_rank: rank lookups on a built list
// - delete: remove every entry by (score, item)
// - range: paginated score windows and rank windows

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use skiprank::SkipList;
use skiprank::range::{get_range_by_rank, get_range_by_score};

const SIZES: [usize; 3] = [100, 1_000, 10_000];

// Deterministic data so runs are comparable
fn make_test_data(n: usize, seed: u64) -> Vec<(f64, u32)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (rng.gen_range(0.0..100_000.0), rng.gen_range(0..1_000_000)))
        .collect()
}

fn build(data: &[(f64, u32)]) -> SkipList<u32> {
    let mut list = SkipList::seeded(42);
    for &(score, item) in data {
        list.insert(score, item);
    }
    list
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for n in SIZES {
        let data = make_test_data(n, 42);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, data| {
            b.iter(|| black_box(build(data)).len());
        });
    }
    group.finish();
}

fn bench_get_by_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_by_rank");
    for n in SIZES {
        let list = build(&make_test_data(n, 42));
        group.bench_with_input(BenchmarkId::from_parameter(n), &list, |b, list| {
            b.iter(|| {
                for i in 0..n.min(1000) {
                    black_box(list.get_by_rank(i % list.len()));
                }
            });
        });
    }
    group.finish();
}

fn bench_get_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_rank");
    for n in SIZES {
        let data = make_test_data(n, 42);
        let list = build(&data);
        group.bench_with_input(BenchmarkId::from_parameter(n), &list, |b, list| {
            b.iter(|| {
                for &(score, item) in data.iter().take(1000) {
                    black_box(list.get_rank(score, &item));
                }
            });
        });
    }
    group.finish();
}

fn bench_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete");
    for n in SIZES {
        let data = make_test_data(n, 42);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, data| {
            b.iter_batched(
                || build(data),
                |mut list| {
                    for &(score, item) in data {
                        list.delete(score, &item);
                    }
                    list.len()
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("range");
    let list = build(&make_test_data(10_000, 42));
    group.bench_function("by_score_page", |b| {
        b.iter(|| get_range_by_score(&list, 25_000.0, 75_000.0, 100, Some(50)).nodes.len());
    });
    group.bench_function("by_rank_reverse", |b| {
        b.iter(|| get_range_by_rank(&list, 5_000, 5_099, true).nodes.len());
    });
    group.bench_function("count_in_range", |b| {
        b.iter(|| list.count_in_range(black_box(25_000.0), black_box(75_000.0)));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_get_by_rank,
    bench_get_rank,
    bench_delete,
    bench_range
);
criterion_main!(benches);
