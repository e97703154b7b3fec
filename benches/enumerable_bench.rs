//! Benchmark for the enumeration operations across container shapes.
//!
//! Compares each operation on a sequence, a mapping and a range of the same
//! size against the equivalent standard library iterator pipeline.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use enumerables::prelude::*;
use std::hint::black_box;

fn sequence_of(size: i64) -> Vec<Value> {
    (0..size).map(Value::from).collect()
}

fn mapping_of(size: i64) -> Mapping {
    (0..size).map(|index| (index, index * 2)).collect()
}

// =============================================================================
// my_map
// =============================================================================

fn benchmark_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("my_map");

    for size in [100, 1000, 10000] {
        let sequence = sequence_of(size);
        let mapping = mapping_of(size);
        let range = IntRange::exclusive(0, size);
        let standard: Vec<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("Sequence", size), &size, |bencher, _| {
            let doubled = Callable::unary(|value| value.as_integer().map(|value| value * 2));
            bencher.iter(|| black_box(sequence.my_map(doubled.clone())));
        });

        group.bench_with_input(BenchmarkId::new("Mapping", size), &size, |bencher, _| {
            let doubled = Callable::binary(|_key, value| value.as_integer().map(|value| value * 2));
            bencher.iter(|| black_box(mapping.my_map(doubled.clone())));
        });

        group.bench_with_input(BenchmarkId::new("Range", size), &size, |bencher, _| {
            let doubled = Callable::unary(|value| value.as_integer().map(|value| value * 2));
            bencher.iter(|| black_box(range.my_map(doubled.clone())));
        });

        group.bench_with_input(BenchmarkId::new("Vec<i64>", size), &size, |bencher, _| {
            bencher.iter(|| {
                let doubled: Vec<i64> = standard.iter().map(|value| value * 2).collect();
                black_box(doubled)
            });
        });
    }

    group.finish();
}

// =============================================================================
// my_select
// =============================================================================

fn benchmark_select(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("my_select");

    for size in [100, 1000, 10000] {
        let sequence = sequence_of(size);
        let mapping = mapping_of(size);

        group.bench_with_input(BenchmarkId::new("Sequence", size), &size, |bencher, _| {
            let even = Callable::unary(|value| value.is_even());
            bencher.iter(|| black_box(sequence.my_select(even.clone())));
        });

        group.bench_with_input(BenchmarkId::new("Mapping", size), &size, |bencher, _| {
            let even_key = Callable::binary(|key, _value| key.is_even());
            bencher.iter(|| black_box(mapping.my_select(even_key.clone())));
        });
    }

    group.finish();
}

// =============================================================================
// Queries
// =============================================================================

fn benchmark_queries(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("queries");

    for size in [100, 1000, 10000] {
        let range = IntRange::exclusive(0, size);

        group.bench_with_input(BenchmarkId::new("my_all_block", size), &size, |bencher, _| {
            let non_negative = Callable::unary(|value| !value.is_negative());
            bencher.iter(|| black_box(range.my_all(non_negative.clone())));
        });

        group.bench_with_input(BenchmarkId::new("my_any_pattern", size), &size, |bencher, _| {
            bencher.iter(|| black_box(range.my_any(-1)));
        });

        group.bench_with_input(BenchmarkId::new("my_count_kind", size), &size, |bencher, _| {
            bencher.iter(|| black_box(range.my_count(ValueKind::Integer)));
        });
    }

    group.finish();
}

// =============================================================================
// my_inject
// =============================================================================

fn benchmark_inject(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("my_inject");

    for size in [100, 1000, 10000] {
        let sequence = sequence_of(size);
        let standard: Vec<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("Operator::Add", size), &size, |bencher, _| {
            bencher.iter(|| black_box(sequence.my_inject(None, Operator::Add)));
        });

        group.bench_with_input(BenchmarkId::new("Block", size), &size, |bencher, _| {
            let sum = Callable::binary(|accumulator, value| {
                accumulator
                    .as_integer()
                    .zip(value.as_integer())
                    .map(|(accumulator, value)| accumulator + value)
            });
            bencher.iter(|| black_box(sequence.my_inject(Value::from(0), sum.clone())));
        });

        group.bench_with_input(BenchmarkId::new("Iterator::sum", size), &size, |bencher, _| {
            bencher.iter(|| black_box(standard.iter().sum::<i64>()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_map,
    benchmark_select,
    benchmark_queries,
    benchmark_inject
);
criterion_main!(benches);
