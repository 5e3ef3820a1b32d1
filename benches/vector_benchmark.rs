// ============================================================================
// Fixed Vector Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Arithmetic - Operators across dimensions
// 2. Geometry - Cross product, length, angle
// 3. Construction - Compile-time vs run-time checked arity
// 4. Formatting - Display rendering
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fixed_vector::prelude::*;
use std::hint::black_box;

fn ramp<const N: usize>(offset: f64) -> FixedVector<f64, N> {
    FixedVector::new(std::array::from_fn(|i| offset + i as f64 * 0.5))
}

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn bench_arithmetic_dim<const N: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");
    let a = ramp::<N>(1.0);
    let b = ramp::<N>(-3.0);

    group.bench_with_input(BenchmarkId::new("add", N), &(a, b), |bench, &(a, b)| {
        bench.iter(|| black_box(black_box(a) + black_box(b)));
    });

    group.bench_with_input(BenchmarkId::new("scale", N), &a, |bench, &a| {
        bench.iter(|| black_box(black_box(a) * black_box(2.5)));
    });

    group.bench_with_input(BenchmarkId::new("dot", N), &(a, b), |bench, &(a, b)| {
        bench.iter(|| black_box(black_box(a) * black_box(b)));
    });

    group.finish();
}

fn benchmark_arithmetic(c: &mut Criterion) {
    bench_arithmetic_dim::<2>(c);
    bench_arithmetic_dim::<3>(c);
    bench_arithmetic_dim::<16>(c);
}

// ============================================================================
// Geometry Benchmarks
// ============================================================================

fn benchmark_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");
    let a = Vector3d::new([1.0, 2.0, 3.0]);
    let b = Vector3d::new([-4.0, 0.5, 2.0]);

    group.bench_function("cross", |bench| {
        bench.iter(|| black_box(black_box(a).cross(&black_box(b))));
    });

    group.bench_function("try_cross", |bench| {
        bench.iter(|| black_box(black_box(a).try_cross(&black_box(b))));
    });

    group.bench_function("length", |bench| {
        bench.iter(|| black_box(black_box(a).length()));
    });

    group.bench_function("angle_between", |bench| {
        bench.iter(|| black_box(black_box(a).angle_between(&black_box(b))));
    });

    group.finish();
}

// ============================================================================
// Construction Benchmarks
// ============================================================================

fn benchmark_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    let components = vec![1.0, 2.0, 3.0];

    group.bench_function("new", |bench| {
        bench.iter(|| black_box(Vector3d::new(black_box([1.0, 2.0, 3.0]))));
    });

    group.bench_function("from_slice", |bench| {
        bench.iter(|| black_box(Vector3d::from_slice(black_box(&components))));
    });

    group.bench_function("try_from_iter", |bench| {
        bench.iter(|| black_box(Vector3d::try_from_iter(black_box(components.iter().copied()))));
    });

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn benchmark_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    let v = Vector3d::new([1.0, -2.5, 3.125]);

    group.bench_function("to_string", |bench| {
        bench.iter(|| black_box(black_box(v).to_string()));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_arithmetic,
    benchmark_geometry,
    benchmark_construction,
    benchmark_formatting,
);
criterion_main!(benches);
