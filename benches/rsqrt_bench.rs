//! Benchmarks for the fast inverse square root against the standard library

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use fisr::bench::{generate_samples, BenchConfig};
use fisr::ieee754::binary_string;
use fisr::rsqrt::{approx_inv_sqrt, initial_guess, reference_inv_sqrt};

/// Benchmark a single call on the demo value
fn bench_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar");

    group.bench_function("reference", |b| {
        b.iter(|| reference_inv_sqrt(black_box(18.75)))
    });
    group.bench_function("approx", |b| b.iter(|| approx_inv_sqrt(black_box(18.75))));
    group.bench_function("initial_guess", |b| {
        b.iter(|| initial_guess(black_box(18.75)))
    });

    group.finish();
}

/// Benchmark a pass over random inputs of varying length
fn bench_slices(c: &mut Criterion) {
    let mut group = c.benchmark_group("slice");

    for &size in &[64usize, 1024, 50_000] {
        let inputs = create_inputs(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("reference_{}", size), |b| {
            b.iter(|| {
                let out: Vec<f32> = inputs.iter().map(|&x| reference_inv_sqrt(x)).collect();
                black_box(out)
            })
        });

        group.bench_function(format!("approx_{}", size), |b| {
            b.iter(|| {
                let out: Vec<f32> = inputs.iter().map(|&x| approx_inv_sqrt(x)).collect();
                black_box(out)
            })
        });
    }

    group.finish();
}

/// Benchmark the binary rendering
fn bench_binary_string(c: &mut Criterion) {
    c.bench_function("binary_string", |b| {
        b.iter(|| binary_string(black_box(18.75)))
    });
}

/// Seeded inputs in [0, 100)
fn create_inputs(size: usize) -> Vec<f32> {
    let config = BenchConfig {
        samples: size,
        seed: Some(42),
        ..BenchConfig::default()
    };
    generate_samples(&config).unwrap()
}

criterion_group!(benches, bench_scalar, bench_slices, bench_binary_string);
criterion_main!(benches);
