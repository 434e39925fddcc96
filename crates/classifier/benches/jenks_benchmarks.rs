//! Benchmarks for natural-breaks computation and classification.
//!
//! Run with: cargo bench --package classifier --bench jenks_benchmarks

use classifier::Breakpoints;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

/// Generate a sample with a few clusters, shaped like real yield data.
fn generate_clustered_sample(n: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    let centers = [1.5, 4.0, 9.0];
    (0..n)
        .map(|i| {
            let center = centers[i % centers.len()];
            center + rng.gen_range(-0.8..0.8)
        })
        .collect()
}

fn bench_compute_breaks(c: &mut Criterion) {
    let mut group = c.benchmark_group("jenks_compute");

    for &n in &[50usize, 250, 1000] {
        let sample = generate_clustered_sample(n);
        group.bench_with_input(BenchmarkId::new("k5", n), &sample, |b, sample| {
            b.iter(|| Breakpoints::compute(black_box(sample), 5));
        });
        group.bench_with_input(BenchmarkId::new("k10", n), &sample, |b, sample| {
            b.iter(|| Breakpoints::compute(black_box(sample), 10));
        });
    }

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let sample = generate_clustered_sample(250);
    let breaks = Breakpoints::compute(&sample, 5).unwrap();

    c.bench_function("classify", |b| {
        b.iter(|| {
            for &v in &sample {
                black_box(breaks.classify(black_box(Some(v))));
            }
        });
    });
}

criterion_group!(benches, bench_compute_breaks, bench_classify);
criterion_main!(benches);
