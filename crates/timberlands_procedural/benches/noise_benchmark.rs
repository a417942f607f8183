//! Benchmark for noise generation performance.
//!
//! Run with: cargo bench --package timberlands_procedural --bench noise_benchmark

// criterion_group! expands to undocumented public functions.
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use timberlands_procedural::{NoiseField, WorldSeed};

fn benchmark_construction(c: &mut Criterion) {
    c.bench_function("noise_field_new", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            black_box(NoiseField::new(WorldSeed::new(black_box(seed))))
        });
    });
}

fn benchmark_single_sample(c: &mut Criterion) {
    let noise = NoiseField::new(WorldSeed::new(42));

    c.bench_function("single_noise_sample", |b| {
        let mut x = 0.0f32;
        b.iter(|| {
            x += 0.1;
            black_box(noise.sample(black_box(x), black_box(x * 0.7)))
        });
    });
}

fn benchmark_million_samples(c: &mut Criterion) {
    let noise = NoiseField::new(WorldSeed::new(42));

    let mut group = c.benchmark_group("million_samples");
    group.throughput(Throughput::Elements(1_000_000));
    group.sample_size(10);

    group.bench_function("1M_noise_samples", |b| {
        b.iter(|| {
            for i in 0..1_000_000 {
                let x = (i % 1000) as f32 * 0.1;
                let y = (i / 1000) as f32 * 0.1;
                black_box(noise.sample(x, y));
            }
        });
    });

    group.finish();
}

fn benchmark_fractal_noise(c: &mut Criterion) {
    let noise = NoiseField::new(WorldSeed::new(42));

    c.bench_function("fractal_noise_6_octaves", |b| {
        let mut x = 0.0f32;
        b.iter(|| {
            x += 0.1;
            black_box(noise.fractal(black_box(x), black_box(x * 0.7), 6, 0.5, 2.0))
        });
    });
}

criterion_group!(
    benches,
    benchmark_construction,
    benchmark_single_sample,
    benchmark_million_samples,
    benchmark_fractal_noise
);
criterion_main!(benches);
