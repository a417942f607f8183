//! Benchmark for block id hashing and size resolution.
//!
//! Run with: cargo bench --package timberlands_procedural --bench block_benchmark

// criterion_group! expands to undocumented public functions.
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use timberlands_procedural::{BlockKind, Dimensions, WorldBlock};
use timberlands_shared::Vec2;

fn benchmark_generate_id(c: &mut Criterion) {
    c.bench_function("generate_id_short_name", |b| {
        b.iter(|| black_box(WorldBlock::generate_id(black_box("NewBlock"), black_box(123))));
    });
}

fn benchmark_effective_size(c: &mut Criterion) {
    let (Ok(min), Ok(max)) = (Dimensions::new(300, 300), Dimensions::new(500, 500)) else {
        return;
    };
    let Ok(block) = WorldBlock::named("NewBlock", 123, BlockKind::Dynamic, min, max, Vec2::ZERO) else {
        return;
    };
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    c.bench_function("dynamic_effective_size", |b| {
        b.iter(|| black_box(block.effective_size(&mut rng)));
    });
}

criterion_group!(benches, benchmark_generate_id, benchmark_effective_size);
criterion_main!(benches);
