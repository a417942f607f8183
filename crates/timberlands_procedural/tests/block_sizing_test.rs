//! # Block Sizing Tests
//!
//! Verifies the static/dynamic sizing contract of world blocks against real
//! seeded generators, and the reference block id.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use timberlands_procedural::{BlockKind, Dimensions, GenerationError, WorldBlock};
use timberlands_shared::Vec2;

fn dims(w: u16, h: u16) -> Dimensions {
    Dimensions::new(w, h).expect("test dimensions are non-zero")
}

fn reference_block(kind: BlockKind) -> WorldBlock {
    WorldBlock::new(
        WorldBlock::generate_id("NewBlock", 123),
        kind,
        dims(300, 300),
        dims(500, 500),
        Vec2::ZERO,
    )
    .expect("reference block is valid")
}

/// Test: "NewBlock" under seed 123 always hashes to the same id.
#[test]
fn test_reference_id_is_stable() {
    // 123, then hash * 31 + c over "NewBlock"
    assert_eq!(WorldBlock::generate_id("NewBlock", 123), 107_144_690_526_312);
    assert_eq!(reference_block(BlockKind::Static).id(), 107_144_690_526_312);
}

/// Test: static blocks ignore the generator state entirely.
#[test]
fn test_static_block_is_always_min_size() {
    let block = reference_block(BlockKind::Static);
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    for _ in 0..1000 {
        assert_eq!(block.effective_size(&mut rng), dims(300, 300));
    }
}

/// Test: dynamic blocks stay inside the bounds and reach both ends.
#[test]
fn test_dynamic_block_within_inclusive_bounds() {
    let block = reference_block(BlockKind::Dynamic);

    let mut width_min_hit = false;
    let mut width_max_hit = false;
    let mut height_min_hit = false;
    let mut height_max_hit = false;

    for seed in 0..100u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..100 {
            let size = block.effective_size(&mut rng);
            assert!(
                (300..=500).contains(&size.width()),
                "width {} out of bounds",
                size.width()
            );
            assert!(
                (300..=500).contains(&size.height()),
                "height {} out of bounds",
                size.height()
            );

            width_min_hit |= size.width() == 300;
            width_max_hit |= size.width() == 500;
            height_min_hit |= size.height() == 300;
            height_max_hit |= size.height() == 500;
        }
    }

    assert!(width_min_hit && width_max_hit, "both width bounds should be reachable");
    assert!(height_min_hit && height_max_hit, "both height bounds should be reachable");
}

/// Test: width and height are drawn independently.
#[test]
fn test_dynamic_axes_are_not_correlated() {
    let block = reference_block(BlockKind::Dynamic);
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    let mut equal = 0;
    let trials = 10_000;
    for _ in 0..trials {
        let size = block.effective_size(&mut rng);
        if size.width() == size.height() {
            equal += 1;
        }
    }

    // 201 values per axis: P(equal) is about 0.5%. Correlated draws would be ~100%.
    assert!(equal < trials / 20, "axes look correlated: {equal} equal pairs");
}

/// Test: the same generator seed replays the same sizes.
#[test]
fn test_dynamic_sizes_replay_from_seed() {
    let block = reference_block(BlockKind::Dynamic);

    let run = |seed: u64| -> Vec<Dimensions> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        (0..50).map(|_| block.effective_size(&mut rng)).collect()
    };

    assert_eq!(run(5), run(5));
    assert_ne!(run(5), run(6));
}

/// Test: invalid construction is rejected.
#[test]
fn test_invalid_blocks_rejected() {
    let zero_id = WorldBlock::new(0, BlockKind::Static, dims(300, 300), dims(300, 300), Vec2::ZERO);
    assert!(matches!(
        zero_id,
        Err(GenerationError::InvalidArgument { argument: "id", .. })
    ));

    let inverted = WorldBlock::new(1, BlockKind::Dynamic, dims(500, 500), dims(300, 300), Vec2::ZERO);
    assert!(matches!(
        inverted,
        Err(GenerationError::InvalidArgument { argument: "min_size", .. })
    ));

    assert!(Dimensions::new(0, 300).is_err());
    assert!(Dimensions::new(300, 0).is_err());
}
