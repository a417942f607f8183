//! # Gradient Noise Field
//!
//! Seeded, deterministic 2D Perlin-style noise.
//!
//! ## Gradient Scheme
//!
//! Corner contributions do not use gradient vectors from a table. The low
//! four bits of the corner hash pick one of twelve sign/axis combinations of
//! the corner offset directly (`grad`). Each slot also carries a scalar
//! gradient drawn at construction; those values are part of the seeded
//! stream and are kept so that the permutation shuffle consumes the same
//! random draws for a given seed.
//!
//! ## Determinism Guarantee
//!
//! The seeded stream is ChaCha8, so a given [`WorldSeed`] produces the same
//! table and the same samples on any platform.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::fast_math::{fade, floor_to_int, lerp};

/// Entries in the permutation table before duplication. Must be a power of two.
pub const TABLE_SIZE: usize = 256;

const TABLE_MASK: i32 = TABLE_SIZE as i32 - 1;

/// Seed of a world layout and its noise field.
///
/// Layout files carry a signed 32-bit seed (the same one block ids are hashed
/// with); noise seeds are full 64-bit values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WorldSeed(u64);

impl WorldSeed {
    /// Seed used when a layout names no noise seed.
    pub const DEFAULT: Self = Self(0x7153_B10C_5EED_0001);

    /// Wraps a raw 64-bit seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Seed from a layout's signed seed, sign-extended like
    /// [`crate::WorldBlock::generate_id`] does.
    #[inline]
    #[must_use]
    pub const fn from_signed(seed: i32) -> Self {
        Self(seed as u64)
    }

    /// Raw value, as fed to `seed_from_u64`.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Sub-seed for a separate random stream, such as block sizing.
    ///
    /// SplitMix64 finalizer over the seed offset by `purpose` golden-ratio
    /// steps; distinct purposes give unrelated streams.
    #[inline]
    #[must_use]
    pub const fn derive(self, purpose: u64) -> Self {
        let mut z = self
            .0
            .wrapping_add(purpose.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        Self(z ^ (z >> 31))
    }
}

impl Default for WorldSeed {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// 2D gradient noise generator.
///
/// Produces smooth, continuous noise values in `[-1, 1]`. Immutable once
/// built, so one field can be shared by reference across threads.
///
/// # Example
///
/// ```
/// use timberlands_procedural::{NoiseField, WorldSeed};
///
/// let noise = NoiseField::new(WorldSeed::new(42));
/// let value = noise.sample(100.5, 200.3);
/// assert!(value.abs() <= 1.0 + 1e-5);
/// ```
#[derive(Clone)]
pub struct NoiseField {
    seed: WorldSeed,
    /// 256 shuffled entries, duplicated so `perm[i + 1]` never wraps.
    permutation: [u8; TABLE_SIZE * 2],
    gradients: [f32; TABLE_SIZE],
}

impl NoiseField {
    /// Builds the permutation and gradient tables from a seed.
    #[must_use]
    pub fn new(seed: WorldSeed) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed.value());
        let mut permutation = [0u8; TABLE_SIZE * 2];
        let mut gradients = [0f32; TABLE_SIZE];

        for (i, (slot, gradient)) in permutation.iter_mut().zip(gradients.iter_mut()).enumerate() {
            *slot = i as u8;
            *gradient = (rng.gen::<f64>() * 2.0 - 1.0) as f32;
        }

        // Every slot swaps with a uniformly chosen slot of the whole table.
        for i in 0..TABLE_SIZE {
            let j = rng.gen_range(0..TABLE_SIZE);
            permutation.swap(i, j);
        }

        permutation.copy_within(0..TABLE_SIZE, TABLE_SIZE);

        Self {
            seed,
            permutation,
            gradients,
        }
    }

    /// The seed this field was built from.
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> WorldSeed {
        self.seed
    }

    /// The 512-entry permutation table (second half mirrors the first).
    #[inline]
    #[must_use]
    pub const fn permutation(&self) -> &[u8; TABLE_SIZE * 2] {
        &self.permutation
    }

    /// Per-slot scalar gradients in `[-1, 1]`.
    #[inline]
    #[must_use]
    pub const fn gradients(&self) -> &[f32; TABLE_SIZE] {
        &self.gradients
    }

    #[inline]
    fn perm(&self, index: usize) -> usize {
        usize::from(self.permutation[index])
    }

    /// Samples the noise at `(x, y)`.
    ///
    /// Total over finite input. Only the masked cell index and the fractional
    /// offset matter, so very large coordinates are valid.
    #[must_use]
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        let x = wrap_to_period(x);
        let y = wrap_to_period(y);

        let cell_x = floor_to_int(x);
        let cell_y = floor_to_int(y);
        let xi = (cell_x & TABLE_MASK) as usize;
        let yi = (cell_y & TABLE_MASK) as usize;

        let x = x - cell_x as f32;
        let y = y - cell_y as f32;

        let u = fade(x);
        let v = fade(y);

        let a = self.perm(xi) + yi;
        let b = self.perm(xi + 1) + yi;

        lerp(
            lerp(grad(self.perm(a), x, y), grad(self.perm(b), x - 1.0, y), u),
            lerp(
                grad(self.perm(a + 1), x, y - 1.0),
                grad(self.perm(b + 1), x - 1.0, y - 1.0),
                u,
            ),
            v,
        )
    }

    /// Layered (fractal) noise.
    ///
    /// Sums `octaves` samples, each at `lacunarity` times the previous
    /// frequency and `persistence` times the previous amplitude, normalized by
    /// the total amplitude. Zero octaves yield `0.0`.
    #[must_use]
    pub fn fractal(&self, x: f32, y: f32, octaves: u32, persistence: f32, lacunarity: f32) -> f32 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_amplitude = 0.0;

        for _ in 0..octaves {
            total += self.sample(x * frequency, y * frequency) * amplitude;
            max_amplitude += amplitude;
            amplitude *= persistence;
            frequency *= lacunarity;
        }

        if max_amplitude == 0.0 {
            return 0.0;
        }
        total / max_amplitude
    }

    /// Samples noise and maps it to an integer in `[0, max)`.
    ///
    /// Useful for picking discrete variants. `max == 0` yields `0`.
    #[must_use]
    pub fn sample_discrete(&self, x: f32, y: f32, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        let unit = (self.sample(x, y) + 1.0) * 0.5;
        let scaled = unit * max as f32;
        (scaled as u32).min(max - 1)
    }
}

impl std::fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseField")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

/// Magnitude from which every `f32` is an integer.
const EXACT_INTEGER_LIMIT: f32 = 16_777_216.0;

/// Reduces a coordinate with no fractional part into `[0, TABLE_SIZE]`.
///
/// The cell index is masked to the table anyway, so only the value modulo
/// the period matters. Smaller coordinates pass through untouched to keep
/// their fractional offset exact.
#[inline]
fn wrap_to_period(v: f32) -> f32 {
    if v.abs() >= EXACT_INTEGER_LIMIT {
        // `+ 0.0` folds the negative zero left by exact negative multiples.
        v.rem_euclid(TABLE_SIZE as f32) + 0.0
    } else {
        v
    }
}

/// Corner contribution for a hash and the offset from that corner.
///
/// The low four bits select which offset component feeds each term and
/// their signs, giving twelve distinct combinations.
#[inline]
fn grad(hash: usize, dx: f32, dy: f32) -> f32 {
    let h = hash & 15;
    let u = if h < 8 { dx } else { dy };
    let v = if h < 4 {
        dy
    } else if h == 12 || h == 14 {
        dx
    } else {
        0.0
    };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}
