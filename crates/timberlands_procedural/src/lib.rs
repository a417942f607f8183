//! # Timberlands Procedural Generation
//!
//! Reusable primitives for laying out a generated world.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same seed always produces the same noise and ids
//! 2. **Injected randomness**: Block sizing draws from a caller-owned source
//! 3. **Immutable values**: Blocks, dimensions and noise fields never change
//!    after construction
//!
//! ## Core Components
//!
//! - `Dimensions`: Positive width/height pair with lexicographic ordering
//! - `WorldBlock`: Static or dynamic rectangular region with a stable id
//! - `NoiseField`: Seeded 2D gradient noise
//! - `fast_math`: Fade, lerp, floor, clamp and smooth-step helpers
//!
//! ## Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use timberlands_procedural::{BlockKind, Dimensions, NoiseField, WorldBlock, WorldSeed};
//! use timberlands_shared::Vec2;
//!
//! let block = WorldBlock::named(
//!     "NewBlock",
//!     123,
//!     BlockKind::Dynamic,
//!     Dimensions::new(300, 300)?,
//!     Dimensions::new(500, 500)?,
//!     Vec2::ZERO,
//! )?;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(1);
//! let size = block.effective_size(&mut rng);
//! assert!((300..=500).contains(&size.width()));
//!
//! let noise = NoiseField::new(WorldSeed::new(42));
//! let _height = noise.sample(12.5, 7.25);
//! # Ok::<(), timberlands_procedural::GenerationError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod dimensions;
pub mod error;
pub mod fast_math;
pub mod noise;
pub mod random;
pub mod world_block;

pub use dimensions::Dimensions;
pub use error::{GenerationError, GenerationResult};
pub use noise::{NoiseField, WorldSeed, TABLE_SIZE};
pub use random::RandomSource;
pub use world_block::{BlockKind, WorldBlock};
