//! # World Blocks
//!
//! Rectangular regions that make up a generated world.
//!
//! A block is either [`BlockKind::Static`] (fixed size, always `min_size`) or
//! [`BlockKind::Dynamic`] (width and height drawn independently between the
//! size bounds each time the size is resolved).
//!
//! Block ids come from [`WorldBlock::generate_id`], a 31-multiplier string
//! hash seeded with the layout seed. The same name and seed give the same id
//! on every run.

use serde::{Deserialize, Serialize};
use timberlands_shared::{DrawStyle, RectPrimitive, Vec2};

use crate::dimensions::Dimensions;
use crate::error::{GenerationError, GenerationResult};
use crate::random::RandomSource;

/// How a block's size is resolved at generation time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum BlockKind {
    /// Fixed size: `min_size`.
    Static = 0,
    /// Random size between `min_size` and `max_size` per axis.
    Dynamic = 1,
}

/// A sized, positioned, identified rectangular region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldBlock {
    id: u64,
    kind: BlockKind,
    min_size: Dimensions,
    max_size: Dimensions,
    position: Vec2,
}

impl WorldBlock {
    /// Creates a new block.
    ///
    /// For static blocks `min_size` and `max_size` are normally equal; only
    /// `min_size` is ever used.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] if `id` is zero or
    /// `min_size > max_size`.
    pub fn new(
        id: u64,
        kind: BlockKind,
        min_size: Dimensions,
        max_size: Dimensions,
        position: Vec2,
    ) -> GenerationResult<Self> {
        if id == 0 {
            return Err(GenerationError::invalid("id", "must be non-zero"));
        }
        if min_size > max_size {
            return Err(GenerationError::invalid(
                "min_size",
                "cannot exceed max_size",
            ));
        }

        Ok(Self {
            id,
            kind,
            min_size,
            max_size,
            position,
        })
    }

    /// Creates a block whose id is [`WorldBlock::generate_id`]`(name, seed)`.
    ///
    /// # Errors
    ///
    /// Same as [`WorldBlock::new`].
    pub fn named(
        name: &str,
        seed: i32,
        kind: BlockKind,
        min_size: Dimensions,
        max_size: Dimensions,
        position: Vec2,
    ) -> GenerationResult<Self> {
        Self::new(Self::generate_id(name, seed), kind, min_size, max_size, position)
    }

    /// Deterministic id for a block name under a seed.
    ///
    /// `hash = seed` (sign-extended), then `hash = hash * 31 + c` for each
    /// UTF-16 code unit `c` of `name`, wrapping modulo 2^64.
    #[must_use]
    pub fn generate_id(name: &str, seed: i32) -> u64 {
        name.encode_utf16().fold(seed as u64, |hash, c| {
            hash.wrapping_mul(31).wrapping_add(u64::from(c))
        })
    }

    /// Unique identifier.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Sizing behaviour.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> BlockKind {
        self.kind
    }

    /// Smallest size the block can take.
    #[inline]
    #[must_use]
    pub const fn min_size(&self) -> Dimensions {
        self.min_size
    }

    /// Largest size the block can take.
    #[inline]
    #[must_use]
    pub const fn max_size(&self) -> Dimensions {
        self.max_size
    }

    /// Position in world coordinates.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Resolves the block's size.
    ///
    /// Static blocks return `min_size` and leave `random` untouched. Dynamic
    /// blocks draw a width, then a height, each uniformly from the inclusive
    /// range between the bounds on that axis.
    #[inline]
    pub fn effective_size<R: RandomSource + ?Sized>(&self, random: &mut R) -> Dimensions {
        match self.kind {
            BlockKind::Static => self.min_size,
            BlockKind::Dynamic => {
                let width = draw_axis(random, self.min_size.width(), self.max_size.width());
                let height = draw_axis(random, self.min_size.height(), self.max_size.height());
                // Each draw is at least the positive minimum of its axis.
                Dimensions::from_bounded(width, height)
            }
        }
    }

    /// Resolves the size and describes the block as a rectangle at `position`.
    ///
    /// This is what a debug view hands to the host renderer.
    pub fn primitive<R: RandomSource + ?Sized>(
        &self,
        random: &mut R,
        style: DrawStyle,
        position: Vec2,
    ) -> RectPrimitive {
        let size = self.effective_size(random);
        RectPrimitive::new(position, size.width(), size.height(), style)
    }
}

/// Draws one axis. Lexicographic `min <= max` says nothing about heights, so
/// the axis bounds are ordered before drawing. A draw outside the range (from a
/// source that breaks its contract) is clamped back into it.
#[inline]
fn draw_axis<R: RandomSource + ?Sized>(random: &mut R, a: u16, b: u16) -> u16 {
    let (lo, hi) = (a.min(b), a.max(b));
    random.next_in_range(lo, hi).clamp(lo, hi)
}
