//! # Dimensions
//!
//! Immutable, strictly positive width/height pair.
//!
//! Ordering is lexicographic: width first, then height. That is the order
//! `WorldBlock` uses to check `min_size <= max_size`, so a pair such as
//! `299 x 999 < 300 x 1` holds even though the height shrinks.

use std::fmt;

use crate::error::{GenerationError, GenerationResult};

/// Width and height of a rectangular region, both greater than zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dimensions {
    // Field order drives the derived `Ord`.
    width: u16,
    height: u16,
}

impl Dimensions {
    /// Creates new dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] if either value is zero.
    pub const fn new(width: u16, height: u16) -> GenerationResult<Self> {
        if width == 0 {
            return Err(GenerationError::invalid("width", "must be greater than zero"));
        }
        if height == 0 {
            return Err(GenerationError::invalid("height", "must be greater than zero"));
        }
        Ok(Self { width, height })
    }

    /// Builds dimensions from values the caller has already bounded below by
    /// an existing `Dimensions`, so both are non-zero.
    #[inline]
    pub(crate) const fn from_bounded(width: u16, height: u16) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self { width, height }
    }

    /// Width in tiles.
    #[inline]
    #[must_use]
    pub const fn width(self) -> u16 {
        self.width
    }

    /// Height in tiles.
    #[inline]
    #[must_use]
    pub const fn height(self) -> u16 {
        self.height
    }

    /// Number of tiles covered.
    #[inline]
    #[must_use]
    pub const fn area(self) -> u32 {
        self.width as u32 * self.height as u32
    }
}

impl TryFrom<[u16; 2]> for Dimensions {
    type Error = GenerationError;

    fn try_from([width, height]: [u16; 2]) -> GenerationResult<Self> {
        Self::new(width, height)
    }
}

impl From<Dimensions> for [u16; 2] {
    fn from(dims: Dimensions) -> Self {
        [dims.width, dims.height]
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}
