//! # Layout Resolution
//!
//! A validated set of blocks plus the seeds that drive them. Resolving a
//! layout fixes every block's effective size, in declaration order, so the
//! host can draw or place it.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use timberlands_procedural::{BlockKind, Dimensions, NoiseField, RandomSource, WorldBlock, WorldSeed};
use timberlands_shared::{DrawStyle, RectPrimitive, Vec2};

/// Sub-seed purpose for the block sizing stream.
const SIZING_PURPOSE: u64 = 1;

/// Log context attached to layout events.
const LOG_CONTEXT: &str = "worldgen";

/// One named block and the style it is drawn with.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutEntry {
    /// Name the id was hashed from.
    pub name: String,
    /// The validated block.
    pub block: WorldBlock,
    /// Debug draw style.
    pub style: DrawStyle,
}

/// A validated layout. Built by [`crate::LayoutConfig::build`].
#[derive(Clone, Debug)]
pub struct Layout {
    seed: WorldSeed,
    noise_seed: WorldSeed,
    entries: Vec<LayoutEntry>,
}

/// A block whose size has been drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedBlock {
    /// Block id.
    pub id: u64,
    /// Entry name.
    pub name: String,
    /// Top-left position.
    pub position: Vec2,
    /// Effective size.
    pub size: Dimensions,
    /// Draw style.
    pub style: DrawStyle,
}

impl ResolvedBlock {
    /// The rectangle the host renderer should draw.
    #[must_use]
    pub const fn primitive(&self) -> RectPrimitive {
        RectPrimitive::new(self.position, self.size.width(), self.size.height(), self.style)
    }
}

impl Layout {
    /// Creates a layout from already validated entries.
    #[must_use]
    pub fn new(seed: WorldSeed, noise_seed: WorldSeed, entries: Vec<LayoutEntry>) -> Self {
        Self {
            seed,
            noise_seed,
            entries,
        }
    }

    /// Seed the block ids were hashed with.
    #[must_use]
    pub const fn seed(&self) -> WorldSeed {
        self.seed
    }

    /// Seed of the layout's noise field.
    #[must_use]
    pub const fn noise_seed(&self) -> WorldSeed {
        self.noise_seed
    }

    /// Entries in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[LayoutEntry] {
        &self.entries
    }

    /// Number of blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the layout has no blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds the noise field for this layout.
    #[must_use]
    pub fn noise(&self) -> NoiseField {
        NoiseField::new(self.noise_seed)
    }

    /// Sizing stream derived from the layout seed.
    ///
    /// Two calls return generators that produce the same draws, so
    /// `resolve(&mut layout.sizing_rng())` is reproducible.
    #[must_use]
    pub fn sizing_rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.seed.derive(SIZING_PURPOSE).value())
    }

    /// Resolves every block's effective size in declaration order.
    ///
    /// Static blocks consume nothing from `random`; each dynamic block
    /// consumes one width draw and one height draw.
    pub fn resolve<R: RandomSource + ?Sized>(&self, random: &mut R) -> Vec<ResolvedBlock> {
        let resolved: Vec<ResolvedBlock> = self
            .entries
            .iter()
            .map(|entry| {
                let size = entry.block.effective_size(random);
                tracing::debug!(
                    context = LOG_CONTEXT,
                    "block {} ({:#x}) resolved to {}",
                    entry.name,
                    entry.block.id(),
                    size
                );
                ResolvedBlock {
                    id: entry.block.id(),
                    name: entry.name.clone(),
                    position: entry.block.position(),
                    size,
                    style: entry.style,
                }
            })
            .collect();

        let dynamic = self
            .entries
            .iter()
            .filter(|entry| entry.block.kind() == BlockKind::Dynamic)
            .count();
        tracing::info!(
            context = LOG_CONTEXT,
            "resolved {} blocks ({} dynamic)",
            resolved.len(),
            dynamic
        );

        resolved
    }
}
