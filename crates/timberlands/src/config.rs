//! # Layout Configuration
//!
//! Block layouts are described in TOML and loaded once at startup:
//!
//! ```toml
//! seed = 123
//! noise_seed = 42          # optional
//!
//! [[blocks]]
//! name = "NewBlock"
//! kind = "dynamic"         # or "static"
//! min = [300, 300]
//! max = [500, 500]
//! position = [0.0, 0.0]    # optional, defaults to the origin
//! ```
//!
//! Each entry may carry a `[blocks.style]` table; without one the block is
//! drawn as an antique-white 5px outline.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use timberlands_procedural::{BlockKind, Dimensions, GenerationError, WorldBlock, WorldSeed};
use timberlands_shared::{Color, DrawStyle, Vec2};

use crate::layout::{Layout, LayoutEntry};

/// Layout used when no file is given.
pub const DEBUG_LAYOUT: &str = include_str!("../layouts/debug.toml");

/// Errors raised while loading or validating a layout.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The layout file could not be read.
    #[error("failed to read layout file {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The layout is not valid TOML or does not match the schema.
    #[error("failed to parse layout: {0}")]
    Parse(#[from] toml::de::Error),

    /// A block entry violates a generation precondition.
    #[error("invalid block `{name}`: {source}")]
    InvalidBlock {
        /// Name of the entry.
        name: String,
        /// The rejected precondition.
        #[source]
        source: GenerationError,
    },

    /// Two entries hash to the same id.
    #[error("block `{name}` has id {id:#x}, already used by `{existing}`")]
    DuplicateBlock {
        /// Name of the later entry.
        name: String,
        /// Name of the earlier entry.
        existing: String,
        /// The shared id.
        id: u64,
    },
}

/// One `[[blocks]]` entry as written in the file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockEntry {
    /// Name hashed into the block id.
    pub name: String,
    /// Sizing behaviour.
    pub kind: BlockKind,
    /// Minimum `[width, height]`.
    pub min: [u16; 2],
    /// Maximum `[width, height]`.
    pub max: [u16; 2],
    /// World position `[x, y]`.
    #[serde(default)]
    pub position: [f32; 2],
    /// Debug draw style.
    #[serde(default)]
    pub style: Option<DrawStyle>,
}

/// A parsed, not yet validated layout file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Seed hashed into every block id.
    pub seed: i32,
    /// Seed for the layout's noise field; defaults to [`WorldSeed::default`].
    #[serde(default)]
    pub noise_seed: Option<u64>,
    /// Block entries in declaration order.
    #[serde(default)]
    pub blocks: Vec<BlockEntry>,
}

impl LayoutConfig {
    /// Default debug style: antique-white outline, 5px.
    pub const DEFAULT_STYLE: DrawStyle = DrawStyle::outline_only(Color::ANTIQUE_WHITE, 5.0);

    /// Parses a layout from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a layout file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if it is not a valid layout.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// The built-in debug layout.
    ///
    /// # Errors
    ///
    /// Only fails if [`DEBUG_LAYOUT`] itself is broken.
    pub fn debug() -> Result<Self, ConfigError> {
        Self::from_toml_str(DEBUG_LAYOUT)
    }

    /// Validates every entry and builds the layout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBlock`] naming the first entry with a
    /// zero dimension or `min > max`, or [`ConfigError::DuplicateBlock`] when
    /// two names hash to the same id.
    pub fn build(&self) -> Result<Layout, ConfigError> {
        let mut seen: HashMap<u64, &str> = HashMap::with_capacity(self.blocks.len());
        let mut entries = Vec::with_capacity(self.blocks.len());

        for entry in &self.blocks {
            let block = entry.to_block(self.seed).map_err(|source| ConfigError::InvalidBlock {
                name: entry.name.clone(),
                source,
            })?;

            if let Some(existing) = seen.insert(block.id(), &entry.name) {
                return Err(ConfigError::DuplicateBlock {
                    name: entry.name.clone(),
                    existing: existing.to_owned(),
                    id: block.id(),
                });
            }

            entries.push(LayoutEntry {
                name: entry.name.clone(),
                block,
                style: entry.style.unwrap_or(Self::DEFAULT_STYLE),
            });
        }

        let noise_seed = self.noise_seed.map_or_else(WorldSeed::default, WorldSeed::new);
        Ok(Layout::new(WorldSeed::from_signed(self.seed), noise_seed, entries))
    }
}

impl BlockEntry {
    fn to_block(&self, seed: i32) -> Result<WorldBlock, GenerationError> {
        WorldBlock::named(
            &self.name,
            seed,
            self.kind,
            Dimensions::try_from(self.min)?,
            Dimensions::try_from(self.max)?,
            Vec2::from(self.position),
        )
    }
}
