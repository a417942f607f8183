//! # Timberlands World Layout
//!
//! Glue between layout files and the procedural core.
//!
//! A layout is a TOML file listing named blocks. Loading validates every
//! entry into a [`timberlands_procedural::WorldBlock`]; resolving draws each
//! dynamic block's size from a stream derived from the layout seed and yields
//! rectangles ready for the host renderer.
//!
//! ```
//! use timberlands::LayoutConfig;
//!
//! let layout = LayoutConfig::debug()?.build()?;
//! let blocks = layout.resolve(&mut layout.sizing_rng());
//!
//! assert_eq!(blocks[0].name, "NewBlock");
//! assert_eq!(blocks[0].id, 107_144_690_526_312);
//! assert_eq!(blocks[0].primitive().rects().len(), 4);
//! # Ok::<(), timberlands::ConfigError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod layout;
pub mod preview;

pub use config::{BlockEntry, ConfigError, LayoutConfig};
pub use layout::{Layout, LayoutEntry, ResolvedBlock};
