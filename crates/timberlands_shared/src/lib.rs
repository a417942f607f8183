//! # Timberlands Shared
//!
//! Value types exchanged between world generation and the host renderer.
//!
//! ## RULE
//!
//! This crate must NEVER depend on a graphics API. The host turns
//! [`RectPrimitive`]s into sprite-batch calls on its own side.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod draw;
pub mod math;

pub use draw::{Color, DrawStyle, Rect, RectPrimitive};
pub use math::Vec2;
