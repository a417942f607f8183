//! # Draw Primitives
//!
//! Style and geometry values handed to the host renderer.
//!
//! World generation never draws. It describes a rectangle with a
//! [`RectPrimitive`], and the host submits the [`Rect`]s returned by
//! [`RectPrimitive::rects`] to its sprite batch as solid quads.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// RGBA colour, 8 bits per channel.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Color {
    /// Creates a colour from its four channels.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque colour.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Fully transparent. A style part in this colour is skipped.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Antique white, the debug outline colour for world blocks.
    pub const ANTIQUE_WHITE: Self = Self::rgb(250, 235, 215);

    /// Returns true if this colour is exactly [`Color::TRANSPARENT`].
    #[must_use]
    pub fn is_transparent(self) -> bool {
        self == Self::TRANSPARENT
    }
}

/// How a shape is filled and outlined.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct DrawStyle {
    /// Interior colour.
    pub fill: Color,
    /// Border colour.
    pub outline: Color,
    /// Border thickness in pixels.
    pub outline_thickness: f32,
}

impl DrawStyle {
    /// Creates a style with both fill and outline.
    #[must_use]
    pub const fn new(fill: Color, outline: Color, outline_thickness: f32) -> Self {
        Self {
            fill,
            outline,
            outline_thickness,
        }
    }

    /// Solid interior, no border.
    #[must_use]
    pub const fn fill_only(fill: Color) -> Self {
        Self::new(fill, Color::TRANSPARENT, 0.0)
    }

    /// Border only, transparent interior.
    #[must_use]
    pub const fn outline_only(outline: Color, thickness: f32) -> Self {
        Self::new(Color::TRANSPARENT, outline, thickness)
    }

    fn has_outline(&self) -> bool {
        !self.outline.is_transparent() && self.outline_thickness > 0.0
    }
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self::new(Color::TRANSPARENT, Color::TRANSPARENT, 1.0)
    }
}

/// Integer pixel rectangle, ready for a sprite batch.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }
}

/// A positioned, sized and styled rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectPrimitive {
    /// Top-left corner.
    pub position: Vec2,
    /// Width in pixels.
    pub width: u16,
    /// Height in pixels.
    pub height: u16,
    /// Fill and outline.
    pub style: DrawStyle,
}

impl RectPrimitive {
    /// Creates a new primitive.
    #[must_use]
    pub const fn new(position: Vec2, width: u16, height: u16, style: DrawStyle) -> Self {
        Self {
            position,
            width,
            height,
            style,
        }
    }

    /// Decomposes the primitive into solid quads with a paired colour.
    ///
    /// Order: fill, then top, bottom, left and right outline bands. Bands
    /// overlap at the corners. Fractional positions and thicknesses are
    /// truncated toward zero.
    #[must_use]
    pub fn rects(&self) -> Vec<(Rect, Color)> {
        let mut out = Vec::with_capacity(5);
        let x = self.position.x as i32;
        let y = self.position.y as i32;
        let width = i32::from(self.width);
        let height = i32::from(self.height);

        if !self.style.fill.is_transparent() {
            out.push((Rect::new(x, y, width, height), self.style.fill));
        }

        if self.style.has_outline() {
            let thickness = self.style.outline_thickness;
            let band = thickness as i32;
            let bottom = (self.position.y + f32::from(self.height) - thickness) as i32;
            let right = (self.position.x + f32::from(self.width) - thickness) as i32;
            let color = self.style.outline;

            out.push((Rect::new(x, y, width, band), color));
            out.push((Rect::new(x, bottom, width, band), color));
            out.push((Rect::new(x, y, band, height), color));
            out.push((Rect::new(right, y, band, height), color));
        }

        out
    }
}
