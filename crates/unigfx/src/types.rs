//! Common value types shared across the contract surface
//!
//! Geometry is expressed in window-local pixel coordinates with `y`
//! increasing downward, matching what every supported backend natively
//! expects for 2D drawing.

use bitflags::bitflags;

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (255 = opaque)
    pub a: u8,
}

impl Color {
    /// Opaque white
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque red
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Opaque green
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    /// Opaque blue
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Fully transparent black
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Build an opaque color from RGB channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Build a color from RGBA channels.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// A 2D point or direction in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    /// Horizontal component
    pub x: f32,
    /// Vertical component (downward-positive)
    pub y: f32,
}

impl Vector2 {
    /// Build a vector from components.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Rectangle {
    /// Build a rectangle from its top-left corner and extent.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Axis mirroring applied by [`crate::Renderer::draw_texture_ex`].
///
/// Flipping mirrors the destination extent about the draw origin; the source
/// texel data is never re-sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flip {
    /// No mirroring
    #[default]
    None,
    /// Mirror across the vertical axis
    Horizontal,
    /// Mirror across the horizontal axis
    Vertical,
    /// Mirror across both axes
    Both,
}

impl Flip {
    /// Whether the horizontal axis is mirrored.
    #[must_use]
    pub const fn horizontal(self) -> bool {
        matches!(self, Self::Horizontal | Self::Both)
    }

    /// Whether the vertical axis is mirrored.
    #[must_use]
    pub const fn vertical(self) -> bool {
        matches!(self, Self::Vertical | Self::Both)
    }
}

bitflags! {
    /// Orthogonal window attributes.
    ///
    /// Any combination is legal. A backend maps whichever subset it supports
    /// and silently ignores the rest; an unsupported flag is never an error.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct WindowFlags: u32 {
        /// Cover the whole display
        const FULLSCREEN = 1 << 0;
        /// Drop the window decorations
        const BORDERLESS = 1 << 1;
        /// Allow the user to resize the window
        const RESIZABLE = 1 << 2;
        /// Synchronize presentation with the display refresh
        const VSYNC = 1 << 3;
        /// Create the window without showing it
        const HIDDEN = 1 << 4;
        /// Keep the window above all others
        const ALWAYS_ON_TOP = 1 << 5;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_flags_compose() {
        let flags = WindowFlags::RESIZABLE | WindowFlags::VSYNC;
        assert!(flags.contains(WindowFlags::RESIZABLE));
        assert!(flags.contains(WindowFlags::VSYNC));
        assert!(!flags.contains(WindowFlags::FULLSCREEN));
    }

    #[test]
    fn flip_axes() {
        assert!(Flip::Both.horizontal() && Flip::Both.vertical());
        assert!(Flip::Horizontal.horizontal() && !Flip::Horizontal.vertical());
        assert!(!Flip::None.horizontal() && !Flip::None.vertical());
    }
}
