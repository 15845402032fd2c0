//! Renderer contract and managed-resource value types
//!
//! All drawing is immediate-mode and happens between
//! [`Renderer::begin_drawing`] and [`Renderer::end_drawing`]; `end_drawing`
//! is the presentation point. Geometry is given in window-local pixel
//! coordinates, y increasing downward.
//!
//! Textures and fonts are managed resources: `load_*` returns a small value
//! type carrying an opaque handle (plus cached metadata), and every draw or
//! unload that names a stale, unknown, or invalid handle is a silent no-op.
//! Load failures are reported through the invalid sentinel handle, never an
//! error — a missing texture simply never draws, and text falls back to the
//! renderer's default face.

use crate::resource::{RawHandle, INVALID_HANDLE};
use crate::types::{Color, Flip, Rectangle, Vector2};

/// Handle to a texture owned by one renderer's resource manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub RawHandle);

/// Handle to a font owned by one renderer's resource manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontHandle(pub RawHandle);

/// A loaded texture: lookup key plus cached dimensions.
///
/// This is not the pixel data — only the issuing renderer can resolve the
/// handle. The dimensions are cached so callers can lay out sprites without
/// a round-trip into the resource manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Texture {
    /// Manager-local handle; sentinel when loading failed
    pub handle: TextureHandle,
    /// Width in pixels (0 when invalid)
    pub width: u32,
    /// Height in pixels (0 when invalid)
    pub height: u32,
}

impl Texture {
    /// The "no texture" value returned by failed loads.
    pub const INVALID: Self = Self {
        handle: TextureHandle(INVALID_HANDLE),
        width: 0,
        height: 0,
    };

    /// Whether this value names a (possibly since-unloaded) resource.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.handle.0 != INVALID_HANDLE
    }
}

/// A loaded font: lookup key only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    /// Manager-local handle; sentinel when loading failed
    pub handle: FontHandle,
}

impl Font {
    /// The "no font" value returned by failed loads.
    pub const INVALID: Self = Self {
        handle: FontHandle(INVALID_HANDLE),
    };

    /// Whether this value names a (possibly since-unloaded) resource.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.handle.0 != INVALID_HANDLE
    }
}

/// Per-frame draw statistics, reset by [`Renderer::begin_drawing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Primitive and texture draw calls issued this frame
    pub draw_calls: u64,
    /// Texture draws that resolved to a live texture
    pub textures_drawn: u64,
    /// Glyphs emitted by text draws this frame
    pub glyphs_drawn: u64,
}

/// Backend-agnostic immediate-mode 2D renderer.
pub trait Renderer {
    /// Open the frame bracket. Draw calls outside a bracket are no-ops.
    fn begin_drawing(&mut self);

    /// Close the frame bracket and present the frame buffer.
    fn end_drawing(&mut self);

    /// Fill the frame with a solid color.
    fn clear(&mut self, color: Color);

    /// Plot a single pixel.
    fn draw_pixel(&mut self, pos: Vector2, color: Color);

    /// Draw a line segment. Thickness of one pixel or less draws a
    /// hairline; anything wider draws a quad.
    fn draw_line(&mut self, start: Vector2, end: Vector2, thickness: f32, color: Color);

    /// Fill an axis-aligned rectangle.
    fn draw_rectangle(&mut self, rect: Rectangle, color: Color);

    /// Outline an axis-aligned rectangle with edge strips of the given
    /// thickness.
    fn draw_rectangle_lines(&mut self, rect: Rectangle, thickness: f32, color: Color);

    /// Fill a circle.
    fn draw_circle(&mut self, center: Vector2, radius: f32, color: Color);

    /// Fill a triangle.
    fn draw_triangle(&mut self, v1: Vector2, v2: Vector2, v3: Vector2, color: Color);

    /// Load a texture from an image file.
    ///
    /// On I/O or decode failure this returns [`Texture::INVALID`] — a
    /// reported, non-fatal condition the caller may check with
    /// [`Texture::is_valid`].
    fn load_texture(&mut self, path: &str) -> Texture;

    /// Release a texture. Safe for invalid or already-unloaded handles.
    fn unload_texture(&mut self, texture: Texture);

    /// Draw a whole texture at `pos`, modulated by `tint`.
    fn draw_texture(&mut self, texture: Texture, pos: Vector2, tint: Color);

    /// Draw the `src` region of a texture at `pos`, modulated by `tint`.
    fn draw_texture_region(&mut self, texture: Texture, src: Rectangle, pos: Vector2, tint: Color);

    /// Draw a texture with scale, rotation, and mirroring.
    ///
    /// `rotation` is clockwise degrees about `origin` (given in unscaled
    /// texture-local pixels); `flip` mirrors the destination extent about
    /// the origin.
    fn draw_texture_ex(
        &mut self,
        texture: Texture,
        pos: Vector2,
        origin: Vector2,
        rotation: f32,
        scale: f32,
        flip: Flip,
        tint: Color,
    );

    /// Load a font from a TrueType/OpenType file at the given pixel size.
    ///
    /// Returns [`Font::INVALID`] on I/O or parse failure.
    fn load_font(&mut self, path: &str, size: u32) -> Font;

    /// Release a font. Safe for invalid or already-unloaded handles.
    fn unload_font(&mut self, font: Font);

    /// Draw a line of text with the given font.
    ///
    /// An invalid or unknown font handle falls back to the renderer's
    /// default face (a per-backend policy documented on each
    /// implementation); text rendering is never a hard failure.
    fn draw_text(&mut self, font: Font, text: &str, pos: Vector2, color: Color);

    /// Draw a line of text with the renderer's default face at `size`
    /// pixels.
    fn draw_text_default(&mut self, text: &str, pos: Vector2, size: u32, color: Color);

    /// Release every texture and font still tracked by this renderer.
    ///
    /// Deterministic bulk teardown for renderer destruction; afterwards all
    /// resource queries report "not found". Idempotent.
    fn release_all_resources(&mut self);

    /// Draw statistics for the frame currently being recorded (or the last
    /// one, after `end_drawing`).
    fn stats(&self) -> RenderStats;
}
