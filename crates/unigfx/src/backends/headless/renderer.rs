//! Headless renderer: asset validation and draw accounting, no pixels
//!
//! Default-font policy: text draws are metrics-only no-ops, so the
//! unknown-handle fallback is simply "count the call" — there is nothing to
//! rasterize with or onto. The resource-handle behavior (sentinels, stale
//! handles, teardown) is identical to a drawing backend's, which is the
//! point: contract tests run here at full speed.

use crate::renderer::{Font, FontHandle, RenderStats, Renderer, Texture, TextureHandle};
use crate::resource::ResourceManager;
use crate::types::{Color, Flip, Rectangle, Vector2};

/// What the headless backend keeps for a "loaded" texture: provenance and
/// the probed dimensions.
struct TextureRecord {
    path: String,
    width: u32,
    height: u32,
}

/// What the headless backend keeps for a "loaded" font.
struct FontRecord {
    path: String,
    size: u32,
}

/// Accounting renderer: validates that assets exist and decode, tracks
/// handles, and counts draw traffic per frame.
pub struct HeadlessRenderer {
    textures: ResourceManager<TextureRecord>,
    fonts: ResourceManager<FontRecord>,
    in_frame: bool,
    stats: RenderStats,
    frames_presented: u64,
}

impl Default for HeadlessRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessRenderer {
    pub(crate) fn new() -> Self {
        Self {
            textures: ResourceManager::new(),
            fonts: ResourceManager::new(),
            in_frame: false,
            stats: RenderStats::default(),
            frames_presented: 0,
        }
    }

    /// Frames completed through [`Renderer::end_drawing`].
    #[must_use]
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    fn record_draw(&mut self) {
        if self.in_frame {
            self.stats.draw_calls += 1;
        }
    }

    fn record_texture_draw(&mut self, texture: Texture) {
        if !self.in_frame {
            return;
        }
        self.stats.draw_calls += 1;
        if self.textures.contains(texture.handle.0) {
            self.stats.textures_drawn += 1;
        }
    }
}

impl Renderer for HeadlessRenderer {
    fn begin_drawing(&mut self) {
        self.in_frame = true;
        self.stats = RenderStats::default();
    }

    fn end_drawing(&mut self) {
        if self.in_frame {
            self.frames_presented += 1;
        }
        self.in_frame = false;
    }

    fn clear(&mut self, _color: Color) {}

    fn draw_pixel(&mut self, _pos: Vector2, _color: Color) {
        self.record_draw();
    }

    fn draw_line(&mut self, _start: Vector2, _end: Vector2, _thickness: f32, _color: Color) {
        self.record_draw();
    }

    fn draw_rectangle(&mut self, _rect: Rectangle, _color: Color) {
        self.record_draw();
    }

    fn draw_rectangle_lines(&mut self, _rect: Rectangle, _thickness: f32, _color: Color) {
        self.record_draw();
    }

    fn draw_circle(&mut self, _center: Vector2, _radius: f32, _color: Color) {
        self.record_draw();
    }

    fn draw_triangle(&mut self, _v1: Vector2, _v2: Vector2, _v3: Vector2, _color: Color) {
        self.record_draw();
    }

    fn load_texture(&mut self, path: &str) -> Texture {
        match image::image_dimensions(path) {
            Ok((width, height)) => {
                let handle = self.textures.add(TextureRecord {
                    path: path.to_string(),
                    width,
                    height,
                });
                log::debug!("validated texture {path} ({width}x{height}) as handle {handle}");
                Texture {
                    handle: TextureHandle(handle),
                    width,
                    height,
                }
            }
            Err(err) => {
                log::warn!("failed to probe texture {path}: {err}");
                Texture::INVALID
            }
        }
    }

    fn unload_texture(&mut self, texture: Texture) {
        if let Some(record) = self.textures.remove(texture.handle.0) {
            log::debug!("unloaded texture {}", record.path);
        }
    }

    fn draw_texture(&mut self, texture: Texture, _pos: Vector2, _tint: Color) {
        self.record_texture_draw(texture);
    }

    fn draw_texture_region(
        &mut self,
        texture: Texture,
        _src: Rectangle,
        _pos: Vector2,
        _tint: Color,
    ) {
        self.record_texture_draw(texture);
    }

    fn draw_texture_ex(
        &mut self,
        texture: Texture,
        _pos: Vector2,
        _origin: Vector2,
        _rotation: f32,
        _scale: f32,
        _flip: Flip,
        _tint: Color,
    ) {
        self.record_texture_draw(texture);
    }

    fn load_font(&mut self, path: &str, size: u32) -> Font {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                log::warn!("failed to read font {path}: {err}");
                return Font::INVALID;
            }
        };
        match fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default()) {
            Ok(_face) => {
                let handle = self.fonts.add(FontRecord {
                    path: path.to_string(),
                    size,
                });
                log::debug!("validated font {path} at {size}px as handle {handle}");
                Font {
                    handle: FontHandle(handle),
                }
            }
            Err(err) => {
                log::warn!("failed to parse font {path}: {err}");
                Font::INVALID
            }
        }
    }

    fn unload_font(&mut self, font: Font) {
        if let Some(record) = self.fonts.remove(font.handle.0) {
            log::debug!("unloaded font {} ({}px)", record.path, record.size);
        }
    }

    fn draw_text(&mut self, _font: Font, text: &str, _pos: Vector2, _color: Color) {
        if !self.in_frame {
            return;
        }
        self.stats.draw_calls += 1;
        self.stats.glyphs_drawn += text.chars().count() as u64;
    }

    fn draw_text_default(&mut self, text: &str, _pos: Vector2, _size: u32, _color: Color) {
        if !self.in_frame {
            return;
        }
        self.stats.draw_calls += 1;
        self.stats.glyphs_drawn += text.chars().count() as u64;
    }

    fn release_all_resources(&mut self) {
        let textures = self.textures.len();
        let fonts = self.fonts.len();
        self.textures.clear(drop);
        self.fonts.clear(drop);
        if textures + fonts > 0 {
            log::info!("headless renderer released {textures} textures, {fonts} fonts");
        }
    }

    fn stats(&self) -> RenderStats {
        self.stats
    }
}

impl Drop for HeadlessRenderer {
    fn drop(&mut self) {
        self.release_all_resources();
    }
}
