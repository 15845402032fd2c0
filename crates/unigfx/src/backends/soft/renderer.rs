//! Software renderer: immediate-mode drawing into the shared surface
//!
//! Default-font policy: an invalid or unknown font handle falls back to the
//! built-in 5×7 bitmap face — text always renders, it just loses the loaded
//! typeface.

use std::cell::RefCell;
use std::rc::Rc;

use crate::backends::soft::glyphs::{self, GLYPH_ADVANCE, GLYPH_WIDTH};
use crate::backends::soft::raster::{self, Surface, TexturePixels};
use crate::renderer::{Font, FontHandle, RenderStats, Renderer, Texture, TextureHandle};
use crate::resource::ResourceManager;
use crate::types::{Color, Flip, Rectangle, Vector2};

/// A parsed font plus the pixel size it was loaded at.
struct LoadedFont {
    face: fontdue::Font,
    size: f32,
}

/// CPU rasterizing renderer bound to one software window's surface.
pub struct SoftRenderer {
    surface: Rc<RefCell<Surface>>,
    textures: ResourceManager<TexturePixels>,
    fonts: ResourceManager<LoadedFont>,
    in_frame: bool,
    stats: RenderStats,
}

impl SoftRenderer {
    pub(crate) fn new(surface: Rc<RefCell<Surface>>) -> Self {
        surface.borrow_mut().renderer_bound = true;
        Self {
            surface,
            textures: ResourceManager::new(),
            fonts: ResourceManager::new(),
            in_frame: false,
            stats: RenderStats::default(),
        }
    }

    /// Drawing requires an open frame bracket on a live surface.
    fn ready(&self) -> bool {
        self.in_frame && self.surface.borrow().open
    }

    #[cfg(test)]
    pub(crate) fn surface_handle(&self) -> Rc<RefCell<Surface>> {
        Rc::clone(&self.surface)
    }

    /// Capture the last presented frame.
    ///
    /// Returns `None` once the window has been shut down.
    #[must_use]
    pub fn screenshot(&self) -> Option<image::RgbaImage> {
        let surface = self.surface.borrow();
        if !surface.open {
            return None;
        }
        image::RgbaImage::from_raw(surface.width, surface.height, surface.front.clone())
    }

    fn draw_builtin_text(&mut self, text: &str, pos: Vector2, pixel_scale: usize, color: Color) {
        let mut surface = self.surface.borrow_mut();
        let scale = pixel_scale.max(1);
        let mut pen_x = pos.x as i32;
        let pen_y = pos.y as i32;
        for ch in text.chars() {
            let rows = glyphs::glyph(ch);
            for (row_idx, row) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if row & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                        continue;
                    }
                    for sy in 0..scale {
                        for sx in 0..scale {
                            raster::put_pixel(
                                &mut surface,
                                pen_x + (col * scale + sx) as i32,
                                pen_y + (row_idx * scale + sy) as i32,
                                color,
                            );
                        }
                    }
                }
            }
            pen_x += (GLYPH_ADVANCE * scale) as i32;
            self.stats.glyphs_drawn += 1;
        }
    }

    fn draw_loaded_text(&mut self, handle: FontHandle, text: &str, pos: Vector2, color: Color) {
        let Some(loaded) = self.fonts.get(handle.0) else {
            return;
        };
        let ascent = loaded
            .face
            .horizontal_line_metrics(loaded.size)
            .map_or(loaded.size, |m| m.ascent);
        let baseline = pos.y + ascent;

        let mut surface = self.surface.borrow_mut();
        let mut pen_x = pos.x;
        let mut glyphs_drawn = 0;
        for ch in text.chars() {
            let (metrics, coverage) = loaded.face.rasterize(ch, loaded.size);
            let x = (pen_x + metrics.xmin as f32) as i32;
            let y = (baseline - metrics.ymin as f32 - metrics.height as f32) as i32;
            raster::blit_coverage(
                &mut surface,
                &coverage,
                metrics.width,
                metrics.height,
                x,
                y,
                color,
            );
            pen_x += metrics.advance_width;
            glyphs_drawn += 1;
        }
        drop(surface);
        self.stats.glyphs_drawn += glyphs_drawn;
    }
}

impl Renderer for SoftRenderer {
    fn begin_drawing(&mut self) {
        if !self.surface.borrow().open {
            log::debug!("begin_drawing on a shut-down window ignored");
            return;
        }
        self.in_frame = true;
        self.stats = RenderStats::default();
    }

    fn end_drawing(&mut self) {
        if self.in_frame {
            let mut surface = self.surface.borrow_mut();
            if surface.open {
                surface.present();
            }
        }
        self.in_frame = false;
    }

    fn clear(&mut self, color: Color) {
        if !self.ready() {
            return;
        }
        raster::fill(&mut self.surface.borrow_mut(), color);
    }

    fn draw_pixel(&mut self, pos: Vector2, color: Color) {
        if !self.ready() {
            return;
        }
        self.stats.draw_calls += 1;
        raster::put_pixel(
            &mut self.surface.borrow_mut(),
            pos.x as i32,
            pos.y as i32,
            color,
        );
    }

    fn draw_line(&mut self, start: Vector2, end: Vector2, thickness: f32, color: Color) {
        if !self.ready() {
            return;
        }
        self.stats.draw_calls += 1;
        raster::line(&mut self.surface.borrow_mut(), start, end, thickness, color);
    }

    fn draw_rectangle(&mut self, rect: Rectangle, color: Color) {
        if !self.ready() {
            return;
        }
        self.stats.draw_calls += 1;
        raster::fill_rect(&mut self.surface.borrow_mut(), rect, color);
    }

    fn draw_rectangle_lines(&mut self, rect: Rectangle, thickness: f32, color: Color) {
        if !self.ready() {
            return;
        }
        self.stats.draw_calls += 1;
        raster::rect_lines(&mut self.surface.borrow_mut(), rect, thickness, color);
    }

    fn draw_circle(&mut self, center: Vector2, radius: f32, color: Color) {
        if !self.ready() {
            return;
        }
        self.stats.draw_calls += 1;
        raster::fill_circle(&mut self.surface.borrow_mut(), center, radius, color);
    }

    fn draw_triangle(&mut self, v1: Vector2, v2: Vector2, v3: Vector2, color: Color) {
        if !self.ready() {
            return;
        }
        self.stats.draw_calls += 1;
        raster::fill_triangle(&mut self.surface.borrow_mut(), v1, v2, v3, color);
    }

    fn load_texture(&mut self, path: &str) -> Texture {
        match image::open(path) {
            Ok(img) => {
                let rgba = img.to_rgba8();
                let (width, height) = rgba.dimensions();
                let handle = self.textures.add(TexturePixels {
                    width,
                    height,
                    rgba: rgba.into_raw(),
                });
                log::debug!("loaded texture {path} ({width}x{height}) as handle {handle}");
                Texture {
                    handle: TextureHandle(handle),
                    width,
                    height,
                }
            }
            Err(err) => {
                log::warn!("failed to load texture {path}: {err}");
                Texture::INVALID
            }
        }
    }

    fn unload_texture(&mut self, texture: Texture) {
        if self.textures.remove(texture.handle.0).is_some() {
            log::debug!("unloaded texture handle {}", texture.handle.0);
        }
    }

    fn draw_texture(&mut self, texture: Texture, pos: Vector2, tint: Color) {
        if !self.ready() {
            return;
        }
        self.stats.draw_calls += 1;
        let Some(tex) = self.textures.get(texture.handle.0) else {
            return;
        };
        self.stats.textures_drawn += 1;
        let src = Rectangle::new(0.0, 0.0, tex.width as f32, tex.height as f32);
        raster::blit(&mut self.surface.borrow_mut(), tex, src, pos, tint);
    }

    fn draw_texture_region(&mut self, texture: Texture, src: Rectangle, pos: Vector2, tint: Color) {
        if !self.ready() {
            return;
        }
        self.stats.draw_calls += 1;
        let Some(tex) = self.textures.get(texture.handle.0) else {
            return;
        };
        self.stats.textures_drawn += 1;
        raster::blit(&mut self.surface.borrow_mut(), tex, src, pos, tint);
    }

    fn draw_texture_ex(
        &mut self,
        texture: Texture,
        pos: Vector2,
        origin: Vector2,
        rotation: f32,
        scale: f32,
        flip: Flip,
        tint: Color,
    ) {
        if !self.ready() {
            return;
        }
        self.stats.draw_calls += 1;
        let Some(tex) = self.textures.get(texture.handle.0) else {
            return;
        };
        self.stats.textures_drawn += 1;
        raster::blit_ex(
            &mut self.surface.borrow_mut(),
            tex,
            pos,
            origin,
            rotation,
            scale,
            flip,
            tint,
        );
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
            Ok(face) => {
                let handle = self.fonts.add(LoadedFont {
                    face,
                    size: size as f32,
                });
                log::debug!("loaded font {path} at {size}px as handle {handle}");
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
        if self.fonts.remove(font.handle.0).is_some() {
            log::debug!("unloaded font handle {}", font.handle.0);
        }
    }

    fn draw_text(&mut self, font: Font, text: &str, pos: Vector2, color: Color) {
        if !self.ready() {
            return;
        }
        self.stats.draw_calls += 1;
        if self.fonts.contains(font.handle.0) {
            self.draw_loaded_text(font.handle, text, pos, color);
        } else {
            // Built-in face at roughly the original's 16px default.
            self.draw_builtin_text(text, pos, 2, color);
        }
    }

    fn draw_text_default(&mut self, text: &str, pos: Vector2, size: u32, color: Color) {
        if !self.ready() {
            return;
        }
        self.stats.draw_calls += 1;
        self.draw_builtin_text(text, pos, (size as usize / 8).max(1), color);
    }

    fn release_all_resources(&mut self) {
        let textures = self.textures.len();
        let fonts = self.fonts.len();
        self.textures.clear(drop);
        self.fonts.clear(drop);
        if textures + fonts > 0 {
            log::info!("software renderer released {textures} textures, {fonts} fonts");
        }
    }

    fn stats(&self) -> RenderStats {
        self.stats
    }
}

impl Drop for SoftRenderer {
    fn drop(&mut self) {
        self.release_all_resources();
        self.surface.borrow_mut().renderer_bound = false;
    }
}
