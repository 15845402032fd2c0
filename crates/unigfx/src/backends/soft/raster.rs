//! Offscreen surface and CPU rasterization primitives
//!
//! The surface is double-buffered: draw calls blend into the back buffer
//! and presentation copies it to the front buffer, so readers (screenshots,
//! tests) always see a completed frame. Pixels are row-major RGBA8.

use crate::types::{Color, Flip, Rectangle, Vector2};

const BYTES_PER_PIXEL: usize = 4;

/// The software window's drawing target.
///
/// Created once per window and reconfigured in place on window re-creation,
/// so a renderer bound to it never dangles. `renderer_bound` models the
/// native-library rule that a renderer must be torn down before its window:
/// closing while bound is recorded rather than tolerated silently.
pub(crate) struct Surface {
    pub width: u32,
    pub height: u32,
    pub back: Vec<u8>,
    pub front: Vec<u8>,
    /// False once the window is shut down; draw calls check this.
    pub open: bool,
    /// A renderer is currently bound to this surface.
    pub renderer_bound: bool,
    /// The window closed while a renderer was still bound.
    pub closed_while_bound: bool,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * BYTES_PER_PIXEL;
        Self {
            width,
            height,
            back: vec![0; len],
            front: vec![0; len],
            open: true,
            renderer_bound: false,
            closed_while_bound: false,
        }
    }

    /// Reconfigure the pixel storage for a new client-area size.
    pub fn resize(&mut self, width: u32, height: u32) {
        let len = width as usize * height as usize * BYTES_PER_PIXEL;
        self.width = width;
        self.height = height;
        self.back = vec![0; len];
        self.front = vec![0; len];
    }

    /// Copy the finished back buffer to the front buffer.
    pub fn present(&mut self) {
        self.front.copy_from_slice(&self.back);
    }

    /// Mark the surface shut down. Idempotent.
    pub fn close(&mut self) {
        if self.open {
            if self.renderer_bound {
                self.closed_while_bound = true;
                log::warn!("surface closed while a renderer is still bound");
            }
            self.open = false;
        }
    }
}

fn blend_channel(src: u8, dst: u8, alpha: u32) -> u8 {
    ((u32::from(src) * alpha + u32::from(dst) * (255 - alpha)) / 255) as u8
}

/// Source-over blend of one pixel into the back buffer. Out-of-bounds
/// coordinates are clipped away.
pub(crate) fn put_pixel(surface: &mut Surface, x: i32, y: i32, color: Color) {
    if x < 0 || y < 0 || x >= surface.width as i32 || y >= surface.height as i32 {
        return;
    }
    if color.a == 0 {
        return;
    }
    let idx = (y as usize * surface.width as usize + x as usize) * BYTES_PER_PIXEL;
    let dst = &mut surface.back[idx..idx + BYTES_PER_PIXEL];
    if color.a == 255 {
        dst.copy_from_slice(&[color.r, color.g, color.b, 255]);
        return;
    }
    let a = u32::from(color.a);
    dst[0] = blend_channel(color.r, dst[0], a);
    dst[1] = blend_channel(color.g, dst[1], a);
    dst[2] = blend_channel(color.b, dst[2], a);
    dst[3] = (a + u32::from(dst[3]) * (255 - a) / 255) as u8;
}

/// Read a presented (front buffer) pixel; used by screenshot capture.
pub(crate) fn front_pixel(surface: &Surface, x: u32, y: u32) -> Color {
    let idx = (y as usize * surface.width as usize + x as usize) * BYTES_PER_PIXEL;
    let px = &surface.front[idx..idx + BYTES_PER_PIXEL];
    Color::rgba(px[0], px[1], px[2], px[3])
}

/// Overwrite the whole back buffer with a solid color (no blending).
pub(crate) fn fill(surface: &mut Surface, color: Color) {
    for px in surface.back.chunks_exact_mut(BYTES_PER_PIXEL) {
        px.copy_from_slice(&[color.r, color.g, color.b, color.a]);
    }
}

/// Bresenham hairline.
pub(crate) fn hairline(surface: &mut Surface, start: Vector2, end: Vector2, color: Color) {
    let (mut x0, mut y0) = (start.x as i32, start.y as i32);
    let (x1, y1) = (end.x as i32, end.y as i32);
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put_pixel(surface, x0, y0, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Line segment; thickness beyond one pixel is realized as a quad built
/// from two triangles.
pub(crate) fn line(
    surface: &mut Surface,
    start: Vector2,
    end: Vector2,
    thickness: f32,
    color: Color,
) {
    if thickness <= 1.0 {
        hairline(surface, start, end, color);
        return;
    }

    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let length = (dx * dx + dy * dy).sqrt();
    if length < 0.001 {
        return;
    }

    // Perpendicular half-thickness offset.
    let px = -dy / length * (thickness / 2.0);
    let py = dx / length * (thickness / 2.0);

    let v1 = Vector2::new(start.x + px, start.y + py);
    let v2 = Vector2::new(start.x - px, start.y - py);
    let v3 = Vector2::new(end.x + px, end.y + py);
    let v4 = Vector2::new(end.x - px, end.y - py);

    fill_triangle(surface, v1, v2, v3, color);
    fill_triangle(surface, v2, v3, v4, color);
}

/// Axis-aligned filled rectangle.
pub(crate) fn fill_rect(surface: &mut Surface, rect: Rectangle, color: Color) {
    let x0 = rect.x as i32;
    let y0 = rect.y as i32;
    let x1 = (rect.x + rect.width).ceil() as i32;
    let y1 = (rect.y + rect.height).ceil() as i32;
    for y in y0..y1 {
        for x in x0..x1 {
            put_pixel(surface, x, y, color);
        }
    }
}

/// Rectangle outline as four edge strips.
pub(crate) fn rect_lines(surface: &mut Surface, rect: Rectangle, thickness: f32, color: Color) {
    let t = thickness.max(1.0);
    let top = Rectangle::new(rect.x, rect.y, rect.width, t);
    let bottom = Rectangle::new(rect.x, rect.y + rect.height - t, rect.width, t);
    let left = Rectangle::new(rect.x, rect.y, t, rect.height);
    let right = Rectangle::new(rect.x + rect.width - t, rect.y, t, rect.height);
    fill_rect(surface, top, color);
    fill_rect(surface, bottom, color);
    fill_rect(surface, left, color);
    fill_rect(surface, right, color);
}

/// Scanline-filled circle: each row covers the chord at that height.
pub(crate) fn fill_circle(surface: &mut Surface, center: Vector2, radius: f32, color: Color) {
    if radius <= 0.0 {
        return;
    }
    let y_start = (center.y - radius) as i32;
    let y_end = (center.y + radius) as i32;
    for y in y_start..=y_end {
        let dy = y as f32 + 0.5 - center.y;
        let half = radius * radius - dy * dy;
        if half < 0.0 {
            continue;
        }
        let dx = half.sqrt();
        let x_start = (center.x - dx) as i32;
        let x_end = (center.x + dx) as i32;
        for x in x_start..=x_end {
            put_pixel(surface, x, y, color);
        }
    }
}

/// Scanline-filled triangle: vertices sorted by y, edges interpolated per
/// row, spans filled between them.
pub(crate) fn fill_triangle(
    surface: &mut Surface,
    v1: Vector2,
    v2: Vector2,
    v3: Vector2,
    color: Color,
) {
    #[derive(Clone, Copy)]
    struct Point {
        x: i32,
        y: i32,
    }

    let mut p1 = Point {
        x: v1.x as i32,
        y: v1.y as i32,
    };
    let mut p2 = Point {
        x: v2.x as i32,
        y: v2.y as i32,
    };
    let mut p3 = Point {
        x: v3.x as i32,
        y: v3.y as i32,
    };

    if p2.y < p1.y {
        std::mem::swap(&mut p1, &mut p2);
    }
    if p3.y < p1.y {
        std::mem::swap(&mut p1, &mut p3);
    }
    if p3.y < p2.y {
        std::mem::swap(&mut p2, &mut p3);
    }

    let edge_interp = |a: Point, b: Point, y: i32| -> i32 {
        if a.y == b.y {
            a.x
        } else {
            a.x + (b.x - a.x) * (y - a.y) / (b.y - a.y)
        }
    };

    let mut span = |y: i32, mut x1: i32, mut x2: i32| {
        if x1 > x2 {
            std::mem::swap(&mut x1, &mut x2);
        }
        for x in x1..=x2 {
            put_pixel(surface, x, y, color);
        }
    };

    // Bottom half: p1→p2 against the long edge p1→p3.
    for y in p1.y..=p2.y {
        span(y, edge_interp(p1, p2, y), edge_interp(p1, p3, y));
    }
    // Top half: p2→p3 against the long edge.
    for y in p2.y..=p3.y {
        span(y, edge_interp(p2, p3, y), edge_interp(p1, p3, y));
    }
}

/// Decoded texture pixels owned by the software renderer's resource manager.
pub(crate) struct TexturePixels {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TexturePixels {
    fn sample(&self, u: i32, v: i32) -> Option<Color> {
        if u < 0 || v < 0 || u >= self.width as i32 || v >= self.height as i32 {
            return None;
        }
        let idx = (v as usize * self.width as usize + u as usize) * BYTES_PER_PIXEL;
        let px = &self.rgba[idx..idx + BYTES_PER_PIXEL];
        Some(Color::rgba(px[0], px[1], px[2], px[3]))
    }
}

fn modulate(texel: Color, tint: Color) -> Color {
    Color::rgba(
        ((u32::from(texel.r) * u32::from(tint.r)) / 255) as u8,
        ((u32::from(texel.g) * u32::from(tint.g)) / 255) as u8,
        ((u32::from(texel.b) * u32::from(tint.b)) / 255) as u8,
        ((u32::from(texel.a) * u32::from(tint.a)) / 255) as u8,
    )
}

/// 1:1 blit of a texture region to a destination position.
pub(crate) fn blit(
    surface: &mut Surface,
    tex: &TexturePixels,
    src: Rectangle,
    dst: Vector2,
    tint: Color,
) {
    let sw = src.width as i32;
    let sh = src.height as i32;
    for row in 0..sh {
        for col in 0..sw {
            let Some(texel) = tex.sample(src.x as i32 + col, src.y as i32 + row) else {
                continue;
            };
            put_pixel(
                surface,
                dst.x as i32 + col,
                dst.y as i32 + row,
                modulate(texel, tint),
            );
        }
    }
}

/// Rotated/scaled/mirrored blit.
///
/// `origin` is in unscaled texture-local pixels and maps onto `pos`;
/// `rotation` is clockwise degrees about that point. The destination is
/// walked over the transformed quad's bounding box with inverse mapping
/// back into texel space; mirroring negates the local axis rather than
/// re-sampling.
pub(crate) fn blit_ex(
    surface: &mut Surface,
    tex: &TexturePixels,
    pos: Vector2,
    origin: Vector2,
    rotation: f32,
    scale: f32,
    flip: Flip,
    tint: Color,
) {
    if scale <= 0.0 {
        return;
    }
    let (sin, cos) = rotation.to_radians().sin_cos();
    let w = tex.width as f32 * scale;
    let h = tex.height as f32 * scale;
    let ox = origin.x * scale;
    let oy = origin.y * scale;

    // Transformed corners of the destination quad, for the bounding box.
    let corners = [
        (-ox, -oy),
        (w - ox, -oy),
        (-ox, h - oy),
        (w - ox, h - oy),
    ];
    let mut min_x = f32::MAX;
    let mut min_y = f32::MAX;
    let mut max_x = f32::MIN;
    let mut max_y = f32::MIN;
    for (lx, ly) in corners {
        let rx = lx * cos - ly * sin + pos.x;
        let ry = lx * sin + ly * cos + pos.y;
        min_x = min_x.min(rx);
        min_y = min_y.min(ry);
        max_x = max_x.max(rx);
        max_y = max_y.max(ry);
    }

    for y in min_y.floor() as i32..=max_y.ceil() as i32 {
        for x in min_x.floor() as i32..=max_x.ceil() as i32 {
            // Inverse-rotate the destination pixel back into local space.
            let dx = x as f32 + 0.5 - pos.x;
            let dy = y as f32 + 0.5 - pos.y;
            let lx = dx * cos + dy * sin;
            let ly = -dx * sin + dy * cos;

            let mut u = (lx + ox) / scale;
            let mut v = (ly + oy) / scale;
            if flip.horizontal() {
                u = tex.width as f32 - u;
            }
            if flip.vertical() {
                v = tex.height as f32 - v;
            }

            let Some(texel) = tex.sample(u.floor() as i32, v.floor() as i32) else {
                continue;
            };
            put_pixel(surface, x, y, modulate(texel, tint));
        }
    }
}

/// Blend a coverage bitmap (one byte per pixel) in a solid color; used for
/// glyph rendering.
pub(crate) fn blit_coverage(
    surface: &mut Surface,
    coverage: &[u8],
    width: usize,
    height: usize,
    x: i32,
    y: i32,
    color: Color,
) {
    for row in 0..height {
        for col in 0..width {
            let cov = u32::from(coverage[row * width + col]);
            if cov == 0 {
                continue;
            }
            let alpha = (cov * u32::from(color.a) / 255) as u8;
            put_pixel(
                surface,
                x + col as i32,
                y + row as i32,
                Color::rgba(color.r, color.g, color.b, alpha),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn back_pixel(surface: &Surface, x: u32, y: u32) -> Color {
        let idx = (y as usize * surface.width as usize + x as usize) * BYTES_PER_PIXEL;
        let px = &surface.back[idx..idx + BYTES_PER_PIXEL];
        Color::rgba(px[0], px[1], px[2], px[3])
    }

    #[test]
    fn fill_covers_every_pixel() {
        let mut surface = Surface::new(4, 4);
        fill(&mut surface, Color::RED);
        assert_eq!(back_pixel(&surface, 0, 0), Color::RED);
        assert_eq!(back_pixel(&surface, 3, 3), Color::RED);
    }

    #[test]
    fn put_pixel_clips_out_of_bounds() {
        let mut surface = Surface::new(4, 4);
        put_pixel(&mut surface, -1, 0, Color::RED);
        put_pixel(&mut surface, 4, 4, Color::RED);
        assert!(surface.back.iter().all(|&b| b == 0));
    }

    #[test]
    fn opaque_blend_overwrites_and_transparent_is_skipped() {
        let mut surface = Surface::new(2, 1);
        fill(&mut surface, Color::BLACK);
        put_pixel(&mut surface, 0, 0, Color::WHITE);
        put_pixel(&mut surface, 1, 0, Color::TRANSPARENT);
        assert_eq!(back_pixel(&surface, 0, 0), Color::WHITE);
        assert_eq!(back_pixel(&surface, 1, 0), Color::BLACK);
    }

    #[test]
    fn half_alpha_blends_toward_source() {
        let mut surface = Surface::new(1, 1);
        fill(&mut surface, Color::BLACK);
        put_pixel(&mut surface, 0, 0, Color::rgba(255, 255, 255, 128));
        let px = back_pixel(&surface, 0, 0);
        assert!((100..=156).contains(&px.r), "blended red was {}", px.r);
    }

    #[test]
    fn rect_fill_stays_inside_the_rect() {
        let mut surface = Surface::new(8, 8);
        fill_rect(&mut surface, Rectangle::new(2.0, 2.0, 3.0, 3.0), Color::GREEN);
        assert_eq!(back_pixel(&surface, 2, 2), Color::GREEN);
        assert_eq!(back_pixel(&surface, 4, 4), Color::GREEN);
        assert_eq!(back_pixel(&surface, 1, 1), Color::rgba(0, 0, 0, 0));
        assert_eq!(back_pixel(&surface, 5, 5), Color::rgba(0, 0, 0, 0));
    }

    #[test]
    fn triangle_fill_covers_its_centroid() {
        let mut surface = Surface::new(16, 16);
        fill_triangle(
            &mut surface,
            Vector2::new(1.0, 1.0),
            Vector2::new(14.0, 1.0),
            Vector2::new(7.0, 14.0),
            Color::BLUE,
        );
        assert_eq!(back_pixel(&surface, 7, 5), Color::BLUE);
        assert_eq!(back_pixel(&surface, 0, 15), Color::rgba(0, 0, 0, 0));
    }

    #[test]
    fn circle_fill_covers_center_but_not_corners() {
        let mut surface = Surface::new(16, 16);
        fill_circle(&mut surface, Vector2::new(8.0, 8.0), 5.0, Color::RED);
        assert_eq!(back_pixel(&surface, 8, 8), Color::RED);
        assert_eq!(back_pixel(&surface, 0, 0), Color::rgba(0, 0, 0, 0));
        assert_eq!(back_pixel(&surface, 15, 15), Color::rgba(0, 0, 0, 0));
    }

    #[test]
    fn present_copies_back_to_front() {
        let mut surface = Surface::new(2, 2);
        fill(&mut surface, Color::BLUE);
        assert_ne!(front_pixel(&surface, 0, 0), Color::BLUE);
        surface.present();
        assert_eq!(front_pixel(&surface, 0, 0), Color::BLUE);
    }

    #[test]
    fn flipped_blit_mirrors_the_source() {
        // 2x1 texture: red texel then blue texel.
        let tex = TexturePixels {
            width: 2,
            height: 1,
            rgba: vec![255, 0, 0, 255, 0, 0, 255, 255],
        };
        let mut surface = Surface::new(2, 1);
        blit_ex(
            &mut surface,
            &tex,
            Vector2::new(0.0, 0.0),
            Vector2::new(0.0, 0.0),
            0.0,
            1.0,
            Flip::Horizontal,
            Color::WHITE,
        );
        assert_eq!(back_pixel(&surface, 0, 0), Color::BLUE);
        assert_eq!(back_pixel(&surface, 1, 0), Color::RED);
    }
}
