//! Software rasterizer output through the public contracts

use super::{serial, write_temp_png};
use crate::backend::{create_backend, BackendKind, GraphicsBackend};
use crate::backends::soft::SoftBackend;
use crate::renderer::Renderer;
use crate::types::{Color, Rectangle, Vector2, WindowFlags};
use crate::window::Window;

fn soft_backend(width: u32, height: u32) -> Box<dyn GraphicsBackend> {
    let mut backend = create_backend(BackendKind::Software).unwrap();
    backend
        .window()
        .create("render", width, height, WindowFlags::empty())
        .unwrap();
    backend
}

fn pixel(backend: &mut dyn GraphicsBackend, x: u32, y: u32) -> Color {
    let shot = backend
        .as_any_mut()
        .downcast_mut::<SoftBackend>()
        .unwrap()
        .screenshot()
        .expect("window already shut down");
    let px = shot.get_pixel(x, y);
    Color::rgba(px.0[0], px.0[1], px.0[2], px.0[3])
}

#[test]
fn clear_and_rectangle_reach_the_presented_frame() {
    let _guard = serial();
    let mut backend = soft_backend(32, 32);

    let renderer = backend.renderer();
    renderer.begin_drawing();
    renderer.clear(Color::rgb(21, 21, 21));
    renderer.draw_rectangle(Rectangle::new(4.0, 4.0, 8.0, 8.0), Color::RED);
    renderer.end_drawing();

    assert_eq!(pixel(backend.as_mut(), 0, 0), Color::rgba(21, 21, 21, 255));
    assert_eq!(pixel(backend.as_mut(), 6, 6), Color::RED);
}

#[test]
fn draws_outside_the_bracket_are_no_ops() {
    let _guard = serial();
    let mut backend = soft_backend(16, 16);

    // Present an empty cleared frame first.
    backend.renderer().begin_drawing();
    backend.renderer().clear(Color::BLACK);
    backend.renderer().end_drawing();

    // Outside the bracket: nothing may change, nothing may crash.
    backend
        .renderer()
        .draw_rectangle(Rectangle::new(0.0, 0.0, 16.0, 16.0), Color::RED);
    backend
        .renderer()
        .draw_circle(Vector2::new(8.0, 8.0), 4.0, Color::RED);
    assert_eq!(backend.renderer().stats().draw_calls, 0);
    assert_eq!(pixel(backend.as_mut(), 8, 8), Color::BLACK);
}

#[test]
fn loaded_texture_draws_and_missing_texture_does_not() {
    let _guard = serial();
    let mut backend = soft_backend(16, 16);

    let png = write_temp_png("draw_tex", 4, 4, [0, 255, 0, 255]);
    let good = backend.renderer().load_texture(png.to_str().unwrap());
    assert!(good.is_valid());
    assert_eq!((good.width, good.height), (4, 4));

    let bad = backend
        .renderer()
        .load_texture("/nonexistent/texture.png");
    assert!(!bad.is_valid());

    let renderer = backend.renderer();
    renderer.begin_drawing();
    renderer.clear(Color::BLACK);
    renderer.draw_texture(good, Vector2::new(2.0, 2.0), Color::WHITE);
    renderer.draw_texture(bad, Vector2::new(8.0, 8.0), Color::WHITE);
    let stats = renderer.stats();
    renderer.end_drawing();

    assert_eq!(stats.draw_calls, 2);
    assert_eq!(stats.textures_drawn, 1);
    assert_eq!(pixel(backend.as_mut(), 3, 3), Color::GREEN);
    assert_eq!(pixel(backend.as_mut(), 9, 9), Color::BLACK);
}

#[test]
fn unloaded_texture_stops_drawing_without_errors() {
    let _guard = serial();
    let mut backend = soft_backend(16, 16);

    let png = write_temp_png("unload_tex", 2, 2, [255, 255, 0, 255]);
    let texture = backend.renderer().load_texture(png.to_str().unwrap());
    backend.renderer().unload_texture(texture);

    let renderer = backend.renderer();
    renderer.begin_drawing();
    renderer.clear(Color::BLACK);
    renderer.draw_texture(texture, Vector2::new(0.0, 0.0), Color::WHITE);
    renderer.draw_texture_region(
        texture,
        Rectangle::new(0.0, 0.0, 2.0, 2.0),
        Vector2::new(4.0, 4.0),
        Color::WHITE,
    );
    let stats = renderer.stats();
    renderer.end_drawing();
    assert_eq!(stats.textures_drawn, 0);
    assert_eq!(pixel(backend.as_mut(), 0, 0), Color::BLACK);
}

#[test]
fn text_falls_back_to_the_builtin_face() {
    let _guard = serial();
    let mut backend = soft_backend(64, 32);

    // A file that is not a font yields the sentinel...
    let not_a_font = write_temp_png("not_a_font", 2, 2, [0, 0, 0, 255]);
    let font = backend
        .renderer()
        .load_font(not_a_font.to_str().unwrap(), 16);
    assert!(!font.is_valid());

    // ...and drawing with it still puts glyph pixels on screen.
    let renderer = backend.renderer();
    renderer.begin_drawing();
    renderer.clear(Color::BLACK);
    renderer.draw_text(font, "HI", Vector2::new(2.0, 2.0), Color::WHITE);
    let stats = renderer.stats();
    renderer.end_drawing();
    assert_eq!(stats.glyphs_drawn, 2);

    let shot = backend
        .as_any_mut()
        .downcast_mut::<SoftBackend>()
        .unwrap()
        .screenshot()
        .unwrap();
    let lit = shot.pixels().filter(|p| p.0[0] > 0).count();
    assert!(lit > 0, "fallback text drew no pixels");
}

#[test]
fn default_text_scales_with_the_requested_size() {
    let _guard = serial();
    let mut backend = soft_backend(128, 64);

    let renderer = backend.renderer();
    renderer.begin_drawing();
    renderer.clear(Color::BLACK);
    renderer.draw_text_default("A", Vector2::new(0.0, 0.0), 8, Color::WHITE);
    renderer.draw_text_default("A", Vector2::new(32.0, 0.0), 32, Color::WHITE);
    renderer.end_drawing();

    let shot = backend
        .as_any_mut()
        .downcast_mut::<SoftBackend>()
        .unwrap()
        .screenshot()
        .unwrap();
    let small = shot
        .enumerate_pixels()
        .filter(|(x, _, p)| *x < 32 && p.0[0] > 0)
        .count();
    let large = shot
        .enumerate_pixels()
        .filter(|(x, _, p)| *x >= 32 && p.0[0] > 0)
        .count();
    assert!(small > 0 && large > small, "{large} should exceed {small}");
}

#[test]
fn stats_reset_each_frame() {
    let _guard = serial();
    let mut backend = soft_backend(16, 16);

    let renderer = backend.renderer();
    renderer.begin_drawing();
    renderer.draw_pixel(Vector2::new(1.0, 1.0), Color::WHITE);
    renderer.draw_line(
        Vector2::new(0.0, 0.0),
        Vector2::new(8.0, 8.0),
        1.0,
        Color::WHITE,
    );
    assert_eq!(renderer.stats().draw_calls, 2);
    renderer.end_drawing();

    renderer.begin_drawing();
    assert_eq!(renderer.stats().draw_calls, 0);
    renderer.end_drawing();
}

#[test]
fn drawing_after_shutdown_is_absorbed() {
    let _guard = serial();
    let mut backend = soft_backend(16, 16);
    backend.window().shutdown();

    let renderer = backend.renderer();
    renderer.begin_drawing();
    renderer.clear(Color::RED);
    renderer.draw_rectangle(Rectangle::new(0.0, 0.0, 8.0, 8.0), Color::RED);
    renderer.end_drawing();
    assert_eq!(renderer.stats().draw_calls, 0);

    let concrete = backend.as_any_mut().downcast_mut::<SoftBackend>().unwrap();
    assert!(concrete.screenshot().is_none());
}
