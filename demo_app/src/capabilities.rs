//! Draw every primitive the renderer contract offers and save the result
//!
//! A visual smoke test for the software backend: shapes, textures (plain,
//! region, rotated/flipped), and text, finished with a screenshot so the
//! output can actually be looked at.

use unigfx::backends::soft::SoftBackend;
use unigfx::prelude::*;

/// Generate a small checkerboard PNG to exercise the texture paths.
fn write_checkerboard(path: &std::path::Path) -> image::ImageResult<()> {
    let mut img = image::RgbaImage::new(32, 32);
    for (x, y, px) in img.enumerate_pixels_mut() {
        *px = if (x / 8 + y / 8) % 2 == 0 {
            image::Rgba([220, 60, 60, 255])
        } else {
            image::Rgba([60, 60, 220, 255])
        };
    }
    img.save(path)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    unigfx::foundation::logging::init("info");

    let mut backend = create_backend(BackendKind::Software)?;
    backend
        .window()
        .create("Capabilities", 640, 360, WindowFlags::empty())?;
    log::info!("active backend: {}", backend.kind());

    let tex_path = std::env::temp_dir().join("unigfx_checkerboard.png");
    write_checkerboard(&tex_path)?;
    let texture = backend
        .renderer()
        .load_texture(tex_path.to_str().unwrap_or_default());
    // Deliberately missing: proves load failure degrades instead of failing.
    let missing = backend.renderer().load_texture("assets/not_there.png");
    log::info!(
        "checkerboard valid: {}, missing valid: {}",
        texture.is_valid(),
        missing.is_valid()
    );

    backend.window().poll_events();
    let renderer = backend.renderer();
    renderer.begin_drawing();
    renderer.clear(Color::rgb(24, 24, 28));

    // Shapes.
    renderer.draw_pixel(Vector2::new(8.0, 8.0), Color::WHITE);
    renderer.draw_line(
        Vector2::new(20.0, 40.0),
        Vector2::new(180.0, 60.0),
        1.0,
        Color::rgb(120, 200, 120),
    );
    renderer.draw_line(
        Vector2::new(20.0, 70.0),
        Vector2::new(180.0, 90.0),
        6.0,
        Color::rgb(120, 200, 120),
    );
    renderer.draw_rectangle(Rectangle::new(20.0, 110.0, 70.0, 50.0), Color::rgb(200, 120, 40));
    renderer.draw_rectangle_lines(
        Rectangle::new(110.0, 110.0, 70.0, 50.0),
        3.0,
        Color::rgb(200, 120, 40),
    );
    renderer.draw_circle(Vector2::new(60.0, 220.0), 35.0, Color::rgb(90, 140, 230));
    renderer.draw_triangle(
        Vector2::new(120.0, 260.0),
        Vector2::new(180.0, 190.0),
        Vector2::new(230.0, 250.0),
        Color::rgb(230, 90, 140),
    );

    // Textures: plain, region, transformed, and the missing one (no-op).
    renderer.draw_texture(texture, Vector2::new(280.0, 40.0), Color::WHITE);
    renderer.draw_texture_region(
        texture,
        Rectangle::new(0.0, 0.0, 16.0, 16.0),
        Vector2::new(330.0, 40.0),
        Color::WHITE,
    );
    renderer.draw_texture_ex(
        texture,
        Vector2::new(420.0, 80.0),
        Vector2::new(16.0, 16.0),
        45.0,
        2.0,
        Flip::Horizontal,
        Color::WHITE,
    );
    renderer.draw_texture(missing, Vector2::new(500.0, 40.0), Color::WHITE);

    // Text: loaded-font path degrades to the built-in face when no font
    // file is at hand.
    let font = renderer.load_font("assets/missing_font.ttf", 20);
    renderer.draw_text(
        font,
        "FALLBACK FACE",
        Vector2::new(280.0, 200.0),
        Color::rgb(255, 230, 120),
    );
    renderer.draw_text_default("UNIGFX CAPABILITIES", Vector2::new(280.0, 250.0), 24, Color::WHITE);

    let stats = renderer.stats();
    renderer.end_drawing();
    log::info!(
        "frame: {} draw calls, {} textures, {} glyphs",
        stats.draw_calls,
        stats.textures_drawn,
        stats.glyphs_drawn
    );

    let shot_path = std::env::temp_dir().join("unigfx_capabilities.png");
    if let Some(shot) = backend
        .as_any_mut()
        .downcast_mut::<SoftBackend>()
        .expect("software backend")
        .screenshot()
    {
        shot.save(&shot_path)?;
        log::info!("screenshot saved to {}", shot_path.display());
    }

    backend.renderer().unload_texture(texture);
    backend.renderer().unload_font(font);
    Ok(())
}
