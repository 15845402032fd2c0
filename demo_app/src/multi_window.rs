//! Two backends, two windows, one thread
//!
//! Round-robin drives a Software and a Headless backend side by side. Each
//! keeps its own window, input tracker, and resource handles; nothing is
//! shared, which is the whole point of the exercise.

use unigfx::backends::soft::SoftBackend;
use unigfx::prelude::*;

const FRAMES: u32 = 120;

fn init_backend(
    kind: BackendKind,
    title: &str,
) -> Result<Box<dyn GraphicsBackend>, BackendError> {
    let mut backend = create_backend(kind)?;
    backend
        .window()
        .create(title, 320, 240, WindowFlags::RESIZABLE)?;
    backend.window().set_target_fps(120);
    Ok(backend)
}

fn draw_scene(backend: &mut dyn GraphicsBackend, frame: u32) {
    let label = format!("{} window", backend.kind());
    let phase = frame as f32 / FRAMES as f32;
    let renderer = backend.renderer();
    renderer.begin_drawing();
    renderer.clear(Color::rgb(16, 24, 32));
    renderer.draw_circle(
        Vector2::new(60.0 + 200.0 * phase, 120.0),
        20.0,
        Color::rgb(240, 180, 40),
    );
    renderer.draw_rectangle_lines(Rectangle::new(10.0, 10.0, 300.0, 220.0), 2.0, Color::WHITE);
    renderer.draw_text_default(&label, Vector2::new(20.0, 20.0), 16, Color::WHITE);
    renderer.end_drawing();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    unigfx::foundation::logging::init("info");

    let mut soft = init_backend(BackendKind::Software, "Window A (software)")?;
    let mut headless = init_backend(BackendKind::Headless, "Window B (headless)")?;

    for frame in 0..FRAMES {
        // Synchronous round-robin: pump A, pump B, draw A, draw B.
        soft.window().poll_events();
        headless.window().poll_events();
        draw_scene(soft.as_mut(), frame);
        draw_scene(headless.as_mut(), frame);
    }

    log::info!(
        "window A drew {} calls/frame, window B drew {} calls/frame",
        soft.renderer().stats().draw_calls,
        headless.renderer().stats().draw_calls,
    );

    let shot_path = std::env::temp_dir().join("unigfx_multi_window.png");
    if let Some(shot) = soft
        .as_any_mut()
        .downcast_mut::<SoftBackend>()
        .expect("software backend")
        .screenshot()
    {
        shot.save(&shot_path)?;
        log::info!("window A screenshot saved to {}", shot_path.display());
    }

    Ok(())
}
