//! Runtime backend hot-swap demo
//!
//! Drives a movable rectangle while cycling through backend kinds on Tab,
//! exactly the flow a windowed application would use — except input here is
//! a scripted event stream, since the in-tree backends have no physical
//! keyboard behind them.

use unigfx::backends::headless::{HeadlessBackend, HeadlessEvent};
use unigfx::backends::soft::{SoftBackend, SoftEvent};
use unigfx::prelude::*;

const KINDS: [BackendKind; 2] = [BackendKind::Software, BackendKind::Headless];

fn init_backend(
    kind: BackendKind,
    title: &str,
    width: u32,
    height: u32,
    flags: WindowFlags,
    fps: u32,
) -> Result<Box<dyn GraphicsBackend>, BackendError> {
    let mut backend = create_backend(kind)?;
    backend.window().create(title, width, height, flags)?;
    backend.window().set_target_fps(fps);
    Ok(backend)
}

/// Inject a scripted event into whichever backend kind is active.
fn inject(backend: &mut dyn GraphicsBackend, key: Option<(Key, bool)>, quit: bool) {
    match backend.kind() {
        BackendKind::Software => {
            let concrete = backend
                .as_any_mut()
                .downcast_mut::<SoftBackend>()
                .expect("software backend");
            if let Some((key, down)) = key {
                concrete.push_event(if down {
                    SoftEvent::KeyDown { key, repeat: false }
                } else {
                    SoftEvent::KeyUp { key }
                });
            }
            if quit {
                concrete.push_event(SoftEvent::Quit);
            }
        }
        BackendKind::Headless => {
            let concrete = backend
                .as_any_mut()
                .downcast_mut::<HeadlessBackend>()
                .expect("headless backend");
            if let Some((key, down)) = key {
                concrete.push_event(if down {
                    HeadlessEvent::KeyDown { key, repeat: false }
                } else {
                    HeadlessEvent::KeyUp { key }
                });
            }
            if quit {
                concrete.push_event(HeadlessEvent::Quit);
            }
        }
    }
}

/// The demo's input script, by frame number.
fn script(backend: &mut dyn GraphicsBackend, frame: u32) {
    match frame {
        5 => inject(backend, Some((Key::Right, true)), false),
        65 => inject(backend, Some((Key::Right, false)), false),
        70 => inject(backend, Some((Key::Down, true)), false),
        100 => inject(backend, Some((Key::Down, false)), false),
        // Tab presses trigger the backend switches.
        110 | 180 => inject(backend, Some((Key::Tab, true)), false),
        111 | 181 => inject(backend, Some((Key::Tab, false)), false),
        240 => inject(backend, None, true),
        _ => {}
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = match std::env::args().nth(1) {
        Some(path) => AppSettings::load_from_file(&path)?,
        None => AppSettings::default(),
    };
    unigfx::foundation::logging::init(&settings.log_level);

    let title = "Movable Rectangle Demo";
    let flags = settings.window.to_flags();
    let (width, height) = (settings.window.width, settings.window.height);
    let fps = settings.window.target_fps.unwrap_or(60);

    let mut kind_index = KINDS
        .iter()
        .position(|k| Some(*k) == settings.backend_kind().ok())
        .unwrap_or(0);
    let mut backend = init_backend(KINDS[kind_index], title, width, height, flags, fps)?;

    let mut rect = Rectangle::new(100.0, 100.0, 50.0, 50.0);
    let speed = 250.0;
    let rect_color = Color::RED;
    let bg_color = Color::rgb(21, 21, 21);

    let mut frame = 0u32;
    while !backend.window().should_close() {
        script(backend.as_mut(), frame);
        backend.window().poll_events();
        let delta = backend.window().delta_time().min(0.1);

        let mut velocity = Vector2::default();
        if backend.input().is_key_down(Key::Right) {
            velocity.x += speed;
        }
        if backend.input().is_key_down(Key::Left) {
            velocity.x -= speed;
        }
        if backend.input().is_key_down(Key::Up) {
            velocity.y -= speed;
        }
        if backend.input().is_key_down(Key::Down) {
            velocity.y += speed;
        }
        if backend.input().is_key_down(Key::Escape) {
            break;
        }

        if backend.input().is_key_pressed(Key::Tab) {
            drop(backend); // full teardown before the next kind comes up
            kind_index = (kind_index + 1) % KINDS.len();
            log::info!("switching to backend: {}", KINDS[kind_index]);
            backend = init_backend(KINDS[kind_index], title, width, height, flags, fps)?;
        }

        rect.x += velocity.x * delta;
        rect.y += velocity.y * delta;

        let (win_width, win_height) = backend.window().size();
        rect.x = rect.x.clamp(0.0, win_width as f32 - rect.width);
        rect.y = rect.y.clamp(0.0, win_height as f32 - rect.height);

        let label = format!("{} Backend", backend.kind());
        let renderer = backend.renderer();
        renderer.begin_drawing();
        renderer.clear(bg_color);
        renderer.draw_rectangle(rect, rect_color);
        renderer.draw_text_default(&label, Vector2::new(50.0, 50.0), 16, Color::rgb(255, 255, 0));
        renderer.end_drawing();

        frame += 1;
    }

    log::info!("demo finished after {frame} frames at rect ({:.0}, {:.0})", rect.x, rect.y);
    Ok(())
}
