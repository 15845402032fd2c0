//! Backend construction and teardown ordering

use super::{serial, write_temp_png};
use crate::backend::{create_backend, BackendKind, GraphicsBackend};
use crate::backends::soft::{subsystem, SoftBackend};
use crate::renderer::Renderer;
use crate::types::WindowFlags;
use crate::window::{Window, WindowError};

#[test]
fn subsystem_lives_until_the_last_backend_drops() {
    let _guard = serial();
    let base = subsystem::live_backend_count();

    let first = create_backend(BackendKind::Software).unwrap();
    let second = create_backend(BackendKind::Software).unwrap();
    assert_eq!(subsystem::live_backend_count(), base + 2);

    // The first backend to go must not take the global state with it.
    drop(first);
    assert_eq!(subsystem::live_backend_count(), base + 1);
    assert!(subsystem::is_initialized());

    drop(second);
    assert_eq!(subsystem::live_backend_count(), base);
}

#[test]
fn renderer_tears_down_before_the_window() {
    let _guard = serial();
    let mut backend = SoftBackend::new().unwrap();
    backend
        .window()
        .create("teardown", 64, 64, WindowFlags::empty())
        .unwrap();

    let png = write_temp_png("teardown_tex", 2, 2, [10, 20, 30, 255]);
    let texture = backend.renderer().load_texture(png.to_str().unwrap());
    assert!(texture.is_valid());

    let surface = backend.surface_handle();
    drop(backend);

    let surface = surface.borrow();
    assert!(!surface.open, "window did not shut down");
    assert!(!surface.renderer_bound, "renderer never unbound");
    assert!(
        !surface.closed_while_bound,
        "window closed while the renderer was still bound"
    );
}

#[test]
fn shutdown_and_unload_are_idempotent() {
    let _guard = serial();
    let mut backend = create_backend(BackendKind::Software).unwrap();
    backend
        .window()
        .create("idempotent", 32, 32, WindowFlags::empty())
        .unwrap();

    let png = write_temp_png("idempotent_tex", 2, 2, [1, 2, 3, 255]);
    let texture = backend.renderer().load_texture(png.to_str().unwrap());
    assert!(texture.is_valid());

    backend.renderer().unload_texture(texture);
    backend.renderer().unload_texture(texture);

    backend.renderer().release_all_resources();
    backend.renderer().release_all_resources();

    backend.window().shutdown();
    backend.window().shutdown();
    assert_eq!(backend.window().size(), (32, 32));
}

#[test]
fn create_reconfigures_in_place() {
    let _guard = serial();
    let mut backend = SoftBackend::new().unwrap();
    let surface_before = backend.surface_handle();

    backend
        .window()
        .create("first", 100, 80, WindowFlags::empty())
        .unwrap();
    assert_eq!(backend.window().size(), (100, 80));

    // A second create must reconfigure the same surface, not allocate a
    // fresh one the renderer has never seen.
    backend
        .window()
        .create("second", 200, 150, WindowFlags::RESIZABLE)
        .unwrap();
    assert_eq!(backend.window().size(), (200, 150));
    assert!(std::rc::Rc::ptr_eq(&surface_before, &backend.surface_handle()));
}

#[test]
fn zero_sized_create_is_rejected() {
    let _guard = serial();
    let mut backend = create_backend(BackendKind::Headless).unwrap();
    let result = backend.window().create("bad", 0, 600, WindowFlags::empty());
    assert!(matches!(result, Err(WindowError::CreationFailed(_))));
}

#[test]
fn unsupported_flags_are_silently_ignored() {
    let _guard = serial();
    let mut backend = create_backend(BackendKind::Software).unwrap();
    // An offscreen surface supports neither bit; create must still succeed.
    backend
        .window()
        .create(
            "flags",
            64,
            64,
            WindowFlags::FULLSCREEN | WindowFlags::VSYNC | WindowFlags::ALWAYS_ON_TOP,
        )
        .unwrap();
    assert_eq!(backend.window().size(), (64, 64));
}

#[test]
fn pacing_spaces_out_event_pumps() {
    let _guard = serial();
    let mut backend = create_backend(BackendKind::Headless).unwrap();
    backend
        .window()
        .create("paced", 32, 32, WindowFlags::empty())
        .unwrap();
    backend.window().set_target_fps(100);

    backend.window().poll_events();
    let before = std::time::Instant::now();
    backend.window().poll_events();
    assert!(before.elapsed() >= std::time::Duration::from_millis(9));
}
