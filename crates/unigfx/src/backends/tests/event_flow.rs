//! Event pump → input tracker flow through the public contracts

use super::serial;
use crate::backend::{create_backend, BackendKind, GraphicsBackend};
use crate::backends::headless::{HeadlessBackend, HeadlessEvent};
use crate::backends::soft::{SoftBackend, SoftEvent};
use crate::input::{Input, Key};
use crate::types::WindowFlags;
use crate::window::Window;

fn soft_backend() -> Box<dyn GraphicsBackend> {
    let mut backend = create_backend(BackendKind::Software).unwrap();
    backend
        .window()
        .create("events", 32, 32, WindowFlags::empty())
        .unwrap();
    backend
}

fn push_soft(backend: &mut dyn GraphicsBackend, event: SoftEvent) {
    backend
        .as_any_mut()
        .downcast_mut::<SoftBackend>()
        .unwrap()
        .push_event(event);
}

#[test]
fn press_repeat_release_across_frames() {
    let _guard = serial();
    let mut backend = soft_backend();

    // Frame 1: the press edge.
    push_soft(
        backend.as_mut(),
        SoftEvent::KeyDown {
            key: Key::Space,
            repeat: false,
        },
    );
    backend.window().poll_events();
    assert!(backend.input().is_key_pressed(Key::Space));
    assert!(backend.input().is_key_down(Key::Space));
    assert!(!backend.input().is_key_released(Key::Space));

    // Frames 2 and 3: auto-repeat traffic, no edges.
    for _ in 0..2 {
        push_soft(
            backend.as_mut(),
            SoftEvent::KeyDown {
                key: Key::Space,
                repeat: true,
            },
        );
        backend.window().poll_events();
        assert!(!backend.input().is_key_pressed(Key::Space));
        assert!(backend.input().is_key_down(Key::Space));
        assert!(!backend.input().is_key_released(Key::Space));
    }

    // Frame 4: the release edge.
    push_soft(backend.as_mut(), SoftEvent::KeyUp { key: Key::Space });
    backend.window().poll_events();
    assert!(!backend.input().is_key_pressed(Key::Space));
    assert!(!backend.input().is_key_down(Key::Space));
    assert!(backend.input().is_key_released(Key::Space));
    assert!(backend.input().is_key_up(Key::Space));

    // Frame 5: quiescent.
    backend.window().poll_events();
    assert!(!backend.input().is_key_pressed(Key::Space));
    assert!(!backend.input().is_key_down(Key::Space));
    assert!(!backend.input().is_key_released(Key::Space));
}

#[test]
fn empty_pump_clears_edges_but_keeps_level() {
    let _guard = serial();
    let mut backend = soft_backend();

    push_soft(
        backend.as_mut(),
        SoftEvent::KeyDown {
            key: Key::A,
            repeat: false,
        },
    );
    backend.window().poll_events();
    assert!(backend.input().is_key_pressed(Key::A));

    backend.window().poll_events();
    assert!(!backend.input().is_key_pressed(Key::A));
    assert!(!backend.input().is_key_released(Key::A));
    assert!(backend.input().is_key_down(Key::A));
}

#[test]
fn quit_event_raises_the_close_flag() {
    let _guard = serial();
    let mut backend = soft_backend();
    assert!(!backend.window().should_close());

    push_soft(backend.as_mut(), SoftEvent::Quit);
    backend.window().poll_events();
    assert!(backend.window().should_close());

    // The flag is a plain latch the application may clear again.
    backend.window().set_should_close(false);
    assert!(!backend.window().should_close());
}

#[test]
fn headless_pump_feeds_its_own_tracker() {
    let _guard = serial();
    let mut backend = create_backend(BackendKind::Headless).unwrap();
    backend
        .window()
        .create("headless-events", 32, 32, WindowFlags::empty())
        .unwrap();

    let concrete = backend
        .as_any_mut()
        .downcast_mut::<HeadlessBackend>()
        .unwrap();
    concrete.push_event(HeadlessEvent::KeyDown {
        key: Key::Enter,
        repeat: false,
    });
    concrete.push_event(HeadlessEvent::Quit);

    backend.window().poll_events();
    assert!(backend.input().is_key_pressed(Key::Enter));
    assert!(backend.window().should_close());
}

#[test]
fn unknown_key_never_reports_pressed() {
    let _guard = serial();
    let mut backend = soft_backend();
    backend.window().poll_events();
    assert!(!backend.input().is_key_down(Key::Null));
    assert!(!backend.input().is_key_pressed(Key::Null));
    assert!(backend.input().is_key_up(Key::Null));
}
