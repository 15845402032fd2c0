//! Cross-component backend tests
//!
//! Unit suites live next to their modules; everything here exercises whole
//! backends through the public contracts: construction/teardown ordering,
//! hot-swap isolation, event flow, and the software rasterizer's output.

mod event_flow;
mod lifecycle;
mod soft_rendering;

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Tests that create software backends run serially so the global
/// subsystem's reference count stays observable.
static SERIAL: Mutex<()> = Mutex::new(());

fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Write a small solid-color PNG fixture and return its path.
fn write_temp_png(name: &str, width: u32, height: u32, rgba: [u8; 4]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("unigfx_{name}.png"));
    let pixels: Vec<u8> = rgba
        .iter()
        .copied()
        .cycle()
        .take(width as usize * height as usize * 4)
        .collect();
    image::save_buffer(&path, &pixels, width, height, image::ColorType::Rgba8)
        .expect("failed to write PNG fixture");
    path
}
