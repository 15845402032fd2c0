//! Window contract
//!
//! A window owns the native surface, the frame clock, and the event pump
//! that feeds its backend's input tracker. Implementations live in
//! [`crate::backends`]; applications only ever see the trait.

use thiserror::Error;

use crate::types::WindowFlags;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// The native window could not be created or reconfigured.
    #[error("window creation failed: {0}")]
    CreationFailed(String),

    /// An operation needs a live window but the window was shut down.
    #[error("window has been shut down")]
    Closed,
}

/// Backend-agnostic window interface.
pub trait Window {
    /// Create the native window, or reconfigure it in place.
    ///
    /// Calling `create` on an already-created window updates title, size,
    /// and flags on the existing native window rather than leaking a second
    /// one. Flags the backend does not support are silently ignored.
    fn create(
        &mut self,
        title: &str,
        width: u32,
        height: u32,
        flags: WindowFlags,
    ) -> Result<(), WindowError>;

    /// Update the title bar text.
    fn set_title(&mut self, title: &str);

    /// Current client-area size in pixels.
    fn size(&self) -> (u32, u32);

    /// Whether a close signal has been received (or requested).
    fn should_close(&self) -> bool;

    /// Programmatically request (or cancel) window closure.
    fn set_should_close(&mut self, should_close: bool);

    /// Drain all pending native events for this window.
    ///
    /// Each event is forwarded to the backend's input tracker; a native
    /// close/quit signal sets the internal should-close flag. When a target
    /// frame rate is configured this call also sleeps away the remainder of
    /// the frame interval — it is the process's one blocking point.
    fn poll_events(&mut self);

    /// Cap the frame rate enforced by [`Self::poll_events`]; `0` uncaps it.
    fn set_target_fps(&mut self, fps: u32);

    /// Seconds elapsed since the previous `delta_time` call.
    ///
    /// Always non-negative. After a backend switch the first reading starts
    /// from the new window's creation, so callers animating across a switch
    /// should clamp extreme values.
    fn delta_time(&mut self) -> f32;

    /// Milliseconds since the window came up.
    fn ticks(&self) -> u64;

    /// Destroy the native window. Idempotent: destroying an
    /// already-destroyed window is a no-op.
    fn shutdown(&mut self);
}
