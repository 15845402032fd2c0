//! Backend composition and the factory entry point
//!
//! A backend is the lifecycle unit composing one window, one input tracker,
//! and one renderer on top of a single underlying graphics stack. The
//! factory [`create_backend`] is the sole construction path; it either
//! returns a fully-initialized backend or an error — a partially-usable
//! backend never escapes.
//!
//! Construction order inside a backend: global native subsystem → window →
//! input → renderer (the renderer binds to the window's surface).
//! Destruction runs strictly in reverse so no renderer ever touches a
//! torn-down window, and the subsystem for a kind is only shut down by the
//! last live backend of that kind.

use std::any::Any;
use std::fmt;

use thiserror::Error;

use crate::backends::headless::HeadlessBackend;
use crate::backends::soft::SoftBackend;
use crate::input::Input;
use crate::renderer::Renderer;
use crate::window::{Window, WindowError};

/// The closed set of backend implementations this build knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// CPU rasterizer drawing into an offscreen surface
    Software,
    /// No-pixel validation backend for tests and CI
    Headless,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Software => write!(f, "Software"),
            Self::Headless => write!(f, "Headless"),
        }
    }
}

/// Backend construction errors
#[derive(Error, Debug)]
pub enum BackendError {
    /// A backend-global native subsystem failed to come up.
    #[error("subsystem initialization failed: {0}")]
    Subsystem(String),

    /// The backend's window could not be created.
    #[error(transparent)]
    Window(#[from] WindowError),
}

/// A composed window + input + renderer lifecycle unit.
///
/// The backend exclusively owns its three components; their lifetimes are
/// bounded by the backend's. Several backends (of the same or different
/// kinds) may be alive at once, each with an independent handle space —
/// resources are never shared across instances.
pub trait GraphicsBackend {
    /// The window owned by this backend.
    fn window(&mut self) -> &mut dyn Window;

    /// The input tracker owned by this backend.
    fn input(&self) -> &dyn Input;

    /// The renderer owned by this backend.
    fn renderer(&mut self) -> &mut dyn Renderer;

    /// Which implementation this is.
    fn kind(&self) -> BackendKind;

    /// Access to the concrete backend type for downcasting.
    ///
    /// Demos and tests use this to reach services outside the portable
    /// contracts (scripted event injection, screenshot capture).
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Construct a backend of the requested kind.
///
/// This is the basis of runtime backend switching: destroy the old backend
/// (dropping it runs renderer → window → input teardown and, for the last
/// instance of a kind, the global subsystem shutdown), then call
/// `create_backend` again for the new kind. Handles from the old backend
/// are meaningless in the new one.
///
/// # Errors
/// Returns [`BackendError`] when native subsystem or window construction
/// fails; no partially-initialized backend is ever returned.
pub fn create_backend(kind: BackendKind) -> Result<Box<dyn GraphicsBackend>, BackendError> {
    log::info!("creating {kind} backend");
    match kind {
        BackendKind::Software => Ok(Box::new(SoftBackend::new()?)),
        BackendKind::Headless => Ok(Box::new(HeadlessBackend::new()?)),
    }
}
