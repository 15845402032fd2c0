//! Software backend
//!
//! A complete backend over a CPU rasterizer: no display server, no GPU, no
//! native library — just an offscreen surface, an injected event queue, and
//! the shared edge-detection tracker. Useful on its own for headless image
//! generation and as the reference implementation of the contracts.

mod glyphs;
mod input;
mod raster;
mod renderer;
pub mod subsystem;
mod window;

use std::any::Any;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::backend::{BackendError, BackendKind, GraphicsBackend};
use crate::backends::soft::raster::Surface;
use crate::input::{Input as InputTrait, KeyboardState};
use crate::renderer::Renderer as RendererTrait;
use crate::window::Window as WindowTrait;

pub use input::SoftInput;
pub use renderer::SoftRenderer;
pub use subsystem::live_backend_count;
pub use window::{SoftEvent, SoftWindow};

/// The composed software backend.
///
/// Field order is teardown order: the renderer must release its resources
/// and unbind before the window closes the surface, and the subsystem guard
/// goes last so the global state outlives every component.
pub struct SoftBackend {
    renderer: SoftRenderer,
    window: SoftWindow,
    input: SoftInput,
    events: Rc<RefCell<VecDeque<SoftEvent>>>,
    _video: subsystem::VideoGuard,
}

impl SoftBackend {
    /// Bring up the software stack: subsystem, window, input, renderer, in
    /// that order.
    ///
    /// # Errors
    /// Returns [`BackendError`] if the global subsystem cannot be acquired.
    pub fn new() -> Result<Self, BackendError> {
        let video = subsystem::VideoGuard::acquire()?;

        // Placeholder surface, reconfigured in place by `Window::create`.
        let surface = Rc::new(RefCell::new(Surface::new(10, 10)));
        let events = Rc::new(RefCell::new(VecDeque::new()));
        let keyboard = Rc::new(RefCell::new(KeyboardState::new(input::scancode::COUNT)));

        let window = SoftWindow::new(
            Rc::clone(&surface),
            Rc::clone(&events),
            Rc::clone(&keyboard),
        );
        let input = SoftInput::new(Rc::clone(&keyboard));
        let renderer = SoftRenderer::new(Rc::clone(&surface));

        Ok(Self {
            renderer,
            window,
            input,
            events,
            _video: video,
        })
    }

    /// Queue an event for the next [`WindowTrait::poll_events`] pass.
    pub fn push_event(&mut self, event: SoftEvent) {
        self.events.borrow_mut().push_back(event);
    }

    /// Capture the last presented frame; `None` after window shutdown.
    #[must_use]
    pub fn screenshot(&self) -> Option<image::RgbaImage> {
        self.renderer.screenshot()
    }

    /// Shared handle to the window surface, for lifecycle inspection.
    #[cfg(test)]
    pub(crate) fn surface_handle(&self) -> Rc<RefCell<Surface>> {
        self.renderer.surface_handle()
    }
}

impl GraphicsBackend for SoftBackend {
    fn window(&mut self) -> &mut dyn WindowTrait {
        &mut self.window
    }

    fn input(&self) -> &dyn InputTrait {
        &self.input
    }

    fn renderer(&mut self) -> &mut dyn RendererTrait {
        &mut self.renderer
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Software
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
