//! # unigfx
//!
//! A backend-agnostic windowing, input, and 2D rendering abstraction.
//!
//! Application code programs against four small contracts — [`Window`],
//! [`Input`], [`Renderer`], and [`GraphicsBackend`] — while the concrete
//! implementation is selected at runtime through [`create_backend`]. A
//! running application can tear one backend down and bring another kind up
//! without touching its call sites, and can drive several backends at once
//! from the same thread.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use unigfx::prelude::*;
//!
//! fn main() -> Result<(), BackendError> {
//!     let mut backend = create_backend(BackendKind::Software)?;
//!     backend
//!         .window()
//!         .create("demo", 800, 600, WindowFlags::RESIZABLE)?;
//!     backend.window().set_target_fps(60);
//!
//!     while !backend.window().should_close() {
//!         backend.window().poll_events();
//!         if backend.input().is_key_pressed(Key::Escape) {
//!             backend.window().set_should_close(true);
//!         }
//!
//!         let renderer = backend.renderer();
//!         renderer.begin_drawing();
//!         renderer.clear(Color::rgb(21, 21, 21));
//!         renderer.draw_rectangle(
//!             Rectangle::new(100.0, 100.0, 50.0, 50.0),
//!             Color::RED,
//!         );
//!         renderer.end_drawing();
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Threading
//!
//! Everything here is single-threaded by design: all calls are expected to
//! come from one main/UI thread, and the only blocking point is the optional
//! frame-pacing sleep inside [`Window::poll_events`].

pub mod backend;
pub mod backends;
pub mod config;
pub mod foundation;
pub mod input;
pub mod renderer;
pub mod resource;
pub mod types;
pub mod window;

pub use backend::{create_backend, BackendError, BackendKind, GraphicsBackend};
pub use input::{Input, Key};
pub use renderer::{Font, FontHandle, RenderStats, Renderer, Texture, TextureHandle};
pub use resource::{RawHandle, ResourceManager, INVALID_HANDLE};
pub use types::{Color, Flip, Rectangle, Vector2, WindowFlags};
pub use window::{Window, WindowError};

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        backend::{create_backend, BackendError, BackendKind, GraphicsBackend},
        config::{AppSettings, WindowSettings},
        input::{Input, Key},
        renderer::{Font, Renderer, Texture},
        types::{Color, Flip, Rectangle, Vector2, WindowFlags},
        window::{Window, WindowError},
    };
}
