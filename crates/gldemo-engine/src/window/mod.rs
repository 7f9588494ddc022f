//! Platform window + OpenGL context lifecycle.
//!
//! [`PlatformContext`] owns the `winit` event loop, the single main window and
//! its GL context. Events are drained without blocking in
//! [`PlatformContext::update`] and reduced into a [`WindowState`].

mod config;
mod event;
mod platform;
mod stage;

pub use config::WindowConfig;
pub use event::{PlatformEvent, WindowState};
pub use platform::PlatformContext;
pub use stage::Stage;
