//! Frame loop contracts.
//!
//! This module defines the interface between the platform layer and the code
//! that draws: an [`App`] is driven by [`FrameLoop::run`] once per frame with a
//! [`FrameCtx`], and never touches the window or event loop directly.

mod app;
mod ctx;
mod frame_loop;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
pub use frame_loop::FrameLoop;
