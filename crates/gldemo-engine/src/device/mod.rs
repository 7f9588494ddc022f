//! OpenGL display, surface config and context management.
//!
//! This module is responsible for:
//! - choosing a surface config (color/depth bits, double buffering)
//! - creating the context + window surface and making them current
//! - loading the `glow` entry points and presenting frames

mod context;
mod init;
mod surface;

pub use context::GlContext;
pub use init::GlInit;

pub(crate) use surface::{negotiate_config, rebind_config};
