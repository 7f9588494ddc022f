//! gldemo engine crate.
//!
//! Window + OpenGL context lifecycle, GPU resource helpers and the frame loop
//! used by the `gldemo` binary.

pub mod core;
pub mod device;
pub mod fatal;
pub mod logging;
pub mod render;
pub mod window;
