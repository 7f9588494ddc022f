use crate::render::{clear, ClearValues};

/// Per-frame context passed to `core::App::on_frame`.
pub struct FrameCtx<'a> {
    pub gl: &'a glow::Context,

    /// Framebuffer size in physical pixels.
    pub width: u32,
    pub height: u32,

    /// Frames presented so far.
    pub frame_index: u64,
}

impl FrameCtx<'_> {
    /// Clears color and depth to `values`.
    pub fn clear(&self, values: ClearValues) {
        clear(self.gl, values);
    }
}
