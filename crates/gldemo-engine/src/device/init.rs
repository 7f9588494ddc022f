/// Initialization parameters for the OpenGL layer.
///
/// Keep this structure stable and minimal. Add fields only when a concrete
/// platform or driver requirement exists.
#[derive(Debug, Clone)]
pub struct GlInit {
    /// Requested API version as `(major, minor)`.
    pub version: (u8, u8),

    /// Request a core profile context instead of compatibility.
    pub core_profile: bool,

    /// Bits per color channel (red, green and blue alike).
    pub color_bits: u8,

    pub alpha_bits: u8,

    /// Depth buffer bits. Configs with fewer bits are only used as a last resort.
    pub depth_bits: u8,

    pub stencil_bits: u8,

    /// Double buffering; `present` swaps the back buffer in.
    pub double_buffered: bool,
}

impl Default for GlInit {
    fn default() -> Self {
        Self {
            version: (3, 3),
            core_profile: true,
            color_bits: 8,
            alpha_bits: 8,
            depth_bits: 24,
            stencil_bits: 8,
            double_buffered: true,
        }
    }
}
