use glow::HasContext;

use super::error::ResourceError;
use super::vertex::{Face, Vertex};

/// Uploads `vertices` into a new static vertex buffer.
pub fn create_vertex_buffer(
    gl: &glow::Context,
    vertices: &[Vertex],
) -> Result<glow::Buffer, ResourceError> {
    upload(gl, glow::ARRAY_BUFFER, bytemuck::cast_slice(vertices), "vertex buffer")
}

/// Uploads `faces` into a new static index buffer.
pub fn create_index_buffer(
    gl: &glow::Context,
    faces: &[Face],
) -> Result<glow::Buffer, ResourceError> {
    upload(gl, glow::ELEMENT_ARRAY_BUFFER, bytemuck::cast_slice(faces), "index buffer")
}

fn upload(
    gl: &glow::Context,
    target: u32,
    bytes: &[u8],
    what: &'static str,
) -> Result<glow::Buffer, ResourceError> {
    if bytes.is_empty() {
        return Err(ResourceError::Empty { what });
    }

    // SAFETY: the caller's context is current; the buffer is bound only for
    // the duration of the upload.
    unsafe {
        let buffer = gl
            .create_buffer()
            .map_err(|reason| ResourceError::create(what, reason))?;

        gl.bind_buffer(target, Some(buffer));
        gl.buffer_data_u8_slice(target, bytes, glow::STATIC_DRAW);
        gl.bind_buffer(target, None);

        label(gl, glow::BUFFER, buffer.0.get(), what);

        log::debug!("created {what} ({} bytes)", bytes.len());
        Ok(buffer)
    }
}

/// Attaches a debug label to an object when the driver supports it.
pub(super) fn label(gl: &glow::Context, identifier: u32, name: u32, text: &str) {
    if !gl.supports_debug() {
        return;
    }

    // SAFETY: `name` is a live object of kind `identifier`.
    unsafe { gl.object_label(identifier, name, Some(text)) };
}
