use glow::HasContext;

use super::error::ResourceError;
use super::vertex::Vertex;

/// Ties `vertex_buffer` and `index_buffer` together with the [`Vertex`] layout.
pub fn create_vertex_array(
    gl: &glow::Context,
    vertex_buffer: glow::Buffer,
    index_buffer: glow::Buffer,
) -> Result<glow::VertexArray, ResourceError> {
    // SAFETY: the caller's context is current and both buffers are live.
    unsafe {
        let vertex_array = gl
            .create_vertex_array()
            .map_err(|reason| ResourceError::create("vertex array", reason))?;

        // Buffer bindings made while the array is bound are recorded in it.
        gl.bind_vertex_array(Some(vertex_array));
        gl.bind_buffer(glow::ARRAY_BUFFER, Some(vertex_buffer));
        gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(index_buffer));

        for attr in Vertex::ATTRIBUTES {
            gl.vertex_attrib_pointer_f32(
                attr.location,
                attr.components,
                glow::FLOAT,
                attr.normalized,
                Vertex::STRIDE,
                attr.offset,
            );
            gl.enable_vertex_attrib_array(attr.location);
        }

        // Unbind the array first so it keeps its element buffer.
        gl.bind_vertex_array(None);
        gl.bind_buffer(glow::ARRAY_BUFFER, None);
        gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);

        Ok(vertex_array)
    }
}
