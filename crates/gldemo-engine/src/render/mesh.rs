use glow::HasContext;

use super::buffer::{create_index_buffer, create_vertex_buffer};
use super::error::ResourceError;
use super::vertex::{Face, Vertex};
use super::vertex_array::create_vertex_array;

/// Values written by [`clear`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClearValues {
    pub color: [f32; 4],
    pub depth: f64,
}

impl Default for ClearValues {
    fn default() -> Self {
        Self {
            color: [0.5, 0.5, 0.5, 1.0],
            depth: 1.0,
        }
    }
}

/// Clears the color and depth buffers of the current framebuffer.
pub fn clear(gl: &glow::Context, values: ClearValues) {
    let [r, g, b, a] = values.color;

    // SAFETY: fixed-function state changes on the current context.
    unsafe {
        gl.clear_color(r, g, b, a);
        gl.clear_depth_f64(values.depth);
        gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
    }
}

/// Vertex buffer, index buffer and the vertex array binding them.
///
/// The handles are owned here and deleted exactly once by [`Mesh::destroy`].
#[derive(Debug)]
pub struct Mesh {
    vertex_buffer: glow::Buffer,
    index_buffer: glow::Buffer,
    vertex_array: glow::VertexArray,
    index_count: i32,
}

impl Mesh {
    /// Uploads `vertices` and `faces` and builds the vertex array.
    ///
    /// Handles created before a failing step are released again.
    pub fn new(
        gl: &glow::Context,
        vertices: &[Vertex],
        faces: &[Face],
    ) -> Result<Self, ResourceError> {
        let index_count = i32::try_from(faces.len() * 3)
            .map_err(|_| ResourceError::create("index buffer", "too many faces"))?;

        let vertex_buffer = create_vertex_buffer(gl, vertices)?;

        let index_buffer = match create_index_buffer(gl, faces) {
            Ok(buffer) => buffer,
            Err(err) => {
                // SAFETY: created above, not referenced anywhere else.
                unsafe { gl.delete_buffer(vertex_buffer) };
                return Err(err);
            }
        };

        let vertex_array = match create_vertex_array(gl, vertex_buffer, index_buffer) {
            Ok(array) => array,
            Err(err) => {
                // SAFETY: as above.
                unsafe {
                    gl.delete_buffer(vertex_buffer);
                    gl.delete_buffer(index_buffer);
                }
                return Err(err);
            }
        };

        Ok(Self {
            vertex_buffer,
            index_buffer,
            vertex_array,
            index_count,
        })
    }

    /// Draws every face as a triangle with whatever program is current.
    pub fn draw(&self, gl: &glow::Context) {
        // SAFETY: the vertex array is live until `destroy`.
        unsafe {
            gl.bind_vertex_array(Some(self.vertex_array));
            gl.draw_elements(glow::TRIANGLES, self.index_count, glow::UNSIGNED_INT, 0);
        }
    }

    pub fn destroy(self, gl: &glow::Context) {
        // SAFETY: consuming `self` guarantees a single delete of each handle.
        unsafe {
            gl.bind_vertex_array(None);
            gl.delete_vertex_array(self.vertex_array);
            gl.delete_buffer(self.vertex_buffer);
            gl.delete_buffer(self.index_buffer);
        }
    }
}
