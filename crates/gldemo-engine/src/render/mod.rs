//! OpenGL resource creation and drawing.
//!
//! Thin helpers over `glow` that allocate buffers, vertex arrays and shader
//! programs. Every helper leaves nothing bound when it returns, so callers
//! bind explicitly before drawing.
//!
//! Convention:
//! - vertex positions are already in clip space (no transforms)
//! - faces are `u32` index triples drawn as triangles

mod buffer;
mod error;
mod mesh;
mod shader;
mod vertex;
mod vertex_array;

pub use buffer::{create_index_buffer, create_vertex_buffer};
pub use error::{ResourceError, MAX_INFO_LOG_LEN};
pub use mesh::{clear, ClearValues, Mesh};
pub use shader::{load_shaders, ShaderProgram};
pub use vertex::{Face, Vertex, VertexAttribute};
pub use vertex_array::create_vertex_array;
