use std::mem::{offset_of, size_of};

use bytemuck::{Pod, Zeroable};

/// One vertex: position followed by RGBA color, tightly packed.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

/// Three indices into a vertex buffer forming one triangle.
pub type Face = [u32; 3];

/// Describes one float attribute inside [`Vertex`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct VertexAttribute {
    pub location: u32,
    pub components: i32,
    /// Clamp to `[0, 1]` / `[-1, 1]` when fetched.
    pub normalized: bool,
    /// Byte offset from the start of the vertex.
    pub offset: i32,
}

impl Vertex {
    pub const fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, color }
    }

    /// Byte distance between consecutive vertices.
    pub const STRIDE: i32 = size_of::<Vertex>() as i32;

    /// Location 0 is position, location 1 is color.
    pub const ATTRIBUTES: [VertexAttribute; 2] = [
        VertexAttribute {
            location: 0,
            components: 3,
            normalized: false,
            offset: offset_of!(Vertex, position) as i32,
        },
        VertexAttribute {
            location: 1,
            components: 4,
            normalized: true,
            offset: offset_of!(Vertex, color) as i32,
        },
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_tightly_packed() {
        assert_eq!(Vertex::STRIDE, 7 * size_of::<f32>() as i32);
        assert_eq!(Vertex::ATTRIBUTES[0].offset, 0);
        assert_eq!(Vertex::ATTRIBUTES[1].offset, 3 * size_of::<f32>() as i32);
    }

    #[test]
    fn attributes_cover_the_whole_vertex() {
        let covered: i32 = Vertex::ATTRIBUTES
            .iter()
            .map(|a| a.components * size_of::<f32>() as i32)
            .sum();
        assert_eq!(covered, Vertex::STRIDE);
    }

    #[test]
    fn only_color_is_normalized() {
        let [position, color] = Vertex::ATTRIBUTES;
        assert_eq!((position.location, position.components, position.normalized), (0, 3, false));
        assert_eq!((color.location, color.components, color.normalized), (1, 4, true));
    }

    #[test]
    fn vertex_bytes_match_field_order() {
        let v = Vertex::new([1.0, 2.0, 3.0], [0.25, 0.5, 0.75, 1.0]);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&v));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn faces_flatten_to_contiguous_indices() {
        let faces: [Face; 2] = [[0, 1, 2], [0, 2, 3]];
        let indices: &[u32] = bytemuck::cast_slice(&faces);
        assert_eq!(indices, &[0, 1, 2, 0, 2, 3]);
        assert_eq!(std::mem::size_of_val(&faces), 6 * size_of::<u32>());
    }
}
