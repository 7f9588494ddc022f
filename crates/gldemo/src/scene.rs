use std::path::Path;

use gldemo_engine::core::{App, AppControl, FrameCtx};
use gldemo_engine::render::{
    load_shaders, ClearValues, Face, Mesh, ResourceError, ShaderProgram, Vertex,
};

/// Corners in clip space, so the quad covers half the window in each axis.
pub const QUAD_VERTICES: [Vertex; 4] = [
    //           x     y     z         r    g    b    a
    Vertex::new([0.5, 0.5, 0.0], [1.0, 0.0, 0.0, 1.0]),
    Vertex::new([0.5, -0.5, 0.0], [0.0, 1.0, 0.0, 1.0]),
    Vertex::new([-0.5, -0.5, 0.0], [0.0, 0.0, 1.0, 1.0]),
    Vertex::new([-0.5, 0.5, 0.0], [1.0, 1.0, 1.0, 1.0]),
];

pub const QUAD_FACES: [Face; 2] = [
    [0, 1, 2],
    [0, 2, 3],
];

/// The demo's GPU state: one colored quad and the program drawing it.
pub struct QuadScene {
    mesh: Mesh,
    program: ShaderProgram,
    clear: ClearValues,
}

impl QuadScene {
    pub fn new(gl: &glow::Context, shader_dir: &Path) -> Result<Self, ResourceError> {
        let mesh = Mesh::new(gl, &QUAD_VERTICES, &QUAD_FACES)?;

        let program = match load_shaders(
            gl,
            shader_dir.join("vertex.glsl"),
            shader_dir.join("fragment.glsl"),
        ) {
            Ok(program) => program,
            Err(err) => {
                mesh.destroy(gl);
                return Err(err);
            }
        };

        Ok(Self {
            mesh,
            program,
            clear: ClearValues::default(),
        })
    }

    /// Releases every GPU handle. Must run while the context is still alive.
    pub fn destroy(self, gl: &glow::Context) {
        self.program.destroy(gl);
        self.mesh.destroy(gl);
    }
}

impl App for QuadScene {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        if ctx.frame_index == 0 {
            log::debug!("first frame at {}x{}", ctx.width, ctx.height);
        }

        // Minimized: nothing visible to draw into.
        if ctx.width == 0 || ctx.height == 0 {
            return AppControl::Continue;
        }

        ctx.clear(self.clear);

        self.program.bind(ctx.gl);
        self.mesh.draw(ctx.gl);

        AppControl::Continue
    }
}
