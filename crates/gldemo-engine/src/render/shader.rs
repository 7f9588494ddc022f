use std::path::Path;

use glow::HasContext;

use super::buffer::label;
use super::error::{truncate_info_log, ResourceError};

/// A linked vertex + fragment program.
///
/// Deleted exactly once by [`ShaderProgram::destroy`].
#[derive(Debug)]
pub struct ShaderProgram {
    program: glow::Program,
}

impl ShaderProgram {
    /// Makes this program current.
    pub fn bind(&self, gl: &glow::Context) {
        // SAFETY: the program is live until `destroy`.
        unsafe { gl.use_program(Some(self.program)) };
    }

    pub fn destroy(self, gl: &glow::Context) {
        // SAFETY: consuming `self` guarantees a single delete.
        unsafe { gl.delete_program(self.program) };
    }
}

/// Reads, compiles and links the two shader files into one program.
///
/// The per-stage shader objects are released before returning. The program
/// is not left bound.
pub fn load_shaders(
    gl: &glow::Context,
    vertex_path: impl AsRef<Path>,
    fragment_path: impl AsRef<Path>,
) -> Result<ShaderProgram, ResourceError> {
    let vertex_path = vertex_path.as_ref();
    let fragment_path = fragment_path.as_ref();

    let vertex = load_shader(gl, vertex_path, glow::VERTEX_SHADER)?;
    let fragment = match load_shader(gl, fragment_path, glow::FRAGMENT_SHADER) {
        Ok(shader) => shader,
        Err(err) => {
            // SAFETY: `vertex` was created above and is not attached anywhere.
            unsafe { gl.delete_shader(vertex) };
            return Err(err);
        }
    };

    // SAFETY: the caller's context is current; both shaders are compiled.
    unsafe {
        let release_stages = || {
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);
        };

        let program = match gl.create_program() {
            Ok(program) => program,
            Err(reason) => {
                release_stages();
                return Err(ResourceError::create("shader program", reason));
            }
        };

        gl.attach_shader(program, vertex);
        gl.attach_shader(program, fragment);
        gl.link_program(program);

        let linked = gl.get_program_link_status(program);

        gl.detach_shader(program, vertex);
        gl.detach_shader(program, fragment);
        release_stages();

        if !linked {
            let log = truncate_info_log(gl.get_program_info_log(program));
            gl.delete_program(program);
            return Err(ResourceError::Link {
                vertex: vertex_path.to_path_buf(),
                fragment: fragment_path.to_path_buf(),
                log,
            });
        }

        Ok(ShaderProgram { program })
    }
}

fn load_shader(
    gl: &glow::Context,
    path: &Path,
    stage: u32,
) -> Result<glow::Shader, ResourceError> {
    log::info!("Loading shader {}", path.display());

    let bytes = std::fs::read(path).map_err(|source| ResourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let source = std::str::from_utf8(&bytes).map_err(|source| ResourceError::InvalidSource {
        path: path.to_path_buf(),
        source,
    })?;

    // SAFETY: the caller's context is current.
    unsafe {
        let shader = gl
            .create_shader(stage)
            .map_err(|reason| ResourceError::create("shader", reason))?;

        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if !gl.get_shader_compile_status(shader) {
            let log = truncate_info_log(gl.get_shader_info_log(shader));
            gl.delete_shader(shader);
            return Err(ResourceError::Compile {
                path: path.to_path_buf(),
                log,
            });
        }

        label(gl, glow::SHADER, shader.0.get(), &path.display().to_string());

        Ok(shader)
    }
}
