use std::num::NonZeroU32;
use std::sync::Arc;

use anyhow::{Context, Result};
use glow::HasContext;
use glutin::config::Config;
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, WindowSurface};
use glutin_winit::GlWindow;
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::window::Window;

use super::GlInit;

/// A current OpenGL context bound to one window surface.
///
/// Field order is drop order: the context is released before its surface.
/// The owning window must outlive this value.
pub struct GlContext {
    context: PossiblyCurrentContext,
    surface: Surface<WindowSurface>,
    gl: Arc<glow::Context>,
}

impl GlContext {
    /// Creates the context for `window`, makes it current and loads the
    /// OpenGL entry points.
    ///
    /// `window` must have been created for `config`.
    pub fn new(window: &Window, config: &Config, init: &GlInit) -> Result<Self> {
        let raw_window = window
            .window_handle()
            .context("window has no native handle")?
            .as_raw();

        let (major, minor) = init.version;
        let profile = if init.core_profile {
            GlProfile::Core
        } else {
            GlProfile::Compatibility
        };

        let attrs = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .with_profile(profile)
            .build(Some(raw_window));

        let display = config.display();

        // SAFETY: `raw_window` belongs to `window`, which outlives the context.
        let not_current = unsafe { display.create_context(config, &attrs) }
            .with_context(|| format!("failed to create OpenGL {major}.{minor} context"))?;

        let surface_attrs = window
            .build_surface_attributes(Default::default())
            .context("failed to describe window surface")?;

        // SAFETY: as above, the surface does not outlive `window`.
        let surface = unsafe { display.create_window_surface(config, &surface_attrs) }
            .context("failed to create window surface")?;

        let context = not_current
            .make_current(&surface)
            .context("failed to make OpenGL context current")?;

        // SAFETY: the context is current on this thread, so the loaded
        // function pointers are valid for it.
        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|name| display.get_proc_address(name).cast())
        };

        // SAFETY: plain state queries on the current context.
        unsafe {
            log::info!(
                "OpenGL {} ({})",
                gl.get_parameter_string(glow::VERSION),
                gl.get_parameter_string(glow::RENDERER),
            );
        }

        Ok(Self {
            context,
            surface,
            gl: Arc::new(gl),
        })
    }

    /// Shared handle to the loaded entry points.
    pub fn gl(&self) -> Arc<glow::Context> {
        Arc::clone(&self.gl)
    }

    /// Resizes the surface and the viewport to `size`.
    ///
    /// Zero-sized surfaces are invalid; minimized windows keep the old size.
    pub fn resize(&self, size: PhysicalSize<u32>) {
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            return;
        };

        self.surface.resize(&self.context, w, h);

        // SAFETY: viewport is a state change on the current context.
        unsafe {
            self.gl.viewport(0, 0, clamp_i32(w.get()), clamp_i32(h.get()));
        }
    }

    /// Swaps the back buffer onto the window.
    pub fn swap_buffers(&self) -> Result<()> {
        self.surface
            .swap_buffers(&self.context)
            .context("failed to swap buffers")
    }
}

fn clamp_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}
