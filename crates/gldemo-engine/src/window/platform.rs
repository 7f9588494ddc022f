use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use glutin::config::Config;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::device::{negotiate_config, rebind_config, GlContext, GlInit};

use super::{PlatformEvent, Stage, WindowConfig, WindowState};

/// Owns the event loop, the main window and its OpenGL context.
///
/// There is one window and at most one context per value. Operations must be
/// called in lifecycle order (see [`Stage`]); calls out of order fail.
pub struct PlatformContext {
    // Field order is drop order: context, then window, then event loop.
    gl: Option<GlContext>,
    window: Option<Window>,

    attributes: Option<WindowAttributes>,
    window_config: WindowConfig,
    gl_init: GlInit,

    state: WindowState,
    stage: Stage,
    events: Vec<PlatformEvent>,

    event_loop: EventLoop<()>,
}

impl PlatformContext {
    pub fn new(window_config: WindowConfig, gl_init: GlInit) -> Result<Self> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;

        Ok(Self {
            gl: None,
            window: None,
            attributes: None,
            window_config,
            gl_init,
            state: WindowState::default(),
            stage: Stage::Uninitialized,
            events: Vec::new(),
            event_loop,
        })
    }

    /// Builds the window descriptor on first use and returns a copy of it.
    fn register_class(&mut self) -> WindowAttributes {
        if self.attributes.is_none() {
            log::debug!("registering window descriptor \"{}\"", self.window_config.title);
            self.stage = Stage::Registered;
        }

        self.attributes
            .get_or_insert_with(|| self.window_config.attributes())
            .clone()
    }

    /// Creates the hidden main window.
    pub fn create_main_window(&mut self) -> Result<()> {
        self.stage.require(
            "create the main window",
            &[Stage::Uninitialized, Stage::Registered],
        )?;

        let attrs = self.register_class();
        let window = self.spawn_window(WindowRequest::Plain(attrs))?;

        self.state.apply(&PlatformEvent::resized(window.inner_size()));
        self.window = Some(window);
        self.stage = Stage::Created;

        Ok(())
    }

    /// Establishes the rendering surface: picks a config, recreates the
    /// window for it, creates a current context and shows the window.
    pub fn create_gl_context(&mut self) -> Result<()> {
        self.stage.require("create the OpenGL context", &[Stage::Created])?;

        let bootstrap = self.window.as_ref().context("main window is missing")?;
        let (config, traits) = negotiate_config(bootstrap, &self.gl_init)?;
        self.stage = Stage::ContextPending;

        // The bootstrap window's pixel format / visual is fixed once set, so
        // it is replaced by a window created for the chosen config. A WGL
        // config keeps the device context it was enumerated on, so it is
        // looked up again against the new window.
        let attrs = self.register_class();
        drop(self.window.take());

        let window = self.spawn_window(WindowRequest::ForConfig(attrs, config.clone()))?;
        let config = rebind_config(&window, &self.gl_init, config, traits)?;

        let gl = GlContext::new(&window, &config, &self.gl_init)?;

        let size = window.inner_size();
        self.state.apply(&PlatformEvent::resized(size));
        gl.resize(size);

        window.set_visible(true);

        self.window = Some(window);
        self.gl = Some(gl);
        self.stage = Stage::ContextReady;

        Ok(())
    }

    /// Drains pending OS events without blocking and applies them.
    ///
    /// Returns `false` once a close has been observed, and on every call after.
    pub fn update(&mut self) -> Result<bool> {
        self.stage.require(
            "update the window",
            &[
                Stage::Created,
                Stage::ContextPending,
                Stage::ContextReady,
                Stage::Closing,
            ],
        )?;

        self.events.clear();
        if self.state.is_closed() {
            return Ok(false);
        }

        let mut handler = PlatformHandler {
            window_id: self.window.as_ref().map(Window::id),
            events: std::mem::take(&mut self.events),
            request: None,
            created: None,
        };

        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut handler);

        self.events = handler.events;

        if let PumpStatus::Exit(code) = status {
            log::debug!("event loop exited with code {code}");
            self.events.push(PlatformEvent::CloseRequested);
        }

        let mut resized = false;
        for event in &self.events {
            resized |= self.state.apply(event);
        }

        if self.state.is_closed() {
            self.stage = self.stage.on_close();
            return Ok(false);
        }

        // Some platforms coalesce or skip resize events; the window's own
        // size is authoritative.
        if let Some(window) = &self.window {
            resized |= self.state.apply(&PlatformEvent::resized(window.inner_size()));
        }

        if resized {
            if let Some(gl) = &self.gl {
                gl.resize(self.state.size());
            }
        }

        Ok(true)
    }

    /// Puts the back buffer on screen.
    pub fn present(&mut self) -> Result<()> {
        self.stage.require("present", &[Stage::ContextReady])?;

        let (Some(window), Some(gl)) = (&self.window, &self.gl) else {
            anyhow::bail!("present called without a window and context");
        };

        window.pre_present_notify();
        gl.swap_buffers()
    }

    /// Client area width in physical pixels.
    pub fn window_width(&self) -> u32 {
        self.state.width()
    }

    /// Client area height in physical pixels.
    pub fn window_height(&self) -> u32 {
        self.state.height()
    }

    /// Events drained by the last [`update`](Self::update).
    pub fn events(&self) -> &[PlatformEvent] {
        &self.events
    }

    /// The loaded OpenGL entry points.
    pub fn gl(&self) -> Result<Arc<glow::Context>> {
        self.gl
            .as_ref()
            .map(GlContext::gl)
            .context("OpenGL context has not been created")
    }

    /// Releases the context, then the window. Safe to call more than once.
    ///
    /// GPU resources created through [`gl`](Self::gl) must be deleted first.
    pub fn destroy_main_window(&mut self) {
        if self.stage == Stage::Destroyed {
            return;
        }

        drop(self.gl.take());
        drop(self.window.take());
        self.events.clear();
        self.stage = Stage::Destroyed;

        log::debug!("main window destroyed");
    }

    /// Runs one non-blocking loop iteration in which `request` is served.
    fn spawn_window(&mut self, request: WindowRequest) -> Result<Window> {
        let mut handler = PlatformHandler {
            window_id: None,
            events: Vec::new(),
            request: Some(request),
            created: None,
        };

        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut handler);

        if let PumpStatus::Exit(code) = status {
            anyhow::bail!("event loop exited with code {code} before the window was created");
        }

        handler
            .created
            .context("event loop never offered a point to create the window")?
    }
}

impl Drop for PlatformContext {
    fn drop(&mut self) {
        self.destroy_main_window();
    }
}

/// A window to create from inside the event loop.
enum WindowRequest {
    Plain(WindowAttributes),
    /// Window whose visual / pixel format suits the surface config.
    ForConfig(WindowAttributes, Config),
}

/// Receives `pump_app_events` callbacks: collects events for the current
/// main window and serves a pending window creation.
struct PlatformHandler {
    window_id: Option<WindowId>,
    events: Vec<PlatformEvent>,
    request: Option<WindowRequest>,
    created: Option<Result<Window>>,
}

impl PlatformHandler {
    fn serve_request(&mut self, event_loop: &ActiveEventLoop) {
        let Some(request) = self.request.take() else {
            return;
        };

        let window = match request {
            WindowRequest::Plain(attrs) => event_loop
                .create_window(attrs)
                .context("failed to create window"),
            WindowRequest::ForConfig(attrs, config) => {
                glutin_winit::finalize_window(event_loop, attrs, &config)
                    .context("failed to recreate window for the surface config")
            }
        };

        self.created = Some(window);
    }
}

impl ApplicationHandler for PlatformHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        self.serve_request(event_loop);
    }

    // Not every platform resumes on each pump; this runs on every iteration.
    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.serve_request(event_loop);
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        // Late events from the replaced bootstrap window are dropped here.
        if self.window_id != Some(window_id) {
            return;
        }

        self.events.push(PlatformEvent::from_window_event(&event));
    }
}
