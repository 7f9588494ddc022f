use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;

/// Window event record produced by draining the OS queue.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PlatformEvent {
    /// Client area size in physical pixels.
    Resized { width: u32, height: u32 },
    /// The user or the OS asked the window to close, or it was destroyed.
    CloseRequested,
    /// Anything else; left to the platform's default handling.
    Other,
}

impl PlatformEvent {
    pub fn resized(size: PhysicalSize<u32>) -> Self {
        Self::Resized {
            width: size.width,
            height: size.height,
        }
    }

    pub fn from_window_event(event: &WindowEvent) -> Self {
        match event {
            WindowEvent::Resized(size) => Self::resized(*size),
            WindowEvent::CloseRequested | WindowEvent::Destroyed => Self::CloseRequested,
            _ => Self::Other,
        }
    }
}

/// Last known size and open/closed state of the main window.
///
/// Only [`WindowState::apply`] mutates it. `closed` never goes back to false.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct WindowState {
    width: u32,
    height: u32,
    closed: bool,
}

impl WindowState {
    /// Applies one event. Returns `true` if the size changed.
    pub fn apply(&mut self, event: &PlatformEvent) -> bool {
        match *event {
            PlatformEvent::Resized { width, height } => {
                if (width, height) == (self.width, self.height) {
                    return false;
                }
                self.width = width;
                self.height = height;
                log::info!("window resized to {width}x{height}");
                true
            }
            PlatformEvent::CloseRequested => {
                if !self.closed {
                    log::debug!("window close requested");
                }
                self.closed = true;
                false
            }
            PlatformEvent::Other => false,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> PhysicalSize<u32> {
        PhysicalSize::new(self.width, self.height)
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}
