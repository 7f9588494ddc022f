use winit::dpi::LogicalSize;
use winit::window::{Window, WindowAttributes};

/// Main window configuration.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,

    /// `None` lets the platform pick the initial geometry.
    pub initial_size: Option<LogicalSize<f64>>,

    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "OpenGL Demo".to_string(),
            initial_size: None,
            resizable: true,
        }
    }
}

impl WindowConfig {
    /// Window descriptor shared by every window created from this config.
    ///
    /// Windows start hidden; they are shown once a context is ready.
    pub(crate) fn attributes(&self) -> WindowAttributes {
        let attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_resizable(self.resizable)
            .with_decorations(true)
            .with_visible(false);

        match self.initial_size {
            Some(size) => attrs.with_inner_size(size),
            None => attrs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_a_resizable_titled_window() {
        let config = WindowConfig::default();
        let attrs = config.attributes();
        assert_eq!(attrs.title, "OpenGL Demo");
        assert!(attrs.resizable);
        assert!(attrs.decorations);
        assert!(!attrs.visible);
        assert!(attrs.inner_size.is_none());
    }

    #[test]
    fn explicit_size_is_applied() {
        let config = WindowConfig {
            initial_size: Some(LogicalSize::new(640.0, 480.0)),
            ..WindowConfig::default()
        };
        assert!(config.attributes().inner_size.is_some());
    }
}
