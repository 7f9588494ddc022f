use anyhow::{Context, Result};
use glutin::config::{ColorBufferType, Config, ConfigTemplateBuilder, GlConfig};
use glutin::display::{Display, DisplayApiPreference, GlDisplay};
use raw_window_handle::HasDisplayHandle;
use winit::window::Window;

use super::GlInit;

/// The parts of a surface config that decide whether it is picked.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct ConfigTraits {
    pub hardware_accelerated: bool,
    pub depth_bits: u8,
    pub stencil_bits: u8,
    pub samples: u8,
}

impl ConfigTraits {
    fn of(config: &Config) -> Self {
        Self {
            hardware_accelerated: config.hardware_accelerated(),
            depth_bits: config.depth_size(),
            stencil_bits: config.stencil_size(),
            samples: config.num_samples(),
        }
    }

    /// Ranking key; higher is better. Multisampling is not requested, so
    /// single-sampled configs win ties.
    fn score(&self, init: &GlInit) -> (bool, bool, bool, bool) {
        (
            self.hardware_accelerated,
            self.depth_bits >= init.depth_bits,
            self.stencil_bits >= init.stencil_bits,
            self.samples == 0,
        )
    }
}

/// Picks the best config, keeping the driver's order on ties.
pub(crate) fn pick_best<T>(
    candidates: impl IntoIterator<Item = (T, ConfigTraits)>,
    init: &GlInit,
) -> Option<(T, ConfigTraits)> {
    candidates.into_iter().reduce(|best, next| {
        if next.1.score(init) > best.1.score(init) {
            next
        } else {
            best
        }
    })
}

/// Finds the candidate whose traits equal `wanted`, in driver order.
#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
pub(crate) fn pick_matching<T>(
    candidates: impl IntoIterator<Item = (T, ConfigTraits)>,
    wanted: ConfigTraits,
) -> Option<T> {
    candidates
        .into_iter()
        .find(|(_, traits)| *traits == wanted)
        .map(|(candidate, _)| candidate)
}

/// Creates a display against `window` and selects a surface config for it.
///
/// On WGL the display probes the driver with a throwaway context on the
/// window before pixel formats can be enumerated. The chosen config is not
/// necessarily compatible with `window`; callers recreate the window for it.
pub(crate) fn negotiate_config(window: &Window, init: &GlInit) -> Result<(Config, ConfigTraits)> {
    let (config, traits) = pick_best(candidates(window, init)?, init)
        .context("no surface config matches the requested format")?;

    log::debug!(
        "picked surface config: hw={} depth={} stencil={} samples={}",
        traits.hardware_accelerated,
        traits.depth_bits,
        traits.stencil_bits,
        traits.samples,
    );

    if !traits.hardware_accelerated {
        log::warn!("no hardware accelerated surface config; rendering may be slow");
    }

    Ok((config, traits))
}

/// Returns the config to create the context with on the recreated `window`.
///
/// A WGL config reads its attributes through the device context of the
/// window it was enumerated on. That window is gone by now, so the config
/// with the same traits is enumerated again on `window`.
#[cfg(target_os = "windows")]
pub(crate) fn rebind_config(
    window: &Window,
    init: &GlInit,
    negotiated: Config,
    wanted: ConfigTraits,
) -> Result<Config> {
    drop(negotiated);

    pick_matching(candidates(window, init)?, wanted)
        .context("surface config is not available on the recreated window")
}

/// Returns the config to create the context with on the recreated `window`.
///
/// Outside WGL a config belongs to the display, not to a window.
#[cfg(not(target_os = "windows"))]
pub(crate) fn rebind_config(
    _window: &Window,
    _init: &GlInit,
    negotiated: Config,
    _wanted: ConfigTraits,
) -> Result<Config> {
    Ok(negotiated)
}

/// Every config the display offers for `init`, with its ranking traits.
fn candidates(window: &Window, init: &GlInit) -> Result<Vec<(Config, ConfigTraits)>> {
    let raw_display = window
        .display_handle()
        .context("window has no display handle")?
        .as_raw();

    let preference = display_preference(window)?;

    // SAFETY: the display handle comes from a live window and outlives the
    // display, which is owned by the platform context alongside it.
    let display = unsafe { Display::new(raw_display, preference) }
        .context("failed to create OpenGL display")?;

    let template = config_template(window, init)?;

    // SAFETY: the template only references the live window.
    let configs = unsafe { display.find_configs(template) }
        .context("driver reported no surface configs")?;

    Ok(configs
        .map(|config| {
            let traits = ConfigTraits::of(&config);
            (config, traits)
        })
        .collect())
}

fn config_template(
    window: &Window,
    init: &GlInit,
) -> Result<glutin::config::ConfigTemplate> {
    let builder = ConfigTemplateBuilder::new()
        .with_buffer_type(ColorBufferType::Rgb {
            r_size: init.color_bits,
            g_size: init.color_bits,
            b_size: init.color_bits,
        })
        .with_alpha_size(init.alpha_bits)
        .with_depth_size(init.depth_bits)
        .with_stencil_size(init.stencil_bits)
        .with_single_buffering(!init.double_buffered)
        .prefer_hardware_accelerated(Some(true));

    // WGL pixel formats must be queried against a real window. Elsewhere the
    // window visual is picked afterwards from the config.
    #[cfg(target_os = "windows")]
    let builder = {
        use raw_window_handle::HasWindowHandle;

        let handle = window
            .window_handle()
            .context("window has no native handle")?
            .as_raw();
        builder.compatible_with_native_window(handle)
    };

    #[cfg(not(target_os = "windows"))]
    let _ = window;

    Ok(builder.build())
}

#[cfg(target_os = "windows")]
fn display_preference(window: &Window) -> Result<DisplayApiPreference> {
    use raw_window_handle::HasWindowHandle;

    let handle = window
        .window_handle()
        .context("window has no native handle")?
        .as_raw();
    Ok(DisplayApiPreference::WglThenEgl(Some(handle)))
}

#[cfg(target_os = "macos")]
fn display_preference(_window: &Window) -> Result<DisplayApiPreference> {
    Ok(DisplayApiPreference::Cgl)
}

#[cfg(target_os = "android")]
fn display_preference(_window: &Window) -> Result<DisplayApiPreference> {
    Ok(DisplayApiPreference::Egl)
}

#[cfg(all(unix, not(any(target_os = "macos", target_os = "ios", target_os = "android"))))]
fn display_preference(_window: &Window) -> Result<DisplayApiPreference> {
    Ok(DisplayApiPreference::EglThenGlx(Box::new(
        winit::platform::x11::register_xlib_error_hook,
    )))
}
