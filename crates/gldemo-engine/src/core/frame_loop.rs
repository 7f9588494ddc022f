use anyhow::Result;

use crate::window::PlatformContext;

use super::app::{App, AppControl};
use super::ctx::FrameCtx;

/// Synchronous poll, draw, present loop.
pub struct FrameLoop;

impl FrameLoop {
    /// Runs `app` until the window closes or a callback returns
    /// [`AppControl::Exit`].
    ///
    /// The platform must have a ready context. It is left open on return so
    /// the caller can release GPU resources before destroying it.
    pub fn run<A>(platform: &mut PlatformContext, app: &mut A) -> Result<()>
    where
        A: App,
    {
        let gl = platform.gl()?;
        let mut frame_index: u64 = 0;

        while platform.update()? {
            let exit_from_event = platform
                .events()
                .iter()
                .any(|event| app.on_window_event(event) == AppControl::Exit);

            if exit_from_event {
                log::debug!("app requested exit from a window event");
                break;
            }

            let mut ctx = FrameCtx {
                gl: &gl,
                width: platform.window_width(),
                height: platform.window_height(),
                frame_index,
            };

            if app.on_frame(&mut ctx) == AppControl::Exit {
                log::debug!("app requested exit from a frame");
                break;
            }

            platform.present()?;
            frame_index = frame_index.wrapping_add(1);
        }

        log::debug!("frame loop finished after {frame_index} frames");
        Ok(())
    }
}
