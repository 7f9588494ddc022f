use super::ctx::FrameCtx;
use crate::window::PlatformEvent;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the demo.
pub trait App {
    /// Called for each event drained before a frame.
    fn on_window_event(&mut self, event: &PlatformEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per frame, before the frame is presented.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;
}
