//! Lifecycle ordering of `PlatformContext` against a real event loop.
//!
//! Runs without the test harness: winit builds its event loop on the main
//! thread only. Without a display server the checks are skipped.

use gldemo_engine::device::GlInit;
use gldemo_engine::window::{PlatformContext, WindowConfig};

fn main() {
    let mut platform = match PlatformContext::new(WindowConfig::default(), GlInit::default()) {
        Ok(platform) => platform,
        Err(err) => {
            eprintln!("skipping platform lifecycle checks: {err:#}");
            return;
        }
    };

    out_of_order_calls_fail(&mut platform);
    main_window_reports_its_size(&mut platform);
    destroyed_context_rejects_everything(&mut platform);

    println!("platform lifecycle checks passed");
}

fn out_of_order_calls_fail(platform: &mut PlatformContext) {
    let err = platform.create_gl_context().unwrap_err();
    assert!(
        err.to_string().contains("create the OpenGL context"),
        "unexpected error: {err:#}"
    );

    assert!(platform.update().is_err());
    assert!(platform.present().is_err());
    assert!(platform.gl().is_err());
}

fn main_window_reports_its_size(platform: &mut PlatformContext) {
    if let Err(err) = platform.create_main_window() {
        eprintln!("skipping window checks: {err:#}");
        return;
    }

    assert!(platform.create_main_window().is_err(), "second main window");
    assert!(platform.present().is_err(), "present before a context exists");

    assert!(platform.update().unwrap());
    assert!(platform.window_width() > 0);
    assert!(platform.window_height() > 0);
}

fn destroyed_context_rejects_everything(platform: &mut PlatformContext) {
    platform.destroy_main_window();
    platform.destroy_main_window();

    assert!(platform.update().is_err());
    assert!(platform.create_main_window().is_err());
    assert!(platform.create_gl_context().is_err());
    assert!(platform.gl().is_err());
}
