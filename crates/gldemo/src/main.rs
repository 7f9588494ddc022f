mod scene;

use std::path::Path;

use anyhow::Result;
use gldemo_engine::core::FrameLoop;
use gldemo_engine::device::GlInit;
use gldemo_engine::fatal::OrFatal;
use gldemo_engine::logging::{init_logging, LoggingConfig};
use gldemo_engine::window::{PlatformContext, WindowConfig};

use scene::QuadScene;

fn main() {
    init_logging(LoggingConfig::default());

    run().or_fatal("gldemo");
}

fn run() -> Result<()> {
    let mut platform = PlatformContext::new(WindowConfig::default(), GlInit::default())?;

    platform.create_main_window()?;
    platform.create_gl_context()?;

    let gl = platform.gl()?;
    let shader_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("shaders");
    let mut scene = QuadScene::new(&gl, &shader_dir)?;

    let result = FrameLoop::run(&mut platform, &mut scene);
    log::info!("shutting down");

    // GPU handles go before the context that owns them.
    scene.destroy(&gl);
    platform.destroy_main_window();

    result
}
