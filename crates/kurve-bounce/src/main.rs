mod app;
mod renderer;

use anyhow::Result;
use winit::dpi::LogicalSize;

use kurve_engine::device::GpuInit;
use kurve_engine::logging::{init_logging, LoggingConfig};
use kurve_engine::window::{Runtime, RuntimeConfig};
use kurve_geom::BounceConfig;

use crate::app::BounceApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = BounceConfig::default();
    log::info!(
        "bounce: {}x{} canvas, radius {}, {} px/frame (Space pauses, Esc quits)",
        config.width,
        config.height,
        config.radius,
        config.speed
    );

    Runtime::run(
        RuntimeConfig {
            title: "Bouncing disc".to_string(),
            initial_size: LogicalSize::new(config.width as f64, config.height as f64),
            // The walls are the canvas edges; keep them where the window is.
            resizable: false,
        },
        GpuInit::default(),
        BounceApp::new(config),
    )
}
