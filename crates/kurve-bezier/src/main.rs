mod app;

use anyhow::Result;
use winit::dpi::LogicalSize;

use kurve_engine::device::GpuInit;
use kurve_engine::logging::{init_logging, LoggingConfig};
use kurve_engine::window::{Runtime, RuntimeConfig};
use kurve_geom::EditorConfig;

use crate::app::EditorApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    log::info!("left click adds or drags a point, right click removes, C clears, Esc quits");

    let config = RuntimeConfig {
        title: "Bezier curve".to_string(),
        initial_size: LogicalSize::new(600.0, 600.0),
        resizable: true,
    };
    let height = config.initial_size.height as f32;

    Runtime::run(config, GpuInit::default(), EditorApp::new(EditorConfig::default(), height))
}
