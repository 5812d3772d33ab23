//! Simulated aircraft altimeter.
//!
//! A circular textured dial with three needles reading one altitude value
//! across three scales, a warning flag and keyboard altitude adjustment
//! (ArrowUp/ArrowDown). Rendered through the gauge-engine wgpu runtime.

mod altitude;
mod app;
mod config;
mod dial;
mod needle;

use anyhow::Result;

use gauge_engine::device::GpuInit;
use gauge_engine::logging::{LoggingConfig, init_logging};
use gauge_engine::window::{Runtime, RuntimeConfig};

fn main() {
    init_logging(LoggingConfig::default());

    let config = config::AltimeterConfig::from_args();
    if let Err(err) = run(config) {
        log::error!("altimeter terminated: {err:#}");
        std::process::exit(1);
    }
}

fn run(config: config::AltimeterConfig) -> Result<()> {
    let runtime_config = RuntimeConfig {
        title: config.title.clone(),
        initial_size: (config.window_size, config.window_size),
        resizable: false,
    };

    Runtime::run(runtime_config, GpuInit::default(), app::AltimeterApp::new(config))
}
