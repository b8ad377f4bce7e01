//! Binary entry point for the Helios solar system visualizer.

use clap::Parser;

use helios_config::{CliArgs, Config, default_config_dir};

fn main() {
    let args = CliArgs::parse();
    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);

    let mut config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config, using defaults: {e}");
            Config::default()
        }
    };
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    helios_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    if let Err(e) = helios_app::run(config) {
        tracing::error!("Event loop error: {e}");
        std::process::exit(1);
    }
}
