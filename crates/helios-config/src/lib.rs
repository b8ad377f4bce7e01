//! Configuration system for Helios.
//!
//! Runtime-configurable settings that persist to disk as RON, with CLI
//! overrides via clap and forward/backward compatible serialization.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    Config, DebugConfig, RenderConfig, SimulationConfig, WindowConfig, default_config_dir,
};
pub use error::ConfigError;
