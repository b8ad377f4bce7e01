//! Structured logging for Helios via the `tracing` ecosystem.
//!
//! Console output with uptime timestamps and module paths, plus an optional
//! JSON file layer in debug builds. Respects `RUST_LOG` and the config
//! system's log level override.

use std::path::Path;

use helios_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// `log_dir` enables JSON file logging in debug builds; `config` supplies a
/// log level override. `RUST_LOG` wins over both when set.
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let filter_str = match config {
        Some(config) if !config.debug.log_level.is_empty() => config.debug.log_level.clone(),
        _ => default_filter_string(),
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join("helios.log"))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// Default filter: `info` everywhere, `warn` for the noisy GPU crates.
fn default_filter_string() -> String {
    "info,wgpu=warn,naga=warn".to_string()
}

/// An `EnvFilter` built from the default filter string.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(default_filter_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_quiets_gpu_crates() {
        let filter = format!("{}", default_env_filter());
        assert!(filter.contains("wgpu=warn"));
        assert!(filter.contains("naga=warn"));
        assert!(filter.contains("info"));
    }

    #[test]
    fn test_env_filter_parsing() {
        let valid_filters = ["info", "debug,helios_orbits=trace", "warn", "error"];
        for filter_str in &valid_filters {
            assert!(
                EnvFilter::try_from(*filter_str).is_ok(),
                "failed to parse filter: {filter_str}"
            );
        }
    }

    #[test]
    fn test_config_level_overrides_default() {
        let mut config = Config::default();
        config.debug.log_level = "trace".to_string();
        let filter_str = if config.debug.log_level.is_empty() {
            default_filter_string()
        } else {
            config.debug.log_level.clone()
        };
        assert_eq!(filter_str, "trace");
    }

    #[test]
    fn test_log_file_path_layout() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_file_path = temp_dir.path().join("helios.log");
        assert_eq!(log_file_path.file_name().unwrap(), "helios.log");
    }
}
