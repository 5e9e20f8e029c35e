use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
#[cfg(feature = "clap")]
pub mod cli;
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
#[cfg(feature = "clap")]
pub use cli::CliOverrides;
pub use settings::{Config, DashboardSettings, DatasetSettings, LoggingSettings, ServerSettings};

/// Prefix for environment overrides, e.g. `PULSE_DASHBOARD__TOP_N=5`.
pub const ENV_PREFIX: &str = "PULSE";

/// Loads the application configuration.
///
/// Every section has defaults, so a missing file is not an error. Values from
/// `path` are layered under `PULSE_*` environment variables, then validated.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    load_config_with_env(path, None)
}

/// Like `load_config`, but reads overrides from `env` instead of the process
/// environment when it is `Some`.
pub fn load_config_with_env(
    path: &Path,
    env: Option<config::Map<String, String>>,
) -> Result<Config, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "Config file not found, using defaults.");
    }

    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        )
        .build()?;

    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.dashboard.top_n == 0 {
        return Err(ConfigError::ValidationError(
            "dashboard.top_n must be at least 1".to_string(),
        ));
    }
    if !config.datasets.delimiter.is_ascii() {
        return Err(ConfigError::ValidationError(format!(
            "datasets.delimiter must be a single ASCII character, got '{}'",
            config.datasets.delimiter
        )));
    }
    Ok(())
}
