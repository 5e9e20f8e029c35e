use crate::settings::Config;
use clap::Args;
use std::path::PathBuf;

/// Command-line flags that take precedence over the config file.
#[derive(Debug, Clone, Args)]
pub struct CliOverrides {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// Directory containing the three CSV datasets.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

impl CliOverrides {
    pub fn apply(&self, config: &mut Config) {
        if let Some(dir) = &self.data_dir {
            config.datasets.data_dir = dir.clone();
        }
    }
}
