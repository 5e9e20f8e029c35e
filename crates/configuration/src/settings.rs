use core_types::ViewVariant;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub datasets: DatasetSettings,
    pub dashboard: DashboardSettings,
    pub server: ServerSettings,
    pub logging: LoggingSettings,
}

/// Where the three source tables live and how they are delimited.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatasetSettings {
    /// Prefix joined onto every relative table path.
    pub data_dir: PathBuf,
    /// State-level transaction aggregates.
    pub transactions: PathBuf,
    /// District-level transaction aggregates.
    pub districts: PathBuf,
    /// State-level registered users per device brand.
    pub user_devices: PathBuf,
    /// Field delimiter shared by all three files. Must be a single byte.
    pub delimiter: char,
}

impl DatasetSettings {
    pub fn transactions_path(&self) -> PathBuf {
        self.resolve(&self.transactions)
    }

    pub fn districts_path(&self) -> PathBuf {
        self.resolve(&self.districts)
    }

    pub fn user_devices_path(&self) -> PathBuf {
        self.resolve(&self.user_devices)
    }

    /// The delimiter as the byte the CSV reader expects.
    /// Validation guarantees it is ASCII.
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter as u8
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_dir.join(path)
        }
    }
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            transactions: PathBuf::from("state_transaction_data.csv"),
            districts: PathBuf::from("district_transaction_data.csv"),
            user_devices: PathBuf::from("state_user_device_data.csv"),
            delimiter: ',',
        }
    }
}

/// Parameters shared by every dashboard render.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// How many groups each chart keeps.
    pub top_n: usize,
    /// View shown when a request does not name one.
    pub default_view: ViewVariant,
    /// Page heading shown above the metrics.
    pub title: String,
    pub caption: String,
    /// Optional attribution line shown below the chart.
    pub footer: Option<String>,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            top_n: 10,
            default_view: ViewVariant::TopStates,
            title: "PhonePe Pulse Data Visualizer".to_string(),
            caption: "A live data exploration dashboard powered by public PhonePe Pulse data."
                .to_string(),
            footer: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub addr: SocketAddr,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Fallback filter directive when `RUST_LOG` is unset.
    pub level: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}
