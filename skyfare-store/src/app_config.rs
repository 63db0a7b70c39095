use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub airports: AirportsConfig,
    pub filters: FilterDefaults,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AirportsConfig {
    /// CSV file with one airport per line
    pub data_path: PathBuf,
    pub search_limit: usize,
    pub popular_limit: usize,
}

impl Default for AirportsConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/airports.csv"),
            search_limit: 10,
            popular_limit: 15,
        }
    }
}

/// Price slider limits used before any offers are known.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FilterDefaults {
    pub min_price: f64,
    pub max_price: f64,
}

impl Default for FilterDefaults {
    fn default() -> Self {
        Self {
            min_price: 0.0,
            max_price: 5000.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "skyfare=info".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Layered load from `dir`. Every file is optional; missing keys fall
    /// back to the defaults above.
    pub fn load_from(dir: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        let dir = dir.as_ref();
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let layer = |name: &str| {
            config::File::with_name(&dir.join(name).to_string_lossy()).required(false)
        };

        let s = config::Config::builder()
            .add_source(layer("default"))
            .add_source(layer(&run_mode))
            // Not checked in
            .add_source(layer("local"))
            // e.g. SKYFARE_AIRPORTS__SEARCH_LIMIT=5
            .add_source(
                config::Environment::with_prefix("SKYFARE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        s.try_deserialize()
    }
}
