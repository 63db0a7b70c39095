use skyfare_catalog::AirportIndex;
use skyfare_core::AirportSource;
use skyfare_offer::FlightListEngine;
use skyfare_store::{Config, FileAirportSource};
use std::path::PathBuf;
use std::sync::Arc;

/// Everything a command needs, built once per process.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub index: Arc<AirportIndex>,
    pub engine: FlightListEngine,
}

impl AppState {
    /// Reads airports from `airports` when given, else from the configured path.
    pub fn new(config: Config, airports: Option<PathBuf>) -> Self {
        let path = airports.unwrap_or_else(|| config.airports.data_path.clone());
        Self::with_source(config, Arc::new(FileAirportSource::new(path)))
    }

    pub fn with_source(config: Config, source: Arc<dyn AirportSource>) -> Self {
        let index = AirportIndex::with_popular_limit(source, config.airports.popular_limit);
        Self {
            config,
            index: Arc::new(index),
            engine: FlightListEngine::new(),
        }
    }
}
