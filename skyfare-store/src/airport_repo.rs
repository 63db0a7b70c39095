use async_trait::async_trait;
use skyfare_core::{AirportSource, DataLoadError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads the airport CSV from the local filesystem.
pub struct FileAirportSource {
    path: PathBuf,
}

impl FileAirportSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl AirportSource for FileAirportSource {
    async fn fetch(&self) -> Result<String, DataLoadError> {
        debug!("Reading airport data from {}", self.path.display());
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| DataLoadError::unreachable(self.describe(), e))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Airport CSV held in memory, e.g. bundled with the binary.
pub struct InlineAirportSource {
    label: String,
    text: String,
}

impl InlineAirportSource {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

#[async_trait]
impl AirportSource for InlineAirportSource {
    async fn fetch(&self) -> Result<String, DataLoadError> {
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}
