use async_trait::async_trait;

use crate::DataLoadError;

/// Where the raw airport CSV comes from.
///
/// Implementations only fetch text; parsing belongs to the airport catalog.
#[async_trait]
pub trait AirportSource: Send + Sync {
    /// Fetch the complete CSV document.
    async fn fetch(&self) -> Result<String, DataLoadError>;

    /// Human-readable location used in log lines and errors.
    fn describe(&self) -> String;
}
