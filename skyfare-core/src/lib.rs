pub mod airport;
pub mod iata;
pub mod repository;
pub mod search;

pub use airport::AirportRecord;
pub use iata::IataCode;
pub use repository::AirportSource;
pub use search::{FlightOffer, Segment, SegmentEndpoint};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

/// Raised when the airport source cannot produce a usable record set.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    #[error("Airport source {location} is unreachable: {reason}")]
    Unreachable { location: String, reason: String },
    #[error("Airport source {location} is malformed: {reason}")]
    Malformed { location: String, reason: String },
}

impl DataLoadError {
    pub fn unreachable(location: impl Into<String>, reason: impl ToString) -> Self {
        Self::Unreachable {
            location: location.into(),
            reason: reason.to_string(),
        }
    }

    pub fn malformed(location: impl Into<String>, reason: impl ToString) -> Self {
        Self::Malformed {
            location: location.into(),
            reason: reason.to_string(),
        }
    }
}
