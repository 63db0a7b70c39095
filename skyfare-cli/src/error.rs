use skyfare_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] CoreError),
    #[error("No airport with code {0}")]
    AirportNotFound(String),
    #[error("Offers document {path} is not a flight list: {reason}")]
    InvalidOffers { path: String, reason: String },
}
