pub mod duration;
pub mod engine;
pub mod facets;
pub mod filters;
pub mod sort;

use thiserror::Error;

pub use duration::parse_duration_minutes;
pub use engine::FlightListEngine;
pub use facets::{available_airlines, PriceBounds};
pub use filters::{DepartureWindow, FilterState, PriceRange, StopsFilter};
pub use sort::{SortKey, SortOrder, SortState};

/// Rejected textual filter or sort values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFilterError {
    #[error("Unknown stops filter: {0} (expected all, nonstop, 1stop or 2+stops)")]
    Stops(String),
    #[error("Unknown departure window: {0} (expected all, morning, afternoon, evening or night)")]
    DepartureWindow(String),
    #[error("Unknown sort key: {0} (expected price, duration, departure or arrival)")]
    SortKey(String),
    #[error("Unknown sort order: {0} (expected asc or desc)")]
    SortOrder(String),
}
