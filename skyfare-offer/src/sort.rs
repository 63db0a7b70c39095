use serde::{Deserialize, Serialize};
use skyfare_core::FlightOffer;
use std::cmp::Ordering;
use std::str::FromStr;

use crate::duration::parse_duration_minutes;
use crate::ParseFilterError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Price,
    Duration,
    Departure,
    Arrival,
}

impl SortKey {
    /// Ascending comparison of two offers by this key.
    ///
    /// Durations that cannot be parsed compare as zero minutes.
    pub fn compare(self, a: &FlightOffer, b: &FlightOffer) -> Ordering {
        match self {
            SortKey::Price => a.price.total_cmp(&b.price),
            SortKey::Duration => duration_minutes(a).cmp(&duration_minutes(b)),
            SortKey::Departure => a.departure_time.cmp(&b.departure_time),
            SortKey::Arrival => a.arrival_time.cmp(&b.arrival_time),
        }
    }
}

fn duration_minutes(offer: &FlightOffer) -> u32 {
    parse_duration_minutes(&offer.duration).unwrap_or(0)
}

impl FromStr for SortKey {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "price" => Ok(SortKey::Price),
            "duration" => Ok(SortKey::Duration),
            "departure" => Ok(SortKey::Departure),
            "arrival" => Ok(SortKey::Arrival),
            _ => Err(ParseFilterError::SortKey(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Orients an ascending comparison. Equal stays equal, so a stable sort
    /// keeps ties in input order either way.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(ParseFilterError::SortOrder(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SortState {
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

impl SortState {
    pub fn new(sort_by: SortKey, sort_order: SortOrder) -> Self {
        Self { sort_by, sort_order }
    }

    /// Selecting the active key while ascending flips to descending;
    /// anything else selects `key` ascending.
    pub fn toggled(self, key: SortKey) -> Self {
        let sort_order = if self.sort_by == key && self.sort_order == SortOrder::Asc {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        };
        Self::new(key, sort_order)
    }
}
