use serde::{Deserialize, Serialize};
use skyfare_core::FlightOffer;
use std::collections::BTreeSet;
use std::str::FromStr;

use crate::facets::PriceBounds;
use crate::ParseFilterError;

/// Inclusive price bounds. Serialized as `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// A range with `min > max` contains nothing; NaN never matches.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(PriceBounds::DEFAULT_MIN, PriceBounds::DEFAULT_MAX)
    }
}

impl From<(f64, f64)> for PriceRange {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

impl From<PriceRange> for (f64, f64) {
    fn from(range: PriceRange) -> Self {
        (range.min, range.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StopsFilter {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "nonstop")]
    Nonstop,
    #[serde(rename = "1stop")]
    OneStop,
    #[serde(rename = "2+stops")]
    TwoPlusStops,
}

impl StopsFilter {
    pub fn matches(self, stops: u32) -> bool {
        match self {
            StopsFilter::All => true,
            StopsFilter::Nonstop => stops == 0,
            StopsFilter::OneStop => stops == 1,
            StopsFilter::TwoPlusStops => stops >= 2,
        }
    }
}

impl FromStr for StopsFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(StopsFilter::All),
            "nonstop" | "0" => Ok(StopsFilter::Nonstop),
            "1stop" | "1" => Ok(StopsFilter::OneStop),
            "2+stops" | "2+" => Ok(StopsFilter::TwoPlusStops),
            _ => Err(ParseFilterError::Stops(s.to_string())),
        }
    }
}

/// Departure hour bucket, local to the departure airport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepartureWindow {
    #[default]
    All,
    /// 06:00 - 11:59
    Morning,
    /// 12:00 - 17:59
    Afternoon,
    /// 18:00 - 23:59
    Evening,
    /// 00:00 - 05:59
    Night,
}

impl DepartureWindow {
    pub fn contains_hour(self, hour: u32) -> bool {
        match self {
            DepartureWindow::All => true,
            DepartureWindow::Morning => (6..12).contains(&hour),
            DepartureWindow::Afternoon => (12..18).contains(&hour),
            DepartureWindow::Evening => (18..24).contains(&hour),
            DepartureWindow::Night => hour < 6,
        }
    }
}

impl FromStr for DepartureWindow {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(DepartureWindow::All),
            "morning" => Ok(DepartureWindow::Morning),
            "afternoon" => Ok(DepartureWindow::Afternoon),
            "evening" => Ok(DepartureWindow::Evening),
            "night" => Ok(DepartureWindow::Night),
            _ => Err(ParseFilterError::DepartureWindow(s.to_string())),
        }
    }
}

/// Declarative filter configuration chosen by the user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub price_range: PriceRange,
    pub stops: StopsFilter,
    /// Allowed airline codes; empty allows every airline
    pub airlines: BTreeSet<String>,
    pub departure_time: DepartureWindow,
}

impl FilterState {
    /// "Clear all filters": every criterion open, price range reset to `bounds`.
    pub fn cleared(bounds: PriceBounds) -> Self {
        Self {
            price_range: bounds.as_range(),
            ..Self::default()
        }
    }

    pub fn matches(&self, offer: &FlightOffer) -> bool {
        self.price_range.contains(offer.price)
            && self.stops.matches(offer.stops)
            && (self.airlines.is_empty() || self.airlines.contains(&offer.airline))
            && self.departure_time.contains_hour(offer.departure_hour())
    }
}
