use serde::Serialize;
use skyfare_core::FlightOffer;
use std::collections::HashSet;

use crate::filters::PriceRange;

/// Price slider limits for a result set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceBounds {
    pub min: f64,
    pub max: f64,
}

impl PriceBounds {
    pub const DEFAULT_MIN: f64 = 0.0;
    pub const DEFAULT_MAX: f64 = 5000.0;

    /// Bounds widened by every finite offer price, starting from the defaults.
    pub fn from_offers(offers: &[FlightOffer]) -> Self {
        Self::from_offers_with(offers, Self::DEFAULT_MIN, Self::DEFAULT_MAX)
    }

    pub fn from_offers_with(offers: &[FlightOffer], floor: f64, ceiling: f64) -> Self {
        offers
            .iter()
            .map(|o| o.price)
            .filter(|p| p.is_finite())
            .fold(Self { min: floor, max: ceiling }, |bounds, price| Self {
                min: bounds.min.min(price),
                max: bounds.max.max(price),
            })
    }

    pub fn as_range(&self) -> PriceRange {
        PriceRange::new(self.min, self.max)
    }
}

/// Distinct airline codes in first-seen order.
pub fn available_airlines(offers: &[FlightOffer]) -> Vec<String> {
    let mut seen = HashSet::new();
    offers
        .iter()
        .filter(|o| seen.insert(o.airline.as_str()))
        .map(|o| o.airline.clone())
        .collect()
}
