use skyfare_core::FlightOffer;
use tracing::debug;

use crate::filters::FilterState;
use crate::sort::{SortKey, SortOrder, SortState};

/// Derives the visible flight list from the raw search results.
///
/// Stateless: the same offers, filters and sort always produce the same list,
/// and the input slice is never reordered.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlightListEngine;

impl FlightListEngine {
    pub fn new() -> Self {
        Self
    }

    /// Offers satisfying every criterion, in their input order.
    pub fn apply_filters(&self, offers: &[FlightOffer], filters: &FilterState) -> Vec<FlightOffer> {
        offers.iter().filter(|o| filters.matches(o)).cloned().collect()
    }

    /// Stable sort; offers with equal keys keep their input order in both directions.
    pub fn apply_sort(&self, offers: &[FlightOffer], sort_by: SortKey, sort_order: SortOrder) -> Vec<FlightOffer> {
        let mut sorted = offers.to_vec();
        sorted.sort_by(|a, b| sort_order.apply(sort_by.compare(a, b)));
        sorted
    }

    /// Filter then sort.
    pub fn visible(&self, offers: &[FlightOffer], filters: &FilterState, sort: &SortState) -> Vec<FlightOffer> {
        let filtered = self.apply_filters(offers, filters);
        let visible = self.apply_sort(&filtered, sort.sort_by, sort.sort_order);
        debug!(
            total = offers.len(),
            shown = visible.len(),
            sort_by = ?sort.sort_by,
            sort_order = ?sort.sort_order,
            "Derived visible flight list"
        );
        visible
    }
}
