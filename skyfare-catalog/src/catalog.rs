use skyfare_core::{AirportRecord, AirportSource, DataLoadError};
use std::collections::HashSet;
use tracing::{debug, info};

use crate::fallback::fallback_airports;
use crate::parser::parse_airports;
use crate::popular::{select_popular, POPULAR_LIMIT};
use crate::ranking::{normalize_query, rank, RankedAirport, SearchKey};

/// Immutable, fully loaded airport set with synchronous queries.
#[derive(Debug, Clone)]
pub struct AirportCatalog {
    airports: Vec<AirportRecord>,
    keys: Vec<SearchKey>,
    popular: Vec<usize>,
    fallback: bool,
}

impl AirportCatalog {
    /// Build a catalog; later duplicates of a code are dropped.
    pub fn new(airports: Vec<AirportRecord>) -> Self {
        Self::with_popular_limit(airports, POPULAR_LIMIT)
    }

    pub fn with_popular_limit(airports: Vec<AirportRecord>, popular_limit: usize) -> Self {
        let mut seen = HashSet::new();
        let airports: Vec<AirportRecord> = airports
            .into_iter()
            .filter(|a| seen.insert(a.iata_code.clone()))
            .collect();
        let keys: Vec<SearchKey> = airports.iter().map(SearchKey::new).collect();
        let popular = select_popular(&airports, &keys, popular_limit);

        Self {
            airports,
            keys,
            popular,
            fallback: false,
        }
    }

    /// The built-in set of major airports.
    pub fn fallback(popular_limit: usize) -> Self {
        let mut catalog = Self::with_popular_limit(fallback_airports(), popular_limit);
        catalog.fallback = true;
        catalog
    }

    /// Fetch and parse `source`, surfacing any load failure to the caller.
    pub async fn from_source(
        source: &dyn AirportSource,
        popular_limit: usize,
    ) -> Result<Self, DataLoadError> {
        let location = source.describe();
        let text = source.fetch().await?;

        let report = parse_airports(&text);
        let (skipped, duplicates) = (report.skipped, report.duplicates);
        let airports = report.into_airports(&location)?;

        info!(
            "Loaded {} airports from {} ({} rows skipped, {} duplicates)",
            airports.len(),
            location,
            skipped,
            duplicates
        );
        Ok(Self::with_popular_limit(airports, popular_limit))
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// True when this catalog is the built-in fallback set.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    pub fn airports(&self) -> &[AirportRecord] {
        &self.airports
    }

    /// Ranked matches for `query`; a blank query yields the popular list.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&AirportRecord> {
        if query.trim().is_empty() {
            return self.popular_airports().into_iter().take(limit).collect();
        }
        self.search_ranked(query, limit)
            .into_iter()
            .map(|hit| hit.airport)
            .collect()
    }

    /// Like [`search`](Self::search) but keeps the tier of every hit.
    /// A blank query has no tiers and yields nothing.
    pub fn search_ranked(&self, query: &str, limit: usize) -> Vec<RankedAirport<'_>> {
        let query = normalize_query(query);
        if query.is_empty() {
            return Vec::new();
        }
        let hits = rank(&self.airports, &self.keys, &query, limit);
        debug!("Airport search {:?} matched {} (limit {})", query, hits.len(), limit);
        hits
    }

    pub fn popular_airports(&self) -> Vec<&AirportRecord> {
        self.popular.iter().map(|&i| &self.airports[i]).collect()
    }

    pub fn airport_by_code(&self, code: &str) -> Option<&AirportRecord> {
        self.airports.iter().find(|a| a.iata_code.matches(code))
    }

    pub fn airports_by_city(&self, city: &str) -> Vec<&AirportRecord> {
        let city = city.trim().to_lowercase();
        self.airports
            .iter()
            .zip(&self.keys)
            .filter(|(_, key)| key.city == city)
            .map(|(airport, _)| airport)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::MatchTier;
    use skyfare_core::IataCode;

    fn airport(code: &str, name: &str, city: &str, country: &str) -> AirportRecord {
        AirportRecord::new(IataCode::parse(code).unwrap(), name, city, country, "XX")
    }

    fn sample() -> AirportCatalog {
        AirportCatalog::new(vec![
            airport("LHR", "London Heathrow Airport", "London", "United Kingdom"),
            airport("LGW", "London Gatwick Airport", "London", "United Kingdom"),
            airport("PAR", "Paris All Airports", "Paris", "France"),
            airport("CDG", "Charles de Gaulle Airport", "Paris", "France"),
            airport("JFK", "John F Kennedy International Airport", "New York", "United States"),
            airport("LON", "London Metropolitan Area", "Londonderry", "United Kingdom"),
        ])
    }

    #[test]
    fn test_search_lon_prefers_exact_code_then_london_airports() {
        let catalog = sample();
        let hits = catalog.search_ranked("lon", 10);
        let codes: Vec<&str> = hits.iter().map(|h| h.airport.code()).collect();

        assert_eq!(codes, vec!["LON", "LHR", "LGW"]);
        assert_eq!(hits[0].tier, MatchTier::ExactCode);
        assert!(hits[1..].iter().all(|h| h.tier == MatchTier::CityPrefix));
    }

    #[test]
    fn test_blank_query_returns_popular_shortlist() {
        let catalog = sample();
        let codes: Vec<&str> = catalog.search("   ", 2).into_iter().map(|a| a.code()).collect();
        // New York first, then London's first airport in load order
        assert_eq!(codes, vec!["JFK", "LHR"]);
        assert!(catalog.search_ranked("  ", 5).is_empty());
    }

    #[test]
    fn test_popular_skips_missing_cities_and_uses_first_airport() {
        let catalog = sample();
        let codes: Vec<&str> = catalog.popular_airports().into_iter().map(|a| a.code()).collect();
        assert_eq!(codes, vec!["JFK", "LHR", "PAR"]);
    }

    #[test]
    fn test_popular_respects_limit() {
        let catalog = AirportCatalog::with_popular_limit(sample().airports().to_vec(), 1);
        assert_eq!(catalog.popular_airports().len(), 1);
    }

    #[test]
    fn test_exact_accessors_are_case_insensitive() {
        let catalog = sample();
        assert_eq!(catalog.airport_by_code("cdg").map(|a| a.code()), Some("CDG"));
        assert!(catalog.airport_by_code("XYZ").is_none());

        let paris: Vec<&str> = catalog.airports_by_city(" PARIS ").into_iter().map(|a| a.code()).collect();
        assert_eq!(paris, vec!["PAR", "CDG"]);
        assert!(catalog.airports_by_city("Atlantis").is_empty());
    }

    #[test]
    fn test_constructor_deduplicates_codes() {
        let catalog = AirportCatalog::new(vec![
            airport("LHR", "First", "London", "United Kingdom"),
            airport("LHR", "Second", "London", "United Kingdom"),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.airports()[0].name, "First");
    }

    #[test]
    fn test_fallback_catalog_is_flagged() {
        let catalog = AirportCatalog::fallback(POPULAR_LIMIT);
        assert!(catalog.is_fallback());
        assert_eq!(catalog.len(), 12);
        assert_eq!(catalog.search("heathrow", 5)[0].code(), "LHR");
    }
}
