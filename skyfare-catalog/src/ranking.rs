use serde::Serialize;
use skyfare_core::AirportRecord;

/// Relevance bucket of an airport for a query.
///
/// Variants are declared lowest first so the derived ordering follows the
/// score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    CountryContains,
    NameContains,
    CityContains,
    CityPrefix,
    CityExact,
    ExactCode,
}

impl MatchTier {
    pub fn score(self) -> u8 {
        match self {
            MatchTier::ExactCode => 100,
            MatchTier::CityExact => 90,
            MatchTier::CityPrefix => 80,
            MatchTier::CityContains => 70,
            MatchTier::NameContains => 60,
            MatchTier::CountryContains => 50,
        }
    }
}

/// An airport together with the tier it matched at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedAirport<'a> {
    pub tier: MatchTier,
    #[serde(flatten)]
    pub airport: &'a AirportRecord,
}

/// Lowercased copies of the searchable fields, built once at load.
#[derive(Debug, Clone)]
pub(crate) struct SearchKey {
    code: String,
    pub(crate) city: String,
    name: String,
    country: String,
}

impl SearchKey {
    pub(crate) fn new(airport: &AirportRecord) -> Self {
        Self {
            code: airport.code().to_lowercase(),
            city: airport.city.to_lowercase(),
            name: airport.name.to_lowercase(),
            country: airport.country.to_lowercase(),
        }
    }

    /// Highest tier the (already normalised) query reaches, if any.
    pub(crate) fn classify(&self, query: &str) -> Option<MatchTier> {
        if self.code == query {
            Some(MatchTier::ExactCode)
        } else if self.city == query {
            Some(MatchTier::CityExact)
        } else if self.city.starts_with(query) {
            Some(MatchTier::CityPrefix)
        } else if self.city.contains(query) {
            Some(MatchTier::CityContains)
        } else if self.name.contains(query) {
            Some(MatchTier::NameContains)
        } else if self.country.contains(query) {
            Some(MatchTier::CountryContains)
        } else {
            None
        }
    }
}

/// Trim and lowercase raw user input.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Score every airport and return matches, best tier first.
///
/// `airports` and `keys` are parallel slices with unique codes, so each
/// airport appears at most once. The sort is stable: equal tiers keep load
/// order.
pub(crate) fn rank<'a>(
    airports: &'a [AirportRecord],
    keys: &[SearchKey],
    query: &str,
    limit: usize,
) -> Vec<RankedAirport<'a>> {
    let mut hits: Vec<RankedAirport<'a>> = airports
        .iter()
        .zip(keys)
        .filter_map(|(airport, key)| {
            key.classify(query).map(|tier| RankedAirport { tier, airport })
        })
        .collect();

    hits.sort_by(|a, b| b.tier.cmp(&a.tier));
    hits.truncate(limit);
    hits
}
