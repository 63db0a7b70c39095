use skyfare_core::AirportRecord;

use crate::ranking::SearchKey;

/// Cities offered before the user has typed anything, in display order.
pub const POPULAR_CITIES: [&str; 24] = [
    "New York", "London", "Paris", "Tokyo", "Dubai", "Los Angeles",
    "Frankfurt", "Amsterdam", "Singapore", "Sydney", "Madrid", "Rome",
    "Bangkok", "Mumbai", "Beijing", "Seoul", "Toronto", "Chicago",
    "Miami", "San Francisco", "Barcelona", "Berlin", "Vienna", "Zagreb",
];

pub const POPULAR_LIMIT: usize = 15;

/// Indices of the first airport of each popular city present in the set.
/// Cities missing from the set are skipped.
pub(crate) fn select_popular(airports: &[AirportRecord], keys: &[SearchKey], limit: usize) -> Vec<usize> {
    let mut picked: Vec<usize> = Vec::new();

    for city in POPULAR_CITIES {
        if picked.len() >= limit {
            break;
        }
        let city = city.to_lowercase();
        let Some(idx) = keys.iter().position(|k| k.city == city) else {
            continue;
        };
        if !picked.iter().any(|&p| airports[p].iata_code == airports[idx].iata_code) {
            picked.push(idx);
        }
    }

    picked
}
