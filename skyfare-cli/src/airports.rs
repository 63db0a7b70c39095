use anyhow::Result;
use skyfare_catalog::{IndexState, RankedAirport};
use skyfare_core::{AirportRecord, IataCode};
use std::fmt::Write;
use tracing::warn;

use crate::error::CliError;
use crate::state::AppState;

/// Ranked matches for `query`. A blank query lists up to `limit` popular airports.
pub async fn search(state: &AppState, query: &str, limit: Option<usize>, json: bool) -> Result<String> {
    let limit = limit.unwrap_or(state.config.airports.search_limit);
    if query.trim().is_empty() {
        let airports = state.index.search(query, limit).await;
        note_fallback(state);
        return render_list(&airports, json);
    }

    let matches = state.index.search_ranked(query, limit).await;
    note_fallback(state);

    if json {
        return Ok(serde_json::to_string_pretty(&matches)?);
    }
    render_ranked(&matches)
}

pub async fn popular(state: &AppState, json: bool) -> Result<String> {
    let airports = state.index.popular_airports().await;
    note_fallback(state);
    render_list(&airports, json)
}

pub async fn by_code(state: &AppState, code: &str, json: bool) -> Result<String> {
    let code = IataCode::parse(code).map_err(CliError::from)?;
    let airport = state
        .index
        .airport_by_code(code.as_str())
        .await
        .ok_or_else(|| CliError::AirportNotFound(code.to_string()))?;
    note_fallback(state);
    render_list(&[airport], json)
}

pub async fn by_city(state: &AppState, city: &str, json: bool) -> Result<String> {
    let airports = state.index.airports_by_city(city).await;
    note_fallback(state);
    if airports.is_empty() && !json {
        return Ok(format!("No airports in {}\n", city.trim()));
    }
    render_list(&airports, json)
}

fn note_fallback(state: &AppState) {
    if state.index.state() == IndexState::LoadedWithFallback {
        warn!("Answering from the built-in airport list");
    }
}

fn render_ranked(matches: &[RankedAirport<'_>]) -> Result<String> {
    let mut out = String::new();
    for m in matches {
        writeln!(out, "{}  {:>3}  {}", m.airport.iata_code, m.tier.score(), describe(m.airport))?;
    }
    Ok(out)
}

fn render_list(airports: &[&AirportRecord], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(airports)?);
    }
    let mut out = String::new();
    for airport in airports {
        writeln!(out, "{}  {}", airport.iata_code, describe(airport))?;
    }
    Ok(out)
}

fn describe(airport: &AirportRecord) -> String {
    format!("{}, {}  {}", airport.city, airport.country, airport.name)
}
