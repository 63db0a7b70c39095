use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use skyfare_core::FlightOffer;
use skyfare_offer::{
    available_airlines, parse_duration_minutes, DepartureWindow, FilterState, PriceBounds, SortKey,
    SortOrder, SortState, StopsFilter,
};
use skyfare_store::app_config::FilterDefaults;
use std::fmt::Write;
use std::path::Path;
use tracing::info;

use crate::error::CliError;
use crate::state::AppState;

/// Filter and sort choices for `offers list`.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub stops: StopsFilter,
    pub airlines: Vec<String>,
    pub departure: DepartureWindow,
    pub sort_by: SortKey,
    pub order: SortOrder,
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ListOutput<'a> {
    total: usize,
    shown: usize,
    available_airlines: Vec<String>,
    price_bounds: PriceBounds,
    filters: &'a FilterState,
    sort: SortState,
    flights: Vec<FlightOffer>,
}

/// Reads offers from a JSON file holding either a bare array or a
/// `{ "count": n, "flights": [...] }` envelope.
pub async fn read_offers(path: &Path) -> Result<Vec<FlightOffer>> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read offers from {}", path.display()))?;
    let document: Value = serde_json::from_str(&text)
        .with_context(|| format!("Offers file {} is not JSON", path.display()))?;

    let flights = match document {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut envelope) => envelope.remove("flights").ok_or_else(|| CliError::InvalidOffers {
            path: path.display().to_string(),
            reason: "missing \"flights\" array".to_string(),
        })?,
        _ => {
            return Err(CliError::InvalidOffers {
                path: path.display().to_string(),
                reason: "expected an array or an object".to_string(),
            }
            .into())
        }
    };

    serde_json::from_value(flights).map_err(|e| {
        CliError::InvalidOffers {
            path: path.display().to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Filter state for a fresh result set: cleared to the offers' price bounds,
/// then narrowed by whatever the user asked for.
pub fn build_filters(offers: &[FlightOffer], options: &ListOptions, defaults: &FilterDefaults) -> FilterState {
    let bounds = PriceBounds::from_offers_with(offers, defaults.min_price, defaults.max_price);
    let mut filters = FilterState::cleared(bounds);
    if let Some(min) = options.min_price {
        filters.price_range.min = min;
    }
    if let Some(max) = options.max_price {
        filters.price_range.max = max;
    }
    filters.stops = options.stops;
    filters.airlines = options.airlines.iter().map(|a| a.trim().to_uppercase()).collect();
    filters.departure_time = options.departure;
    filters
}

pub async fn list(state: &AppState, path: &Path, options: &ListOptions) -> Result<String> {
    let offers = read_offers(path).await?;
    let defaults = &state.config.filters;
    let filters = build_filters(&offers, options, defaults);
    let sort = SortState::new(options.sort_by, options.order);

    let flights = state.engine.visible(&offers, &filters, &sort);
    info!(path = %path.display(), total = offers.len(), shown = flights.len(), "Listed offers");

    let output = ListOutput {
        total: offers.len(),
        shown: flights.len(),
        available_airlines: available_airlines(&offers),
        price_bounds: PriceBounds::from_offers_with(&offers, defaults.min_price, defaults.max_price),
        filters: &filters,
        sort,
        flights,
    };

    if options.json {
        return Ok(serde_json::to_string_pretty(&output)?);
    }
    render(&output)
}

fn render(output: &ListOutput<'_>) -> Result<String> {
    let mut out = String::new();
    for o in &output.flights {
        writeln!(
            out,
            "{:<4} {:<2} {:<6} {} -> {}  {} - {}  {:>7}  {:<8}  {:>8.2} {}",
            o.id,
            o.airline,
            o.flight_number,
            o.departure_airport,
            o.arrival_airport,
            o.departure_time.format("%Y-%m-%d %H:%M"),
            o.arrival_time.format("%H:%M"),
            format_duration(&o.duration),
            stops_label(o.stops),
            o.price,
            o.currency,
        )?;
    }
    writeln!(out, "Showing {} of {} flights", output.shown, output.total)?;
    writeln!(out, "Airlines: {}", output.available_airlines.join(", "))?;
    Ok(out)
}

/// `PT7H15M` as `7h 15m`; unparseable values are shown as given.
pub fn format_duration(raw: &str) -> String {
    match parse_duration_minutes(raw) {
        Some(minutes) => format!("{}h {}m", minutes / 60, minutes % 60),
        None => raw.to_string(),
    }
}

pub fn stops_label(stops: u32) -> String {
    match stops {
        0 => "Nonstop".to_string(),
        1 => "1 stop".to_string(),
        n => format!("{} stops", n),
    }
}
