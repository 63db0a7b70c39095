use skyfare_core::{AirportRecord, DataLoadError, IataCode};
use std::collections::HashSet;
use tracing::debug;

/// Minimum columns: code, name, city, country, country code.
const MIN_COLUMNS: usize = 5;

/// Outcome of parsing one airport CSV document.
#[derive(Debug, Default)]
pub struct ParseReport {
    pub airports: Vec<AirportRecord>,
    /// Rows that could not be turned into a record (header rows included)
    pub skipped: usize,
    /// Rows dropped because an earlier row had the same code
    pub duplicates: usize,
}

impl ParseReport {
    /// A document without a single usable row counts as malformed.
    pub fn into_airports(self, location: &str) -> Result<Vec<AirportRecord>, DataLoadError> {
        if self.airports.is_empty() {
            return Err(DataLoadError::malformed(
                location,
                format!("no valid airport rows ({} skipped)", self.skipped),
            ));
        }
        Ok(self.airports)
    }
}

/// Parse `code,name,city,country,country_code,latitude,longitude` rows.
///
/// Fields may be quoted to carry commas. Quotes never span lines, so an
/// unbalanced quote only costs its own row. Bad rows are skipped, never fatal.
pub fn parse_airports(text: &str) -> ParseReport {
    let mut report = ParseReport::default();
    let mut seen = HashSet::new();

    for (row, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let record = match read_line(line) {
            Ok(record) => record,
            Err(e) => {
                debug!("Skipping unreadable airport row {}: {}", row + 1, e);
                report.skipped += 1;
                continue;
            }
        };

        let Some(airport) = parse_row(&record) else {
            debug!("Skipping malformed airport row {}: {:?}", row + 1, record);
            report.skipped += 1;
            continue;
        };

        if seen.insert(airport.iata_code.clone()) {
            report.airports.push(airport);
        } else {
            report.duplicates += 1;
        }
    }

    report
}

fn read_line(line: &str) -> Result<csv::StringRecord, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(line.as_bytes());

    let mut record = csv::StringRecord::new();
    rdr.read_record(&mut record)?;
    Ok(record)
}

fn parse_row(record: &csv::StringRecord) -> Option<AirportRecord> {
    if record.len() < MIN_COLUMNS {
        return None;
    }

    let code = IataCode::parse(record.get(0)?).ok()?;
    let name = record.get(1)?;
    let city = record.get(2)?;
    if name.is_empty() || city.is_empty() {
        return None;
    }

    let coordinate = |idx: usize| {
        record
            .get(idx)
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    };

    Some(
        AirportRecord::new(code, name, city, record.get(3)?, record.get(4)?)
            .with_coordinates(coordinate(5), coordinate(6)),
    )
}
