use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// One priced itinerary returned by the external flight search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOffer {
    pub id: String,
    pub airline: String,
    pub flight_number: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    #[serde(with = "wall_clock")]
    pub departure_time: NaiveDateTime,
    #[serde(with = "wall_clock")]
    pub arrival_time: NaiveDateTime,
    /// ISO-8601 duration, e.g. `PT7H15M`
    pub duration: String,
    pub stops: u32,
    pub price: f64,
    pub currency: String,
    #[serde(default)]
    pub segments: Vec<Segment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_seats: Option<u32>,
}

impl FlightOffer {
    /// Local hour (0-23) at the departure airport.
    pub fn departure_hour(&self) -> u32 {
        self.departure_time.hour()
    }
}

/// One non-stop leg of an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub departure: SegmentEndpoint,
    pub arrival: SegmentEndpoint,
    pub carrier_code: String,
    pub flight_number: String,
    pub aircraft: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentEndpoint {
    pub airport: String,
    #[serde(default)]
    pub terminal: Option<String>,
    #[serde(with = "wall_clock")]
    pub time: NaiveDateTime,
}

/// Serde adapter for provider timestamps.
///
/// Providers send the wall-clock time at the airport, usually without an
/// offset (`2024-12-25T10:30:00`). RFC 3339 values with an offset are
/// accepted too and keep their wall-clock reading.
pub mod wall_clock {
    use chrono::{DateTime, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn parse(raw: &str) -> Option<NaiveDateTime> {
        let raw = raw.trim();
        if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
            return Some(with_offset.naive_local());
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
            .ok()
    }

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid ISO-8601 timestamp: {}", raw))
        })
    }
}
