use serde::{Deserialize, Serialize};

use crate::iata::IataCode;

/// A single airport as loaded from the airport data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirportRecord {
    pub iata_code: IataCode,
    pub name: String,
    pub city: String,
    pub country: String,
    pub country_code: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

impl AirportRecord {
    pub fn new(
        iata_code: IataCode,
        name: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            iata_code,
            name: name.into(),
            city: city.into(),
            country: country.into(),
            country_code: country_code.into(),
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    pub fn code(&self) -> &str {
        self.iata_code.as_str()
    }
}
