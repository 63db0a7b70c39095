use skyfare_core::{AirportRecord, IataCode};

// (code, name, city, country, country code, latitude, longitude)
const FALLBACK: [(&str, &str, &str, &str, &str, f64, f64); 12] = [
    ("JFK", "John F Kennedy International Airport", "New York", "United States", "US", 40.6413, -73.7781),
    ("LHR", "London Heathrow Airport", "London", "United Kingdom", "GB", 51.4700, -0.4543),
    ("CDG", "Charles de Gaulle Airport", "Paris", "France", "FR", 49.0097, 2.5479),
    ("NRT", "Narita International Airport", "Tokyo", "Japan", "JP", 35.7720, 140.3929),
    ("DXB", "Dubai International Airport", "Dubai", "United Arab Emirates", "AE", 25.2532, 55.3657),
    ("LAX", "Los Angeles International Airport", "Los Angeles", "United States", "US", 33.9416, -118.4085),
    ("FRA", "Frankfurt Airport", "Frankfurt", "Germany", "DE", 50.0379, 8.5622),
    ("AMS", "Amsterdam Airport Schiphol", "Amsterdam", "Netherlands", "NL", 52.3105, 4.7683),
    ("SIN", "Singapore Changi Airport", "Singapore", "Singapore", "SG", 1.3644, 103.9915),
    ("SYD", "Sydney Kingsford Smith Airport", "Sydney", "Australia", "AU", -33.9399, 151.1753),
    ("ZAG", "Franjo Tudman Airport Zagreb", "Zagreb", "Croatia", "HR", 45.7429, 16.0688),
    ("VIE", "Vienna International Airport", "Vienna", "Austria", "AT", 48.1103, 16.5697),
];

/// Major airports served when the airport source cannot be loaded.
pub fn fallback_airports() -> Vec<AirportRecord> {
    FALLBACK
        .iter()
        .filter_map(|&(code, name, city, country, country_code, lat, lon)| {
            let code = IataCode::parse(code).ok()?;
            Some(AirportRecord::new(code, name, city, country, country_code).with_coordinates(lat, lon))
        })
        .collect()
}
