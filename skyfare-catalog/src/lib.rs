pub mod catalog;
pub mod fallback;
pub mod index;
pub mod parser;
pub mod popular;
pub mod ranking;

pub use catalog::AirportCatalog;
pub use index::{AirportIndex, IndexState};
pub use parser::{parse_airports, ParseReport};
pub use popular::{POPULAR_CITIES, POPULAR_LIMIT};
pub use ranking::{MatchTier, RankedAirport};
