pub mod airport_repo;
pub mod app_config;

pub use airport_repo::{FileAirportSource, InlineAirportSource};
pub use app_config::Config;
