use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod airports;
pub mod error;
pub mod offers;
pub mod state;

pub use error::CliError;
pub use state::AppState;

/// Installs the global subscriber. `RUST_LOG` wins over `default_filter`.
///
/// Logs go to stderr so command output can be piped. Call once per process.
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
