use skyfare_core::{AirportRecord, AirportSource};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::warn;

use crate::catalog::AirportCatalog;
use crate::popular::POPULAR_LIMIT;
use crate::ranking::RankedAirport;

/// Lifecycle of an [`AirportIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexState {
    Unloaded,
    Loading,
    Loaded,
    LoadedWithFallback,
}

/// Lazily loaded airport search.
///
/// The first query (or an explicit [`load`](Self::load)) fetches and parses
/// the source. Concurrent callers share that single load and all observe the
/// same catalog. If the source fails, the built-in fallback set is used.
pub struct AirportIndex {
    source: Arc<dyn AirportSource>,
    popular_limit: usize,
    catalog: OnceCell<AirportCatalog>,
    started: AtomicBool,
}

impl AirportIndex {
    pub fn new(source: Arc<dyn AirportSource>) -> Self {
        Self::with_popular_limit(source, POPULAR_LIMIT)
    }

    pub fn with_popular_limit(source: Arc<dyn AirportSource>, popular_limit: usize) -> Self {
        Self {
            source,
            popular_limit,
            catalog: OnceCell::new(),
            started: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> IndexState {
        match self.catalog.get() {
            Some(catalog) if catalog.is_fallback() => IndexState::LoadedWithFallback,
            Some(_) => IndexState::Loaded,
            None if self.started.load(Ordering::Acquire) => IndexState::Loading,
            None => IndexState::Unloaded,
        }
    }

    /// Load the catalog once and return it. Never fails.
    ///
    /// Dropping the caller mid-load leaves the index `Unloaded`; the next
    /// caller starts over.
    pub async fn load(&self) -> &AirportCatalog {
        self.catalog
            .get_or_init(|| async {
                let guard = LoadingGuard::start(&self.started);
                let catalog = match AirportCatalog::from_source(self.source.as_ref(), self.popular_limit).await {
                    Ok(catalog) => catalog,
                    Err(e) => {
                        warn!("Failed to load airport data, using built-in airports: {}", e);
                        AirportCatalog::fallback(self.popular_limit)
                    }
                };
                guard.finish();
                catalog
            })
            .await
    }

    pub async fn search(&self, query: &str, limit: usize) -> Vec<&AirportRecord> {
        self.load().await.search(query, limit)
    }

    pub async fn search_ranked(&self, query: &str, limit: usize) -> Vec<RankedAirport<'_>> {
        self.load().await.search_ranked(query, limit)
    }

    pub async fn popular_airports(&self) -> Vec<&AirportRecord> {
        self.load().await.popular_airports()
    }

    pub async fn airport_by_code(&self, code: &str) -> Option<&AirportRecord> {
        self.load().await.airport_by_code(code)
    }

    pub async fn airports_by_city(&self, city: &str) -> Vec<&AirportRecord> {
        self.load().await.airports_by_city(city)
    }
}

/// Raises the loading flag and lowers it again if the load is abandoned.
struct LoadingGuard<'a> {
    started: &'a AtomicBool,
    finished: bool,
}

impl<'a> LoadingGuard<'a> {
    fn start(started: &'a AtomicBool) -> Self {
        started.store(true, Ordering::Release);
        Self { started, finished: false }
    }

    fn finish(mut self) {
        self.finished = true;
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if !self.finished {
            self.started.store(false, Ordering::Release);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use skyfare_core::DataLoadError;
    use skyfare_store::{FileAirportSource, InlineAirportSource};
    use std::time::Duration;

    const CSV: &str = "iata_code,airport_name,city,country,country_code,latitude,longitude\n\
                       LHR,London Heathrow Airport,London,United Kingdom,GB,51.47,-0.45\n\
                       LGW,London Gatwick Airport,London,United Kingdom,GB,51.15,-0.18\n\
                       CDG,Charles de Gaulle Airport,Paris,France,FR,49.01,2.55\n";

    #[tokio::test]
    async fn test_state_transitions_to_loaded() {
        let index = AirportIndex::new(Arc::new(InlineAirportSource::new("inline", CSV)));
        assert_eq!(index.state(), IndexState::Unloaded);

        let catalog = index.load().await;
        assert_eq!(catalog.len(), 3);
        assert_eq!(index.state(), IndexState::Loaded);
    }

    #[tokio::test]
    async fn test_unreachable_source_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let index = AirportIndex::new(Arc::new(FileAirportSource::new(dir.path().join("gone.csv"))));

        let hits = index.search("zagreb", 5).await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].code(), "ZAG");
        assert_eq!(index.state(), IndexState::LoadedWithFallback);
    }

    #[tokio::test]
    async fn test_garbage_source_falls_back() {
        let index = AirportIndex::new(Arc::new(InlineAirportSource::new("inline", "not,an,airport\n")));
        assert!(index.load().await.is_fallback());
        assert_eq!(index.airport_by_code("jfk").await.map(|a| a.city.as_str()), Some("New York"));
    }

    #[tokio::test]
    async fn test_queries_trigger_load() {
        let index = AirportIndex::new(Arc::new(InlineAirportSource::new("inline", CSV)));

        let london: Vec<&str> = index.airports_by_city("london").await.into_iter().map(|a| a.code()).collect();
        assert_eq!(london, vec!["LHR", "LGW"]);
        assert_eq!(index.state(), IndexState::Loaded);
        assert_eq!(index.popular_airports().await.len(), 2);
    }

    struct SlowSource;

    #[async_trait]
    impl AirportSource for SlowSource {
        async fn fetch(&self) -> Result<String, DataLoadError> {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok(CSV.to_string())
        }

        fn describe(&self) -> String {
            "slow".to_string()
        }
    }

    #[tokio::test]
    async fn test_abandoned_load_returns_to_unloaded() {
        let index = AirportIndex::new(Arc::new(SlowSource));

        let abandoned = tokio::time::timeout(Duration::from_millis(10), index.load()).await;
        assert!(abandoned.is_err());
        assert_eq!(index.state(), IndexState::Unloaded);

        assert_eq!(index.load().await.len(), 3);
        assert_eq!(index.state(), IndexState::Loaded);
    }
}
