use async_trait::async_trait;
use futures_util::future::join_all;
use skyfare_catalog::{AirportIndex, IndexState, MatchTier};
use skyfare_core::{AirportSource, DataLoadError};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

const AIRPORTS: &str = r#"iata_code,airport_name,city,country,country_code,latitude,longitude
LHR,London Heathrow Airport,London,United Kingdom,GB,51.4706,-0.461941
LGW,London Gatwick Airport,London,United Kingdom,GB,51.1481,-0.190278
PAR,"Paris, All Airports",Paris,France,FR,48.8566,2.3522
CDG,Charles de Gaulle Airport,Paris,France,FR,49.0128,2.55
YXU,London International Airport,London Ontario,Canada,CA,43.0356,-81.1539
ONT,Ontario International Airport,Ontario,United States,US,34.056,-117.6
JFK,John F Kennedy International Airport,New York,United States,US,40.6398,-73.7789
EWR,Newark Liberty International Airport,Newark,United States,US,40.6925,-74.1687
LON,London Metropolitan Area,Londonderry,United Kingdom,GB,55.0,-7.3
ZAG,Franjo Tudman Airport Zagreb,Zagreb,Croatia,HR,45.7429,16.0688
"#;

/// Counts fetches and yields before answering so concurrent loads overlap.
struct CountingSource {
    fetches: AtomicUsize,
    text: String,
}

#[async_trait]
impl AirportSource for CountingSource {
    async fn fetch(&self) -> Result<String, DataLoadError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(20)).await;
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        "counting".to_string()
    }
}

fn counting(text: &str) -> Arc<CountingSource> {
    Arc::new(CountingSource {
        fetches: AtomicUsize::new(0),
        text: text.to_string(),
    })
}

#[tokio::test]
async fn test_concurrent_loads_share_one_parse() {
    let source = counting(AIRPORTS);
    let index = AirportIndex::new(source.clone());

    let catalogs = join_all((0..16).map(|_| index.load())).await;

    assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
    assert!(catalogs.iter().all(|c| std::ptr::eq(*c, catalogs[0])));
    assert_eq!(catalogs[0].len(), 10);
    assert_eq!(index.state(), IndexState::Loaded);

    // Later queries reuse the loaded catalog
    index.search("paris", 5).await;
    assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_concurrent_searches_before_load_see_same_results() {
    let source = counting(AIRPORTS);
    let index = Arc::new(AirportIndex::new(source.clone()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let index = index.clone();
            tokio::spawn(async move {
                index
                    .search("lon", 10)
                    .await
                    .into_iter()
                    .map(|a| a.code().to_string())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap());
    }

    assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
    assert!(results.iter().all(|r| r == &results[0]));
}

#[tokio::test]
async fn test_search_lon_returns_both_london_airports_and_not_paris() {
    let index = AirportIndex::new(counting(AIRPORTS));
    let hits = index.search_ranked("lon", 10).await;
    let codes: Vec<&str> = hits.iter().map(|h| h.airport.code()).collect();

    // LON is an exact code hit; both London airports follow as city prefix hits
    assert_eq!(codes[0], "LON");
    assert!(codes[1..3].contains(&"LHR"));
    assert!(codes[1..3].contains(&"LGW"));
    assert!(!codes.contains(&"PAR"));
    assert!(!codes.contains(&"CDG"));
    assert_eq!(hits[1].tier, MatchTier::CityPrefix);
    assert_eq!(hits[2].tier, MatchTier::CityPrefix);
}

#[tokio::test]
async fn test_every_hit_matches_its_tier_and_tiers_never_increase() {
    let index = AirportIndex::new(counting(AIRPORTS));

    for query in ["lon", "LHR", "paris", "ontario", "new", "united", "airport", "zag", "x"] {
        let q = query.trim().to_lowercase();
        let hits = index.search_ranked(query, 50).await;

        for hit in &hits {
            let a = hit.airport;
            let expected = if a.code().to_lowercase() == q {
                MatchTier::ExactCode
            } else if a.city.to_lowercase() == q {
                MatchTier::CityExact
            } else if a.city.to_lowercase().starts_with(&q) {
                MatchTier::CityPrefix
            } else if a.city.to_lowercase().contains(&q) {
                MatchTier::CityContains
            } else if a.name.to_lowercase().contains(&q) {
                MatchTier::NameContains
            } else {
                assert!(a.country.to_lowercase().contains(&q), "{} should not match {}", a.code(), q);
                MatchTier::CountryContains
            };
            assert_eq!(hit.tier, expected, "tier of {} for {:?}", a.code(), query);
        }

        assert!(hits.windows(2).all(|w| w[0].tier >= w[1].tier));

        let unique: HashSet<&str> = hits.iter().map(|h| h.airport.code()).collect();
        assert_eq!(unique.len(), hits.len());
    }
}

#[tokio::test]
async fn test_unmatched_airports_are_excluded() {
    let index = AirportIndex::new(counting(AIRPORTS));
    let catalog = index.load().await;

    let hits: HashSet<&str> = index.search("ontario", 50).await.into_iter().map(|a| a.code()).collect();
    for airport in catalog.airports() {
        let haystack = format!("{} {} {}", airport.city, airport.name, airport.country).to_lowercase();
        let matches = airport.code().eq_ignore_ascii_case("ontario") || haystack.contains("ontario");
        assert_eq!(hits.contains(airport.code()), matches, "{}", airport.code());
    }
}

#[tokio::test]
async fn test_search_is_deterministic() {
    let index = AirportIndex::new(counting(AIRPORTS));

    let first: Vec<String> = index.search("a", 10).await.into_iter().map(|a| a.code().to_string()).collect();
    let second: Vec<String> = index.search("a", 10).await.into_iter().map(|a| a.code().to_string()).collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 10);
}

#[tokio::test]
async fn test_empty_query_uses_popular_list_and_limit() {
    let index = AirportIndex::new(counting(AIRPORTS));

    let popular: Vec<&str> = index.popular_airports().await.into_iter().map(|a| a.code()).collect();
    assert_eq!(popular, vec!["JFK", "LHR", "PAR", "ZAG"]);

    let shortlist: Vec<&str> = index.search("", 2).await.into_iter().map(|a| a.code()).collect();
    assert_eq!(shortlist, vec!["JFK", "LHR"]);
}

#[tokio::test]
async fn test_quoted_airport_name_is_searchable() {
    let index = AirportIndex::new(counting(AIRPORTS));
    let par = index.airport_by_code("par").await.unwrap();
    assert_eq!(par.name, "Paris, All Airports");
    assert!(index.airport_by_code("QQQ").await.is_none());
    assert!(index.airports_by_city("Atlantis").await.is_empty());
}
