//! TTL caches fronting the slow-moving data-service fetches.
//!
//! The scoreboard itself is always fetched fresh; odds, standings, heat and
//! boxscores change slowly enough that repeat requests inside the window
//! are served from memory.

use cached::proc_macro::cached;

use crate::api::types::{Boxscore, OddsMap, SocialHeat, Standing};
use crate::api::ApiError;
use crate::data_provider::NbaDataProvider;

pub use cached::Cached;

#[cfg(test)]
pub async fn clear_all_caches() {
    ODDS_CACHE.lock().await.cache_clear();
    STANDINGS_CACHE.lock().await.cache_clear();
    BOXSCORE_CACHE.lock().await.cache_clear();
    HEAT_CACHE.lock().await.cache_clear();
}

#[cfg(test)]
#[derive(Debug)]
pub struct CacheStats {
    pub odds_entries: usize,
    pub standings_entries: usize,
    pub boxscore_entries: usize,
    pub heat_entries: usize,
}

#[cfg(test)]
pub async fn cache_stats() -> CacheStats {
    CacheStats {
        odds_entries: ODDS_CACHE.lock().await.cache_size(),
        standings_entries: STANDINGS_CACHE.lock().await.cache_size(),
        boxscore_entries: BOXSCORE_CACHE.lock().await.cache_size(),
        heat_entries: HEAT_CACHE.lock().await.cache_size(),
    }
}

#[allow(clippy::unused_unit)]
#[cached(
    name = "ODDS_CACHE",
    type = "cached::TimedSizedCache<(), OddsMap>",
    create = "{ cached::TimedSizedCache::with_size_and_lifespan(1, 120) }",
    convert = r#"{ () }"#,
    result = true
)]
pub async fn fetch_odds_cached(client: &dyn NbaDataProvider) -> Result<OddsMap, ApiError> {
    client.odds_snapshot().await
}

#[allow(clippy::unused_unit)]
#[cached(
    name = "STANDINGS_CACHE",
    type = "cached::TimedSizedCache<(), Vec<Standing>>",
    create = "{ cached::TimedSizedCache::with_size_and_lifespan(1, 300) }",
    convert = r#"{ () }"#,
    result = true
)]
pub async fn fetch_standings_cached(
    client: &dyn NbaDataProvider,
) -> Result<Vec<Standing>, ApiError> {
    client.standings().await
}

#[cached(
    name = "BOXSCORE_CACHE",
    type = "cached::TimedSizedCache<String, Boxscore>",
    create = "{ cached::TimedSizedCache::with_size_and_lifespan(40, 30) }",
    convert = r#"{ game_id.to_string() }"#,
    result = true
)]
pub async fn fetch_boxscore_cached(
    client: &dyn NbaDataProvider,
    game_id: &str,
) -> Result<Boxscore, ApiError> {
    client.boxscore(game_id).await
}

#[cached(
    name = "HEAT_CACHE",
    type = "cached::TimedSizedCache<String, SocialHeat>",
    create = "{ cached::TimedSizedCache::with_size_and_lifespan(64, 300) }",
    convert = r#"{ format!("{}_{}", away, home) }"#,
    result = true
)]
pub async fn fetch_heat_cached(
    client: &dyn NbaDataProvider,
    away: &str,
    home: &str,
) -> Result<SocialHeat, ApiError> {
    client.social_heat(away, home).await
}

/// Drop the odds snapshot and fetch a fresh one.
pub async fn refresh_odds(client: &dyn NbaDataProvider) -> Result<OddsMap, ApiError> {
    ODDS_CACHE.lock().await.cache_clear();
    fetch_odds_cached(client).await
}

/// Drop one boxscore entry and fetch it fresh.
pub async fn refresh_boxscore(
    client: &dyn NbaDataProvider,
    game_id: &str,
) -> Result<Boxscore, ApiError> {
    BOXSCORE_CACHE.lock().await.cache_remove(&game_id.to_string());
    fetch_boxscore_cached(client, game_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dev::mock_client::MockClient;

    #[tokio::test]
    async fn test_boxscore_cache_round_trip() {
        let client = MockClient::new();
        let first = fetch_boxscore_cached(&client, "0022500123").await.unwrap();
        let second = fetch_boxscore_cached(&client, "0022500123").await.unwrap();
        assert_eq!(first.game_id, second.game_id);
        assert_eq!(first.away_team.players.len(), second.away_team.players.len());
    }

    #[tokio::test]
    async fn test_heat_cache_keyed_per_matchup() {
        let client = MockClient::new();
        let hot = fetch_heat_cached(&client, "LAL", "BOS").await.unwrap();
        let quiet = fetch_heat_cached(&client, "GSW", "BKN").await.unwrap();
        assert!(hot.count > quiet.count);
    }

    #[tokio::test]
    #[ignore] // Shared cache state - run individually
    async fn test_odds_cache_holds_one_snapshot() {
        clear_all_caches().await;
        let client = MockClient::new();
        let _ = fetch_odds_cached(&client).await.unwrap();
        let stats = cache_stats().await;
        assert_eq!(stats.odds_entries, 1);
    }

    #[tokio::test]
    #[ignore] // Shared cache state - run individually
    async fn test_refresh_odds_clears_then_refills() {
        clear_all_caches().await;
        let client = MockClient::new();
        let _ = fetch_odds_cached(&client).await.unwrap();
        let refreshed = refresh_odds(&client).await.unwrap();
        assert!(!refreshed.is_empty());
        assert_eq!(cache_stats().await.odds_entries, 1);
    }

    #[tokio::test]
    #[ignore] // Shared cache state - run individually
    async fn test_clear_all_caches() {
        let client = MockClient::new();
        let _ = fetch_standings_cached(&client).await;
        let _ = fetch_heat_cached(&client, "MIA", "DEN").await;
        clear_all_caches().await;
        let stats = cache_stats().await;
        assert_eq!(stats.standings_entries, 0);
        assert_eq!(stats.heat_entries, 0);
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let failing = MockClient::failing();
        assert!(fetch_boxscore_cached(&failing, "err-key").await.is_err());
        // A later success for the same key must hit the provider again
        let client = MockClient::new();
        assert!(fetch_boxscore_cached(&client, "err-key").await.is_ok());
    }
}
