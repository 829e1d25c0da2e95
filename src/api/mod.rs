//! HTTP client for the NBA data service.
//!
//! The service is a local companion process that aggregates the scoreboard
//! feed, prediction-market odds and social heat behind one REST surface.
//! Every call here returns an [`ApiError`] on failure; nothing above the
//! background fetch loop ever sees one.

pub mod types;

pub use types::{
    Boxscore, Game, GameDate, GameOdds, GameStatus, HeatLevel, OddsMap, PlayEvent, SocialFeed,
    SocialHeat, SocialPost, Standing, TeamSide,
};

use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use types::{
    GamesResponse, HealthResponse, OddsResponse, PlayByPlay, SingleOddsResponse,
    StandingsResponse,
};

/// Default address of the local data service.
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:8765";

/// Request timeout applied to every call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("service returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to decode response: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// REST client for the data service.
pub struct Client {
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    /// Create a client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { base_url: base_url.into(), http })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Check whether the data service is up.
    pub async fn health(&self) -> bool {
        match self.get_json::<HealthResponse>("/health").await {
            Ok(h) => h.status == "ok",
            Err(e) => {
                warn!("health check failed: {}", e);
                false
            }
        }
    }

    /// All games scheduled for today with current scores.
    pub async fn games_today(&self) -> Result<Vec<Game>> {
        let resp: GamesResponse = self.get_json("/games/today").await?;
        Ok(resp.games)
    }

    /// Games for a specific date.
    pub async fn games_for_date(&self, date: &GameDate) -> Result<Vec<Game>> {
        match date {
            GameDate::Today => self.games_today().await,
            GameDate::Date(_) => {
                let resp: GamesResponse =
                    self.get_json(&format!("/games/date/{}", date)).await?;
                Ok(resp.games)
            }
        }
    }

    /// Only the games currently in progress.
    pub async fn live_games(&self) -> Result<Vec<Game>> {
        let resp: GamesResponse = self.get_json("/games/live").await?;
        Ok(resp.games)
    }

    /// Full boxscore for a game.
    pub async fn boxscore(&self, game_id: &str) -> Result<Boxscore> {
        self.get_json(&format!("/games/{}/boxscore", game_id)).await
    }

    /// Ordered play-by-play events for a game.
    pub async fn play_by_play(&self, game_id: &str) -> Result<Vec<PlayEvent>> {
        let resp: PlayByPlay = self
            .get_json(&format!("/games/{}/playbyplay", game_id))
            .await?;
        Ok(resp.actions)
    }

    /// Current league standings.
    pub async fn standings(&self) -> Result<Vec<Standing>> {
        let resp: StandingsResponse = self.get_json("/standings").await?;
        Ok(resp.standings)
    }

    /// Full odds snapshot keyed by `"AWAY_HOME_DATE"`.
    pub async fn odds_snapshot(&self) -> Result<OddsMap> {
        let resp: OddsResponse = self.get_json("/api/polymarket/odds").await?;
        Ok(resp.odds)
    }

    /// Odds for one matchup on one date, if the market exists.
    pub async fn game_odds(
        &self,
        away: &str,
        home: &str,
        date: &str,
    ) -> Result<Option<GameOdds>> {
        let resp: SingleOddsResponse = self
            .get_json(&format!("/api/polymarket/odds/{}/{}/{}", away, home, date))
            .await?;
        Ok(resp.odds.filter(|_| resp.found))
    }

    /// Discussion heat for a matchup, keyed by team names.
    pub async fn social_heat(&self, away: &str, home: &str) -> Result<SocialHeat> {
        self.get_json(&format!("/social/heat/{}/{}", away, home)).await
    }

    /// Top discussion-thread comments for a matchup.
    pub async fn social_posts(
        &self,
        away: &str,
        home: &str,
        limit: usize,
    ) -> Result<Vec<SocialPost>> {
        let feed: SocialFeed = self
            .get_json(&format!("/social/tweets/{}/{}?limit={}", away, home, limit))
            .await?;
        Ok(feed.posts)
    }
}
