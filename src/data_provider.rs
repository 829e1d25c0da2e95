/// Trait for providing NBA data, abstracting over the real service client
/// and mock implementations.
use async_trait::async_trait;

use crate::api::types::{
    Boxscore, Game, GameDate, GameOdds, OddsMap, PlayEvent, SocialHeat, SocialPost, Standing,
};
use crate::api::{ApiError, Client};

/// Trait for NBA data providers, implemented by both the real client and
/// the development mock.
#[async_trait]
pub trait NbaDataProvider: Send + Sync {
    /// Check whether the data service is reachable
    async fn health(&self) -> bool;

    /// Games for a specific date with current scores
    async fn games_for_date(&self, date: &GameDate) -> Result<Vec<Game>, ApiError>;

    /// Only the games currently in progress
    async fn live_games(&self) -> Result<Vec<Game>, ApiError>;

    /// Full boxscore for a game
    async fn boxscore(&self, game_id: &str) -> Result<Boxscore, ApiError>;

    /// Ordered play-by-play events for a game
    async fn play_by_play(&self, game_id: &str) -> Result<Vec<PlayEvent>, ApiError>;

    /// Current league standings
    async fn standings(&self) -> Result<Vec<Standing>, ApiError>;

    /// Full market odds snapshot
    async fn odds_snapshot(&self) -> Result<OddsMap, ApiError>;

    /// Odds for one matchup on one date
    async fn game_odds(
        &self,
        away: &str,
        home: &str,
        date: &str,
    ) -> Result<Option<GameOdds>, ApiError>;

    /// Discussion heat for a matchup
    async fn social_heat(&self, away: &str, home: &str) -> Result<SocialHeat, ApiError>;

    /// Top discussion posts for a matchup
    async fn social_posts(
        &self,
        away: &str,
        home: &str,
        limit: usize,
    ) -> Result<Vec<SocialPost>, ApiError>;
}

#[async_trait]
impl NbaDataProvider for Client {
    async fn health(&self) -> bool {
        self.health().await
    }

    async fn games_for_date(&self, date: &GameDate) -> Result<Vec<Game>, ApiError> {
        self.games_for_date(date).await
    }

    async fn live_games(&self) -> Result<Vec<Game>, ApiError> {
        self.live_games().await
    }

    async fn boxscore(&self, game_id: &str) -> Result<Boxscore, ApiError> {
        self.boxscore(game_id).await
    }

    async fn play_by_play(&self, game_id: &str) -> Result<Vec<PlayEvent>, ApiError> {
        self.play_by_play(game_id).await
    }

    async fn standings(&self) -> Result<Vec<Standing>, ApiError> {
        self.standings().await
    }

    async fn odds_snapshot(&self) -> Result<OddsMap, ApiError> {
        self.odds_snapshot().await
    }

    async fn game_odds(
        &self,
        away: &str,
        home: &str,
        date: &str,
    ) -> Result<Option<GameOdds>, ApiError> {
        self.game_odds(away, home, date).await
    }

    async fn social_heat(&self, away: &str, home: &str) -> Result<SocialHeat, ApiError> {
        self.social_heat(away, home).await
    }

    async fn social_posts(
        &self,
        away: &str,
        home: &str,
        limit: usize,
    ) -> Result<Vec<SocialPost>, ApiError> {
        self.social_posts(away, home, limit).await
    }
}
