//! Deterministic mock data provider.
//!
//! Used by unit tests and by development mode to run the TUI without the
//! data service. The fixture slate is fixed: one live game, one scheduled,
//! one final, all pinned to 2026-01-15.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::api::types::{
    Boxscore, BoxscoreTeam, Game, GameDate, GameOdds, GameStatus, OddsMap, PlayEvent, PlayerLine,
    SocialHeat, SocialPost, Standing, TeamSide,
};
use crate::api::ApiError;
use crate::data_provider::NbaDataProvider;
use crate::heat::heat_from_count;

/// Date all fixture games are pinned to.
pub const FIXTURE_DATE: &str = "2026-01-15";

pub struct MockClient {
    fail: bool,
}

impl MockClient {
    pub fn new() -> Self {
        Self { fail: false }
    }

    /// A client whose every call fails, for exercising degraded paths.
    pub fn failing() -> Self {
        Self { fail: true }
    }

    fn guard(&self) -> Result<(), ApiError> {
        if self.fail {
            Err(ApiError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR))
        } else {
            Ok(())
        }
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

fn team(tricode: &str, city: &str, name: &str, score: i64) -> TeamSide {
    TeamSide {
        team_id: 0,
        team_name: name.to_string(),
        team_city: city.to_string(),
        team_tricode: tricode.to_string(),
        score,
    }
}

/// The fixture slate used everywhere in tests.
pub fn fixture_games() -> Vec<Game> {
    vec![
        Game {
            game_id: "0022500123".to_string(),
            game_status: GameStatus::Live,
            game_status_text: "Q4 2:35".to_string(),
            period: 4,
            game_clock: "PT02M35.00S".to_string(),
            game_time_utc: format!("{}T00:30:00Z", FIXTURE_DATE),
            away_team: team("LAL", "Los Angeles", "Lakers", 100),
            home_team: team("BOS", "Boston", "Celtics", 95),
        },
        Game {
            game_id: "0022500124".to_string(),
            game_status: GameStatus::Scheduled,
            game_status_text: "7:30 pm ET".to_string(),
            period: 0,
            game_clock: String::new(),
            game_time_utc: format!("{}T00:30:00Z", FIXTURE_DATE),
            away_team: team("GSW", "Golden State", "Warriors", 0),
            home_team: team("BKN", "Brooklyn", "Nets", 0),
        },
        Game {
            game_id: "0022500125".to_string(),
            game_status: GameStatus::Final,
            game_status_text: "Final".to_string(),
            period: 4,
            game_clock: String::new(),
            game_time_utc: format!("{}T02:00:00Z", FIXTURE_DATE),
            away_team: team("MIA", "Miami", "Heat", 112),
            home_team: team("DEN", "Denver", "Nuggets", 118),
        },
    ]
}

fn fixture_odds() -> OddsMap {
    let mut odds = OddsMap::new();
    // Market key for the Lakers game is dated a day later than the game,
    // the way evening tips land on UTC end dates.
    odds.insert(
        "LAL_BOS_2026-01-16".to_string(),
        GameOdds {
            away_team: "LAL".to_string(),
            home_team: "BOS".to_string(),
            away_odds: 2.38,
            home_odds: 1.72,
            away_prob: 42.0,
            home_prob: 58.0,
            date: "2026-01-16".to_string(),
            volume: Some(1_250_000.0),
            source: "polymarket".to_string(),
        },
    );
    odds.insert(
        format!("GSW_BKN_{}", FIXTURE_DATE),
        GameOdds {
            away_team: "GSW".to_string(),
            home_team: "BKN".to_string(),
            away_odds: 1.54,
            home_odds: 2.60,
            away_prob: 65.0,
            home_prob: 35.0,
            date: FIXTURE_DATE.to_string(),
            volume: Some(310_000.0),
            source: "polymarket".to_string(),
        },
    );
    odds
}

#[async_trait]
impl NbaDataProvider for MockClient {
    async fn health(&self) -> bool {
        !self.fail
    }

    async fn games_for_date(&self, _date: &GameDate) -> Result<Vec<Game>, ApiError> {
        self.guard()?;
        Ok(fixture_games())
    }

    async fn live_games(&self) -> Result<Vec<Game>, ApiError> {
        self.guard()?;
        Ok(fixture_games()
            .into_iter()
            .filter(|g| g.game_status.is_live())
            .collect())
    }

    async fn boxscore(&self, game_id: &str) -> Result<Boxscore, ApiError> {
        self.guard()?;
        Ok(Boxscore {
            game_id: game_id.to_string(),
            away_team: BoxscoreTeam {
                team_tricode: "LAL".to_string(),
                score: 100,
                players: vec![
                    PlayerLine {
                        name: "L. James".to_string(),
                        minutes: "36:12".to_string(),
                        points: 32,
                        rebounds: 8,
                        assists: 9,
                    },
                    PlayerLine {
                        name: "A. Davis".to_string(),
                        minutes: "34:40".to_string(),
                        points: 24,
                        rebounds: 12,
                        assists: 3,
                    },
                ],
            },
            home_team: BoxscoreTeam {
                team_tricode: "BOS".to_string(),
                score: 95,
                players: vec![PlayerLine {
                    name: "J. Tatum".to_string(),
                    minutes: "38:02".to_string(),
                    points: 35,
                    rebounds: 7,
                    assists: 5,
                }],
            },
        })
    }

    async fn play_by_play(&self, _game_id: &str) -> Result<Vec<PlayEvent>, ApiError> {
        self.guard()?;
        Ok(vec![
            PlayEvent {
                period: 4,
                clock: "2:41".to_string(),
                description: "Tatum 3PT pullup".to_string(),
                score_home: 95,
                score_away: 98,
            },
            PlayEvent {
                period: 4,
                clock: "2:35".to_string(),
                description: "James driving layup".to_string(),
                score_home: 95,
                score_away: 100,
            },
        ])
    }

    async fn standings(&self) -> Result<Vec<Standing>, ApiError> {
        self.guard()?;
        Ok(vec![
            Standing {
                rank: 1,
                team_tricode: "BOS".to_string(),
                team_name: "Celtics".to_string(),
                wins: 30,
                losses: 8,
                win_pct: 0.789,
                conference: "East".to_string(),
            },
            Standing {
                rank: 1,
                team_tricode: "OKC".to_string(),
                team_name: "Thunder".to_string(),
                wins: 32,
                losses: 6,
                win_pct: 0.842,
                conference: "West".to_string(),
            },
            Standing {
                rank: 2,
                team_tricode: "DEN".to_string(),
                team_name: "Nuggets".to_string(),
                wins: 27,
                losses: 11,
                win_pct: 0.711,
                conference: "West".to_string(),
            },
        ])
    }

    async fn odds_snapshot(&self) -> Result<OddsMap, ApiError> {
        self.guard()?;
        Ok(fixture_odds())
    }

    async fn game_odds(
        &self,
        away: &str,
        home: &str,
        date: &str,
    ) -> Result<Option<GameOdds>, ApiError> {
        self.guard()?;
        Ok(fixture_odds().remove(&format!("{}_{}_{}", away, home, date)))
    }

    async fn social_heat(&self, away: &str, home: &str) -> Result<SocialHeat, ApiError> {
        self.guard()?;
        let count = match (away, home) {
            ("Lakers", "Celtics") | ("LAL", "BOS") => 1500,
            ("Heat", "Nuggets") | ("MIA", "DEN") => 320,
            _ => 12,
        };
        Ok(heat_from_count(count))
    }

    async fn social_posts(
        &self,
        _away: &str,
        _home: &str,
        limit: usize,
    ) -> Result<Vec<SocialPost>, ApiError> {
        self.guard()?;
        let posts = vec![
            SocialPost {
                text: "this fourth quarter is insane".to_string(),
                user: "u/parquet_floor".to_string(),
                likes: 412,
                id: "c1".to_string(),
            },
            SocialPost {
                text: "someone guard the corner please".to_string(),
                user: "u/lakeshow4life".to_string(),
                likes: 208,
                id: "c2".to_string(),
            },
        ];
        Ok(posts.into_iter().take(limit).collect())
    }
}
