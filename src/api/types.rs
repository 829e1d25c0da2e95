//! Typed schema for the data-service payloads.
//!
//! Everything the service returns is decoded once here, at the client
//! boundary. Missing optional fields get their defaults in this module so
//! view code never has to defend against loosely-shaped JSON.

use chrono::{Duration, NaiveDate};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// Game lifecycle status as reported by the scoreboard feed.
///
/// The wire format is an integer: 1 = scheduled, 2 = in progress, 3 = final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "i64")]
pub enum GameStatus {
    Scheduled,
    Live,
    Final,
}

impl From<i64> for GameStatus {
    fn from(value: i64) -> Self {
        match value {
            2 => GameStatus::Live,
            3 => GameStatus::Final,
            _ => GameStatus::Scheduled,
        }
    }
}

impl GameStatus {
    pub fn is_live(&self) -> bool {
        matches!(self, GameStatus::Live)
    }

    pub fn is_final(&self) -> bool {
        matches!(self, GameStatus::Final)
    }

    pub fn has_started(&self) -> bool {
        !matches!(self, GameStatus::Scheduled)
    }
}

/// One side of a matchup in a scoreboard snapshot.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamSide {
    pub team_id: i64,
    pub team_name: String,
    pub team_city: String,
    pub team_tricode: String,
    pub score: i64,
}

/// A single game in a daily scoreboard snapshot.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub game_id: String,
    pub game_status: GameStatus,
    #[serde(default)]
    pub game_status_text: String,
    #[serde(default)]
    pub period: i64,
    #[serde(default)]
    pub game_clock: String,
    #[serde(default, rename = "gameTimeUTC")]
    pub game_time_utc: String,
    pub home_team: TeamSide,
    pub away_team: TeamSide,
}

impl Game {
    /// Calendar date of the tipoff, taken from the UTC timestamp prefix.
    pub fn utc_date(&self) -> Option<NaiveDate> {
        let prefix = self.game_time_utc.get(..10)?;
        NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
    }

    /// Absolute score difference, home minus away.
    pub fn score_margin(&self) -> i64 {
        (self.home_team.score - self.away_team.score).abs()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GamesResponse {
    #[serde(default)]
    pub games: Vec<Game>,
    #[serde(default)]
    pub count: usize,
}

/// Prediction-market prices for one matchup.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameOdds {
    pub away_team: String,
    pub home_team: String,
    pub away_odds: f64,
    pub home_odds: f64,
    pub away_prob: f64,
    pub home_prob: f64,
    pub date: String,
    pub volume: Option<f64>,
    pub source: String,
}

/// Odds snapshot keyed by `"AWAY_HOME_YYYY-MM-DD"`.
pub type OddsMap = HashMap<String, GameOdds>;

#[derive(Debug, Clone, Deserialize)]
pub struct OddsResponse {
    #[serde(default)]
    pub odds: OddsMap,
    #[serde(default)]
    pub count: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SingleOddsResponse {
    pub odds: Option<GameOdds>,
    #[serde(default)]
    pub found: bool,
}

/// Build the snapshot key for a matchup on a given date.
pub fn odds_key(away: &str, home: &str, date: NaiveDate) -> String {
    format!("{}_{}_{}", away, home, date.format("%Y-%m-%d"))
}

/// Look up odds for a game, tolerating market keys dated a day off.
///
/// Market end dates are UTC while scoreboard dates are US Eastern, so the
/// snapshot key for an evening game often lands on the next calendar day.
/// Same-day misses retry at +1 day, then -1.
pub fn odds_for_game<'a>(odds: &'a OddsMap, game: &Game) -> Option<&'a GameOdds> {
    let date = game.utc_date()?;
    for offset in [0i64, 1, -1] {
        let key = odds_key(
            &game.away_team.team_tricode,
            &game.home_team.team_tricode,
            date + Duration::days(offset),
        );
        if let Some(entry) = odds.get(&key) {
            return Some(entry);
        }
    }
    None
}

/// Social discussion intensity bucket for a matchup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatLevel {
    #[default]
    Cold,
    Warm,
    Hot,
    Fire,
}

impl HeatLevel {
    /// Markers for hot and fire games carry a trailing glyph.
    pub fn is_notable(&self) -> bool {
        matches!(self, HeatLevel::Hot | HeatLevel::Fire)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SocialHeat {
    pub count: i64,
    pub level: HeatLevel,
    pub trending: bool,
    pub url: Option<String>,
}

/// One sampled comment from the game discussion thread.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SocialPost {
    pub text: String,
    pub user: String,
    pub likes: i64,
    pub id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SocialFeed {
    #[serde(rename = "tweets", default)]
    pub posts: Vec<SocialPost>,
}

/// One team's record in the league standings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Standing {
    pub rank: i64,
    pub team_tricode: String,
    pub team_name: String,
    pub wins: i64,
    pub losses: i64,
    pub win_pct: f64,
    pub conference: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StandingsResponse {
    #[serde(default)]
    pub standings: Vec<Standing>,
}

/// Stat line for one player in a boxscore.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerLine {
    pub name: String,
    pub minutes: String,
    pub points: i64,
    pub rebounds: i64,
    pub assists: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoxscoreTeam {
    pub team_tricode: String,
    pub score: i64,
    pub players: Vec<PlayerLine>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Boxscore {
    pub game_id: String,
    pub home_team: BoxscoreTeam,
    pub away_team: BoxscoreTeam,
}

/// One entry in the play-by-play event stream.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayEvent {
    pub period: i64,
    pub clock: String,
    pub description: String,
    pub score_home: i64,
    pub score_away: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayByPlay {
    #[serde(default)]
    pub actions: Vec<PlayEvent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: String,
}

/// A scoreboard date: either "whatever today is" or a pinned calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameDate {
    Today,
    Date(NaiveDate),
}

impl GameDate {
    pub fn today() -> Self {
        GameDate::Today
    }

    /// Resolve to a concrete calendar date in the local timezone.
    pub fn resolve(&self) -> NaiveDate {
        match self {
            GameDate::Today => chrono::Local::now().date_naive(),
            GameDate::Date(d) => *d,
        }
    }

    /// True when the date is strictly before today; historical dates have no
    /// open markets, so odds fetches are skipped for them.
    pub fn is_historical(&self) -> bool {
        self.resolve() < chrono::Local::now().date_naive()
    }

    pub fn add_days(&self, days: i64) -> Self {
        GameDate::Date(self.resolve() + Duration::days(days))
    }
}

impl fmt::Display for GameDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resolve().format("%Y-%m-%d"))
    }
}
