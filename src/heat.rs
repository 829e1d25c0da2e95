//! Heat classification and crunch-time detection.
//!
//! The data service reports discussion heat per matchup. When that fetch
//! fails or returns nothing, a local fallback derives a level from score
//! closeness and market volume so the map still shades interesting games.

use crate::api::types::{Game, GameOdds, HeatLevel, SocialHeat};

/// Comment count above which a thread counts as warm.
const WARM_THRESHOLD: i64 = 50;

/// Comment count above which a thread counts as hot.
const HOT_THRESHOLD: i64 = 200;

/// Comment count above which a thread counts as fire.
const FIRE_THRESHOLD: i64 = 1000;

/// Comment count above which a matchup is flagged as trending.
const TRENDING_THRESHOLD: i64 = 500;

/// Market volume treated as notable when no social signal exists.
const NOTABLE_VOLUME: f64 = 250_000.0;

/// Score margin at or under which a late game counts as close.
const CLOSE_MARGIN: i64 = 5;

/// Bucket a discussion-thread comment count.
pub fn classify_count(count: i64) -> HeatLevel {
    if count > FIRE_THRESHOLD {
        HeatLevel::Fire
    } else if count > HOT_THRESHOLD {
        HeatLevel::Hot
    } else if count > WARM_THRESHOLD {
        HeatLevel::Warm
    } else {
        HeatLevel::Cold
    }
}

/// Build a full heat record from a raw comment count.
pub fn heat_from_count(count: i64) -> SocialHeat {
    SocialHeat {
        count,
        level: classify_count(count),
        trending: count > TRENDING_THRESHOLD,
        url: None,
    }
}

/// Derive a heat record from game state and market volume alone.
///
/// Used when the social fetch fails for a matchup; the count stays zero so
/// callers can tell a derived record from a measured one.
pub fn fallback_heat(game: &Game, odds: Option<&GameOdds>) -> SocialHeat {
    let level = if game.game_status.is_live() && game.score_margin() <= CLOSE_MARGIN && game.period >= 4 {
        HeatLevel::Hot
    } else if game.game_status.is_live() && game.score_margin() <= 2 * CLOSE_MARGIN {
        HeatLevel::Warm
    } else if odds.and_then(|o| o.volume).unwrap_or(0.0) > NOTABLE_VOLUME {
        HeatLevel::Warm
    } else {
        HeatLevel::Cold
    };

    SocialHeat { count: 0, level, trending: false, url: None }
}

/// A live game in the fourth period or later with a close score.
pub fn is_crunch_time(game: &Game) -> bool {
    game.game_status.is_live() && game.period >= 4 && game.score_margin() <= CLOSE_MARGIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{GameStatus, TeamSide};

    fn test_game(status: GameStatus, period: i64, away: i64, home: i64) -> Game {
        Game {
            game_id: "0022500001".to_string(),
            game_status: status,
            game_status_text: String::new(),
            period,
            game_clock: String::new(),
            game_time_utc: "2026-01-15T00:30:00Z".to_string(),
            home_team: TeamSide { score: home, team_tricode: "BOS".to_string(), ..Default::default() },
            away_team: TeamSide { score: away, team_tricode: "LAL".to_string(), ..Default::default() },
        }
    }

    #[test]
    fn test_classify_count_boundaries() {
        assert_eq!(classify_count(0), HeatLevel::Cold);
        assert_eq!(classify_count(50), HeatLevel::Cold);
        assert_eq!(classify_count(51), HeatLevel::Warm);
        assert_eq!(classify_count(200), HeatLevel::Warm);
        assert_eq!(classify_count(201), HeatLevel::Hot);
        assert_eq!(classify_count(1000), HeatLevel::Hot);
        assert_eq!(classify_count(1001), HeatLevel::Fire);
    }

    #[test]
    fn test_trending_flag() {
        assert!(!heat_from_count(500).trending);
        assert!(heat_from_count(501).trending);
    }

    #[test]
    fn test_fallback_close_late_game_is_hot() {
        let game = test_game(GameStatus::Live, 4, 100, 98);
        assert_eq!(fallback_heat(&game, None).level, HeatLevel::Hot);
    }

    #[test]
    fn test_fallback_close_early_game_is_warm() {
        let game = test_game(GameStatus::Live, 2, 50, 52);
        assert_eq!(fallback_heat(&game, None).level, HeatLevel::Warm);
    }

    #[test]
    fn test_fallback_blowout_is_cold() {
        let game = test_game(GameStatus::Live, 3, 60, 95);
        assert_eq!(fallback_heat(&game, None).level, HeatLevel::Cold);
    }

    #[test]
    fn test_fallback_high_volume_scheduled_game() {
        let game = test_game(GameStatus::Scheduled, 0, 0, 0);
        let odds = GameOdds { volume: Some(400_000.0), ..Default::default() };
        assert_eq!(fallback_heat(&game, Some(&odds)).level, HeatLevel::Warm);
        assert_eq!(fallback_heat(&game, None).level, HeatLevel::Cold);
    }

    #[test]
    fn test_fallback_count_stays_zero() {
        let game = test_game(GameStatus::Live, 4, 100, 98);
        assert_eq!(fallback_heat(&game, None).count, 0);
    }

    #[test]
    fn test_crunch_time() {
        assert!(is_crunch_time(&test_game(GameStatus::Live, 4, 100, 98)));
        assert!(is_crunch_time(&test_game(GameStatus::Live, 5, 110, 110)));
        // Early periods, blowouts, and non-live games never qualify
        assert!(!is_crunch_time(&test_game(GameStatus::Live, 3, 100, 98)));
        assert!(!is_crunch_time(&test_game(GameStatus::Live, 4, 80, 100)));
        assert!(!is_crunch_time(&test_game(GameStatus::Final, 4, 100, 98)));
        assert!(!is_crunch_time(&test_game(GameStatus::Scheduled, 0, 0, 0)));
    }
}
