//! Marker formatting for games placed on the map.
//!
//! A marker is the short text label spliced into the map canvas. Formatting
//! is a pure function of the game snapshot and its display flags; the row
//! renderer re-derives the same segments to style them individually.

use crate::api::types::{Game, HeatLevel};

/// Two-cell prefix carried by live games; the row renderer swaps it for a
/// blinking indicator.
pub const LIVE_PREFIX: &str = "··";

/// Suffix appended to hot and fire games.
pub const HEAT_GLYPH: char = '*';

/// Display state attached to a marker for one render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MarkerFlags {
    pub selected: bool,
    pub highlighted: bool,
    pub live: bool,
    pub heat: HeatLevel,
    pub crunch: bool,
}

/// A marker broken into its styleable parts.
///
/// Concatenated in order, the parts reproduce the exact text the layout
/// engine splices into the canvas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerSegments {
    /// `··` for live games, empty otherwise.
    pub prefix: String,
    /// Opening wrap: `[` selected, `»` highlighted, empty otherwise.
    pub open: String,
    /// Away tricode.
    pub away: String,
    /// `-` for scheduled games, ` a-h ` once started.
    pub middle: String,
    /// Home tricode.
    pub home: String,
    /// Heat glyph plus closing wrap.
    pub close: String,
}

impl MarkerSegments {
    pub fn text(&self) -> String {
        format!(
            "{}{}{}{}{}{}",
            self.prefix, self.open, self.away, self.middle, self.home, self.close
        )
    }

    /// Marker width in character cells.
    pub fn char_len(&self) -> usize {
        self.text().chars().count()
    }
}

/// Split a game into marker segments under the given display flags.
pub fn marker_segments(game: &Game, flags: &MarkerFlags) -> MarkerSegments {
    let middle = if game.game_status.has_started() {
        format!(" {}-{} ", game.away_team.score, game.home_team.score)
    } else {
        "-".to_string()
    };

    let (open, mut close) = if flags.selected {
        ("[".to_string(), "]".to_string())
    } else if flags.highlighted {
        ("»".to_string(), "«".to_string())
    } else {
        (String::new(), String::new())
    };

    if flags.heat.is_notable() {
        close.insert(0, HEAT_GLYPH);
    }

    MarkerSegments {
        prefix: if flags.live { LIVE_PREFIX.to_string() } else { String::new() },
        open,
        away: game.away_team.team_tricode.clone(),
        middle,
        home: game.home_team.team_tricode.clone(),
        close,
    }
}

/// Format the full marker label for a game.
pub fn format_marker(game: &Game, flags: &MarkerFlags) -> String {
    marker_segments(game, flags).text()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{GameStatus, TeamSide};

    fn test_game(status: GameStatus, away_score: i64, home_score: i64) -> Game {
        Game {
            game_id: "0022500001".to_string(),
            game_status: status,
            game_status_text: String::new(),
            period: 0,
            game_clock: String::new(),
            game_time_utc: "2026-01-15T00:30:00Z".to_string(),
            home_team: TeamSide {
                team_tricode: "BOS".to_string(),
                score: home_score,
                ..Default::default()
            },
            away_team: TeamSide {
                team_tricode: "LAL".to_string(),
                score: away_score,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_scheduled_marker_has_no_scores() {
        let game = test_game(GameStatus::Scheduled, 0, 0);
        let label = format_marker(&game, &MarkerFlags::default());
        assert_eq!(label, "LAL-BOS");
        assert!(!label.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_live_marker_shows_away_home_score_order() {
        let game = test_game(GameStatus::Live, 100, 95);
        let flags = MarkerFlags { live: true, ..Default::default() };
        assert_eq!(format_marker(&game, &flags), "··LAL 100-95 BOS");
    }

    #[test]
    fn test_final_marker_keeps_score_without_prefix() {
        let game = test_game(GameStatus::Final, 112, 118);
        assert_eq!(format_marker(&game, &MarkerFlags::default()), "LAL 112-118 BOS");
    }

    #[test]
    fn test_selected_marker_is_bracketed() {
        let game = test_game(GameStatus::Scheduled, 0, 0);
        let flags = MarkerFlags { selected: true, ..Default::default() };
        assert_eq!(format_marker(&game, &flags), "[LAL-BOS]");
    }

    #[test]
    fn test_highlighted_marker_is_quoted() {
        let game = test_game(GameStatus::Scheduled, 0, 0);
        let flags = MarkerFlags { highlighted: true, ..Default::default() };
        assert_eq!(format_marker(&game, &flags), "»LAL-BOS«");
    }

    #[test]
    fn test_selection_wins_over_highlight() {
        let game = test_game(GameStatus::Scheduled, 0, 0);
        let flags = MarkerFlags { selected: true, highlighted: true, ..Default::default() };
        assert_eq!(format_marker(&game, &flags), "[LAL-BOS]");
    }

    #[test]
    fn test_heat_glyph_sits_inside_the_wrap() {
        let game = test_game(GameStatus::Live, 88, 90);
        let flags = MarkerFlags {
            selected: true,
            live: true,
            heat: HeatLevel::Fire,
            ..Default::default()
        };
        assert_eq!(format_marker(&game, &flags), "··[LAL 88-90 BOS*]");
    }

    #[test]
    fn test_warm_heat_gets_no_glyph() {
        let game = test_game(GameStatus::Scheduled, 0, 0);
        let flags = MarkerFlags { heat: HeatLevel::Warm, ..Default::default() };
        assert_eq!(format_marker(&game, &flags), "LAL-BOS");
    }

    #[test]
    fn test_empty_tricodes_render_as_empty_segments() {
        let mut game = test_game(GameStatus::Scheduled, 0, 0);
        game.away_team.team_tricode = String::new();
        game.home_team.team_tricode = String::new();
        assert_eq!(format_marker(&game, &MarkerFlags::default()), "-");
    }

    #[test]
    fn test_segments_reassemble_and_measure() {
        let game = test_game(GameStatus::Live, 100, 95);
        let flags = MarkerFlags { live: true, heat: HeatLevel::Hot, ..Default::default() };
        let segments = marker_segments(&game, &flags);
        assert_eq!(segments.text(), format_marker(&game, &flags));
        // `··` is two cells even though it is four bytes
        assert_eq!(segments.char_len(), "··LAL 100-95 BOS*".chars().count());
    }
}
