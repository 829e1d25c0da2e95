//! View-side state: selection, search filter, directional navigation.
//!
//! This is the single owner of everything the renderer derives flags from.
//! Fetched data lives in [`crate::state::SharedData`]; mutation happens only
//! through the methods here, driven by mapped key actions.

use crate::api::types::Game;
use crate::teams::team_coord;

/// Normalized distance below which two games count as level on an axis.
const DEAD_ZONE: f32 = 0.02;

/// Weight of the cross-axis distance when ranking candidates.
const SECONDARY_WEIGHT: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Case-insensitive match of a game against the active text filter.
///
/// Tricode, city and team name of either side all count.
pub fn matches_filter(game: &Game, filter: &str) -> bool {
    let needle = filter.to_lowercase();
    if needle.is_empty() {
        return false;
    }
    [
        &game.away_team.team_tricode,
        &game.away_team.team_city,
        &game.away_team.team_name,
        &game.home_team.team_tricode,
        &game.home_team.team_city,
        &game.home_team.team_name,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

fn game_coord(game: &Game) -> (f32, f32) {
    team_coord(&game.home_team.team_tricode).unwrap_or((0.5, 0.5))
}

/// Pick the geographically nearest game in the given direction.
///
/// Candidates must lie beyond a small dead zone on the primary axis; the
/// cross axis contributes at reduced weight. With no candidate, selection
/// wraps to the game furthest in the opposite direction.
pub fn nearest_in_direction(games: &[Game], from: usize, dir: Direction) -> Option<usize> {
    if games.len() < 2 || from >= games.len() {
        return None;
    }
    let (fx, fy) = game_coord(&games[from]);

    let deltas = |game: &Game| -> (f32, f32) {
        let (x, y) = game_coord(game);
        match dir {
            Direction::Up => (fy - y, (x - fx).abs()),
            Direction::Down => (y - fy, (x - fx).abs()),
            Direction::Left => (fx - x, (y - fy).abs()),
            Direction::Right => (x - fx, (y - fy).abs()),
        }
    };

    let mut best: Option<(usize, f32)> = None;
    for (i, game) in games.iter().enumerate() {
        if i == from {
            continue;
        }
        let (primary, secondary) = deltas(game);
        if primary <= DEAD_ZONE {
            continue;
        }
        let distance = primary + SECONDARY_WEIGHT * secondary;
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((i, distance));
        }
    }
    if let Some((i, _)) = best {
        return Some(i);
    }

    // Nothing in that direction: wrap to the far side
    let mut furthest: Option<(usize, f32)> = None;
    for (i, game) in games.iter().enumerate() {
        if i == from {
            continue;
        }
        let (primary, _) = deltas(game);
        if furthest.map_or(true, |(_, p)| primary < p) {
            furthest = Some((i, primary));
        }
    }
    furthest.map(|(i, _)| i)
}

/// Interactive state owned by the TUI loop.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub selected: usize,
    pub filter: Option<String>,
    pub search_active: bool,
    pub search_input: String,
    pub show_standings: bool,
    pub show_detail: bool,
    /// Live-indicator blink phase, toggled by the event loop.
    pub blink_on: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self { blink_on: true, ..Default::default() }
    }

    /// The filter applied to markers, if one is committed and non-empty.
    pub fn active_filter(&self) -> Option<&str> {
        self.filter.as_deref().filter(|f| !f.is_empty())
    }

    pub fn move_selection(&mut self, games: &[Game], dir: Direction) {
        if let Some(next) = nearest_in_direction(games, self.selected, dir) {
            self.selected = next;
        }
    }

    /// Keep the selection valid after the game list is replaced.
    pub fn clamp_selection(&mut self, game_count: usize) {
        if game_count == 0 {
            self.selected = 0;
        } else if self.selected >= game_count {
            self.selected = game_count - 1;
        }
    }

    /// User-initiated date change: selection resets to the first game.
    pub fn reset_selection(&mut self) {
        self.selected = 0;
        self.show_detail = false;
    }

    pub fn start_search(&mut self) {
        self.search_active = true;
        self.search_input = self.filter.clone().unwrap_or_default();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_input.push(c);
        self.filter = Some(self.search_input.clone());
    }

    pub fn pop_search_char(&mut self) {
        self.search_input.pop();
        self.filter = Some(self.search_input.clone());
    }

    pub fn commit_search(&mut self) {
        self.search_active = false;
        self.filter = Some(self.search_input.clone()).filter(|f| !f.is_empty());
    }

    pub fn cancel_search(&mut self) {
        self.search_active = false;
        self.search_input.clear();
        self.filter = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{GameStatus, TeamSide};

    fn game_at(id: &str, home: &str) -> Game {
        Game {
            game_id: id.to_string(),
            game_status: GameStatus::Scheduled,
            game_status_text: String::new(),
            period: 0,
            game_clock: String::new(),
            game_time_utc: String::new(),
            home_team: TeamSide { team_tricode: home.to_string(), ..Default::default() },
            away_team: TeamSide { team_tricode: "LAL".to_string(), ..Default::default() },
        }
    }

    fn lakers_at_boston() -> Game {
        Game {
            game_id: "x".to_string(),
            game_status: GameStatus::Scheduled,
            game_status_text: String::new(),
            period: 0,
            game_clock: String::new(),
            game_time_utc: String::new(),
            home_team: TeamSide {
                team_tricode: "BOS".to_string(),
                team_city: "Boston".to_string(),
                team_name: "Celtics".to_string(),
                ..Default::default()
            },
            away_team: TeamSide {
                team_tricode: "LAL".to_string(),
                team_city: "Los Angeles".to_string(),
                team_name: "Lakers".to_string(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_filter_matches_tricode_city_and_name() {
        let game = lakers_at_boston();
        assert!(matches_filter(&game, "bos"));
        assert!(matches_filter(&game, "LAKERS"));
        assert!(matches_filter(&game, "angel"));
        assert!(matches_filter(&game, "Celtics"));
        assert!(!matches_filter(&game, "knicks"));
        assert!(!matches_filter(&game, ""));
    }

    #[test]
    fn test_up_picks_nearest_above() {
        // An east-coast column: BOS (top), WAS (middle), MIA (bottom)
        let games = vec![game_at("1", "MIA"), game_at("2", "WAS"), game_at("3", "BOS")];
        assert_eq!(nearest_in_direction(&games, 0, Direction::Up), Some(1));
        assert_eq!(nearest_in_direction(&games, 1, Direction::Up), Some(2));
    }

    #[test]
    fn test_up_then_down_returns_to_start() {
        let games = vec![game_at("1", "MIA"), game_at("2", "WAS"), game_at("3", "BOS")];
        let mut view = ViewState::new();
        view.selected = 0;
        view.move_selection(&games, Direction::Up);
        view.move_selection(&games, Direction::Up);
        view.move_selection(&games, Direction::Down);
        view.move_selection(&games, Direction::Down);
        assert_eq!(view.selected, 0);
    }

    #[test]
    fn test_up_from_top_wraps_to_bottom() {
        let games = vec![game_at("1", "MIA"), game_at("2", "WAS"), game_at("3", "BOS")];
        assert_eq!(nearest_in_direction(&games, 2, Direction::Up), Some(0));
    }

    #[test]
    fn test_right_prefers_nearest_east() {
        // From Salt Lake City: Denver is the nearest game to the east; OKC
        // is further out and Phoenix sits inside the x-axis dead zone.
        let games = vec![
            game_at("1", "UTA"),
            game_at("2", "DEN"),
            game_at("3", "OKC"),
            game_at("4", "PHX"),
        ];
        assert_eq!(nearest_in_direction(&games, 0, Direction::Right), Some(1));
    }

    #[test]
    fn test_dead_zone_ignores_level_games() {
        // NYK and BKN are 0.003 apart on y; "up" from one must not pick the
        // other, it wraps to the genuinely lower game instead.
        let games = vec![game_at("1", "NYK"), game_at("2", "BKN"), game_at("3", "MIA")];
        assert_eq!(nearest_in_direction(&games, 0, Direction::Up), Some(2));
    }

    #[test]
    fn test_single_game_has_nowhere_to_go() {
        let games = vec![game_at("1", "BOS")];
        assert_eq!(nearest_in_direction(&games, 0, Direction::Left), None);
    }

    #[test]
    fn test_clamp_selection_after_refresh() {
        let mut view = ViewState::new();
        view.selected = 5;
        view.clamp_selection(3);
        assert_eq!(view.selected, 2);
        view.clamp_selection(0);
        assert_eq!(view.selected, 0);
    }

    #[test]
    fn test_search_lifecycle() {
        let mut view = ViewState::new();
        view.start_search();
        assert!(view.search_active);
        view.push_search_char('b');
        view.push_search_char('o');
        assert_eq!(view.active_filter(), Some("bo"));
        view.pop_search_char();
        assert_eq!(view.active_filter(), Some("b"));
        view.commit_search();
        assert!(!view.search_active);
        assert_eq!(view.active_filter(), Some("b"));
        view.cancel_search();
        assert_eq!(view.active_filter(), None);
    }

    #[test]
    fn test_commit_of_empty_search_clears_filter() {
        let mut view = ViewState::new();
        view.start_search();
        view.commit_search();
        assert_eq!(view.filter, None);
    }
}
