//! Application-wide fetched-data container.
//!
//! One writer (the background fetch loop) and one reader (the TUI frame
//! builder) share this behind an `Arc<RwLock<_>>`. Render code takes cheap
//! snapshots; mutation happens only through the fetch loop and the few
//! setters the event loop calls.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::SystemTime;
use tokio::sync::RwLock;

use crate::api::types::{Boxscore, Game, GameDate, OddsMap, SocialHeat, SocialPost, Standing};
use crate::config::Config;

#[derive(Clone)]
pub struct SharedData {
    pub games: Arc<Vec<Game>>,
    pub odds: Arc<OddsMap>,
    pub heat: Arc<HashMap<String, SocialHeat>>,
    pub standings: Arc<Vec<Standing>>,
    pub boxscore: Arc<Option<Boxscore>>,
    pub posts: Arc<Vec<SocialPost>>,
    pub config: Config,
    pub last_refresh: Option<SystemTime>,
    pub game_date: GameDate,
    /// False after any failed poll; stale data stays on screen.
    pub connected: bool,
    pub selected_game_id: Option<String>,
    pub boxscore_loading: bool,
}

impl Default for SharedData {
    fn default() -> Self {
        SharedData {
            games: Arc::new(Vec::new()),
            odds: Arc::new(OddsMap::new()),
            heat: Arc::new(HashMap::new()),
            standings: Arc::new(Vec::new()),
            boxscore: Arc::new(None),
            posts: Arc::new(Vec::new()),
            config: Config::default(),
            last_refresh: None,
            game_date: GameDate::today(),
            connected: false,
            selected_game_id: None,
            boxscore_loading: false,
        }
    }
}

impl SharedData {
    /// Clear detail state (used when closing the detail view or changing date).
    pub fn clear_detail(&mut self) {
        self.selected_game_id = None;
        self.boxscore = Arc::new(None);
        self.posts = Arc::new(Vec::new());
        self.boxscore_loading = false;
    }
}

pub type SharedDataHandle = Arc<RwLock<SharedData>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_starts_disconnected_and_empty() {
        let data = SharedData::default();
        assert!(!data.connected);
        assert!(data.games.is_empty());
        assert_eq!(data.game_date, GameDate::Today);
    }

    #[test]
    fn test_clear_detail() {
        let mut data = SharedData::default();
        data.selected_game_id = Some("0022500123".to_string());
        data.boxscore_loading = true;
        data.clear_detail();
        assert_eq!(data.selected_game_id, None);
        assert!(!data.boxscore_loading);
        assert!(data.boxscore.is_none());
    }
}
