//! Background polling loop.
//!
//! One task owns all fetching: scoreboard, odds, heat fan-out, standings and
//! the detail view's boxscore. Failures degrade to a `connected = false`
//! flag and stale data; there is no retry beyond the next interval tick.

use futures::future::join_all;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::sync::mpsc;
use tracing::warn;

use crate::api::types::{odds_for_game, Game, OddsMap, SocialHeat};
use crate::cache;
use crate::data_provider::NbaDataProvider;
use crate::heat::fallback_heat;
use crate::state::SharedDataHandle;

/// How many discussion posts the detail view shows.
const DETAIL_POST_LIMIT: usize = 5;

/// Fetch the scoreboard for the current date and update shared state.
pub async fn fetch_games(client: &dyn NbaDataProvider, shared: &SharedDataHandle) {
    let date = {
        let data = shared.read().await;
        data.game_date.clone()
    };

    match client.games_for_date(&date).await {
        Ok(games) => {
            let mut data = shared.write().await;
            data.games = Arc::new(games);
            data.last_refresh = Some(SystemTime::now());
            data.connected = true;
        }
        Err(e) => {
            warn!("failed to fetch games: {}", e);
            shared.write().await.connected = false;
        }
    }
}

/// Fetch the odds snapshot. Historical dates have no open markets.
pub async fn fetch_odds(client: &dyn NbaDataProvider, shared: &SharedDataHandle) {
    let date = {
        let data = shared.read().await;
        data.game_date.clone()
    };
    if date.is_historical() {
        return;
    }

    match cache::fetch_odds_cached(client).await {
        Ok(odds) => {
            shared.write().await.odds = Arc::new(odds);
        }
        Err(e) => {
            warn!("failed to fetch odds: {}", e);
        }
    }
}

/// Fetch current standings.
pub async fn fetch_standings(client: &dyn NbaDataProvider, shared: &SharedDataHandle) {
    match cache::fetch_standings_cached(client).await {
        Ok(standings) => {
            shared.write().await.standings = Arc::new(standings);
        }
        Err(e) => {
            warn!("failed to fetch standings: {}", e);
        }
    }
}

/// Fan out one heat request per game and merge the results.
///
/// A failed request falls back to a locally derived record for that game
/// only; the rest of the slate is unaffected.
async fn fetch_all_heat(
    client: &dyn NbaDataProvider,
    games: &[Game],
    odds: &OddsMap,
) -> HashMap<String, SocialHeat> {
    let fetches = games.iter().map(|game| async move {
        let result = cache::fetch_heat_cached(
            client,
            &game.away_team.team_name,
            &game.home_team.team_name,
        )
        .await;
        (game, result)
    });

    let mut heat = HashMap::new();
    for (game, result) in join_all(fetches).await {
        let record = match result {
            Ok(h) => h,
            Err(_) => fallback_heat(game, odds_for_game(odds, game)),
        };
        heat.insert(game.game_id.clone(), record);
    }
    heat
}

/// Refresh heat for every game on the board.
pub async fn fetch_heat(client: &dyn NbaDataProvider, shared: &SharedDataHandle) {
    let (games, odds) = {
        let data = shared.read().await;
        (Arc::clone(&data.games), Arc::clone(&data.odds))
    };

    let heat = fetch_all_heat(client, &games, &odds).await;
    shared.write().await.heat = Arc::new(heat);
}

/// Fetch boxscore and discussion posts for the selected game, if any.
///
/// The two calls are sequenced on purpose: posts are only worth showing
/// once the boxscore exists.
pub async fn fetch_detail(client: &dyn NbaDataProvider, shared: &SharedDataHandle) {
    let selected = {
        let data = shared.read().await;
        data.selected_game_id.clone()
    };
    let Some(game_id) = selected else {
        return;
    };

    {
        let mut data = shared.write().await;
        data.boxscore_loading = true;
    }

    match cache::fetch_boxscore_cached(client, &game_id).await {
        Ok(boxscore) => {
            let (away, home) = {
                let data = shared.read().await;
                match data.games.iter().find(|g| g.game_id == game_id) {
                    Some(game) => (
                        game.away_team.team_name.clone(),
                        game.home_team.team_name.clone(),
                    ),
                    None => (boxscore.away_team.team_tricode.clone(),
                             boxscore.home_team.team_tricode.clone()),
                }
            };
            let posts = client
                .social_posts(&away, &home, DETAIL_POST_LIMIT)
                .await
                .unwrap_or_default();

            let mut data = shared.write().await;
            data.boxscore = Arc::new(Some(boxscore));
            data.posts = Arc::new(posts);
            data.boxscore_loading = false;
        }
        Err(e) => {
            warn!("failed to fetch boxscore for {}: {}", game_id, e);
            let mut data = shared.write().await;
            data.boxscore_loading = false;
        }
    }
}

/// Background task loop that periodically fetches everything.
pub async fn fetch_data_loop(
    client: impl NbaDataProvider,
    shared: SharedDataHandle,
    interval: u64,
    mut refresh_rx: mpsc::Receiver<()>,
) {
    let mut interval_timer = tokio::time::interval(Duration::from_secs(interval));
    interval_timer.tick().await; // First tick completes immediately

    loop {
        fetch_games(&client, &shared).await;
        fetch_odds(&client, &shared).await;
        fetch_standings(&client, &shared).await;
        fetch_heat(&client, &shared).await;
        fetch_detail(&client, &shared).await;

        // Wait for either the interval timer or a manual refresh signal
        tokio::select! {
            _ = interval_timer.tick() => {}
            _ = refresh_rx.recv() => {}
        }
    }
}
