//! Interactive terminal mode.
//!
//! The loop owns the view state and the blink cadence; fetched data arrives
//! through the shared handle written by the background task. Every frame is
//! rebuilt from a snapshot, so render code never holds the lock.

pub mod action;
pub mod keys;
pub mod map;
pub mod state;
pub mod widgets;

pub use action::Action;
pub use keys::key_to_action;
pub use state::{Direction, ViewState};

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDirection, Layout, Rect},
    Terminal,
};
use tokio::sync::mpsc;

use crate::api::types::odds_for_game;
use crate::config::DisplayConfig;
use crate::state::{SharedData, SharedDataHandle};
use widgets::{
    standings_panel::STANDINGS_PANEL_WIDTH, BoxscorePanel, MapView, RenderableWidget,
    StandingsPanel, StatusBar,
};

/// Live-indicator and crunch-time blink half-period.
const BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// Keyboard poll timeout; also bounds blink latency.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Height of the detail panel strip under the map.
const DETAIL_HEIGHT: u16 = 9;

/// Compose one frame into the buffer.
fn draw_frame(area: Rect, buf: &mut Buffer, data: &SharedData, view: &ViewState, display: &DisplayConfig) {
    let rows = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let content = if view.show_standings {
        let cols = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(STANDINGS_PANEL_WIDTH),
            ])
            .split(rows[0]);
        StandingsPanel::new(data.standings.as_ref().clone()).render(cols[1], buf, display);
        cols[0]
    } else {
        rows[0]
    };

    let map_area = if view.show_detail && data.games.get(view.selected).is_some() {
        let split = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(DETAIL_HEIGHT)])
            .split(content);

        let game = &data.games[view.selected];
        let panel = BoxscorePanel {
            game: game.clone(),
            boxscore: data.boxscore.as_ref().clone(),
            odds: odds_for_game(&data.odds, game).cloned(),
            heat: data.heat.get(&game.game_id).cloned(),
            posts: data.posts.as_ref().clone(),
            loading: data.boxscore_loading,
        };
        panel.render(split[1], buf, display);
        split[0]
    } else {
        content
    };

    let map = MapView {
        games: data.games.as_ref().clone(),
        selected: view.selected,
        filter: view.active_filter().map(str::to_string),
        heat: data.heat.as_ref().clone(),
        blink_on: view.blink_on,
    };
    map.render(map_area, buf, display);

    let live_count = data.games.iter().filter(|g| g.game_status.is_live()).count();
    let status = StatusBar {
        date: data.game_date.to_string(),
        game_count: data.games.len(),
        live_count,
        connected: data.connected,
        search_active: view.search_active,
        search_input: view.search_input.clone(),
        filter: view.filter.clone(),
    };
    status.render(rows[1], buf, display);
}

/// Apply one action. Returns true when the app should quit.
async fn apply_action(
    action: Action,
    view: &mut ViewState,
    shared: &SharedDataHandle,
    refresh_tx: &mpsc::Sender<()>,
) -> bool {
    match action {
        Action::Quit => return true,
        Action::Move(dir) => {
            let games = {
                let data = shared.read().await;
                std::sync::Arc::clone(&data.games)
            };
            view.move_selection(&games, dir);
        }
        Action::Refresh => {
            let _ = refresh_tx.send(()).await;
        }
        Action::NextDate | Action::PrevDate => {
            let days = if action == Action::NextDate { 1 } else { -1 };
            {
                let mut data = shared.write().await;
                data.game_date = data.game_date.add_days(days);
                data.clear_detail();
            }
            // A user-initiated date change resets the selection
            view.reset_selection();
            let _ = refresh_tx.send(()).await;
        }
        Action::StartSearch => view.start_search(),
        Action::SearchChar(c) => view.push_search_char(c),
        Action::SearchBackspace => view.pop_search_char(),
        Action::SearchCommit => view.commit_search(),
        Action::SearchCancel => view.cancel_search(),
        Action::OpenDetail => {
            let game_id = {
                let data = shared.read().await;
                data.games.get(view.selected).map(|g| g.game_id.clone())
            };
            if let Some(game_id) = game_id {
                shared.write().await.selected_game_id = Some(game_id);
                view.show_detail = true;
                let _ = refresh_tx.send(()).await;
            }
        }
        Action::CloseDetail => {
            if view.show_detail {
                view.show_detail = false;
                shared.write().await.clear_detail();
            } else if view.active_filter().is_some() {
                view.cancel_search();
            }
        }
        Action::ToggleStandings => view.show_standings = !view.show_standings,
    }
    false
}

/// Main entry point for TUI mode.
pub async fn run(shared: SharedDataHandle, refresh_tx: mpsc::Sender<()>) -> Result<(), io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut view = ViewState::new();
    let mut last_blink = Instant::now();

    loop {
        if last_blink.elapsed() >= BLINK_INTERVAL {
            view.blink_on = !view.blink_on;
            last_blink = Instant::now();
        }

        let snapshot = {
            let data = shared.read().await;
            data.clone()
        };
        view.clamp_selection(snapshot.games.len());
        let display = snapshot.config.display();

        terminal.draw(|f| {
            let area = f.area();
            draw_frame(area, f.buffer_mut(), &snapshot, &view, &display);
        })?;

        if event::poll(POLL_TIMEOUT)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(action) = key_to_action(key, &view) {
                    if apply_action(action, &mut view, &shared, &refresh_tx).await {
                        break;
                    }
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
