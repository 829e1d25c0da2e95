use anyhow::{Context, Result};

use crate::api::types::Game;
use crate::commands::parse_game_date;
use crate::config::DisplayConfig;
use crate::data_provider::NbaDataProvider;
use crate::formatting::format_header;

pub async fn run(
    client: &dyn NbaDataProvider,
    date: Option<String>,
    live_only: bool,
    display: &DisplayConfig,
) -> Result<()> {
    let game_date = parse_game_date(date)?;

    let games = if live_only {
        client.live_games().await.context("Failed to fetch live games")?
    } else {
        client
            .games_for_date(&game_date)
            .await
            .context("Failed to fetch games")?
    };

    let title = if live_only {
        "NBA LIVE SCORES".to_string()
    } else {
        format!("NBA SCORES - {}", game_date)
    };
    print!("\n{}\n", format_header(&title, true, display));

    if games.is_empty() {
        if live_only {
            println!("No games in progress.\n");
        } else {
            println!("No games scheduled for this date.\n");
        }
        return Ok(());
    }

    for game in &games {
        println!("{}", format_game_line(game, display));
    }
    println!();

    Ok(())
}

/// One scoreboard line per game.
fn format_game_line(game: &Game, display: &DisplayConfig) -> String {
    let away = &game.away_team.team_tricode;
    let home = &game.home_team.team_tricode;

    if !game.game_status.has_started() {
        return format!("  {:<3} @ {:<3}          {}", away, home, game.game_status_text);
    }

    let lead = if game.game_status.is_live() {
        if display.use_unicode { "▸" } else { ">" }
    } else {
        " "
    };
    format!(
        "{} {:<3} {:>3} - {:<3} {:<3}  {}",
        lead, away, game.away_team.score, game.home_team.score, home, game.game_status_text
    )
}
