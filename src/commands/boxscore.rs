use anyhow::{Context, Result};

use crate::api::types::{BoxscoreTeam, PlayEvent, PlayerLine};
use crate::config::DisplayConfig;
use crate::data_provider::NbaDataProvider;
use crate::formatting::format_header;

/// How many trailing play-by-play events to show.
const RECENT_PLAYS: usize = 5;

pub async fn run(
    client: &dyn NbaDataProvider,
    game_id: String,
    display: &DisplayConfig,
) -> Result<()> {
    let boxscore = client
        .boxscore(&game_id)
        .await
        .context("Failed to fetch boxscore")?;

    let score = format!(
        "{} {} - {} {}",
        boxscore.away_team.team_tricode,
        boxscore.away_team.score,
        boxscore.home_team.score,
        boxscore.home_team.team_tricode
    );
    print!("\n{}", format_header(&score, true, display));

    print_team(&boxscore.away_team, display);
    print_team(&boxscore.home_team, display);

    // Best-effort: a game without play-by-play still gets its boxscore
    if let Ok(plays) = client.play_by_play(&game_id).await {
        if !plays.is_empty() {
            print!("{}", format_header("LAST PLAYS", false, display));
            for play in plays.iter().rev().take(RECENT_PLAYS).rev() {
                println!("{}", format_play_row(play));
            }
            println!();
        }
    }

    Ok(())
}

fn format_play_row(play: &PlayEvent) -> String {
    format!(
        "Q{} {:>5}  {}  ({}-{})",
        play.period, play.clock, play.description, play.score_away, play.score_home
    )
}

fn print_team(team: &BoxscoreTeam, display: &DisplayConfig) {
    print!("{}", format_header(&team.team_tricode, false, display));
    println!("{:<22} {:>6} {:>4} {:>4} {:>4}", "PLAYER", "MIN", "PTS", "REB", "AST");
    for player in &team.players {
        println!("{}", format_player_row(player));
    }
    println!();
}

fn format_player_row(player: &PlayerLine) -> String {
    format!(
        "{:<22} {:>6} {:>4} {:>4} {:>4}",
        player.name, player.minutes, player.points, player.rebounds, player.assists
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_player_row() {
        let player = PlayerLine {
            name: "J. Tatum".to_string(),
            minutes: "38:02".to_string(),
            points: 35,
            rebounds: 7,
            assists: 5,
        };
        let row = format_player_row(&player);
        assert!(row.contains("J. Tatum"));
        assert!(row.contains("38:02"));
        assert!(row.contains("35"));
    }

    #[test]
    fn test_format_play_row() {
        let play = PlayEvent {
            period: 4,
            clock: "2:35".to_string(),
            description: "James driving layup".to_string(),
            score_home: 95,
            score_away: 100,
        };
        let row = format_play_row(&play);
        assert!(row.contains("Q4"));
        assert!(row.contains("James driving layup"));
        assert!(row.contains("(100-95)"));
    }

    #[test]
    fn test_player_rows_align() {
        let a = format_player_row(&PlayerLine {
            name: "A".to_string(),
            minutes: "1:00".to_string(),
            points: 2,
            rebounds: 1,
            assists: 0,
        });
        let b = format_player_row(&PlayerLine {
            name: "A Very Long Player Na".to_string(),
            minutes: "41:30".to_string(),
            points: 40,
            rebounds: 15,
            assists: 12,
        });
        assert_eq!(a.chars().count(), b.chars().count());
    }
}
