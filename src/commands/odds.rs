use anyhow::{Context, Result};

use crate::api::types::GameOdds;
use crate::cache;
use crate::config::DisplayConfig;
use crate::data_provider::NbaDataProvider;
use crate::formatting::format_header;

pub async fn run(client: &dyn NbaDataProvider, display: &DisplayConfig) -> Result<()> {
    let odds = cache::fetch_odds_cached(client)
        .await
        .context("Failed to fetch odds")?;

    if odds.is_empty() {
        println!("No open markets.\n");
        return Ok(());
    }

    print!("\n{}", format_header("MARKET ODDS", false, display));

    let mut entries: Vec<&GameOdds> = odds.values().collect();
    entries.sort_by(|a, b| (&a.date, &a.away_team).cmp(&(&b.date, &b.away_team)));

    for entry in entries {
        println!("{}", format_odds_row(entry));
    }
    println!();

    Ok(())
}

fn format_odds_row(odds: &GameOdds) -> String {
    let volume = match odds.volume {
        Some(v) => format!("${:.0}k", v / 1000.0),
        None => "-".to_string(),
    };
    format!(
        "{:<3} @ {:<3}  {}  {:>5.1}% / {:<5.1}%  {:>8}",
        odds.away_team, odds.home_team, odds.date, odds.away_prob, odds.home_prob, volume
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_odds_row() {
        let odds = GameOdds {
            away_team: "LAL".to_string(),
            home_team: "BOS".to_string(),
            away_prob: 42.0,
            home_prob: 58.0,
            date: "2026-01-15".to_string(),
            volume: Some(1_250_000.0),
            ..Default::default()
        };
        let row = format_odds_row(&odds);
        assert!(row.contains("LAL @ BOS"));
        assert!(row.contains("42.0% / 58.0"));
        assert!(row.contains("$1250k"));
    }

    #[test]
    fn test_missing_volume_renders_dash() {
        let odds = GameOdds { volume: None, ..Default::default() };
        assert!(format_odds_row(&odds).trim_end().ends_with('-'));
    }
}
