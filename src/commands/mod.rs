pub mod boxscore;
pub mod odds;
pub mod scores;
pub mod standings;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::api::types::GameDate;

/// Parse optional date string to GameDate, defaulting to today
///
/// Accepts dates in YYYY-MM-DD format. If no date is provided, returns today's date.
/// Returns an error if the date string is malformed.
pub fn parse_game_date(date: Option<String>) -> Result<GameDate> {
    if let Some(date_str) = date {
        let parsed_date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .with_context(|| format!("Invalid date format '{}'. Use YYYY-MM-DD", date_str))?;
        Ok(GameDate::Date(parsed_date))
    } else {
        Ok(GameDate::today())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_game_date_valid() {
        let date = parse_game_date(Some("2026-01-15".to_string())).unwrap();
        assert_eq!(date.to_string(), "2026-01-15");
    }

    #[test]
    fn test_parse_game_date_none_is_today() {
        assert_eq!(parse_game_date(None).unwrap(), GameDate::Today);
    }

    #[test]
    fn test_parse_game_date_invalid() {
        assert!(parse_game_date(Some("01/15/2026".to_string())).is_err());
        assert!(parse_game_date(Some("not-a-date".to_string())).is_err());
    }
}
