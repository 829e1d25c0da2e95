use anyhow::{Context, Result};

use crate::api::types::Standing;
use crate::config::DisplayConfig;
use crate::data_provider::NbaDataProvider;
use crate::formatting::format_header;

pub async fn run(client: &dyn NbaDataProvider, display: &DisplayConfig) -> Result<()> {
    let standings = client
        .standings()
        .await
        .context("Failed to fetch standings")?;

    for conference in ["East", "West"] {
        let title = format!("{} CONFERENCE", conference.to_uppercase());
        print!("\n{}", format_header(&title, false, display));
        println!("{:>2} {:<4} {:<20} {:>3} {:>3}  {:>5}", "#", "", "TEAM", "W", "L", "PCT");

        for standing in standings.iter().filter(|s| s.conference == conference) {
            println!("{}", format_standing_row(standing));
        }
    }
    println!();

    Ok(())
}

fn format_standing_row(standing: &Standing) -> String {
    format!(
        "{:>2} {:<4} {:<20} {:>3} {:>3}  {:.3}",
        standing.rank,
        standing.team_tricode,
        standing.team_name,
        standing.wins,
        standing.losses,
        standing.win_pct
    )
}
