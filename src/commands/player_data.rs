//! Handlers for player career stats and name autocomplete

use anyhow::Result;

use crate::mlb::http::StatsApiClient;
use crate::mlb::player_stats::{lookup_career, suggestions};

/// Look up a player by name and print their career summary.
pub async fn handle_player_stats(name: &str) -> Result<()> {
    let client = StatsApiClient::new();

    let career = lookup_career(&client, name).await?;
    println!("{}", serde_json::to_string_pretty(&career)?);
    Ok(())
}

/// Print autocomplete candidates for a partial player name.
pub async fn handle_suggestions(query: &str) -> Result<()> {
    let client = StatsApiClient::new();

    let names = suggestions(&client, query).await;
    println!("{}", serde_json::to_string_pretty(&names)?);
    Ok(())
}
