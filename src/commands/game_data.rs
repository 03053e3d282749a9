//! Handlers for game-id, random-game, daily-game, and boxscore commands

use anyhow::Result;
use serde_json::json;

use crate::cli::types::{GamePk, Tier};
use crate::game::{DailyGameMemo, GameIdRegistry, RandomGameSelector, SelectionMode};
use crate::mlb::http::{StatsApiClient, StatsProvider};
use crate::storage::DocumentStore;

/// Print a tier's seeded game-id list.
pub async fn handle_game_ids(tier: Tier) -> Result<()> {
    let store = DocumentStore::new()?;
    let registry = GameIdRegistry::new(&store);

    let ids = registry.resolve(tier)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({ "game_ids": ids }))?
    );
    Ok(())
}

/// Pick a random game from the tier and print its box score.
pub async fn handle_random_game(tier: Tier, no_repeat: bool) -> Result<()> {
    let store = DocumentStore::new()?;
    let client = StatsApiClient::new();

    let mode = if no_repeat {
        SelectionMode::NonRepeating
    } else {
        SelectionMode::Uniform
    };
    let selector = RandomGameSelector::new(&store, &client, mode);

    let selected = selector.select_random(tier).await?;
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "gamePk": selected.game_pk,
            "boxscore": selected.boxscore,
        }))?
    );
    Ok(())
}

/// Print today's game, committing one first if none exists yet.
pub async fn handle_daily_game() -> Result<()> {
    let store = DocumentStore::new()?;
    let client = StatsApiClient::new();
    let memo = DailyGameMemo::new(&store, &client);

    let record = memo.get_or_create_today().await?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

/// Fetch and print the box score for one specific game.
pub async fn handle_boxscore(game_pk: GamePk) -> Result<()> {
    let client = StatsApiClient::new();

    let boxscore = client.boxscore(game_pk).await?;
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({ "boxscore": boxscore }))?
    );
    Ok(())
}
