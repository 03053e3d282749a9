//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use mlb_trivia::cli::{Commands, GetCmd, MlbTrivia};
use mlb_trivia::commands::{
    game_data::{handle_boxscore, handle_daily_game, handle_game_ids, handle_random_game},
    player_data::{handle_player_stats, handle_suggestions},
    seed_data::handle_seed,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let app = MlbTrivia::parse();

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::GameIds { tier } => handle_game_ids(tier).await?,

            GetCmd::RandomGame { tier, no_repeat } => handle_random_game(tier, no_repeat).await?,

            GetCmd::DailyGame => handle_daily_game().await?,

            GetCmd::Boxscore { game_pk } => handle_boxscore(game_pk).await?,

            GetCmd::PlayerStats { name } => handle_player_stats(&name).await?,

            GetCmd::Suggestions { query } => handle_suggestions(&query).await?,
        },

        Commands::Seed { tier, verbose } => handle_seed(tier, verbose).await?,
    }

    Ok(())
}
