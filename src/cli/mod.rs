//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use types::{GamePk, Tier};

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Dump the seeded game-id list for a tier.
    GameIds {
        /// Difficulty tier: Beginner, Intermediate, or Expert.
        #[clap(long, short, default_value = "Beginner")]
        tier: Tier,
    },

    /// Pick a random historical game from a tier and fetch its box score.
    RandomGame {
        /// Difficulty tier: Beginner, Intermediate, or Expert.
        #[clap(long, short, default_value = "Beginner")]
        tier: Tier,

        /// Avoid repeating a game until every other id in the tier has been
        /// returned (resets once the tier is exhausted).
        #[clap(long)]
        no_repeat: bool,
    },

    /// Get today's game, choosing and committing one if none exists yet.
    ///
    /// The first call of a calendar day picks a random tier and game and
    /// persists the result; later calls the same day return it verbatim.
    DailyGame,

    /// Fetch the box score for a specific game id.
    Boxscore {
        /// MLB gamePk of the game.
        game_pk: GamePk,
    },

    /// Look up a player's career statistics by name (first fuzzy match).
    PlayerStats {
        /// Player name to search for.
        #[clap(long, short)]
        name: String,
    },

    /// Autocomplete player names for a partial query.
    Suggestions {
        /// Partial player name.
        query: String,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "mlb-trivia", about = "MLB box-score trivia backend CLI")]
pub struct MlbTrivia {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from the trivia backend
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },

    /// Seed a tier's game-id list from the MLB schedule (offline, slow).
    Seed {
        /// Difficulty tier whose year range will be crawled.
        #[clap(long, short, default_value = "Beginner")]
        tier: Tier,

        /// Print per-month progress while crawling the schedule.
        #[clap(long)]
        verbose: bool,
    },
}
