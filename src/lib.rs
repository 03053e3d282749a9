//! MLB Box-Score Trivia Backend Library
//!
//! Backend core for a trivia game built on historical MLB games: pick a
//! random game from a difficulty tier, memoize one game per calendar day,
//! and look up player career statistics — all over the public MLB Stats API
//! with a small embedded document store for seed data and daily records.
//!
//! ## Features
//!
//! - **Tiered game registry**: Beginner/Intermediate/Expert tiers mapped to
//!   fixed historical year ranges of seeded game ids
//! - **Random selection**: uniform draws, or non-repeating draws that cycle
//!   through a tier before any id comes back
//! - **Daily game memo**: one committed game per calendar day, atomic upsert
//!   against racing first requests
//! - **Player career stats**: fuzzy name search with pitcher/hitter field
//!   extraction, plus autocomplete suggestions
//! - **Offline seeding**: schedule crawl that populates a tier's id list
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mlb_trivia::{
//!     game::{RandomGameSelector, SelectionMode},
//!     mlb::StatsApiClient,
//!     storage::DocumentStore,
//!     Tier,
//! };
//!
//! # async fn example() -> mlb_trivia::Result<()> {
//! # let store = DocumentStore::new().unwrap();
//! let client = StatsApiClient::new();
//! let selector = RandomGameSelector::new(&store, &client, SelectionMode::NonRepeating);
//!
//! let selected = selector.select_random(Tier::Expert).await?;
//! println!("gamePk {}", selected.game_pk);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod game;
pub mod mlb;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{GamePk, PlayerId, Tier};
pub use error::{Result, TriviaError};
pub use storage::DailyGameRecord;
