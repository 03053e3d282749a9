//! Tier to game-id resolution

use crate::cli::types::{GamePk, Tier};
use crate::error::{Result, TriviaError};
use crate::storage::DocumentStore;

/// Resolves a difficulty tier to its seeded list of eligible game ids.
///
/// Purely a read over the document store. A missing or empty document is an
/// `EmptyRegistry` error (seed data was never loaded), which is a different
/// failure from an unrecognized tier string — that one never reaches this
/// layer because `Tier::from_str` rejects it at the boundary.
pub struct GameIdRegistry<'a> {
    store: &'a DocumentStore,
}

impl<'a> GameIdRegistry<'a> {
    pub fn new(store: &'a DocumentStore) -> Self {
        Self { store }
    }

    /// Look up the tier's game-id list by its fixed persistence key.
    pub fn resolve(&self, tier: Tier) -> Result<Vec<GamePk>> {
        match self.store.get_game_ids(tier)? {
            Some(ids) if !ids.is_empty() => Ok(ids),
            _ => Err(TriviaError::EmptyRegistry {
                key: tier.persistence_key().to_string(),
            }),
        }
    }
}
