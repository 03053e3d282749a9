//! Random game selection with configurable repeat policy

use std::collections::HashSet;
use std::sync::Mutex;

use rand::seq::SliceRandom;
use serde_json::Value;

use crate::cli::types::{GamePk, Tier};
use crate::error::{Result, TriviaError};
use crate::game::registry::GameIdRegistry;
use crate::mlb::http::StatsProvider;
use crate::storage::DocumentStore;

/// How a selector draws from a tier's id list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Uniform draw over the full set, independent of history.
    #[default]
    Uniform,
    /// No id repeats until every other id has been returned once; the
    /// tracker then resets completely and the cycle starts over.
    NonRepeating,
}

/// What happens to a drawn id when the box-score fetch fails.
///
/// The legacy behavior is `ConsumeId`: a failed fetch still burns the id for
/// the rest of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchFailurePolicy {
    #[default]
    ConsumeId,
    /// Hand the id back to the tracker so it stays eligible this cycle.
    ReleaseId,
}

/// Process-lifetime memory of previously returned ids. Owned by the selector
/// instance, not persisted; a restart forgets everything. One tracker covers
/// all tiers, which only ever prevents immediate repeats and keeps the reset
/// semantics simple.
#[derive(Debug, Default)]
struct SeenIdTracker {
    seen: Mutex<HashSet<GamePk>>,
}

impl SeenIdTracker {
    /// Draw uniformly from `pool − seen`, resetting the tracker first when
    /// that difference is empty (total reset: the id just returned becomes
    /// eligible again along with everything else). Records the drawn id.
    fn draw_and_record(&self, pool: &[GamePk]) -> Option<GamePk> {
        let mut seen = self.seen.lock().unwrap_or_else(|e| e.into_inner());

        let available: Vec<GamePk> = pool
            .iter()
            .copied()
            .filter(|pk| !seen.contains(pk))
            .collect();

        let mut rng = rand::thread_rng();
        let pick = if available.is_empty() {
            seen.clear();
            pool.choose(&mut rng).copied()?
        } else {
            available.choose(&mut rng).copied()?
        };

        seen.insert(pick);
        Some(pick)
    }

    fn release(&self, game_pk: GamePk) {
        let mut seen = self.seen.lock().unwrap_or_else(|e| e.into_inner());
        seen.remove(&game_pk);
    }
}

/// One selected game with its fetched box score.
#[derive(Debug, Clone)]
pub struct SelectedGame {
    pub game_pk: GamePk,
    pub boxscore: Value,
}

/// Draws a random game from a tier and fetches its box score.
pub struct RandomGameSelector<'a, S: StatsProvider + ?Sized> {
    registry: GameIdRegistry<'a>,
    stats: &'a S,
    mode: SelectionMode,
    on_fetch_failure: FetchFailurePolicy,
    tracker: SeenIdTracker,
}

impl<'a, S: StatsProvider + ?Sized> RandomGameSelector<'a, S> {
    pub fn new(store: &'a DocumentStore, stats: &'a S, mode: SelectionMode) -> Self {
        Self {
            registry: GameIdRegistry::new(store),
            stats,
            mode,
            on_fetch_failure: FetchFailurePolicy::default(),
            tracker: SeenIdTracker::default(),
        }
    }

    pub fn with_fetch_failure_policy(mut self, policy: FetchFailurePolicy) -> Self {
        self.on_fetch_failure = policy;
        self
    }

    /// Select one game from the tier and fetch its box score.
    pub async fn select_random(&self, tier: Tier) -> Result<SelectedGame> {
        let pool = self.registry.resolve(tier)?;
        let game_pk = self.draw(&pool).ok_or_else(|| TriviaError::EmptyRegistry {
            key: tier.persistence_key().to_string(),
        })?;

        match self.fetch_boxscore(game_pk).await {
            Ok(boxscore) => Ok(SelectedGame { game_pk, boxscore }),
            Err(e) => {
                if self.mode == SelectionMode::NonRepeating
                    && self.on_fetch_failure == FetchFailurePolicy::ReleaseId
                {
                    self.tracker.release(game_pk);
                }
                Err(e)
            }
        }
    }

    fn draw(&self, pool: &[GamePk]) -> Option<GamePk> {
        match self.mode {
            SelectionMode::Uniform => pool.choose(&mut rand::thread_rng()).copied(),
            SelectionMode::NonRepeating => self.tracker.draw_and_record(pool),
        }
    }

    async fn fetch_boxscore(&self, game_pk: GamePk) -> Result<Value> {
        let boxscore = self.stats.boxscore(game_pk).await?;

        // An empty payload is as useless to the caller as a failed request
        let empty = boxscore.is_null()
            || boxscore.as_object().is_some_and(|o| o.is_empty());
        if empty {
            return Err(TriviaError::NoData);
        }
        Ok(boxscore)
    }
}
