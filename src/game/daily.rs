//! Once-per-calendar-day game memoization

use chrono::{Local, NaiveDate};
use rand::seq::SliceRandom;

use crate::cli::types::Tier;
use crate::error::Result;
use crate::game::selector::{RandomGameSelector, SelectionMode};
use crate::mlb::http::StatsProvider;
use crate::storage::{DailyGameRecord, DocumentStore};

/// Per-calendar-day cache around the random selector.
///
/// The first request of a day picks a random tier and game and commits the
/// result; every later request that day returns the stored record verbatim.
/// Commit goes through the store's atomic upsert, so two racing first
/// requests resolve to last-writer-wins instead of torn state — both callers
/// get a valid record for the date, possibly from different writes. Old
/// dates are never cleaned up; a new date simply starts unset.
pub struct DailyGameMemo<'a, S: StatsProvider + ?Sized> {
    store: &'a DocumentStore,
    selector: RandomGameSelector<'a, S>,
}

impl<'a, S: StatsProvider + ?Sized> DailyGameMemo<'a, S> {
    pub fn new(store: &'a DocumentStore, stats: &'a S) -> Self {
        // The daily pick is always a plain uniform draw; non-repeating
        // history belongs to the interactive random-game path only.
        Self {
            store,
            selector: RandomGameSelector::new(store, stats, SelectionMode::Uniform),
        }
    }

    /// Get or create the daily game for the server's local calendar date.
    pub async fn get_or_create_today(&self) -> Result<DailyGameRecord> {
        self.get_or_create(Local::now().date_naive()).await
    }

    /// Get or create the daily game for an explicit date.
    ///
    /// On selection or fetch failure nothing is committed, so the date stays
    /// unset and the next call retries from scratch.
    pub async fn get_or_create(&self, date: NaiveDate) -> Result<DailyGameRecord> {
        if let Some(record) = self.store.get_daily_game(date)? {
            return Ok(record);
        }

        let tier = *Tier::ALL
            .choose(&mut rand::thread_rng())
            .unwrap_or(&Tier::Beginner);
        let selected = self.selector.select_random(tier).await?;

        let record = DailyGameRecord {
            date,
            tier,
            game_pk: selected.game_pk,
            boxscore: selected.boxscore,
        };
        self.store.put_daily_game(&record)?;

        Ok(record)
    }
}
