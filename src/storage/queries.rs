//! Document find/upsert operations

use super::{models::*, schema::DocumentStore};
use crate::cli::types::{GamePk, Tier};
use crate::error::Result;
use chrono::NaiveDate;
use rusqlite::params;
use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};

impl DocumentStore {
    /// Fetch one document by id, or `None` when absent.
    pub fn find_one(&self, doc_id: &str) -> Result<Option<Value>> {
        let mut stmt = self
            .conn
            .prepare("SELECT body FROM documents WHERE doc_id = ?")?;

        let result = stmt.query_row(params![doc_id], |row| row.get::<_, String>(0));

        match result {
            Ok(body) => Ok(Some(serde_json::from_str(&body)?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Insert the document, or replace it wholesale if the id already exists.
    /// `INSERT OR REPLACE` runs as one statement, so a racing writer for the
    /// same id resolves to last-writer-wins rather than a torn document.
    pub fn upsert_one(&self, doc_id: &str, body: &Value) -> Result<()> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        self.conn.execute(
            "INSERT OR REPLACE INTO documents (doc_id, body, updated_at)
             VALUES (?, ?, ?)",
            params![doc_id, serde_json::to_string(body)?, now],
        )?;
        Ok(())
    }

    /// Get the seeded game-id list stored under a tier's key.
    pub fn get_game_ids(&self, tier: Tier) -> Result<Option<Vec<GamePk>>> {
        match self.find_one(tier.persistence_key())? {
            Some(body) => {
                let doc: GameIdDocument = serde_json::from_value(body)?;
                Ok(Some(doc.game_ids))
            }
            None => Ok(None),
        }
    }

    /// Replace a tier's seeded game-id list.
    pub fn put_game_ids(&self, tier: Tier, game_ids: &[GamePk]) -> Result<()> {
        let doc = GameIdDocument {
            game_ids: game_ids.to_vec(),
        };
        self.upsert_one(tier.persistence_key(), &serde_json::to_value(&doc)?)
    }

    /// Get the committed daily game for a date, if one exists.
    pub fn get_daily_game(&self, date: NaiveDate) -> Result<Option<DailyGameRecord>> {
        match self.find_one(&DailyGameRecord::key_for(date))? {
            Some(body) => Ok(Some(serde_json::from_value(body)?)),
            None => Ok(None),
        }
    }

    /// Commit the daily game for its date (atomic upsert; a racing first
    /// request of the day resolves to last-writer-wins).
    pub fn put_daily_game(&self, record: &DailyGameRecord) -> Result<()> {
        self.upsert_one(
            &DailyGameRecord::key_for(record.date),
            &serde_json::to_value(record)?,
        )
    }
}
