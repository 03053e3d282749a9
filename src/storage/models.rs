//! Data models for the storage layer

use crate::cli::types::{GamePk, Tier};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Seeded game-id list for one difficulty tier, stored under the tier's
/// persistence key. Written only by the offline seed command; read-only for
/// the request path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameIdDocument {
    pub game_ids: Vec<GamePk>,
}

/// The committed daily game for one calendar date.
///
/// Created lazily on the first request of a new day and immutable afterwards
/// for that date. Old dates are superseded, never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyGameRecord {
    pub date: NaiveDate,
    pub tier: Tier,
    #[serde(rename = "gamePk")]
    pub game_pk: GamePk,
    pub boxscore: Value,
}

impl DailyGameRecord {
    /// Document key the record for `date` is stored under.
    pub fn key_for(date: NaiveDate) -> String {
        format!("daily_game_{}", date)
    }
}
