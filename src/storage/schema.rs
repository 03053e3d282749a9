//! Database schema and connection management

use anyhow::{anyhow, Result};
use dirs::cache_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Document store over SQLite: one table of JSON documents keyed by a unique
/// document id. `upsert_one` is a single atomic `INSERT OR REPLACE`, which is
/// the only cross-writer guarantee the rest of the crate relies on.
pub struct DocumentStore {
    pub(crate) conn: Connection,
}

impl DocumentStore {
    /// Open the store at its default location and ensure tables exist
    pub fn new() -> Result<Self> {
        let db_path = Self::database_path()?;

        // Ensure the cache directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Self::open(&db_path)
    }

    /// Open the store at an explicit path
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Get the path to the database file
    fn database_path() -> Result<PathBuf> {
        let cache_dir = cache_dir().ok_or_else(|| anyhow!("Could not determine cache directory"))?;
        Ok(cache_dir.join("mlb-trivia").join("trivia.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS documents (
                doc_id TEXT PRIMARY KEY,
                body TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;

        Ok(())
    }
}
