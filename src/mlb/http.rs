//! HTTP client for the MLB Stats API

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::cli::types::{GamePk, PlayerId};
use crate::error::{Result, TriviaError};
use crate::mlb::types::PlayerSearchResult;

/// Base path for the MLB Stats API.
pub const STATS_API_BASE_URL: &str = "https://statsapi.mlb.com/api/v1";

/// Boundary to the statistics service.
///
/// Single attempt per call, failures propagate; no retry policy at this
/// layer. A mock implementation backs the selector and memo tests.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Fuzzy player search; candidates in upstream relevance order.
    async fn lookup_player(&self, name: &str) -> Result<Vec<PlayerSearchResult>>;

    /// Full box score for one game, as opaque JSON.
    async fn boxscore(&self, game_pk: GamePk) -> Result<Value>;

    /// Career statistics for one player, hitting and pitching groups hydrated.
    async fn career_stats(&self, player_id: PlayerId) -> Result<Value>;

    /// All gamePks scheduled in the inclusive `start_date..=end_date` window
    /// (ISO dates).
    async fn schedule(&self, start_date: &str, end_date: &str) -> Result<Vec<GamePk>>;
}

/// `StatsProvider` backed by the public MLB Stats API.
pub struct StatsApiClient {
    client: Client,
    base_url: String,
}

impl StatsApiClient {
    pub fn new() -> Self {
        Self::with_base_url(STATS_API_BASE_URL)
    }

    /// Point the client at a non-default base URL (test servers).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn get_json(&self, url: &str, params: &[(&str, &str)]) -> Result<Value> {
        let res = self
            .client
            .get(url)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        Ok(res)
    }
}

impl Default for StatsApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatsProvider for StatsApiClient {
    async fn lookup_player(&self, name: &str) -> Result<Vec<PlayerSearchResult>> {
        let url = format!("{}/people/search", self.base_url);
        let res = self.get_json(&url, &[("names", name)]).await?;

        let people = res.get("people").cloned().unwrap_or(Value::Array(vec![]));
        Ok(serde_json::from_value(people)?)
    }

    async fn boxscore(&self, game_pk: GamePk) -> Result<Value> {
        let url = format!("{}/game/{}/boxscore", self.base_url, game_pk);
        let res = self.get_json(&url, &[]).await?;

        if res.is_null() {
            return Err(TriviaError::NoData);
        }
        Ok(res)
    }

    async fn career_stats(&self, player_id: PlayerId) -> Result<Value> {
        let url = format!("{}/people/{}", self.base_url, player_id);
        let params = [(
            "hydrate",
            "stats(group=[hitting,pitching],type=[career])",
        )];
        self.get_json(&url, &params).await
    }

    async fn schedule(&self, start_date: &str, end_date: &str) -> Result<Vec<GamePk>> {
        let url = format!("{}/schedule", self.base_url);
        let params = [
            ("sportId", "1"),
            ("startDate", start_date),
            ("endDate", end_date),
        ];
        let res = self.get_json(&url, &params).await?;

        // Shape: { "dates": [ { "games": [ { "gamePk": N, ... } ] } ] }
        let mut game_pks = Vec::new();
        if let Some(dates) = res.get("dates").and_then(Value::as_array) {
            for date in dates {
                if let Some(games) = date.get("games").and_then(Value::as_array) {
                    for game in games {
                        if let Some(pk) = game.get("gamePk").and_then(Value::as_u64) {
                            game_pks.push(GamePk::new(pk));
                        }
                    }
                }
            }
        }
        Ok(game_pks)
    }
}
