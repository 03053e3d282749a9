//! Statistics-service boundary: MLB Stats API client and response models
//!
//! Everything upstream-shaped lives here:
//! - `http`: the `StatsProvider` trait and its reqwest implementation
//! - `types`: serde models for the slices of upstream JSON we care about
//! - `player_stats`: career-stat lookup and name autocomplete

pub mod http;
pub mod player_stats;
pub mod types;

pub use http::{StatsApiClient, StatsProvider};
pub use player_stats::{lookup_career, suggestions};
pub use types::{PlayerCareer, PlayerSearchResult};
