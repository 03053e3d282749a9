//! Type-safe wrappers and enums for MLB trivia data.

use crate::error::{Result, TriviaError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(test)]
mod tests;

/// Type-safe wrapper for MLB game identifiers (the stats service's `gamePk`).
///
/// Keeps game ids from being mixed up with other numeric values.
///
/// # Examples
///
/// ```rust
/// use mlb_trivia::GamePk;
///
/// let game_pk = GamePk::new(745891);
/// assert_eq!(game_pk.as_u64(), 745891);
/// assert_eq!(game_pk.to_string(), "745891");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GamePk(pub u64);

impl GamePk {
    /// Create a new GamePk from a u64 value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying u64 value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for GamePk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GamePk {
    type Err = TriviaError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Type-safe wrapper for MLB player identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Difficulty tier for the trivia game.
///
/// Each tier maps to a fixed historical year range and a fixed document key
/// under which its eligible game ids are seeded. The mapping is immutable and
/// defined here, at process start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Beginner,
    Intermediate,
    Expert,
}

impl Tier {
    /// All tiers, in difficulty order. Used for the daily game's uniform
    /// random tier choice.
    pub const ALL: [Tier; 3] = [Tier::Beginner, Tier::Intermediate, Tier::Expert];

    /// Document key the tier's game-id list is seeded under.
    pub fn persistence_key(&self) -> &'static str {
        match self {
            Tier::Beginner => "game_ids_2021_2024",
            Tier::Intermediate => "game_ids_2000_2024",
            Tier::Expert => "game_ids_1990_2024",
        }
    }

    /// Inclusive year range of eligible games.
    pub fn year_range(&self) -> (u16, u16) {
        match self {
            Tier::Beginner => (2021, 2024),
            Tier::Intermediate => (2000, 2024),
            Tier::Expert => (1990, 2024),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tier::Beginner => "Beginner",
            Tier::Intermediate => "Intermediate",
            Tier::Expert => "Expert",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Tier {
    type Err = TriviaError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Beginner" => Ok(Tier::Beginner),
            "Intermediate" => Ok(Tier::Intermediate),
            "Expert" => Ok(Tier::Expert),
            other => Err(TriviaError::InvalidTier {
                input: other.to_string(),
            }),
        }
    }
}
