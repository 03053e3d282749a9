//! Error types for the MLB trivia backend

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TriviaError>;

#[derive(Error, Debug)]
pub enum TriviaError {
    #[error("unrecognized difficulty tier: {input}")]
    InvalidTier { input: String },

    #[error("no game ids seeded under key '{key}'")]
    EmptyRegistry { key: String },

    #[error("statistics service request failed: {0}")]
    UpstreamFetch(#[from] reqwest::Error),

    #[error("statistics service returned no data")]
    NoData,

    #[error("document store error: {0}")]
    Persistence(#[from] rusqlite::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("failed to parse game id: {0}")]
    InvalidGamePk(#[from] std::num::ParseIntError),
}

impl TriviaError {
    /// True for failures worth retrying on a later request (upstream or
    /// store hiccups), false for caller mistakes and missing seed data.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            TriviaError::UpstreamFetch(_)
                | TriviaError::NoData
                | TriviaError::Persistence(_)
                | TriviaError::Io(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_tier_display() {
        let err = TriviaError::InvalidTier {
            input: "Legendary".to_string(),
        };
        assert_eq!(err.to_string(), "unrecognized difficulty tier: Legendary");
        assert!(!err.is_transient());
    }

    #[test]
    fn test_empty_registry_display() {
        let err = TriviaError::EmptyRegistry {
            key: "game_ids_2021_2024".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no game ids seeded under key 'game_ids_2021_2024'"
        );
        assert!(!err.is_transient());
    }

    #[test]
    fn test_player_not_found_display() {
        let err = TriviaError::PlayerNotFound {
            name: "Babe Ruth".to_string(),
        };
        assert_eq!(err.to_string(), "player not found: Babe Ruth");
    }

    #[test]
    fn test_no_data_is_transient() {
        assert!(TriviaError::NoData.is_transient());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: TriviaError = json_err.into();
        assert!(matches!(err, TriviaError::Json(_)));
    }

    #[test]
    fn test_from_rusqlite_error() {
        let err: TriviaError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, TriviaError::Persistence(_)));
        assert!(err.is_transient());
    }
}
