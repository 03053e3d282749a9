//! Unit tests for CLI type wrappers

use super::*;

#[test]
fn test_game_pk_new_and_accessors() {
    let pk = GamePk::new(745891);
    assert_eq!(pk.as_u64(), 745891);
    assert_eq!(pk.to_string(), "745891");
}

#[test]
fn test_game_pk_from_str() {
    let pk: GamePk = "565997".parse().unwrap();
    assert_eq!(pk, GamePk::new(565997));
}

#[test]
fn test_game_pk_from_str_invalid() {
    let result: Result<GamePk> = "not-a-number".parse();
    assert!(matches!(result, Err(TriviaError::InvalidGamePk(_))));
}

#[test]
fn test_player_id_display() {
    let id = PlayerId::new(660271);
    assert_eq!(id.to_string(), "660271");
    assert_eq!(id.as_u64(), 660271);
}

#[test]
fn test_tier_from_str_valid() {
    assert_eq!("Beginner".parse::<Tier>().unwrap(), Tier::Beginner);
    assert_eq!("Intermediate".parse::<Tier>().unwrap(), Tier::Intermediate);
    assert_eq!("Expert".parse::<Tier>().unwrap(), Tier::Expert);
}

#[test]
fn test_tier_from_str_unknown() {
    let result = "Unknown".parse::<Tier>();
    match result {
        Err(TriviaError::InvalidTier { input }) => assert_eq!(input, "Unknown"),
        other => panic!("expected InvalidTier, got {:?}", other),
    }
}

#[test]
fn test_tier_from_str_is_case_sensitive() {
    assert!("beginner".parse::<Tier>().is_err());
    assert!("EXPERT".parse::<Tier>().is_err());
}

#[test]
fn test_tier_persistence_keys() {
    assert_eq!(Tier::Beginner.persistence_key(), "game_ids_2021_2024");
    assert_eq!(Tier::Intermediate.persistence_key(), "game_ids_2000_2024");
    assert_eq!(Tier::Expert.persistence_key(), "game_ids_1990_2024");
}

#[test]
fn test_tier_year_ranges() {
    assert_eq!(Tier::Beginner.year_range(), (2021, 2024));
    assert_eq!(Tier::Intermediate.year_range(), (2000, 2024));
    assert_eq!(Tier::Expert.year_range(), (1990, 2024));
}

#[test]
fn test_tier_display_round_trips() {
    for tier in Tier::ALL {
        let parsed: Tier = tier.to_string().parse().unwrap();
        assert_eq!(parsed, tier);
    }
}

#[test]
fn test_tier_all_is_distinct() {
    assert_eq!(Tier::ALL.len(), 3);
    assert_ne!(Tier::ALL[0], Tier::ALL[1]);
    assert_ne!(Tier::ALL[1], Tier::ALL[2]);
}

#[test]
fn test_tier_serde_round_trip() {
    let json = serde_json::to_string(&Tier::Expert).unwrap();
    assert_eq!(json, "\"Expert\"");
    let back: Tier = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Tier::Expert);
}
