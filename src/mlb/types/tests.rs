//! Unit tests for MLB Stats API models

use super::*;
use serde_json::json;

fn from_search_json(v: serde_json::Value) -> PlayerSearchResult {
    serde_json::from_value(v).unwrap()
}

#[test]
fn test_search_result_deserializes_full_payload() {
    let player = from_search_json(json!({
        "id": 592450,
        "fullName": "Aaron Judge",
        "primaryPosition": {"code": "9", "abbreviation": "RF"},
        "currentTeam": {"id": 147, "name": "New York Yankees"},
        "birthCity": "Linden"
    }));

    assert_eq!(player.id, PlayerId::new(592450));
    assert_eq!(player.full_name, "Aaron Judge");
    assert!(!player.is_pitcher());
    assert_eq!(player.team_name(), "New York Yankees");
    assert_eq!(
        player.team_logo().as_deref(),
        Some("https://www.mlbstatic.com/team-logos/147.svg")
    );
}

#[test]
fn test_search_result_tolerates_missing_optional_fields() {
    let player = from_search_json(json!({
        "id": 111,
        "fullName": "Old Timer"
    }));

    assert!(!player.is_pitcher());
    assert_eq!(player.team_name(), "Unknown");
    assert!(player.team_logo().is_none());
}

#[test]
fn test_pitcher_classification_codes() {
    for code in ["P", "SP", "RP"] {
        let player = from_search_json(json!({
            "id": 1,
            "fullName": "Some Arm",
            "primaryPosition": {"abbreviation": code}
        }));
        assert!(player.is_pitcher(), "{} should classify as pitcher", code);
    }

    for code in ["C", "1B", "SS", "RF", "DH"] {
        let player = from_search_json(json!({
            "id": 1,
            "fullName": "Some Bat",
            "primaryPosition": {"abbreviation": code}
        }));
        assert!(!player.is_pitcher(), "{} should classify as hitter", code);
    }
}

#[test]
fn test_player_career_serializes_with_role_tag() {
    let career = PlayerCareer::Pitcher(PitcherCareer {
        name: "Clayton Kershaw".to_string(),
        team: "Los Angeles Dodgers".to_string(),
        team_logo: None,
        games_started: 425,
        innings_pitched: "2712.1".to_string(),
        wins: 210,
        era: "2.49".to_string(),
        whip: "1.00".to_string(),
        strikeouts: 2944,
    });

    let v = serde_json::to_value(&career).unwrap();
    assert_eq!(v["type"], json!("pitcher"));
    assert_eq!(v["wins"], json!(210));
    assert_eq!(v["era"], json!("2.49"));
}

#[test]
fn test_hitter_career_serializes_with_role_tag() {
    let career = PlayerCareer::Hitter(HitterCareer {
        name: "Mookie Betts".to_string(),
        team: "Los Angeles Dodgers".to_string(),
        team_logo: None,
        games_played: 1436,
        batting_avg: ".294".to_string(),
        obp: ".373".to_string(),
        slg: ".524".to_string(),
        ops: ".897".to_string(),
        doubles: 318,
        triples: 40,
        home_runs: 279,
    });

    let v = serde_json::to_value(&career).unwrap();
    assert_eq!(v["type"], json!("hitter"));
    assert_eq!(v["home_runs"], json!(279));
}
