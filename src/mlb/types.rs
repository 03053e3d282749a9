//! Serde models for MLB Stats API responses

use crate::cli::types::PlayerId;
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// One candidate from the fuzzy player search.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerSearchResult {
    pub id: PlayerId,
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(rename = "primaryPosition", default)]
    pub primary_position: Option<PositionRef>,
    #[serde(rename = "currentTeam", default)]
    pub current_team: Option<TeamRef>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PositionRef {
    #[serde(default)]
    pub abbreviation: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TeamRef {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Career summary extracted for the trivia UI, role-specific field set.
///
/// Serializes with a `"type": "pitcher" | "hitter"` tag alongside the stats,
/// matching what the frontend consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PlayerCareer {
    Pitcher(PitcherCareer),
    Hitter(HitterCareer),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitcherCareer {
    pub name: String,
    pub team: String,
    pub team_logo: Option<String>,
    pub games_started: u64,
    pub innings_pitched: String,
    pub wins: u64,
    pub era: String,
    pub whip: String,
    pub strikeouts: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitterCareer {
    pub name: String,
    pub team: String,
    pub team_logo: Option<String>,
    pub games_played: u64,
    pub batting_avg: String,
    pub obp: String,
    pub slg: String,
    pub ops: String,
    pub doubles: u64,
    pub triples: u64,
    pub home_runs: u64,
}

impl PlayerSearchResult {
    /// Pitchers are classified by primary position code; everyone else is
    /// treated as a hitter.
    pub fn is_pitcher(&self) -> bool {
        self.primary_position
            .as_ref()
            .map(|p| matches!(p.abbreviation.as_str(), "P" | "SP" | "RP"))
            .unwrap_or(false)
    }

    /// Current team name, `"Unknown"` for free agents and retired players.
    pub fn team_name(&self) -> String {
        self.current_team
            .as_ref()
            .and_then(|t| t.name.clone())
            .unwrap_or_else(|| "Unknown".to_string())
    }

    /// Logo URL for the player's current team, when one is known.
    pub fn team_logo(&self) -> Option<String> {
        self.current_team
            .as_ref()
            .and_then(|t| t.id)
            .map(|id| format!("https://www.mlbstatic.com/team-logos/{}.svg", id))
    }
}
