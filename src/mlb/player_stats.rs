//! Player career-stat lookup and name autocomplete

use serde_json::Value;

use crate::error::{Result, TriviaError};
use crate::mlb::http::StatsProvider;
use crate::mlb::types::{HitterCareer, PitcherCareer, PlayerCareer};

/// Upper bound on autocomplete results.
pub const MAX_SUGGESTIONS: usize = 10;

/// Look up a player by name and extract their career summary.
///
/// Takes the first fuzzy-search candidate, classifies pitcher vs hitter by
/// primary position, and pulls the role's fixed field set out of the career
/// stat block. Missing search results or a missing role-appropriate stat
/// group both surface as `PlayerNotFound`.
pub async fn lookup_career<S: StatsProvider + ?Sized>(
    stats: &S,
    name: &str,
) -> Result<PlayerCareer> {
    let candidates = stats.lookup_player(name).await?;
    let player = candidates
        .into_iter()
        .next()
        .ok_or_else(|| TriviaError::PlayerNotFound {
            name: name.to_string(),
        })?;

    let career = stats.career_stats(player.id).await?;
    let group = if player.is_pitcher() {
        "pitching"
    } else {
        "hitting"
    };
    let block = career_stat_block(&career, group).ok_or_else(|| TriviaError::PlayerNotFound {
        name: name.to_string(),
    })?;

    let career = if player.is_pitcher() {
        PlayerCareer::Pitcher(PitcherCareer {
            name: player.full_name.clone(),
            team: player.team_name(),
            team_logo: player.team_logo(),
            games_started: stat_u64(block, "gamesStarted"),
            innings_pitched: stat_str(block, "inningsPitched"),
            wins: stat_u64(block, "wins"),
            era: stat_str(block, "era"),
            whip: stat_str(block, "whip"),
            strikeouts: stat_u64(block, "strikeOuts"),
        })
    } else {
        PlayerCareer::Hitter(HitterCareer {
            name: player.full_name.clone(),
            team: player.team_name(),
            team_logo: player.team_logo(),
            games_played: stat_u64(block, "gamesPlayed"),
            batting_avg: stat_str(block, "avg"),
            obp: stat_str(block, "obp"),
            slg: stat_str(block, "slg"),
            ops: stat_str(block, "ops"),
            doubles: stat_u64(block, "doubles"),
            triples: stat_u64(block, "triples"),
            home_runs: stat_u64(block, "homeRuns"),
        })
    };

    Ok(career)
}

/// Autocomplete player names for a partial query.
///
/// Non-critical path: any upstream failure degrades to an empty list rather
/// than an error.
pub async fn suggestions<S: StatsProvider + ?Sized>(stats: &S, query: &str) -> Vec<String> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    match stats.lookup_player(query).await {
        Ok(candidates) => candidates
            .into_iter()
            .map(|p| p.full_name)
            .take(MAX_SUGGESTIONS)
            .collect(),
        Err(e) => {
            log::warn!("suggestion lookup for '{}' failed: {}", query, e);
            Vec::new()
        }
    }
}

/// Find the career split for a stat group in a hydrated person payload.
///
/// Shape: `people[0].stats[]`, each entry carrying `group.displayName` and
/// `splits[0].stat` with the actual numbers.
fn career_stat_block<'a>(career: &'a Value, group: &str) -> Option<&'a Value> {
    career
        .get("people")?
        .get(0)?
        .get("stats")?
        .as_array()?
        .iter()
        .find(|entry| {
            entry
                .pointer("/group/displayName")
                .and_then(Value::as_str)
                == Some(group)
        })
        .and_then(|entry| entry.pointer("/splits/0/stat"))
}

fn stat_u64(block: &Value, field: &str) -> u64 {
    block.get(field).and_then(Value::as_u64).unwrap_or(0)
}

fn stat_str(block: &Value, field: &str) -> String {
    block
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or("N/A")
        .to_string()
}
