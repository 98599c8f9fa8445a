//! The single-player detail block, shown in the detail overlay.

use serde_json::Value;

use crate::model::Player;

use super::cards::MISSING;

/// Summarize the raw `team` value for display.
///
/// The API sends a whole team object or null; the name is the useful
/// part. Anything else unexpected shows as compact JSON rather than
/// being hidden.
#[must_use]
pub fn team_label(team: Option<&Value>) -> String {
    match team {
        None | Some(Value::Null) => MISSING.to_string(),
        Some(value) => value
            .get("name")
            .and_then(Value::as_str)
            .map_or_else(|| value.to_string(), str::to_string),
    }
}

/// Detail lines for one player: every field the API reports, labeled.
#[must_use]
pub fn detail_lines(player: &Player) -> Vec<String> {
    vec![
        format!("Name: {}", player.name),
        format!("Breed: {}", player.breed),
        format!("Status: {}", player.status),
        format!(
            "Created At: {}",
            player.created_at.as_deref().unwrap_or(MISSING)
        ),
        format!(
            "Updated At: {}",
            player.updated_at.as_deref().unwrap_or(MISSING)
        ),
        format!("Team ID: {}", number_label(player.team_id)),
        format!("Cohort ID: {}", number_label(player.cohort_id)),
        format!("Team: {}", team_label(player.team.as_ref())),
    ]
}

/// The detail block as one text blob.
#[must_use]
pub fn detail_text(player: &Player) -> String {
    detail_lines(player).join("\n")
}

fn number_label(value: Option<u64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| v.to_string())
}
