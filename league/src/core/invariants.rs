use std::collections::HashSet;

use crate::core::league::League;

/// Collect every invariant violation in `league`. An empty result means valid.
pub fn validate_invariants(league: &League) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, player) in league.iter().enumerate() {
        if player.name.is_empty() {
            errors.push(format!("player at index {index} has an empty name"));
            continue;
        }
        if !seen.insert(player.name.as_str()) {
            errors.push(format!("duplicate player name: {}", player.name));
        }
    }

    errors
}
