// Captain selection by season total points.

use serde::Serialize;

use super::roster::ResolvedRoster;

/// Default number of captain suggestions.
pub const DEFAULT_MAX_CAPTAINS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaptainPick {
    pub player_id: u32,
    pub full_name: String,
    pub total_points: i32,
}

/// The `limit` rostered players with the most season points, highest first.
/// Ties keep roster order.
pub fn recommend_captains(roster: &ResolvedRoster, limit: usize) -> Vec<CaptainPick> {
    let mut picks: Vec<CaptainPick> = roster
        .entries()
        .iter()
        .map(|p| CaptainPick {
            player_id: p.id,
            full_name: p.full_name.clone(),
            total_points: p.total_points,
        })
        .collect();
    picks.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    picks.truncate(limit);
    picks
}
