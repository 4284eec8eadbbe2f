// Transfer recommendation: greedy first-fit matching of model-ranked
// candidates against the user's current squad.
//
// Each candidate not already owned is paired with the first rostered player
// (in roster order) who plays the same position and whose sale price plus
// the bank covers the candidate's value. The bank is not spent between
// matches, so two recommendations may each assume the full bank; the result
// is a shortlist of independent single swaps, not a multi-transfer plan.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::{debug, info};

use super::roster::ResolvedRoster;
use crate::data::players::PlayerRecord;
use crate::data::position::Position;
use crate::data::predictions::{CandidateRecord, PredictionTable};

/// Default number of transfers to recommend.
pub const DEFAULT_MAX_TRANSFERS: usize = 5;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransferError {
    #[error("no prediction found for rostered player {id} ({name})")]
    MissingPrediction { id: u32, name: String },
}

/// One suggested swap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferRecommendation {
    pub out_id: u32,
    pub out_name: String,
    pub in_id: u32,
    pub in_name: String,
    pub position: Position,
    /// Incoming predicted score minus outgoing predicted score.
    pub expected_points_diff: f64,
}

/// Recommended swaps, best expected gain first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransferPlan {
    pub recommendations: Vec<TransferRecommendation>,
}

impl TransferPlan {
    /// Expected-points differences in recommendation order.
    pub fn expected_points_diffs(&self) -> Vec<f64> {
        self.recommendations
            .iter()
            .map(|r| r.expected_points_diff)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.recommendations.len()
    }
}

/// Whether selling `outgoing` funds `candidate` with `budget` in the bank.
fn can_afford(outgoing: &PlayerRecord, budget: u32, candidate: &CandidateRecord) -> bool {
    u64::from(outgoing.now_cost) + u64::from(budget) >= u64::from(candidate.value)
}

/// First rostered player `candidate` could replace, scanning in roster order.
fn first_replaceable<'a>(
    roster: &'a ResolvedRoster,
    budget: u32,
    candidate: &CandidateRecord,
) -> Option<&'a PlayerRecord> {
    roster
        .entries()
        .iter()
        .find(|p| p.position == candidate.position && can_afford(p, budget, candidate))
}

/// Recommend up to `limit` single-player transfers.
///
/// Candidates are visited by predicted score, highest first; those already
/// on the roster are skipped. Each remaining candidate yields at most one
/// recommendation, against the first compatible roster player. The outgoing
/// player's predicted score must exist in `predictions`, otherwise the call
/// fails with `TransferError::MissingPrediction`.
///
/// Finding no viable swap is not an error: the plan is simply empty.
pub fn recommend_transfers(
    roster: &ResolvedRoster,
    budget: u32,
    predictions: &PredictionTable,
    limit: usize,
) -> Result<TransferPlan, TransferError> {
    let mut recommendations = Vec::new();

    for candidate in predictions.ranked() {
        if roster.contains(candidate.player_id) {
            continue;
        }

        let Some(outgoing) = first_replaceable(roster, budget, candidate) else {
            continue;
        };

        let out_points = predictions.predicted_points(outgoing.id).ok_or_else(|| {
            TransferError::MissingPrediction {
                id: outgoing.id,
                name: outgoing.full_name.clone(),
            }
        })?;

        let diff = candidate.predicted_points - out_points;
        debug!(
            outgoing = %outgoing.full_name,
            incoming = %candidate.full_name,
            position = %candidate.position,
            diff,
            "matched candidate"
        );

        recommendations.push(TransferRecommendation {
            out_id: outgoing.id,
            out_name: outgoing.full_name.clone(),
            in_id: candidate.player_id,
            in_name: candidate.full_name.clone(),
            position: candidate.position,
            expected_points_diff: diff,
        });
    }

    let matched = recommendations.len();
    recommendations.sort_by(|a, b| {
        b.expected_points_diff
            .partial_cmp(&a.expected_points_diff)
            .unwrap_or(Ordering::Equal)
    });
    recommendations.truncate(limit);

    info!(
        "matched {} candidates, recommending {} transfers (bank {})",
        matched,
        recommendations.len(),
        budget
    );

    Ok(TransferPlan { recommendations })
}
