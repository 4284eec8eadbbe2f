// Model prediction table loading.
//
// The prediction CSV is produced by the points model for an upcoming
// gameweek: one row per player with a predicted score and the price the
// player would cost to bring in.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::warn;

use super::position::Position;
use super::{open_table, to_tenths, TableError};

/// A player the model has scored, and so a possible transfer target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub player_id: u32,
    pub full_name: String,
    pub position: Position,
    /// Purchase price in tenths of a million.
    pub value: u32,
    pub predicted_points: f64,
}

/// Predicted scores for one gameweek, indexed by player id.
#[derive(Debug, Clone, Default)]
pub struct PredictionTable {
    candidates: Vec<CandidateRecord>,
    index: HashMap<u32, usize>,
}

impl PredictionTable {
    /// Build a table from records. Repeated ids keep the latest row.
    pub fn new(records: Vec<CandidateRecord>) -> Self {
        let mut candidates: Vec<CandidateRecord> = Vec::with_capacity(records.len());
        let mut index = HashMap::with_capacity(records.len());

        for record in records {
            match index.get(&record.player_id) {
                Some(&slot) => {
                    warn!(
                        "duplicate prediction for player {}, using latest row",
                        record.player_id
                    );
                    candidates[slot] = record;
                }
                None => {
                    index.insert(record.player_id, candidates.len());
                    candidates.push(record);
                }
            }
        }

        PredictionTable { candidates, index }
    }

    pub fn get(&self, player_id: u32) -> Option<&CandidateRecord> {
        self.index.get(&player_id).map(|&i| &self.candidates[i])
    }

    /// The predicted score for `player_id`, if the model scored them.
    pub fn predicted_points(&self, player_id: u32) -> Option<f64> {
        self.get(player_id).map(|c| c.predicted_points)
    }

    /// Candidates ordered by predicted score, highest first.
    ///
    /// The sort is stable, so equal scores keep their table order.
    pub fn ranked(&self) -> Vec<&CandidateRecord> {
        let mut ranked: Vec<&CandidateRecord> = self.candidates.iter().collect();
        ranked.sort_by(|a, b| {
            b.predicted_points
                .partial_cmp(&a.predicted_points)
                .unwrap_or(Ordering::Equal)
        });
        ranked
    }

    pub fn iter(&self) -> impl Iterator<Item = &CandidateRecord> {
        self.candidates.iter()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct RawPredictionRow {
    player_id: u32,
    full_name: String,
    position: String,
    value: f64,
    #[serde(alias = "predicted_points")]
    model_pred: f64,
}

fn load_predictions_from_reader<R: Read>(rdr: R) -> Result<Vec<CandidateRecord>, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut candidates = Vec::new();
    for result in reader.deserialize::<RawPredictionRow>() {
        let raw = match result {
            Ok(raw) => raw,
            Err(e) => {
                warn!("skipping malformed prediction row: {}", e);
                continue;
            }
        };

        let name = raw.full_name.trim().to_string();
        let Some(position) = Position::from_str_pos(&raw.position) else {
            warn!("skipping prediction for '{}': unknown position '{}'", name, raw.position);
            continue;
        };
        let Some(value) = to_tenths(raw.value) else {
            warn!("skipping prediction for '{}': invalid value {}", name, raw.value);
            continue;
        };
        if !raw.model_pred.is_finite() {
            warn!("skipping prediction for '{}': non-finite model_pred", name);
            continue;
        }

        candidates.push(CandidateRecord {
            player_id: raw.player_id,
            full_name: name,
            position,
            value,
            predicted_points: raw.model_pred,
        });
    }
    Ok(candidates)
}

/// Load a gameweek prediction table from a CSV file.
pub fn load_prediction_table(path: &Path) -> Result<PredictionTable, TableError> {
    let file = open_table(path)?;
    let candidates = load_predictions_from_reader(file).map_err(|e| TableError::Csv {
        path: path.display().to_string(),
        source: e,
    })?;

    if candidates.is_empty() {
        return Err(TableError::Validation(format!(
            "prediction table {} produced zero valid rows",
            path.display()
        )));
    }

    Ok(PredictionTable::new(candidates))
}
