// Reference player table loading.
//
// Reads the processed players CSV (one row per FPL player for the season) into
// an explicitly constructed, read-only `PlayerTable` keyed by player id.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::warn;

use super::position::Position;
use super::{open_table, to_tenths, TableError};

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Season reference data for a single player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: u32,
    pub full_name: String,
    pub position: Position,
    /// Current price in tenths of a million (55 = £5.5m).
    pub now_cost: u32,
    /// Points scored so far this season.
    pub total_points: i32,
}

/// Read-only reference table of every known player.
///
/// Rows keep their file order; lookups go through an id index.
#[derive(Debug, Clone, Default)]
pub struct PlayerTable {
    players: Vec<PlayerRecord>,
    index: HashMap<u32, usize>,
}

impl PlayerTable {
    /// Build a table from records. A repeated id replaces the earlier record
    /// in place, so the later row wins but keeps the first row's position.
    pub fn new(records: Vec<PlayerRecord>) -> Self {
        let mut players: Vec<PlayerRecord> = Vec::with_capacity(records.len());
        let mut index = HashMap::with_capacity(records.len());

        for record in records {
            match index.get(&record.id) {
                Some(&slot) => {
                    warn!("duplicate player id {}, using latest row", record.id);
                    players[slot] = record;
                }
                None => {
                    index.insert(record.id, players.len());
                    players.push(record);
                }
            }
        }

        PlayerTable { players, index }
    }

    pub fn get(&self, id: u32) -> Option<&PlayerRecord> {
        self.index.get(&id).map(|&i| &self.players[i])
    }

    pub fn contains(&self, id: u32) -> bool {
        self.index.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.players.iter()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Raw CSV row (private)
// ---------------------------------------------------------------------------

/// Processed players CSV row. Only the columns the recommender needs are
/// named; the processed table carries many more, which serde ignores.
/// Numeric columns are read as f64 because the processing step may write
/// them with a trailing `.0`.
#[derive(Debug, Deserialize)]
struct RawPlayerRow {
    id: u32,
    full_name: String,
    #[serde(alias = "position")]
    element_type: String,
    now_cost: f64,
    total_points: f64,
}

// ---------------------------------------------------------------------------
// Loaders
// ---------------------------------------------------------------------------

fn load_players_from_reader<R: Read>(rdr: R) -> Result<Vec<PlayerRecord>, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut players = Vec::new();
    for result in reader.deserialize::<RawPlayerRow>() {
        let raw = match result {
            Ok(raw) => raw,
            Err(e) => {
                warn!("skipping malformed player row: {}", e);
                continue;
            }
        };

        let name = raw.full_name.trim().to_string();
        let Some(position) = Position::from_str_pos(&raw.element_type) else {
            warn!("skipping player '{}': unknown position '{}'", name, raw.element_type);
            continue;
        };
        let Some(now_cost) = to_tenths(raw.now_cost) else {
            warn!("skipping player '{}': invalid now_cost {}", name, raw.now_cost);
            continue;
        };
        if !raw.total_points.is_finite() {
            warn!("skipping player '{}': non-finite total_points", name);
            continue;
        }

        players.push(PlayerRecord {
            id: raw.id,
            full_name: name,
            position,
            now_cost,
            total_points: raw.total_points.round() as i32,
        });
    }
    Ok(players)
}

/// Load the reference player table from a CSV file.
pub fn load_player_table(path: &Path) -> Result<PlayerTable, TableError> {
    let file = open_table(path)?;
    let players = load_players_from_reader(file).map_err(|e| TableError::Csv {
        path: path.display().to_string(),
        source: e,
    })?;

    if players.is_empty() {
        return Err(TableError::Validation(format!(
            "player table {} produced zero valid rows",
            path.display()
        )));
    }

    Ok(PlayerTable::new(players))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
