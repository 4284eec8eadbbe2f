// Roster resolution: join the user's squad ids against the reference table.

use std::collections::HashSet;

use tracing::warn;

use crate::data::players::{PlayerRecord, PlayerTable};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("player {id} is not in the reference player table")]
    UnknownPlayer { id: u32 },
}

/// The user's squad enriched with reference data.
///
/// Entries are in squad order. This is the order the transfer matcher scans
/// outgoing players in, and the tie-break order for captaincy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedRoster {
    entries: Vec<PlayerRecord>,
}

impl ResolvedRoster {
    pub fn entries(&self) -> &[PlayerRecord] {
        &self.entries
    }

    pub fn contains(&self, id: u32) -> bool {
        self.entries.iter().any(|p| p.id == id)
    }

    pub fn ids(&self) -> Vec<u32> {
        self.entries.iter().map(|p| p.id).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Look up every squad id in `table`.
///
/// Any id missing from the table fails the whole resolution with
/// `RosterError::UnknownPlayer`; nothing is silently dropped. A repeated id
/// appears once, at its first position.
pub fn resolve_roster(table: &PlayerTable, squad: &[u32]) -> Result<ResolvedRoster, RosterError> {
    let mut seen = HashSet::with_capacity(squad.len());
    let mut entries = Vec::with_capacity(squad.len());

    for &id in squad {
        if !seen.insert(id) {
            warn!("player {} listed twice in squad, ignoring repeat", id);
            continue;
        }
        let record = table.get(id).ok_or(RosterError::UnknownPlayer { id })?;
        entries.push(record.clone());
    }

    Ok(ResolvedRoster { entries })
}
