// FPL squad positions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four FPL playing roles. A transfer must always swap like for like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    /// Parse a role code into a Position.
    ///
    /// Accepts the short codes used by the prediction table (`GK`/`GKP`,
    /// `DEF`, `MID`, `FWD`) as well as the FPL API's numeric `element_type`
    /// codes (`1` through `4`). Matching is case-insensitive and ignores
    /// surrounding whitespace.
    pub fn from_str_pos(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "GK" | "GKP" | "1" => Some(Position::Goalkeeper),
            "DEF" | "2" => Some(Position::Defender),
            "MID" | "3" => Some(Position::Midfielder),
            "FWD" | "FW" | "4" => Some(Position::Forward),
            _ => None,
        }
    }

    /// Short display code for this position.
    pub fn display_str(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::Defender => "DEF",
            Position::Midfielder => "MID",
            Position::Forward => "FWD",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_str())
    }
}
