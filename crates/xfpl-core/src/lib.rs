// Library root for the xFPL recommendation core: reference tables, roster
// resolution, transfer matching and captain selection. No network or console
// I/O lives here.

pub mod data;
pub mod recommend;

pub use data::players::{PlayerRecord, PlayerTable};
pub use data::position::Position;
pub use data::predictions::{CandidateRecord, PredictionTable};
pub use data::TableError;
pub use recommend::captain::{recommend_captains, CaptainPick};
pub use recommend::roster::{resolve_roster, ResolvedRoster, RosterError};
pub use recommend::transfers::{
    recommend_transfers, TransferError, TransferPlan, TransferRecommendation,
};
