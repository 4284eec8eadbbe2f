// Recommendation engine: roster resolution, transfer matching, captaincy.

pub mod captain;
pub mod roster;
pub mod transfers;
