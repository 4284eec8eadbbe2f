// Session orchestration.
//
// One session takes a team id, fetches the team's squad and bank, and runs
// the transfer matcher and captain selector over it. Provider failures stop
// here and become `SessionOutcome::InvalidTeam`; everything else propagates.

use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use xfpl_core::data::predictions::load_prediction_table;
use xfpl_core::{
    recommend_captains, recommend_transfers, resolve_roster, CaptainPick, PlayerTable,
    PredictionTable, TransferPlan,
};

use crate::config::{Config, RecommendationConfig};
use crate::provider::{parse_team_id, TeamProvider, TeamState};

/// Everything recommended for one team.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub team_id: u64,
    pub squad: Vec<u32>,
    pub bank: u32,
    pub transfers: TransferPlan,
    pub captains: Vec<CaptainPick>,
}

#[derive(Debug, Clone)]
pub enum SessionOutcome {
    /// The team could not be fetched (bad id, network or payload failure).
    InvalidTeam,
    Report(Report),
}

/// Build recommendations for an already-fetched team.
pub fn build_report(
    team_id: u64,
    team: TeamState,
    players: &PlayerTable,
    predictions: &PredictionTable,
    limits: &RecommendationConfig,
) -> anyhow::Result<Report> {
    let roster = resolve_roster(players, &team.squad)
        .with_context(|| format!("failed to resolve squad for team {team_id}"))?;

    let transfers = recommend_transfers(&roster, team.bank, predictions, limits.max_transfers)
        .context("failed to recommend transfers")?;
    let captains = recommend_captains(&roster, limits.max_captains);

    Ok(Report {
        generated_at: Utc::now(),
        team_id,
        squad: team.squad,
        bank: team.bank,
        transfers,
        captains,
    })
}

/// Run one recommendation session for the team id the user typed.
///
/// Predictions are reloaded from `config.data_paths.predictions` on every
/// call so a fresh model export is picked up without a restart.
pub async fn run_session(
    provider: &dyn TeamProvider,
    players: &PlayerTable,
    config: &Config,
    team_id_text: &str,
) -> anyhow::Result<SessionOutcome> {
    let team_id = match parse_team_id(team_id_text) {
        Ok(id) => id,
        Err(e) => {
            warn!("rejecting team id: {}", e);
            return Ok(SessionOutcome::InvalidTeam);
        }
    };

    let team = match provider.fetch_team(team_id).await {
        Ok(team) => team,
        Err(e) => {
            warn!("failed to fetch team {}: {}", team_id, e);
            return Ok(SessionOutcome::InvalidTeam);
        }
    };
    info!(
        "fetched team {}: {} players, bank {}",
        team_id,
        team.squad.len(),
        team.bank
    );

    let predictions_path = Path::new(&config.data_paths.predictions);
    let predictions = load_prediction_table(predictions_path).with_context(|| {
        format!(
            "failed to load predictions from {}",
            predictions_path.display()
        )
    })?;
    info!("loaded {} predictions", predictions.len());

    let report = build_report(team_id, team, players, &predictions, &config.recommendations)?;
    Ok(SessionOutcome::Report(report))
}
