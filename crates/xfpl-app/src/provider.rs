// Team-state provider: fetches a manager's squad and bank from the FPL API.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::ApiConfig;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A manager's squad for one gameweek.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamState {
    /// Player ids in pick order.
    pub squad: Vec<u32>,
    /// Money in the bank, in tenths of a million.
    pub bank: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("invalid team id '{0}'")]
    InvalidTeamId(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("FPL API returned HTTP {status} for team {team_id}")]
    Status { team_id: u64, status: u16 },

    #[error("malformed picks response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Source of team state. The FPL API in production, a stub in tests.
#[async_trait]
pub trait TeamProvider: Send + Sync {
    async fn fetch_team(&self, team_id: u64) -> Result<TeamState, ProviderError>;
}

/// Parse user-entered team id text into a positive integer.
pub fn parse_team_id(text: &str) -> Result<u64, ProviderError> {
    match text.trim().parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ProviderError::InvalidTeamId(text.trim().to_string())),
    }
}

// ---------------------------------------------------------------------------
// Picks payload
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct PicksResponse {
    picks: Vec<Pick>,
    entry_history: EntryHistory,
}

#[derive(Debug, Deserialize)]
struct Pick {
    element: u32,
}

#[derive(Debug, Deserialize)]
struct EntryHistory {
    bank: u32,
}

/// Decode a `/entry/{id}/event/{gw}/picks/` response body.
fn parse_picks(body: &str) -> Result<TeamState, ProviderError> {
    let response: PicksResponse = serde_json::from_str(body)?;
    Ok(TeamState {
        squad: response.picks.into_iter().map(|p| p.element).collect(),
        bank: response.entry_history.bank,
    })
}

// ---------------------------------------------------------------------------
// FplApiClient
// ---------------------------------------------------------------------------

/// HTTP client for the public Fantasy Premier League API.
pub struct FplApiClient {
    http: reqwest::Client,
    base_url: String,
    gameweek: u32,
}

impl FplApiClient {
    pub fn new(http: reqwest::Client, base_url: &str, gameweek: u32) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            gameweek,
        }
    }

    /// Build a client with the configured request timeout.
    pub fn from_config(api: &ApiConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()?;
        Ok(Self::new(http, &api.base_url, api.gameweek))
    }

    pub fn picks_url(&self, team_id: u64) -> String {
        format!(
            "{}/entry/{}/event/{}/picks/",
            self.base_url, team_id, self.gameweek
        )
    }
}

#[async_trait]
impl TeamProvider for FplApiClient {
    async fn fetch_team(&self, team_id: u64) -> Result<TeamState, ProviderError> {
        let url = self.picks_url(team_id);
        debug!(%url, "fetching team picks");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                team_id,
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        parse_picks(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_team_id_accepts_positive_integers() {
        assert_eq!(parse_team_id("1234567").unwrap(), 1234567);
        assert_eq!(parse_team_id("  42 \n").unwrap(), 42);
    }

    #[test]
    fn parse_team_id_rejects_garbage() {
        for bad in ["", "abc", "-5", "0", "12.5"] {
            assert!(
                matches!(parse_team_id(bad), Err(ProviderError::InvalidTeamId(_))),
                "expected '{bad}' to be rejected"
            );
        }
    }

    #[test]
    fn picks_response_parsed() {
        let body = r#"{
            "active_chip": null,
            "entry_history": {"event": 8, "points": 61, "bank": 3, "value": 1002},
            "picks": [
                {"element": 201, "position": 1, "multiplier": 1, "is_captain": false},
                {"element": 350, "position": 2, "multiplier": 1, "is_captain": false},
                {"element": 351, "position": 3, "multiplier": 2, "is_captain": true}
            ]
        }"#;

        let team = parse_picks(body).unwrap();
        assert_eq!(team.squad, vec![201, 350, 351]);
        assert_eq!(team.bank, 3);
    }

    #[test]
    fn picks_response_missing_fields_is_malformed() {
        let body = r#"{"detail": "Not found."}"#;
        assert!(matches!(parse_picks(body), Err(ProviderError::Malformed(_))));
    }

    #[test]
    fn picks_url_strips_trailing_slash() {
        let client = FplApiClient::new(
            reqwest::Client::new(),
            "https://fantasy.premierleague.com/api/",
            8,
        );
        assert_eq!(
            client.picks_url(99),
            "https://fantasy.premierleague.com/api/entry/99/event/8/picks/"
        );
    }
}
