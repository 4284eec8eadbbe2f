// Integration tests for the recommendation core.
//
// Loads the fixture player and prediction tables from disk and checks the
// transfer and captaincy recommendations for a full fifteen-player squad.

use std::path::PathBuf;

use xfpl_core::data::players::load_player_table;
use xfpl_core::data::predictions::load_prediction_table;
use xfpl_core::recommend::captain::DEFAULT_MAX_CAPTAINS;
use xfpl_core::recommend::transfers::DEFAULT_MAX_TRANSFERS;
use xfpl_core::{
    recommend_captains, recommend_transfers, resolve_roster, PlayerTable, PredictionTable,
    ResolvedRoster, RosterError,
};

// ===========================================================================
// Test helpers
// ===========================================================================

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn players() -> PlayerTable {
    load_player_table(&fixture("players.csv")).expect("fixture players should load")
}

fn predictions() -> PredictionTable {
    load_prediction_table(&fixture("predictions.csv")).expect("fixture predictions should load")
}

/// Two keepers, five defenders, five midfielders, three forwards.
const SQUAD: [u32; 15] = [2, 3, 13, 14, 11, 15, 16, 24, 25, 26, 21, 23, 34, 33, 32];

fn squad() -> ResolvedRoster {
    resolve_roster(&players(), &SQUAD).expect("squad should resolve")
}

// ===========================================================================
// Loading
// ===========================================================================

#[test]
fn fixtures_load_completely() {
    assert_eq!(players().len(), 22);
    assert_eq!(predictions().len(), 22);
}

#[test]
fn squad_resolves_in_order() {
    let roster = squad();
    assert_eq!(roster.len(), 15);
    assert_eq!(roster.ids(), SQUAD.to_vec());
}

#[test]
fn squad_with_unknown_player_fails() {
    let mut ids = SQUAD.to_vec();
    ids[4] = 999;
    let err = resolve_roster(&players(), &ids).unwrap_err();
    assert_eq!(err, RosterError::UnknownPlayer { id: 999 });
}

// ===========================================================================
// Transfers
// ===========================================================================

#[test]
fn full_squad_transfer_shortlist() {
    let roster = squad();
    let plan = recommend_transfers(&roster, 5, &predictions(), DEFAULT_MAX_TRANSFERS).unwrap();

    let swaps: Vec<(&str, &str)> = plan
        .recommendations
        .iter()
        .map(|r| (r.out_name.as_str(), r.in_name.as_str()))
        .collect();
    assert_eq!(
        swaps,
        vec![
            ("Dominic Solanke", "Chris Wood"),
            ("Gabriel Magalhaes", "Virgil van Dijk"),
            ("Gabriel Magalhaes", "William Saliba"),
        ]
    );

    let diffs = plan.expected_points_diffs();
    assert!((diffs[0] - 3.1).abs() < 1e-9);
    assert!((diffs[1] - 1.4).abs() < 1e-9);
    assert!((diffs[2] - 1.2).abs() < 1e-9);
    assert!(diffs.iter().sum::<f64>() > 0.0);
}

#[test]
fn empty_bank_narrows_shortlist() {
    let roster = squad();
    let plan = recommend_transfers(&roster, 0, &predictions(), DEFAULT_MAX_TRANSFERS).unwrap();
    assert_eq!(plan.len(), 1);
    assert_eq!(plan.recommendations[0].in_name, "Chris Wood");
}

#[test]
fn recommendations_respect_ownership_position_and_budget() {
    let players = players();
    let predictions = predictions();
    let roster = resolve_roster(&players, &SQUAD).unwrap();

    for budget in [0, 5, 20, 60, 200] {
        let plan = recommend_transfers(&roster, budget, &predictions, DEFAULT_MAX_TRANSFERS)
            .unwrap();
        assert!(plan.len() <= DEFAULT_MAX_TRANSFERS);

        let diffs = plan.expected_points_diffs();
        assert!(diffs.windows(2).all(|w| w[0] >= w[1]));

        for rec in &plan.recommendations {
            assert_ne!(rec.in_id, rec.out_id);
            assert!(!roster.contains(rec.in_id));
            assert!(roster.contains(rec.out_id));

            let outgoing = players.get(rec.out_id).unwrap();
            let incoming = predictions.get(rec.in_id).unwrap();
            assert_eq!(rec.position, outgoing.position);
            assert_eq!(rec.position, incoming.position);
            assert!(outgoing.now_cost + budget >= incoming.value);
        }
    }
}

#[test]
fn large_bank_fills_shortlist() {
    let roster = squad();
    let plan = recommend_transfers(&roster, 200, &predictions(), DEFAULT_MAX_TRANSFERS).unwrap();
    assert_eq!(plan.len(), DEFAULT_MAX_TRANSFERS);
    assert_eq!(plan.recommendations[0].in_name, "Mohamed Salah");
}

// ===========================================================================
// Captaincy
// ===========================================================================

#[test]
fn captain_picks_for_full_squad() {
    let picks = recommend_captains(&squad(), DEFAULT_MAX_CAPTAINS);
    let names: Vec<&str> = picks.iter().map(|p| p.full_name.as_str()).collect();
    assert_eq!(names, vec!["Bukayo Saka", "Bryan Mbeumo", "Yoane Wissa"]);
    assert!(picks.windows(2).all(|w| w[0].total_points >= w[1].total_points));
}
