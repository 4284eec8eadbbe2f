// Console text for sessions and reports.

use crate::app::Report;

pub const WELCOME: &str = "Welcome to xFPL: your personal FPL assistant!";
pub const TEAM_ID_PROMPT: &str = "Please enter your FPL team ID: ";
pub const FETCHING: &str = "Fetching your FPL team info...";
pub const INVALID_TEAM: &str = "Invalid team ID.";
pub const FAREWELL: &str = "Thanks for using xFPL!";

/// Format a bank balance held in tenths of a million, e.g. 23 -> "£2.3m".
pub fn format_bank(tenths: u32) -> String {
    format!("£{}.{}m", tenths / 10, tenths % 10)
}

/// Render a report as the lines printed after a successful fetch.
pub fn render_report(report: &Report) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "You have {} in the bank currently.",
        format_bank(report.bank)
    ));

    if report.transfers.is_empty() {
        lines.push("No viable transfers found for your budget.".to_string());
    } else {
        lines.push("Your recommended transfers are: ".to_string());
        for rec in &report.transfers.recommendations {
            lines.push(format!(
                "Transfer {} out for {} (Position: {}, expected gain {:+.2} pts)",
                rec.out_name, rec.in_name, rec.position, rec.expected_points_diff
            ));
        }
    }

    lines.push(String::new());
    lines.push("Your recommended captain picks are: ".to_string());
    for pick in &report.captains {
        lines.push(pick.full_name.clone());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use xfpl_core::{CaptainPick, Position, TransferPlan, TransferRecommendation};

    fn report(transfers: TransferPlan) -> Report {
        Report {
            generated_at: Utc::now(),
            team_id: 1,
            squad: vec![1, 2],
            bank: 3,
            transfers,
            captains: vec![
                CaptainPick {
                    player_id: 1,
                    full_name: "Mohamed Salah".into(),
                    total_points: 120,
                },
                CaptainPick {
                    player_id: 2,
                    full_name: "Cole Palmer".into(),
                    total_points: 98,
                },
            ],
        }
    }

    #[test]
    fn bank_formatting() {
        assert_eq!(format_bank(0), "£0.0m");
        assert_eq!(format_bank(3), "£0.3m");
        assert_eq!(format_bank(123), "£12.3m");
    }

    #[test]
    fn renders_transfers_and_captains() {
        let plan = TransferPlan {
            recommendations: vec![TransferRecommendation {
                out_id: 34,
                out_name: "Dominic Solanke".into(),
                in_id: 31,
                in_name: "Chris Wood".into(),
                position: Position::Forward,
                expected_points_diff: 3.1,
            }],
        };
        let text = render_report(&report(plan));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "You have £0.3m in the bank currently.");
        assert_eq!(
            lines[2],
            "Transfer Dominic Solanke out for Chris Wood (Position: FWD, expected gain +3.10 pts)"
        );
        assert_eq!(lines[lines.len() - 2], "Mohamed Salah");
        assert_eq!(lines[lines.len() - 1], "Cole Palmer");
    }

    #[test]
    fn empty_plan_says_so() {
        let text = render_report(&report(TransferPlan::default()));
        assert!(text.contains("No viable transfers found"));
        assert!(!text.contains("Transfer "));
    }
}
