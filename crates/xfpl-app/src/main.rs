// xFPL entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, the console is for the prompt)
// 2. Load config
// 3. Load the reference player table once
// 4. Read the team id (first CLI argument, or prompt)
// 5. Run one session and print the result

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Context;
use tracing::info;

use xfpl_app::app::{self, SessionOutcome};
use xfpl_app::config;
use xfpl_app::present;
use xfpl_app::provider::FplApiClient;
use xfpl_core::data::players::load_player_table;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    info!("xFPL starting up");

    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: gameweek {}, api {}",
        config.api.gameweek, config.api.base_url
    );

    let players = load_player_table(Path::new(&config.data_paths.players))
        .context("failed to load player table")?;
    info!("Loaded {} players", players.len());

    let client = FplApiClient::from_config(&config.api).context("failed to build HTTP client")?;

    let mut json = false;
    let mut team_id_arg = None;
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else if team_id_arg.is_none() {
            team_id_arg = Some(arg);
        }
    }

    println!("{}", present::WELCOME);
    let team_id_text = match team_id_arg {
        Some(id) => id,
        None => prompt_team_id()?,
    };
    println!();
    println!("{}", present::FETCHING);

    match app::run_session(&client, &players, &config, &team_id_text).await? {
        SessionOutcome::InvalidTeam => {
            println!("{}", present::INVALID_TEAM);
            return Ok(());
        }
        SessionOutcome::Report(report) => {
            println!();
            if json {
                let body = serde_json::to_string_pretty(&report)
                    .context("failed to serialize report")?;
                println!("{body}");
            } else {
                println!("{}", present::render_report(&report));
            }
        }
    }

    println!();
    println!("{}", present::FAREWELL);
    info!("xFPL finished");
    Ok(())
}

fn prompt_team_id() -> anyhow::Result<String> {
    print!("{}", present::TEAM_ID_PROMPT);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read team id")?;
    Ok(line.trim().to_string())
}

/// Initialize tracing to log to a file so log lines don't interleave with
/// the prompt.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("xfpl.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("xfpl=info,xfpl_app=info,xfpl_core=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
