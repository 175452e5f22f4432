//! tictactoe - two-player tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use std::io;
use tictactoe_cli::{Cli, CliConfig, Command, Driver, build_audit, replay};
use tictactoe_core::{GameSession, status_message};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            audit_log,
            trace_audit,
            show_cell_labels,
        } => {
            let config = match config {
                Some(path) => CliConfig::from_file(path)?,
                None => CliConfig::default(),
            };
            let config = config.with_overrides(audit_log, trace_audit, show_cell_labels);
            run_play(config)
        }
        Command::Replay { cells } => run_replay(&cells),
    }
}

/// Run the interactive loop on stdin/stdout
fn run_play(config: CliConfig) -> Result<()> {
    info!(?config, "Starting interactive game");
    let audit = build_audit(&config)?;
    let mut driver = Driver::new(GameSession::with_audit(audit), *config.show_cell_labels());

    let stdin = io::stdin();
    let stdout = io::stdout();
    driver.run(stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Play a fixed sequence and print the result
fn run_replay(cells: &[String]) -> Result<()> {
    let session = replay(cells)?;
    println!("{}", session.current_board());
    println!("{}", status_message(session.state()));
    Ok(())
}
