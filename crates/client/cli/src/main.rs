//! `duel` command-line front end.
//!
//! Lists the roster, manages custom characters and runs battles against the
//! AI. Run with: `duel <command>`

mod commands;
mod config;
mod dirs;
mod input;
mod logging;
mod narration;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{Battle, Create, Delete, Edit, Passives, Roster};
use config::CliConfig;

/// Rock-paper-scissors duels with passive abilities
#[derive(Parser)]
#[command(name = "duel")]
#[command(about = "Rock-paper-scissors duels with passive abilities", long_about = None)]
#[command(version)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory holding characters.txt and config.toml
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every character
    Roster(Roster),

    /// List passive trigger and effect ids
    Passives(Passives),

    /// Create a custom character
    Create(Create),

    /// Change a custom character
    Edit(Edit),

    /// Delete a custom character
    Delete(Delete),

    /// Fight a battle against the AI
    Battle(Battle),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for DUEL_* variables)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);

    let mut config = CliConfig::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Command::Roster(cmd) => cmd.execute(&config),
        Command::Passives(cmd) => cmd.execute(),
        Command::Create(cmd) => cmd.execute(&config),
        Command::Edit(cmd) => cmd.execute(&config),
        Command::Delete(cmd) => cmd.execute(&config),
        Command::Battle(cmd) => cmd.execute(&config),
    }
}
