//! Subcommands of the `duel` binary.

mod battle;
mod create;
mod delete;
mod edit;
mod passives;
mod roster;

pub use battle::Battle;
pub use create::Create;
pub use delete::Delete;
pub use edit::Edit;
pub use passives::Passives;
pub use roster::Roster;

use anyhow::{Context, Result};
use console::style;
use duel_content::{ContentFactory, LoadedRegistry};
use duel_core::Passive;

use crate::config::CliConfig;

/// Loads the registry from the configured data directory, reporting skipped
/// roster records on stderr.
fn open_registry(config: &CliConfig) -> Result<(ContentFactory, LoadedRegistry)> {
    let factory = ContentFactory::new(config.data_dir());
    let loaded = factory.load_registry().with_context(|| {
        format!(
            "Failed to load characters from {}",
            factory.data_dir().display()
        )
    })?;

    for skipped in &loaded.skipped {
        eprintln!(
            "{} Skipped roster line {}: {} ({})",
            style("!").yellow().bold(),
            skipped.line,
            skipped.content,
            skipped.reason
        );
    }

    Ok((factory, loaded))
}

/// Clap parser for `TRIGGER,EFFECT[,VALUE[,THRESHOLD]]`.
fn parse_passive(text: &str) -> Result<Passive, String> {
    text.parse().map_err(|e| format!("{e}"))
}
