use anyhow::Result;
use clap::Parser;
use duel_core::Passive;

use super::{open_registry, parse_passive};
use crate::config::CliConfig;

/// Change a custom character
#[derive(Parser, Debug)]
pub struct Edit {
    /// Character to change
    pub name: String,

    /// New name
    #[arg(long)]
    pub rename: Option<String>,

    #[arg(long)]
    pub hp: Option<u32>,

    #[arg(long)]
    pub rock: Option<u32>,

    #[arg(long)]
    pub paper: Option<u32>,

    #[arg(long)]
    pub scissors: Option<u32>,

    /// Replaces all passives; repeat for more
    #[arg(long = "passive", value_name = "PASSIVE", value_parser = parse_passive)]
    pub passives: Vec<Passive>,

    /// Remove all passives
    #[arg(long, conflicts_with = "passives")]
    pub clear_passives: bool,
}

impl Edit {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let (factory, mut loaded) = open_registry(config)?;

        let mut definition = loaded
            .registry
            .get(&self.name)
            .cloned()
            .ok_or_else(|| duel_core::DefinitionError::UnknownCharacter(self.name.clone()))?;

        if let Some(rename) = self.rename {
            definition.name = rename;
        }
        if let Some(hp) = self.hp {
            definition.max_hp = hp;
        }
        if let Some(rock) = self.rock {
            definition.damage.rock = rock;
        }
        if let Some(paper) = self.paper {
            definition.damage.paper = paper;
        }
        if let Some(scissors) = self.scissors {
            definition.damage.scissors = scissors;
        }
        if self.clear_passives {
            definition.passives.clear();
        } else if !self.passives.is_empty() {
            definition.passives = self.passives;
        }

        let name = definition.name.trim().to_owned();
        loaded.registry.replace_custom(&self.name, definition)?;
        factory.save_registry(&loaded.registry)?;

        tracing::info!(from = %self.name, to = %name, "custom character updated");
        println!("Updated {}", loaded.registry.instantiate(&name)?.full_description());
        Ok(())
    }
}
