use anyhow::Result;
use clap::Parser;
use console::style;
use duel_core::CharacterKind;

use super::open_registry;
use crate::config::CliConfig;

/// List every character
#[derive(Parser, Debug)]
pub struct Roster {
    /// One line per character, without passives
    #[arg(long)]
    pub brief: bool,
}

impl Roster {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let (_, loaded) = open_registry(config)?;

        for (index, definition) in loaded.registry.definitions().iter().enumerate() {
            let character = definition.instantiate()?;
            let description = if self.brief {
                character.short_description()
            } else {
                character.full_description()
            };
            let tag = match definition.kind {
                CharacterKind::Builtin => String::new(),
                CharacterKind::Custom => format!(" {}", style("[custom]").cyan()),
            };
            println!("{}. {}{}", index + 1, description, tag);
        }

        Ok(())
    }
}
