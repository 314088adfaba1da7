use anyhow::Result;
use clap::Parser;
use duel_core::{CharacterDefinition, CharacterKind, MoveDamage, Passive};

use super::{open_registry, parse_passive};
use crate::config::CliConfig;

/// Create a custom character
#[derive(Parser, Debug)]
pub struct Create {
    /// Name of the new character
    pub name: String,

    /// Max HP (1..=100)
    #[arg(long)]
    pub hp: u32,

    /// Rock damage (0..=10)
    #[arg(long)]
    pub rock: u32,

    /// Paper damage (0..=10)
    #[arg(long)]
    pub paper: u32,

    /// Scissors damage (0..=10)
    #[arg(long)]
    pub scissors: u32,

    /// Passive as TRIGGER,EFFECT,VALUE[,THRESHOLD]; repeat for more (see `duel passives`)
    #[arg(long = "passive", value_name = "PASSIVE", value_parser = parse_passive)]
    pub passives: Vec<Passive>,
}

impl Create {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let (factory, mut loaded) = open_registry(config)?;

        let definition = CharacterDefinition::new(
            self.name,
            CharacterKind::Custom,
            self.hp,
            MoveDamage::new(self.rock, self.paper, self.scissors),
            self.passives,
        );
        let name = definition.name.trim().to_owned();
        loaded.registry.add_custom(definition)?;
        factory.save_registry(&loaded.registry)?;

        tracing::info!(name = %name, "custom character created");
        println!("Created {}", loaded.registry.instantiate(&name)?.full_description());
        Ok(())
    }
}
