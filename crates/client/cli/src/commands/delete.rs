use anyhow::Result;
use clap::Parser;

use super::open_registry;
use crate::config::CliConfig;

/// Delete a custom character
#[derive(Parser, Debug)]
pub struct Delete {
    /// Character to delete
    pub name: String,
}

impl Delete {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let (factory, mut loaded) = open_registry(config)?;

        let removed = loaded.registry.remove_custom(&self.name)?;
        factory.save_registry(&loaded.registry)?;

        tracing::info!(name = %removed.name, "custom character deleted");
        println!("Deleted {}", removed.name);
        Ok(())
    }
}
