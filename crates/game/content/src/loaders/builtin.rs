//! Built-in roster loader.

use duel_core::{CharacterDefinition, CharacterKind};

use crate::loaders::LoadResult;

/// RON table of the built-in fighters, compiled into the crate.
pub const BUILTIN_ROSTER: &str = include_str!("../../data/roster.ron");

/// Loader for the built-in character table.
pub struct BuiltinLoader;

impl BuiltinLoader {
    /// Load the compiled-in roster.
    pub fn load() -> LoadResult<Vec<CharacterDefinition>> {
        Self::parse(BUILTIN_ROSTER)
    }

    /// Parse a roster table in RON format: `Vec<CharacterDefinition>`.
    ///
    /// Every entry is marked [`CharacterKind::Builtin`] regardless of what the
    /// file says.
    pub fn parse(content: &str) -> LoadResult<Vec<CharacterDefinition>> {
        let mut definitions: Vec<CharacterDefinition> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse built-in roster RON: {}", e))?;

        for definition in &mut definitions {
            definition.kind = CharacterKind::Builtin;
        }

        Ok(definitions)
    }
}
