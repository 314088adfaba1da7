//! Content factory for building the registry and config from a data directory.

use std::path::{Path, PathBuf};

use duel_core::GameConfig;
use tracing::warn;

use crate::loaders::{BuiltinLoader, ConfigLoader, LoadResult, RosterStore, SkippedRecord};
use crate::registry::CharacterRegistry;

/// File name of the custom roster inside the data directory.
pub const ROSTER_FILE: &str = "characters.txt";
/// File name of the optional game configuration.
pub const CONFIG_FILE: &str = "config.toml";

/// Registry plus everything that was left out while building it.
#[derive(Clone, Debug, Default)]
pub struct LoadedRegistry {
    pub registry: CharacterRegistry,
    pub skipped: Vec<SkippedRecord>,
}

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml      (optional)
/// └── characters.txt   (created on first load)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`, or defaults when absent.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Store for `characters.txt`.
    pub fn roster_store(&self) -> RosterStore {
        RosterStore::new(self.data_dir.join(ROSTER_FILE))
    }

    /// Built-ins followed by the custom roster.
    ///
    /// Custom records that fail registry checks (for example a name already
    /// taken by a built-in) are reported alongside the malformed ones.
    pub fn load_registry(&self) -> LoadResult<LoadedRegistry> {
        let mut registry = CharacterRegistry::with_builtins(BuiltinLoader::load()?)?;
        let roster = self.roster_store().load()?;
        let mut skipped = roster.skipped;

        for record in roster.records {
            let content = crate::loaders::roster::encode_record(&record.definition);
            if let Err(e) = registry.add_custom(record.definition) {
                warn!(line = record.line, reason = %e, "skipping roster record");
                skipped.push(SkippedRecord {
                    line: record.line,
                    content,
                    reason: e.to_string(),
                });
            }
        }

        skipped.sort_by_key(|s| s.line);
        Ok(LoadedRegistry { registry, skipped })
    }

    /// Persists the custom entries of `registry` to `characters.txt`.
    pub fn save_registry(&self, registry: &CharacterRegistry) -> LoadResult<()> {
        self.roster_store().save(registry.customs())
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
