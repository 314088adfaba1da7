//! Content loaders for reading game data from files.
//!
//! - [`builtin`]: the built-in roster compiled in from `data/roster.ron`
//! - [`roster`]: custom characters persisted in the semicolon text format
//! - [`config`]: `GameConfig` from TOML
//! - [`factory`]: everything above rooted at one data directory

pub mod builtin;
pub mod config;
pub mod factory;
pub mod roster;

pub use builtin::BuiltinLoader;
pub use config::ConfigLoader;
pub use factory::{ContentFactory, LoadedRegistry};
pub use roster::{RosterLoad, RosterRecord, RosterStore, SkippedRecord};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
