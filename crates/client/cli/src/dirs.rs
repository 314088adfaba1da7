//! Platform-specific directory utilities

use std::path::PathBuf;

/// Get the platform-specific data directory for the duel game
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/duel`
/// - Linux: `~/.local/share/duel` (or `$XDG_DATA_HOME/duel`)
/// - Windows: `%APPDATA%\duel`
/// - Fallback: `./duel_data`
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "duel")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./duel_data"))
}
