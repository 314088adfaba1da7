//! CLI configuration from environment variables.

use std::env;
use std::path::PathBuf;

use duel_core::{Difficulty, GameConfig};

use crate::dirs;

/// Settings that sit on top of `config.toml`.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub data_dir: Option<PathBuf>,
    pub difficulty: Option<Difficulty>,
    pub max_rounds: Option<u32>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `DUEL_DATA_DIR` - Directory for the roster and config (default: platform-specific)
    /// - `DUEL_DIFFICULTY` - `easy` or `hard`
    /// - `DUEL_MAX_ROUNDS` - Round cap for a battle
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            data_dir: lookup("DUEL_DATA_DIR")
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
            difficulty: read_var(&lookup, "DUEL_DIFFICULTY"),
            max_rounds: read_var::<u32>(&lookup, "DUEL_MAX_ROUNDS").map(|n| n.max(1)),
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(dirs::data_dir)
    }

    /// Applies the environment overrides to the file configuration.
    pub fn apply(&self, mut game: GameConfig) -> GameConfig {
        if let Some(difficulty) = self.difficulty {
            game.difficulty = difficulty;
        }
        if let Some(max_rounds) = self.max_rounds {
            game.max_rounds = max_rounds;
        }
        game
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_owned())
        }
    }

    #[test]
    fn reads_overrides() {
        let config = CliConfig::from_lookup(lookup(&[
            ("DUEL_DATA_DIR", "/tmp/duel"),
            ("DUEL_DIFFICULTY", "Easy"),
            ("DUEL_MAX_ROUNDS", "0"),
        ]));
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/duel")));
        assert_eq!(config.difficulty, Some(Difficulty::Easy));
        assert_eq!(config.max_rounds, Some(1));
    }

    #[test]
    fn ignores_garbage() {
        let config = CliConfig::from_lookup(lookup(&[
            ("DUEL_DATA_DIR", ""),
            ("DUEL_DIFFICULTY", "nightmare"),
            ("DUEL_MAX_ROUNDS", "many"),
        ]));
        assert_eq!(config.data_dir, None);
        assert_eq!(config.difficulty, None);
        assert_eq!(config.max_rounds, None);
    }

    #[test]
    fn overrides_win_over_file() {
        let config = CliConfig {
            difficulty: Some(Difficulty::Easy),
            ..CliConfig::default()
        };
        let game = config.apply(GameConfig::default().with_max_rounds(30));
        assert_eq!(game.difficulty, Difficulty::Easy);
        assert_eq!(game.max_rounds, 30);
    }
}
