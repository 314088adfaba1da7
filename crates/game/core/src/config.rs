/// Opponent AI strength.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Difficulty {
    Easy,
    #[default]
    Hard,
}

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Difficulty used when the caller does not pick one.
    pub difficulty: Difficulty,
    /// Rounds after which an undecided battle is called off.
    pub max_rounds: u32,
}

impl GameConfig {
    // ===== compile-time limits =====
    /// Capacity of a character's passive list.
    pub const MAX_PASSIVES: usize = 8;
    /// Passives a user-made character may carry.
    pub const MAX_CUSTOM_PASSIVES: usize = 3;
    pub const MIN_MAX_HP: u32 = 1;
    pub const MAX_MAX_HP: u32 = 100;
    pub const MAX_MOVE_DAMAGE: u32 = 10;
    pub const MIN_FLAT_VALUE: u32 = 1;
    pub const MAX_FLAT_VALUE: u32 = 50;
    pub const MIN_PERCENT_VALUE: u32 = 1;
    pub const MAX_PERCENT_VALUE: u32 = 100;
    pub const MIN_HP_THRESHOLD: u32 = 1;
    pub const MAX_HP_THRESHOLD: u32 = 99;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_ROUNDS: u32 = 200;

    pub fn new() -> Self {
        Self {
            difficulty: Difficulty::default(),
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
        }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
