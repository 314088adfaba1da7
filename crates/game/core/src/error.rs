//! Error types for duel-core.
//!
//! The battle rules themselves are total and never fail; errors only arise
//! when building characters from outside data (decoded passives, user-made
//! definitions).

/// Failure to decode a passive from its `TRIGGER,EFFECT,VALUE,THRESHOLD` form.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PassiveCodecError {
    #[error("expected 2 to 4 comma-separated fields, found {0}")]
    FieldCount(usize),

    #[error("field `{0}` is not a non-negative integer")]
    NotANumber(String),

    #[error("unknown passive trigger id {0}")]
    UnknownTrigger(u32),

    #[error("unknown passive effect id {0}")]
    UnknownEffect(u32),
}

/// A character definition that violates the roster rules.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DefinitionError {
    #[error("character name must not be empty")]
    EmptyName,

    #[error("character name `{0}` contains a reserved separator")]
    ReservedCharacter(String),

    #[error("a character named `{0}` already exists")]
    DuplicateName(String),

    #[error("no character named `{0}`")]
    UnknownCharacter(String),

    #[error("`{0}` is a built-in character and cannot be changed")]
    NotCustom(String),

    #[error("max HP {value} is outside {min}..={max}")]
    MaxHp { value: u32, min: u32, max: u32 },

    #[error("{what} damage {value} exceeds {max}")]
    MoveDamage {
        what: &'static str,
        value: u32,
        max: u32,
    },

    #[error("{count} passives exceed the limit of {max}")]
    TooManyPassives { count: usize, max: usize },

    #[error("passive #{index} has no trigger or no effect")]
    InertPassive { index: usize },

    #[error("passive #{index} value {value} is outside {min}..={max}")]
    PassiveValue {
        index: usize,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("passive #{index} threshold {value} is outside {min}..={max}")]
    PassiveThreshold {
        index: usize,
        value: u32,
        min: u32,
        max: u32,
    },
}
