//! Character state: definitions (immutable data) and live fighters.

pub mod character;
pub mod definition;

pub use character::{Character, CharacterKind, MoveDamage, Passives};
pub use definition::{CharacterDefinition, RESERVED_NAME_CHARS};
