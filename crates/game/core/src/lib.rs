//! Deterministic duel rules shared by the runtime and clients.
//!
//! `duel-core` defines the canonical rules of a Rock-Paper-Scissors duel:
//! moves and who beats whom, characters with per-move damage, and the passive
//! ability system that reacts to round checkpoints. It holds no I/O and no
//! randomness; the AI and the battle loop live in `duel-runtime`, data files in
//! `duel-content`.
pub mod combat;
pub mod config;
pub mod error;
pub mod passive;
pub mod state;

pub use combat::{Move, RoundOutcome, estimated_damage, realized_damage, winner};
pub use config::{Difficulty, GameConfig};
pub use error::{DefinitionError, PassiveCodecError};
pub use passive::{
    EffectOutcome, Passive, PassiveActivation, PassiveEffect, PassiveTrigger, TriggerEvent,
    apply_trigger, percent_of,
};
pub use state::{Character, CharacterDefinition, CharacterKind, MoveDamage, RESERVED_NAME_CHARS};
