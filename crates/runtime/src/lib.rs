//! Battle orchestration for the rock-paper-scissors duel.
//!
//! This crate drives rounds between two [`duel_core::Character`]s and picks
//! the bot's moves. Consumers build a [`Battle`], hand it one
//! [`MoveProvider`] per side and read back [`RoundReport`]s.
//!
//! Modules are organized by responsibility:
//! - [`battle`] runs rounds, checkpoints and defeat detection
//! - [`api`] exposes the provider trait and error types
//! - [`providers`] hosts the heuristic AI
pub mod api;
pub mod battle;
pub mod providers;

pub use api::{MoveContext, MoveProvider, Result, RuntimeError, ScriptedMoveProvider};
pub use battle::{Battle, BattleEvent, BattleOutcome, RoundReport, Side};
pub use providers::{
    AiMoveProvider, AiProfile, MoveChoice, MoveSelector, choose_move, choose_move_with,
};
pub use providers::ai::score_moves;
