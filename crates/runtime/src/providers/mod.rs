//! Move provider implementations for the bot side.

pub mod ai;

pub use ai::{AiMoveProvider, AiProfile, MoveChoice, MoveSelector, choose_move, choose_move_with};
