//! Public runtime API surface.
//!
//! Errors and the move provider abstraction shared by the battle loop, the AI
//! and client front ends.

pub mod errors;
pub mod providers;

pub use errors::{Result, RuntimeError};
pub use providers::{MoveContext, MoveProvider, ScriptedMoveProvider};
