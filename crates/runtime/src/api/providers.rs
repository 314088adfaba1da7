//! Abstraction for sourcing each side's move.
//!
//! The battle loop asks a [`MoveProvider`] for every move, so a battle can run
//! with human input, scripted fixtures, or AI policies on either side.

use std::collections::VecDeque;

use duel_core::{Character, Move};

use super::errors::{Result, RuntimeError};
use crate::battle::{BattleEvent, Side};

/// Everything a provider may look at when picking a move.
#[derive(Debug, Clone, Copy)]
pub struct MoveContext<'a> {
    /// Side the move is for.
    pub side: Side,
    /// 1-based round number.
    pub round: u32,
    pub me: &'a Character,
    pub opponent: &'a Character,
    pub my_last_move: Option<Move>,
    pub opponent_last_move: Option<Move>,
    /// Events raised so far this round (turn-start and HP checks).
    pub events: &'a [BattleEvent],
}

/// Trait for providing a move based on the current battle state.
///
/// Different implementations can handle:
/// - Player input (from a terminal)
/// - AI decisions
/// - Scripted/replayed moves
/// - Testing fixtures
pub trait MoveProvider {
    /// Provide the move for `ctx.side` this round.
    fn provide_move(&mut self, ctx: &MoveContext<'_>) -> Result<Move>;
}

impl<P: MoveProvider + ?Sized> MoveProvider for Box<P> {
    fn provide_move(&mut self, ctx: &MoveContext<'_>) -> Result<Move> {
        (**self).provide_move(ctx)
    }
}

/// Plays a fixed sequence of moves, optionally looping.
#[derive(Debug, Clone)]
pub struct ScriptedMoveProvider {
    script: VecDeque<Move>,
    repeat: bool,
}

impl ScriptedMoveProvider {
    /// Plays `moves` once, then fails with [`RuntimeError::ProviderExhausted`].
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            script: moves.into_iter().collect(),
            repeat: false,
        }
    }

    /// Plays `moves` over and over.
    pub fn repeating(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            repeat: true,
            ..Self::new(moves)
        }
    }

    /// Always plays `m`.
    pub fn always(m: Move) -> Self {
        Self::repeating([m])
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl MoveProvider for ScriptedMoveProvider {
    fn provide_move(&mut self, ctx: &MoveContext<'_>) -> Result<Move> {
        let next = self
            .script
            .pop_front()
            .ok_or(RuntimeError::ProviderExhausted { side: ctx.side })?;
        if self.repeat {
            self.script.push_back(next);
        }
        Ok(next)
    }
}
