//! AI-backed move provider.

use duel_core::Move;
use rand::Rng;
use rand::rngs::ThreadRng;

use super::{AiProfile, choose_move_with};
use crate::api::{MoveContext, MoveProvider, Result};

/// Move provider driven by the heuristic AI.
///
/// Uses the thread-local RNG unless constructed with
/// [`AiMoveProvider::with_rng`] (seeded RNGs make tests reproducible).
#[derive(Debug, Clone)]
pub struct AiMoveProvider<R = ThreadRng> {
    profile: AiProfile,
    rng: R,
}

impl AiMoveProvider<ThreadRng> {
    /// Creates a provider with the default profile for `difficulty`.
    pub fn new(difficulty: duel_core::Difficulty) -> Self {
        Self::with_rng(AiProfile::for_difficulty(difficulty), rand::thread_rng())
    }
}

impl<R: Rng> AiMoveProvider<R> {
    pub fn with_rng(profile: AiProfile, rng: R) -> Self {
        Self { profile, rng }
    }

    pub fn profile(&self) -> &AiProfile {
        &self.profile
    }
}

impl<R: Rng> MoveProvider for AiMoveProvider<R> {
    fn provide_move(&mut self, ctx: &MoveContext<'_>) -> Result<Move> {
        Ok(choose_move_with(
            &self.profile,
            ctx.me,
            ctx.opponent,
            ctx.my_last_move,
            ctx.opponent_last_move,
            &mut self.rng,
        ))
    }
}
