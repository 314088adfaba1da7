//! Heuristic move-selection AI.
//!
//! Picking a move takes two steps:
//!
//! 1. **Scoring** ([`scoring`]): each of the three moves gets a desirability
//!    score. Hard mode simulates every player response and folds in damage,
//!    lethality, passive payoffs, HP-ratio risk modifiers and move history.
//!    Easy mode uses a cheaper single pass.
//! 2. **Selection** ([`MoveSelector`]): softmax sampling (hard) or
//!    best-with-noise (easy) turns the scores into one move.
//!
//! # Core Components
//!
//! - [`choose_move`]: one-shot entry point for a difficulty
//! - [`AiProfile`]: every tunable constant, per difficulty
//! - [`AiMoveProvider`]: the AI behind the [`crate::MoveProvider`] trait

pub mod profile;
pub mod provider;
pub mod scoring;

use duel_core::{Character, Difficulty, Move};
use rand::Rng;

pub use profile::AiProfile;
pub use provider::AiMoveProvider;
pub use scoring::{MoveChoice, MoveSelector, score_moves};

/// Chooses the bot's move for this round at the given difficulty.
pub fn choose_move<R: Rng>(
    bot: &Character,
    player: &Character,
    difficulty: Difficulty,
    last_bot_move: Option<Move>,
    last_player_move: Option<Move>,
    rng: &mut R,
) -> Move {
    let profile = AiProfile::for_difficulty(difficulty);
    choose_move_with(&profile, bot, player, last_bot_move, last_player_move, rng)
}

/// Like [`choose_move`], with an explicit (possibly tuned) profile.
pub fn choose_move_with<R: Rng>(
    profile: &AiProfile,
    bot: &Character,
    player: &Character,
    last_bot_move: Option<Move>,
    last_player_move: Option<Move>,
    rng: &mut R,
) -> Move {
    tracing::debug!("AI: scoring moves for {} vs {}", bot.name(), player.name());

    let choices = score_moves(bot, player, last_bot_move, last_player_move, profile);
    let chosen = MoveSelector::select(&choices, profile, rng);

    tracing::debug!("AI: {} chose {}", bot.name(), chosen);
    chosen
}
