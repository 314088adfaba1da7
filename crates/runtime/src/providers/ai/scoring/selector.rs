//! Move selection from a scored candidate list.
//!
//! - **Easy**: occasional uniform pick, otherwise the best candidate with a
//!   chance of settling for a close second.
//! - **Hard**: softmax sampling over the scores.
//!
//! Both rank candidates by shuffling first and then stable-sorting by score,
//! so equal scores are broken at random. Selection is stateless; all
//! randomness comes from the caller's RNG.

use duel_core::{Difficulty, Move};
use rand::Rng;
use rand::seq::SliceRandom;

use super::MoveChoice;
use crate::providers::ai::AiProfile;

/// Stateless move selector.
pub struct MoveSelector;

impl MoveSelector {
    /// Picks a move using the pipeline named by `profile.difficulty`.
    pub fn select<R: Rng>(choices: &[MoveChoice], profile: &AiProfile, rng: &mut R) -> Move {
        match profile.difficulty {
            Difficulty::Easy => Self::select_easy(choices, profile, rng),
            Difficulty::Hard => Self::select_softmax(choices, profile.temperature, rng),
        }
    }

    /// Easy selection.
    ///
    /// With probability `random_move_chance` returns a uniform move. Otherwise
    /// takes the best candidate, or with probability `second_best_chance` the
    /// runner-up when it trails by less than `second_best_closeness`.
    pub fn select_easy<R: Rng>(choices: &[MoveChoice], profile: &AiProfile, rng: &mut R) -> Move {
        if choices.is_empty() || chance(rng, profile.random_move_chance) {
            return Self::random_move(rng);
        }

        let ranked = ranked(choices, rng);
        let best = ranked[0];
        if let Some(second) = ranked.get(1) {
            if chance(rng, profile.second_best_chance)
                && best.score - second.score < profile.second_best_closeness
            {
                return second.candidate;
            }
        }
        best.candidate
    }

    /// Softmax sampling with weights `exp((score - max) / temperature)`.
    ///
    /// Falls back to the best candidate for temperatures at or below
    /// [`AiProfile::GREEDY_TEMPERATURE`] and for degenerate weight sums; an
    /// empty list yields a uniform move.
    pub fn select_softmax<R: Rng>(choices: &[MoveChoice], temperature: f64, rng: &mut R) -> Move {
        if choices.is_empty() {
            return Self::random_move(rng);
        }

        let ranked = ranked(choices, rng);
        let best = ranked[0];
        if temperature.is_nan() || temperature <= AiProfile::GREEDY_TEMPERATURE {
            return best.candidate;
        }

        let weights: Vec<f64> = ranked
            .iter()
            .map(|c| ((c.score - best.score) / temperature).exp())
            .collect();
        let total: f64 = weights.iter().sum();
        if !total.is_finite() || total <= 0.0 {
            tracing::debug!(total, "degenerate softmax weights, using best move");
            return best.candidate;
        }

        let mut pick = rng.gen_range(0.0..total);
        for (choice, weight) in ranked.iter().zip(&weights) {
            if pick < *weight {
                return choice.candidate;
            }
            pick -= weight;
        }
        best.candidate
    }

    /// Uniform move.
    pub fn random_move<R: Rng>(rng: &mut R) -> Move {
        Move::ALL[rng.gen_range(0..Move::ALL.len())]
    }
}

/// Shuffled, then stable-sorted by descending score.
fn ranked<R: Rng>(choices: &[MoveChoice], rng: &mut R) -> Vec<MoveChoice> {
    let mut ranked = choices.to_vec();
    ranked.shuffle(rng);
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

fn chance<R: Rng>(rng: &mut R, probability: f64) -> bool {
    rng.gen_range(0.0..1.0) < probability
}
