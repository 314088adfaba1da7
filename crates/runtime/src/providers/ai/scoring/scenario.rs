//! Per-scenario evaluation: one bot move against one player response.

use duel_core::{Character, Move, PassiveTrigger, RoundOutcome, estimated_damage, winner};

use super::passives::matching_payoff;
use crate::providers::ai::AiProfile;

/// Mean of [`evaluate_scenario`] over the three possible player responses.
pub fn average_scenario_score(
    bot_move: Move,
    bot: &Character,
    player: &Character,
    profile: &AiProfile,
) -> f64 {
    let total: f64 = Move::ALL
        .iter()
        .map(|&response| evaluate_scenario(bot_move, response, bot, player, profile))
        .sum();
    total / Move::ALL.len() as f64
}

/// Desirability for the bot of the pairing `(bot_move, player_move)`.
pub fn evaluate_scenario(
    bot_move: Move,
    player_move: Move,
    bot: &Character,
    player: &Character,
    profile: &AiProfile,
) -> f64 {
    let mut score = 0.0;

    match winner(bot_move, player_move) {
        RoundOutcome::AWins => {
            let damage = estimated_damage(bot, bot_move);
            score += f64::from(damage) * profile.damage_dealt_per_hp;
            if damage >= player.current_hp() {
                score += profile.lethal_bonus;
            }

            score += matching_payoff(bot, player, true, profile, |t| {
                t == PassiveTrigger::OnWinWith(bot_move) || t == PassiveTrigger::AfterAnyAttack
            });
            score += matching_payoff(player, bot, false, profile, |t| {
                t == PassiveTrigger::OnLoseTo(player_move) || t == PassiveTrigger::AfterTakingHit
            });
        }
        RoundOutcome::BWins => {
            let damage = estimated_damage(player, player_move);
            score -= f64::from(damage) * profile.damage_taken_per_hp;
            if damage >= bot.current_hp() {
                score -= profile.death_penalty;
            }

            score += matching_payoff(bot, player, true, profile, |t| {
                t == PassiveTrigger::OnLoseTo(bot_move) || t == PassiveTrigger::AfterTakingHit
            });
            score += matching_payoff(player, bot, false, profile, |t| {
                t == PassiveTrigger::OnWinWith(player_move) || t == PassiveTrigger::AfterAnyAttack
            });
        }
        RoundOutcome::Tie => {
            score += profile.tie_outcome_base;
            score += matching_payoff(bot, player, true, profile, |t| t == PassiveTrigger::OnTie);
            score += matching_payoff(player, bot, false, profile, |t| t == PassiveTrigger::OnTie);
        }
    }

    score
}
