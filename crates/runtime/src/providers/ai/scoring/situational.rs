//! HP-ratio risk modifiers and move-history adjustments (hard difficulty).

use duel_core::{Character, Move, PassiveTrigger, estimated_damage};

use crate::providers::ai::AiProfile;

/// Adjusts an averaged scenario score for the current situation.
///
/// Applied in order: desperation, aggression, conservation (multiplies
/// everything accumulated so far), repeat penalty, counter bonus, base damage
/// bias.
pub fn apply_modifiers(
    score: f64,
    bot_move: Move,
    bot: &Character,
    player: &Character,
    last_bot_move: Option<Move>,
    last_player_move: Option<Move>,
    profile: &AiProfile,
) -> f64 {
    let mut score = score;
    let bot_ratio = bot.hp_ratio();
    let player_ratio = player.hp_ratio();
    let damage = estimated_damage(bot, bot_move);

    let desperate = bot_ratio < profile.desperation_threshold && !bot.is_defeated();
    if desperate && has_reachable_heal(bot, bot_move) {
        score += profile.desperation_bonus;
    }

    let player_vulnerable = player_ratio < profile.vulnerable_threshold;
    if player_vulnerable && damage >= player.current_hp() {
        score += profile.aggression_bonus;
    }

    if bot_ratio - player_ratio >= profile.lead_margin && !player_vulnerable {
        score *= profile.conservation_factor;
    }

    if last_bot_move == Some(bot_move) {
        score -= profile.repeat_penalty;
    }

    if last_player_move.map(Move::beaten_by) == Some(bot_move) {
        score += profile.counter_bonus;
    }

    score + f64::from(damage) * profile.move_base_damage_bias
}

/// True if `bot` owns a heal that this move (or a tie) can set off.
fn has_reachable_heal(bot: &Character, bot_move: Move) -> bool {
    bot.passives().iter().any(|p| {
        p.effect().is_heal()
            && match p.trigger() {
                PassiveTrigger::OnWinWith(m) | PassiveTrigger::OnLoseTo(m) => m == bot_move,
                PassiveTrigger::AfterAnyAttack
                | PassiveTrigger::AfterTakingHit
                | PassiveTrigger::OnTie => true,
                _ => false,
            }
    })
}
