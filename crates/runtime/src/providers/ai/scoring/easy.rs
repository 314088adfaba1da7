//! Single-pass scoring used by the easy opponent.

use duel_core::{Character, Move, PassiveTrigger, estimated_damage};

use crate::providers::ai::AiProfile;

/// Scores `bot_move` without simulating player responses.
pub fn score_easy(
    bot_move: Move,
    bot: &Character,
    player: &Character,
    last_bot_move: Option<Move>,
    profile: &AiProfile,
) -> f64 {
    let damage = estimated_damage(bot, bot_move);
    let mut score = f64::from(damage) * profile.easy_damage_weight;

    let player_very_low = player.hp_ratio() < profile.easy_very_low_hp_ratio;
    if player_very_low && damage > 0 {
        if damage >= player.current_hp() {
            score += profile.easy_lethal_bonus;
        } else {
            score += f64::from(damage) * profile.easy_low_hp_damage_mult;
        }
    }

    let favoured = bot
        .passives()
        .iter()
        .filter(|p| {
            p.trigger() == PassiveTrigger::OnWinWith(bot_move) || p.trigger() == PassiveTrigger::OnTie
        })
        .count();
    score += favoured as f64 * profile.easy_passive_bonus;

    if last_bot_move == Some(bot_move) {
        score -= profile.easy_repeat_penalty;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::{CharacterKind, MoveDamage, Passive, PassiveEffect};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn fighter(hp: u32, damage: MoveDamage, passives: Vec<Passive>) -> Character {
        Character::new("Test", CharacterKind::Custom, hp, damage, passives).expect("valid")
    }

    #[test]
    fn weighs_damage_and_passives() {
        let profile = AiProfile::easy();
        let bot = fighter(
            20,
            MoveDamage::new(1, 2, 10),
            vec![Passive::new(
                PassiveTrigger::OnWinWith(Move::Paper),
                PassiveEffect::HealSelfFlat,
                5,
            )],
        );
        let player = fighter(20, MoveDamage::new(1, 1, 1), vec![]);

        assert!(approx(score_easy(Move::Paper, &bot, &player, None, &profile), 1.4 + 3.0));
        assert!(approx(score_easy(Move::Scissors, &bot, &player, None, &profile), 7.0));
        assert!(approx(
            score_easy(Move::Scissors, &bot, &player, Some(Move::Scissors), &profile),
            5.0
        ));
    }

    #[test]
    fn very_low_player_rewards_finishing_blows() {
        let profile = AiProfile::easy();
        let bot = fighter(20, MoveDamage::new(0, 1, 3), vec![]);
        let mut player = fighter(20, MoveDamage::new(1, 1, 1), vec![]);
        player.take_damage(17); // 15%, 3 HP

        assert!(approx(score_easy(Move::Scissors, &bot, &player, None, &profile), 2.1 + 50.0));
        assert!(approx(score_easy(Move::Paper, &bot, &player, None, &profile), 0.7 + 1.0));
        assert!(approx(score_easy(Move::Rock, &bot, &player, None, &profile), 0.0));
    }
}
