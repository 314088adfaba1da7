//! Move scoring for the duel AI.
//!
//! Every candidate move gets one scalar desirability score:
//!
//! - **Hard**: [`scenario`] averages the bot's prospects over all three player
//!   responses (damage, lethality, passive payoffs from [`passives`]), then
//!   [`situational`] layers HP-ratio risk modifiers and move-history
//!   adjustments on top.
//! - **Easy**: [`easy`] scores each move in a single pass.
//!
//! Scoring only reads `&Character`; passive payoffs are estimated, never
//! applied. [`selector`] turns the scores into a move.

pub mod easy;
pub mod passives;
pub mod scenario;
pub mod selector;
pub mod situational;

use duel_core::{Character, Difficulty, Move};

use super::AiProfile;

pub use selector::MoveSelector;

/// A candidate move and its score. Produced fresh for every decision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveChoice {
    pub candidate: Move,
    pub score: f64,
}

/// Scores all three moves for `bot` facing `player`.
///
/// `last_bot_move` / `last_player_move` are the moves of the previous round,
/// `None` on the first round.
pub fn score_moves(
    bot: &Character,
    player: &Character,
    last_bot_move: Option<Move>,
    last_player_move: Option<Move>,
    profile: &AiProfile,
) -> Vec<MoveChoice> {
    Move::ALL
        .iter()
        .map(|&candidate| {
            let score = match profile.difficulty {
                Difficulty::Easy => easy::score_easy(candidate, bot, player, last_bot_move, profile),
                Difficulty::Hard => {
                    let average = scenario::average_scenario_score(candidate, bot, player, profile);
                    situational::apply_modifiers(
                        average,
                        candidate,
                        bot,
                        player,
                        last_bot_move,
                        last_player_move,
                        profile,
                    )
                }
            };

            tracing::debug!(
                "  Move {}: score={:.3} ({})",
                candidate,
                score,
                profile.difficulty
            );

            MoveChoice { candidate, score }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::{CharacterKind, MoveDamage, Passive, PassiveEffect, PassiveTrigger};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn og() -> Character {
        Character::new("OG", CharacterKind::Builtin, 20, MoveDamage::new(1, 2, 3), [])
            .expect("valid")
    }

    fn helios() -> Character {
        Character::new(
            "Helios",
            CharacterKind::Builtin,
            25,
            MoveDamage::new(1, 0, 2),
            [Passive::new(
                PassiveTrigger::OnWinWith(Move::Paper),
                PassiveEffect::HealSelfFlat,
                5,
            )],
        )
        .expect("valid")
    }

    #[test]
    fn hard_scores_for_helios_against_og() {
        let scores = score_moves(&helios(), &og(), None, None, &AiProfile::hard());
        let by_move: Vec<(Move, f64)> = scores.iter().map(|c| (c.candidate, c.score)).collect();

        assert_eq!(by_move.len(), 3);
        assert!(approx(by_move[0].1, -1.4 / 3.0 + 0.1));
        assert!(approx(by_move[1].1, 1.4 / 3.0));
        assert!(approx(by_move[2].1, 0.8 / 3.0 + 0.2));
    }

    #[test]
    fn easy_scores_skip_scenarios() {
        let scores = score_moves(&helios(), &og(), None, None, &AiProfile::easy());
        assert!(approx(scores[0].score, 0.7));
        assert!(approx(scores[1].score, 3.0));
        assert!(approx(scores[2].score, 1.4));
    }

    #[test]
    fn profiles_carry_their_own_weights() {
        let easy = AiProfile::easy();
        let hard = AiProfile::hard();
        assert!(easy.lethal_bonus < hard.lethal_bonus);
        assert!(easy.death_penalty < hard.death_penalty);
        assert!(easy.passive_perm_buff_mult < hard.passive_perm_buff_mult);
        assert!(easy.counter_bonus < hard.counter_bonus);
    }

    #[test]
    fn easy_scores_ignore_hard_weights() {
        let tuned = AiProfile {
            lethal_bonus: 1e6,
            death_penalty: 1e6,
            passive_heal_mult: 1e6,
            repeat_penalty: 1e6,
            counter_bonus: 1e6,
            ..AiProfile::easy()
        };
        let history = (Some(Move::Paper), Some(Move::Rock));
        let plain = score_moves(&helios(), &og(), history.0, history.1, &AiProfile::easy());
        let tuned = score_moves(&helios(), &og(), history.0, history.1, &tuned);
        assert_eq!(plain, tuned);
        assert!(approx(plain[1].score, 3.0 - 2.0));
    }

    #[test]
    fn scoring_does_not_touch_fighters() {
        let mut bot = helios();
        bot.add_bonus_damage_next_attack(2);
        let player = og();
        let before = (bot.clone(), player.clone());

        score_moves(&bot, &player, Some(Move::Rock), Some(Move::Paper), &AiProfile::hard());
        assert_eq!((bot, player), before);
    }
}
