//! Plain-text narration of battle rounds.

use duel_core::EffectOutcome;
use duel_runtime::{BattleEvent, BattleOutcome, RoundReport, Side};

/// Display names of both fighters.
#[derive(Clone, Debug)]
pub struct Names {
    pub player: String,
    pub bot: String,
}

impl Names {
    fn of(&self, side: Side) -> &str {
        match side {
            Side::Player => &self.player,
            Side::Bot => &self.bot,
        }
    }
}

/// One line per event of the round.
pub fn narrate(report: &RoundReport, names: &Names) -> Vec<String> {
    report
        .events
        .iter()
        .map(|event| match event {
            BattleEvent::Passive { side, activation } => format!(
                "{}'s passive: {} {}",
                names.of(*side),
                activation.passive,
                outcome_note(activation.outcome, names, *side)
            ),
            BattleEvent::Tie { played } => format!("Both chose {played}. It's a tie!"),
            BattleEvent::Hit {
                attacker,
                attacker_move,
                defender_move,
                damage,
                defender_hp,
            } => format!(
                "{}'s {} beats {}'s {} for {} damage ({} HP left).",
                names.of(*attacker),
                attacker_move,
                names.of(attacker.opponent()),
                defender_move,
                damage,
                defender_hp
            ),
            BattleEvent::Defeated { side } => format!("{} has been defeated!", names.of(*side)),
        })
        .collect()
}

fn outcome_note(outcome: EffectOutcome, names: &Names, side: Side) -> String {
    match outcome {
        EffectOutcome::Nothing => "(no effect)".to_owned(),
        EffectOutcome::HealSelf(amount) => format!("(+{amount} HP)"),
        EffectOutcome::DamageOpponent(amount) => {
            format!("({} takes {amount})", names.of(side.opponent()))
        }
        EffectOutcome::BuffNextAttack(amount) => format!("(next attack +{amount})"),
        EffectOutcome::IncreaseMoveDamage(m, amount) => format!("({m} +{amount})"),
    }
}

/// Closing line from the player's point of view.
pub fn verdict(outcome: BattleOutcome, names: &Names, rounds: u32) -> String {
    match outcome {
        BattleOutcome::PlayerWins => format!("{} wins after {rounds} rounds!", names.player),
        BattleOutcome::BotWins => format!("{} wins after {rounds} rounds!", names.bot),
        BattleOutcome::DoubleKnockout => "Both fighters fell. It's a draw!".to_owned(),
        BattleOutcome::RoundLimit => format!("No winner after {rounds} rounds."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::{Character, CharacterKind, Move, MoveDamage, Passive, PassiveEffect, PassiveTrigger};
    use duel_runtime::Battle;

    fn names() -> Names {
        Names {
            player: "Philip".into(),
            bot: "OG".into(),
        }
    }

    #[test]
    fn narrates_a_tie_with_passive() {
        let philip = Character::new(
            "Philip",
            CharacterKind::Builtin,
            18,
            MoveDamage::new(1, 2, 1),
            [Passive::new(PassiveTrigger::OnTie, PassiveEffect::DamageOpponentFlat, 1)],
        )
        .expect("valid");
        let og = Character::new("OG", CharacterKind::Builtin, 20, MoveDamage::new(1, 2, 3), [])
            .expect("valid");

        let mut battle = Battle::new(philip, og);
        let report = battle.play_round(Move::Rock, Move::Rock).expect("round");

        assert_eq!(
            narrate(&report, &names()),
            vec![
                "Both chose Rock. It's a tie!".to_owned(),
                "Philip's passive: On a tie: deal 1 damage to opponent. (OG takes 1)".to_owned(),
            ]
        );
    }

    #[test]
    fn narrates_hits_and_defeat() {
        let report = RoundReport {
            round: 4,
            player_move: Some(Move::Rock),
            bot_move: Some(Move::Scissors),
            result: None,
            events: vec![
                BattleEvent::Hit {
                    attacker: Side::Player,
                    attacker_move: Move::Rock,
                    defender_move: Move::Scissors,
                    damage: 3,
                    defender_hp: 0,
                },
                BattleEvent::Defeated { side: Side::Bot },
            ],
            finished: Some(BattleOutcome::PlayerWins),
        };

        assert_eq!(
            narrate(&report, &names()),
            vec![
                "Philip's Rock beats OG's Scissors for 3 damage (0 HP left).".to_owned(),
                "OG has been defeated!".to_owned(),
            ]
        );
        assert_eq!(
            verdict(BattleOutcome::PlayerWins, &names(), 4),
            "Philip wins after 4 rounds!"
        );
    }
}
