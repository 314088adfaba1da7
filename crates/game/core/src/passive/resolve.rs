//! Passive resolution engine.
//!
//! The battle loop raises a [`TriggerEvent`] at each checkpoint of a round and
//! calls [`apply_trigger`] for the character whose passives should react.
//! Matching passives fire in list order and mutate real state.
//!
//! # Gating
//!
//! - A passive fires at most once per turn (`triggered_this_turn`), until the
//!   owner's `reset_turn_state` runs.
//! - A permanent damage buff reached through the HP-threshold path fires at
//!   most once per battle (`triggered_this_battle`), even while the HP
//!   condition keeps holding.
//!
//! Defeat is only reported, never acted on: the caller stops raising further
//! checkpoints once either side is at 0 HP.

use tracing::info;

use super::{EffectOutcome, Passive, PassiveTrigger, TriggerEvent};
use crate::state::Character;

/// Record of a single passive firing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PassiveActivation {
    /// Name of the passive's owner.
    pub owner: String,
    /// The passive definition that fired.
    pub passive: Passive,
    /// The change that was applied.
    pub outcome: EffectOutcome,
    /// Owner HP after the effect.
    pub owner_hp: u32,
    /// Opponent HP after the effect.
    pub opponent_hp: u32,
    pub owner_defeated: bool,
    pub opponent_defeated: bool,
}

/// Fires every passive of `owner` that matches `event`.
///
/// Returns the activations in firing order (empty when nothing matched).
pub fn apply_trigger(
    event: TriggerEvent,
    owner: &mut Character,
    opponent: &mut Character,
) -> Vec<PassiveActivation> {
    let mut fired = Vec::new();

    for index in 0..owner.passives.len() {
        let passive = owner.passives[index];
        if passive.triggered_this_turn {
            continue;
        }

        let once_per_battle = match event {
            TriggerEvent::HpBelowPercent => {
                if !hp_threshold_met(owner, &passive) {
                    continue;
                }
                let permanent = passive.effect().is_permanent_buff();
                if permanent && passive.triggered_this_battle {
                    continue;
                }
                permanent
            }
            other => {
                if !passive.trigger().matches(other) {
                    continue;
                }
                false
            }
        };

        let slot = &mut owner.passives[index];
        slot.triggered_this_turn = true;
        if once_per_battle {
            slot.triggered_this_battle = true;
        }

        let outcome = passive.outcome(owner.current_hp(), opponent.current_hp());
        apply_outcome(outcome, owner, opponent);

        info!(
            target: "duel_core::passive",
            owner = owner.name(),
            passive = %passive,
            ?outcome,
            "passive triggered"
        );
        if opponent.is_defeated() {
            info!(target: "duel_core::passive", "{} was defeated by the passive effect", opponent.name());
        }
        if owner.is_defeated() {
            info!(target: "duel_core::passive", "{} was defeated by their own passive effect", owner.name());
        }

        fired.push(PassiveActivation {
            owner: owner.name().to_owned(),
            passive: passive.definition(),
            outcome,
            owner_hp: owner.current_hp(),
            opponent_hp: opponent.current_hp(),
            owner_defeated: owner.is_defeated(),
            opponent_defeated: opponent.is_defeated(),
        });
    }

    fired
}

/// Applies a computed effect to real state.
pub fn apply_outcome(outcome: EffectOutcome, owner: &mut Character, opponent: &mut Character) {
    match outcome {
        EffectOutcome::Nothing => {}
        EffectOutcome::HealSelf(amount) => owner.heal(amount),
        EffectOutcome::DamageOpponent(amount) => opponent.take_damage(amount),
        EffectOutcome::BuffNextAttack(amount) => owner.add_bonus_damage_next_attack(amount),
        EffectOutcome::IncreaseMoveDamage(m, amount) => owner.increase_move_damage(m, amount),
    }
}

/// Alive and `floor(100 * hp / max_hp) <= threshold` (inclusive).
fn hp_threshold_met(owner: &Character, passive: &Passive) -> bool {
    passive.trigger() == PassiveTrigger::OnHpBelowPercent
        && owner.current_hp() > 0
        && owner.hp_percent() <= passive.threshold()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Move;
    use crate::passive::PassiveEffect;
    use crate::state::{CharacterKind, MoveDamage};

    fn fighter(name: &str, hp: u32, passives: Vec<Passive>) -> Character {
        Character::new(
            name,
            CharacterKind::Custom,
            hp,
            MoveDamage::new(1, 2, 3),
            passives,
        )
        .expect("valid fighter")
    }

    fn dummy() -> Character {
        fighter("Dummy", 20, vec![])
    }

    #[test]
    fn win_passive_heals_on_matching_move_only() {
        let heal = Passive::new(
            PassiveTrigger::OnWinWith(Move::Paper),
            PassiveEffect::HealSelfFlat,
            5,
        );
        let mut owner = fighter("Helios", 25, vec![heal]);
        let mut opponent = dummy();
        owner.take_damage(10);

        assert!(apply_trigger(TriggerEvent::WonWith(Move::Rock), &mut owner, &mut opponent).is_empty());
        assert!(apply_trigger(TriggerEvent::LostTo(Move::Paper), &mut owner, &mut opponent).is_empty());

        let fired = apply_trigger(TriggerEvent::WonWith(Move::Paper), &mut owner, &mut opponent);
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].outcome, EffectOutcome::HealSelf(5));
        assert_eq!(owner.current_hp(), 20);
    }

    #[test]
    fn heal_is_capped_at_max_hp() {
        let heal = Passive::new(PassiveTrigger::OnTurnStart, PassiveEffect::HealSelfFlat, 50);
        let mut owner = fighter("Regen", 10, vec![heal]);
        let mut opponent = dummy();
        owner.take_damage(3);
        apply_trigger(TriggerEvent::TurnStart, &mut owner, &mut opponent);
        assert_eq!(owner.current_hp(), 10);
    }

    #[test]
    fn passive_fires_once_per_turn() {
        let poke = Passive::new(PassiveTrigger::AfterAnyAttack, PassiveEffect::DamageOpponentFlat, 2);
        let mut owner = fighter("Poker", 10, vec![poke]);
        let mut opponent = dummy();

        assert_eq!(apply_trigger(TriggerEvent::AfterAnyAttack, &mut owner, &mut opponent).len(), 1);
        assert!(apply_trigger(TriggerEvent::AfterAnyAttack, &mut owner, &mut opponent).is_empty());
        assert_eq!(opponent.current_hp(), 18);

        owner.reset_turn_state();
        assert_eq!(apply_trigger(TriggerEvent::AfterAnyAttack, &mut owner, &mut opponent).len(), 1);
        assert_eq!(opponent.current_hp(), 16);
    }

    #[test]
    fn tie_passive_fires_on_tie() {
        let jab = Passive::new(PassiveTrigger::OnTie, PassiveEffect::DamageOpponentFlat, 1);
        let mut owner = fighter("Philip", 18, vec![jab]);
        let mut opponent = dummy();
        let fired = apply_trigger(TriggerEvent::Tie, &mut owner, &mut opponent);
        assert_eq!(fired.len(), 1);
        assert_eq!(opponent.current_hp(), 19);
    }

    #[test]
    fn hp_threshold_is_inclusive() {
        let buff = Passive::with_threshold(
            PassiveTrigger::OnHpBelowPercent,
            PassiveEffect::IncreaseNextAttackFlat,
            2,
            50,
        );
        let mut owner = fighter("Edge", 20, vec![buff]);
        let mut opponent = dummy();

        owner.take_damage(9); // 55%
        assert!(apply_trigger(TriggerEvent::HpBelowPercent, &mut owner, &mut opponent).is_empty());

        owner.take_damage(1); // exactly 50%
        assert_eq!(owner.hp_percent(), 50);
        assert_eq!(apply_trigger(TriggerEvent::HpBelowPercent, &mut owner, &mut opponent).len(), 1);
        assert_eq!(owner.bonus_damage_next_attack(), 2);
    }

    #[test]
    fn hp_threshold_ignores_defeated_owner() {
        let heal = Passive::with_threshold(
            PassiveTrigger::OnHpBelowPercent,
            PassiveEffect::HealSelfFlat,
            5,
            90,
        );
        let mut owner = fighter("Ghost", 10, vec![heal]);
        let mut opponent = dummy();
        owner.take_damage(10);
        assert!(apply_trigger(TriggerEvent::HpBelowPercent, &mut owner, &mut opponent).is_empty());
        assert_eq!(owner.current_hp(), 0);
    }

    #[test]
    fn permanent_buff_fires_once_per_battle() {
        let rage = Passive::with_threshold(
            PassiveTrigger::OnHpBelowPercent,
            PassiveEffect::IncreaseMoveDamage(Move::Rock),
            4,
            28,
        );
        let mut owner = fighter("Sunny", 14, vec![rage]);
        let mut opponent = dummy();
        owner.take_damage(11);

        let mut activations = 0;
        for _ in 0..10 {
            owner.reset_turn_state();
            activations += apply_trigger(TriggerEvent::HpBelowPercent, &mut owner, &mut opponent).len();
        }
        assert_eq!(activations, 1);
        assert_eq!(owner.move_damage(Move::Rock), 5);
        assert!(owner.passives()[0].triggered_this_battle());

        owner.reset_stats_for_new_battle();
        assert_eq!(owner.move_damage(Move::Rock), 1);
        owner.take_damage(11);
        owner.reset_turn_state();
        assert_eq!(apply_trigger(TriggerEvent::HpBelowPercent, &mut owner, &mut opponent).len(), 1);
    }

    #[test]
    fn non_permanent_threshold_passive_fires_every_turn() {
        let heal = Passive::with_threshold(
            PassiveTrigger::OnHpBelowPercent,
            PassiveEffect::HealSelfFlat,
            1,
            50,
        );
        let mut owner = fighter("Leech", 100, vec![heal]);
        let mut opponent = dummy();
        owner.take_damage(80);

        for _ in 0..3 {
            owner.reset_turn_state();
            apply_trigger(TriggerEvent::HpBelowPercent, &mut owner, &mut opponent);
        }
        assert_eq!(owner.current_hp(), 23);
    }

    #[test]
    fn percent_effects_use_current_hp() {
        let drain = Passive::new(
            PassiveTrigger::AfterTakingHit,
            PassiveEffect::DamageOpponentPercentCurrent,
            50,
        );
        let mut owner = fighter("Thorn", 10, vec![drain]);
        let mut opponent = dummy();
        opponent.take_damage(5); // 15 left

        let fired = apply_trigger(TriggerEvent::AfterTakingHit, &mut owner, &mut opponent);
        assert_eq!(fired[0].outcome, EffectOutcome::DamageOpponent(7));
        assert_eq!(opponent.current_hp(), 8);
    }

    #[test]
    fn lethal_passive_reports_defeat() {
        let finisher = Passive::new(PassiveTrigger::OnTurnStart, PassiveEffect::DamageOpponentFlat, 50);
        let mut owner = fighter("Reaper", 10, vec![finisher]);
        let mut opponent = dummy();

        let fired = apply_trigger(TriggerEvent::TurnStart, &mut owner, &mut opponent);
        assert!(fired[0].opponent_defeated);
        assert!(!fired[0].owner_defeated);
        assert_eq!(fired[0].opponent_hp, 0);
    }

    #[test]
    fn multiple_passives_fire_in_order() {
        let passives = vec![
            Passive::new(PassiveTrigger::OnTurnStart, PassiveEffect::IncreaseNextAttackFlat, 1),
            Passive::new(PassiveTrigger::OnTie, PassiveEffect::HealSelfFlat, 1),
            Passive::new(PassiveTrigger::OnTurnStart, PassiveEffect::IncreaseNextAttackFlat, 2),
        ];
        let mut owner = fighter("Stack", 10, passives);
        let mut opponent = dummy();

        let fired = apply_trigger(TriggerEvent::TurnStart, &mut owner, &mut opponent);
        assert_eq!(fired.len(), 2);
        assert_eq!(fired[0].outcome, EffectOutcome::BuffNextAttack(1));
        assert_eq!(fired[1].outcome, EffectOutcome::BuffNextAttack(2));
        assert_eq!(owner.bonus_damage_next_attack(), 3);
    }
}
