//! Non-mutating passive payoff estimation.
//!
//! Mirrors the resolver's effect table through the shared
//! [`EffectOutcome`] description, but returns a desirability value instead
//! of touching state.

use duel_core::{Character, EffectOutcome, Passive, PassiveTrigger};

use crate::providers::ai::AiProfile;

/// Payoff of `passive` (owned by `owner`) firing right now.
///
/// Positive when the owner is the acting side, negated otherwise. Percentage
/// effects use the *current* HP of both fighters.
pub fn passive_payoff(
    passive: &Passive,
    owner: &Character,
    opponent: &Character,
    owner_is_actor: bool,
    profile: &AiProfile,
) -> f64 {
    let magnitude = match passive.outcome(owner.current_hp(), opponent.current_hp()) {
        EffectOutcome::Nothing => 0.0,
        EffectOutcome::HealSelf(amount) => {
            let mut value = f64::from(amount) * profile.passive_heal_mult;
            if owner_is_actor && within(owner.current_hp(), amount) {
                value += profile.death_avoidance_bonus;
            }
            value
        }
        EffectOutcome::DamageOpponent(amount) => {
            let mut value = f64::from(amount) * profile.passive_damage_mult;
            if within(opponent.current_hp(), amount) {
                value += profile.passive_lethal_bonus;
            }
            value
        }
        EffectOutcome::BuffNextAttack(amount) => f64::from(amount) * profile.passive_buff_mult,
        EffectOutcome::IncreaseMoveDamage(_, amount) => {
            f64::from(amount) * profile.passive_perm_buff_mult
        }
    };

    if owner_is_actor { magnitude } else { -magnitude }
}

/// Sum of payoffs for every passive of `owner` whose trigger satisfies `filter`.
pub fn matching_payoff(
    owner: &Character,
    opponent: &Character,
    owner_is_actor: bool,
    profile: &AiProfile,
    filter: impl Fn(PassiveTrigger) -> bool,
) -> f64 {
    owner
        .passives()
        .iter()
        .filter(|p| filter(p.trigger()))
        .map(|p| passive_payoff(p, owner, opponent, owner_is_actor, profile))
        .sum()
}

/// `hp ∈ (0, amount]`.
fn within(hp: u32, amount: u32) -> bool {
    hp > 0 && hp <= amount
}
