//! Passive effects and their shared outcome description.
//!
//! Both the resolver (which mutates characters) and the AI estimator (which
//! only scores) start from [`PassiveEffect::outcome`], so the two can never
//! disagree on how much an effect heals, hits, or buffs.

use core::fmt;

use crate::combat::Move;

/// What a passive does once triggered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PassiveEffect {
    #[default]
    None,
    HealSelfFlat,
    DamageOpponentFlat,
    /// Adds to the owner's next realized attack.
    IncreaseNextAttackFlat,
    /// Raises one move's damage for the rest of the battle.
    IncreaseMoveDamage(Move),
    HealSelfPercentCurrent,
    DamageOpponentPercentCurrent,
}

/// Concrete change an effect would make, given current HP values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectOutcome {
    Nothing,
    HealSelf(u32),
    DamageOpponent(u32),
    BuffNextAttack(u32),
    IncreaseMoveDamage(Move, u32),
}

impl PassiveEffect {
    /// Highest effect id accepted by [`PassiveEffect::from_id`].
    pub const MAX_ID: u8 = 8;

    pub const fn id(self) -> u8 {
        match self {
            Self::None => 0,
            Self::HealSelfFlat => 1,
            Self::DamageOpponentFlat => 2,
            Self::IncreaseNextAttackFlat => 3,
            Self::IncreaseMoveDamage(m) => m.id() + 3,
            Self::HealSelfPercentCurrent => 7,
            Self::DamageOpponentPercentCurrent => 8,
        }
    }

    pub const fn from_id(id: u8) -> Option<Self> {
        Some(match id {
            0 => Self::None,
            1 => Self::HealSelfFlat,
            2 => Self::DamageOpponentFlat,
            3 => Self::IncreaseNextAttackFlat,
            4 => Self::IncreaseMoveDamage(Move::Rock),
            5 => Self::IncreaseMoveDamage(Move::Paper),
            6 => Self::IncreaseMoveDamage(Move::Scissors),
            7 => Self::HealSelfPercentCurrent,
            8 => Self::DamageOpponentPercentCurrent,
            _ => return None,
        })
    }

    /// True for the battle-long move damage buffs.
    pub const fn is_permanent_buff(self) -> bool {
        matches!(self, Self::IncreaseMoveDamage(_))
    }

    /// True for effects that restore the owner's HP.
    pub const fn is_heal(self) -> bool {
        matches!(self, Self::HealSelfFlat | Self::HealSelfPercentCurrent)
    }

    /// True when `value` is a percentage rather than a flat amount.
    pub const fn is_percent(self) -> bool {
        matches!(
            self,
            Self::HealSelfPercentCurrent | Self::DamageOpponentPercentCurrent
        )
    }

    /// Computes the change this effect makes with the given magnitude.
    ///
    /// Percentage effects floor `hp * value / 100` against the *current* HP of
    /// the relevant side.
    pub fn outcome(self, value: u32, self_hp: u32, opponent_hp: u32) -> EffectOutcome {
        match self {
            Self::None => EffectOutcome::Nothing,
            Self::HealSelfFlat => EffectOutcome::HealSelf(value),
            Self::DamageOpponentFlat => EffectOutcome::DamageOpponent(value),
            Self::IncreaseNextAttackFlat => EffectOutcome::BuffNextAttack(value),
            Self::IncreaseMoveDamage(m) => EffectOutcome::IncreaseMoveDamage(m, value),
            Self::HealSelfPercentCurrent => EffectOutcome::HealSelf(percent_of(self_hp, value)),
            Self::DamageOpponentPercentCurrent => {
                EffectOutcome::DamageOpponent(percent_of(opponent_hp, value))
            }
        }
    }
}

/// `floor(amount * percent / 100)` without intermediate overflow,
/// saturating at `u32::MAX`.
pub fn percent_of(amount: u32, percent: u32) -> u32 {
    let scaled = u64::from(amount) * u64::from(percent) / 100;
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

/// Effect description given the passive's value.
pub(crate) struct EffectText(pub PassiveEffect, pub u32);

impl fmt::Display for EffectText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.1;
        match self.0 {
            PassiveEffect::None => f.write_str("no effect"),
            PassiveEffect::HealSelfFlat => write!(f, "heal self for {value} HP"),
            PassiveEffect::DamageOpponentFlat => write!(f, "deal {value} damage to opponent"),
            PassiveEffect::IncreaseNextAttackFlat => {
                write!(f, "increase next attack by {value} damage")
            }
            PassiveEffect::IncreaseMoveDamage(m) => {
                write!(f, "permanently increase {m} damage by {value}")
            }
            PassiveEffect::HealSelfPercentCurrent => {
                write!(f, "heal self for {value}% of current HP")
            }
            PassiveEffect::DamageOpponentPercentCurrent => {
                write!(f, "deal {value}% of opponent's current HP as damage")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for id in 0..=PassiveEffect::MAX_ID {
            let effect = PassiveEffect::from_id(id).expect("valid id");
            assert_eq!(effect.id(), id);
        }
        assert_eq!(PassiveEffect::from_id(9), None);
    }

    #[test]
    fn percent_effects_floor() {
        assert_eq!(
            PassiveEffect::HealSelfPercentCurrent.outcome(30, 7, 100),
            EffectOutcome::HealSelf(2)
        );
        assert_eq!(
            PassiveEffect::DamageOpponentPercentCurrent.outcome(50, 100, 9),
            EffectOutcome::DamageOpponent(4)
        );
    }

    #[test]
    fn percent_of_saturates() {
        assert_eq!(percent_of(7, 30), 2);
        assert_eq!(percent_of(0, 500), 0);
        assert_eq!(percent_of(3_000_000_000, 150), u32::MAX);
        assert_eq!(percent_of(u32::MAX, 200), u32::MAX);
        assert_eq!(percent_of(u32::MAX, 100), u32::MAX);
    }

    #[test]
    fn flat_effects_ignore_hp() {
        assert_eq!(
            PassiveEffect::DamageOpponentFlat.outcome(3, 0, 0),
            EffectOutcome::DamageOpponent(3)
        );
        assert_eq!(
            PassiveEffect::IncreaseMoveDamage(Move::Paper).outcome(2, 5, 5),
            EffectOutcome::IncreaseMoveDamage(Move::Paper, 2)
        );
        assert_eq!(PassiveEffect::None.outcome(9, 9, 9), EffectOutcome::Nothing);
    }
}
