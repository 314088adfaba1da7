//! Immutable character definitions (registry entries).
//!
//! A definition is data: built-ins ship as a RON table and customs are read
//! from the roster file. Live fighters are produced with
//! [`CharacterDefinition::instantiate`], which never shares passive state
//! between instances.

use crate::config::GameConfig;
use crate::error::DefinitionError;
use crate::passive::{Passive, PassiveEffect, PassiveTrigger};

use super::character::{Character, CharacterKind, MoveDamage};

/// Characters that may not appear in names (they delimit roster records).
pub const RESERVED_NAME_CHARS: [char; 2] = [';', '\n'];

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterDefinition {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: CharacterKind,
    pub max_hp: u32,
    pub damage: MoveDamage,
    #[cfg_attr(feature = "serde", serde(default))]
    pub passives: Vec<Passive>,
}

impl CharacterDefinition {
    pub fn new(
        name: impl Into<String>,
        kind: CharacterKind,
        max_hp: u32,
        damage: MoveDamage,
        passives: Vec<Passive>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            max_hp,
            damage,
            passives,
        }
    }

    /// Builds a fresh fighter at full HP.
    pub fn instantiate(&self) -> Result<Character, DefinitionError> {
        Character::new(
            self.name.clone(),
            self.kind,
            self.max_hp,
            self.damage,
            self.passives.iter().copied(),
        )
    }

    /// Checks the limits applied to user-made characters.
    pub fn validate_custom(&self) -> Result<(), DefinitionError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DefinitionError::EmptyName);
        }
        if name.contains(RESERVED_NAME_CHARS) {
            return Err(DefinitionError::ReservedCharacter(self.name.clone()));
        }

        if !(GameConfig::MIN_MAX_HP..=GameConfig::MAX_MAX_HP).contains(&self.max_hp) {
            return Err(DefinitionError::MaxHp {
                value: self.max_hp,
                min: GameConfig::MIN_MAX_HP,
                max: GameConfig::MAX_MAX_HP,
            });
        }

        for (what, value) in [
            ("Rock", self.damage.rock),
            ("Paper", self.damage.paper),
            ("Scissors", self.damage.scissors),
        ] {
            if value > GameConfig::MAX_MOVE_DAMAGE {
                return Err(DefinitionError::MoveDamage {
                    what,
                    value,
                    max: GameConfig::MAX_MOVE_DAMAGE,
                });
            }
        }

        if self.passives.len() > GameConfig::MAX_CUSTOM_PASSIVES {
            return Err(DefinitionError::TooManyPassives {
                count: self.passives.len(),
                max: GameConfig::MAX_CUSTOM_PASSIVES,
            });
        }

        for (index, passive) in self.passives.iter().enumerate() {
            validate_passive(index + 1, passive)?;
        }

        Ok(())
    }
}

fn validate_passive(index: usize, passive: &Passive) -> Result<(), DefinitionError> {
    if passive.trigger() == PassiveTrigger::None || passive.effect() == PassiveEffect::None {
        return Err(DefinitionError::InertPassive { index });
    }

    let (min, max) = if passive.effect().is_percent() {
        (GameConfig::MIN_PERCENT_VALUE, GameConfig::MAX_PERCENT_VALUE)
    } else {
        (GameConfig::MIN_FLAT_VALUE, GameConfig::MAX_FLAT_VALUE)
    };
    if !(min..=max).contains(&passive.value()) {
        return Err(DefinitionError::PassiveValue {
            index,
            value: passive.value(),
            min,
            max,
        });
    }

    if passive.trigger() == PassiveTrigger::OnHpBelowPercent {
        let (min, max) = (GameConfig::MIN_HP_THRESHOLD, GameConfig::MAX_HP_THRESHOLD);
        if !(min..=max).contains(&passive.threshold()) {
            return Err(DefinitionError::PassiveThreshold {
                index,
                value: passive.threshold(),
                min,
                max,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Move;

    fn custom(passives: Vec<Passive>) -> CharacterDefinition {
        CharacterDefinition::new(
            "Pebble",
            CharacterKind::Custom,
            30,
            MoveDamage::new(2, 2, 2),
            passives,
        )
    }

    #[test]
    fn accepts_reasonable_custom() {
        let def = custom(vec![Passive::with_threshold(
            PassiveTrigger::OnHpBelowPercent,
            PassiveEffect::HealSelfPercentCurrent,
            50,
            30,
        )]);
        assert_eq!(def.validate_custom(), Ok(()));
    }

    #[test]
    fn rejects_separator_in_name() {
        let mut def = custom(vec![]);
        def.name = "Rock;Star".into();
        assert!(matches!(
            def.validate_custom(),
            Err(DefinitionError::ReservedCharacter(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_stats() {
        let mut def = custom(vec![]);
        def.max_hp = 0;
        assert!(matches!(def.validate_custom(), Err(DefinitionError::MaxHp { .. })));

        let mut def = custom(vec![]);
        def.damage.scissors = 11;
        assert!(matches!(
            def.validate_custom(),
            Err(DefinitionError::MoveDamage { what: "Scissors", .. })
        ));
    }

    #[test]
    fn rejects_bad_passives() {
        let flat = |v| Passive::new(PassiveTrigger::OnWinWith(Move::Rock), PassiveEffect::HealSelfFlat, v);

        assert!(matches!(
            custom(vec![flat(51)]).validate_custom(),
            Err(DefinitionError::PassiveValue { index: 1, .. })
        ));
        assert!(matches!(
            custom(vec![flat(1); 4]).validate_custom(),
            Err(DefinitionError::TooManyPassives { count: 4, max: 3 })
        ));
        assert!(matches!(
            custom(vec![Passive::new(PassiveTrigger::None, PassiveEffect::HealSelfFlat, 1)])
                .validate_custom(),
            Err(DefinitionError::InertPassive { index: 1 })
        ));
        assert!(matches!(
            custom(vec![Passive::with_threshold(
                PassiveTrigger::OnHpBelowPercent,
                PassiveEffect::HealSelfFlat,
                5,
                100,
            )])
            .validate_custom(),
            Err(DefinitionError::PassiveThreshold { value: 100, .. })
        ));
    }

    #[test]
    fn instances_do_not_share_passive_state() {
        let def = custom(vec![Passive::new(
            PassiveTrigger::OnTie,
            PassiveEffect::DamageOpponentFlat,
            1,
        )]);
        let mut a = def.instantiate().expect("valid");
        let b = def.instantiate().expect("valid");
        a.passives[0].triggered_this_turn = true;
        assert!(!b.passives()[0].triggered_this_turn());
    }
}
