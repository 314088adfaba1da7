//! Passive abilities: declarative trigger/effect rules owned by a character.
//!
//! - [`trigger`]: which event makes a passive eligible
//! - [`effect`]: what it does, described once via [`EffectOutcome`]
//! - [`codec`]: stable `TRIGGER,EFFECT,VALUE,THRESHOLD` encoding
//! - [`resolve`]: the mutating resolution engine used by the battle loop

pub mod codec;
pub mod effect;
pub mod resolve;
pub mod trigger;

use core::fmt;

pub use effect::{EffectOutcome, PassiveEffect, percent_of};
pub use resolve::{PassiveActivation, apply_trigger};
pub use trigger::{PassiveTrigger, TriggerEvent};

use effect::EffectText;

/// A passive ability instance.
///
/// `(trigger, effect, value, threshold)` never changes after construction;
/// only the two gating flags are mutated, and only by the resolver or by the
/// owning character's reset methods.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passive {
    trigger: PassiveTrigger,
    effect: PassiveEffect,
    value: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    threshold: u32,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) triggered_this_turn: bool,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) triggered_this_battle: bool,
}

impl Passive {
    pub const fn new(trigger: PassiveTrigger, effect: PassiveEffect, value: u32) -> Self {
        Self::with_threshold(trigger, effect, value, 0)
    }

    /// Creates a passive with an HP threshold (used by [`PassiveTrigger::OnHpBelowPercent`]).
    pub const fn with_threshold(
        trigger: PassiveTrigger,
        effect: PassiveEffect,
        value: u32,
        threshold: u32,
    ) -> Self {
        Self {
            trigger,
            effect,
            value,
            threshold,
            triggered_this_turn: false,
            triggered_this_battle: false,
        }
    }

    pub const fn trigger(&self) -> PassiveTrigger {
        self.trigger
    }

    pub const fn effect(&self) -> PassiveEffect {
        self.effect
    }

    pub const fn value(&self) -> u32 {
        self.value
    }

    pub const fn threshold(&self) -> u32 {
        self.threshold
    }

    pub const fn triggered_this_turn(&self) -> bool {
        self.triggered_this_turn
    }

    pub const fn triggered_this_battle(&self) -> bool {
        self.triggered_this_battle
    }

    /// Same definition, fresh flags.
    pub const fn definition(&self) -> Self {
        Self::with_threshold(self.trigger, self.effect, self.value, self.threshold)
    }

    /// Shorthand for `self.effect().outcome(self.value(), ..)`.
    pub fn outcome(&self, self_hp: u32, opponent_hp: u32) -> EffectOutcome {
        self.effect.outcome(self.value, self_hp, opponent_hp)
    }
}

impl fmt::Display for Passive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.trigger {
            PassiveTrigger::OnHpBelowPercent => {
                write!(f, "When HP is below {}%", self.threshold)?;
            }
            other => write!(f, "{other}")?,
        }
        write!(f, ": {}.", EffectText(self.effect, self.value))
    }
}
