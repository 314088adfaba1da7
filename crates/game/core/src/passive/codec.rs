//! Stable text encoding for passives: `TRIGGER_ID,EFFECT_ID,VALUE,THRESHOLD`.

use core::str::FromStr;

use super::{Passive, PassiveEffect, PassiveTrigger};
use crate::error::PassiveCodecError;

/// Separator between the four encoded fields.
pub const FIELD_SEPARATOR: char = ',';

impl Passive {
    /// Encodes the immutable definition; runtime flags are not persisted.
    pub fn encode(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}{sep}{}",
            self.trigger.id(),
            self.effect.id(),
            self.value,
            self.threshold,
            sep = FIELD_SEPARATOR
        )
    }
}

impl FromStr for Passive {
    type Err = PassiveCodecError;

    /// Decodes `TRIGGER,EFFECT[,VALUE[,THRESHOLD]]`; missing trailing fields default to 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.trim().split(FIELD_SEPARATOR).map(str::trim).collect();
        if fields.len() < 2 || fields.len() > 4 {
            return Err(PassiveCodecError::FieldCount(fields.len()));
        }

        let mut numbers = [0u32; 4];
        for (slot, field) in numbers.iter_mut().zip(&fields) {
            *slot = field
                .parse()
                .map_err(|_| PassiveCodecError::NotANumber((*field).to_owned()))?;
        }
        let [trigger_id, effect_id, value, threshold] = numbers;

        let trigger = u8::try_from(trigger_id)
            .ok()
            .and_then(PassiveTrigger::from_id)
            .ok_or(PassiveCodecError::UnknownTrigger(trigger_id))?;
        let effect = u8::try_from(effect_id)
            .ok()
            .and_then(PassiveEffect::from_id)
            .ok_or(PassiveCodecError::UnknownEffect(effect_id))?;

        Ok(Passive::with_threshold(trigger, effect, value, threshold))
    }
}
