use anyhow::Result;
use clap::Parser;
use duel_core::{GameConfig, PassiveEffect, PassiveTrigger};

/// List passive trigger and effect ids
#[derive(Parser, Debug)]
pub struct Passives {}

impl Passives {
    pub fn execute(self) -> Result<()> {
        println!("Passives are written as TRIGGER,EFFECT,VALUE[,THRESHOLD]");
        println!();
        println!("Triggers:");
        for trigger in (1..=PassiveTrigger::MAX_ID).filter_map(PassiveTrigger::from_id) {
            println!("  {:>2}  {}", trigger.id(), trigger);
        }
        println!();
        println!("Effects:");
        for effect in (1..=PassiveEffect::MAX_ID).filter_map(PassiveEffect::from_id) {
            let unit = if effect.is_percent() {
                format!(
                    "{}..={} %",
                    GameConfig::MIN_PERCENT_VALUE,
                    GameConfig::MAX_PERCENT_VALUE
                )
            } else {
                format!(
                    "{}..={}",
                    GameConfig::MIN_FLAT_VALUE,
                    GameConfig::MAX_FLAT_VALUE
                )
            };
            println!("  {:>2}  {:?} (value {})", effect.id(), effect, unit);
        }
        println!();
        println!(
            "THRESHOLD ({}..={}) is the HP percentage for trigger {}.",
            GameConfig::MIN_HP_THRESHOLD,
            GameConfig::MAX_HP_THRESHOLD,
            PassiveTrigger::OnHpBelowPercent.id()
        );
        Ok(())
    }
}
