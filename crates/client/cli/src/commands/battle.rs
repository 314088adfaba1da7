use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use duel_content::CharacterRegistry;
use duel_core::Difficulty;
use duel_runtime::{AiMoveProvider, AiProfile, MoveProvider};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::open_registry;
use crate::config::CliConfig;
use crate::input::{DebugMoveProvider, PromptMoveProvider};
use crate::narration::{self, Names};

/// Fight a battle against the AI
#[derive(Parser, Debug)]
pub struct Battle {
    /// Your character
    #[arg(long)]
    pub player: String,

    /// Opponent character (random when omitted)
    #[arg(long)]
    pub opponent: Option<String>,

    /// AI difficulty: easy or hard
    #[arg(long, value_parser = parse_difficulty)]
    pub difficulty: Option<Difficulty>,

    /// Let the AI play your side too
    #[arg(long)]
    pub auto: bool,

    /// Debug battle: you also enter the opponent's moves (4 lets the AI pick)
    #[arg(long, conflicts_with = "auto", requires = "opponent")]
    pub debug: bool,

    /// Round cap
    #[arg(long)]
    pub rounds: Option<u32>,

    /// Seed for reproducible AI choices
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Battle {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let (factory, loaded) = open_registry(config)?;
        let game = config.apply(factory.load_config()?);
        let difficulty = self.difficulty.unwrap_or(game.difficulty);
        let max_rounds = self.rounds.unwrap_or(game.max_rounds).max(1);

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let player = loaded.registry.instantiate(&self.player)?;
        let opponent = match &self.opponent {
            Some(name) => name.clone(),
            None => pick_opponent(&loaded.registry, player.name(), &mut rng)?,
        };
        let bot = loaded.registry.instantiate(&opponent)?;

        let names = Names {
            player: player.name().to_owned(),
            bot: bot.name().to_owned(),
        };
        let banner = if self.debug {
            "=== DEBUG BATTLE ==="
        } else {
            "=== BATTLE ==="
        };
        println!("{}", style(banner).bold());
        println!("{}", player.full_description());
        println!("{}", style("vs").dim());
        println!("{}", bot.full_description());
        println!("Difficulty: {difficulty}");

        let bot_profile = AiProfile::for_difficulty(difficulty);
        let bot_rng = StdRng::from_rng(&mut rng)?;
        let mut bot_input: Box<dyn MoveProvider> = if self.debug {
            Box::new(DebugMoveProvider::stdio(bot_profile, bot_rng))
        } else {
            Box::new(AiMoveProvider::with_rng(bot_profile, bot_rng))
        };
        let mut player_input: Box<dyn MoveProvider> = if self.auto {
            Box::new(AiMoveProvider::with_rng(
                AiProfile::for_difficulty(difficulty),
                StdRng::from_rng(&mut rng)?,
            ))
        } else {
            Box::new(PromptMoveProvider::stdio())
        };

        let mut battle = duel_runtime::Battle::new(player, bot);
        let outcome = battle
            .run_with(player_input.as_mut(), bot_input.as_mut(), max_rounds, |report| {
                println!();
                println!("{}", style(format!("--- Round {} ---", report.round)).bold());
                for line in narration::narrate(report, &names) {
                    println!("{line}");
                }
            })
            .context("Battle aborted")?;

        println!();
        println!(
            "{}",
            style(narration::verdict(outcome, &names, battle.round()))
                .green()
                .bold()
        );
        Ok(())
    }
}

fn parse_difficulty(text: &str) -> Result<Difficulty, String> {
    text.parse()
        .map_err(|_| format!("unknown difficulty `{text}` (expected easy or hard)"))
}

/// Any character other than the player's.
fn pick_opponent(registry: &CharacterRegistry, player: &str, rng: &mut StdRng) -> Result<String> {
    let candidates: Vec<&str> = registry
        .definitions()
        .iter()
        .map(|definition| definition.name.as_str())
        .filter(|name| !name.eq_ignore_ascii_case(player))
        .collect();

    candidates
        .choose(rng)
        .map(|name| (*name).to_owned())
        .context("No opponent available")
}
