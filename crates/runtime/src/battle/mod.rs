//! Battle loop: rounds, checkpoints and outcome.
//!
//! A round runs in two phases:
//!
//! 1. [`Battle::start_round`] clears the per-turn passive flags and raises the
//!    pre-move checkpoints: player turn-start, bot turn-start, player HP
//!    check, bot HP check.
//! 2. [`Battle::resolve_round`] throws the moves. On a tie the player's then
//!    the bot's on-tie passives fire. Otherwise the winner's attack lands,
//!    followed by the winner's on-win and after-attack passives, the loser's
//!    on-lose and after-hit passives, and the loser's HP check if the loser's
//!    HP changed.
//!
//! The round stops at the first checkpoint after which either fighter is at
//! 0 HP. Moves are recorded as history once they have been thrown, even if
//! the round stopped early.

pub mod events;

use duel_core::{
    Character, Move, RoundOutcome, TriggerEvent, apply_trigger, realized_damage, winner,
};
use tracing::{debug, info, info_span};

pub use events::{BattleEvent, BattleOutcome, RoundReport, Side};

use crate::api::{MoveContext, MoveProvider, Result, RuntimeError};

/// A battle between the player's fighter and the bot's fighter.
#[derive(Debug, Clone)]
pub struct Battle {
    player: Character,
    bot: Character,
    round: u32,
    last_player_move: Option<Move>,
    last_bot_move: Option<Move>,
    /// Pre-move events of a started round; `Some` while waiting for moves.
    pending: Option<Vec<BattleEvent>>,
    outcome: Option<BattleOutcome>,
}

impl Battle {
    /// Starts a battle, resetting both fighters to their definitions.
    pub fn new(mut player: Character, mut bot: Character) -> Self {
        player.reset_stats_for_new_battle();
        bot.reset_stats_for_new_battle();
        info!(
            "Battle: {} vs {}",
            player.short_description(),
            bot.short_description()
        );

        Self {
            player,
            bot,
            round: 0,
            last_player_move: None,
            last_bot_move: None,
            pending: None,
            outcome: None,
        }
    }

    pub fn player(&self) -> &Character {
        &self.player
    }

    pub fn bot(&self) -> &Character {
        &self.bot
    }

    pub fn fighter(&self, side: Side) -> &Character {
        match side {
            Side::Player => &self.player,
            Side::Bot => &self.bot,
        }
    }

    /// Number of rounds started so far.
    pub const fn round(&self) -> u32 {
        self.round
    }

    pub const fn last_player_move(&self) -> Option<Move> {
        self.last_player_move
    }

    pub const fn last_bot_move(&self) -> Option<Move> {
        self.last_bot_move
    }

    /// Set once a fighter has been defeated.
    pub const fn outcome(&self) -> Option<BattleOutcome> {
        self.outcome
    }

    pub const fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Pre-move events of the round waiting for moves (empty otherwise).
    pub fn pending_events(&self) -> &[BattleEvent] {
        self.pending.as_deref().unwrap_or(&[])
    }

    /// What `side`'s provider gets to see.
    pub fn context(&self, side: Side) -> MoveContext<'_> {
        let (me, opponent, my_last_move, opponent_last_move) = match side {
            Side::Player => (
                &self.player,
                &self.bot,
                self.last_player_move,
                self.last_bot_move,
            ),
            Side::Bot => (
                &self.bot,
                &self.player,
                self.last_bot_move,
                self.last_player_move,
            ),
        };
        MoveContext {
            side,
            round: self.round,
            me,
            opponent,
            my_last_move,
            opponent_last_move,
            events: self.pending_events(),
        }
    }

    pub fn into_fighters(self) -> (Character, Character) {
        (self.player, self.bot)
    }

    /// Runs the pre-move phase of a new round.
    ///
    /// Returns `Some(report)` if a pre-move checkpoint ended the battle;
    /// otherwise the round waits for [`Battle::resolve_round`].
    pub fn start_round(&mut self) -> Result<Option<RoundReport>> {
        if self.outcome.is_some() {
            return Err(RuntimeError::BattleOver);
        }
        if self.pending.is_some() {
            return Err(RuntimeError::RoundInProgress { round: self.round });
        }

        self.round += 1;
        let _span = info_span!("round", round = self.round).entered();

        self.player.reset_turn_state();
        self.bot.reset_turn_state();

        let mut events = Vec::new();
        let checkpoints = [
            (Side::Player, TriggerEvent::TurnStart),
            (Side::Bot, TriggerEvent::TurnStart),
            (Side::Player, TriggerEvent::HpBelowPercent),
            (Side::Bot, TriggerEvent::HpBelowPercent),
        ];
        for (side, event) in checkpoints {
            if self.checkpoint(side, event, &mut events) {
                return Ok(Some(RoundReport {
                    round: self.round,
                    player_move: None,
                    bot_move: None,
                    result: None,
                    events,
                    finished: self.outcome,
                }));
            }
        }

        self.pending = Some(events);
        Ok(None)
    }

    /// Throws the moves of the started round and runs the post-move phase.
    pub fn resolve_round(&mut self, player_move: Move, bot_move: Move) -> Result<RoundReport> {
        if self.outcome.is_some() {
            return Err(RuntimeError::BattleOver);
        }
        let mut events = self.pending.take().ok_or(RuntimeError::RoundNotStarted)?;
        let _span = info_span!("round", round = self.round).entered();

        let result = winner(player_move, bot_move);
        match result {
            RoundOutcome::Tie => self.resolve_tie(player_move, &mut events),
            RoundOutcome::AWins => self.resolve_hit(Side::Player, player_move, bot_move, &mut events),
            RoundOutcome::BWins => self.resolve_hit(Side::Bot, bot_move, player_move, &mut events),
        }

        self.last_player_move = Some(player_move);
        self.last_bot_move = Some(bot_move);

        info!(
            "Round {}: {} {} vs {} {} -> {:?} (HP {}/{} vs {}/{})",
            self.round,
            self.player.name(),
            player_move,
            self.bot.name(),
            bot_move,
            result,
            self.player.current_hp(),
            self.player.max_hp(),
            self.bot.current_hp(),
            self.bot.max_hp()
        );

        Ok(RoundReport {
            round: self.round,
            player_move: Some(player_move),
            bot_move: Some(bot_move),
            result: Some(result),
            events,
            finished: self.outcome,
        })
    }

    /// Both phases of a round with moves known up front.
    pub fn play_round(&mut self, player_move: Move, bot_move: Move) -> Result<RoundReport> {
        if let Some(report) = self.start_round()? {
            return Ok(report);
        }
        self.resolve_round(player_move, bot_move)
    }

    /// Plays rounds until a fighter falls or `max_rounds` rounds have been
    /// started.
    pub fn run(
        &mut self,
        player: &mut dyn MoveProvider,
        bot: &mut dyn MoveProvider,
        max_rounds: u32,
    ) -> Result<BattleOutcome> {
        self.run_with(player, bot, max_rounds, |_| {})
    }

    /// Like [`Battle::run`], handing every finished round to `on_round`.
    pub fn run_with(
        &mut self,
        player: &mut dyn MoveProvider,
        bot: &mut dyn MoveProvider,
        max_rounds: u32,
        mut on_round: impl FnMut(&RoundReport),
    ) -> Result<BattleOutcome> {
        loop {
            if let Some(outcome) = self.outcome {
                return Ok(outcome);
            }
            if self.pending.is_none() && self.round >= max_rounds {
                info!("Battle: round limit of {} reached", max_rounds);
                return Ok(BattleOutcome::RoundLimit);
            }

            let report = match self.pending {
                Some(_) => self.provide_and_resolve(player, bot)?,
                None => match self.start_round()? {
                    Some(report) => report,
                    None => self.provide_and_resolve(player, bot)?,
                },
            };
            on_round(&report);
        }
    }

    fn provide_and_resolve(
        &mut self,
        player: &mut dyn MoveProvider,
        bot: &mut dyn MoveProvider,
    ) -> Result<RoundReport> {
        let player_move = player.provide_move(&self.context(Side::Player))?;
        let bot_move = bot.provide_move(&self.context(Side::Bot))?;
        self.resolve_round(player_move, bot_move)
    }

    fn resolve_tie(&mut self, played: Move, events: &mut Vec<BattleEvent>) {
        events.push(BattleEvent::Tie { played });
        if self.checkpoint(Side::Player, TriggerEvent::Tie, events) {
            return;
        }
        self.checkpoint(Side::Bot, TriggerEvent::Tie, events);
    }

    fn resolve_hit(
        &mut self,
        attacker: Side,
        attacker_move: Move,
        defender_move: Move,
        events: &mut Vec<BattleEvent>,
    ) {
        let defender = attacker.opponent();
        let (winner, loser) = self.fighters_mut(attacker);
        let hp_before = loser.current_hp();
        let damage = realized_damage(winner, attacker_move);
        loser.take_damage(damage);

        events.push(BattleEvent::Hit {
            attacker,
            attacker_move,
            defender_move,
            damage,
            defender_hp: loser.current_hp(),
        });

        let checkpoints = [
            (attacker, TriggerEvent::WonWith(attacker_move)),
            (attacker, TriggerEvent::AfterAnyAttack),
            (defender, TriggerEvent::LostTo(defender_move)),
            (defender, TriggerEvent::AfterTakingHit),
        ];
        for (side, event) in checkpoints {
            if self.checkpoint(side, event, events) {
                return;
            }
        }

        if self.fighter(defender).current_hp() != hp_before {
            self.checkpoint(defender, TriggerEvent::HpBelowPercent, events);
        }
    }

    /// Fires `side`'s passives for `event`; true if the battle is now decided.
    fn checkpoint(&mut self, side: Side, event: TriggerEvent, events: &mut Vec<BattleEvent>) -> bool {
        let (owner, opponent) = self.fighters_mut(side);
        for activation in apply_trigger(event, owner, opponent) {
            debug!(%side, ?event, "passive activation recorded");
            events.push(BattleEvent::Passive { side, activation });
        }
        self.check_defeat(events)
    }

    fn check_defeat(&mut self, events: &mut Vec<BattleEvent>) -> bool {
        let player_down = self.player.is_defeated();
        let bot_down = self.bot.is_defeated();
        let outcome = match (player_down, bot_down) {
            (false, false) => return false,
            (true, true) => BattleOutcome::DoubleKnockout,
            (true, false) => BattleOutcome::BotWins,
            (false, true) => BattleOutcome::PlayerWins,
        };

        if player_down {
            events.push(BattleEvent::Defeated { side: Side::Player });
        }
        if bot_down {
            events.push(BattleEvent::Defeated { side: Side::Bot });
        }
        info!("Battle: {} after round {}", outcome, self.round);
        self.outcome = Some(outcome);
        true
    }

    fn fighters_mut(&mut self, side: Side) -> (&mut Character, &mut Character) {
        match side {
            Side::Player => (&mut self.player, &mut self.bot),
            Side::Bot => (&mut self.bot, &mut self.player),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::{CharacterKind, MoveDamage};

    fn plain(name: &str, hp: u32) -> Character {
        Character::new(name, CharacterKind::Custom, hp, MoveDamage::new(1, 2, 3), [])
            .expect("valid")
    }

    #[test]
    fn new_battle_resets_fighters() {
        let mut player = plain("A", 10);
        player.take_damage(7);
        player.add_bonus_damage_next_attack(4);

        let battle = Battle::new(player, plain("B", 10));
        assert_eq!(battle.player().current_hp(), 10);
        assert_eq!(battle.player().bonus_damage_next_attack(), 0);
        assert_eq!(battle.round(), 0);
        assert_eq!(battle.last_player_move(), None);
    }

    #[test]
    fn phases_must_alternate() {
        let mut battle = Battle::new(plain("A", 10), plain("B", 10));
        assert!(matches!(
            battle.resolve_round(Move::Rock, Move::Rock),
            Err(RuntimeError::RoundNotStarted)
        ));

        assert!(battle.start_round().expect("first round").is_none());
        assert!(matches!(
            battle.start_round(),
            Err(RuntimeError::RoundInProgress { round: 1 })
        ));
        battle.resolve_round(Move::Rock, Move::Rock).expect("resolves");
    }

    #[test]
    fn winner_deals_damage_and_history_updates() {
        let mut battle = Battle::new(plain("A", 10), plain("B", 10));
        let report = battle.play_round(Move::Scissors, Move::Paper).expect("round");

        assert_eq!(report.result, Some(RoundOutcome::AWins));
        assert_eq!(battle.bot().current_hp(), 7);
        assert_eq!(battle.last_player_move(), Some(Move::Scissors));
        assert_eq!(battle.last_bot_move(), Some(Move::Paper));
        assert!(matches!(
            report.events.as_slice(),
            [BattleEvent::Hit { attacker: Side::Player, damage: 3, defender_hp: 7, .. }]
        ));
    }

    #[test]
    fn finished_battle_rejects_rounds() {
        let mut battle = Battle::new(plain("A", 10), plain("B", 3));
        let report = battle.play_round(Move::Scissors, Move::Paper).expect("round");
        assert_eq!(report.finished, Some(BattleOutcome::PlayerWins));
        assert!(matches!(
            battle.play_round(Move::Rock, Move::Rock),
            Err(RuntimeError::BattleOver)
        ));
    }
}
