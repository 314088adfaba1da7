//! Narration types produced by the battle loop.

use std::fmt;

use duel_core::{Move, PassiveActivation, RoundOutcome};

/// One of the two fighters.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Bot,
}

impl Side {
    pub const fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Bot,
            Side::Bot => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Side::Player => "player",
            Side::Bot => "bot",
        };
        write!(f, "{}", label)
    }
}

/// Something that happened during a round, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleEvent {
    /// A passive of `side` fired.
    Passive {
        side: Side,
        activation: PassiveActivation,
    },

    /// Both sides threw the same move.
    Tie { played: Move },

    /// The round winner's attack landed.
    Hit {
        attacker: Side,
        attacker_move: Move,
        defender_move: Move,
        damage: u32,
        defender_hp: u32,
    },

    /// `side` reached 0 HP.
    Defeated { side: Side },
}

/// How a battle ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BattleOutcome {
    PlayerWins,
    BotWins,
    /// Both fighters fell in the same step.
    DoubleKnockout,
    /// The round cap was reached with both fighters standing.
    RoundLimit,
}

impl fmt::Display for BattleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BattleOutcome::PlayerWins => "player wins",
            BattleOutcome::BotWins => "bot wins",
            BattleOutcome::DoubleKnockout => "double knockout",
            BattleOutcome::RoundLimit => "round limit reached",
        };
        write!(f, "{}", label)
    }
}

/// Everything that happened in one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    /// 1-based round number.
    pub round: u32,
    /// `None` when the round ended before moves were thrown.
    pub player_move: Option<Move>,
    pub bot_move: Option<Move>,
    /// Round result from the player's point of view.
    pub result: Option<RoundOutcome>,
    pub events: Vec<BattleEvent>,
    /// Set when this round ended the battle.
    pub finished: Option<BattleOutcome>,
}

impl RoundReport {
    /// Passive activations of `side`, in firing order.
    pub fn activations(&self, side: Side) -> impl Iterator<Item = &PassiveActivation> {
        self.events.iter().filter_map(move |event| match event {
            BattleEvent::Passive { side: s, activation } if *s == side => Some(activation),
            _ => None,
        })
    }
}
