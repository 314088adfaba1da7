//! Passive triggers and the events that can satisfy them.

use core::fmt;

use crate::combat::Move;

/// The game event a passive listens for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PassiveTrigger {
    /// Never fires.
    #[default]
    None,
    /// The owner won the round with the given move.
    OnWinWith(Move),
    /// The owner lost the round while throwing the given move.
    OnLoseTo(Move),
    OnTie,
    /// Owner HP is at or below the passive's threshold percentage.
    OnHpBelowPercent,
    OnTurnStart,
    /// The owner landed an attack this round.
    AfterAnyAttack,
    /// The owner was hit this round.
    AfterTakingHit,
}

impl PassiveTrigger {
    /// Highest trigger id accepted by [`PassiveTrigger::from_id`].
    pub const MAX_ID: u8 = 11;

    /// Stable numeric id used by the roster format.
    pub const fn id(self) -> u8 {
        match self {
            Self::None => 0,
            Self::OnWinWith(m) => m.id(),
            Self::OnLoseTo(m) => m.id() + 3,
            Self::OnTie => 7,
            Self::OnHpBelowPercent => 8,
            Self::OnTurnStart => 9,
            Self::AfterAnyAttack => 10,
            Self::AfterTakingHit => 11,
        }
    }

    pub const fn from_id(id: u8) -> Option<Self> {
        Some(match id {
            0 => Self::None,
            1 => Self::OnWinWith(Move::Rock),
            2 => Self::OnWinWith(Move::Paper),
            3 => Self::OnWinWith(Move::Scissors),
            4 => Self::OnLoseTo(Move::Rock),
            5 => Self::OnLoseTo(Move::Paper),
            6 => Self::OnLoseTo(Move::Scissors),
            7 => Self::OnTie,
            8 => Self::OnHpBelowPercent,
            9 => Self::OnTurnStart,
            10 => Self::AfterAnyAttack,
            11 => Self::AfterTakingHit,
            _ => return None,
        })
    }

    /// Returns true if this trigger is satisfied by `event`.
    ///
    /// HP-threshold passives are never matched here; they depend on the
    /// owner's HP and are handled by the resolver's dedicated path.
    pub fn matches(self, event: TriggerEvent) -> bool {
        match (self, event) {
            (Self::OnWinWith(m), TriggerEvent::WonWith(played)) => m == played,
            (Self::OnLoseTo(m), TriggerEvent::LostTo(played)) => m == played,
            (Self::OnTie, TriggerEvent::Tie)
            | (Self::OnTurnStart, TriggerEvent::TurnStart)
            | (Self::AfterAnyAttack, TriggerEvent::AfterAnyAttack)
            | (Self::AfterTakingHit, TriggerEvent::AfterTakingHit) => true,
            _ => false,
        }
    }
}

impl fmt::Display for PassiveTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("No trigger"),
            Self::OnWinWith(m) => write!(f, "On winning with {m}"),
            Self::OnLoseTo(m) => write!(f, "On losing to {m}"),
            Self::OnTie => f.write_str("On a tie"),
            Self::OnHpBelowPercent => f.write_str("When HP is below a threshold"),
            Self::OnTurnStart => f.write_str("At the start of your turn"),
            Self::AfterAnyAttack => f.write_str("After you attack"),
            Self::AfterTakingHit => f.write_str("After taking damage"),
        }
    }
}

/// A checkpoint raised by the battle loop.
///
/// Win/lose events carry the move the owner threw, which is how the
/// `(move, did_win)` pair of a round reaches the matcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TriggerEvent {
    WonWith(Move),
    LostTo(Move),
    Tie,
    TurnStart,
    AfterAnyAttack,
    AfterTakingHit,
    /// Re-check HP thresholds after HP may have changed.
    HpBelowPercent,
}

impl TriggerEvent {
    /// Builds the event for a round result seen from one participant.
    pub const fn from_round(played: Move, did_win: bool) -> Self {
        if did_win {
            Self::WonWith(played)
        } else {
            Self::LostTo(played)
        }
    }
}
