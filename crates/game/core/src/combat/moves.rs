//! Move identities and round outcome resolution.

/// One of the three moves a fighter can throw each round.
///
/// The discriminants are the stable numeric ids used by the roster format
/// and by the passive trigger ids (`ON_WIN_<MOVE>` = id, `ON_LOSE_<MOVE>` =
/// id + 3).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Move {
    Rock = 1,
    Paper = 2,
    Scissors = 3,
}

impl Move {
    /// All moves in id order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Returns the stable numeric id (1..=3).
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Looks up a move by its numeric id. `0` and anything above `3` yield `None`.
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Move::Rock),
            2 => Some(Move::Paper),
            3 => Some(Move::Scissors),
            _ => None,
        }
    }

    /// The move this one defeats.
    pub const fn beats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    /// The move that defeats this one.
    pub const fn beaten_by(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }
}

/// Result of comparing two moves, seen from the first argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundOutcome {
    Tie,
    AWins,
    BWins,
}

/// Resolves a single throw.
///
/// Rock beats Scissors, Paper beats Rock, Scissors beats Paper; equal moves tie.
pub const fn winner(a: Move, b: Move) -> RoundOutcome {
    if a as u8 == b as u8 {
        RoundOutcome::Tie
    } else if a.beats() as u8 == b as u8 {
        RoundOutcome::AWins
    } else {
        RoundOutcome::BWins
    }
}
