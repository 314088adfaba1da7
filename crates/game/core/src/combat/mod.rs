//! Round resolution: who wins a throw and how much the winner hits for.
//!
//! Everything here is a pure function of its inputs except
//! [`realized_damage`], which consumes the attacker's pending bonus.

pub mod damage;
pub mod moves;

pub use damage::{estimated_damage, realized_damage};
pub use moves::{Move, RoundOutcome, winner};
