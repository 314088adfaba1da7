//! Unified error types surfaced by the runtime API.
//!
//! Wraps definition failures and move provider failures so clients can bubble
//! them up with consistent context.

use duel_core::DefinitionError;
use thiserror::Error;

use crate::battle::Side;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    #[error("{side} move provider has no moves left")]
    ProviderExhausted { side: Side },

    #[error("{side} move input closed")]
    InputClosed { side: Side },

    #[error("failed to read {side} move")]
    Input {
        side: Side,
        #[source]
        source: std::io::Error,
    },

    #[error("the battle is already over")]
    BattleOver,

    #[error("round {round} is waiting for moves")]
    RoundInProgress { round: u32 },

    #[error("no round has been started")]
    RoundNotStarted,
}
