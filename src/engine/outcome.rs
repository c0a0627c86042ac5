//! Results returned by [`Engine::execute`](super::Engine::execute).

use serde::Serialize;

use crate::domain::BasisPoints;
use crate::pools::{Deposit, Pair, SwapQuote, Withdrawal};

/// What a successfully executed [`Instruction`](crate::requests::Instruction)
/// did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// The platform record was created.
    Configured,
    /// A new, empty pair was registered.
    PairCreated(Pair),
    /// Liquidity was added.
    Deposited(Deposit),
    /// Liquidity was removed.
    Withdrew(Withdrawal),
    /// A swap was executed.
    Swapped(SwapQuote),
    /// The pause flag now has this value.
    PauseSet(bool),
    /// The protocol fee rate is now this value.
    FeeRateUpdated(BasisPoints),
}

impl Outcome {
    /// Returns the pair state after the operation, if it touched a pair.
    #[must_use]
    pub const fn pair(&self) -> Option<Pair> {
        match self {
            Self::PairCreated(pair) => Some(*pair),
            Self::Deposited(d) => Some(d.pair_after()),
            Self::Withdrew(w) => Some(w.pair_after()),
            Self::Swapped(q) => Some(q.pair_after()),
            Self::Configured | Self::PauseSet(_) | Self::FeeRateUpdated(_) => None,
        }
    }
}
