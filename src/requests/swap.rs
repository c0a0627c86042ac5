//! The swap request.

use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, Amount, PairKey, SwapDirection};
use crate::error::AmmError;

/// Sell an exact `amount_in` of one side of a pair for the other.
///
/// # Validation
///
/// - `amount_in` must be non-zero.
///
/// `min_amount_out` may be zero, which accepts any output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Swap {
    caller: AccountId,
    pair: PairKey,
    amount_in: Amount,
    min_amount_out: Amount,
    direction: SwapDirection,
}

impl Swap {
    /// Creates a new `Swap` request.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ZeroAmount`] if `amount_in` is zero.
    pub fn new(
        caller: AccountId,
        pair: PairKey,
        amount_in: Amount,
        min_amount_out: Amount,
        direction: SwapDirection,
    ) -> Result<Self, AmmError> {
        let request = Self {
            caller,
            pair,
            amount_in,
            min_amount_out,
            direction,
        };
        request.validate()?;
        Ok(request)
    }

    /// Validates all request invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ZeroAmount`] if `amount_in` is zero.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.amount_in.is_zero() {
            return Err(AmmError::ZeroAmount("amount_in"));
        }
        Ok(())
    }

    /// Returns the trader.
    #[must_use]
    pub const fn caller(&self) -> AccountId {
        self.caller
    }

    /// Returns the target pair.
    #[must_use]
    pub const fn pair(&self) -> PairKey {
        self.pair
    }

    /// Returns the gross input.
    #[must_use]
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the minimum acceptable output.
    #[must_use]
    pub const fn min_amount_out(&self) -> Amount {
        self.min_amount_out
    }

    /// Returns the trade direction.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }
}
