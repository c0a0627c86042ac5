//! Share accounting trait for deposits and withdrawals.
//!
//! # Share Supply Invariant
//!
//! [`LiquidityAccounting::share_supply`] only changes through a committed
//! [`Deposit`] or [`Withdrawal`].  Swaps never mint or burn shares.  Both
//! reserves are zero exactly when the supply is zero.
//!
//! # Rounding
//!
//! Every division floors, so neither a depositor nor a withdrawing provider
//! can receive a fraction of a unit at the other providers' expense.

use crate::domain::{Amount, Shares};
use crate::error::AmmError;
use crate::pools::{Deposit, Withdrawal};

/// Share minting and burning for a two-asset pair.
pub trait LiquidityAccounting {
    /// Plans a deposit of `amount_a` and `amount_b`.
    ///
    /// The first deposit into an empty pair mints
    /// `floor(sqrt(amount_a × amount_b))` shares.  Later deposits mint
    /// `min(floor(amount_a × T / reserve_a), floor(amount_b × T / reserve_b))`
    /// where `T` is the share supply.  Reserves always grow by the exact
    /// amounts supplied; an unbalanced deposit is not clipped, it simply
    /// mints fewer shares.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if either amount is zero.
    /// - [`AmmError::InsufficientLiquidityMinted`] if no share would be
    ///   minted.
    /// - [`AmmError::ArithmeticOverflow`] if reserves or supply overflow.
    fn plan_deposit(&self, amount_a: Amount, amount_b: Amount) -> Result<Deposit, AmmError>;

    /// Plans burning `shares` for a proportional slice of both reserves.
    ///
    /// `amount_x = floor(shares × reserve_x / T)`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if `shares` is zero or both outputs round
    ///   to zero.
    /// - [`AmmError::InsufficientShares`] if `shares` exceeds the supply.
    /// - [`AmmError::SlippageExceeded`] if either output is below its
    ///   minimum.
    fn plan_withdrawal(
        &self,
        shares: Shares,
        min_amount_a: Amount,
        min_amount_b: Amount,
    ) -> Result<Withdrawal, AmmError>;

    /// Returns the outstanding share supply.
    #[must_use]
    fn share_supply(&self) -> Shares;
}
