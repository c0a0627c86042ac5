//! Swap pricing trait.
//!
//! [`SwapEngine`] computes a single-hop constant-product trade against a
//! pair snapshot.  It is pure: the returned [`SwapQuote`] carries the pair
//! state that *would* result, and nothing changes until the engine commits
//! that state after the ledger accepted the quote's effects.
//!
//! # Fee Deduction
//!
//! Only the platform-level protocol fee is charged, and it is skimmed from
//! the input **before** the pricing formula runs:
//!
//! ```text
//! protocol_fee    = floor(amount_in × rate_bps / 10_000)
//! amount_in_net   = amount_in − protocol_fee
//! k               = reserve_in × reserve_out
//! new_reserve_in  = reserve_in + amount_in_net
//! new_reserve_out = floor(k / new_reserve_in)
//! amount_out      = reserve_out − new_reserve_out
//! ```
//!
//! There is no liquidity-provider fee and no fee on the output leg.

use crate::domain::{Amount, BasisPoints, SwapDirection};
use crate::error::AmmError;
use crate::pools::SwapQuote;

/// Constant-product pricing for a two-asset pair.
pub trait SwapEngine {
    /// Quotes a swap of `amount_in` in `direction` at `protocol_fee_rate`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if `amount_in` is zero.
    /// - [`AmmError::InsufficientLiquidity`] if the pair holds no liquidity
    ///   or the trade would empty the output reserve.
    /// - [`AmmError::SlippageExceeded`] if the output is below
    ///   `min_amount_out`.
    /// - [`AmmError::ArithmeticOverflow`] if the input reserve would leave
    ///   the `u64` range.
    fn quote_swap(
        &self,
        amount_in: Amount,
        min_amount_out: Amount,
        direction: SwapDirection,
        protocol_fee_rate: BasisPoints,
    ) -> Result<SwapQuote, AmmError>;
}
