//! Unified error types for the pair engine.
//!
//! Every fallible operation in the crate returns [`AmmError`].  All variants
//! are terminal for the attempted operation: when one is returned, no pair
//! state was committed and no effect was handed to the ledger.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;

/// Errors produced by the platform, the registry, the pricing math and the
/// ledger collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AmmError {
    /// Protocol fee rate above 10 000 basis points.
    #[error("invalid fee rate: {0}bp exceeds 10000bp")]
    InvalidFeeRate(u16),

    /// The platform record has already been created.
    #[error("platform is already configured")]
    AlreadyConfigured,

    /// An operation needed the platform record before it was created.
    #[error("platform is not configured")]
    NotConfigured,

    /// The caller is not the platform administrator.
    #[error("caller is not authorized for this action")]
    Unauthorized,

    /// Swaps and liquidity changes are suspended.
    #[error("platform is paused")]
    PlatformPaused,

    /// A pair with the same ordered key already exists.
    #[error("pair already exists")]
    PairAlreadyExists,

    /// No pair is registered under the requested key.
    #[error("pair not found")]
    PairNotFound,

    /// Both sides of a pair are the same asset.
    #[error("invalid pair: {0}")]
    InvalidPair(&'static str),

    /// A required amount was zero.
    #[error("amount must be non-zero: {0}")]
    ZeroAmount(&'static str),

    /// The ledger could not debit an asset balance.
    #[error("insufficient funds")]
    InsufficientFunds,

    /// The share balance (or the pair's share supply) is below the request.
    #[error("insufficient shares")]
    InsufficientShares,

    /// The pair has no liquidity to trade against.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// A deposit was too small to mint a single share.
    #[error("deposit too small to mint shares")]
    InsufficientLiquidityMinted,

    /// The computed output is below the caller's minimum.
    #[error("slippage exceeded: got {actual}, minimum {minimum}")]
    SlippageExceeded {
        /// Amount the trade or withdrawal would deliver.
        actual: u64,
        /// Minimum the caller accepted.
        minimum: u64,
    },

    /// Fee, reserve or share arithmetic left the representable range.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),

    /// Division by a zero reserve or supply.
    #[error("division by zero")]
    DivisionByZero,

    /// Platform settings could not be parsed.
    #[error("invalid settings: {0}")]
    InvalidSettings(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            AmmError::InvalidFeeRate(10_001).to_string(),
            "invalid fee rate: 10001bp exceeds 10000bp"
        );
        assert_eq!(
            AmmError::SlippageExceeded {
                actual: 5,
                minimum: 6
            }
            .to_string(),
            "slippage exceeded: got 5, minimum 6"
        );
        assert_eq!(
            AmmError::ArithmeticOverflow("k").to_string(),
            "arithmetic overflow: k"
        );
    }

    #[test]
    fn is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<AmmError>();
    }
}
