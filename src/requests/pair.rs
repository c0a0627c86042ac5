//! Requests that create pairs or change their liquidity.

use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, Amount, AssetId, PairKey, Shares};
use crate::error::AmmError;

/// Register a new pair under the literal key `(asset_a, asset_b)`.
///
/// # Validation
///
/// - The two assets must differ (checked by [`PairKey::new`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreatePair {
    key: PairKey,
}

impl CreatePair {
    /// Creates a new `CreatePair` request.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPair`] if both assets are the same.
    pub fn new(asset_a: AssetId, asset_b: AssetId) -> Result<Self, AmmError> {
        Ok(Self {
            key: PairKey::new(asset_a, asset_b)?,
        })
    }

    /// Validates all request invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPair`] if both assets are the same.
    pub fn validate(&self) -> Result<(), AmmError> {
        PairKey::new(self.key.asset_a(), self.key.asset_b()).map(|_| ())
    }

    /// Returns the key to register.
    #[must_use]
    pub const fn key(&self) -> PairKey {
        self.key
    }
}

/// Deposit both assets into a pair in exchange for shares.
///
/// # Validation
///
/// - Both amounts must be non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddLiquidity {
    caller: AccountId,
    pair: PairKey,
    amount_a: Amount,
    amount_b: Amount,
}

impl AddLiquidity {
    /// Creates a new `AddLiquidity` request.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ZeroAmount`] if either amount is zero.
    pub fn new(
        caller: AccountId,
        pair: PairKey,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<Self, AmmError> {
        let request = Self {
            caller,
            pair,
            amount_a,
            amount_b,
        };
        request.validate()?;
        Ok(request)
    }

    /// Validates all request invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ZeroAmount`] if either amount is zero.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.amount_a.is_zero() {
            return Err(AmmError::ZeroAmount("amount_a"));
        }
        if self.amount_b.is_zero() {
            return Err(AmmError::ZeroAmount("amount_b"));
        }
        Ok(())
    }

    /// Returns the depositor.
    #[must_use]
    pub const fn caller(&self) -> AccountId {
        self.caller
    }

    /// Returns the target pair.
    #[must_use]
    pub const fn pair(&self) -> PairKey {
        self.pair
    }

    /// Returns the amount of the first asset.
    #[must_use]
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Returns the amount of the second asset.
    #[must_use]
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }
}

/// Burn shares for a proportional slice of both reserves.
///
/// # Validation
///
/// - `shares` must be non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemoveLiquidity {
    caller: AccountId,
    pair: PairKey,
    shares: Shares,
    min_amount_a: Amount,
    min_amount_b: Amount,
}

impl RemoveLiquidity {
    /// Creates a new `RemoveLiquidity` request.
    ///
    /// Pass [`Amount::ZERO`] as a minimum to accept any payout on that side.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ZeroAmount`] if `shares` is zero.
    pub fn new(
        caller: AccountId,
        pair: PairKey,
        shares: Shares,
        min_amount_a: Amount,
        min_amount_b: Amount,
    ) -> Result<Self, AmmError> {
        let request = Self {
            caller,
            pair,
            shares,
            min_amount_a,
            min_amount_b,
        };
        request.validate()?;
        Ok(request)
    }

    /// Validates all request invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ZeroAmount`] if `shares` is zero.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.shares.is_zero() {
            return Err(AmmError::ZeroAmount("shares"));
        }
        Ok(())
    }

    /// Returns the share owner.
    #[must_use]
    pub const fn caller(&self) -> AccountId {
        self.caller
    }

    /// Returns the target pair.
    #[must_use]
    pub const fn pair(&self) -> PairKey {
        self.pair
    }

    /// Returns the number of shares to burn.
    #[must_use]
    pub const fn shares(&self) -> Shares {
        self.shares
    }

    /// Returns the minimum acceptable payout of the first asset.
    #[must_use]
    pub const fn min_amount_a(&self) -> Amount {
        self.min_amount_a
    }

    /// Returns the minimum acceptable payout of the second asset.
    #[must_use]
    pub const fn min_amount_b(&self) -> Amount {
        self.min_amount_b
    }
}
