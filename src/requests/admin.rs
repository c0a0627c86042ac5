//! Administrator-only requests.

use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, BasisPoints};
use crate::error::AmmError;

/// Set or clear the platform pause flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetPause {
    caller: AccountId,
    pause: bool,
}

impl SetPause {
    /// Creates a new `SetPause` request.
    #[must_use]
    pub const fn new(caller: AccountId, pause: bool) -> Self {
        Self { caller, pause }
    }

    /// Returns the caller whose identity is checked against the admin.
    #[must_use]
    pub const fn caller(&self) -> AccountId {
        self.caller
    }

    /// Returns the requested pause state.
    #[must_use]
    pub const fn pause(&self) -> bool {
        self.pause
    }
}

/// Replace the protocol fee rate.
///
/// # Validation
///
/// - The rate must be in `0..=10_000` basis points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UpdateFeeRate {
    caller: AccountId,
    fee_rate: BasisPoints,
}

impl UpdateFeeRate {
    /// Creates a new `UpdateFeeRate` request.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFeeRate`] if `fee_rate > 10_000bp`.
    pub fn new(caller: AccountId, fee_rate: BasisPoints) -> Result<Self, AmmError> {
        let request = Self { caller, fee_rate };
        request.validate()?;
        Ok(request)
    }

    /// Validates all request invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFeeRate`] if the rate exceeds 100%.
    pub fn validate(&self) -> Result<(), AmmError> {
        BasisPoints::validated(self.fee_rate.get()).map(|_| ())
    }

    /// Returns the caller whose identity is checked against the admin.
    #[must_use]
    pub const fn caller(&self) -> AccountId {
        self.caller
    }

    /// Returns the new rate.
    #[must_use]
    pub const fn fee_rate(&self) -> BasisPoints {
        self.fee_rate
    }
}
