//! Basis-point representation for fee rates.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Amount;
use crate::error::AmmError;

/// Denominator that represents 100%.
const BPS_DENOMINATOR: u16 = 10_000;

/// A rate expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// Every `u16` is representable, but only `0..=10_000` is a valid rate.
/// Use [`validated`](Self::validated) wherever a rate crosses into the
/// platform record.
///
/// # Examples
///
/// ```
/// use hydra_pairs::domain::{Amount, BasisPoints};
///
/// let rate = BasisPoints::new(250);
/// assert!(rate.is_valid_percent());
/// assert_eq!(rate.apply(Amount::new(10_000_000)).ok(), Some(Amount::new(250_000)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BasisPoints(u16);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(BPS_DENOMINATOR);

    /// Creates a new `BasisPoints` from a raw `u16` value.
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Creates a `BasisPoints`, rejecting values above 100%.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFeeRate`] if `value > 10_000`.
    pub const fn validated(value: u16) -> crate::error::Result<Self> {
        if !Self(value).is_valid_percent() {
            return Err(AmmError::InvalidFeeRate(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying `u16` value.
    #[must_use]
    pub const fn get(&self) -> u16 {
        self.0
    }

    /// Returns `true` if the value is in `0..=10_000`.
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= BPS_DENOMINATOR
    }

    /// Computes `floor(amount * self / 10_000)`.
    ///
    /// The product is formed in `u128`; the result never exceeds `amount`
    /// for a valid rate.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the result does not fit
    /// in an [`Amount`], which only happens for rates above 100%.
    pub const fn apply(&self, amount: Amount) -> crate::error::Result<Amount> {
        let product = amount.widen() * self.0 as u128;
        match Amount::from_wide(product / BPS_DENOMINATOR as u128) {
            Some(v) => Ok(v),
            None => Err(AmmError::ArithmeticOverflow("basis points apply overflow")),
        }
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
