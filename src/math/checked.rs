//! Checked arithmetic trait for domain wrapper types.
//!
//! The [`CheckedArithmetic`] trait lifts the `Option`-returning checked
//! operations of [`Amount`] and [`Shares`] into
//! [`Result<Self, AmmError>`](crate::error::AmmError), so that reserve and
//! supply updates can be chained with `?`.
//!
//! # Examples
//!
//! ```
//! use hydra_pairs::domain::Amount;
//! use hydra_pairs::math::CheckedArithmetic;
//!
//! let reserve = Amount::new(1_000);
//! let after = reserve.safe_add(&Amount::new(250), "reserve_in").expect("fits");
//! assert_eq!(after, Amount::new(1_250));
//! ```

use crate::domain::{Amount, Shares};
use crate::error::AmmError;

/// Fallible arithmetic for domain wrapper types.
///
/// Every failure is reported as [`AmmError::ArithmeticOverflow`] tagged with
/// the caller-supplied name of the quantity being computed.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation or wrapping**: errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the result exceeds the
    /// representable range.
    fn safe_add(&self, other: &Self, what: &'static str) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the result would be
    /// negative.
    fn safe_sub(&self, other: &Self, what: &'static str) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self, what: &'static str) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::ArithmeticOverflow(what))
    }

    #[inline]
    fn safe_sub(&self, other: &Self, what: &'static str) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::ArithmeticOverflow(what))
    }
}

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self, what: &'static str) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::ArithmeticOverflow(what))
    }

    #[inline]
    fn safe_sub(&self, other: &Self, what: &'static str) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::ArithmeticOverflow(what))
    }
}

/// Computes `floor(a * b / denominator)` with a `u128` intermediate.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
/// - [`AmmError::ArithmeticOverflow`] if `a * b` does not fit in `u128`.
pub fn mul_div_floor(
    a: u128,
    b: u128,
    denominator: u128,
    what: &'static str,
) -> Result<u128, AmmError> {
    if denominator == 0 {
        return Err(AmmError::DivisionByZero);
    }
    let product = a.checked_mul(b).ok_or(AmmError::ArithmeticOverflow(what))?;
    Ok(product / denominator)
}
