//! Arithmetic utilities for pair calculations.
//!
//! All share and pricing formulas run on `u64` amounts widened to `u128`
//! intermediates.  Division always floors; nothing in the engine rounds in
//! the caller's favor.

mod checked;
mod sqrt;

pub use checked::{mul_div_floor, CheckedArithmetic};
pub use sqrt::isqrt;
