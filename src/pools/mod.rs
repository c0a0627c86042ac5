//! The pair record and its pricing and share accounting.
//!
//! | Item | Role |
//! |------|------|
//! | [`Pair`] | Reserves and share supply of one ordered pair |
//! | [`Deposit`] / [`Withdrawal`] | Planned liquidity changes ([`LiquidityAccounting`](crate::traits::LiquidityAccounting)) |
//! | [`SwapQuote`] | A priced trade ([`SwapEngine`](crate::traits::SwapEngine)) |
//!
//! Everything here is pure.  Committing a plan, and keeping it in step
//! with the ledger, is the [`Engine`](crate::engine::Engine)'s job.

mod liquidity;
mod pair;
mod swap;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use liquidity::{Deposit, Withdrawal};
pub use pair::Pair;
pub use swap::SwapQuote;
