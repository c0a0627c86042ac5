//! Core trait abstractions.
//!
//! [`SwapEngine`] and [`LiquidityAccounting`] are the pricing and share
//! accounting seams implemented by [`Pair`](crate::pools::Pair);
//! [`Ledger`] is the seam to the external collaborator that moves balances.

mod ledger;
mod liquidity_accounting;
mod swap_engine;

pub use ledger::Ledger;
pub use liquidity_accounting::LiquidityAccounting;
pub use swap_engine::SwapEngine;
