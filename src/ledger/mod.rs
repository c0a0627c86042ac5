//! Ledger implementations.
//!
//! [`InMemoryLedger`] is a complete custody book suitable for tests,
//! simulations and single-process embedding.  Production deployments plug
//! their own [`Ledger`](crate::traits::Ledger) in front of real custody.

mod memory;

pub use memory::InMemoryLedger;
