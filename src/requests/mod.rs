//! Typed requests and the [`Instruction`] enum.
//!
//! Each request validates its fields in `new` and exposes `validate()` to
//! re-check a value built some other way.  Checks that depend on state
//! (pause flag, pair existence, balances) belong to the engine and the
//! ledger, not here.

mod admin;
mod instruction;
mod pair;
mod swap;

pub use admin::{SetPause, UpdateFeeRate};
pub use instruction::Instruction;
pub use pair::{AddLiquidity, CreatePair, RemoveLiquidity};
pub use swap::Swap;
