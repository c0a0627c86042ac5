//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use hydra_pairs::prelude::*;
//! ```

pub use crate::domain::{
    AccountId, Amount, AssetId, BasisPoints, Effect, Holder, PairKey, Shares, SwapDirection,
};

pub use crate::traits::{Ledger, LiquidityAccounting, SwapEngine};

pub use crate::math::CheckedArithmetic;

pub use crate::platform::{PlatformConfig, PlatformSettings};

pub use crate::requests::{
    AddLiquidity, CreatePair, Instruction, RemoveLiquidity, SetPause, Swap, UpdateFeeRate,
};

pub use crate::error::{AmmError, Result};

pub use crate::engine::{Engine, Outcome};
pub use crate::ledger::InMemoryLedger;
pub use crate::pools::{Deposit, Pair, SwapQuote, Withdrawal};
pub use crate::registry::PoolRegistry;
