//! Fundamental domain value types used throughout the engine.
//!
//! Amounts, shares, rates and identifiers are newtypes so that a reserve can
//! never be passed where a share count is expected, and a fee rate can never
//! be confused with an amount.

mod address;
mod amount;
mod basis_points;
mod effect;
mod pair_key;
mod shares;
mod swap_direction;

pub use address::{AccountId, AssetId};
pub use amount::Amount;
pub use basis_points::BasisPoints;
pub use effect::{Effect, Holder};
pub use pair_key::PairKey;
pub use shares::Shares;
pub use swap_direction::SwapDirection;
