//! Which side of a pair a trade sells.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{AssetId, PairKey};

/// Direction of a single-hop swap relative to a pair's creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapDirection {
    /// Sell asset A, receive asset B.
    AToB,
    /// Sell asset B, receive asset A.
    BToA,
}

impl SwapDirection {
    /// Maps the wire-level `input_is_asset_a` flag to a direction.
    #[must_use]
    pub const fn from_input_is_asset_a(input_is_asset_a: bool) -> Self {
        if input_is_asset_a {
            Self::AToB
        } else {
            Self::BToA
        }
    }

    /// Returns `true` when the input asset is the pair's asset A.
    #[must_use]
    pub const fn input_is_asset_a(&self) -> bool {
        matches!(self, Self::AToB)
    }

    /// The asset the caller sells.
    #[must_use]
    pub const fn input_asset(&self, key: &PairKey) -> AssetId {
        match self {
            Self::AToB => key.asset_a(),
            Self::BToA => key.asset_b(),
        }
    }

    /// The asset the caller receives.
    #[must_use]
    pub const fn output_asset(&self, key: &PairKey) -> AssetId {
        match self {
            Self::AToB => key.asset_b(),
            Self::BToA => key.asset_a(),
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AToB => write!(f, "A->B"),
            Self::BToA => write!(f, "B->A"),
        }
    }
}
