//! Literal ordered key identifying a pair.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::AssetId;
use crate::error::AmmError;

/// The key under which a pair is registered: two distinct assets in the
/// order they were supplied at creation.
///
/// The key is deliberately **not** canonicalized.  `(X, Y)` and `(Y, X)`
/// are different keys and address two independent pools.
///
/// # Examples
///
/// ```
/// use hydra_pairs::domain::{AssetId, PairKey};
///
/// let x = AssetId::from_bytes([1u8; 32]);
/// let y = AssetId::from_bytes([2u8; 32]);
///
/// let xy = PairKey::new(x, y).expect("distinct assets");
/// let yx = PairKey::new(y, x).expect("distinct assets");
/// assert_ne!(xy, yx);
/// assert_eq!(xy.asset_a(), yx.asset_b());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PairKey {
    asset_a: AssetId,
    asset_b: AssetId,
}

impl PairKey {
    /// Creates a key from two distinct assets, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPair`] if both assets are the same.
    pub fn new(asset_a: AssetId, asset_b: AssetId) -> Result<Self, AmmError> {
        if asset_a == asset_b {
            return Err(AmmError::InvalidPair("pair requires two distinct assets"));
        }
        Ok(Self { asset_a, asset_b })
    }

    /// Returns the first asset as supplied at creation.
    #[must_use]
    pub const fn asset_a(&self) -> AssetId {
        self.asset_a
    }

    /// Returns the second asset as supplied at creation.
    #[must_use]
    pub const fn asset_b(&self) -> AssetId {
        self.asset_b
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.asset_a, self.asset_b)
    }
}
