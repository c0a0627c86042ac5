//! Platform settings: the validated input of `configure`.

use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, AssetId, BasisPoints};
use crate::error::AmmError;

/// Parameters fixed when the platform record is created.
///
/// Constructed programmatically through [`new`](Self::new) or loaded from a
/// TOML document through [`from_toml_str`](Self::from_toml_str).  Both paths
/// validate; [`validate`](Self::validate) re-checks a value built by serde
/// elsewhere.
///
/// # Validation
///
/// - `fee_rate_bps` must be in `0..=10_000`.
///
/// # TOML Layout
///
/// ```toml
/// fee_rate_bps  = 250
/// base_asset    = "0x0101010101010101010101010101010101010101010101010101010101010101"
/// fee_collector = "0202020202020202020202020202020202020202020202020202020202020202"
/// admin         = "0303030303030303030303030303030303030303030303030303030303030303"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlatformSettings {
    #[serde(rename = "fee_rate_bps")]
    fee_rate: BasisPoints,
    base_asset: AssetId,
    fee_collector: AccountId,
    admin: AccountId,
}

impl PlatformSettings {
    /// Creates validated settings.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFeeRate`] if `fee_rate > 10_000bp`.
    pub fn new(
        fee_rate: BasisPoints,
        base_asset: AssetId,
        fee_collector: AccountId,
        admin: AccountId,
    ) -> Result<Self, AmmError> {
        let settings = Self {
            fee_rate,
            base_asset,
            fee_collector,
            admin,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Parses and validates settings from TOML.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidSettings`] if the document is malformed, has
    ///   missing or unknown keys, or an identifier is not 32 hex bytes.
    /// - [`AmmError::InvalidFeeRate`] if the fee rate is out of range.
    pub fn from_toml_str(source: &str) -> Result<Self, AmmError> {
        let settings: Self = toml::from_str(source).map_err(|e| {
            tracing::warn!(error = %e, "rejected platform settings");
            AmmError::InvalidSettings("malformed platform settings")
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validates all settings invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFeeRate`] if the fee rate exceeds 100%.
    pub fn validate(&self) -> Result<(), AmmError> {
        BasisPoints::validated(self.fee_rate.get()).map(|_| ())
    }

    /// Returns the protocol fee rate.
    #[must_use]
    pub const fn fee_rate(&self) -> BasisPoints {
        self.fee_rate
    }

    /// Returns the platform's quote asset.
    #[must_use]
    pub const fn base_asset(&self) -> AssetId {
        self.base_asset
    }

    /// Returns the account that receives protocol fees.
    #[must_use]
    pub const fn fee_collector(&self) -> AccountId {
        self.fee_collector
    }

    /// Returns the administrator.
    #[must_use]
    pub const fn admin(&self) -> AccountId {
        self.admin
    }
}
