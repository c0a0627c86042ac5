//! Top-level instruction enum.
//!
//! [`Instruction`] is the closed set of operations the
//! [`Engine`](crate::engine::Engine) accepts.  Each variant wraps a request
//! struct that validated its own fields at construction:
//!
//! ```text
//! match instruction {
//!     Instruction::Swap(req)         => engine.swap(req),
//!     Instruction::AddLiquidity(req) => engine.add_liquidity(req),
//!     ...
//! }
//! ```

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{AddLiquidity, CreatePair, RemoveLiquidity, SetPause, Swap, UpdateFeeRate};
use crate::error::AmmError;
use crate::platform::PlatformSettings;

/// Every operation the engine can execute.
///
/// # Validation
///
/// Call [`validate()`](Instruction::validate) to re-check a request that
/// did not come through its constructor, for example one deserialized
/// from an instruction log.  [`Engine::execute`](crate::engine::Engine::execute)
/// always does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// Create the platform record.
    ConfigurePlatform(PlatformSettings),
    /// Register a pair.
    CreatePair(CreatePair),
    /// Deposit into a pair.
    AddLiquidity(AddLiquidity),
    /// Withdraw from a pair.
    RemoveLiquidity(RemoveLiquidity),
    /// Trade against a pair.
    Swap(Swap),
    /// Pause or resume the platform.
    SetPause(SetPause),
    /// Change the protocol fee rate.
    UpdateFeeRate(UpdateFeeRate),
}

impl Instruction {
    /// Validates the inner request.
    ///
    /// # Errors
    ///
    /// Returns the same [`AmmError`] that the inner request's
    /// `validate()` would return.
    pub fn validate(&self) -> Result<(), AmmError> {
        match self {
            Self::ConfigurePlatform(settings) => settings.validate(),
            Self::CreatePair(req) => req.validate(),
            Self::AddLiquidity(req) => req.validate(),
            Self::RemoveLiquidity(req) => req.validate(),
            Self::Swap(req) => req.validate(),
            Self::SetPause(_) => Ok(()),
            Self::UpdateFeeRate(req) => req.validate(),
        }
    }

    /// Returns `true` for instructions gated by the pause flag.
    #[must_use]
    pub const fn requires_active_platform(&self) -> bool {
        matches!(
            self,
            Self::AddLiquidity(_) | Self::RemoveLiquidity(_) | Self::Swap(_)
        )
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigurePlatform(_) => write!(f, "configure_platform"),
            Self::CreatePair(_) => write!(f, "create_pair"),
            Self::AddLiquidity(_) => write!(f, "add_liquidity"),
            Self::RemoveLiquidity(_) => write!(f, "remove_liquidity"),
            Self::Swap(_) => write!(f, "swap"),
            Self::SetPause(_) => write!(f, "set_pause"),
            Self::UpdateFeeRate(_) => write!(f, "update_fee_rate"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{AccountId, Amount, AssetId, BasisPoints, PairKey, SwapDirection};

    fn key() -> PairKey {
        let Ok(k) = PairKey::new(AssetId::from_bytes([1; 32]), AssetId::from_bytes([2; 32]))
        else {
            panic!("expected Ok");
        };
        k
    }

    #[test]
    fn swap_variant() {
        let Ok(req) = Swap::new(
            AccountId::zero(),
            key(),
            Amount::new(10),
            Amount::ZERO,
            SwapDirection::AToB,
        ) else {
            panic!("expected Ok");
        };
        let ix = Instruction::Swap(req);
        assert!(ix.requires_active_platform());
        assert!(ix.validate().is_ok());
        assert_eq!(ix.to_string(), "swap");
    }

    #[test]
    fn admin_variants_ignore_pause() {
        let pause = Instruction::SetPause(SetPause::new(AccountId::zero(), true));
        assert!(!pause.requires_active_platform());

        let Ok(fee) = UpdateFeeRate::new(AccountId::zero(), BasisPoints::new(5)) else {
            panic!("expected Ok");
        };
        assert!(!Instruction::UpdateFeeRate(fee).requires_active_platform());
    }

    #[test]
    fn create_pair_is_ungated() {
        let Ok(req) = CreatePair::new(AssetId::from_bytes([1; 32]), AssetId::from_bytes([2; 32]))
        else {
            panic!("expected Ok");
        };
        let ix = Instruction::CreatePair(req);
        assert!(!ix.requires_active_platform());
        assert_eq!(ix.to_string(), "create_pair");
    }
}
