//! The per-pair state record.

use serde::Serialize;

use crate::domain::{Amount, PairKey, Shares, SwapDirection};

/// Reserves and share supply of one constant-product pair.
///
/// A `Pair` is created empty by the registry and only changes when the
/// engine commits a [`Deposit`](super::Deposit),
/// [`Withdrawal`](super::Withdrawal) or [`SwapQuote`](super::SwapQuote)
/// whose effects the ledger accepted.
///
/// # Invariants
///
/// - Both reserves are zero if and only if the share supply is zero.
/// - The reserves equal the pool's custody balances held by the ledger.
///
/// # Example
///
/// ```rust
/// use hydra_pairs::domain::{Amount, AssetId, PairKey};
/// use hydra_pairs::pools::Pair;
/// use hydra_pairs::traits::LiquidityAccounting;
///
/// let key = PairKey::new(AssetId::from_bytes([1; 32]), AssetId::from_bytes([2; 32]))
///     .expect("distinct assets");
/// let pair = Pair::new(key);
/// assert!(pair.is_empty());
///
/// let deposit = pair
///     .plan_deposit(Amount::new(1_000_000_000), Amount::new(1_000_000_000))
///     .expect("first deposit");
/// assert_eq!(deposit.shares_minted().get(), 1_000_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pair {
    key: PairKey,
    reserve_a: Amount,
    reserve_b: Amount,
    share_supply: Shares,
}

impl Pair {
    /// Creates an empty pair for `key`.
    #[must_use]
    pub const fn new(key: PairKey) -> Self {
        Self {
            key,
            reserve_a: Amount::ZERO,
            reserve_b: Amount::ZERO,
            share_supply: Shares::ZERO,
        }
    }

    /// Returns a copy of this pair with replaced reserves and supply.
    pub(crate) const fn with_state(
        &self,
        reserve_a: Amount,
        reserve_b: Amount,
        share_supply: Shares,
    ) -> Self {
        Self {
            key: self.key,
            reserve_a,
            reserve_b,
            share_supply,
        }
    }

    /// Returns the ordered key of the pair.
    #[must_use]
    pub const fn key(&self) -> PairKey {
        self.key
    }

    /// Returns the reserve of the first asset.
    #[must_use]
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Returns the reserve of the second asset.
    #[must_use]
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Returns the outstanding share supply.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.share_supply
    }

    /// Returns `(reserve_in, reserve_out)` for a trade in `direction`.
    #[must_use]
    pub const fn reserves_for(&self, direction: SwapDirection) -> (Amount, Amount) {
        if direction.input_is_asset_a() {
            (self.reserve_a, self.reserve_b)
        } else {
            (self.reserve_b, self.reserve_a)
        }
    }

    /// Returns `true` while no liquidity has been deposited.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.share_supply.is_zero()
    }

    /// Returns the constant-product invariant `reserve_a × reserve_b`.
    #[must_use]
    pub const fn product(&self) -> u128 {
        self.reserve_a.widen() * self.reserve_b.widen()
    }
}
