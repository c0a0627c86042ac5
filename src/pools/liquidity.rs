//! Deposit and withdrawal planning.
//!
//! [`LiquidityAccounting`] is implemented for [`Pair`] here.  Plans are
//! pure values: they describe the pair state after the operation and the
//! ledger effects that must accompany it.

use serde::Serialize;

use super::Pair;
use crate::domain::{AccountId, Amount, Effect, Holder, Shares};
use crate::error::AmmError;
use crate::math::{isqrt, mul_div_floor, CheckedArithmetic};
use crate::traits::LiquidityAccounting;

/// Outcome of a planned deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Deposit {
    pair_after: Pair,
    amount_a: Amount,
    amount_b: Amount,
    shares_minted: Shares,
}

impl Deposit {
    /// Pair state once the deposit is committed.
    #[must_use]
    pub const fn pair_after(&self) -> Pair {
        self.pair_after
    }

    /// Amount of the first asset taken from the depositor.
    #[must_use]
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Amount of the second asset taken from the depositor.
    #[must_use]
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }

    /// Shares minted to the depositor.
    #[must_use]
    pub const fn shares_minted(&self) -> Shares {
        self.shares_minted
    }

    /// Ledger effects: both assets into pool custody, then the mint.
    #[must_use]
    pub fn effects(&self, depositor: AccountId) -> Vec<Effect> {
        let key = self.pair_after.key();
        vec![
            Effect::transfer(
                key.asset_a(),
                Holder::Account(depositor),
                Holder::Pool(key),
                self.amount_a,
            ),
            Effect::transfer(
                key.asset_b(),
                Holder::Account(depositor),
                Holder::Pool(key),
                self.amount_b,
            ),
            Effect::MintShares {
                pair: key,
                to: depositor,
                shares: self.shares_minted,
            },
        ]
    }
}

/// Outcome of a planned withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Withdrawal {
    pair_after: Pair,
    shares_burned: Shares,
    amount_a: Amount,
    amount_b: Amount,
}

impl Withdrawal {
    /// Pair state once the withdrawal is committed.
    #[must_use]
    pub const fn pair_after(&self) -> Pair {
        self.pair_after
    }

    /// Shares burned from the provider.
    #[must_use]
    pub const fn shares_burned(&self) -> Shares {
        self.shares_burned
    }

    /// Amount of the first asset paid out.
    #[must_use]
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Amount of the second asset paid out.
    #[must_use]
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }

    /// Ledger effects: the burn first, then the payouts.
    ///
    /// A side that rounds to zero gets no transfer.
    #[must_use]
    pub fn effects(&self, provider: AccountId) -> Vec<Effect> {
        let key = self.pair_after.key();
        let mut effects = vec![Effect::BurnShares {
            pair: key,
            from: provider,
            shares: self.shares_burned,
        }];
        for (asset, amount) in [
            (key.asset_a(), self.amount_a),
            (key.asset_b(), self.amount_b),
        ] {
            if !amount.is_zero() {
                effects.push(Effect::transfer(
                    asset,
                    Holder::Pool(key),
                    Holder::Account(provider),
                    amount,
                ));
            }
        }
        effects
    }
}

impl LiquidityAccounting for Pair {
    fn plan_deposit(&self, amount_a: Amount, amount_b: Amount) -> Result<Deposit, AmmError> {
        if amount_a.is_zero() {
            return Err(AmmError::ZeroAmount("amount_a"));
        }
        if amount_b.is_zero() {
            return Err(AmmError::ZeroAmount("amount_b"));
        }

        let minted = if self.is_empty() {
            isqrt(amount_a.widen() * amount_b.widen())
        } else {
            let supply = self.total_shares().widen();
            let by_a = mul_div_floor(
                amount_a.widen(),
                supply,
                self.reserve_a().widen(),
                "shares minted for asset a",
            )?;
            let by_b = mul_div_floor(
                amount_b.widen(),
                supply,
                self.reserve_b().widen(),
                "shares minted for asset b",
            )?;
            by_a.min(by_b)
        };

        let minted = Shares::from_wide(minted).ok_or(AmmError::ArithmeticOverflow("shares minted"))?;
        if minted.is_zero() {
            return Err(AmmError::InsufficientLiquidityMinted);
        }

        let pair_after = self.with_state(
            self.reserve_a().safe_add(&amount_a, "reserve_a")?,
            self.reserve_b().safe_add(&amount_b, "reserve_b")?,
            self.total_shares().safe_add(&minted, "share supply")?,
        );

        Ok(Deposit {
            pair_after,
            amount_a,
            amount_b,
            shares_minted: minted,
        })
    }

    fn plan_withdrawal(
        &self,
        shares: Shares,
        min_amount_a: Amount,
        min_amount_b: Amount,
    ) -> Result<Withdrawal, AmmError> {
        if shares.is_zero() {
            return Err(AmmError::ZeroAmount("shares"));
        }
        let supply = self.total_shares();
        if supply.is_zero() || shares > supply {
            return Err(AmmError::InsufficientShares);
        }

        let amount_a = mul_div_floor(
            shares.widen(),
            self.reserve_a().widen(),
            supply.widen(),
            "withdrawal of asset a",
        )?;
        let amount_b = mul_div_floor(
            shares.widen(),
            self.reserve_b().widen(),
            supply.widen(),
            "withdrawal of asset b",
        )?;
        // Both results are bounded by their reserve.
        let amount_a = Amount::from_wide(amount_a)
            .ok_or(AmmError::ArithmeticOverflow("withdrawal of asset a"))?;
        let amount_b = Amount::from_wide(amount_b)
            .ok_or(AmmError::ArithmeticOverflow("withdrawal of asset b"))?;

        if amount_a.is_zero() && amount_b.is_zero() {
            return Err(AmmError::ZeroAmount("withdrawal"));
        }
        if amount_a < min_amount_a {
            return Err(AmmError::SlippageExceeded {
                actual: amount_a.get(),
                minimum: min_amount_a.get(),
            });
        }
        if amount_b < min_amount_b {
            return Err(AmmError::SlippageExceeded {
                actual: amount_b.get(),
                minimum: min_amount_b.get(),
            });
        }

        let pair_after = self.with_state(
            self.reserve_a().safe_sub(&amount_a, "reserve_a")?,
            self.reserve_b().safe_sub(&amount_b, "reserve_b")?,
            supply.safe_sub(&shares, "share supply")?,
        );

        Ok(Withdrawal {
            pair_after,
            shares_burned: shares,
            amount_a,
            amount_b,
        })
    }

    fn share_supply(&self) -> Shares {
        self.total_shares()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{AssetId, PairKey};

    fn key() -> PairKey {
        let Ok(k) = PairKey::new(AssetId::from_bytes([1; 32]), AssetId::from_bytes([2; 32]))
        else {
            panic!("expected Ok");
        };
        k
    }

    fn seeded(ra: u64, rb: u64, supply: u64) -> Pair {
        Pair::new(key()).with_state(Amount::new(ra), Amount::new(rb), Shares::new(supply))
    }

    fn user() -> AccountId {
        AccountId::from_bytes([9; 32])
    }

    // -- deposits -------------------------------------------------------------

    #[test]
    fn first_deposit_mints_geometric_mean() {
        let Ok(d) = Pair::new(key()).plan_deposit(Amount::new(1_000_000_000), Amount::new(1_000_000_000))
        else {
            panic!("expected Ok");
        };
        assert_eq!(d.shares_minted(), Shares::new(1_000_000_000));
        assert_eq!(d.pair_after().reserve_a(), Amount::new(1_000_000_000));
        assert_eq!(d.pair_after().total_shares(), Shares::new(1_000_000_000));
    }

    #[test]
    fn first_deposit_floors_sqrt() {
        // sqrt(4 * 10) = 6.32
        let Ok(d) = Pair::new(key()).plan_deposit(Amount::new(4), Amount::new(10)) else {
            panic!("expected Ok");
        };
        assert_eq!(d.shares_minted(), Shares::new(6));
    }

    #[test]
    fn later_deposit_takes_smaller_ratio() {
        // min(100 * 2000 / 1000, 100 * 2000 / 4000) = min(200, 50)
        let Ok(d) = seeded(1_000, 4_000, 2_000).plan_deposit(Amount::new(100), Amount::new(100))
        else {
            panic!("expected Ok");
        };
        assert_eq!(d.shares_minted(), Shares::new(50));
        // Unbalanced excess stays in the pool.
        assert_eq!(d.pair_after().reserve_a(), Amount::new(1_100));
        assert_eq!(d.pair_after().reserve_b(), Amount::new(4_100));
        assert_eq!(d.pair_after().total_shares(), Shares::new(2_050));
    }

    #[test]
    fn deposit_rejects_zero_sides() {
        let pair = Pair::new(key());
        assert_eq!(
            pair.plan_deposit(Amount::ZERO, Amount::new(1)),
            Err(AmmError::ZeroAmount("amount_a"))
        );
        assert_eq!(
            pair.plan_deposit(Amount::new(1), Amount::ZERO),
            Err(AmmError::ZeroAmount("amount_b"))
        );
    }

    #[test]
    fn dust_deposit_mints_nothing() {
        // floor(1 * 10 / 1000) = 0
        assert_eq!(
            seeded(1_000, 1_000, 10).plan_deposit(Amount::new(1), Amount::new(1)),
            Err(AmmError::InsufficientLiquidityMinted)
        );
    }

    #[test]
    fn deposit_reserve_overflow() {
        // by_a = 1, by_b = u64::MAX, so one share mints and reserve_a overflows
        let result = seeded(u64::MAX, 1, u64::MAX).plan_deposit(Amount::new(1), Amount::new(1));
        assert_eq!(result, Err(AmmError::ArithmeticOverflow("reserve_a")));
    }

    #[test]
    fn deposit_effects() {
        let Ok(d) = Pair::new(key()).plan_deposit(Amount::new(4), Amount::new(9)) else {
            panic!("expected Ok");
        };
        let effects = d.effects(user());
        assert_eq!(effects.len(), 3);
        assert_eq!(
            effects[0],
            Effect::transfer(
                key().asset_a(),
                Holder::Account(user()),
                Holder::Pool(key()),
                Amount::new(4)
            )
        );
        assert_eq!(
            effects[2],
            Effect::MintShares {
                pair: key(),
                to: user(),
                shares: Shares::new(6),
            }
        );
    }

    // -- withdrawals ----------------------------------------------------------

    #[test]
    fn full_withdrawal_empties_pair() {
        let Ok(w) = seeded(1_000, 4_000, 2_000).plan_withdrawal(
            Shares::new(2_000),
            Amount::ZERO,
            Amount::ZERO,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(w.amount_a(), Amount::new(1_000));
        assert_eq!(w.amount_b(), Amount::new(4_000));
        assert!(w.pair_after().is_empty());
        assert_eq!(w.pair_after().reserve_a(), Amount::ZERO);
        assert_eq!(w.pair_after().reserve_b(), Amount::ZERO);
    }

    #[test]
    fn partial_withdrawal_is_proportional() {
        let Ok(w) =
            seeded(1_000, 4_000, 2_000).plan_withdrawal(Shares::new(500), Amount::ZERO, Amount::ZERO)
        else {
            panic!("expected Ok");
        };
        assert_eq!(w.amount_a(), Amount::new(250));
        assert_eq!(w.amount_b(), Amount::new(1_000));
        assert_eq!(w.pair_after().total_shares(), Shares::new(1_500));
    }

    #[test]
    fn withdrawal_minimums_enforced() {
        let result = seeded(1_000, 4_000, 2_000).plan_withdrawal(
            Shares::new(500),
            Amount::new(251),
            Amount::ZERO,
        );
        assert_eq!(
            result,
            Err(AmmError::SlippageExceeded {
                actual: 250,
                minimum: 251
            })
        );
    }

    #[test]
    fn withdrawal_rejects_zero_and_excess() {
        let pair = seeded(1_000, 4_000, 2_000);
        assert_eq!(
            pair.plan_withdrawal(Shares::ZERO, Amount::ZERO, Amount::ZERO),
            Err(AmmError::ZeroAmount("shares"))
        );
        assert_eq!(
            pair.plan_withdrawal(Shares::new(2_001), Amount::ZERO, Amount::ZERO),
            Err(AmmError::InsufficientShares)
        );
        assert_eq!(
            Pair::new(key()).plan_withdrawal(Shares::new(1), Amount::ZERO, Amount::ZERO),
            Err(AmmError::InsufficientShares)
        );
    }

    #[test]
    fn withdrawal_rounding_to_nothing_is_rejected() {
        assert_eq!(
            seeded(1, 1, 1_000).plan_withdrawal(Shares::new(999), Amount::ZERO, Amount::ZERO),
            Err(AmmError::ZeroAmount("withdrawal"))
        );
    }

    #[test]
    fn withdrawal_effects_skip_zero_side() {
        // floor(999 * 1 / 1000) = 0, floor(999 * 1000 / 1000) = 999
        let Ok(w) =
            seeded(1, 1_000, 1_000).plan_withdrawal(Shares::new(999), Amount::ZERO, Amount::ZERO)
        else {
            panic!("expected Ok");
        };
        let effects = w.effects(user());
        assert_eq!(effects.len(), 2);
        assert!(matches!(effects[0], Effect::BurnShares { .. }));
        assert_eq!(
            effects[1],
            Effect::transfer(
                key().asset_b(),
                Holder::Pool(key()),
                Holder::Account(user()),
                Amount::new(999)
            )
        );
        assert_eq!(w.pair_after().reserve_a(), Amount::new(1));
    }
}
