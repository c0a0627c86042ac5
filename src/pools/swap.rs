//! Constant-product swap quoting.
//!
//! [`SwapEngine`] is implemented for [`Pair`] here.  The arithmetic follows
//! the floor chain documented on the trait exactly; no step rounds up.
//!
//! Because `new_reserve_out` is floored, the product after a swap can
//! fall short of `k` by strictly less than `new_reserve_in`.  The pool never
//! pays out more than the floored formula allows, so the shortfall is a
//! rounding artefact, not value leaving the pool.

use serde::Serialize;

use super::Pair;
use crate::domain::{AccountId, Amount, BasisPoints, Effect, Holder, SwapDirection};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;
use crate::traits::SwapEngine;

/// A priced swap, ready to be committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SwapQuote {
    pair_after: Pair,
    direction: SwapDirection,
    amount_in: Amount,
    protocol_fee: Amount,
    amount_in_net: Amount,
    amount_out: Amount,
    new_reserve_in: Amount,
    new_reserve_out: Amount,
}

impl SwapQuote {
    /// Pair state once the swap is committed.
    #[must_use]
    pub const fn pair_after(&self) -> Pair {
        self.pair_after
    }

    /// Direction of the trade.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Gross input paid by the trader.
    #[must_use]
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Portion of the input routed to the fee collector.
    #[must_use]
    pub const fn protocol_fee(&self) -> Amount {
        self.protocol_fee
    }

    /// Portion of the input added to the pool.
    #[must_use]
    pub const fn amount_in_net(&self) -> Amount {
        self.amount_in_net
    }

    /// Output delivered to the trader.
    #[must_use]
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Input-side reserve after the swap.
    #[must_use]
    pub const fn new_reserve_in(&self) -> Amount {
        self.new_reserve_in
    }

    /// Output-side reserve after the swap.
    #[must_use]
    pub const fn new_reserve_out(&self) -> Amount {
        self.new_reserve_out
    }

    /// Ledger effects in order: protocol fee, net input, output.
    ///
    /// Zero-amount legs are omitted, so a swap at a 0bp rate carries no fee
    /// transfer.
    #[must_use]
    pub fn effects(&self, trader: AccountId, fee_collector: AccountId) -> Vec<Effect> {
        let key = self.pair_after.key();
        let input = self.direction.input_asset(&key);
        let output = self.direction.output_asset(&key);
        let legs = [
            Effect::transfer(
                input,
                Holder::Account(trader),
                Holder::Account(fee_collector),
                self.protocol_fee,
            ),
            Effect::transfer(
                input,
                Holder::Account(trader),
                Holder::Pool(key),
                self.amount_in_net,
            ),
            Effect::transfer(
                output,
                Holder::Pool(key),
                Holder::Account(trader),
                self.amount_out,
            ),
        ];
        legs.into_iter()
            .filter(|e| !matches!(e, Effect::Transfer { amount, .. } if amount.is_zero()))
            .collect()
    }
}

impl SwapEngine for Pair {
    fn quote_swap(
        &self,
        amount_in: Amount,
        min_amount_out: Amount,
        direction: SwapDirection,
        protocol_fee_rate: BasisPoints,
    ) -> Result<SwapQuote, AmmError> {
        if amount_in.is_zero() {
            return Err(AmmError::ZeroAmount("amount_in"));
        }
        if self.is_empty() {
            return Err(AmmError::InsufficientLiquidity);
        }

        let (reserve_in, reserve_out) = self.reserves_for(direction);

        let protocol_fee = protocol_fee_rate.apply(amount_in)?;
        let amount_in_net = amount_in.safe_sub(&protocol_fee, "net input")?;

        let k = self.product();
        let new_reserve_in = reserve_in.safe_add(&amount_in_net, "reserve_in")?;
        // reserve_in > 0 for a non-empty pair, so the divisor is non-zero.
        let new_reserve_out = Amount::from_wide(k / new_reserve_in.widen())
            .ok_or(AmmError::ArithmeticOverflow("reserve_out"))?;
        if new_reserve_out.is_zero() {
            return Err(AmmError::InsufficientLiquidity);
        }
        let amount_out = reserve_out.safe_sub(&new_reserve_out, "amount_out")?;

        if amount_out < min_amount_out {
            return Err(AmmError::SlippageExceeded {
                actual: amount_out.get(),
                minimum: min_amount_out.get(),
            });
        }

        let share_supply = self.total_shares();
        let pair_after = if direction.input_is_asset_a() {
            self.with_state(new_reserve_in, new_reserve_out, share_supply)
        } else {
            self.with_state(new_reserve_out, new_reserve_in, share_supply)
        };

        Ok(SwapQuote {
            pair_after,
            direction,
            amount_in,
            protocol_fee,
            amount_in_net,
            amount_out,
            new_reserve_in,
            new_reserve_out,
        })
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{AssetId, PairKey, Shares};

    const BILLION: u64 = 1_000_000_000;

    fn key() -> PairKey {
        let Ok(k) = PairKey::new(AssetId::from_bytes([1; 32]), AssetId::from_bytes([2; 32]))
        else {
            panic!("expected Ok");
        };
        k
    }

    fn seeded(ra: u64, rb: u64) -> Pair {
        // Supply value is irrelevant for pricing as long as it is non-zero.
        Pair::new(key()).with_state(Amount::new(ra), Amount::new(rb), Shares::new(1))
    }

    fn trader() -> AccountId {
        AccountId::from_bytes([7; 32])
    }

    fn collector() -> AccountId {
        AccountId::from_bytes([8; 32])
    }

    #[test]
    fn worked_example_a_to_b() {
        let Ok(q) = seeded(BILLION, BILLION).quote_swap(
            Amount::new(10_000_000),
            Amount::ZERO,
            SwapDirection::AToB,
            BasisPoints::new(250),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(q.protocol_fee(), Amount::new(250_000));
        assert_eq!(q.amount_in_net(), Amount::new(9_750_000));
        assert_eq!(q.new_reserve_in(), Amount::new(1_009_750_000));
        assert_eq!(q.new_reserve_out(), Amount::new(990_344_144));
        assert_eq!(q.amount_out(), Amount::new(9_655_856));
        assert_eq!(q.pair_after().reserve_a(), Amount::new(1_009_750_000));
        assert_eq!(q.pair_after().reserve_b(), Amount::new(990_344_144));
    }

    #[test]
    fn product_shortfall_is_below_new_reserve_in() {
        let pair = seeded(BILLION, BILLION);
        let Ok(q) = pair.quote_swap(
            Amount::new(10_000_000),
            Amount::ZERO,
            SwapDirection::AToB,
            BasisPoints::new(250),
        ) else {
            panic!("expected Ok");
        };
        let before = pair.product();
        let after = q.pair_after().product();
        assert_eq!(after, 999_999_999_404_000_000);
        assert!(before - after < q.new_reserve_in().widen());
    }

    #[test]
    fn b_to_a_updates_reserves_in_key_order() {
        let Ok(q) = seeded(BILLION, 2 * BILLION).quote_swap(
            Amount::new(1_000),
            Amount::ZERO,
            SwapDirection::BToA,
            BasisPoints::ZERO,
        ) else {
            panic!("expected Ok");
        };
        // k = 2e18, new_in = 2_000_001_000, new_out = floor(2e18 / 2_000_001_000) = 999_999_500
        assert_eq!(q.new_reserve_out(), Amount::new(999_999_500));
        assert_eq!(q.amount_out(), Amount::new(500));
        assert_eq!(q.pair_after().reserve_a(), Amount::new(999_999_500));
        assert_eq!(q.pair_after().reserve_b(), Amount::new(2_000_001_000));
    }

    #[test]
    fn slippage_rejected_with_actual_amount() {
        let result = seeded(BILLION, BILLION).quote_swap(
            Amount::new(10_000_000),
            Amount::new(9_655_857),
            SwapDirection::AToB,
            BasisPoints::new(250),
        );
        assert_eq!(
            result,
            Err(AmmError::SlippageExceeded {
                actual: 9_655_856,
                minimum: 9_655_857
            })
        );
    }

    #[test]
    fn exact_minimum_is_accepted() {
        let result = seeded(BILLION, BILLION).quote_swap(
            Amount::new(10_000_000),
            Amount::new(9_655_856),
            SwapDirection::AToB,
            BasisPoints::new(250),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn full_rate_routes_everything_to_collector() {
        let Ok(q) = seeded(BILLION, BILLION).quote_swap(
            Amount::new(1_000),
            Amount::ZERO,
            SwapDirection::AToB,
            BasisPoints::MAX_PERCENT,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(q.protocol_fee(), Amount::new(1_000));
        assert_eq!(q.amount_out(), Amount::ZERO);
        let effects = q.effects(trader(), collector());
        assert_eq!(
            effects,
            vec![Effect::transfer(
                key().asset_a(),
                Holder::Account(trader()),
                Holder::Account(collector()),
                Amount::new(1_000)
            )]
        );
    }

    #[test]
    fn zero_rate_has_no_fee_leg() {
        let Ok(q) = seeded(BILLION, BILLION).quote_swap(
            Amount::new(1_000),
            Amount::ZERO,
            SwapDirection::AToB,
            BasisPoints::ZERO,
        ) else {
            panic!("expected Ok");
        };
        let effects = q.effects(trader(), collector());
        assert_eq!(effects.len(), 2);
        assert_eq!(
            effects[0],
            Effect::transfer(
                key().asset_a(),
                Holder::Account(trader()),
                Holder::Pool(key()),
                Amount::new(1_000)
            )
        );
        assert_eq!(
            effects[1],
            Effect::transfer(
                key().asset_b(),
                Holder::Pool(key()),
                Holder::Account(trader()),
                q.amount_out()
            )
        );
    }

    #[test]
    fn rejects_zero_input() {
        assert_eq!(
            seeded(BILLION, BILLION).quote_swap(
                Amount::ZERO,
                Amount::ZERO,
                SwapDirection::AToB,
                BasisPoints::ZERO
            ),
            Err(AmmError::ZeroAmount("amount_in"))
        );
    }

    #[test]
    fn empty_pair_has_no_liquidity() {
        assert_eq!(
            Pair::new(key()).quote_swap(
                Amount::new(1),
                Amount::ZERO,
                SwapDirection::AToB,
                BasisPoints::ZERO
            ),
            Err(AmmError::InsufficientLiquidity)
        );
    }

    #[test]
    fn cannot_drain_output_reserve() {
        // k = 1, new_in = 2, new_out = 0
        assert_eq!(
            seeded(1, 1).quote_swap(
                Amount::new(1),
                Amount::ZERO,
                SwapDirection::AToB,
                BasisPoints::ZERO
            ),
            Err(AmmError::InsufficientLiquidity)
        );
    }

    #[test]
    fn input_reserve_overflow() {
        assert_eq!(
            seeded(u64::MAX, 2).quote_swap(
                Amount::new(1),
                Amount::ZERO,
                SwapDirection::AToB,
                BasisPoints::ZERO
            ),
            Err(AmmError::ArithmeticOverflow("reserve_in"))
        );
    }
}
