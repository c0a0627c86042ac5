//! Property-based tests using `proptest` for pair invariant validation.
//!
//! Covers six properties:
//!
//! 1. **Fee split** — `protocol_fee + amount_in_net == amount_in` and the
//!    fee is monotone in the input.
//! 2. **Bounded rounding** — the floored output exceeds the exact
//!    continuous output by less than one unit.
//! 3. **Product shortfall** — `k` drops by less than `new_reserve_in`.
//! 4. **Liquidity conservation** — deposit then withdraw returns at most
//!    what was deposited; the sole provider gets everything back.
//! 5. **Price movement direction** — selling A grows reserve A and
//!    shrinks reserve B.
//! 6. **Empty-iff-zero-supply** — holds after any sequence of operations.

use proptest::prelude::*;

use super::Pair;
use crate::domain::{Amount, AssetId, BasisPoints, PairKey, Shares, SwapDirection};
use crate::traits::{LiquidityAccounting, SwapEngine};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn key() -> PairKey {
    let Ok(k) = PairKey::new(AssetId::from_bytes([1u8; 32]), AssetId::from_bytes([2u8; 32]))
    else {
        panic!("valid key");
    };
    k
}

fn funded(ra: u64, rb: u64) -> Pair {
    let Ok(deposit) = Pair::new(key()).plan_deposit(Amount::new(ra), Amount::new(rb)) else {
        panic!("valid first deposit");
    };
    deposit.pair_after()
}

fn assert_empty_iff_zero_supply(pair: &Pair) -> Result<(), TestCaseError> {
    let empty_reserves = pair.reserve_a().is_zero() && pair.reserve_b().is_zero();
    prop_assert_eq!(empty_reserves, pair.total_shares().is_zero());
    Ok(())
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [10_000, 10_000_000_000].
fn reserve_strategy() -> impl Strategy<Value = u64> {
    10_000u64..=10_000_000_000u64
}

/// Any valid protocol fee rate.
fn rate_strategy() -> impl Strategy<Value = BasisPoints> {
    (0u16..=10_000u16).prop_map(BasisPoints::new)
}

fn direction_strategy() -> impl Strategy<Value = SwapDirection> {
    any::<bool>().prop_map(SwapDirection::from_input_is_asset_a)
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Deposit(u64, u64),
    Withdraw(u64),
    Swap(u64, SwapDirection),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u64..=1_000_000u64, 1u64..=1_000_000u64).prop_map(|(a, b)| Op::Deposit(a, b)),
        (1u64..=2_000_000u64).prop_map(Op::Withdraw),
        (1u64..=1_000_000u64, direction_strategy()).prop_map(|(x, d)| Op::Swap(x, d)),
    ]
}

// ---------------------------------------------------------------------------
// Property 1: Fee Split
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_fee_split_is_exact(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount in 1u64..=1_000_000_000u64,
        rate in rate_strategy(),
        direction in direction_strategy(),
    ) {
        let pair = funded(ra, rb);
        let Ok(q) = pair.quote_swap(Amount::new(amount), Amount::ZERO, direction, rate) else {
            return Ok(());
        };
        prop_assert_eq!(
            q.protocol_fee().get() + q.amount_in_net().get(),
            amount
        );
        prop_assert!(q.protocol_fee().get() <= amount);
    }

    #[test]
    fn prop_fee_monotonic(
        small in 1u64..=u64::MAX / 2,
        extra in 0u64..=u64::MAX / 2,
        rate in rate_strategy(),
    ) {
        let Ok(fee_small) = rate.apply(Amount::new(small)) else {
            return Ok(());
        };
        let Ok(fee_large) = rate.apply(Amount::new(small + extra)) else {
            return Ok(());
        };
        prop_assert!(fee_large >= fee_small);
    }
}

// ---------------------------------------------------------------------------
// Property 2 & 3: Rounding bounds
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_output_rounding_below_one_unit(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount in 1u64..=1_000_000_000u64,
        rate in rate_strategy(),
        direction in direction_strategy(),
    ) {
        let pair = funded(ra, rb);
        let (reserve_in, reserve_out) = pair.reserves_for(direction);
        let Ok(q) = pair.quote_swap(Amount::new(amount), Amount::ZERO, direction, rate) else {
            return Ok(());
        };
        // exact = reserve_out * net / (reserve_in + net)
        let net = q.amount_in_net().widen();
        let exact_floor = reserve_out.widen() * net / (reserve_in.widen() + net);
        let out = q.amount_out().widen();
        prop_assert!(out >= exact_floor);
        prop_assert!(out <= exact_floor + 1);
    }

    #[test]
    fn prop_product_shortfall_bounded(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount in 1u64..=1_000_000_000u64,
        rate in rate_strategy(),
        direction in direction_strategy(),
    ) {
        let pair = funded(ra, rb);
        let Ok(q) = pair.quote_swap(Amount::new(amount), Amount::ZERO, direction, rate) else {
            return Ok(());
        };
        let k_before = pair.product();
        let k_after = q.pair_after().product();
        prop_assert!(
            k_after + q.new_reserve_in().widen() > k_before,
            "k dropped too far: before={} after={} new_in={}",
            k_before, k_after, q.new_reserve_in()
        );
    }
}

// ---------------------------------------------------------------------------
// Property 4: Liquidity Conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_sole_provider_round_trip_is_exact(
        a in 1u64..=u64::MAX,
        b in 1u64..=u64::MAX,
    ) {
        let Ok(deposit) = Pair::new(key()).plan_deposit(Amount::new(a), Amount::new(b)) else {
            return Ok(());
        };
        let Ok(w) = deposit.pair_after().plan_withdrawal(
            deposit.shares_minted(),
            Amount::ZERO,
            Amount::ZERO,
        ) else {
            panic!("full withdrawal must succeed");
        };
        prop_assert_eq!(w.amount_a(), Amount::new(a));
        prop_assert_eq!(w.amount_b(), Amount::new(b));
        prop_assert!(w.pair_after().is_empty());
    }

    #[test]
    fn prop_later_provider_never_gains(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        a in 1u64..=1_000_000_000u64,
        b in 1u64..=1_000_000_000u64,
    ) {
        let pair = funded(ra, rb);
        let Ok(deposit) = pair.plan_deposit(Amount::new(a), Amount::new(b)) else {
            return Ok(());
        };
        let Ok(w) = deposit.pair_after().plan_withdrawal(
            deposit.shares_minted(),
            Amount::ZERO,
            Amount::ZERO,
        ) else {
            return Ok(());
        };
        prop_assert!(w.amount_a().get() <= a);
        prop_assert!(w.amount_b().get() <= b);
    }
}

// ---------------------------------------------------------------------------
// Property 5: Price Movement Direction
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_selling_a_moves_reserves(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount in 1u64..=1_000_000_000u64,
        rate in rate_strategy(),
    ) {
        let pair = funded(ra, rb);
        let Ok(q) = pair.quote_swap(Amount::new(amount), Amount::ZERO, SwapDirection::AToB, rate)
        else {
            return Ok(());
        };
        let after = q.pair_after();
        prop_assert!(after.reserve_a() >= pair.reserve_a());
        prop_assert!(after.reserve_b() <= pair.reserve_b());
        prop_assert_eq!(after.total_shares(), pair.total_shares());
    }
}

// ---------------------------------------------------------------------------
// Property 6: Empty-iff-zero-supply across operation sequences
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_reserves_zero_iff_supply_zero(
        ops in proptest::collection::vec(op_strategy(), 1..40),
        rate in rate_strategy(),
    ) {
        let mut pair = Pair::new(key());
        for op in ops {
            let next = match op {
                Op::Deposit(a, b) => pair
                    .plan_deposit(Amount::new(a), Amount::new(b))
                    .map(|d| d.pair_after()),
                Op::Withdraw(s) => {
                    let shares = Shares::new(s.min(pair.total_shares().get()));
                    pair.plan_withdrawal(shares, Amount::ZERO, Amount::ZERO)
                        .map(|w| w.pair_after())
                }
                Op::Swap(x, d) => pair
                    .quote_swap(Amount::new(x), Amount::ZERO, d, rate)
                    .map(|q| q.pair_after()),
            };
            if let Ok(next) = next {
                pair = next;
            }
            assert_empty_iff_zero_supply(&pair)?;
            if !pair.is_empty() {
                prop_assert!(!pair.reserve_a().is_zero());
                prop_assert!(!pair.reserve_b().is_zero());
            }
        }
    }
}
