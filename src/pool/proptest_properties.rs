//! Property-based tests for pool invariants.
//!
//! 1. **Swap reversibility**: a round trip A→B→A never returns more than it took.
//! 2. **Invariant monotonicity**: the curve invariant never falls across swaps.
//! 3. **Fee monotonicity**: a larger input never pays a smaller fee.
//! 4. **Liquidity conservation**: burning freshly minted shares returns at
//!    most what was deposited.
//! 5. **Quote purity**: quoting leaves the pool unchanged and agrees with
//!    the executed swap.

#![allow(clippy::panic)]

use proptest::prelude::*;

use super::LiquidityPool;
use crate::domain::{
    Amount, BasisPoints, CurveKind, Decimals, Token, TokenAddress, TokenPair,
};
use crate::error::AmmError;
use crate::math::WAD;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn tok_a() -> Token {
    Token::with_wad_decimals(TokenAddress::from_bytes([1u8; 32]))
}

fn tok_b() -> Token {
    let Ok(d) = Decimals::new(6) else {
        panic!("valid decimals");
    };
    Token::new(TokenAddress::from_bytes([2u8; 32]), d)
}

fn make_pool(curve: CurveKind, fee: u32, ra: u128, rb: u128) -> LiquidityPool {
    let Ok(pair) = TokenPair::new(tok_a(), tok_b()) else {
        panic!("valid pair");
    };
    let Ok(mut pool) = LiquidityPool::new(pair, curve, BasisPoints::new(fee)) else {
        panic!("valid pool");
    };
    let Ok(_) = pool.mint(Amount::new(ra), Amount::new(rb)) else {
        panic!("valid first mint");
    };
    pool
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Whole-token reserves in [1, 1_000_000] for the 18-decimal side.
fn reserve_a_strategy() -> impl Strategy<Value = u128> {
    (1u128..=1_000_000u128).prop_map(|v| v * WAD)
}

/// Whole-token reserves in [1, 1_000_000] for the 6-decimal side.
fn reserve_b_strategy() -> impl Strategy<Value = u128> {
    (1u128..=1_000_000u128).prop_map(|v| v * 1_000_000)
}

/// Swap size as a fraction of the input reserve, in basis points.
fn fraction_strategy() -> impl Strategy<Value = u128> {
    1u128..=5_000u128
}

fn curve_strategy() -> impl Strategy<Value = CurveKind> {
    prop_oneof![Just(CurveKind::ConstantProduct), Just(CurveKind::StableSwap)]
}

fn fee_strategy() -> impl Strategy<Value = u32> {
    0u32..=100u32
}

// ---------------------------------------------------------------------------
// Property 1: Swap reversibility
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_reversibility(
        curve in curve_strategy(),
        fee in fee_strategy(),
        ra in reserve_a_strategy(),
        rb in reserve_b_strategy(),
        fraction in fraction_strategy(),
    ) {
        let mut pool = make_pool(curve, fee, ra, rb);
        let swap_in = (ra * fraction / 10_000).max(1);

        let Ok(ab) = pool.swap(tok_a().address(), Amount::new(swap_in)) else {
            return Ok(());
        };
        let Ok(ba) = pool.swap(tok_b().address(), ab.amount_out) else {
            return Ok(());
        };

        prop_assert!(
            ba.amount_out.get() <= swap_in,
            "round trip should lose value: final={} > original={}",
            ba.amount_out, swap_in
        );
    }
}

// ---------------------------------------------------------------------------
// Property 2: Invariant monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_invariant_never_decreases(
        curve in curve_strategy(),
        fee in fee_strategy(),
        ra in reserve_a_strategy(),
        rb in reserve_b_strategy(),
        fraction in fraction_strategy(),
    ) {
        let mut pool = make_pool(curve, fee, ra, rb);
        let swap_in = Amount::new((ra * fraction / 10_000).max(1));

        for round in 0..5 {
            let Ok(before) = pool.invariant() else {
                return Ok(());
            };
            let token_in = if round % 2 == 0 { tok_a() } else { tok_b() };
            let amount = if round % 2 == 0 {
                swap_in
            } else {
                Amount::new((rb * fraction / 10_000).max(1))
            };
            if let Err(e) = pool.swap(token_in.address(), amount) {
                prop_assert!(
                    !matches!(e, AmmError::InvariantViolation(_)),
                    "swap broke the invariant in round {}: {}",
                    round, e
                );
                break;
            }
            let Ok(after) = pool.invariant() else {
                return Ok(());
            };
            prop_assert!(
                after >= before,
                "invariant decreased: after={} < before={}",
                after, before
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Fee monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_fee_monotonicity(
        curve in curve_strategy(),
        fee in fee_strategy(),
        ra in reserve_a_strategy(),
        rb in reserve_b_strategy(),
    ) {
        let pool = make_pool(curve, fee, ra, rb);
        let inputs = [ra / 10_000, ra / 1_000, ra / 100, ra / 10];

        let mut last_fee = Amount::ZERO;
        for input in inputs {
            let Ok(result) = pool.preview_swap(tok_a().address(), Amount::new(input.max(1)))
            else {
                continue;
            };
            prop_assert!(
                result.fee >= last_fee,
                "fee should not shrink as input grows: {} < {}",
                result.fee, last_fee
            );
            last_fee = result.fee;
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: Liquidity conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_burn_of_mint_never_gains(
        curve in curve_strategy(),
        ra in reserve_a_strategy(),
        rb in reserve_b_strategy(),
        add_a in reserve_a_strategy(),
        add_b in reserve_b_strategy(),
    ) {
        let mut pool = make_pool(curve, 30, ra, rb);

        let Ok(minted) = pool.mint(Amount::new(add_a), Amount::new(add_b)) else {
            return Ok(());
        };
        prop_assert!(minted.amount_a.get() <= add_a);
        prop_assert!(minted.amount_b.get() <= add_b);

        let Ok(burned) = pool.burn(minted.shares) else {
            return Ok(());
        };
        prop_assert!(
            burned.amount_a <= minted.amount_a && burned.amount_b <= minted.amount_b,
            "burn(mint) gained: burned=({}, {}) deposited=({}, {})",
            burned.amount_a, burned.amount_b, minted.amount_a, minted.amount_b
        );
    }
}

// ---------------------------------------------------------------------------
// Property 5: Quote purity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_quote_is_pure_and_exact(
        curve in curve_strategy(),
        fee in fee_strategy(),
        ra in reserve_a_strategy(),
        rb in reserve_b_strategy(),
        fraction in fraction_strategy(),
    ) {
        let mut pool = make_pool(curve, fee, ra, rb);
        let snapshot = pool.clone();
        let amount = Amount::new((rb * fraction / 10_000).max(1));

        let first = pool.quote_out(tok_b().address(), amount);
        let second = pool.quote_out(tok_b().address(), amount);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&pool, &snapshot);

        let executed = pool.swap(tok_b().address(), amount).map(|r| r.amount_out);
        prop_assert_eq!(first, executed);
    }
}
