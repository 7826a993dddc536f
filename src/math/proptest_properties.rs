//! Property-based tests using `proptest` for the tick math invariants.
//!
//! 1. **Round trip** — `tick_at(sqrt_at(t)) == t`.
//! 2. **Monotonicity** — `t1 < t2` implies `sqrt_at(t1) < sqrt_at(t2)`.
//! 3. **Floor contract** — `sqrt_at(tick_at(s)) <= s < sqrt_at(tick_at(s) + 1)`.
//! 4. **Price ordering** — larger prices never map to smaller ticks.
//! 5. **Grid alignment** — aligned ticks sit on the grid, in range, and
//!    on the requested side of the input.

#![allow(clippy::panic)]

use ethnum::U256;
use proptest::prelude::*;

use super::{get_sqrt_ratio_at_tick, get_tick_at_sqrt_ratio, price_to_sqrt_ratio, price_to_tick};
use crate::config::TickSpacing;
use crate::domain::{Price, Rounding, Tick, MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn sqrt_at(tick: i32) -> U256 {
    let Ok(sqrt) = get_sqrt_ratio_at_tick(tick) else {
        panic!("tick {tick} should be in range");
    };
    sqrt.get()
}

fn tick_strategy() -> impl Strategy<Value = i32> {
    MIN_TICK..=MAX_TICK
}

/// Sqrt prices spread over every magnitude between `2^32` and `2^160`
/// instead of clustering near the top of the range.
fn sqrt_price_strategy() -> impl Strategy<Value = U256> {
    (33_u32..=160, any::<u128>(), any::<u128>()).prop_map(|(bits, hi, lo)| {
        let value = U256::from_words(hi, lo) >> (256 - bits);
        value.clamp(MIN_SQRT_RATIO, MAX_SQRT_RATIO)
    })
}

/// Prices between `1e-38` and `1e38`, log-uniform.
fn price_strategy() -> impl Strategy<Value = f64> {
    (-38.0_f64..38.0).prop_map(|exponent| 10_f64.powf(exponent))
}

fn spacing_strategy() -> impl Strategy<Value = TickSpacing> {
    (1_i32..=16_384).prop_map(|spacing| {
        let Ok(s) = TickSpacing::new(spacing) else {
            panic!("spacing {spacing} should be valid");
        };
        s
    })
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn prop_round_trip(tick in tick_strategy()) {
        let sqrt = sqrt_at(tick);
        let Ok(back) = get_tick_at_sqrt_ratio(sqrt) else {
            return Err(TestCaseError::fail(format!("sqrt price {sqrt} rejected")));
        };
        prop_assert_eq!(back.get(), tick);
    }

    #[test]
    fn prop_monotonic(a in tick_strategy(), b in tick_strategy()) {
        prop_assume!(a != b);
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        prop_assert!(
            sqrt_at(lo) < sqrt_at(hi),
            "sqrt price not increasing between ticks {} and {}",
            lo, hi
        );
    }

    #[test]
    fn prop_adjacent_ticks_strictly_increase(tick in MIN_TICK..MAX_TICK) {
        prop_assert!(sqrt_at(tick) < sqrt_at(tick + 1));
    }

    #[test]
    fn prop_floor_contract(sqrt in sqrt_price_strategy()) {
        let Ok(tick) = get_tick_at_sqrt_ratio(sqrt) else {
            return Err(TestCaseError::fail(format!("sqrt price {sqrt} rejected")));
        };
        let tick = tick.get();
        prop_assert!(sqrt_at(tick) <= sqrt, "sqrt_at({}) > {}", tick, sqrt);
        if tick < MAX_TICK {
            prop_assert!(sqrt < sqrt_at(tick + 1), "{} >= sqrt_at({} + 1)", sqrt, tick);
        }
    }

    #[test]
    fn prop_floor_just_below_tick(tick in (MIN_TICK + 1)..=MAX_TICK) {
        let Ok(below) = get_tick_at_sqrt_ratio(sqrt_at(tick) - 1) else {
            return Err(TestCaseError::fail("sqrt price rejected".to_string()));
        };
        prop_assert_eq!(below.get(), tick - 1);
    }

    #[test]
    fn prop_price_to_tick_is_ordered(a in price_strategy(), b in price_strategy()) {
        let (Ok(pa), Ok(pb)) = (Price::new(a), Price::new(b)) else {
            return Err(TestCaseError::fail("valid prices".to_string()));
        };
        let (Ok(ta), Ok(tb)) = (price_to_tick(pa), price_to_tick(pb)) else {
            return Err(TestCaseError::fail(format!("prices {a} / {b} rejected")));
        };
        if a <= b {
            prop_assert!(ta <= tb);
        } else {
            prop_assert!(ta >= tb);
        }
    }

    #[test]
    fn prop_price_to_tick_respects_floor(p in price_strategy()) {
        let Ok(price) = Price::new(p) else {
            return Err(TestCaseError::fail("valid price".to_string()));
        };
        let (Ok(sqrt), Ok(tick)) = (price_to_sqrt_ratio(price), price_to_tick(price)) else {
            return Err(TestCaseError::fail(format!("price {p} rejected")));
        };
        prop_assert!(sqrt_at(tick.get()) <= sqrt.get());
        if tick < Tick::MAX {
            prop_assert!(sqrt.get() < sqrt_at(tick.get() + 1));
        }
    }
}

// ---------------------------------------------------------------------------
// Tick grid
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_align_down_stays_on_grid(spacing in spacing_strategy(), tick in tick_strategy()) {
        let Ok(t) = Tick::new(tick) else {
            return Err(TestCaseError::fail("valid tick".to_string()));
        };
        prop_assume!(t >= spacing.min_usable_tick());
        let Ok(aligned) = spacing.align(t, Rounding::Down) else {
            return Err(TestCaseError::fail(format!("align down failed for {tick}")));
        };
        prop_assert!(spacing.is_aligned(aligned));
        prop_assert!(aligned <= t);
        prop_assert!(t.get() - aligned.get() < spacing.get());
    }

    #[test]
    fn prop_align_up_stays_on_grid(spacing in spacing_strategy(), tick in tick_strategy()) {
        let Ok(t) = Tick::new(tick) else {
            return Err(TestCaseError::fail("valid tick".to_string()));
        };
        prop_assume!(t <= spacing.max_usable_tick());
        let Ok(aligned) = spacing.align(t, Rounding::Up) else {
            return Err(TestCaseError::fail(format!("align up failed for {tick}")));
        };
        prop_assert!(spacing.is_aligned(aligned));
        prop_assert!(aligned >= t);
        prop_assert!(aligned.get() - t.get() < spacing.get());
    }
}
