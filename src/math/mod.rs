//! Fixed-point tick math and its bit-level helpers.
//!
//! This module provides the three core conversions of the crate
//! ([`get_sqrt_ratio_at_tick`], [`get_tick_at_sqrt_ratio`],
//! [`price_to_tick`]) together with the derived-price helpers and the
//! 256-bit building blocks they rest on.
//!
//! | Function | Input | Output |
//! |----------|-------|--------|
//! | [`get_sqrt_ratio_at_tick`] | `i32` tick | [`SqrtPriceX96`](crate::domain::SqrtPriceX96) |
//! | [`get_tick_at_sqrt_ratio`] | `U256` Q64.96 | [`Tick`](crate::domain::Tick) |
//! | [`price_to_sqrt_ratio`] | [`Price`](crate::domain::Price) | [`SqrtPriceX96`](crate::domain::SqrtPriceX96) |
//! | [`price_to_tick`] | [`Price`](crate::domain::Price) | [`Tick`](crate::domain::Tick) |
//! | [`price_at_tick`] | [`Tick`](crate::domain::Tick) | [`Price`](crate::domain::Price) |

mod bit_math;
pub(crate) mod tick_math;

#[cfg(test)]
mod proptest_properties;

pub use bit_math::{floor_f64, most_significant_bit, mul_wide, shr_round};
pub use tick_math::{
    get_sqrt_ratio_at_tick, get_tick_at_sqrt_ratio, price_at_tick, price_to_sqrt_ratio,
    price_to_tick,
};
