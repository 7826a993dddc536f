//! # Hydra TickMath
//!
//! Fixed-point tick math for concentrated liquidity AMMs: bit-exact
//! conversions between prices, Q64.96 square-root prices and tick indices.
//!
//! A pool's exchange rate has three representations:
//!
//! - **Price** — ratio of token amounts, derived and never stored.
//! - **Sqrt price** — `sqrt(price) * 2^96` as an unsigned Q64.96 value.
//! - **Tick** — integer index on the geometric grid `price = 1.0001^tick`.
//!
//! The conversions between sqrt prices and ticks run entirely in 256-bit
//! integer arithmetic, so they are deterministic across platforms and
//! carry explicit rounding contracts:
//!
//! - sqrt price at a tick is rounded **up**, never below the true value;
//! - tick at a sqrt price is the **floor**: the greatest tick whose sqrt
//!   price does not exceed the input.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `fixed-point` | no | `U64F64` interop for [`SqrtPriceX96`](domain::SqrtPriceX96) |
//!
//! # Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! hydra-tickmath = "0.1"
//! ```
//!
//! ## Map a price to a tick and back
//!
//! ```rust
//! use hydra_tickmath::config::TickSpacing;
//! use hydra_tickmath::domain::{Price, Rounding};
//! use hydra_tickmath::math::{get_tick_at_sqrt_ratio, price_to_sqrt_ratio, price_to_tick};
//!
//! // 1. Encode a price as a Q64.96 sqrt price
//! let price = Price::new(5000.0).expect("valid price");
//! let sqrt = price_to_sqrt_ratio(price).expect("price in range");
//!
//! // 2. Find the tick the price falls in
//! let tick = get_tick_at_sqrt_ratio(sqrt.get()).expect("sqrt price in range");
//! assert_eq!(tick.get(), 85_176);
//! assert_eq!(price_to_tick(price), Ok(tick));
//!
//! // 3. The tick's own sqrt price is the floor of the input
//! assert!(tick.sqrt_ratio() <= sqrt);
//!
//! // 4. Snap to the grid of a 0.30% pool
//! let lower = TickSpacing::SIXTY.align(tick, Rounding::Down).expect("usable tick");
//! assert_eq!(lower.get(), 85_140);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Consumer   │  Price / raw U256 / i32 tick
//! └──────┬──────┘
//!        │ price_to_tick, get_tick_at_sqrt_ratio, get_sqrt_ratio_at_tick
//!        ▼
//! ┌─────────────┐
//! │  TickMath    │  256-bit binary exponentiation, fixed-point log2
//! └──────┬──────┘
//!        │ most_significant_bit, mul_wide, shr_round, floor_f64
//!        ▼
//! ┌─────────────┐
//! │   Domain     │  Tick, SqrtPriceX96, Price, Rounding
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Validated value types: [`Tick`](domain::Tick), [`SqrtPriceX96`](domain::SqrtPriceX96), [`Price`](domain::Price) |
//! | [`math`]   | Tick math conversions and 256-bit helpers |
//! | [`config`] | [`TickSpacing`](config::TickSpacing) grid configuration |
//! | [`error`]  | [`TickMathError`](error::TickMathError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and functions |
//!
//! # Logging
//!
//! Rejected inputs are reported through [`tracing`] at `DEBUG`, and the
//! price-to-tick mapping at `TRACE`. No subscriber is installed by this
//! crate.

// Module declarations (always compiled)
pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod prelude;
