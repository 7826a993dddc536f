//! Value types for the three representations of an exchange rate.
//!
//! - [`Tick`] — integer index on the `1.0001` geometric grid.
//! - [`SqrtPriceX96`] — square root of the price in Q64.96 fixed point.
//! - [`Price`] — plain `f64` ratio, derived on demand.
//!
//! All types use newtypes with validated constructors to enforce their
//! range invariants; once built they are immutable and `Copy`.

mod price;
mod rounding;
mod sqrt_price;
mod tick;

pub use price::Price;
pub use rounding::Rounding;
pub(crate) use sqrt_price::Q96_F64;
pub use sqrt_price::{SqrtPriceX96, MAX_SQRT_RATIO, MIN_SQRT_RATIO, Q96};
pub use tick::{Tick, MAX_TICK, MIN_TICK};
