//! Convenience re-exports for common types and functions.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use hydra_tickmath::prelude::*;
//!
//! let tick = price_to_tick(Price::new(5000.0)?)?;
//! assert_eq!(tick, Tick::new(85_176)?);
//! # Ok::<(), TickMathError>(())
//! ```

// Re-export domain types
pub use crate::domain::{
    Price, Rounding, SqrtPriceX96, Tick, MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK, Q96,
};

// Re-export conversions
pub use crate::math::{
    get_sqrt_ratio_at_tick, get_tick_at_sqrt_ratio, price_at_tick, price_to_sqrt_ratio,
    price_to_tick,
};

// Re-export configuration
pub use crate::config::TickSpacing;

// Re-export error types
pub use crate::error::{BoundKind, Result, TickMathError};
