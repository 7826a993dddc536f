//! Unified error types for the tick math library.
//!
//! All fallible operations across the crate return [`TickMathError`] as
//! their error type. Every range violation carries the offending value,
//! the bound it violated, and which side of the domain that bound sits on,
//! so callers can report exactly why an input was refused.

use core::fmt;

use ethnum::U256;
use thiserror::Error;

/// Side of a numeric domain that an input fell outside of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundKind {
    /// The value is smaller than the minimum.
    Lower,
    /// The value is larger than the maximum.
    Upper,
}

impl BoundKind {
    /// Returns `true` if this is [`BoundKind::Lower`].
    #[must_use]
    pub const fn is_lower(&self) -> bool {
        matches!(self, Self::Lower)
    }

    /// Returns `true` if this is [`BoundKind::Upper`].
    #[must_use]
    pub const fn is_upper(&self) -> bool {
        matches!(self, Self::Upper)
    }
}

impl fmt::Display for BoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lower => f.write_str("below the minimum"),
            Self::Upper => f.write_str("above the maximum"),
        }
    }
}

/// Errors produced by tick, sqrt-price and price conversions.
///
/// The three `*OutOfRange` variants together form the out-of-range class
/// (see [`is_out_of_range`](Self::is_out_of_range)); they are never
/// recovered internally and values are never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TickMathError {
    /// A tick lies outside `[MIN_TICK, MAX_TICK]`.
    #[error("tick {tick} is {kind} {bound}")]
    TickOutOfRange {
        /// The rejected tick.
        tick: i32,
        /// The violated bound.
        bound: i32,
        /// Which side of the range was violated.
        kind: BoundKind,
    },

    /// A Q64.96 sqrt price lies outside `[MIN_SQRT_RATIO, MAX_SQRT_RATIO]`.
    #[error("sqrt price {sqrt_price_x96} is {kind} {bound}")]
    SqrtRatioOutOfRange {
        /// The rejected (or derived) sqrt price.
        sqrt_price_x96: U256,
        /// The violated bound.
        bound: U256,
        /// Which side of the range was violated.
        kind: BoundKind,
    },

    /// A price whose encoded sqrt price does not fit in 256 bits.
    #[error("price {price} is {kind} representable sqrt price")]
    PriceOutOfRange {
        /// The rejected price.
        price: f64,
        /// Which side of the range was violated.
        kind: BoundKind,
    },

    /// A price for which the logarithm is undefined (zero, negative or NaN).
    #[error("price {price} is outside the logarithm domain")]
    InvalidPrice {
        /// The rejected price.
        price: f64,
    },

    /// Invalid tick grid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

impl TickMathError {
    /// Returns `true` for the out-of-range class of errors.
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::TickOutOfRange { .. }
                | Self::SqrtRatioOutOfRange { .. }
                | Self::PriceOutOfRange { .. }
        )
    }

    /// Returns the violated side of the range, if this is a range error.
    #[must_use]
    pub const fn bound_kind(&self) -> Option<BoundKind> {
        match self {
            Self::TickOutOfRange { kind, .. }
            | Self::SqrtRatioOutOfRange { kind, .. }
            | Self::PriceOutOfRange { kind, .. } => Some(*kind),
            Self::InvalidPrice { .. } | Self::InvalidConfiguration(_) => None,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, TickMathError>;
