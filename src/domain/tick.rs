//! Discrete price point on the `1.0001` geometric grid.

use core::fmt;

use crate::error::{BoundKind, TickMathError};

use super::SqrtPriceX96;

/// Minimum valid tick index. `1.0001^MIN_TICK` is just above `2^-128`.
pub const MIN_TICK: i32 = -887_272;

/// Maximum valid tick index. `1.0001^MAX_TICK` is just below `2^128`.
pub const MAX_TICK: i32 = 887_272;

/// A discrete price point in the concentrated liquidity model.
///
/// Price increases exponentially with the tick index:
/// `price = 1.0001^tick`. Valid tick indices range from
/// [`MIN`](Self::MIN) (`-887272`) to [`MAX`](Self::MAX) (`887272`), the
/// widest range whose sqrt prices fit a Q64.96 value.
///
/// # Examples
///
/// ```
/// use hydra_tickmath::domain::Tick;
///
/// let tick = Tick::new(100);
/// assert!(tick.is_ok());
/// assert_eq!(tick.unwrap_or(Tick::ZERO).get(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tick(i32);

impl Tick {
    /// Minimum valid tick (`-887272`).
    pub const MIN: Self = Self(MIN_TICK);

    /// Maximum valid tick (`887272`).
    pub const MAX: Self = Self(MAX_TICK);

    /// Neutral tick where `price = 1.0001^0 = 1.0`.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Tick` with range validation.
    ///
    /// # Errors
    ///
    /// Returns [`TickMathError::TickOutOfRange`] if `value` is outside
    /// the range `[-887272, 887272]`, carrying the violated bound.
    pub const fn new(value: i32) -> crate::error::Result<Self> {
        if value < MIN_TICK {
            return Err(TickMathError::TickOutOfRange {
                tick: value,
                bound: MIN_TICK,
                kind: BoundKind::Lower,
            });
        }
        if value > MAX_TICK {
            return Err(TickMathError::TickOutOfRange {
                tick: value,
                bound: MAX_TICK,
                kind: BoundKind::Upper,
            });
        }
        Ok(Self(value))
    }

    /// Wraps an index the caller has already range-checked.
    pub(crate) const fn from_raw(value: i32) -> Self {
        Self(value)
    }

    /// Returns the underlying `i32` tick index.
    #[must_use]
    pub const fn get(&self) -> i32 {
        self.0
    }

    /// Checked addition of a delta to this tick.
    ///
    /// Returns `None` if the result would be outside the valid tick range.
    #[must_use]
    pub const fn checked_add(&self, delta: i32) -> Option<Self> {
        match self.0.checked_add(delta) {
            Some(v) if v >= MIN_TICK && v <= MAX_TICK => Some(Self(v)),
            _ => None,
        }
    }

    /// Checked subtraction of a delta from this tick.
    ///
    /// Returns `None` if the result would be outside the valid tick range.
    #[must_use]
    pub const fn checked_sub(&self, delta: i32) -> Option<Self> {
        match self.0.checked_sub(delta) {
            Some(v) if v >= MIN_TICK && v <= MAX_TICK => Some(Self(v)),
            _ => None,
        }
    }

    /// Returns the Q64.96 sqrt price at this tick.
    ///
    /// Infallible: a constructed `Tick` is always in range. The result is
    /// rounded up, so it is never below `sqrt(1.0001^tick) * 2^96`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hydra_tickmath::domain::{SqrtPriceX96, Tick};
    ///
    /// assert_eq!(Tick::ZERO.sqrt_ratio(), SqrtPriceX96::ONE);
    /// assert_eq!(Tick::MIN.sqrt_ratio(), SqrtPriceX96::MIN);
    /// ```
    #[must_use]
    pub fn sqrt_ratio(&self) -> SqrtPriceX96 {
        crate::math::tick_math::sqrt_ratio_at_valid_tick(self.0)
    }
}

impl TryFrom<i32> for Tick {
    type Error = TickMathError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tick> for i32 {
    fn from(tick: Tick) -> Self {
        tick.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tick({})", self.0)
    }
}
