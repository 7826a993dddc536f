//! Tick grid configuration for concentrated liquidity pools.

use core::fmt;

use crate::domain::{Rounding, Tick, MAX_TICK};
use crate::error::{BoundKind, TickMathError};

/// Granularity of the tick grid positions may be placed on.
///
/// Only ticks that are multiples of the spacing are usable. Because the
/// tick range is symmetric, the usable range is `[-k * s, k * s]` with
/// `k = MAX_TICK / s`.
///
/// # Validation
///
/// - Spacing must be at least `1`.
/// - Spacing must not exceed [`MAX_TICK`], so at least one grid point
///   besides zero exists on each side.
///
/// # Examples
///
/// ```
/// use hydra_tickmath::config::TickSpacing;
/// use hydra_tickmath::domain::{Rounding, Tick};
///
/// let spacing = TickSpacing::SIXTY;
/// assert_eq!(spacing.max_usable_tick().get(), 887_220);
///
/// let tick = Tick::new(85_176).unwrap_or(Tick::ZERO);
/// let aligned = spacing.align(tick, Rounding::Down).unwrap_or(Tick::ZERO);
/// assert_eq!(aligned.get(), 85_140);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TickSpacing(i32);

impl TickSpacing {
    /// Spacing of the 0.01% fee tier.
    pub const ONE: Self = Self(1);

    /// Spacing of the 0.05% fee tier.
    pub const TEN: Self = Self(10);

    /// Spacing of the 0.30% fee tier.
    pub const SIXTY: Self = Self(60);

    /// Spacing of the 1.00% fee tier.
    pub const TWO_HUNDRED: Self = Self(200);

    /// Creates a new `TickSpacing`.
    ///
    /// # Errors
    ///
    /// Returns [`TickMathError::InvalidConfiguration`] if `spacing` is not
    /// in `1..=887272`.
    pub const fn new(spacing: i32) -> crate::error::Result<Self> {
        let config = Self(spacing);
        match config.validate() {
            Ok(()) => Ok(config),
            Err(e) => Err(e),
        }
    }

    /// Validates the spacing invariants.
    ///
    /// # Errors
    ///
    /// Returns [`TickMathError::InvalidConfiguration`] if the spacing is
    /// not positive or exceeds [`MAX_TICK`].
    pub const fn validate(&self) -> crate::error::Result<()> {
        if self.0 < 1 {
            return Err(TickMathError::InvalidConfiguration(
                "tick spacing must be greater than zero",
            ));
        }
        if self.0 > MAX_TICK {
            return Err(TickMathError::InvalidConfiguration(
                "tick spacing must not exceed the maximum tick",
            ));
        }
        Ok(())
    }

    /// Returns the spacing as an `i32`.
    #[must_use]
    pub const fn get(&self) -> i32 {
        self.0
    }

    /// Returns the greatest tick that is a multiple of the spacing.
    #[must_use]
    pub const fn max_usable_tick(&self) -> Tick {
        Tick::from_raw(MAX_TICK / self.0 * self.0)
    }

    /// Returns the least tick that is a multiple of the spacing.
    #[must_use]
    pub const fn min_usable_tick(&self) -> Tick {
        Tick::from_raw(-(MAX_TICK / self.0 * self.0))
    }

    /// Number of usable grid points, both ends included.
    #[must_use]
    pub const fn max_ticks(&self) -> u32 {
        (MAX_TICK / self.0).unsigned_abs() * 2 + 1
    }

    /// Returns `true` if `tick` lies on the grid.
    #[must_use]
    pub const fn is_aligned(&self, tick: Tick) -> bool {
        tick.get() % self.0 == 0
    }

    /// Rounds `tick` to the grid in the given direction.
    ///
    /// # Errors
    ///
    /// Returns [`TickMathError::TickOutOfRange`] if the rounded tick falls
    /// outside `[min_usable_tick, max_usable_tick]`.
    pub fn align(&self, tick: Tick, rounding: Rounding) -> crate::error::Result<Tick> {
        let floor = tick.get().div_euclid(self.0) * self.0;
        let aligned = match rounding {
            Rounding::Down => floor,
            Rounding::Up if floor == tick.get() => floor,
            Rounding::Up => floor + self.0,
        };

        let (min, max) = (self.min_usable_tick().get(), self.max_usable_tick().get());
        if aligned < min {
            return Err(TickMathError::TickOutOfRange {
                tick: aligned,
                bound: min,
                kind: BoundKind::Lower,
            });
        }
        if aligned > max {
            return Err(TickMathError::TickOutOfRange {
                tick: aligned,
                bound: max,
                kind: BoundKind::Upper,
            });
        }
        Ok(Tick::from_raw(aligned))
    }
}

impl TryFrom<i32> for TickSpacing {
    type Error = TickMathError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Default for TickSpacing {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for TickSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TickSpacing({})", self.0)
    }
}
