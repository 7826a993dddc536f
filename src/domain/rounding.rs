//! Explicit rounding direction for fixed-point shifts and grid alignment.

/// Specifies the rounding direction whenever precision is dropped.
///
/// Used when a 256-bit mantissa is narrowed to Q64.96 and when a tick
/// is snapped onto a [`TickSpacing`](crate::config::TickSpacing) grid.
/// Nothing in the library rounds implicitly.
///
/// # Examples
///
/// ```
/// use hydra_tickmath::domain::Rounding;
///
/// let r = Rounding::Up;
/// assert!(r.is_up());
/// assert!(!r.is_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards negative infinity (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
