//! Exchange rate between two tokens.

use core::fmt;

use crate::error::TickMathError;

/// Exchange rate between two tokens as a dimensionless ratio
/// (`amount_1 / amount_0`).
///
/// Wraps an `f64` value that must be finite and non-negative. A `Price` is
/// an input or a display value only: the library never stores one, and
/// every derived price is recomputed from a [`SqrtPriceX96`](super::SqrtPriceX96)
/// or a [`Tick`](super::Tick).
///
/// # Examples
///
/// ```
/// use hydra_tickmath::domain::Price;
///
/// let price = Price::new(5000.0);
/// assert!(price.is_ok());
/// assert!(Price::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    /// Price ratio of 1:1.
    pub const ONE: Self = Self(1.0);

    /// Price ratio of zero.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Price` from an `f64` value.
    ///
    /// Zero is accepted here; conversions that need a logarithm reject it.
    ///
    /// # Errors
    ///
    /// Returns [`TickMathError::InvalidPrice`] if the value is negative,
    /// NaN, or infinite.
    pub fn new(value: f64) -> crate::error::Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(TickMathError::InvalidPrice { price: value });
        }
        Ok(Self(value))
    }

    /// Wraps a value computed from a valid sqrt price.
    pub(crate) const fn from_raw(value: f64) -> Self {
        Self(value)
    }

    /// Returns the underlying `f64` value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Returns `true` if the price is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Computes the reciprocal price (`1 / self`), i.e. the same rate
    /// quoted in the other token.
    ///
    /// # Errors
    ///
    /// Returns [`TickMathError::InvalidPrice`] if the price is zero or the
    /// reciprocal is not finite.
    pub fn inverse(&self) -> crate::error::Result<Self> {
        if self.is_zero() {
            return Err(TickMathError::InvalidPrice { price: self.0 });
        }
        Self::new(1.0 / self.0)
    }
}

impl TryFrom<f64> for Price {
    type Error = TickMathError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
