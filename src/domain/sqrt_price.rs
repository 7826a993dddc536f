//! Square-root price in Q64.96 fixed point.

use core::fmt;

use ethnum::U256;

use super::{Price, Tick};
use crate::error::{BoundKind, TickMathError};

/// `2^96`, the Q64.96 representation of `1.0`.
pub const Q96: U256 = U256::new(1 << 96);

/// Smallest sqrt price, equal to the sqrt price at [`Tick::MIN`].
pub const MIN_SQRT_RATIO: U256 = U256::new(4_295_128_739);

/// Largest sqrt price, equal to the sqrt price at [`Tick::MAX`].
///
/// `1461446703485210103244672773810124308346321380903`, the exact ceiling
/// of `sqrt(1.0001^887272) * 2^96`.
pub const MAX_SQRT_RATIO: U256 =
    U256::from_words(4_294_805_859, 0xefd1_fc69_c6be_6872_35b5_38c8_a4a2_2627);

/// `2^96` as an `f64` (exactly representable).
pub(crate) const Q96_F64: f64 = 79_228_162_514_264_337_593_543_950_336.0;

/// Square root of a price, scaled by `2^96`.
///
/// Stored in a 256-bit integer but always below `2^160`. A constructed
/// value lies in `[MIN_SQRT_RATIO, MAX_SQRT_RATIO]`, so converting it to a
/// tick never fails.
///
/// # Examples
///
/// ```
/// use ethnum::U256;
/// use hydra_tickmath::domain::{SqrtPriceX96, Tick};
///
/// let sqrt = SqrtPriceX96::new(U256::new(1 << 96)).expect("2^96 is in range");
/// assert_eq!(sqrt, SqrtPriceX96::ONE);
/// assert_eq!(sqrt.tick(), Tick::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SqrtPriceX96(U256);

impl SqrtPriceX96 {
    /// Sqrt price at the minimum tick.
    pub const MIN: Self = Self(MIN_SQRT_RATIO);

    /// Sqrt price at the maximum tick.
    pub const MAX: Self = Self(MAX_SQRT_RATIO);

    /// Sqrt price of `1.0` (tick zero).
    pub const ONE: Self = Self(Q96);

    /// Creates a new `SqrtPriceX96` with range validation.
    ///
    /// # Errors
    ///
    /// Returns [`TickMathError::SqrtRatioOutOfRange`] if `value` is below
    /// `MIN_SQRT_RATIO` or above `MAX_SQRT_RATIO`.
    pub fn new(value: U256) -> crate::error::Result<Self> {
        if value < MIN_SQRT_RATIO {
            return Err(TickMathError::SqrtRatioOutOfRange {
                sqrt_price_x96: value,
                bound: MIN_SQRT_RATIO,
                kind: BoundKind::Lower,
            });
        }
        if value > MAX_SQRT_RATIO {
            return Err(TickMathError::SqrtRatioOutOfRange {
                sqrt_price_x96: value,
                bound: MAX_SQRT_RATIO,
                kind: BoundKind::Upper,
            });
        }
        Ok(Self(value))
    }

    /// Wraps a value the caller has already range-checked.
    pub(crate) const fn from_raw(value: U256) -> Self {
        Self(value)
    }

    /// Returns the underlying Q64.96 integer.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Returns the greatest tick whose sqrt price is `<=` this value.
    #[must_use]
    pub fn tick(&self) -> Tick {
        crate::math::tick_math::tick_at_valid_sqrt_ratio(self.0)
    }

    /// Returns the derived price `(self / 2^96)^2`.
    ///
    /// The result goes through `f64` and is meant for display and
    /// analytics. It is never fed back into the fixed-point path.
    #[must_use]
    pub fn to_price(&self) -> Price {
        let sqrt = self.0.as_f64() / Q96_F64;
        Price::from_raw(sqrt * sqrt)
    }

    /// Converts to a Q64.64 fixed-point number, dropping the lowest 32
    /// fractional bits (rounds down).
    #[cfg(feature = "fixed-point")]
    #[must_use]
    pub fn to_fixed(&self) -> fixed::types::U64F64 {
        // Values are below 2^160, so the shifted value fits in 128 bits.
        fixed::types::U64F64::from_bits((self.0 >> 32_u32).as_u128())
    }

    /// Converts from a Q64.64 fixed-point number.
    ///
    /// # Errors
    ///
    /// Returns [`TickMathError::SqrtRatioOutOfRange`] if the widened value
    /// falls outside `[MIN_SQRT_RATIO, MAX_SQRT_RATIO]`.
    #[cfg(feature = "fixed-point")]
    pub fn from_fixed(value: fixed::types::U64F64) -> crate::error::Result<Self> {
        Self::new(U256::new(value.to_bits()) << 32_u32)
    }
}

impl TryFrom<U256> for SqrtPriceX96 {
    type Error = TickMathError;

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SqrtPriceX96> for U256 {
    fn from(sqrt: SqrtPriceX96) -> Self {
        sqrt.0
    }
}

impl fmt::Display for SqrtPriceX96 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
