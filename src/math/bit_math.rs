//! Bit-level helpers for 256-bit fixed-point values.
//!
//! The low-level building blocks of the tick math: locating the most
//! significant bit, full-width multiplication, narrowing a fixed-point
//! value with an explicit [`Rounding`] direction, and turning an `f64`
//! into an exact integer.
//!
//! # Examples
//!
//! ```
//! use ethnum::U256;
//! use hydra_tickmath::domain::Rounding;
//! use hydra_tickmath::math::{most_significant_bit, shr_round};
//!
//! assert_eq!(most_significant_bit(U256::new(0b1000)), Some(3));
//! assert_eq!(shr_round(U256::new(9), 2, Rounding::Down), U256::new(2));
//! assert_eq!(shr_round(U256::new(9), 2, Rounding::Up), U256::new(3));
//! ```

use ethnum::U256;

use crate::domain::Rounding;

/// Number of explicit mantissa bits in an IEEE 754 `f64`.
const F64_MANTISSA_BITS: u32 = 52;

/// Exponent bias of an IEEE 754 `f64`, including the mantissa width.
const F64_EXPONENT_OFFSET: i32 = 1075;

/// Returns the index of the highest set bit, or `None` for zero.
#[must_use]
pub fn most_significant_bit(value: U256) -> Option<u32> {
    if value == U256::ZERO {
        return None;
    }
    Some(255 - value.leading_zeros())
}

/// Full 512-bit product of two 256-bit values, as `(high, low)` words.
///
/// Schoolbook multiplication over 128-bit limbs; every partial product
/// fits in a `U256`.
#[must_use]
pub fn mul_wide(a: U256, b: U256) -> (U256, U256) {
    let (a_hi, a_lo) = a.into_words();
    let (b_hi, b_lo) = b.into_words();

    let lo_lo = U256::from(a_lo) * U256::from(b_lo);
    let lo_hi = U256::from(a_lo) * U256::from(b_hi);
    let hi_lo = U256::from(a_hi) * U256::from(b_lo);
    let hi_hi = U256::from(a_hi) * U256::from(b_hi);

    let (middle, middle_carry) = lo_hi.overflowing_add(hi_lo);
    let (low, low_carry) = lo_lo.overflowing_add(middle << 128_u32);

    let mut high = hi_hi + (middle >> 128_u32);
    if middle_carry {
        high += U256::ONE << 128_u32;
    }
    if low_carry {
        high += U256::ONE;
    }
    (high, low)
}

/// Shifts `value` right by `bits` with an explicit rounding direction.
///
/// - [`Rounding::Down`]: plain truncation.
/// - [`Rounding::Up`]: adds one if any shifted-out bit was set.
///
/// Shifts of 256 bits or more leave nothing of the integer part, so the
/// result is zero (or one when rounding a non-zero value up).
#[must_use]
pub fn shr_round(value: U256, bits: u32, rounding: Rounding) -> U256 {
    let (quotient, exact) = if bits >= 256 {
        (U256::ZERO, value == U256::ZERO)
    } else {
        let quotient = value >> bits;
        (quotient, quotient << bits == value)
    };
    match rounding {
        Rounding::Down => quotient,
        // quotient + 1 cannot overflow: a remainder implies bits > 0.
        Rounding::Up if !exact => quotient + 1,
        Rounding::Up => quotient,
    }
}

/// Converts a non-negative finite `f64` to the integer `floor(value)`.
///
/// The conversion is exact: the mantissa and exponent are unpacked and
/// shifted, so no bits are lost to an intermediate float. Returns `None`
/// for negative or non-finite input and for values of `2^256` or more.
#[must_use]
pub fn floor_f64(value: f64) -> Option<U256> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    if value < 1.0 {
        return Some(U256::ZERO);
    }
    let bits = value.to_bits();
    // value >= 1.0, so the number is normal and the implicit bit is set.
    let mantissa = (bits & ((1 << F64_MANTISSA_BITS) - 1)) | (1 << F64_MANTISSA_BITS);
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let exponent = ((bits >> F64_MANTISSA_BITS) & 0x7ff) as i32 - F64_EXPONENT_OFFSET;
    if exponent >= 0 {
        let shift = exponent.unsigned_abs();
        if shift + F64_MANTISSA_BITS >= 256 {
            return None;
        }
        Some(U256::from(mantissa) << shift)
    } else {
        // -52 <= exponent < 0 for values in [1, 2^52).
        Some(U256::from(mantissa >> exponent.unsigned_abs()))
    }
}
