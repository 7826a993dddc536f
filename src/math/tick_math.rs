//! Bit-exact conversions between ticks, Q64.96 sqrt prices and prices.
//!
//! These functions implement the relationship `price = 1.0001^tick`
//! used by concentrated liquidity pools entirely in integer arithmetic:
//!
//! - [`get_sqrt_ratio_at_tick`] — `sqrt(1.0001^tick) * 2^96`, rounded up.
//! - [`get_tick_at_sqrt_ratio`] — the greatest tick whose sqrt price is
//!   `<=` the input.
//! - [`price_to_tick`] — convenience composition through
//!   [`price_to_sqrt_ratio`].
//!
//! # Examples
//!
//! ```
//! use hydra_tickmath::domain::{Price, SqrtPriceX96, Tick};
//! use hydra_tickmath::math::{get_sqrt_ratio_at_tick, get_tick_at_sqrt_ratio, price_to_tick};
//!
//! let sqrt = get_sqrt_ratio_at_tick(85_176).expect("tick in range");
//! let tick = get_tick_at_sqrt_ratio(sqrt.get()).expect("sqrt price in range");
//! assert_eq!(tick.get(), 85_176);
//!
//! let price = Price::new(5000.0).expect("valid price");
//! assert_eq!(price_to_tick(price).expect("price in range").get(), 85_176);
//! ```
//!
//! # Precision
//!
//! No floating-point `pow` or `log` is involved, so results are identical
//! on every platform. The forward conversion multiplies 256-bit mantissas
//! through 512-bit products, rounding each step up, and lands on the exact
//! ceiling of `sqrt(1.0001^tick) * 2^96` for every tick in range. The
//! reverse conversion resolves the residual error of its logarithm
//! estimate by checking candidates against the forward conversion.

use ethnum::{I256, U256};
use tracing::{debug, trace};

use super::bit_math::{floor_f64, most_significant_bit, mul_wide, shr_round};
use crate::domain::{Price, Rounding, SqrtPriceX96, Tick, MAX_TICK, Q96_F64};
use crate::error::{BoundKind, TickMathError};

/// `1.0001^(2^i / 2)` rounded up, for bit `i` of a positive tick.
const SQRT_POWERS: [Scaled; 20] = [
    Scaled::new(
        0x8001_a36b_7f88_b395_72ad_6807_ae1c_2b2e,
        0x30ce_88fa_4f9b_b56f_aa98_ed5e_39b5_25d1,
        0,
    ),
    Scaled::new(
        0x8003_46dc_5d63_8865_94af_4f0d_844d_013a,
        0x92a3_0553_2617_c1bd_a511_9ce0_75f6_fd22,
        0,
    ),
    Scaled::new(
        0x8006_8dce_3455_f2fb_b598_7dba_c0db_a7db,
        0xfc95_924d_f5d7_322b_7650_694e_f90c_70d2,
        0,
    ),
    Scaled::new(
        0x800d_1bf2_511a_6584_1828_b728_ca28_50a2,
        0xee73_9e38_08ca_51fe_509b_eacc_fb61_3779,
        0,
    ),
    Scaled::new(
        0x801a_393c_5587_4956_d12d_5a30_0c93_cfc7,
        0xca77_ebd4_f6ab_1eb7_b4d3_e2c5_3543_3e88,
        0,
    ),
    Scaled::new(
        0x8034_77d8_0529_2a40_52eb_fee1_667a_ccc7,
        0xa16f_d542_0ead_d610_88fc_30d7_fee3_938a,
        0,
    ),
    Scaled::new(
        0x8069_0531_da0b_9c1c_efce_d552_b422_1672,
        0xbdab_444c_b127_da66_09b8_ef76_fd31_20c3,
        0,
    ),
    Scaled::new(
        0x80d2_608e_3a16_ebb9_4b9c_6faf_4b31_cb78,
        0x16f9_8cad_7e6a_abd4_85f4_a226_63d6_3fa8,
        0,
    ),
    Scaled::new(
        0x81a6_1ae1_8fb2_67d3_6e06_b6f2_1e84_40e9,
        0xbf09_9b7e_e4d0_474c_80a6_2cb7_6512_56f8,
        0,
    ),
    Scaled::new(
        0x8351_a5bc_6455_7fdf_c0df_6ad1_9587_e73a,
        0x3f62_c4b9_315a_fbf8_cf40_1de6_2bac_4d31,
        0,
    ),
    Scaled::new(
        0x86b9_5352_3666_c5e7_4d73_b8d8_b14a_53f5,
        0x5bde_9964_fd80_ff7f_bc2b_8971_9b4a_63f3,
        0,
    ),
    Scaled::new(
        0x8dcd_12c7_31c9_42cb_6e3a_bfd5_198a_a6fb,
        0x562e_7e4a_abb7_51af_9f82_df6a_c98e_bccc,
        0,
    ),
    Scaled::new(
        0x9d17_15ed_027c_1bcf_9e68_bdf2_e1a1_ea29,
        0x38f0_0f24_2d6b_8015_4b6c_76db_db29_dba6,
        0,
    ),
    Scaled::new(
        0xc0ca_a5f3_4f06_d47f_3bf9_55a1_743e_7a88,
        0xdf7f_fb2e_4013_fd08_cc2a_6e25_d23f_c2e5,
        0,
    ),
    Scaled::new(
        0x9130_9957_4616_80a4_2009_4a1d_c241_87dd,
        0x1665_0048_3174_db8a_56fe_2ece_7fb8_30b5,
        1,
    ),
    Scaled::new(
        0xa4b0_2ddd_73f2_6b63_8c2c_ef3d_00fc_4c96,
        0x412f_6418_8089_d46f_b6b5_d2b5_e081_4a3b,
        2,
    ),
    Scaled::new(
        0xd3e4_6805_aa8b_427f_a698_d703_280d_c0fd,
        0x3cbe_4e3f_0da1_5c98_455e_855c_d101_b749,
        4,
    ),
    Scaled::new(
        0xaf62_4f42_cb7d_f25e_2116_4319_b378_f463,
        0x281a_7e57_2ce7_08b1_591b_16c9_a5e0_aab9,
        9,
    ),
    Scaled::new(
        0xf04f_1c3c_33c8_919f_172b_a42a_5b99_e825,
        0x1e53_b00b_22b3_9d42_ef05_8e17_d00a_dbd8,
        18,
    ),
    Scaled::new(
        0xe194_6d63_515d_4050_5bfa_b78c_64e8_86de,
        0x17a7_cc0f_dfe1_05b0_214f_1c50_94fa_7109,
        37,
    ),
];

/// `1.0001^(-2^i / 2)` rounded up, for bit `i` of `|tick|` when the tick
/// is negative.
const SQRT_RECIPROCAL_POWERS: [Scaled; 20] = [
    Scaled::new(
        0xfffc_b933_bd6f_ad37_aa2d_162d_1a59_4001,
        0x7330_71ca_6326_2237_570e_09e3_edc8_f841,
        -1,
    ),
    Scaled::new(
        0xfff9_7272_373d_4132_59a4_6990_580e_2139,
        0xb8e3_eb6b_6eb5_7c60_c221_885b_8954_8c61,
        -1,
    ),
    Scaled::new(
        0xfff2_e50f_5f65_6932_ef12_357c_f3c7_fdcb,
        0x98a5_078d_a53e_fa26_beae_7803_446f_0f11,
        -1,
    ),
    Scaled::new(
        0xffe5_caca_7e10_e4e6_1c36_24ea_a094_1ccf,
        0xf04a_8a21_2009_f027_f9bc_0aa9_0ef3_7334,
        -1,
    ),
    Scaled::new(
        0xffcb_9843_d60f_6159_c9db_5883_5c92_6643,
        0xad7c_09ed_8821_ecfd_3542_ca2e_646b_1ab9,
        -1,
    ),
    Scaled::new(
        0xff97_3b41_fa98_c081_472e_6896_dfb2_54bf,
        0x81ef_047c_569d_b3b2_81e4_2e93_fd42_ce87,
        -1,
    ),
    Scaled::new(
        0xff2e_a164_66c9_6a38_43ec_78b3_26b5_2860,
        0x97e9_315c_35bf_fb5c_6ae7_9a39_71d4_b9fc,
        -1,
    ),
    Scaled::new(
        0xfe5d_ee04_6a99_a2a8_11c4_61f1_969c_3052,
        0xf544_235f_4d64_fdc8_7985_3b3c_af63_cfc4,
        -1,
    ),
    Scaled::new(
        0xfcbe_86c7_900a_88ae_dcff_c83b_479a_a3a3,
        0xdc26_8667_328f_4b9a_0cf2_6b80_2567_4fd5,
        -1,
    ),
    Scaled::new(
        0xf987_a725_3ac4_1317_6f2b_074c_f781_5e53,
        0xfacb_f190_6fa6_5ab8_4404_323c_f11c_e810,
        -1,
    ),
    Scaled::new(
        0xf339_2b08_22b7_0005_940c_7a39_8e4b_70f2,
        0xca02_c578_b1d4_2159_9c54_537e_8f67_7257,
        -1,
    ),
    Scaled::new(
        0xe715_9475_a2c2_9b74_43b2_9c7f_a6e8_89d8,
        0x9a78_8532_63da_3b31_83b9_d1cf_5c6c_e2db,
        -1,
    ),
    Scaled::new(
        0xd097_f3bd_fd20_22b8_845a_d8f7_92aa_5825,
        0x6a3d_f3fc_12a5_c155_c2a4_a16f_d5e0_1f2c,
        -1,
    ),
    Scaled::new(
        0xa9f7_4646_2d87_0fdf_8a65_dc1f_90e0_61e4,
        0xfa16_0424_952d_52a6_6c57_f61f_b9cd_b256,
        -1,
    ),
    Scaled::new(
        0xe1b0_d342_ada5_4371_2176_7bec_575e_65ed,
        0x892e_89aa_0416_b922_89df_71ee_7e49_e9db,
        -2,
    ),
    Scaled::new(
        0xc6f8_4d7e_5f42_3f66_048c_5415_50bf_3e96,
        0x1b07_a133_fa92_b416_aabb_3298_feeb_3100,
        -3,
    ),
    Scaled::new(
        0x9aa5_08b5_b7a8_4e1c_677d_e54f_3e99_bc8f,
        0xdac1_d580_d2ea_031a_e1e6_0fc4_9550_8de7,
        -5,
    ),
    Scaled::new(
        0xbad5_f1bd_b702_32cd_3386_5244_bdcc_089c,
        0x1cdb_9237_6508_7f1c_7571_a9b8_f13b_e20f,
        -10,
    ),
    Scaled::new(
        0x885b_9613_d7e8_7aa4_9810_6fb7_fa5e_dd37,
        0x2d3f_cdae_725b_e7b6_d386_97d5_c390_f1d6,
        -19,
    ),
    Scaled::new(
        0x9142_e072_3efb_8848_89d1_f447_715a_facd,
        0x30fd_3969_0f00_408f_39d8_dfc6_7c63_3b22,
        -38,
    ),
];

/// A positive real `mantissa * 2^(exponent - 255)`, with the mantissa
/// normalised to `[2^255, 2^256)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Scaled {
    mantissa: U256,
    exponent: i32,
}

impl Scaled {
    /// `1.0`.
    const ONE: Self = Self::new(1 << 127, 0, 0);

    const fn new(hi: u128, lo: u128, exponent: i32) -> Self {
        Self {
            mantissa: U256::from_words(hi, lo),
            exponent,
        }
    }

    /// Product rounded up to 256 significant bits.
    fn mul_up(self, rhs: Self) -> Self {
        let (high, low) = mul_wide(self.mantissa, rhs.mantissa);
        let exponent = self.exponent + rhs.exponent;

        // Both mantissas are normalised, so the product is in [2^510, 2^512).
        let (mantissa, remainder, exponent) = if high.leading_zeros() == 0 {
            (high, low, exponent + 1)
        } else {
            ((high << 1_u32) | (low >> 255_u32), low << 1_u32, exponent)
        };
        if remainder == U256::ZERO {
            return Self { mantissa, exponent };
        }
        match mantissa.checked_add(U256::ONE) {
            Some(mantissa) => Self { mantissa, exponent },
            None => Self {
                mantissa: U256::ONE << 255_u32,
                exponent: exponent + 1,
            },
        }
    }
}

/// Fractional bits of `log2` resolved by repeated squaring.
///
/// The estimate is a Q64.64 value, but only its top 14 fractional bits
/// are computed; the lower 50 stay zero. The error that leaves is below
/// `2^-14` in `log2`, under one tick, and `TICK_LOW_ERROR` /
/// `TICK_HIGH_ERROR` are sized for exactly this precision, so the two
/// candidates always bracket the answer. Verified for every tick in range:
/// `tick_at(sqrt_at(t)) == t` and `tick_at(sqrt_at(t) - 1) == t - 1`.
const LOG2_FRACTION_BITS: u32 = 14;

/// `2^64 / log2(sqrt(1.0001))`: turns a Q64.64 `log2` into a Q128.128
/// `log_sqrt(1.0001)`.
const LOG_SQRT_10001_FACTOR: I256 = I256::new(255_738_958_999_603_826_347_141);

/// Maximum amount by which the estimate can overshoot the true tick.
const TICK_LOW_ERROR: I256 = I256::new(3_402_992_956_809_132_418_596_140_100_660_247_210);

/// Maximum amount by which the estimate can undershoot the true tick.
const TICK_HIGH_ERROR: I256 =
    U256::new(291_339_464_771_989_622_907_027_621_153_398_088_495).as_i256();

/// Logs a rejected input and hands the error back for propagation.
fn rejected(error: TickMathError) -> TickMathError {
    debug!(%error, "tick math input rejected");
    error
}

/// Returns the sqrt price as a Q64.96 for the given tick: the smallest
/// Q64.96 value `>= sqrt(1.0001^tick) * 2^96`.
///
/// # Errors
///
/// Returns [`TickMathError::TickOutOfRange`] if `tick` is outside
/// `[-887272, 887272]`.
///
/// # Examples
///
/// ```
/// use hydra_tickmath::domain::SqrtPriceX96;
/// use hydra_tickmath::math::get_sqrt_ratio_at_tick;
///
/// assert_eq!(get_sqrt_ratio_at_tick(0), Ok(SqrtPriceX96::ONE));
/// assert_eq!(get_sqrt_ratio_at_tick(-887_272), Ok(SqrtPriceX96::MIN));
/// assert!(get_sqrt_ratio_at_tick(887_273).is_err());
/// ```
pub fn get_sqrt_ratio_at_tick(tick: i32) -> crate::error::Result<SqrtPriceX96> {
    let tick = Tick::new(tick).map_err(rejected)?;
    Ok(sqrt_ratio_at_valid_tick(tick.get()))
}

/// Returns the greatest tick whose sqrt price is `<=` `sqrt_price_x96`.
///
/// For every valid input `s` the result `t` satisfies
/// `get_sqrt_ratio_at_tick(t) <= s < get_sqrt_ratio_at_tick(t + 1)`; the
/// upper inequality is vacuous at `MAX_TICK`.
///
/// # Errors
///
/// Returns [`TickMathError::SqrtRatioOutOfRange`] if `sqrt_price_x96` is
/// outside `[MIN_SQRT_RATIO, MAX_SQRT_RATIO]`.
///
/// # Examples
///
/// ```
/// use hydra_tickmath::domain::{Tick, MAX_SQRT_RATIO, Q96};
/// use hydra_tickmath::math::get_tick_at_sqrt_ratio;
///
/// assert_eq!(get_tick_at_sqrt_ratio(Q96), Ok(Tick::ZERO));
/// assert_eq!(get_tick_at_sqrt_ratio(Q96 - 1).map(|t| t.get()), Ok(-1));
/// assert!(get_tick_at_sqrt_ratio(MAX_SQRT_RATIO + 1).is_err());
/// ```
pub fn get_tick_at_sqrt_ratio(sqrt_price_x96: U256) -> crate::error::Result<Tick> {
    let sqrt = SqrtPriceX96::new(sqrt_price_x96).map_err(rejected)?;
    Ok(tick_at_valid_sqrt_ratio(sqrt.get()))
}

/// Encodes a price as a Q64.96 sqrt price: `floor(sqrt(price) * 2^96)`.
///
/// `f64::sqrt` is correctly rounded and scaling by `2^96` is exact, so the
/// only approximation is the one already present in the `f64` input.
///
/// # Errors
///
/// - [`TickMathError::InvalidPrice`] if `price` is zero.
/// - [`TickMathError::SqrtRatioOutOfRange`] if the encoded value falls
///   outside `[MIN_SQRT_RATIO, MAX_SQRT_RATIO]`.
/// - [`TickMathError::PriceOutOfRange`] if the encoded value does not fit
///   in 256 bits.
pub fn price_to_sqrt_ratio(price: Price) -> crate::error::Result<SqrtPriceX96> {
    let value = price.get();
    if value <= 0.0 {
        return Err(rejected(TickMathError::InvalidPrice { price: value }));
    }
    let Some(encoded) = floor_f64(value.sqrt() * Q96_F64) else {
        return Err(rejected(TickMathError::PriceOutOfRange {
            price: value,
            kind: BoundKind::Upper,
        }));
    };
    SqrtPriceX96::new(encoded).map_err(rejected)
}

/// Returns the greatest tick whose price is `<=` the given price.
///
/// Goes through the fixed-point encoding of [`price_to_sqrt_ratio`] and
/// [`get_tick_at_sqrt_ratio`]; no floating-point logarithm is taken.
///
/// # Errors
///
/// Same as [`price_to_sqrt_ratio`].
///
/// # Examples
///
/// ```
/// use hydra_tickmath::domain::Price;
/// use hydra_tickmath::math::price_to_tick;
///
/// let tick = price_to_tick(Price::ONE).expect("price 1.0 is valid");
/// assert_eq!(tick.get(), 0);
/// assert!(price_to_tick(Price::ZERO).is_err());
/// ```
pub fn price_to_tick(price: Price) -> crate::error::Result<Tick> {
    let sqrt = price_to_sqrt_ratio(price)?;
    let tick = sqrt.tick();
    trace!(price = price.get(), sqrt_price_x96 = %sqrt, tick = tick.get(), "price mapped to tick");
    Ok(tick)
}

/// Returns the derived price `1.0001^tick`, computed from the tick's
/// sqrt price. Intended for display; the value passes through `f64`.
#[must_use]
pub fn price_at_tick(tick: Tick) -> Price {
    tick.sqrt_ratio().to_price()
}

/// Forward conversion for a tick already known to be in range.
pub(crate) fn sqrt_ratio_at_valid_tick(tick: i32) -> SqrtPriceX96 {
    let abs_tick = tick.unsigned_abs();
    let factors = if tick > 0 {
        &SQRT_POWERS
    } else {
        &SQRT_RECIPROCAL_POWERS
    };

    // Every factor and every product is rounded up: an upper bound on
    // sqrt(1.0001^tick) within 2^-240 relative.
    let mut ratio = Scaled::ONE;
    for (bit, factor) in factors.iter().enumerate() {
        if abs_tick & (1_u32 << bit) != 0 {
            ratio = ratio.mul_up(*factor);
        }
    }

    // ratio * 2^96 = mantissa * 2^(exponent - 159), and exponent <= 63.
    let shift = (159 - ratio.exponent).unsigned_abs();
    SqrtPriceX96::from_raw(shr_round(ratio.mantissa, shift, Rounding::Up))
}

/// Reverse conversion for a sqrt price already known to be in range.
pub(crate) fn tick_at_valid_sqrt_ratio(sqrt_price_x96: U256) -> Tick {
    // Inputs are below 2^160, so the Q128.128 value is below 2^192.
    let ratio = sqrt_price_x96 << 32_u32;
    // Inputs are at least MIN_SQRT_RATIO, so the ratio is non-zero.
    let msb = most_significant_bit(ratio).unwrap_or_default();

    // Normalise to r in [2^127, 2^128): ratio = r * 2^(msb - 127).
    let mut r = if msb >= 128 {
        ratio >> (msb - 127)
    } else {
        ratio << (127 - msb)
    };

    // Fractional bits of log2(r / 2^127) by repeated squaring.
    let mut fraction: u64 = 0;
    for bit in (64 - LOG2_FRACTION_BITS..64).rev() {
        r = (r * r) >> 127_u32;
        let carry = (r >> 128_u32).as_u32();
        fraction |= u64::from(carry) << bit;
        r >>= carry;
    }

    let log2_x64 = ((i128::from(msb) - 128) << 64) + i128::from(fraction);
    let log_sqrt_10001 = I256::new(log2_x64) * LOG_SQRT_10001_FACTOR;

    let tick_low = ((log_sqrt_10001 - TICK_LOW_ERROR) >> 128_u32).as_i32();
    let tick_high = ((log_sqrt_10001 + TICK_HIGH_ERROR) >> 128_u32).as_i32();

    let tick = if tick_low == tick_high || tick_high > MAX_TICK {
        tick_low
    } else if sqrt_ratio_at_valid_tick(tick_high).get() <= sqrt_price_x96 {
        tick_high
    } else {
        tick_low
    };
    Tick::from_raw(tick)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{MAX_SQRT_RATIO, MIN_SQRT_RATIO, MIN_TICK, Q96};

    fn u256(decimal: &str) -> U256 {
        let Ok(v) = U256::from_str_radix(decimal, 10) else {
            panic!("invalid literal {decimal}");
        };
        v
    }

    fn sqrt_at(tick: i32) -> U256 {
        let Ok(sqrt) = get_sqrt_ratio_at_tick(tick) else {
            panic!("expected Ok for tick {tick}");
        };
        sqrt.get()
    }

    fn tick_at(sqrt: U256) -> i32 {
        let Ok(tick) = get_tick_at_sqrt_ratio(sqrt) else {
            panic!("expected Ok for sqrt price {sqrt}");
        };
        tick.get()
    }

    fn price(value: f64) -> Price {
        let Ok(p) = Price::new(value) else {
            panic!("valid price {value}");
        };
        p
    }

    // -- get_sqrt_ratio_at_tick ---------------------------------------------

    #[test]
    fn rejects_tick_above_max() {
        assert_eq!(
            get_sqrt_ratio_at_tick(MAX_TICK + 1),
            Err(TickMathError::TickOutOfRange {
                tick: MAX_TICK + 1,
                bound: MAX_TICK,
                kind: BoundKind::Upper,
            })
        );
    }

    #[test]
    fn rejects_tick_below_min() {
        assert_eq!(
            get_sqrt_ratio_at_tick(MIN_TICK - 1),
            Err(TickMathError::TickOutOfRange {
                tick: MIN_TICK - 1,
                bound: MIN_TICK,
                kind: BoundKind::Lower,
            })
        );
    }

    #[test]
    fn boundary_values_are_exact() {
        assert_eq!(sqrt_at(MIN_TICK), MIN_SQRT_RATIO);
        assert_eq!(sqrt_at(MAX_TICK), MAX_SQRT_RATIO);
        assert_eq!(sqrt_at(0), Q96);
    }

    #[test]
    fn values_next_to_boundaries() {
        assert_eq!(sqrt_at(MIN_TICK + 1), U256::new(4_295_343_490));
        assert_eq!(
            sqrt_at(MAX_TICK - 1),
            u256("1461373636630004318672046398259762639463073250157")
        );
    }

    #[test]
    fn known_values() {
        let cases = [
            (1, "79232123823359799118286999568"),
            (-1, "79224201403219477170569942574"),
            (50, "79426470787362580746886972461"),
            (-50, "79030349367926598376800521322"),
            (100, "79625275426524748796330556128"),
            (1_000, "83290069058676223003182343270"),
            (-1_000, "75364347830767020784054125655"),
            (10_000, "130621891405341611593710811006"),
            (50_000, "965075977353221155028623082916"),
            (150_000, "143194173941309278083010301478497"),
            (250_000, "21246587762933397357449903968194329"),
            (500_000, "5697689776495288729098254599936056708425"),
            (-500_000, "1101692437043807371"),
            (738_203, "847134979253254120489374995221978814820071392"),
            (-738_203, "7409801140451"),
        ];
        for (tick, expected) in cases {
            assert_eq!(sqrt_at(tick), u256(expected), "tick {tick}");
        }
    }

    /// `ceil(sqrt(1.0001^tick) * 2^96)`, computed offline with exact
    /// integer square roots.
    const EXACT_CEILINGS: [(i32, &str); 16] = [
        (1, "79232123823359799118286999568"),
        (-1, "79224201403219477170569942574"),
        (1_000, "83290069058676223003182343270"),
        (-1_000, "75364347830767020784054125655"),
        (132_822, "60663640243532752732355356147524"),
        (-132_822, "103473871831420005803396419"),
        (262_144, "38992368544603139932233054999993552"),
        (-262_144, "160982827401375763736069"),
        (465_587, "1019688121268740166204641273247262344029"),
        (-465_587, "6155903559586865304"),
        (524_287, "19189247130466284822469633862652052790147"),
        (-524_288, "327099227039063107"),
        (887_271, "1461373636630004318672046398259762639463073250157"),
        (-887_271, "4295343490"),
        (MAX_TICK, "1461446703485210103244672773810124308346321380903"),
        (MIN_TICK, "4295128739"),
    ];

    #[test]
    fn never_below_true_value_and_within_one_unit() {
        for (tick, ceiling) in EXACT_CEILINGS {
            let exact = u256(ceiling);
            let got = sqrt_at(tick);
            assert!(got >= exact, "tick {tick}: {got} below ceiling {exact}");
            assert!(got - exact <= U256::ONE, "tick {tick}: {got} vs {exact}");
        }
    }

    #[test]
    fn scaled_one_is_identity() {
        for factor in SQRT_POWERS.iter().chain(SQRT_RECIPROCAL_POWERS.iter()) {
            assert_eq!(Scaled::ONE.mul_up(*factor), *factor);
        }
    }

    #[test]
    fn scaled_product_rounds_up() {
        // (2^255 + 1)^2 = 2^510 + 2^256 + 1, truncated to 2^255 + 2.
        let a = Scaled::new(1 << 127, 1, 0);
        assert_eq!(a.mul_up(a), Scaled::new(1 << 127, 3, 0));
    }

    #[test]
    fn scaled_product_renormalises() {
        // (2^256 - 1)^2 = 2^512 - 2^257 + 1 carries into the exponent.
        let a = Scaled::new(u128::MAX, u128::MAX, 2);
        assert_eq!(a.mul_up(a), Scaled::new(u128::MAX, u128::MAX, 5));
    }

    #[test]
    fn strictly_increasing_around_zero() {
        let mut previous = sqrt_at(-200);
        for tick in -199..=200 {
            let current = sqrt_at(tick);
            assert!(current > previous, "not increasing at tick {tick}");
            previous = current;
        }
    }

    // -- get_tick_at_sqrt_ratio ---------------------------------------------

    #[test]
    fn rejects_sqrt_ratio_outside_bounds() {
        assert_eq!(
            get_tick_at_sqrt_ratio(MAX_SQRT_RATIO + 1),
            Err(TickMathError::SqrtRatioOutOfRange {
                sqrt_price_x96: MAX_SQRT_RATIO + 1,
                bound: MAX_SQRT_RATIO,
                kind: BoundKind::Upper,
            })
        );
        assert_eq!(
            get_tick_at_sqrt_ratio(MIN_SQRT_RATIO - 1),
            Err(TickMathError::SqrtRatioOutOfRange {
                sqrt_price_x96: MIN_SQRT_RATIO - 1,
                bound: MIN_SQRT_RATIO,
                kind: BoundKind::Lower,
            })
        );
        assert!(get_tick_at_sqrt_ratio(U256::ZERO).is_err());
    }

    #[test]
    fn tick_at_boundaries() {
        assert_eq!(tick_at(MIN_SQRT_RATIO), MIN_TICK);
        assert_eq!(tick_at(MIN_SQRT_RATIO + 1), MIN_TICK);
        assert_eq!(tick_at(MAX_SQRT_RATIO - 1), MAX_TICK - 1);
        assert_eq!(tick_at(MAX_SQRT_RATIO), MAX_TICK);
    }

    #[test]
    fn tick_around_price_one() {
        assert_eq!(tick_at(Q96), 0);
        assert_eq!(tick_at(Q96 - 1), -1);
        assert_eq!(tick_at(Q96 + 1), 0);
    }

    #[test]
    fn tick_at_arbitrary_values() {
        let cases = [
            (Q96 * 3, 21_973),
            (U256::ONE << 100_u32, 55_454),
            (U256::ONE << 159_u32, 873_409),
            (U256::ONE << 33_u32, -873_410),
            (U256::ONE << 64_u32, -443_637),
            (u256("1000000000000000000000000000000"), 50_711),
            (u256("123456789012345678901234567890"), 8_871),
        ];
        for (sqrt, expected) in cases {
            assert_eq!(tick_at(sqrt), expected, "sqrt price {sqrt}");
        }
    }

    #[test]
    fn round_trip_and_floor_on_sample_ticks() {
        for tick in [
            MIN_TICK, -887_271, -500_000, -100_000, -1_000, -1, 0, 1, 1_000, 100_000, 500_000,
            887_271, MAX_TICK,
        ] {
            let sqrt = sqrt_at(tick);
            assert_eq!(tick_at(sqrt), tick, "round trip of tick {tick}");
            if tick > MIN_TICK {
                assert_eq!(tick_at(sqrt - 1), tick - 1, "floor below tick {tick}");
            }
        }
    }

    // -- price conversions --------------------------------------------------

    #[test]
    fn price_to_sqrt_ratio_matches_demonstration() {
        let cases = [
            (4545.0, "5341294542274603406682713227264"),
            (5000.0, "5602277097478614198912276234240"),
            (5500.0, "5875717789736564987741329162240"),
        ];
        for (p, expected) in cases {
            let Ok(sqrt) = price_to_sqrt_ratio(price(p)) else {
                panic!("expected Ok for price {p}");
            };
            assert_eq!(sqrt.get(), u256(expected), "price {p}");
        }
    }

    #[test]
    fn price_to_tick_matches_demonstration() {
        for (p, expected) in [(4545.0, 84_222), (5000.0, 85_176), (5500.0, 86_129)] {
            let Ok(tick) = price_to_tick(price(p)) else {
                panic!("expected Ok for price {p}");
            };
            assert_eq!(tick.get(), expected, "price {p}");
        }
    }

    #[test]
    fn price_to_tick_simple_ratios() {
        let Ok(one) = price_to_tick(Price::ONE) else {
            panic!("expected Ok");
        };
        let Ok(two) = price_to_tick(price(2.0)) else {
            panic!("expected Ok");
        };
        let Ok(half) = price_to_tick(price(0.5)) else {
            panic!("expected Ok");
        };
        assert_eq!(one.get(), 0);
        assert_eq!(two.get(), 6_931);
        assert_eq!(half.get(), -6_932);
    }

    #[test]
    fn price_to_tick_rejects_zero() {
        assert_eq!(
            price_to_tick(Price::ZERO),
            Err(TickMathError::InvalidPrice { price: 0.0 })
        );
    }

    #[test]
    fn price_to_tick_rejects_tiny_price() {
        let Err(e) = price_to_tick(price(2.9e-39)) else {
            panic!("expected Err");
        };
        assert_eq!(
            e,
            TickMathError::SqrtRatioOutOfRange {
                sqrt_price_x96: U256::new(4_266_567_125),
                bound: MIN_SQRT_RATIO,
                kind: BoundKind::Lower,
            }
        );
    }

    #[test]
    fn price_to_tick_rejects_huge_prices() {
        let Err(e) = price_to_tick(price(1e40)) else {
            panic!("expected Err");
        };
        assert_eq!(e.bound_kind(), Some(BoundKind::Upper));
        assert!(matches!(e, TickMathError::SqrtRatioOutOfRange { .. }));

        assert_eq!(
            price_to_tick(price(f64::MAX)),
            Err(TickMathError::PriceOutOfRange {
                price: f64::MAX,
                kind: BoundKind::Upper,
            })
        );
    }

    #[test]
    fn price_to_tick_near_bounds() {
        let Ok(low) = price_to_tick(price(1e-38)) else {
            panic!("expected Ok");
        };
        let Ok(high) = price_to_tick(price(3.4e38)) else {
            panic!("expected Ok");
        };
        assert_eq!(low.get(), -875_027);
        assert_eq!(high.get(), 887_264);
    }

    #[test]
    fn price_at_tick_is_close_to_power() {
        for tick in [-10_000, -1, 0, 1, 2_000, 10_000] {
            let Ok(t) = Tick::new(tick) else {
                panic!("expected Ok");
            };
            let expected = 1.0001_f64.powi(tick);
            let got = price_at_tick(t).get();
            assert!(
                ((got - expected) / expected).abs() < 1e-12,
                "tick {tick}: {got} vs {expected}"
            );
        }
    }
}
