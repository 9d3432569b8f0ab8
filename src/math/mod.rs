//! fdlibm elementary functions and the bit-level helpers they share.
//!
//! Every routine reproduces fdlibm 5.3 bit for bit. Constants are spelled with
//! their hex words next to them, evaluation order is kept as in the reference
//! and nothing is contracted into a fused multiply-add, so results do not
//! depend on the target's FMA support.

#![allow(clippy::excessive_precision)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::unusual_byte_groupings)]

mod acosh;
mod asinh;
mod atanh;
mod copysign;
mod cos;
mod cosh;
mod exp;
mod expm1;
mod ilogb;
mod k_cos;
mod k_sin;
mod k_tan;
mod log;
mod log10;
mod log1p;
mod log2;
mod rem_pio2;
mod rem_pio2_large;
mod rem_pio2_tables;
mod scalbn;
mod sin;
mod sinh;
mod sqrt;
mod tan;
mod tanh;
mod trace;

pub use acosh::acosh;
pub use asinh::asinh;
pub use atanh::atanh;
pub use copysign::{copysign, fabs};
pub use cos::cos;
pub use cosh::cosh;
pub use exp::exp;
pub use expm1::expm1;
pub use ilogb::{FP_ILOGB0, FP_ILOGBNAN, ilogb};
pub use k_cos::k_cos;
pub use k_sin::k_sin;
pub use k_tan::k_tan;
pub use log::{ln, log};
pub use log1p::log1p;
pub use log2::log2;
pub use log10::log10;
pub use rem_pio2::{RemPio2, Reducer, rem_pio2};
pub use scalbn::scalbn;
pub use sin::sin;
pub use sinh::sinh;
pub use sqrt::sqrt;
pub use tan::tan;
pub use tanh::tanh;
#[cfg(feature = "logging")]
pub use trace::LogTrace;
pub use trace::{NoTrace, ReductionTrace, Tier};

// fdlibm splits ln2 so that k*LN2_HI is exact for |k| < 2000.
pub(crate) const LN2_HI: f64 = 6.93147180369123816490e-01; // 0x3fe62e42, 0xfee00000
pub(crate) const LN2_LO: f64 = 1.90821492927058770002e-10; // 0x3dea39ef, 0x35793c76
pub(crate) const TWO54: f64 = 1.80143985094819840000e+16; // 0x43500000, 0x00000000
pub(crate) const HUGE: f64 = 1.0e300;
pub(crate) const TINY: f64 = 1.0e-300;

// ========= bit helpers =========

/// Returns the most significant 32 bits of `x` (sign, exponent and the top 20
/// mantissa bits) as a signed integer.
#[inline(always)]
pub fn high_word(x: f64) -> i32 {
    hi_word(x) as i32
}

/// Returns the least significant 32 mantissa bits of `x`.
#[inline(always)]
pub fn low_word(x: f64) -> u32 {
    lo_word(x)
}

/// Builds a double from its high and low words. Exact inverse of
/// [`high_word`] and [`low_word`].
#[inline(always)]
pub fn from_words(hi: i32, lo: u32) -> f64 {
    with_hi_lo(hi as u32, lo)
}

#[inline(always)]
pub(crate) fn hi_word(x: f64) -> u32 {
    (x.to_bits() >> 32) as u32
}

#[inline(always)]
pub(crate) fn lo_word(x: f64) -> u32 {
    (x.to_bits() & 0xffff_ffffu64) as u32
}

#[inline(always)]
pub(crate) fn with_hi_lo(hi: u32, lo: u32) -> f64 {
    f64::from_bits(((hi as u64) << 32) | (lo as u64))
}

/// Replaces the high word of `x`, keeping its low word.
#[inline(always)]
pub(crate) fn set_hi_word(x: f64, hi: u32) -> f64 {
    with_hi_lo(hi, lo_word(x))
}

/// Clears the low word of `x`.
#[inline(always)]
pub(crate) fn zero_lo_word(x: f64) -> f64 {
    with_hi_lo(hi_word(x), 0)
}

/// floor(x) implemented via bit manipulation (no libm).
#[inline(always)]
pub(crate) fn floor_f64(x: f64) -> f64 {
    let u = x.to_bits();
    let sx = u >> 63;
    let e = ((u >> 52) & 0x7ff) as i32;
    if e == 0x7ff {
        return x;
    } // NaN/Inf
    if e == 0 {
        // |x| < 2^-1022
        return if sx == 1 && (u << 1) != 0 {
            -1.0
        } else {
            f64::from_bits(u & 0x8000_0000_0000_0000u64)
        };
    }
    let j0 = e - 1023;
    if j0 < 0 {
        // |x| < 1
        return if sx == 1 { -1.0 } else { 0.0 };
    }
    if j0 >= 52 {
        return x;
    }
    let mask = (1u64 << (52 - j0)) - 1;
    if (u & mask) == 0 {
        return x;
    }
    let mut ui = u & !mask;
    if sx == 1 {
        // negative: floor moves away from zero
        ui = ui.wrapping_add(1u64 << (52 - j0));
    }
    f64::from_bits(ui)
}
