//! Sign helpers: copysign and fabs.
//!
//! Both work on the sign bit alone, so signed zeros and NaN payloads pass
//! through untouched.

const SIGN_MASK: u64 = 0x8000_0000_0000_0000u64;

/// Returns `x` with the sign bit of `y`.
#[inline(always)]
pub fn copysign(x: f64, y: f64) -> f64 {
    f64::from_bits((x.to_bits() & !SIGN_MASK) | (y.to_bits() & SIGN_MASK))
}

/// Returns `|x|` by clearing the sign bit.
#[inline(always)]
pub fn fabs(x: f64) -> f64 {
    f64::from_bits(x.to_bits() & !SIGN_MASK)
}
