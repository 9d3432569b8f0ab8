//! log2(x) and the shared exponent split used by [`log10`](super::log10).
//!
//! The binary exponent `e` is taken off first so that only the mantissa goes
//! through `ln`; exact powers of two then come out exact.

use super::{ilogb, ln, scalbn};
use core::f64::consts::LOG2_E;

/// Splits positive finite `x` into `(e, m)` with `x = m * 2^e` and
/// `m` in `[1, 2)`, or `[0.5, 1)` when `x < 1`.
///
/// Keeping `m` below one for `x < 1` makes `ln(m)` and `e` share a sign,
/// so the final sum does not cancel.
#[inline]
pub(crate) fn split_exponent(x: f64) -> (i32, f64) {
    let mut e = ilogb(x);
    if e < 0 {
        e += 1;
    }
    (e, scalbn(x, -e))
}

/// Base-2 logarithm of `x`.
///
/// `log2(2^n) == n` for every representable power of two.
pub fn log2(x: f64) -> f64 {
    if x.is_nan() || x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 {
        return f64::NEG_INFINITY;
    }
    if x == f64::INFINITY {
        return x;
    }
    let (e, m) = split_exponent(x);
    LOG2_E * ln(m) + e as f64
}
