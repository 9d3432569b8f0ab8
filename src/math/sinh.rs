// origin: fdlibm 5.3 e_sinh.c
//
// ====================================================
// Copyright (C) 1993 by Sun Microsystems, Inc. All rights reserved.
//
// Developed at SunPro, a Sun Microsystems, Inc. business.
// Permission to use, copy, modify, and distribute this
// software is freely granted, provided that this notice
// is preserved.
// ====================================================

//! Hyperbolic sine.
//!
//! With `E = expm1(|x|)`:
//! - `|x| < 1`: sinh(x) = sign(x)/2 * (2E - E*E/(E+1))
//! - `|x| < 22`: sinh(x) = sign(x)/2 * (E + E/(E+1))
//! - below ln(DBL_MAX): sign(x)/2 * exp(|x|)
//! - up to the overflow threshold: (sign(x)/2 * exp(|x|/2)) * exp(|x|/2)
//!
//! and anything beyond overflows with the sign of `x`.

use super::{exp, expm1, fabs, hi_word};

/// Last argument whose sinh and cosh are finite, 0x408633ce_8fb9f87d.
pub(crate) const OVERFLOW_BITS: u64 = 0x4086_33ce_8fb9_f87d;

const SHUGE: f64 = 1.0e307;

/// Hyperbolic sine of `x`. Odd: `sinh(-x) == -sinh(x)` bit for bit.
pub fn sinh(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let h = if x < 0.0 { -0.5 } else { 0.5 };
    let ax = fabs(x);
    let ix = hi_word(ax);

    if ix < 0x4036_0000 {
        // |x| < 22
        if ix < 0x3e30_0000 {
            // |x| < 2^-28
            return x;
        }
        let t = expm1(ax);
        if ix < 0x3ff0_0000 {
            return h * (2.0 * t - t * t / (t + 1.0));
        }
        return h * (t + t / (t + 1.0));
    }
    if ix < 0x4086_2e42 {
        // |x| < ln(DBL_MAX)
        return h * exp(ax);
    }
    if ax.to_bits() <= OVERFLOW_BITS {
        let w = exp(0.5 * ax);
        let t = h * w;
        return t * w;
    }
    x * SHUGE
}
