// origin: fdlibm 5.3 e_cosh.c
//
// ====================================================
// Copyright (C) 1993 by Sun Microsystems, Inc. All rights reserved.
//
// Developed at SunPro, a Sun Microsystems, Inc. business.
// Permission to use, copy, modify, and distribute this
// software is freely granted, provided that this notice
// is preserved.
// ====================================================

//! Hyperbolic cosine.
//!
//! - `|x| < ln2/2`: with `t = expm1(|x|)`, cosh(x) = 1 + t*t/(2*(1+t))
//! - `|x| < 22`: (exp(|x|) + 1/exp(|x|))/2
//! - below ln(DBL_MAX): exp(|x|)/2
//! - up to the overflow threshold: (exp(|x|/2)/2) * exp(|x|/2)
//!
//! Beyond that cosh overflows.

use super::sinh::OVERFLOW_BITS;
use super::{HUGE, exp, expm1, fabs, hi_word};

/// Hyperbolic cosine of `x`. Even: `cosh(-x) == cosh(x)` bit for bit.
pub fn cosh(x: f64) -> f64 {
    let ix = hi_word(x) & 0x7fff_ffff;
    if ix >= 0x7ff0_0000 {
        return x * x;
    }
    let ax = fabs(x);

    if ix < 0x3fd6_2e43 {
        // |x| < ln2/2
        let t = expm1(ax);
        let w = 1.0 + t;
        if ix < 0x3c80_0000 {
            // cosh(tiny) = 1
            return w;
        }
        return 1.0 + (t * t) / (w + w);
    }
    if ix < 0x4036_0000 {
        // |x| < 22
        let t = exp(ax);
        return 0.5 * t + 0.5 / t;
    }
    if ix < 0x4086_2e42 {
        return 0.5 * exp(ax);
    }
    if ax.to_bits() <= OVERFLOW_BITS {
        let w = exp(0.5 * ax);
        let t = 0.5 * w;
        return t * w;
    }
    HUGE * HUGE
}
