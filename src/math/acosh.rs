// origin: fdlibm 5.3 e_acosh.c
//
// ====================================================
// Copyright (C) 1993 by Sun Microsystems, Inc. All rights reserved.
//
// Developed at SunPro, a Sun Microsystems, Inc. business.
// Permission to use, copy, modify, and distribute this
// software is freely granted, provided that this notice
// is preserved.
// ====================================================

//! Inverse hyperbolic cosine.
//!
//! acosh(x) = log(x + sqrt(x*x - 1)), evaluated as
//! - `x > 2^28`: log(x) + ln2
//! - `x > 2`: log(2x - 1/(x + sqrt(x*x - 1)))
//! - otherwise, with `t = x - 1`: log1p(t + sqrt(2t + t*t))

use super::{ln, log1p, sqrt};
use core::f64::consts::LN_2;

const TWO28: f64 = 268435456.0; // 2^28

/// Inverse hyperbolic cosine of `x`, NaN for `x < 1`.
pub fn acosh(x: f64) -> f64 {
    if x < 1.0 {
        return (x - x) / (x - x);
    }
    if x > TWO28 {
        if !x.is_finite() {
            return x + x;
        }
        return ln(x) + LN_2;
    }
    if x == 1.0 {
        return 0.0;
    }
    if x > 2.0 {
        let t = x * x;
        return ln(2.0 * x - 1.0 / (x + sqrt(t - 1.0)));
    }
    // NaN falls through here and propagates
    let t = x - 1.0;
    log1p(t + sqrt(2.0 * t + t * t))
}
