// origin: fdlibm 5.3 e_atanh.c
//
// ====================================================
// Copyright (C) 1993 by Sun Microsystems, Inc. All rights reserved.
//
// Developed at SunPro, a Sun Microsystems, Inc. business.
// Permission to use, copy, modify, and distribute this
// software is freely granted, provided that this notice
// is preserved.
// ====================================================

//! Inverse hyperbolic tangent.
//!
//! atanh(x) = sign(x)/2 * log1p(2|x| / (1 - |x|)); below |x| = 1/2 the
//! argument is rewritten as `2|x| + 2|x|*|x|/(1 - |x|)` to keep precision.

use super::{fabs, log1p};

const TWOM28: f64 = 3.72529029846191406250e-09; // 2^-28

/// Inverse hyperbolic tangent of `x`.
///
/// `atanh(+-1) = +-inf`, NaN for `|x| > 1`.
pub fn atanh(x: f64) -> f64 {
    let ax = fabs(x);
    if ax > 1.0 {
        return (x - x) / (x - x);
    }
    if ax == 1.0 {
        return x / 0.0;
    }
    if ax < TWOM28 {
        return x;
    }
    let t = if ax < 0.5 {
        let t = ax + ax;
        0.5 * log1p(t + t * ax / (1.0 - ax))
    } else {
        0.5 * log1p((ax + ax) / (1.0 - ax))
    };
    if x >= 0.0 { t } else { -t }
}
