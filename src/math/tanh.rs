// origin: fdlibm 5.3 s_tanh.c
//
// ====================================================
// Copyright (C) 1993 by Sun Microsystems, Inc. All rights reserved.
//
// Developed at SunPro, a Sun Microsystems, Inc. business.
// Permission to use, copy, modify, and distribute this
// software is freely granted, provided that this notice
// is preserved.
// ====================================================

//! Hyperbolic tangent.
//!
//! - `|x| < 2^-55`: x*(1+x), which keeps the sign of zero
//! - `|x| < 1`: with `t = expm1(-2|x|)`, tanh(x) = -t/(t+2)
//! - `|x| < 22`: with `t = expm1(2|x|)`, tanh(x) = 1 - 2/(t+2)
//! - otherwise +-1, raising inexact.

use super::{TINY, expm1, fabs, hi_word};

/// Hyperbolic tangent of `x`, in `[-1, 1]`.
pub fn tanh(x: f64) -> f64 {
    let jx = hi_word(x) as i32;
    let ix = jx & 0x7fff_ffff;

    if ix >= 0x7ff0_0000 {
        // tanh(+-inf) = +-1, tanh(NaN) = NaN
        return if jx >= 0 { 1.0 / x + 1.0 } else { 1.0 / x - 1.0 };
    }

    let z = if ix < 0x4036_0000 {
        // |x| < 22
        if ix < 0x3c80_0000 {
            return x * (1.0 + x);
        }
        if ix >= 0x3ff0_0000 {
            let t = expm1(2.0 * fabs(x));
            1.0 - 2.0 / (t + 2.0)
        } else {
            let t = expm1(-2.0 * fabs(x));
            -t / (t + 2.0)
        }
    } else {
        1.0 - TINY
    };
    if jx >= 0 { z } else { -z }
}
