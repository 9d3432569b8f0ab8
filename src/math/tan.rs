// origin: fdlibm 5.3 s_tan.c
//
// ====================================================
// Copyright (C) 1993 by Sun Microsystems, Inc. All rights reserved.
//
// Developed at SunPro, a Sun Microsystems, Inc. business.
// Permission to use, copy, modify, and distribute this
// software is freely granted, provided that this notice
// is preserved.
// ====================================================

//! tan(x) for binary64.
//!
//! After reduction, even quadrants give `tan(y)` and odd ones `-1/tan(y)`;
//! the kernel computes both.

use super::{hi_word, k_tan, rem_pio2};

/// Tangent of `x` (radians), bit-identical to fdlibm.
///
/// `tan(+-inf)` and `tan(NaN)` are NaN.
#[inline]
pub fn tan(x: f64) -> f64 {
    let ix = hi_word(x) & 0x7fff_ffff;
    if ix <= 0x3fe9_21fb {
        return k_tan(x, 0.0, 1);
    }
    if ix >= 0x7ff0_0000 {
        return x - x;
    }
    let r = rem_pio2(x);
    // 1 when n is even, -1 when odd
    k_tan(r.y0, r.y1, 1 - ((r.n & 1) << 1))
}
