// origin: fdlibm 5.3 s_cos.c
//
// ====================================================
// Copyright (C) 1993 by Sun Microsystems, Inc. All rights reserved.
//
// Developed at SunPro, a Sun Microsystems, Inc. business.
// Permission to use, copy, modify, and distribute this
// software is freely granted, provided that this notice
// is preserved.
// ====================================================

//! cos(x) for binary64.

use super::{hi_word, k_cos, k_sin, rem_pio2};

/// Cosine of `x` (radians), bit-identical to fdlibm.
///
/// `cos(+-inf)` and `cos(NaN)` are NaN.
#[inline]
pub fn cos(x: f64) -> f64 {
    let ix = hi_word(x) & 0x7fff_ffff;
    if ix <= 0x3fe9_21fb {
        return k_cos(x, 0.0);
    }
    if ix >= 0x7ff0_0000 {
        return x - x;
    }
    let r = rem_pio2(x);
    match r.quadrant() {
        0 => k_cos(r.y0, r.y1),
        1 => -k_sin(r.y0, r.y1, true),
        2 => -k_cos(r.y0, r.y1),
        _ => k_sin(r.y0, r.y1, true),
    }
}
