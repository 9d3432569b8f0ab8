// origin: fdlibm 5.3 k_cos.c
//
// ====================================================
// Copyright (C) 1993 by Sun Microsystems, Inc. All rights reserved.
//
// Developed at SunPro, a Sun Microsystems, Inc. business.
// Permission to use, copy, modify, and distribute this
// software is freely granted, provided that this notice
// is preserved.
// ====================================================

//! __kernel_cos(x, y) on [-pi/4, pi/4].
//!
//! cos(x) ~ 1 - x*x/2 + C1*x^4 + ... + C6*x^14 (Remez error below 2^-58).
//! With `r` the polynomial part and `y` the tail of `x`,
//! cos(x+y) ~ 1 - (x*x/2 - (r - x*y)). Above |x| = 0.3 the leading
//! subtraction is split through `qx` (|x|/4 with the low word cleared, or
//! 0.28125 above 0.78125) so that `1 - qx` and `x*x/2 - qx` are exact.

use super::{fabs, hi_word, with_hi_lo};

const ONE: f64 = 1.00000000000000000000e+00; // 0x3ff00000, 0x00000000
const C1: f64 = 4.16666666666666019037e-02; // 0x3fa55555, 0x5555554c
const C2: f64 = -1.38888888888741095749e-03; // 0xbf56c16c, 0x16c15177
const C3: f64 = 2.48015872894767294178e-05; // 0x3efa01a0, 0x19cb1590
const C4: f64 = -2.75573143513906633035e-07; // 0xbe927e4f, 0x809c52ad
const C5: f64 = 2.08757232129817482790e-09; // 0x3e21ee9e, 0xbdb4b1c4
const C6: f64 = -1.13596475577881948265e-11; // 0xbda8fae9, 0xbe8838d4

/// Cosine of `x + y` for `|x| <= ~pi/4`, where `y` is the tail of `x`.
#[inline]
pub fn k_cos(x: f64, y: f64) -> f64 {
    let ix = hi_word(x) & 0x7fff_ffff;
    // |x| < 2^-27
    if ix < 0x3e40_0000 {
        return ONE;
    }
    let z = x * x;
    let r = z * (C1 + z * (C2 + z * (C3 + z * (C4 + z * (C5 + z * C6)))));
    if ix < 0x3fd3_3333 {
        // |x| < 0.3
        return ONE - (0.5 * z - (z * r - x * y));
    }
    let qx = if fabs(x) > 0.78125 {
        0.28125
    } else {
        with_hi_lo(ix - 0x0020_0000, 0)
    };
    let hz = 0.5 * z - qx;
    let a = ONE - qx;
    a - (hz - (z * r - x * y))
}
