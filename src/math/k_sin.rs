// origin: fdlibm 5.3 k_sin.c
//
// ====================================================
// Copyright (C) 1993 by Sun Microsystems, Inc. All rights reserved.
//
// Developed at SunPro, a Sun Microsystems, Inc. business.
// Permission to use, copy, modify, and distribute this
// software is freely granted, provided that this notice
// is preserved.
// ====================================================

//! __kernel_sin(x, y, iy) on [-pi/4, pi/4].
//!
//! sin(x) ~ x + S1*x^3 + ... + S6*x^13, with a Remez error below 2^-58 on
//! [0, pi/4]. For the tail `y` of a reduced argument,
//! sin(x+y) ~ sin(x) + (1 - x*x/2)*y, folded in as
//! `x - ((z*(y/2 - v*r) - y) - v*S1)` with `z = x*x`, `v = z*x` and
//! `r = S2 + z*(S3 + ... )`.

use super::hi_word;

const HALF: f64 = 5.00000000000000000000e-01; // 0x3fe00000, 0x00000000
const S1: f64 = -1.66666666666666324348e-01; // 0xbfc55555, 0x55555549
const S2: f64 = 8.33333333332248946124e-03; // 0x3f811111, 0x1110f8a6
const S3: f64 = -1.98412698298579493134e-04; // 0xbf2a01a0, 0x19c161d5
const S4: f64 = 2.75573137070700676789e-06; // 0x3ec71de3, 0x57b1fe7d
const S5: f64 = -2.50507602534068634195e-08; // 0xbe5ae5e6, 0x8a2b9ceb
const S6: f64 = 1.58969099521155010221e-10; // 0x3de5d93a, 0x5acfd57c

/// Sine of `x + y` for `|x| <= ~pi/4`, where `y` is the tail of `x`.
///
/// `iy` says whether `y` carries anything; when it is `false`, `y` is
/// ignored. Outside `|x| <= ~pi/4` the result is unspecified.
#[inline]
pub fn k_sin(x: f64, y: f64, iy: bool) -> f64 {
    let ix = hi_word(x) & 0x7fff_ffff;
    // |x| < 2^-27
    if ix < 0x3e40_0000 {
        return x;
    }
    let z = x * x;
    let v = z * x;
    let r = S2 + z * (S3 + z * (S4 + z * (S5 + z * S6)));
    if !iy {
        x + v * (S1 + z * r)
    } else {
        x - ((z * (HALF * y - v * r) - y) - v * S1)
    }
}
