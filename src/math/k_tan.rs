// origin: fdlibm 5.3 k_tan.c
//
// ====================================================
// Copyright (C) 1993 by Sun Microsystems, Inc. All rights reserved.
//
// Developed at SunPro, a Sun Microsystems, Inc. business.
// Permission to use, copy, modify, and distribute this
// software is freely granted, provided that this notice
// is preserved.
// ====================================================

//! __kernel_tan(x, y, k) on [-pi/4, pi/4].
//!
//! tan(x) ~ x + T0*x^3 + ... + T12*x^27 on [0, 0.67434] (Remez error below
//! 2^-59.2). Above 0.67434 the identity
//! tan(pi/4 - t) = (1 - tan t) / (1 + tan t) moves the argument back into
//! that interval. `k = -1` returns -1/tan(x + y), computed from split
//! reciprocals so that the division keeps full precision.

use super::{hi_word, lo_word, zero_lo_word};

const ONE: f64 = 1.00000000000000000000e+00; // 0x3ff00000, 0x00000000
const PIO4: f64 = 7.85398163397448278999e-01; // 0x3fe921fb, 0x54442d18
const PIO4_LO: f64 = 3.06161699786838301793e-17; // 0x3c81a626, 0x33145c07

const T: [f64; 13] = [
    3.33333333333334091986e-01,  // 0x3fd55555, 0x55555563
    1.33333333333201242699e-01,  // 0x3fc11111, 0x1110fe7a
    5.39682539762260521377e-02,  // 0x3faba1ba, 0x1bb341fe
    2.18694882948595424599e-02,  // 0x3f9664f4, 0x8406d637
    8.86323982359930005737e-03,  // 0x3f8226e3, 0xe96e8493
    3.59207910759131235356e-03,  // 0x3f6d6d22, 0xc9560328
    1.45620945432529025516e-03,  // 0x3f57dbc8, 0xfee08315
    5.88041240820264096874e-04,  // 0x3f4344d8, 0xf2f26501
    2.46463134818469906812e-04,  // 0x3f3026f7, 0x1a8d1068
    7.81794442939557092300e-05,  // 0x3f147e88, 0xa03792a6
    7.14072491382608190305e-05,  // 0x3f12b80f, 0x32f0a7e9
    -1.85586374855275456654e-05, // 0xbef375cb, 0xdb605373
    2.59073051863633712884e-05,  // 0x3efb2a70, 0x74bf7ad4
];

/// -1/(x + y), where `w` is the rounded `x + y`.
///
/// Both `w` and `-1/w` are split at the low word so that the products in
/// the correction step are exact.
#[inline(always)]
fn neg_recip(x: f64, y: f64, w: f64) -> f64 {
    let z = zero_lo_word(w);
    let v = y - (z - x); // z + v == x + y
    let a = -ONE / w;
    let t = zero_lo_word(a);
    let s = ONE + t * z;
    t + a * (s + t * v)
}

/// `tan(x + y)` for `k == 1`, `-1/tan(x + y)` for `k == -1`.
///
/// `|x|` must be at most ~pi/4 and `y` the tail of `x`. Any other `k` gives
/// an unspecified result.
pub fn k_tan(mut x: f64, mut y: f64, k: i32) -> f64 {
    let hx = hi_word(x) as i32;
    let ix = (hx & 0x7fff_ffff) as u32;

    // |x| < 2^-28
    if ix < 0x3e30_0000 {
        if (ix | lo_word(x)) == 0 && k == -1 {
            // x == +-0
            return ONE / super::fabs(x);
        }
        if k == 1 {
            return x;
        }
        return neg_recip(x, y, x + y);
    }

    let big = ix >= 0x3fe5_9428;
    if big {
        // |x| >= 0.6744
        if hx < 0 {
            x = -x;
            y = -y;
        }
        let z = PIO4 - x;
        let w = PIO4_LO - y;
        x = z + w;
        y = 0.0;
    }

    let z = x * x;
    let w = z * z;
    // x^5 * (T1 + x^2*T2 + ...) split into odd and even powers of w
    let r = T[1] + w * (T[3] + w * (T[5] + w * (T[7] + w * (T[9] + w * T[11]))));
    let v = z * (T[2] + w * (T[4] + w * (T[6] + w * (T[8] + w * (T[10] + w * T[12])))));
    let s = z * x;
    let mut r = y + z * (s * (r + v) + y);
    r += T[0] * s;
    let w = x + r;

    if big {
        let kf = k as f64;
        let sign = (1 - ((hx >> 30) & 2)) as f64;
        return sign * (kf - 2.0 * (x - (w * w / (w + kf) - r)));
    }
    if k == 1 { w } else { neg_recip(x, r, w) }
}
