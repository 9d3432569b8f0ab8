// origin: fdlibm 5.3 e_exp.c
//
// ====================================================
// Copyright (C) 1993 by Sun Microsystems, Inc. All rights reserved.
//
// Developed at SunPro, a Sun Microsystems, Inc. business.
// Permission to use, copy, modify, and distribute this
// software is freely granted, provided that this notice
// is preserved.
// ====================================================

//! exp(x) (`__ieee754_exp`).
//!
//! 1. Reduce: x = k*ln2 + r with |r| <= 0.5*ln2, where `r` is carried as
//!    `hi - lo` for extra precision.
//! 2. On [0, 0.34658] approximate `R(r^2) = r*(exp(r)+1)/(exp(r)-1)` by a
//!    degree-5 Remez polynomial, then
//!    `exp(r) = 1 + r + r*c/(2 - c)` with `c = r - r^2*(P1 + ... + P5*r^8)`.
//! 3. exp(x) = 2^k * exp(r), with a 2^-1000 detour for results that would
//!    be subnormal.

use super::{HUGE, LN2_HI, LN2_LO, hi_word, lo_word, set_hi_word};
use core::f64::consts::E;

const ONE: f64 = 1.0;
const HALF: [f64; 2] = [0.5, -0.5];
const TWOM1000: f64 = 9.33263618503218878990e-302; // 0x01700000, 0x00000000
const O_THRESHOLD: f64 = 7.09782712893383973096e+02; // 0x40862e42, 0xfefa39ef
const U_THRESHOLD: f64 = -7.45133219101941108420e+02; // 0xc0874910, 0xd52d3051
const INVLN2: f64 = 1.44269504088896338700e+00; // 0x3ff71547, 0x652b82fe
const P1: f64 = 1.66666666666666019037e-01; // 0x3fc55555, 0x5555553e
const P2: f64 = -2.77777777770155933842e-03; // 0xbf66c16c, 0x16bebd93
const P3: f64 = 6.61375632143793436117e-05; // 0x3f11566a, 0xaf25de2c
const P4: f64 = -1.65339022054652515390e-06; // 0xbebbbd41, 0xc5d26bf1
const P5: f64 = 4.13813679705723846039e-08; // 0x3e663769, 0x72bea4d0

/// e raised to `x`.
///
/// Overflows to `+inf` above 709.78, underflows to `+0` below -745.13.
/// `exp(1)` is exactly [`E`].
pub fn exp(mut x: f64) -> f64 {
    let mut hx = hi_word(x);
    let xsb = (hx >> 31) as usize;
    hx &= 0x7fff_ffff;

    // filter out non-finite and out-of-range arguments
    if hx >= 0x4086_2e42 {
        if hx >= 0x7ff0_0000 {
            if ((hx & 0xfffff) | lo_word(x)) != 0 {
                return x + x; // NaN
            }
            return if xsb == 0 { x } else { 0.0 };
        }
        if x > O_THRESHOLD {
            return HUGE * HUGE;
        }
        if x < U_THRESHOLD {
            return TWOM1000 * TWOM1000;
        }
    }

    let (hi, lo, k) = if hx > 0x3fd6_2e42 {
        // |x| > 0.5*ln2
        let (hi, lo, k) = if hx < 0x3ff0_a2b2 {
            // |x| < 1.5*ln2; the polynomial lands one ulp high on 1
            if x == 1.0 {
                return E;
            }
            if xsb == 0 {
                (x - LN2_HI, LN2_LO, 1)
            } else {
                (x + LN2_HI, -LN2_LO, -1)
            }
        } else {
            let k = (INVLN2 * x + HALF[xsb]) as i32;
            let t = k as f64;
            // hi is exact
            (x - t * LN2_HI, t * LN2_LO, k)
        };
        x = hi - lo;
        (hi, lo, k)
    } else if hx < 0x3e30_0000 {
        // |x| < 2^-28
        return ONE + x;
    } else {
        (0.0, 0.0, 0)
    };

    let t = x * x;
    let c = x - t * (P1 + t * (P2 + t * (P3 + t * (P4 + t * P5))));
    if k == 0 {
        return ONE - ((x * c) / (c - 2.0) - x);
    }
    let y = ONE - ((lo - (x * c) / (2.0 - c)) - hi);
    if k >= -1021 {
        set_hi_word(y, hi_word(y).wrapping_add((k << 20) as u32))
    } else {
        set_hi_word(y, hi_word(y).wrapping_add(((k + 1000) << 20) as u32)) * TWOM1000
    }
}
