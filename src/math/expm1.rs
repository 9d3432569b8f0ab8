// origin: fdlibm 5.3 s_expm1.c
//
// ====================================================
// Copyright (C) 1993 by Sun Microsystems, Inc. All rights reserved.
//
// Developed at SunPro, a Sun Microsystems, Inc. business.
// Permission to use, copy, modify, and distribute this
// software is freely granted, provided that this notice
// is preserved.
// ====================================================

//! expm1(x) = exp(x) - 1 (`s_expm1.c`).
//!
//! The argument is reduced as in `exp`, `x = k*ln2 + r` with a correction
//! term `c` for the rounding of `r`. On [-0.35, 0.35] a rational form
//! `R1(r^2) = 1 + Q1*r^2 + ... + Q5*r^10` yields
//! `expm1(r) = r + r^2/2 + r^3/2 * (3 - (R1 + R1*r/2)) / (6 - r*(3 - R1*r/2))`,
//! and the result is rescaled by 2^k in one of several forms chosen to
//! keep the subtraction of 1 exact.

use super::{HUGE, LN2_HI, LN2_LO, TINY, hi_word, lo_word, set_hi_word, with_hi_lo};

const ONE: f64 = 1.0;
const O_THRESHOLD: f64 = 7.09782712893383973096e+02; // 0x40862e42, 0xfefa39ef
const INVLN2: f64 = 1.44269504088896338700e+00; // 0x3ff71547, 0x652b82fe
const Q1: f64 = -3.33333333333331316428e-02; // 0xbfa11111, 0x111110f4
const Q2: f64 = 1.58730158725481460165e-03; // 0x3f5a01a0, 0x19fe5585
const Q3: f64 = -7.93650757867487942473e-05; // 0xbf14ce19, 0x9eaadbb7
const Q4: f64 = 4.00821782732936239552e-06; // 0x3ed0cfca, 0x86e65239
const Q5: f64 = -2.01099218183624371326e-07; // 0xbe8afdb7, 0x6e09c32d

#[inline(always)]
fn add_to_exponent(y: f64, k: i32) -> f64 {
    set_hi_word(y, hi_word(y).wrapping_add((k << 20) as u32))
}

/// `exp(x) - 1`, accurate for `x` near zero.
pub fn expm1(mut x: f64) -> f64 {
    let mut hx = hi_word(x);
    let xsb = hx & 0x8000_0000;
    hx &= 0x7fff_ffff;

    // filter out huge and non-finite arguments
    if hx >= 0x4043_687a {
        // |x| >= 56*ln2
        if hx >= 0x4086_2e42 {
            if hx >= 0x7ff0_0000 {
                if ((hx & 0xfffff) | lo_word(x)) != 0 {
                    return x + x;
                }
                return if xsb == 0 { x } else { -1.0 };
            }
            if x > O_THRESHOLD {
                return HUGE * HUGE;
            }
        }
        if xsb != 0 {
            // x < -56*ln2
            return TINY - ONE;
        }
    }

    let mut k = 0i32;
    let mut c = 0.0;
    if hx > 0x3fd6_2e42 {
        // |x| > 0.5*ln2
        let (hi, lo) = if hx < 0x3ff0_a2b2 {
            if xsb == 0 {
                k = 1;
                (x - LN2_HI, LN2_LO)
            } else {
                k = -1;
                (x + LN2_HI, -LN2_LO)
            }
        } else {
            k = (INVLN2 * x + if xsb == 0 { 0.5 } else { -0.5 }) as i32;
            let t = k as f64;
            (x - t * LN2_HI, t * LN2_LO)
        };
        x = hi - lo;
        c = (hi - x) - lo;
    } else if hx < 0x3c90_0000 {
        // |x| < 2^-54
        let t = HUGE + x;
        return x - (t - (HUGE + x));
    }

    let hfx = 0.5 * x;
    let hxs = x * hfx;
    let r1 = ONE + hxs * (Q1 + hxs * (Q2 + hxs * (Q3 + hxs * (Q4 + hxs * Q5))));
    let t = 3.0 - r1 * hfx;
    let mut e = hxs * ((r1 - t) / (6.0 - x * t));
    if k == 0 {
        return x - (x * e - hxs);
    }

    e = x * (e - c) - c;
    e -= hxs;
    match k {
        -1 => 0.5 * (x - e) - 0.5,
        1 if x < -0.25 => -2.0 * (e - (x + 0.5)),
        1 => ONE + 2.0 * (x - e),
        k if k <= -2 || k > 56 => add_to_exponent(ONE - (e - x), k) - ONE,
        k if k < 20 => {
            // 1 - 2^-k
            let t = with_hi_lo(0x3ff0_0000 - (0x0020_0000 >> k), 0);
            add_to_exponent(t - (e - x), k)
        }
        k => {
            // 2^-k
            let t = with_hi_lo(((0x3ff - k) << 20) as u32, 0);
            add_to_exponent((x - (e + t)) + ONE, k)
        }
    }
}
