// origin: fdlibm 5.3 s_log1p.c
//
// ====================================================
// Copyright (C) 1993 by Sun Microsystems, Inc. All rights reserved.
//
// Developed at SunPro, a Sun Microsystems, Inc. business.
// Permission to use, copy, modify, and distribute this
// software is freely granted, provided that this notice
// is preserved.
// ====================================================

//! log(1 + x) (`s_log1p.c`).
//!
//! 1 + x is written as 2^k * (1 + f) with sqrt(2)/2 < 1 + f < sqrt(2), and
//! log(1 + f) is evaluated with the same polynomial as [`ln`](super::ln).
//! Because 1 + x is rounded, a correction `c/u` for the lost low bits is
//! added back when k != 0.

use super::{LN2_HI, LN2_LO, hi_word, set_hi_word};

const LP1: f64 = 6.666666666666735130e-01; // 0x3fe55555, 0x55555593
const LP2: f64 = 3.999999999940941908e-01; // 0x3fd99999, 0x9997fa04
const LP3: f64 = 2.857142874366239149e-01; // 0x3fd24924, 0x94229359
const LP4: f64 = 2.222219843214978396e-01; // 0x3fcc71c5, 0x1d8e78af
const LP5: f64 = 1.818357216161805012e-01; // 0x3fc74664, 0x96cb03de
const LP6: f64 = 1.531383769920937332e-01; // 0x3fc39a09, 0xd078c69f
const LP7: f64 = 1.479819860511658591e-01; // 0x3fc2f112, 0xdf3e5244

/// `ln(1 + x)`, accurate for `x` near zero.
///
/// `log1p(-1) = -inf`, `log1p(x < -1) = NaN`.
pub fn log1p(x: f64) -> f64 {
    let hx = hi_word(x) as i32;
    let ax = hx & 0x7fff_ffff;

    let mut k = 1i32;
    let mut f = 0.0;
    let mut c = 0.0;
    let mut hu = 0i32;

    if hx < 0x3fda_827a {
        // 1 + x < sqrt(2)
        if ax >= 0x3ff0_0000 {
            // x <= -1
            return if x == -1.0 { f64::NEG_INFINITY } else { f64::NAN };
        }
        if ax < 0x3e20_0000 {
            // |x| < 2^-29
            if ax < 0x3c90_0000 {
                return x;
            }
            return x - x * x * 0.5;
        }
        if hx > 0 || hx <= 0xbfd2_bec3_u32 as i32 {
            // -0.2929 < x < 0.41422: no reduction
            k = 0;
            f = x;
            hu = 1;
        }
    }
    if hx >= 0x7ff0_0000 {
        return x + x;
    }

    if k != 0 {
        let mut u;
        if hx < 0x4340_0000 {
            u = 1.0 + x;
            hu = hi_word(u) as i32;
            k = (hu >> 20) - 1023;
            // correction term for the rounding of 1 + x
            c = if k > 0 { 1.0 - (u - x) } else { x - (u - 1.0) };
            c /= u;
        } else {
            u = x;
            hu = hi_word(u) as i32;
            k = (hu >> 20) - 1023;
            c = 0.0;
        }
        hu &= 0x000f_ffff;
        if hu < 0x6a09e {
            // u ~< sqrt(2)
            u = set_hi_word(u, (hu | 0x3ff0_0000) as u32);
        } else {
            k += 1;
            u = set_hi_word(u, (hu | 0x3fe0_0000) as u32);
            hu = (0x0010_0000 - hu) >> 2;
        }
        f = u - 1.0;
    }

    let hfsq = 0.5 * f * f;
    let dk = k as f64;
    if hu == 0 {
        // |f| < 2^-20
        if f == 0.0 {
            if k == 0 {
                return 0.0;
            }
            c += dk * LN2_LO;
            return dk * LN2_HI + c;
        }
        let r = hfsq * (1.0 - 0.66666666666666666 * f);
        return if k == 0 {
            f - r
        } else {
            dk * LN2_HI - ((r - (dk * LN2_LO + c)) - f)
        };
    }

    let s = f / (2.0 + f);
    let z = s * s;
    let r = z * (LP1 + z * (LP2 + z * (LP3 + z * (LP4 + z * (LP5 + z * (LP6 + z * LP7))))));
    if k == 0 {
        f - (hfsq - s * (hfsq + r))
    } else {
        dk * LN2_HI - ((hfsq - (s * (hfsq + r) + (dk * LN2_LO + c))) - f)
    }
}
