// origin: fdlibm 5.3 s_scalbn.c
//
// ====================================================
// Copyright (C) 1993 by Sun Microsystems, Inc. All rights reserved.
//
// Developed at SunPro, a Sun Microsystems, Inc. business.
// Permission to use, copy, modify, and distribute this
// software is freely granted, provided that this notice
// is preserved.
// ====================================================

//! scalbn(x, n): x * 2^n by exponent manipulation.
//!
//! No multiplication by a power of two is ever formed directly, so the
//! intermediate cannot overflow or underflow before the final rounding. The
//! only arithmetic left is the 2^54 normalisation of subnormal inputs and the
//! huge*huge / tiny*tiny products that raise the proper IEEE result.

use super::{HUGE, TINY, TWO54, copysign, hi_word, set_hi_word};

const TWOM54: f64 = 5.55111512312578270212e-17; // 0x3c900000, 0x00000000

#[inline]
pub fn scalbn(mut x: f64, n: i32) -> f64 {
    let mut hx = hi_word(x);
    let mut k = ((hx & 0x7ff0_0000) >> 20) as i32;
    if k == 0 {
        // 0 or subnormal x
        if x == 0.0 {
            return x;
        }
        x *= TWO54;
        hx = hi_word(x);
        k = ((hx & 0x7ff0_0000) >> 20) as i32 - 54;
        if n < -50000 {
            return TINY * x;
        }
    }
    if k == 0x7ff {
        // NaN or Inf
        return x + x;
    }
    // n is clamped by the checks below before it can wrap k.
    let k = k.saturating_add(n);
    if k > 0x7fe {
        return HUGE * copysign(HUGE, x);
    }
    if k > 0 {
        return set_hi_word(x, (hx & 0x800f_ffff) | ((k as u32) << 20));
    }
    if k <= -54 {
        if n > 50000 {
            return HUGE * copysign(HUGE, x);
        }
        return TINY * copysign(TINY, x);
    }
    // subnormal result
    let k = k + 54;
    set_hi_word(x, (hx & 0x800f_ffff) | ((k as u32) << 20)) * TWOM54
}
