// origin: fdlibm 5.3 s_sin.c
//
// ====================================================
// Copyright (C) 1993 by Sun Microsystems, Inc. All rights reserved.
//
// Developed at SunPro, a Sun Microsystems, Inc. business.
// Permission to use, copy, modify, and distribute this
// software is freely granted, provided that this notice
// is preserved.
// ====================================================

//! sin(x) for binary64.
//!
//! Arguments within ~pi/4 go straight to the kernel; everything else is
//! reduced modulo pi/2 and the quadrant picks the kernel and its sign.

use super::{hi_word, k_cos, k_sin, rem_pio2};

/// Sine of `x` (radians), bit-identical to fdlibm.
///
/// `sin(+-inf)` and `sin(NaN)` are NaN.
#[inline]
pub fn sin(x: f64) -> f64 {
    let ix = hi_word(x) & 0x7fff_ffff;
    if ix <= 0x3fe9_21fb {
        return k_sin(x, 0.0, false);
    }
    if ix >= 0x7ff0_0000 {
        return x - x;
    }
    let r = rem_pio2(x);
    match r.quadrant() {
        0 => k_sin(r.y0, r.y1, true),
        1 => k_cos(r.y0, r.y1),
        2 => -k_sin(r.y0, r.y1, true),
        _ => -k_cos(r.y0, r.y1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;

    #[track_caller]
    fn odd(x: f64, expected: f64) {
        assert_eq!(sin(x), expected, "sin({x:e})");
        assert_eq!(sin(-x), -expected, "sin({:e})", -x);
    }

    #[test]
    fn test_sin_special() {
        assert!(sin(f64::NAN).is_nan());
        assert!(sin(f64::INFINITY).is_nan());
        assert!(sin(f64::NEG_INFINITY).is_nan());
        assert_eq!(sin(0.0).to_bits(), 0.0f64.to_bits());
        assert_eq!(sin(-0.0).to_bits(), (-0.0f64).to_bits());
    }

    #[test]
    fn test_sin_small() {
        odd(0.5e-4, 4.999999997916667e-5);
        odd(0.5, 0.479425538604203);
    }

    #[test]
    fn test_sin_quadrants() {
        odd(PI / 2.0, 1.0);
        odd(PI, 1.2246467991473532e-16);
        odd(7.0 / 4.0 * PI, -0.7071067811865477);
        odd(9.0 / 4.0 * PI, 0.7071067811865474);
        odd(11.0 / 4.0 * PI, 0.7071067811865483);
        odd(13.0 / 4.0 * PI, -0.7071067811865479);
    }

    #[test]
    fn test_sin_large() {
        odd(2200.0 * PI, -7.047032979958965e-14);
        odd(1048576.0 / 2.0 * PI, -6.420676210313675e-11);
        odd(1e22, -0.8522008497671888);
    }
}
