// origin: fdlibm 5.3 e_log.c
//
// ====================================================
// Copyright (C) 1993 by Sun Microsystems, Inc. All rights reserved.
//
// Developed at SunPro, a Sun Microsystems, Inc. business.
// Permission to use, copy, modify, and distribute this
// software is freely granted, provided that this notice
// is preserved.
// ====================================================

//! Natural logarithm (`__ieee754_log`).
//!
//! x = 2^k * (1 + f) with sqrt(2)/2 < 1 + f < sqrt(2). With `s = f/(2+f)`,
//! log(1+f) = 2s + 2/3 s^3 + 2/5 s^5 + ... = 2s + s*R(z), `z = s*s`, where
//! `R` is a degree-14 Remez polynomial (error below 2^-58.45). To keep the
//! error small the result is assembled as
//! `k*ln2_hi - ((hfsq - (s*(hfsq + R) + k*ln2_lo)) - f)` with `hfsq = f*f/2`.

use super::{LN2_HI, LN2_LO, TWO54, hi_word, lo_word, set_hi_word};

const LG1: f64 = 6.666666666666735130e-01; // 0x3fe55555, 0x55555593
const LG2: f64 = 3.999999999940941908e-01; // 0x3fd99999, 0x9997fa04
const LG3: f64 = 2.857142874366239149e-01; // 0x3fd24924, 0x94229359
const LG4: f64 = 2.222219843214978396e-01; // 0x3fcc71c5, 0x1d8e78af
const LG5: f64 = 1.818357216161805012e-01; // 0x3fc74664, 0x96cb03de
const LG6: f64 = 1.531383769920937332e-01; // 0x3fc39a09, 0xd078c69f
const LG7: f64 = 1.479819860511658591e-01; // 0x3fc2f112, 0xdf3e5244

/// Natural logarithm of `x`.
///
/// `ln(1) = +0`, `ln(+-0) = -inf`, `ln(x < 0) = NaN`, `ln(+inf) = +inf`.
pub fn ln(mut x: f64) -> f64 {
    let mut hx = hi_word(x) as i32;
    let mut k = 0i32;

    if hx < 0x0010_0000 {
        // x < 2^-1022
        if ((hx & 0x7fff_ffff) as u32 | lo_word(x)) == 0 {
            return f64::NEG_INFINITY;
        }
        if hx < 0 {
            return f64::NAN;
        }
        // subnormal: scale up
        k -= 54;
        x *= TWO54;
        hx = hi_word(x) as i32;
    }
    if hx >= 0x7ff0_0000 {
        return x + x;
    }

    k += (hx >> 20) - 1023;
    hx &= 0x000f_ffff;
    // normalize x or x/2 into [sqrt(2)/2, sqrt(2))
    let i = (hx + 0x95f64) & 0x10_0000;
    x = set_hi_word(x, (hx | (i ^ 0x3ff0_0000)) as u32);
    k += i >> 20;
    let f = x - 1.0;
    let dk = k as f64;

    if (0x000f_ffff & (2 + hx)) < 3 {
        // -2^-20 <= f < 2^-20
        if f == 0.0 {
            return if k == 0 { 0.0 } else { dk * LN2_HI + dk * LN2_LO };
        }
        let r = f * f * (0.5 - 0.33333333333333333 * f);
        return if k == 0 {
            f - r
        } else {
            dk * LN2_HI - ((r - dk * LN2_LO) - f)
        };
    }

    let s = f / (2.0 + f);
    let z = s * s;
    let w = z * z;
    let t1 = w * (LG2 + w * (LG4 + w * LG6));
    let t2 = z * (LG1 + w * (LG3 + w * (LG5 + w * LG7)));
    let r = t2 + t1;
    // f lies in a band around 0.38..0.42 where hfsq is needed
    if ((hx - 0x6147a) | (0x6b851 - hx)) > 0 {
        let hfsq = 0.5 * f * f;
        if k == 0 {
            f - (hfsq - s * (hfsq + r))
        } else {
            dk * LN2_HI - ((hfsq - (s * (hfsq + r) + dk * LN2_LO)) - f)
        }
    } else if k == 0 {
        f - s * (f - r)
    } else {
        dk * LN2_HI - ((s * (f - r) - dk * LN2_LO) - f)
    }
}

/// Alias of [`ln`], under the C library name.
#[inline]
pub fn log(x: f64) -> f64 {
    ln(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{E, LN_2, LN_10};

    #[test]
    fn test_ln_special() {
        assert!(ln(f64::NAN).is_nan());
        assert!(ln(-1.0).is_nan());
        assert!(ln(f64::NEG_INFINITY).is_nan());
        assert!(ln(-f64::MIN_POSITIVE).is_nan());
        assert_eq!(ln(0.0), f64::NEG_INFINITY);
        assert_eq!(ln(-0.0), f64::NEG_INFINITY);
        assert_eq!(ln(f64::INFINITY), f64::INFINITY);
        assert_eq!(ln(1.0).to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn test_ln_values() {
        assert_eq!(ln(2.0), LN_2);
        assert_eq!(ln(10.0), LN_10);
        assert_eq!(ln(E), 1.0);
        assert_eq!(ln(0.5), -LN_2);
        assert_eq!(ln(1.5), 0.4054651081081644);
        assert_eq!(ln(f64::MAX), 709.782712893384);
        assert_eq!(ln(f64::from_bits(1)), -744.4400719213812);
        assert_eq!(ln(f64::MIN_POSITIVE), -708.3964185322641);
    }

    #[test]
    fn test_ln_near_one() {
        let x = 1.0 + 2f64.powi(-30);
        assert_eq!(ln(x), 9.313225741817976e-10);
        assert_eq!(ln(1.0 - 2f64.powi(-30)), -9.313225750491594e-10);
    }

    #[test]
    fn test_log_alias() {
        for &x in &[0.25, 3.0, 1e-300, 1e300, 7.5] {
            assert_eq!(log(x).to_bits(), ln(x).to_bits());
        }
    }
}
