// origin: fdlibm 5.3 s_asinh.c
//
// ====================================================
// Copyright (C) 1993 by Sun Microsystems, Inc. All rights reserved.
//
// Developed at SunPro, a Sun Microsystems, Inc. business.
// Permission to use, copy, modify, and distribute this
// software is freely granted, provided that this notice
// is preserved.
// ====================================================

//! Inverse hyperbolic sine.
//!
//! asinh(x) = sign(x) * log(|x| + sqrt(x*x + 1)), evaluated as
//! - `|x| > 2^28`: log(|x|) + ln2
//! - `|x| > 2`: log(2|x| + 1/(sqrt(x*x + 1) + |x|))
//! - otherwise log1p(|x| + x*x/(1 + sqrt(1 + x*x)))

use super::{fabs, ln, log1p, sqrt};
use core::f64::consts::LN_2;

const TWO28: f64 = 268435456.0; // 2^28
const TWOM28: f64 = 3.72529029846191406250e-09; // 2^-28

/// Inverse hyperbolic sine of `x`. Odd.
pub fn asinh(x: f64) -> f64 {
    if !x.is_finite() {
        return x + x;
    }
    let ax = fabs(x);
    if ax < TWOM28 {
        return x;
    }
    let w = if ax > TWO28 {
        ln(ax) + LN_2
    } else if ax > 2.0 {
        ln(2.0 * ax + 1.0 / (sqrt(x * x + 1.0) + ax))
    } else {
        let t = x * x;
        log1p(ax + t / (1.0 + sqrt(1.0 + t)))
    };
    if x >= 0.0 { w } else { -w }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asinh_special() {
        assert!(asinh(f64::NAN).is_nan());
        assert_eq!(asinh(f64::INFINITY), f64::INFINITY);
        assert_eq!(asinh(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert_eq!(asinh(0.0).to_bits(), 0.0f64.to_bits());
        assert_eq!(asinh(-0.0).to_bits(), (-0.0f64).to_bits());
        let tiny = 2f64.powi(-30);
        assert_eq!(asinh(tiny), tiny);
    }

    #[test]
    fn test_asinh_values() {
        assert_eq!(asinh(0.5), 0.48121182505960347);
        assert_eq!(asinh(-0.5), -0.48121182505960347);
        assert_eq!(asinh(1.0), 0.881373587019543);
        assert_eq!(asinh(1.5), 1.1947632172871094);
        assert_eq!(asinh(2.0), 1.4436354751788103);
        assert_eq!(asinh(3.0), 1.8184464592320668);
        assert_eq!(asinh(-3.0), -1.8184464592320668);
        assert_eq!(asinh(1e10), 23.7189981105004);
        assert_eq!(asinh(1e300), 691.4686750787736);
    }
}
