// origin: fdlibm 5.3 e_log10.c
//
// ====================================================
// Copyright (C) 1993 by Sun Microsystems, Inc. All rights reserved.
//
// Developed at SunPro, a Sun Microsystems, Inc. business.
// Permission to use, copy, modify, and distribute this
// software is freely granted, provided that this notice
// is preserved.
// ====================================================

//! log10(x) (`e_log10.c`).
//!
//! With `x = 2^e * m` as in [`log2`](super::log2),
//! log10(x) = e*log10(2) + ln(m)/ln(10), where log10(2) is split into a
//! 30-bit leading part and a tail so that `e*log10_2hi` is exact.

use super::ln;
use super::log2::split_exponent;

const IVLN10: f64 = 4.34294481903251816668e-01; // 0x3fdbcb7b, 0x1526e50e
const LOG10_2HI: f64 = 3.01029995663611771306e-01; // 0x3fd34413, 0x509f6000
const LOG10_2LO: f64 = 3.69423907715893078616e-13; // 0x3d59fef3, 0x11f12b36

/// Base-10 logarithm of `x`.
///
/// `log10(10^n) == n` for every `10^n` that is exactly representable.
pub fn log10(x: f64) -> f64 {
    if x.is_nan() || x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 {
        return f64::NEG_INFINITY;
    }
    if x == f64::INFINITY {
        return x;
    }
    let (e, m) = split_exponent(x);
    let dk = e as f64;
    dk * LOG10_2LO + IVLN10 * ln(m) + dk * LOG10_2HI
}
