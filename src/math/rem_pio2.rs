// origin: fdlibm 5.3 e_rem_pio2.c
//
// ====================================================
// Copyright (C) 1993 by Sun Microsystems, Inc. All rights reserved.
//
// Developed at SunPro, a Sun Microsystems, Inc. business.
// Permission to use, copy, modify, and distribute this
// software is freely granted, provided that this notice
// is preserved.
// ====================================================

//! Argument reduction modulo pi/2 (`__ieee754_rem_pio2`).
//!
//! `x` is written as `n*pi/2 + (y0 + y1)` with `|y0 + y1| <= ~pi/4`. The
//! argument is routed through tiers of increasing cost:
//!
//! * trivial, `|x| <= ~pi/4`: nothing to do;
//! * near, `|x| < ~3pi/4`: one subtraction of a 33+53 bit pi/2;
//! * medium, `|x| <= ~2^20 pi/2`: Cody-Waite with up to three splits of
//!   pi/2, refined only while cancellation eats into the result, plus an
//!   exact answer for the first 32 multiples of pi/2;
//! * non-finite: NaN;
//! * huge: Payne-Hanek (see `rem_pio2_large`).

use super::rem_pio2_large::{rem_pio2_large, split_digits};
use super::rem_pio2_tables::{
    INVPIO2, NPIO2_HW, NPIO2_LW, PIO2_1, PIO2_1T, PIO2_2, PIO2_2T, PIO2_3, PIO2_3T, REM_PIO2_Y0,
    REM_PIO2_Y1,
};
use super::trace::{NoTrace, ReductionTrace, Tier};
use super::{fabs, hi_word, high_word, lo_word};

/// Refinement rounds of the medium tier: the next pi/2 split, its tail and
/// the exponent gap between `x` and `y0` that the previous round tolerates.
const ESCALATION: [(f64, f64, i32); 2] = [(PIO2_2, PIO2_2T, 16), (PIO2_3, PIO2_3T, 49)];

/// `x - n*pi/2` as an unevaluated sum `y0 + y1`.
///
/// For arguments handled by Payne-Hanek only `n mod 8` is kept, with the
/// sign of `x`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RemPio2 {
    pub n: i32,
    pub y0: f64,
    pub y1: f64,
}

impl RemPio2 {
    #[inline(always)]
    pub const fn new(n: i32, y0: f64, y1: f64) -> Self {
        Self { n, y0, y1 }
    }

    /// Which quarter of the circle `x` falls in, `0..=3`.
    #[inline(always)]
    pub const fn quadrant(&self) -> i32 {
        self.n & 3
    }

    #[inline(always)]
    fn negate(self) -> Self {
        Self::new(-self.n, -self.y0, -self.y1)
    }

    #[inline(always)]
    fn signed(self, hx: i32) -> Self {
        if hx < 0 { self.negate() } else { self }
    }
}

impl From<RemPio2> for (i32, f64, f64) {
    fn from(r: RemPio2) -> Self {
        (r.n, r.y0, r.y1)
    }
}

/// Reduces `x` modulo pi/2 with the default, silent reducer.
///
/// ```
/// let r = fdmath::rem_pio2(15.0);
/// assert_eq!(r.n, 10);
/// assert_eq!(r.y0, -0.7079632679489662);
/// ```
#[inline]
pub fn rem_pio2(x: f64) -> RemPio2 {
    Reducer::new().reduce(x)
}

/// Range reducer carrying a [`ReductionTrace`] collaborator.
///
/// ```
/// use fdmath::{Reducer, ReductionTrace, Tier};
/// use std::cell::Cell;
///
/// #[derive(Default)]
/// struct LastTier(Cell<Option<Tier>>);
///
/// impl ReductionTrace for LastTier {
///     fn tier(&self, tier: Tier, _x: f64) {
///         self.0.set(Some(tier));
///     }
/// }
///
/// let seen = LastTier::default();
/// let reducer = Reducer::with_trace(&seen);
/// reducer.reduce(1e300);
/// assert_eq!(seen.0.get(), Some(Tier::Huge));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Reducer<T = NoTrace> {
    trace: T,
}

impl Reducer<NoTrace> {
    pub const fn new() -> Self {
        Self { trace: NoTrace }
    }
}

impl<T: ReductionTrace> Reducer<T> {
    pub const fn with_trace(trace: T) -> Self {
        Self { trace }
    }

    pub fn trace(&self) -> &T {
        &self.trace
    }

    pub fn into_trace(self) -> T {
        self.trace
    }

    pub fn reduce(&self, x: f64) -> RemPio2 {
        let hx = high_word(x);
        let ix = hi_word(x) & 0x7fff_ffff;

        let (tier, r) = trivial(x, ix)
            .map(|r| (Tier::Trivial, r))
            .or_else(|| near(x, hx, ix).map(|r| (Tier::Near, r)))
            .or_else(|| self.medium(x, hx, ix).map(|r| (Tier::Medium, r)))
            .or_else(|| non_finite(x, ix).map(|r| (Tier::NonFinite, r)))
            .unwrap_or_else(|| (Tier::Huge, self.huge(x, hx, ix)));
        self.trace.tier(tier, x);
        r
    }

    fn medium(&self, x: f64, hx: i32, ix: u32) -> Option<RemPio2> {
        if ix > 0x4139_21fb {
            return None;
        }
        let t = fabs(x);
        let n = (t * INVPIO2 + 0.5) as i32;
        let fn_ = n as f64;
        // r - w is t - n*pi/2 to 33+53 bits; exact r since n*PIO2_1 is exact
        let mut r = t - fn_ * PIO2_1;
        let mut w = fn_ * PIO2_1T;
        let mut y0 = r - w;

        let idx = (n - 1) as usize;
        if n >= 32 || ix == NPIO2_HW[idx] {
            if n < 32 && lo_word(x) == NPIO2_LW[idx] {
                self.trace.table_hit(n);
                return Some(RemPio2::new(n, REM_PIO2_Y0[idx], REM_PIO2_Y1[idx]).signed(hx));
            }
            // x is close to a multiple of pi/2; refine while y0 has lost bits
            let j = (ix >> 20) as i32;
            for (round, &(split, tail, budget)) in ESCALATION.iter().enumerate() {
                let gap = j - ((hi_word(y0) >> 20) & 0x7ff) as i32;
                if gap <= budget {
                    break;
                }
                let t = r;
                w = fn_ * split;
                r = t - w;
                w = fn_ * tail - ((t - r) - w);
                y0 = r - w;
                self.trace.escalated(round as u8 + 2, gap, y0);
            }
        }
        let y1 = (r - y0) - w;
        Some(RemPio2::new(n, y0, y1).signed(hx))
    }

    fn huge(&self, x: f64, hx: i32, ix: u32) -> RemPio2 {
        let (e0, tx, nx) = split_digits(ix, lo_word(x));
        self.trace.digits(e0, &tx[..nx]);
        let (n, y0, y1) = rem_pio2_large(&tx[..nx], e0);
        self.trace.payne_hanek(n, y0, y1);
        RemPio2::new(n, y0, y1).signed(hx)
    }
}

#[inline(always)]
fn trivial(x: f64, ix: u32) -> Option<RemPio2> {
    (ix <= 0x3fe9_21fb).then_some(RemPio2::new(0, x, 0.0))
}

fn near(x: f64, hx: i32, ix: u32) -> Option<RemPio2> {
    if ix >= 0x4002_d97c {
        return None;
    }
    // pi/2 itself shares its top 33 bits with PIO2_1, so go one split deeper
    let deeper = ix == 0x3ff9_21fb;
    let r = if hx > 0 {
        let mut z = x - PIO2_1;
        let tail = if deeper {
            z -= PIO2_2;
            PIO2_2T
        } else {
            PIO2_1T
        };
        let y0 = z - tail;
        RemPio2::new(1, y0, (z - y0) - tail)
    } else {
        let mut z = x + PIO2_1;
        let tail = if deeper {
            z += PIO2_2;
            PIO2_2T
        } else {
            PIO2_1T
        };
        let y0 = z + tail;
        RemPio2::new(-1, y0, (z - y0) + tail)
    };
    Some(r)
}

#[inline(always)]
fn non_finite(x: f64, ix: u32) -> Option<RemPio2> {
    (ix >= 0x7ff0_0000).then(|| RemPio2::new(0, x - x, x - x))
}
