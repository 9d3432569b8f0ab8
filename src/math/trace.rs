//! Optional tracing of the range reducer's decisions.
//!
//! The reducer reports which tier handled an argument, when the medium tier
//! had to escalate to a longer split of pi/2, and the intermediate digits of
//! the Payne-Hanek path. Nothing here feeds back into a result. The default
//! collaborator is [`NoTrace`], whose methods are empty and vanish after
//! inlining.

use core::fmt;

/// Reduction path taken for one argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    /// `|x| <= ~pi/4`, returned unchanged.
    Trivial,
    /// `|x| < ~3pi/4`, a single subtraction of pi/2.
    Near,
    /// `|x| <= ~2^20 * pi/2`, Cody-Waite style reduction.
    Medium,
    /// Finite arguments beyond the medium range, Payne-Hanek.
    Huge,
    /// NaN or infinity.
    NonFinite,
}

impl Tier {
    pub const fn as_str(self) -> &'static str {
        match self {
            Tier::Trivial => "trivial",
            Tier::Near => "near",
            Tier::Medium => "medium",
            Tier::Huge => "huge",
            Tier::NonFinite => "non-finite",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Observer for [`Reducer`](super::Reducer) events.
///
/// All methods default to doing nothing, so an implementation only overrides
/// the events it cares about.
pub trait ReductionTrace {
    /// Called once per reduction with the tier that produced the result.
    #[inline(always)]
    fn tier(&self, _tier: Tier, _x: f64) {}

    /// The medium tier refined its remainder. `round` is 2 or 3, `gap` is the
    /// exponent difference between `x` and the previous `y0`.
    #[inline(always)]
    fn escalated(&self, _round: u8, _gap: i32, _y0: f64) {}

    /// The argument matched the `n`-th tabulated multiple of pi/2 exactly.
    #[inline(always)]
    fn table_hit(&self, _n: i32) {}

    /// The 24-bit digits extracted from a huge argument.
    #[inline(always)]
    fn digits(&self, _e0: i32, _digits: &[f64]) {}

    /// The unsigned Payne-Hanek result before the sign of `x` is applied.
    #[inline(always)]
    fn payne_hanek(&self, _n: i32, _y0: f64, _y1: f64) {}
}

impl<T: ReductionTrace + ?Sized> ReductionTrace for &T {
    #[inline(always)]
    fn tier(&self, tier: Tier, x: f64) {
        (**self).tier(tier, x)
    }

    #[inline(always)]
    fn escalated(&self, round: u8, gap: i32, y0: f64) {
        (**self).escalated(round, gap, y0)
    }

    #[inline(always)]
    fn table_hit(&self, n: i32) {
        (**self).table_hit(n)
    }

    #[inline(always)]
    fn digits(&self, e0: i32, digits: &[f64]) {
        (**self).digits(e0, digits)
    }

    #[inline(always)]
    fn payne_hanek(&self, n: i32, y0: f64, y1: f64) {
        (**self).payne_hanek(n, y0, y1)
    }
}

/// The do-nothing collaborator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoTrace;

impl ReductionTrace for NoTrace {}

/// Forwards reduction events to the `log` facade at trace level.
#[cfg(feature = "logging")]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LogTrace;

#[cfg(feature = "logging")]
impl LogTrace {
    const TARGET: &'static str = "fdmath::rem_pio2";
}

#[cfg(feature = "logging")]
impl ReductionTrace for LogTrace {
    fn tier(&self, tier: Tier, x: f64) {
        log::trace!(target: Self::TARGET, "tier={tier} x={x:e} bits={:#018x}", x.to_bits());
    }

    fn escalated(&self, round: u8, gap: i32, y0: f64) {
        log::trace!(target: Self::TARGET, "escalate round={round} gap={gap} y0={y0:e}");
    }

    fn table_hit(&self, n: i32) {
        log::trace!(target: Self::TARGET, "exact multiple n={n}");
    }

    fn digits(&self, e0: i32, digits: &[f64]) {
        log::trace!(target: Self::TARGET, "payne-hanek e0={e0} nx={} tx={digits:?}", digits.len());
    }

    fn payne_hanek(&self, n: i32, y0: f64, y1: f64) {
        log::trace!(target: Self::TARGET, "payne-hanek n={n} y0={y0:e} y1={y1:e}");
    }
}
