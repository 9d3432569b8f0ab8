//! Correctly rounded square root.
//!
//! The mantissa is scaled to an integer `m * 2^52` with an even exponent and
//! its integer square root is taken bit by bit. The remainder decides the
//! rounding: a tie cannot occur, so `r > q` is round-to-nearest.

const EXP_MASK: u64 = 0x7ff;
const MANT_BITS: u32 = 52;
const IMPLICIT: u64 = 1 << MANT_BITS;

/// Integer square root of `n`, with the remainder `n - q*q`.
#[inline]
fn isqrt_rem(mut n: u128) -> (u128, u128) {
    let mut q = 0u128;
    let mut bit = 1u128 << 126;
    while bit > n {
        bit >>= 2;
    }
    while bit != 0 {
        if n >= q + bit {
            n -= q + bit;
            q = (q >> 1) + bit;
        } else {
            q >>= 1;
        }
        bit >>= 2;
    }
    (q, n)
}

/// Square root of `x`, rounded to nearest.
///
/// `sqrt(-0) = -0`, `sqrt(x < 0) = NaN`, `sqrt(+inf) = +inf`.
pub fn sqrt(x: f64) -> f64 {
    let u = x.to_bits();
    let biased = (u >> MANT_BITS) & EXP_MASK;
    let mut m = u & (IMPLICIT - 1);

    if biased == EXP_MASK {
        // +inf stays, NaN propagates, -inf becomes NaN
        return x * x + x;
    }
    if u << 1 == 0 {
        return x;
    }
    if u >> 63 != 0 {
        return (x - x) / (x - x);
    }

    let mut e = if biased == 0 {
        // subnormal: bring the leading bit up to the implicit position
        let shift = m.leading_zeros() - (63 - MANT_BITS);
        m <<= shift;
        -1022 - shift as i32
    } else {
        m |= IMPLICIT;
        biased as i32 - 1023
    };
    if e & 1 != 0 {
        m <<= 1;
    }
    e >>= 1;

    let (mut q, r) = isqrt_rem((m as u128) << MANT_BITS);
    if r > q {
        q += 1;
    }
    // q lies in [2^52, 2^53]; a carry out of the mantissa bumps the exponent
    let bits = (((e + 1023) as u64) << MANT_BITS) + (q as u64 - IMPLICIT);
    f64::from_bits(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqrt_special() {
        assert!(sqrt(f64::NAN).is_nan());
        assert!(sqrt(-1.0).is_nan());
        assert!(sqrt(f64::NEG_INFINITY).is_nan());
        assert!(sqrt(-f64::from_bits(1)).is_nan());
        assert_eq!(sqrt(f64::INFINITY), f64::INFINITY);
        assert_eq!(sqrt(0.0).to_bits(), 0.0f64.to_bits());
        assert_eq!(sqrt(-0.0).to_bits(), (-0.0f64).to_bits());
    }

    #[test]
    fn test_sqrt_exact_squares() {
        for i in 1..2000u32 {
            let v = i as f64;
            assert_eq!(sqrt(v * v), v);
        }
        assert_eq!(sqrt(0.25), 0.5);
        assert_eq!(sqrt(f64::from_bits(4)), 2f64.powi(-536));
    }

    #[test]
    fn test_sqrt_matches_std() {
        let values = [
            2.0,
            3.0,
            0.5,
            1.0000000000000002,
            0.9999999999999999,
            f64::MAX,
            f64::MIN_POSITIVE,
            f64::from_bits(1),
            f64::from_bits(3),
            f64::from_bits(0x000f_ffff_ffff_ffff),
            1e-320,
            123456.789,
            core::f64::consts::PI,
        ];
        for &x in &values {
            assert_eq!(sqrt(x).to_bits(), x.sqrt().to_bits(), "sqrt({x})");
        }
        // a spread of bit patterns across the exponent range
        for i in 0..4096u64 {
            let x = f64::from_bits(i.wrapping_mul(0x9e37_79b9_7f4a_7c15) >> 1);
            if x.is_finite() {
                assert_eq!(sqrt(x).to_bits(), x.sqrt().to_bits(), "sqrt({x})");
            }
        }
    }
}
