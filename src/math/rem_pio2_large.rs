// origin: fdlibm 5.3 k_rem_pio2.c
//
// ====================================================
// Copyright (C) 1993 by Sun Microsystems, Inc. All rights reserved.
//
// Developed at SunPro, a Sun Microsystems, Inc. business.
// Permission to use, copy, modify, and distribute this
// software is freely granted, provided that this notice
// is preserved.
// ====================================================

//! Payne-Hanek reduction for arguments beyond the medium tier.
//!
//! The input is given as up to three 24-bit digits `x[i]`, so that
//! `|x| = sum(x[i] * 2^(e0 - 24*i))`. Only the window of 2/pi that can affect
//! the fraction of `x * 2/pi` is multiplied out: higher digits contribute
//! multiples of 8 and vanish modulo 2pi, lower ones are below the result's
//! precision. The product is distilled into 24-bit integers, the integer part
//! gives the quadrant and the fraction is multiplied back by pi/2.
//!
//! The working arrays are sized for double precision and the full
//! [`TWO_OVER_PI`] table, which covers every finite binary64 exponent.

use super::rem_pio2_tables::{INIT_JK, PIO2_CHUNKS, TWO_OVER_PI};
use super::{floor_f64, scalbn};

const TWO24: f64 = 1.67772160000000000000e+07; // 0x41700000, 0x00000000
const TWON24: f64 = 5.96046447753906250000e-08; // 0x3e700000, 0x00000000

/// Index into [`INIT_JK`] for a 53-bit result split over two doubles.
const DOUBLE: usize = 2;

/// Splits `|x|` (given by its high word without sign and its low word) into
/// 24-bit digits.
///
/// Returns `e0`, the digits and how many of them are significant (trailing
/// zero digits are dropped).
pub(crate) fn split_digits(ix: u32, lo: u32) -> (i32, [f64; 3], usize) {
    // e0 = ilogb(z) - 23
    let e0 = (ix >> 20) as i32 - 1046;
    let mut z = super::with_hi_lo((ix as i32 - (e0 << 20)) as u32, lo);
    let mut tx = [0.0f64; 3];
    for d in tx.iter_mut().take(2) {
        *d = (z as i32) as f64;
        z = (z - *d) * TWO24;
    }
    tx[2] = z;

    let mut nx = 3;
    while nx > 1 && tx[nx - 1] == 0.0 {
        nx -= 1;
    }
    (e0, tx, nx)
}

/// `sum(x[j] * f[top - j])`, accumulated in increasing `j`.
#[inline(always)]
fn convolve(x: &[f64], f: &[f64; 20], top: usize) -> f64 {
    let mut fw = 0.0;
    for (j, &xj) in x.iter().enumerate() {
        fw += xj * f[top - j];
    }
    fw
}

/// Reduces the digits `x` (exponent `e0`, see [`split_digits`]) modulo pi/2.
///
/// Returns `(n & 7, y0, y1)` for the non-negative argument; the caller
/// reattaches the sign.
pub(crate) fn rem_pio2_large(x: &[f64], e0: i32) -> (i32, f64, f64) {
    let jk = INIT_JK[DOUBLE];
    let jp = jk;
    let jx = x.len() - 1;

    // jv: index of the first 2/pi digit that matters; q0: exponent of q[jz]
    let jv = ((e0 - 3) / 24).max(0) as usize;
    let mut q0 = e0 - 24 * (jv as i32 + 1);

    let mut f = [0f64; 20];
    let mut q = [0f64; 20];
    let mut fq = [0f64; 20];
    let mut iq = [0i32; 20];

    // f[i] = TWO_OVER_PI[jv - jx + i], zero before the table starts
    for (i, slot) in f.iter_mut().enumerate().take(jx + jk + 1) {
        *slot = match (jv + i).checked_sub(jx) {
            Some(j) => TWO_OVER_PI[j] as f64,
            None => 0.0,
        };
    }
    for i in 0..=jk {
        q[i] = convolve(x, &f, jx + i);
    }

    let mut jz = jk;
    loop {
        // distill q[] into iq[] reversingly
        let mut z = q[jz];
        for (i, j) in (1..=jz).rev().enumerate() {
            let fw = ((TWON24 * z) as i32) as f64;
            iq[i] = (z - TWO24 * fw) as i32;
            z = q[j - 1] + fw;
        }

        // integer part of the product modulo 8
        z = scalbn(z, q0);
        z -= 8.0 * floor_f64(z * 0.125);
        let mut n = z as i32;
        z -= n as f64;

        // ih > 0 when the fraction is at least 1/2
        let mut ih = 0;
        if q0 > 0 {
            let top = iq[jz - 1] >> (24 - q0);
            n += top;
            iq[jz - 1] -= top << (24 - q0);
            ih = iq[jz - 1] >> (23 - q0);
        } else if q0 == 0 {
            ih = iq[jz - 1] >> 23;
        } else if z >= 0.5 {
            ih = 2;
        }

        if ih > 0 {
            // q > 0.5: round n up and take 1 - q
            n += 1;
            let mut carry = false;
            for d in iq[..jz].iter_mut() {
                if carry {
                    *d = 0xffffff - *d;
                } else if *d != 0 {
                    carry = true;
                    *d = 0x1000000 - *d;
                }
            }
            match q0 {
                1 => iq[jz - 1] &= 0x7fffff,
                2 => iq[jz - 1] &= 0x3fffff,
                _ => {}
            }
            if ih == 2 {
                z = 1.0 - z;
                if carry {
                    z -= scalbn(1.0, q0);
                }
            }
        }

        // an all-zero fraction over the window needs more digits of 2/pi
        if z == 0.0 && iq[jk..jz].iter().all(|&d| d == 0) {
            let mut k = 1;
            while iq[jk - k] == 0 {
                k += 1;
            }
            for i in jz + 1..=jz + k {
                f[jx + i] = TWO_OVER_PI[jv + i] as f64;
                q[i] = convolve(x, &f, jx + i);
            }
            jz += k;
            continue;
        }

        // chop off zero terms
        if z == 0.0 {
            jz -= 1;
            q0 -= 24;
            while iq[jz] == 0 {
                jz -= 1;
                q0 -= 24;
            }
        } else {
            // break z into 24-bit digits if necessary
            z = scalbn(z, -q0);
            if z >= TWO24 {
                let fw = ((TWON24 * z) as i32) as f64;
                iq[jz] = (z - TWO24 * fw) as i32;
                jz += 1;
                q0 += 24;
                iq[jz] = fw as i32;
            } else {
                iq[jz] = z as i32;
            }
        }

        // back to floating point: q[i] = iq[i] * 2^(q0 - 24*(jz - i))
        let mut fw = scalbn(1.0, q0);
        for i in (0..=jz).rev() {
            q[i] = fw * iq[i] as f64;
            fw *= TWON24;
        }

        // fq[jz - i] = pi/2 * q[i]
        for i in (0..=jz).rev() {
            let mut acc = 0.0;
            for k in 0..=jp.min(jz - i) {
                acc += PIO2_CHUNKS[k] * q[i + k];
            }
            fq[jz - i] = acc;
        }

        // compress fq[] into two doubles
        let mut hi = 0.0;
        for &v in fq[..=jz].iter().rev() {
            hi += v;
        }
        let mut lo = fq[0] - hi;
        for &v in &fq[1..=jz] {
            lo += v;
        }
        return if ih == 0 {
            (n & 7, hi, lo)
        } else {
            (n & 7, -hi, -lo)
        };
    }
}
