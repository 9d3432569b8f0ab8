// origin: fdlibm 5.3 e_rem_pio2.c, k_rem_pio2.c
//
// ====================================================
// Copyright (C) 1993 by Sun Microsystems, Inc. All rights reserved.
//
// Developed at SunPro, a Sun Microsystems, Inc. business.
// Permission to use, copy, modify, and distribute this
// software is freely granted, provided that this notice
// is preserved.
// ====================================================

//! Constant tables for reducing arguments modulo pi/2.

/// 396 hex digits (476 decimal) of 2/pi, 24 bits per entry.
pub(crate) const TWO_OVER_PI: [u32; 66] = [
    0xa2f983, 0x6e4e44, 0x1529fc, 0x2757d1, 0xf534dd, 0xc0db62, //
    0x95993c, 0x439041, 0xfe5163, 0xabdebb, 0xc561b7, 0x246e3a, //
    0x424dd2, 0xe00649, 0x2eea09, 0xd1921c, 0xfe1deb, 0x1cb129, //
    0xa73ee8, 0x8235f5, 0x2ebb44, 0x84e99c, 0x7026b4, 0x5f7e41, //
    0x3991d6, 0x398353, 0x39f49c, 0x845f8b, 0xbdf928, 0x3b1ff8, //
    0x97ffde, 0x05980f, 0xef2f11, 0x8b5a0a, 0x6d1f6d, 0x367ecf, //
    0x27cb09, 0xb74f46, 0x3f669e, 0x5fea2d, 0x7527ba, 0xc7ebe5, //
    0xf17b3d, 0x0739f7, 0x8a5292, 0xea6bfb, 0x5fb11f, 0x8d5d08, //
    0x560330, 0x46fc7b, 0x6babf0, 0xcfbc20, 0x9af436, 0x1da9e3, //
    0x91615e, 0xe61b08, 0x659985, 0x5f14a0, 0x68408d, 0xffd880, //
    0x4d7327, 0x310606, 0x1556ca, 0x73a8c9, 0x60e27b, 0xc08c6b, //
];

/// High words of the doubles nearest k*pi/2, k = 1..=32.
pub(crate) const NPIO2_HW: [u32; 32] = [
    0x3ff921fb, 0x400921fb, 0x4012d97c, 0x401921fb, 0x401f6a7a, 0x4022d97c, //
    0x4025fdbb, 0x402921fb, 0x402c463a, 0x402f6a7a, 0x4031475c, 0x4032d97c, //
    0x40346b9c, 0x4035fdbb, 0x40378fdb, 0x403921fb, 0x403ab41b, 0x403c463a, //
    0x403dd85a, 0x403f6a7a, 0x40407e4c, 0x4041475c, 0x4042106c, 0x4042d97c, //
    0x4043a28c, 0x40446b9c, 0x404534ac, 0x4045fdbb, 0x4046c6cb, 0x40478fdb, //
    0x404858eb, 0x404921fb, //
];

/// Low words matching [`NPIO2_HW`]; together they spell the double nearest
/// k*pi/2.
pub(crate) const NPIO2_LW: [u32; 32] = [
    0x54442d18, 0x54442d18, 0x7f3321d2, 0x54442d18, 0x2955385e, 0x7f3321d2, //
    0xe9bba775, 0x54442d18, 0xbeccb2bb, 0x2955385e, 0xc9eedf00, 0x7f3321d2, //
    0x347764a4, 0xe9bba775, 0x9effea46, 0x54442d18, 0x09886fea, 0xbeccb2bb, //
    0x7410f58c, 0x2955385e, 0xef4cbd98, 0xc9eedf00, 0xa4910069, 0x7f3321d2, //
    0x59d5433b, 0x347764a4, 0x0f19860c, 0xe9bba775, 0xc45dc8de, 0x9effea46, //
    0x79a20baf, 0x54442d18, //
];

/// Leading part of `x - k*pi/2` when `x` is exactly the k-th table multiple.
pub(crate) const REM_PIO2_Y0: [f64; 32] = [
    -6.123233995736766e-17,
    -1.2246467991473532e-16,
    -1.8369701987210297e-16,
    -2.4492935982947064e-16,
    -3.061616997868383e-16,
    -3.6739403974420594e-16,
    -4.286263797015736e-16,
    -4.898587196589413e-16,
    -5.51091059616309e-16,
    -6.123233995736766e-16,
    -2.4499125789312946e-15,
    -7.347880794884119e-16,
    9.803364199544708e-16,
    -8.572527594031472e-16,
    -2.6948419387607653e-15,
    -9.797174393178826e-16,
    7.354070601250002e-16,
    -1.102182119232618e-15,
    -2.939771298590236e-15,
    -1.2246467991473533e-15,
    4.904777002955296e-16,
    -4.899825157862589e-15,
    -3.1847006584197066e-15,
    -1.4695761589768238e-15,
    2.45548340466059e-16,
    1.9606728399089416e-15,
    -3.4296300182491773e-15,
    -1.7145055188062944e-15,
    6.189806365883577e-19,
    -5.3896838775215305e-15,
    -3.674559378078648e-15,
    -1.959434878635765e-15,
];

/// Trailing part matching [`REM_PIO2_Y0`].
pub(crate) const REM_PIO2_Y1: [f64; 32] = [
    1.4974857633995285e-33,
    2.994769809718341e-33,
    -7.833796929500809e-33,
    5.989539619436682e-33,
    1.981287616837413e-32,
    -1.5667593859001618e-32,
    -1.8442573100641268e-33,
    1.1979079238873364e-32,
    2.5802415787810855e-32,
    3.962575233674826e-32,
    -1.437661374195672e-31,
    -3.1335187718003235e-32,
    8.109576198356073e-32,
    -3.6885146201282536e-33,
    -8.847279122381724e-32,
    2.3958158477746728e-32,
    3.778149502668422e-32,
    5.160483157562171e-32,
    -3.317944502806745e-32,
    7.925150467349652e-32,
    -5.532771930192468e-33,
    -2.875322748391344e-31,
    2.2113901167682514e-32,
    -6.267037543600647e-32,
    4.567676892442579e-34,
    1.6219152396712146e-31,
    7.740724736343248e-32,
    -7.377029240256507e-33,
    -5.5580050162563314e-36,
    -1.7694558244763448e-31,
    -2.6172985905132346e-31,
    4.7916316955493457e-32,
];

// invpio2: 53 bits of 2/pi; pio2_1: first 33 bits of pi/2; pio2_1t: pi/2 - pio2_1;
// pio2_2: second 33 bits; pio2_2t: pi/2 - (pio2_1 + pio2_2); pio2_3: third 33 bits;
// pio2_3t: pi/2 - (pio2_1 + pio2_2 + pio2_3).
pub(crate) const INVPIO2: f64 = 6.36619772367581382433e-01; // 0x3fe45f30, 0x6dc9c883
pub(crate) const PIO2_1: f64 = 1.57079632673412561417e+00; // 0x3ff921fb, 0x54400000
pub(crate) const PIO2_1T: f64 = 6.07710050650619224932e-11; // 0x3dd0b461, 0x1a626331
pub(crate) const PIO2_2: f64 = 6.07710050630396597660e-11; // 0x3dd0b461, 0x1a600000
pub(crate) const PIO2_2T: f64 = 2.02226624879595063154e-21; // 0x3ba3198a, 0x2e037073
pub(crate) const PIO2_3: f64 = 2.02226624871116645580e-21; // 0x3ba3198a, 0x2e000000
pub(crate) const PIO2_3T: f64 = 8.47842766036889956997e-32; // 0x397b839a, 0x252049c1

/// pi/2 cut into 24-bit pieces for the Payne-Hanek product.
pub(crate) const PIO2_CHUNKS: [f64; 8] = [
    1.57079625129699707031e+00, // 0x3ff921fb, 0x40000000
    7.54978941586159635335e-08, // 0x3e74442d, 0x00000000
    5.39030252995776476554e-15, // 0x3cf84698, 0x80000000
    3.28200341580791294123e-22, // 0x3b78cc51, 0x60000000
    1.27065575308067607349e-29, // 0x39f01b83, 0x80000000
    1.22933308981111328932e-36, // 0x387a2520, 0x40000000
    2.73370053816464559624e-44, // 0x36e38222, 0x80000000
    2.16741683877804819444e-51, // 0x3569f31d, 0x00000000
];

/// Initial number of 2/pi terms by precision (single, double, extended, quad).
pub(crate) const INIT_JK: [usize; 4] = [2, 3, 4, 6];
