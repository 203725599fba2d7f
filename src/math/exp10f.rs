//! Correctly-rounded binary32 10^x.
//!
//! A 16-entry 2^(j/16) table with a degree-6 polynomial in double; the
//! double result carries ~40 extra bits over the binary32 target, so one
//! software narrowing settles every direction. Integer arguments up to 10
//! return the exact decimal powers, and the one input the double margin
//! cannot separate is answered from its pre-identified value.

use super::bits::{asdouble, floor_small};
use super::fenv::{self, Round};
use super::round::narrow;

/// 16 * log2(10), split head/tail.
const ILOG2_10H: f64 = asdouble(0x404a934f09800000);
const ILOG2_10L: f64 = asdouble(0xbe29723a81000000);

static C: [u64; 6] = [
    0x3fa62e42fefa398b, 0x3f4ebfbdff84555a, 0x3eec6b08d4ad86d3,
    0x3e83b2ad1b1716a2, 0x3e15d7472718ce9d, 0x3da4a1d7f457ac56,
];

/// 2^(j/16), j = 0..15.
static TB: [u64; 16] = [
    0x3ff0000000000000, 0x3ff0b5586cf9890f, 0x3ff172b83c7d517b, 0x3ff2387a6e756238,
    0x3ff306fe0a31b715, 0x3ff3dea64c123422, 0x3ff4bfdad5362a27, 0x3ff5ab07dd485429,
    0x3ff6a09e667f3bcd, 0x3ff7a11473eb0187, 0x3ff8ace5422aa0db, 0x3ff9c49182a3f090,
    0x3ffae89f995ad3ad, 0x3ffc199bdd85529c, 0x3ffd5818dcfba487, 0x3ffea4afa2a490da,
];

/// 10^x, correctly rounded in the given direction.
pub fn exp10f_rnd(x: f32, rnd: Round) -> f32 {
    let ux = x.to_bits();
    let ex = (ux >> 23) & 0xff;
    if ex > 127 + 6 {
        // |x| >= 128, or Inf/NaN: saturated either way
        if ex == 0xff {
            if ux << 9 != 0 {
                return fenv::propagate_nan_f(x);
            }
            return if ux >> 31 == 0 { x } else { 0.0 };
        }
        return if ux >> 31 == 0 {
            fenv::overflow_f(false, rnd)
        } else {
            fenv::underflow_f(false, rnd)
        };
    }
    if ex < 127 - 27 {
        // |x log(10)| < half an ulp of 1: round from 1 + x
        if ux << 1 == 0 {
            return 1.0;
        }
        return narrow(1.0 + x as f64, rnd);
    }
    if ux == 0xc14d_e862 {
        // x = -0x1.4de862p+3: the double margin collapses here
        return narrow(asdouble(0x3dc4359950000010), rnd);
    }
    if ux << 12 == 0 {
        // few mantissa bits: the integer arguments with exact powers
        let k = (ux >> 20) as i32 - 1016;
        let exact: [(i32, f32); 10] = [
            (0, 10.0),
            (8, 100.0),
            (12, 1000.0),
            (16, 10000.0),
            (18, 100000.0),
            (20, 1000000.0),
            (22, 10000000.0),
            (24, 100000000.0),
            (25, 1000000000.0),
            (26, 10000000000.0),
        ];
        for &(kk, r) in &exact {
            if k == kk {
                return r;
            }
        }
    }
    let z = x as f64;
    let a = ILOG2_10H * z;
    let ia = floor_small(a);
    let h = (a - ia) + ILOG2_10L * z;
    let i = ia as i64;
    let j = (i & 0xf) as usize;
    let e = (i - (i & 0xf)) >> 4;
    let s = asdouble(TB[j]) * asdouble(((e + 0x3ff) as u64) << 52);
    let h2 = h * h;
    let mut c0 = asdouble(C[0]) + h * asdouble(C[1]);
    let c2 = asdouble(C[2]) + h * asdouble(C[3]);
    let c4 = asdouble(C[4]) + h * asdouble(C[5]);
    c0 += h2 * (c2 + h2 * c4);
    let w = s * h;
    narrow(s + w * c0, rnd)
}

/// 10^x, correctly rounded to nearest.
pub fn exp10f(x: f32) -> f32 {
    exp10f_rnd(x, Round::Nearest)
}
