//! Correctly-rounded binary64 10^x.
//!
//! 10^x = e^(x log 10): the argument is multiplied by a two-double (fast)
//! or three-double (accurate) log(10) and handed to the shared exponential
//! kernel. Overflow above 0x1.34413509f79ffp+8, underflow below
//! -0x1.439b746e36b53p+8; the band in between lands in the subnormals and
//! goes straight to the accurate step and the scaled final rounder.

use super::bits::asdouble;
use super::dd::s_mul;
use super::exp_data::{LN10H, LN10L, LN10M};
use super::exp_kernel::{exp_1, exp_2};
use super::fenv::{self, Round};
use super::fma::fma;
use super::round::{round_scaled, round_sum, ziv_round};

/// 10^x > 2^1024 * (1 - 2^-54) from this bound on: 0x1.34413509f79ffp+8
const OVERFLOW_BOUND: u64 = 0x4073_4413_509f_79ff;

/// 10^x < 2^-1075 below -0x1.439b746e36b53p+8
const UNDERFLOW_BOUND: u64 = 0xc074_39b7_46e3_6b53;

/// Fast path: h + l ~ 10^x with |h + l - 10^x| < err, or None when the
/// result binade is too close to the under/overflow limits for the scaled
/// representation used by the fast kernel.
fn exp10_fast(x: f64) -> Option<(f64, f64, f64)> {
    // |LN10H + LN10M - log(10)| < 2^-106.3, so
    // |rh + rl - x*log(10)| < ulp(rl) + |x|*2^-106.3 < 2^-94.82
    let (rh, rl) = s_mul(x, asdouble(LN10H), asdouble(LN10M));
    let (h, l) = exp_1(rh, rl)?;
    // kernel 2^-74.16 plus the reduction above: 2^-74.158 < 0x1.cbp-75
    Some((h, l, asdouble(0x3b4c_b000_0000_0000) * h))
}

/// Accurate step: three-double reduction (|rh + rl - x*log(10)| < 2^-93.5)
/// over the degree-6 double-double kernel, rounded on the subnormal-aware
/// scaled grid.
fn exp10_accurate(x: f64, rnd: Round) -> f64 {
    let (rh, t) = s_mul(x, asdouble(LN10H), asdouble(LN10L));
    let rl = fma(x, asdouble(LN10M), t);
    let (eh, el, e2) = exp_2(rh, rl);
    round_scaled(eh, el, e2, rnd)
}

/// 10^x, correctly rounded in the given direction.
pub fn exp10_rnd(x: f64, rnd: Round) -> f64 {
    let ux = x.to_bits();
    let ax = ux & 0x7fff_ffff_ffff_ffff;

    if ax >= OVERFLOW_BOUND {
        // NaN, +-Inf, or |x| past the last fully-representable decade
        if ax > 0x7ff0_0000_0000_0000 {
            return fenv::propagate_nan(x);
        }
        if ax == 0x7ff0_0000_0000_0000 {
            return if ux >> 63 == 0 { x } else { 0.0 };
        }
        if ux >> 63 == 0 {
            return fenv::overflow(false, rnd);
        }
        if x <= asdouble(UNDERFLOW_BOUND) {
            return fenv::underflow(false, rnd);
        }
        // 10^x within an ulp or two of the smallest subnormals
        return exp10_accurate(x, rnd);
    }

    if ax <= 0x3c7b_cb7b_1526_e50e {
        // |x*log(10)| < 2^-54: 10^x and 1 + x sit strictly between the
        // same pair of representable neighbours of 1 in every direction
        if ax == 0 {
            return 1.0;
        }
        return round_sum(1.0, x, rnd);
    }

    // 10^k is exact for integer k in [0, 22] (5^22 < 2^53); the reduction
    // through e^(k log 10) cannot reproduce these bit-for-bit
    if ux >= 0x3ff0_0000_0000_0000 && x <= 22.0 && x == (x as i64) as f64 {
        let mut r = 1.0;
        for _ in 0..x as i64 {
            r *= 10.0; // exact at every step
        }
        return r;
    }

    if let Some((h, l, err)) = exp10_fast(x) {
        if let Some(r) = ziv_round(h, l, err, rnd) {
            return r;
        }
    }
    exp10_accurate(x, rnd)
}

/// 10^x, correctly rounded to nearest.
pub fn exp10(x: f64) -> f64 {
    exp10_rnd(x, Round::Nearest)
}
