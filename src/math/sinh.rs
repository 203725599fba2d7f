//! Correctly-rounded binary64 sinh.
//!
//! Two-level table reduction: x = T[i].x + U[j].x + w with |w| < 0.00543,
//! then sinh/cosh addition formulas over the tables. The fast path carries
//! an absolute error bound and certifies its rounding; the accurate path
//! re-runs the composition with double-double tables and polynomials and
//! resolves the remaining inputs from the exceptional lists.
//! Following Markstein, "IA-64 and Elementary Functions", ch. 16.

use super::bits::{asdouble, fabs, next_down, next_up, roundeven_finite, SIGN_MASK};
use super::dd::{d_mul, fast_sum, fast_sum2, fast_two_sum, s_mul, two_prod};
use super::fenv::{self, Round, INEXACT, UNDERFLOW};
use super::fma::fma;
use super::round::{round_sum, ziv_round};
use super::sinh_data::{C1, C2, EXC_V, EXC_W, S1, S2, T, TL, U, UL};

/// magic scale: magic*x rounds to an integer <= 65535 over the whole
/// domain, whatever the rounding of the product.
const MAGIC: f64 = asdouble(0x4057_0f77_fc88_ae3c); // 0x1.70f77fc88ae3cp6

/// sinh(0x1.633ce8fb9f87ep+9) already exceeds 2^1024*(1-2^-54)
const OVERFLOW_BOUND: u64 = 0x4086_33ce_8fb9_f87e;

/// sinh(w) as h + l for |w| < 0.00543, relative error 2^-67.99.
#[inline]
fn eval_s(w: f64) -> (f64, f64) {
    let z = w * w;
    let mut h = fma(asdouble(S1[3]), z, asdouble(S1[2]));
    h = fma(h, z, asdouble(S1[1]));
    h *= z; // w^2*(S1[1] + w^2*S1[2] + w^4*S1[3])
    // S1[0] = 1, so the result is w + w*h
    fast_two_sum(w, h * w)
}

/// cosh(w) as h + l for |w| < 0.00543, relative error 2^-68.04.
#[inline]
fn eval_c(w: f64) -> (f64, f64) {
    let z = w * w;
    let mut h = fma(asdouble(C1[3]), z, asdouble(C1[2]));
    h = fma(h, z, asdouble(C1[1]));
    h *= z;
    // C1[0] = 1, so the result is 1 + h
    fast_two_sum(1.0, h)
}

/// sinh(w) for |w| < 0.00543 with the double-double polynomial
/// (relative error 2^-108.33 before arithmetic).
fn eval_s2(w: f64) -> (f64, f64) {
    let (zh, zl) = two_prod(w, w);
    let h = fma(asdouble(S2[4][0]), zh, asdouble(S2[3][0]));
    // neglected: S2[4]*zl*w^7 (< 2^-131 relative) and ulp(h)*w^6 (< 2^-110)
    let (h, l) = s_mul(h, zh, zl);
    let (h, l) = fast_sum2(asdouble(S2[2][0]), asdouble(S2[2][1]), h, l);
    let (h, l) = d_mul(h, l, zh, zl);
    let (h, l) = fast_sum2(asdouble(S2[1][0]), asdouble(S2[1][1]), h, l);
    let (h, l) = d_mul(h, l, zh, zl);
    let (h, l) = s_mul(w, h, l);
    fast_sum(w, h, l)
}

/// cosh(w) for |w| < 0.00543 (double-double polynomial, 2^-105.8).
fn eval_c2(w: f64) -> (f64, f64) {
    let (zh, zl) = two_prod(w, w);
    let h = fma(asdouble(C2[4][0]), zh, asdouble(C2[3][0]));
    let (h, l) = s_mul(h, zh, zl);
    let (h, l) = fast_sum2(asdouble(C2[2][0]), asdouble(C2[2][1]), h, l);
    let (h, l) = d_mul(h, l, zh, zl);
    let (h, l) = fast_sum2(asdouble(C2[1][0]), asdouble(C2[1][1]), h, l);
    let (h, l) = d_mul(h, l, zh, zl);
    fast_sum(1.0, h, l)
}

/// Fast path for 0 < x <= 0x1.633ce8fb9f87dp+9: (h, l, err) with
/// |h + l - sinh(x)| < err.
fn sinh_fast(x: f64) -> (f64, f64, f64) {
    let k = roundeven_finite(MAGIC * x); // k <= 65535
    // |x - k/magic| <= 1/(2 magic) + 2^-37/magic < 0.00542055
    let kk = k as i64;
    let i = (kk >> 8) as usize;
    let j = (kk & 0xff) as usize;
    let v = x - asdouble(T[i][0]);
    // sinh(x) = sinh(T[i].x)*cosh(v) + cosh(T[i].x)*sinh(v)
    let w = v - asdouble(U[j][0]);
    // |x - T[i].x - U[j].x| < 0.00542055 + 2.36e-8 + 1.92e-8 < 0.00543

    let (swh, swl) = eval_s(w);
    // |swh + swl - sinh(w)| < 2^-67.99 |swh|

    if kk == 0 {
        // 2^-67.99 < 0x1.02p-68; the 2^-1074 term keeps err nonzero when
        // the product underflows
        let err = fma(asdouble(0x3bb0_2000_0000_0000), swh, asdouble(1));
        return (swh, swl, err);
    }

    let (cwh, cwl) = eval_c(w);
    // |cwh + cwl - cosh(w)| < 2^-68.04 |cwh + cwl|

    // sinh(v) = U[j].s*cosh(w) + U[j].c*sinh(w), each product to 2^-64.82;
    // cancellation for j=1, w=-0.00543 bounded by
    // (|h1+l1| + |h2+l2|)/(|h1+l1| - |h2+l2|) < 3.008
    let (h1, l1) = s_mul(asdouble(U[j][1]), cwh, cwl);
    let (h2, l2) = s_mul(asdouble(U[j][2]), swh, swl);
    let (h, l) = fast_sum2(h1, l1, h2, l2); // ~ sinh(v)

    if i == 0 {
        // 3.008 * 2^-64.82 < 0x1.b5p-64
        return (h, l, asdouble(0x3bfb_5000_0000_0000) * h);
    }

    let (svh, svl) = (h, l);
    // cosh(v) = U[j].s*sinh(w) + U[j].c*cosh(w); cancellation < 1.000118
    let (h1, l1) = s_mul(asdouble(U[j][1]), swh, swl);
    let (h2, l2) = s_mul(asdouble(U[j][2]), cwh, cwl);
    let (cvh, cvl) = fast_sum2(h2, l2, h1, l1);

    // sinh(x) = T[i].s*(cosh(v)+sinh(v)) + T[i].e*sinh(v), where the
    // cosh+sinh cancellation is < 1.0109 since |v| > 0.00542
    let (cvh, cvl) = fast_sum2(cvh, cvl, svh, svl);
    let (h1, l1) = s_mul(asdouble(T[i][1]), cvh, cvl);
    // |h1+l1 - sinh(T[i].x)*(cosh(v)+sinh(v))| < 2^-59.79 |h1+l1|
    let (h2, l2) = s_mul(asdouble(T[i][2]), svh, svl);
    // |h2+l2 - e^-T[i].x*sinh(v)| < 2^-63.20 |h2+l2|
    let (h, l) = fast_sum2(h1, l1, h2, l2);

    // 2^-59.79 < 0x1.29p-60 and 2^-63.20 < 0x1.bep-64
    let err = asdouble(0x3c32_9000_0000_0000) * h1
        + asdouble(0x3bfb_e000_0000_0000) * fabs(h2);
    (h, l, err)
}

/// Accurate path: double-double composition over the corrected tables,
/// with the exceptional-input lookups for the degenerate cells.
fn sinh_accurate(x: f64) -> (f64, f64) {
    let k = roundeven_finite(MAGIC * x);
    let kk = k as i64;
    let i = (kk >> 8) as usize;
    let j = (kk & 0xff) as usize;
    let v = x - asdouble(T[i][0]);
    let w = v - asdouble(U[j][0]);
    let (h, l) = eval_s2(w);
    if kk == 0 {
        for e in &EXC_W {
            if x == asdouble(e[0]) {
                return (asdouble(e[1]), asdouble(e[2]));
            }
        }
        return (h, l);
    }

    let (swh, swl) = (h, l);
    let (cwh, cwl) = eval_c2(w);
    let (h1, l1) = d_mul(asdouble(U[j][1]), asdouble(UL[j][0]), cwh, cwl);
    let (h2, l2) = d_mul(asdouble(U[j][2]), asdouble(UL[j][1]), swh, swl);
    let (h, l) = fast_sum2(h1, l1, h2, l2);
    if i == 0 {
        for e in &EXC_V {
            if x == asdouble(e[0]) {
                return (asdouble(e[1]), asdouble(e[2]));
            }
        }
        return (h, l);
    }

    let (svh, svl) = (h, l);
    let (h1, l1) = d_mul(asdouble(U[j][1]), asdouble(UL[j][0]), swh, swl);
    let (h2, l2) = d_mul(asdouble(U[j][2]), asdouble(UL[j][1]), cwh, cwl);
    let (cvh, cvl) = fast_sum2(h2, l2, h1, l1);
    let (cvh, cvl) = fast_sum2(cvh, cvl, svh, svl);
    // cvh+cvl ~ cosh(v) + sinh(v)
    let (h1, l1) = d_mul(asdouble(T[i][1]), asdouble(TL[i][0]), cvh, cvl);
    let (h2, l2) = d_mul(asdouble(T[i][2]), asdouble(TL[i][1]), svh, svl);
    fast_sum2(h1, l1, h2, l2)
}

/// sinh, correctly rounded in the given direction.
pub fn sinh_rnd(x: f64, rnd: Round) -> f64 {
    let ux = x.to_bits();
    let ax_bits = ux & !SIGN_MASK;
    let neg = (ux >> 63) != 0;

    if ax_bits >= OVERFLOW_BOUND {
        if ax_bits > 0x7ff0_0000_0000_0000 {
            return fenv::propagate_nan(x);
        }
        if ax_bits == 0x7ff0_0000_0000_0000 {
            return x;
        }
        return fenv::overflow(neg, rnd);
    }

    if ax_bits == 0 {
        return x; // +-0 exactly
    }

    // |sinh(x) - x| < ulp(x)/2 for |x| <= 0x1.7137449123ef6p-26: the result
    // is x, nudged away from zero under the away-directed mode
    if ax_bits <= 0x3e57_1374_4912_3ef6 {
        fenv::raise(INEXACT);
        if ax_bits < 0x0010_0000_0000_0000 {
            fenv::raise(UNDERFLOW);
        }
        return match rnd {
            Round::Upward if !neg => next_up(x),
            Round::Downward if neg => next_down(x),
            _ => x,
        };
    }

    let ax = asdouble(ax_bits);
    let (h, l, err) = sinh_fast(ax);
    let (sh, sl) = if neg { (-h, -l) } else { (h, l) };
    if let Some(r) = ziv_round(sh, sl, err, rnd) {
        return r;
    }

    let (h, l) = sinh_accurate(ax);
    let (h, l) = if neg { (-h, -l) } else { (h, l) };
    round_sum(h, l, rnd)
}

/// sinh, correctly rounded to nearest.
pub fn sinh(x: f64) -> f64 {
    sinh_rnd(x, Round::Nearest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_and_tiny() {
        assert_eq!(sinh(0.0).to_bits(), 0.0f64.to_bits());
        assert_eq!(sinh(-0.0).to_bits(), (-0.0f64).to_bits());
        let t = f64::from_bits(0x3e57_1374_4912_3ef6);
        assert_eq!(sinh(t), t);
        assert_eq!(sinh_rnd(t, Round::Upward), next_up(t));
        assert_eq!(sinh_rnd(-t, Round::Downward), next_down(-t));
        assert_eq!(sinh_rnd(-t, Round::TowardZero), -t);
    }

    #[test]
    fn test_specials() {
        assert!(sinh(f64::NAN).is_nan());
        assert_eq!(sinh(f64::INFINITY), f64::INFINITY);
        assert_eq!(sinh(f64::NEG_INFINITY), f64::NEG_INFINITY);
        // past the overflow bound
        assert_eq!(sinh(711.0), f64::INFINITY);
        assert_eq!(sinh_rnd(711.0, Round::TowardZero), f64::MAX);
        assert_eq!(sinh_rnd(-711.0, Round::Upward), -f64::MAX);
    }

    #[test]
    fn test_odd_symmetry() {
        for &x in &[0.5, 1.0, 3.25, 17.17, 333.0, 1e-8, 0.013] {
            assert_eq!(sinh(x).to_bits(), (-sinh(-x)).to_bits(), "sinh({x})");
        }
    }

    #[test]
    fn test_matches_std_loosely() {
        for &x in &[0.1, 0.5, 1.0, 2.0, 5.0, 20.0, 100.0, 650.0] {
            let r = sinh(x);
            let ulp = f64::from_bits(r.to_bits() + 1) - r;
            assert!((r - x.sinh()).abs() <= 2.0 * ulp, "sinh({x}) = {r:e}");
        }
    }

    #[test]
    fn test_fast_path_error_positive() {
        for &x in &[0.001, 0.006, 0.5, 3.0, 100.0, 700.0] {
            let (_, _, err) = sinh_fast(x);
            assert!(err > 0.0, "err({x})");
        }
    }

    #[test]
    fn test_accurate_agrees_with_fast() {
        for &x in &[0.001, 0.004, 0.03, 0.7, 4.2, 55.5, 600.0] {
            let (fh, fl, _) = sinh_fast(x);
            let (ah, al) = sinh_accurate(x);
            let d = ((fh - ah) + (fl - al)).abs();
            assert!(d <= 2f64.powi(-58) * ah.abs(), "fast/accurate at {x}: {d:e}");
        }
    }
}
