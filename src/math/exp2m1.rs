//! Correctly-rounded binary64 2^x - 1.
//!
//! Four regimes: |x| <= 0x1.0527dbd87e24dp-51 reduces to log(2)*x with a
//! quadratic correction (and a scaled evaluation when the result is
//! subnormal); |x| <= 0.125 runs a Taylor ladder in x with double-double
//! leading coefficients; elsewhere 2^x comes from the shared exponential
//! kernel and the 1 is subtracted exactly. x <= -54 saturates against -1,
//! x >= 1024 overflows.

use super::bits::{asdouble, fabs};
use super::dd::{fast_two_sum, s_mul, two_prod};
use super::exp_data::{LN2H, LN2M};
use super::exp_kernel::{exp2_acc, exp2_fast};
use super::fenv::{self, Round, INEXACT};
use super::fma::fma;
use super::round::{round_scaled, round_sum, ziv_round};

/// log(2)^k / k! as (h, l) for k = 1..=4: the Taylor coefficients of
/// 2^x - 1 whose weight in the result exceeds double precision.
static P_DD: [[u64; 2]; 4] = [
    [0x3fe62e42fefa39ef, 0x3c7abc9e3b39803f],
    [0x3fcebfbdff82c58f, 0xbc65e43a53e44da3],
    [0x3fac6b08d704a0c0, 0xbc4d331627513351],
    [0x3f83b2ab6fba4e77, 0x3c14e65df05a9f75],
];

/// log(2)^k / k! for k = 5..=12 (double heads are enough: these terms
/// weigh < 2^-21 of the result on [-0.125, 0.125]).
static P: [u64; 8] = [
    0x3f55d87fe78a6731, 0x3f2430912f86c787, 0x3eeffcbfc588b0c7,
    0x3eb62c0223a5c824, 0x3e7b5253d395e7c4, 0x3e3e4cf5158b8eca,
    0x3dfe8cac7351bb25, 0x3dbc3bd650fc2986,
];

/// log(2)^k / k! as (h, l) for k = 1..=9, the accurate tiny ladder.
static Q_DD: [[u64; 2]; 9] = [
    [0x3fe62e42fefa39ef, 0x3c7abc9e3b39803f],
    [0x3fcebfbdff82c58f, 0xbc65e43a53e44da3],
    [0x3fac6b08d704a0c0, 0xbc4d331627513351],
    [0x3f83b2ab6fba4e77, 0x3c14e65df05a9f75],
    [0x3f55d87fe78a6731, 0x3bd0717f69a514bf],
    [0x3f2430912f86c787, 0x3bcbd2c2a261ac8d],
    [0x3eeffcbfc588b0c7, 0xbb8e53ab8cde09c6],
    [0x3eb62c0223a5c824, 0xbb03800cfc92c41e],
    [0x3e7b5253d395e7c4, 0xbb02dac78d2d8038],
];

/// log(2)^k / k! for k = 10..=17, closing the accurate ladder below the
/// 2^-105 truncation level.
static Q: [u64; 8] = [
    0x3e3e4cf5158b8eca, 0x3dfe8cac7351bb25, 0x3dbc3bd650fc2986,
    0x3d7816193166d0f9, 0x3d3314964d5878a9, 0x3cec36e843b04022,
    0x3ca38e89ae79f8b4, 0x3c598444b41c25a8,
];

/// 2^x - 1 for 0x1.0527dbd87e24dp-51 < |x| <= 0.125: (h, l, err) with
/// |h + l - (2^x - 1)| < err. Degrees 5..12 in double Horner, degrees
/// 4..1 through the exact double-double ladder; truncation < 2^-74.9,
/// total relative error < 2^-71.
fn exp2m1_fast_tiny(x: f64) -> (f64, f64, f64) {
    let x2 = x * x;
    let x4 = x2 * x2;
    let c11 = fma(asdouble(P[7]), x, asdouble(P[6]));
    let c9 = fma(asdouble(P[5]), x, asdouble(P[4]));
    let c7 = fma(asdouble(P[3]), x, asdouble(P[2]));
    let mut c5 = fma(asdouble(P[1]), x, asdouble(P[0]));
    let c9 = fma(c11, x2, c9);
    c5 = fma(c7, x2, c5);
    c5 = fma(c9, x4, c5);
    let (mut h, mut l) = two_prod(c5, x);
    for c in P_DD.iter().rev() {
        let (s, t) = fast_two_sum(asdouble(c[0]), h);
        h = s;
        l += t + asdouble(c[1]);
        let (s, t) = s_mul(x, h, l);
        h = s;
        l = t;
    }
    (h, l, asdouble(0x3b90_0000_0000_0000) * fabs(h)) // 2^-70
}

/// Accurate tiny ladder: relative error < 2^-100 on [-0.125, 0.125]
/// (degree-17 Taylor, truncation < 2^-104.9).
fn exp2m1_accurate_tiny(x: f64) -> (f64, f64) {
    let mut q = fma(asdouble(Q[7]), x, asdouble(Q[6]));
    q = fma(q, x, asdouble(Q[5]));
    q = fma(q, x, asdouble(Q[4]));
    q = fma(q, x, asdouble(Q[3]));
    q = fma(q, x, asdouble(Q[2]));
    q = fma(q, x, asdouble(Q[1]));
    q = fma(q, x, asdouble(Q[0]));
    let (mut h, mut l) = two_prod(q, x);
    for c in Q_DD.iter().rev() {
        let (s, t) = fast_two_sum(asdouble(c[0]), h);
        h = s;
        l += t + asdouble(c[1]);
        let (s, t) = s_mul(x, h, l);
        h = s;
        l = t;
    }
    (h, l)
}

/// General fast path for 0.125 < x < 1024 or -54 < x < -0.125: the kernel's
/// 2^-74.1 relative error is amplified by the cancellation of the exact
/// subtraction, at most (2^x + 1)/|2^x - 1| < 23 at x just below -0.125.
fn exp2m1_fast(x: f64) -> (f64, f64, f64) {
    let (eh, el) = exp2_fast(x);
    let (h, l) = if eh >= 1.0 {
        fast_two_sum(eh, -1.0)
    } else {
        fast_two_sum(-1.0, eh)
    };
    (h, l + el, asdouble(0x3bb0_0000_0000_0000) * fabs(h)) // 2^-68
}

fn exp2m1_accurate(x: f64) -> (f64, f64) {
    let (eh, el) = exp2_acc(x);
    let (h, l) = if eh >= 1.0 {
        fast_two_sum(eh, -1.0)
    } else {
        fast_two_sum(-1.0, eh)
    };
    (h, l + el)
}

/// 2^x - 1, correctly rounded in the given direction.
pub fn exp2m1_rnd(x: f64, rnd: Round) -> f64 {
    let ux = x.to_bits();
    let ax = ux & 0x7fff_ffff_ffff_ffff;

    if ux >= 0xc04b_0000_0000_0000 {
        // x <= -54, -Inf, or a negative NaN
        if ux >> 52 == 0xfff {
            if ax > 0x7ff0_0000_0000_0000 {
                return fenv::propagate_nan(x);
            }
            return -1.0;
        }
        // 2^x in (0, 2^-54]: the result lies in [-1 + 2^-54, -1 + 2^-53)
        fenv::raise(INEXACT);
        return match rnd {
            Round::Nearest | Round::Downward => -1.0,
            _ => asdouble(0xbfef_ffff_ffff_ffff), // -(1 - 2^-53)
        };
    }

    if ax >= 0x4090_0000_0000_0000 {
        // x >= 1024, +Inf, or a positive NaN
        if ax > 0x7ff0_0000_0000_0000 {
            return fenv::propagate_nan(x);
        }
        if ax == 0x7ff0_0000_0000_0000 {
            return x;
        }
        return fenv::overflow(false, rnd);
    }

    if ax <= 0x3cc0_527d_bd87_e24d {
        // |x| <= 0x1.0527dbd87e24dp-51: beyond log(2)*x only the
        // quadratic Taylor term can reach the result's last bit
        if ax == 0 {
            return x;
        }
        if ax <= 0x0377_1547_652b_82fe {
            // |x| <= 0x1.71547652b82fep-968: the result is (or neighbours)
            // a subnormal; evaluate at scale 2^53 and round on the grid
            let xs = x * asdouble(0x4350_0000_0000_0000);
            let (h, l) = two_prod(asdouble(LN2H), xs);
            let l = fma(asdouble(LN2M), xs, l);
            return round_scaled(h, l, -53, rnd);
        }
        let (h, l) = two_prod(asdouble(LN2H), x);
        let l = fma(asdouble(LN2M), x, l);
        // the quadratic term enters last so a cancellation in the line
        // above cannot swallow it
        let l = l + asdouble(0x3fce_bfbd_ff82_c58f) * x * x;
        return round_sum(h, l, rnd);
    }

    if ax <= 0x3fc0_0000_0000_0000 {
        // |x| <= 0.125
        let (h, l, err) = exp2m1_fast_tiny(x);
        if let Some(r) = ziv_round(h, l, err, rnd) {
            return r;
        }
        let (h, l) = exp2m1_accurate_tiny(x);
        return round_sum(h, l, rnd);
    }

    let (h, l, err) = exp2m1_fast(x);
    if let Some(r) = ziv_round(h, l, err, rnd) {
        return r;
    }
    let (h, l) = exp2m1_accurate(x);
    round_sum(h, l, rnd)
}

/// 2^x - 1, correctly rounded to nearest.
pub fn exp2m1(x: f64) -> f64 {
    exp2m1_rnd(x, Round::Nearest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_integers() {
        for k in 1..=53i32 {
            let want = (k as f64).exp2() - 1.0; // exact: 2^k - 1 < 2^54
            for rnd in Round::ALL {
                assert_eq!(exp2m1_rnd(k as f64, rnd), want, "2^{k}-1 {rnd:?}");
            }
        }
        for rnd in Round::ALL {
            assert_eq!(exp2m1_rnd(-1.0, rnd), -0.5);
            assert_eq!(exp2m1_rnd(-2.0, rnd), -0.75);
            assert_eq!(exp2m1_rnd(1.0, rnd), 1.0);
            assert_eq!(exp2m1_rnd(0.0, rnd), 0.0);
        }
    }

    #[test]
    fn test_specials() {
        assert!(exp2m1(f64::NAN).is_nan());
        assert!(exp2m1(-f64::NAN).is_nan());
        assert_eq!(exp2m1(f64::INFINITY), f64::INFINITY);
        assert_eq!(exp2m1(f64::NEG_INFINITY), -1.0);
        assert_eq!(exp2m1(0.0).to_bits(), 0.0f64.to_bits());
        assert_eq!(exp2m1(-0.0).to_bits(), (-0.0f64).to_bits());
    }

    #[test]
    fn test_saturation() {
        assert_eq!(exp2m1(-54.0), -1.0);
        assert_eq!(exp2m1(-1000.0), -1.0);
        assert_eq!(
            exp2m1_rnd(-1000.0, Round::Upward),
            asdouble(0xbfef_ffff_ffff_ffff)
        );
        assert_eq!(exp2m1(1024.0), f64::INFINITY);
        assert_eq!(exp2m1_rnd(1024.0, Round::TowardZero), f64::MAX);
    }

    #[test]
    fn test_subnormal_tiny() {
        let x = asdouble(0x0377_1547_652b_82fe);
        let r = exp2m1(x);
        // log(2) * x, far below the normal range
        assert!(r > 0.0 && r < f64::MIN_POSITIVE);
        assert_eq!(exp2m1(-x), -r);
        // exp2m1(2^-1074) = log(2) * 2^-1074 = 0.693... * 2^-1074
        let d = f64::from_bits(1);
        assert_eq!(exp2m1_rnd(d, Round::Downward), 0.0);
        assert_eq!(exp2m1_rnd(d, Round::Nearest), f64::from_bits(1));
        assert_eq!(exp2m1_rnd(d, Round::Upward), f64::from_bits(1));
    }

    #[test]
    fn test_matches_std_loosely() {
        for &x in &[0.01, -0.01, 0.1, -0.12, 0.5, -3.3, 10.25, 500.5, -40.0] {
            let r = exp2m1(x);
            let want = x.exp2() - 1.0;
            let ulp = (f64::from_bits(want.abs().to_bits() + 1) - want.abs()).abs();
            assert!((r - want).abs() <= 4.0 * ulp, "exp2m1({x}) = {r:e} want {want:e}");
        }
    }

    #[test]
    fn test_fast_accurate_agree() {
        for &x in &[0.001, -0.002, 0.06, -0.11, 0.125] {
            let (fh, fl, _) = exp2m1_fast_tiny(x);
            let (ah, al) = exp2m1_accurate_tiny(x);
            let d = ((fh - ah) + (fl - al)).abs();
            assert!(d <= 2f64.powi(-66) * ah.abs(), "tiny at {x}");
        }
        for &x in &[0.2, -0.2, 1.5, -33.0, 900.0] {
            let (fh, fl, _) = exp2m1_fast(x);
            let (ah, al) = exp2m1_accurate(x);
            let d = ((fh - ah) + (fl - al)).abs();
            assert!(d <= 2f64.powi(-60) * ah.abs(), "general at {x}");
        }
    }
}
