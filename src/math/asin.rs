//! Correctly-rounded binary64 asin.
//!
//! Three regimes: |x| < 2^-26 rounds from x with a directed nudge;
//! 2^-26 <= |x| < 2^-6 evaluates the odd Taylor tail in 64-bit fixed
//! point, truncated toward zero so the sum is a certified lower bound;
//! |x| >= 2^-6 walks the quarter-circle table S/SH with a sqrt(1 - x^2)
//! refinement. Both computed paths carry an internal left/right rounding
//! check; when the last bit is in doubt the 128-bit evaluation decides.
//! The direction parameter only enters the final bit assembly.

use super::asin_data::{A, B, CH, PB, PCH, S, S2, SH};
use super::bits::{asdouble, copysign, fabs, next_down, next_up};
use super::fenv::{self, Round, INEXACT, UNDERFLOW};
use super::fma::fma;
use super::round::round_sum;
use super::sqrt::sqrt;
use super::wide::{imul, m_uu, mh, mu_u, muuh, sqr_u};

/// (pi/2)/64 on the 2^127 fixed-point grid.
const PI_64: u128 = 0x03243f6a_8885a308_d313198a_2e037073;

#[inline(always)]
fn shl128(v: u128, n: i64) -> u128 {
    if n >= 0 {
        v << n
    } else {
        v >> -n
    }
}

/// Odd-series tail of asin on the 2^128 grid: given x ~ v^2 (fixed point),
/// returns v-relative asin(v)/v - 1 so the caller can fold it back with a
/// single 128-bit product.
fn pasin(x: u128) -> u128 {
    let xh = (x >> 64) as u64;
    let t = PCH[3].wrapping_add(
        muuh(xh, PB[0].wrapping_add(muuh(xh, PB[1].wrapping_add(muuh(xh, PB[2].wrapping_add(muuh(xh, PB[3]))))))) as u128,
    );
    m_uu(
        x,
        PCH[0].wrapping_add(m_uu(x, PCH[1].wrapping_add(m_uu(x, PCH[2].wrapping_add(m_uu(x, t)))))),
    )
}

/// Assemble the final binary64 from the 2^127-grid value: truncate the
/// high word and bump the last bit per the direction (the grid value is a
/// lower bound of the magnitude, so directed rounding is an increment
/// choice and nearest reads the round bit).
fn compose_asin(hi: u64, e: i64, neg: bool, rnd: Round) -> f64 {
    fenv::raise(INEXACT);
    let nz = hi.leading_zeros() as i64;
    let inc = match rnd {
        Round::Nearest => (hi >> (10 - nz)) & 1,
        Round::Downward => neg as u64,
        Round::Upward => (neg as u64) ^ 1,
        Round::TowardZero => 0,
    };
    let u = (hi >> (11 - nz)).wrapping_add((((e - nz) as u64) << 52) | inc);
    f64::from_bits(u | ((neg as u64) << 63))
}

/// 128-bit fixed-point evaluation, reached when the 64-bit paths cannot
/// separate the two candidate roundings.
fn asin_acc(x: f64, rnd: Round) -> f64 {
    let t = x.to_bits();
    let mut se = ((t >> 52) & 0x7ff) as i64 - 0x3ff;
    let neg = t >> 63 != 0;
    let ax = fabs(x);
    let sm = (t << 11) | 1u64 << 63;
    let mut sm2 = (sm as u128).wrapping_mul(sm as u128);
    let fi: u128;
    if ax < 0.0131875 {
        let ss = 2 * se;
        sm2 >>= (-14 - ss) as u32;
        let half = sm >> 1;
        fi = ((half as u128) << 64).wrapping_add(mu_u(half, pasin(sm2)));
        se += 0x3ff;
    } else {
        let xx = fma(x, -x, 1.0);
        let c = sqrt(xx);
        let ix = (1.0 / xx) * c; // ~ 1/sqrt(1 - x^2)
        let x2 = x * x;
        let mut c0 = asdouble(CH[0]) + ax * asdouble(CH[1]);
        let c2 = asdouble(CH[2]) + ax * asdouble(CH[3]);
        c0 += x2 * c2;
        let ic = (c0 * c + 64.0).to_bits();
        let indx = (((ic & (!0u64 >> 12)) + (1u64 << (52 - 7))) >> (52 - 6)) as usize;
        let cu = c.to_bits();
        let cm = (cu << 11) | 1u64 << 63;
        let ce = (cu >> 52) as i64 - 0x3ff;
        let cm2 = (cm as u128).wrapping_mul(cm as u128);
        // rebase x^2 and c^2 on a common grid; their sum is 1 up to the
        // sqrt and reciprocal rounding captured by the correction below
        const OFF: i64 = 36 - 22 + 14;
        sm2 = shl128(sm2, 128 - 104 + 2 * se + OFF);
        sm2 = sm2.wrapping_add(shl128(cm2, 128 - 104 + 2 * ce + OFF));
        let h = (sm2 >> 64) as u64 as i64;
        let ixu = ix.to_bits();
        let ixm = ((ixu & (!0u64 >> 12)) | 1u64 << 52) as i64;
        let ixe = (ixu >> 52) as i64 - 0x3ff;
        // first Newton correction of c toward sqrt(1 - x^2) exactly
        let dc = mh(h, ixm);
        let dsm2 = (imul(dc, (cm >> 1) as i64) as u128) << 13;
        sm2 = sm2.wrapping_sub(dsm2);
        let dsm3 = imul(dc, dc) as u128;
        sm2 = sm2.wrapping_add(shl128(dsm3, -(28 - ixe * 2)));
        let k = ixe - ce;
        let mut cm_ = (cm as u128) << 64;
        cm_ = cm_.wrapping_sub(((dc as i128) << (24 + k)) as u128);
        // second correction from the updated residual
        let h = (sm2 >> 14) as u64 as i64;
        let dc = mh(h, ixm);
        let ss = 26 - k;
        if ss >= 0 {
            cm_ = cm_.wrapping_sub(((dc as i128) >> ss) as u128);
        } else {
            cm_ = cm_.wrapping_sub(((dc as i128) << -ss) as u128);
        }
        let mut f = PI_64.wrapping_mul((64 - indx) as u128);
        if indx == 0 {
            // degenerate cell: no table term, the angle is asin(c) itself
            let cmv = cm_ >> (-ce - 7) as u32;
            let z = pasin(sqr_u(cmv));
            let cmv = cmv.wrapping_add(m_uu(cmv, z));
            f = f.wrapping_sub(cmv >> 7);
        } else {
            let v = (mu_u(sm >> -se, S2[indx - 1])
                .wrapping_sub(m_uu(cm_, S2[63 - indx]) >> -ce)) as i128;
            let msk = v >> 127;
            let v2 = (sqr_u(v as u128).wrapping_sub((msk & (v << 1)) as u128) as i128) << 14;
            let p = pasin(v2 as u128);
            let v = v.wrapping_add(m_uu(p, v as u128).wrapping_sub((msk as u128) & p) as i128);
            f = f.wrapping_add(v as u128);
        }
        fi = f;
        se = 0x3fe;
    }
    compose_asin((fi >> 64) as u64, se, neg, rnd)
}

/// asin, correctly rounded in the given direction. Inputs with |x| > 1
/// raise invalid and the domain signal.
pub fn asin_rnd(x: f64, rnd: Round) -> f64 {
    let t = x.to_bits();
    let e = ((t >> 52) & 0x7ff) as i64 - 0x3ff;
    let neg = t >> 63 != 0;
    // |x| = 2^(e+1) * sm / 2^64 with 2^63 <= sm < 2^64
    let sm = (t << 11) | 1u64 << 63;

    if e >= 0 {
        let m = t << 12;
        if e == 0 && m == 0 {
            // asin(+-1) = +-pi/2: head and tail of pi/2, rounded as a sum
            let h = copysign(asdouble(0x3ff9_21fb_5444_2d18), x);
            let l = copysign(asdouble(0x3c91_a626_3314_5c07), x);
            return round_sum(h, l, rnd);
        }
        if e == 0x400 && m != 0 {
            return fenv::propagate_nan(x);
        }
        return fenv::domain_error();
    }

    if e < -6 {
        if e < -26 {
            // |asin(x) - x| < 0.25|x|^3 < ulp(x)/2: x, or its
            // away-from-zero neighbour in the directed modes
            if t << 1 == 0 {
                return x;
            }
            fenv::raise(INEXACT);
            if t & 0x7ff0_0000_0000_0000 == 0 {
                fenv::raise(UNDERFLOW);
            }
            return match rnd {
                Round::Upward if !neg => next_up(x),
                Round::Downward if neg => next_down(x),
                _ => x,
            };
        }
        // 2^-26 <= |x| < 2^-6: truncated 64-bit Taylor tail; the total
        // error of d is below 13 ulps of its grid and one-sided
        let v2 = muuh(sm, sm);
        let v3 = muuh(sm, v2);
        let v2 = v2 >> (-2 * e - 14);
        let d = muuh(
            v3,
            B[0].wrapping_add(muuh(
                v2,
                B[1].wrapping_add(muuh(v2, B[2].wrapping_add(muuh(v2, B[3].wrapping_add(muuh(v2, B[4])))))),
            )),
        );
        let ss = 63 + 2 * e;
        let lo = d << ss;
        let hi = (d >> (64 - ss)) + (sm >> 1);
        let fi = ((hi as u128) << 64) | lo as u128;
        let nz = hi.leading_zeros() as i64 + (rnd == Round::Nearest) as i64;
        let u = fi.wrapping_add(12u128 << ss);
        if ((hi ^ (u >> 64) as u64) >> (11 - nz)) & 1 != 0 {
            return asin_acc(x, rnd);
        }
        return compose_asin(hi, e + 0x3ff, neg, rnd);
    }

    // |x| >= 2^-6: table walk around the quarter circle
    let xx = fma(x, -x, 1.0);
    let c = sqrt(xx);
    let ix = (1.0 / xx) * c;
    let ax = fabs(x);
    let x2 = x * x;
    let mut c0 = asdouble(CH[0]) + ax * asdouble(CH[1]);
    let c2 = asdouble(CH[2]) + ax * asdouble(CH[3]);
    c0 += x2 * c2;
    c0 *= c;
    c0 += 64.0;
    // c0 ~ 64 + 64*acos(x)/(pi/2) in [64, 128); indx = round(c0) - 64
    let ic = c0.to_bits();
    let indx = (((ic & (!0u64 >> 12)) + (1u64 << (52 - 7))) >> (52 - 6)) as usize;
    let cu = c.to_bits();
    let cm = (cu << 11) | 1u64 << 63;
    let ce = (cu >> 52) as i64 - 0x3ff;
    let mut sm2 = (sm as u128).wrapping_mul(sm as u128);
    let cm2 = (cm as u128).wrapping_mul(cm as u128);
    const OFF: i64 = 36 - 22 + 14;
    sm2 = shl128(sm2, 128 - 104 + 2 * e + OFF);
    sm2 = sm2.wrapping_add(shl128(cm2, 128 - 104 + 2 * ce + OFF));
    // h picks up how far x^2 + c^2 drifts from 1: the sqrt correction
    let h = (sm2 >> 64) as u64 as i64;
    let ixu = ix.to_bits();
    let ixm = ((ixu & (!0u64 >> 12)) | 1u64 << 52) as i64;
    let ixe = (ixu >> 52) as i64 - 0x3ff;
    let smh = ((sm << (6 + e)) as i64).wrapping_sub(SH[64 - indx] as i64);
    let sc = 6 + ce;
    let cmh_base = if sc >= 0 { cm << sc } else { cm >> -sc };
    let mut cmh = (cmh_base as i64).wrapping_sub(SH[indx] as i64);
    cmh = cmh.wrapping_sub(mh(h, ixm) >> (34 - ixe));
    // angle residual against the table point, then the odd series
    let v = mh(smh, S[indx] as i64).wrapping_sub(mh(cmh, S[64 - indx] as i64));
    let v2 = mh(v, v);
    let v3 = mh(v2, v);
    let v = v.wrapping_add(mh(
        v3,
        A[0].wrapping_add(muuh(v2 as u64, A[1].wrapping_add(muuh(v2 as u64, A[2].wrapping_add(muuh(v2 as u64, A[3])))))) as i64,
    ));
    let mut fi = PI_64.wrapping_mul((64 - indx) as u128);
    let vh = (v >> 5) as u64;
    let vl = (v << 59) as u64;
    fi = fi.wrapping_add(((vh as u128) << 64) | vl as u128);

    let hi = (fi >> 64) as u64;
    let nz = hi.leading_zeros() as i64 + (rnd == Round::Nearest) as i64;
    let up = fi.wrapping_add(50u128 << 55);
    let dn = fi.wrapping_sub(27u128 << 55);
    if ((((dn >> 64) as u64) ^ ((up >> 64) as u64)) >> (11 - nz)) & 1 != 0 {
        return asin_acc(x, rnd);
    }
    compose_asin(hi, 0x3fe, neg, rnd)
}

/// asin, correctly rounded to nearest.
pub fn asin(x: f64) -> f64 {
    asin_rnd(x, Round::Nearest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one() {
        // asin(1) = pi/2 = 0x1.921fb54442d18p+0 to nearest
        assert_eq!(asin(1.0).to_bits(), 0x3ff9_21fb_5444_2d18);
        assert_eq!(asin(-1.0).to_bits(), 0xbff9_21fb_5444_2d18);
        assert_eq!(
            asin_rnd(1.0, Round::Upward),
            next_up(asdouble(0x3ff9_21fb_5444_2d18))
        );
        assert_eq!(
            asin_rnd(1.0, Round::TowardZero),
            asdouble(0x3ff9_21fb_5444_2d18)
        );
    }

    #[test]
    fn test_domain() {
        assert!(asin(1.5).is_nan());
        assert!(asin(-1.0000000000000002).is_nan());
        assert!(asin(f64::INFINITY).is_nan());
        assert!(asin(f64::NAN).is_nan());
    }

    #[test]
    fn test_tiny() {
        assert_eq!(asin(0.0).to_bits(), 0.0f64.to_bits());
        assert_eq!(asin(-0.0).to_bits(), (-0.0f64).to_bits());
        let x = asdouble(0x3e50_0000_0000_0000); // 2^-26
        let y = asdouble(0x3e4f_ffff_ffff_ffff); // just below
        assert_eq!(asin(y), y);
        assert_eq!(asin_rnd(y, Round::Upward), next_up(y));
        assert_eq!(asin_rnd(-y, Round::Downward), next_down(-y));
        assert_eq!(asin_rnd(-y, Round::TowardZero), -y);
        let _ = x;
    }

    #[test]
    fn test_odd_symmetry() {
        for &x in &[1e-7, 0.001, 0.01, 0.1, 0.25, 0.5, 0.77, 0.999, 0.9999999] {
            for rnd in [Round::Nearest, Round::TowardZero] {
                assert_eq!(
                    asin_rnd(x, rnd).to_bits(),
                    (-asin_rnd(-x, rnd)).to_bits(),
                    "asin({x})"
                );
            }
        }
    }

    #[test]
    fn test_matches_std_loosely() {
        for &x in &[1e-7, 0.003, 0.04, 0.3, 0.5, 0.7071067811865476, 0.99, 0.9999999999] {
            let r = asin(x);
            let want = x.asin();
            let ulp = (f64::from_bits(want.to_bits() + 1) - want).abs();
            assert!((r - want).abs() <= 2.0 * ulp, "asin({x}) = {r:e} want {want:e}");
        }
    }

    #[test]
    fn test_acc_agrees_with_fast() {
        // the 128-bit path must reproduce the table path wherever the
        // table path certifies itself
        for &x in &[0.001, 0.0078125, 0.02, 0.3, 0.6, 0.95, 0.9999] {
            let fast = asin(x);
            let acc = asin_acc(x, Round::Nearest);
            assert_eq!(fast.to_bits(), acc.to_bits(), "asin({x})");
        }
    }

    #[test]
    fn test_mode_coherence() {
        for &x in &[0.001, 0.04, 0.33, 0.875, 0.99999] {
            let dn = asin_rnd(x, Round::Downward);
            let up = asin_rnd(x, Round::Upward);
            let ne = asin_rnd(x, Round::Nearest);
            assert!(dn <= ne && ne <= up, "order at {x}");
            assert!(up.to_bits() - dn.to_bits() <= 1, "width at {x}");
            assert_eq!(asin_rnd(x, Round::TowardZero), dn);
        }
    }
}
