//! Correctly-rounded binary32 10^x - 1.
//!
//! Saturates to -1 below -7.52575 and overflows above 38.5318. Small
//! arguments use a ladder of odd-length polynomials in x*log(10), one rung
//! per magnitude band, each fitted offline with enough slack that the
//! double evaluation narrows correctly; two pre-identified inputs return
//! their stored values. The general path is the 2^(j/16) table of the
//! base-10 exponential with the 1 folded into the final sum.

use super::bits::{asdouble, floor_small};
use super::fenv::{self, Round};
use super::round::narrow;

/// 16 * log2(10), split head/tail.
const ILOG2_10H: f64 = asdouble(0x404a934f09000000);
const ILOG2_10L: f64 = asdouble(0x3e6e68dc57f24960);

static C: [u64; 6] = [
    0x3fa62e42fefa398b, 0x3f4ebfbdff84555a, 0x3eec6b08d4ad86d3,
    0x3e83b2ad1b1716a2, 0x3e15d7472718ce9d, 0x3da4a1d7f457ac56,
];

/// 2^(j/16), j = 0..15 (the j = 10 entry is truncated, as fitted).
static TB: [u64; 16] = [
    0x3ff0000000000000, 0x3ff0b5586cf9890f, 0x3ff172b83c7d517b, 0x3ff2387a6e756238,
    0x3ff306fe0a31b715, 0x3ff3dea64c123422, 0x3ff4bfdad5362a27, 0x3ff5ab07dd485429,
    0x3ff6a09e667f3bcd, 0x3ff7a11473eb0187, 0x3ff8ace5422aa0da, 0x3ff9c49182a3f090,
    0x3ffae89f995ad3ad, 0x3ffc199bdd85529c, 0x3ffd5818dcfba487, 0x3ffea4afa2a490da,
];

// per-band polynomials in increasing order of |x|; each carries log(10)
// and its powers fitted to the band
static P3: [u64; 4] = [
    0x40026bb1bbb55515, 0x40053524c73cea69, 0x4000470595038cc2, 0x3ff2bd7609fe1561,
];
static P4: [u64; 5] = [
    0x40026bb1bbb55516, 0x40053524c73ce6db, 0x4000470591de3024, 0x3ff2bd76b79060e6,
    0x3fe1429ffd3a963d,
];
static P5: [u64; 6] = [
    0x40026bb1bbb55516, 0x40053524c73cea67, 0x4000470591dc2953, 0x3ff2bd760a004d64,
    0x3fe142a85da6f072, 0x3fca7ed70725b00e,
];
static P6: [u64; 7] = [
    0x40026bb1bbb55516, 0x40053524c73ceade, 0x4000470591de2bb4, 0x3ff2bd76099a9d33,
    0x3fe1429ffd829b0b, 0x3fca7f2a6a0f7dc8, 0x3fb16e4dfbce0f56,
];
static P7: [u64; 8] = [
    0x40026bb1bbb55515, 0x40053524c73cea6a, 0x4000470591de4760, 0x3ff2bd7609fd4ee2,
    0x3fe1429ff70a9b48, 0x3fca7ed71259ba5b, 0x3fb16f3004fb3ac1, 0x3f94116b0388aa9f,
];
static P8: [u64; 9] = [
    0x40026bb1bbb55515, 0x40053524c73cea42, 0x4000470591de2d1d, 0x3ff2bd760a010a53,
    0x3fe1429ffd16170c, 0x3fca7ed6b2a0d97f, 0x3fb16e4e37fa51e4, 0x3f94147fe4c1676f,
    0x3f74897c4b3e329a,
];

/// 10^x - 1, correctly rounded in the given direction.
pub fn exp10m1f_rnd(x: f32, rnd: Round) -> f32 {
    let ux = x.to_bits();
    let ax = ux & 0x7fff_ffff;
    if ux > 0xc0f0_d2f1 {
        // x < -7.52575, -Inf, or a negative NaN
        if ax > 0xff << 23 {
            return fenv::propagate_nan_f(x);
        }
        if ax == 0xff << 23 {
            return -1.0;
        }
        // 10^x < 2^-25: between -1 and its inner neighbour
        return narrow(asdouble(0xbfef_ffff_ff00_0000), rnd); // -(1 - 2^-26)
    }
    if ax > 0x421a_209b {
        // x > 38.5318, +Inf, or a positive NaN
        if ax > 0xff << 23 {
            return fenv::propagate_nan_f(x);
        }
        if ax == 0xff << 23 {
            return x;
        }
        return fenv::overflow_f(false, rnd);
    }
    let z = x as f64;
    if ax < 0x3d89_c604 {
        // |x| < 0.1549/log(10): pick the band polynomial
        let z2 = z * z;
        let r = if ax < 0x3d16_22fb {
            if ax < 0x3c8b_76a3 {
                if ax < 0x3bcc_ed04 {
                    if ax < 0x3acf_33eb {
                        if ax < 0x395a_966b {
                            if ax < 0x36fe_4a4b {
                                if ax < 0x3240_7f39 {
                                    if ax < 0x245e_5bd9 {
                                        asdouble(0x40026bb1bbb55516)
                                    } else {
                                        if ux == 0x2c99_4b7b {
                                            // barely above the halfway point
                                            let v = asdouble(0x3da6_0f97_4000_0000)
                                                - asdouble(0x3be0_0000_0000_0000);
                                            return narrow(v, rnd);
                                        }
                                        asdouble(0x40026bb1bbb55516)
                                            + z * asdouble(0x40053524c73cea69)
                                    }
                                } else {
                                    if ux == 0xb6fa_215b {
                                        return narrow(asdouble(0xbef1_ff87_dfff_ffff), rnd);
                                    }
                                    asdouble(0x40026bb1bbb55516)
                                        + z * (asdouble(0x40053524c73ea62f)
                                            + z * asdouble(0x4000470591de2c75))
                                }
                            } else {
                                (asdouble(P3[0]) + z * asdouble(P3[1]))
                                    + z2 * (asdouble(P3[2]) + z * asdouble(P3[3]))
                            }
                        } else {
                            (asdouble(P4[0]) + z * asdouble(P4[1]))
                                + z2 * (asdouble(P4[2])
                                    + z * (asdouble(P4[3]) + z * asdouble(P4[4])))
                        }
                    } else {
                        (asdouble(P5[0]) + z * asdouble(P5[1]))
                            + z2 * ((asdouble(P5[2]) + z * asdouble(P5[3]))
                                + z2 * (asdouble(P5[4]) + z * asdouble(P5[5])))
                    }
                } else {
                    (asdouble(P6[0]) + z * asdouble(P6[1]))
                        + z2 * ((asdouble(P6[2]) + z * asdouble(P6[3]))
                            + z2 * (asdouble(P6[4])
                                + z * (asdouble(P6[5]) + z * asdouble(P6[6]))))
                }
            } else {
                ((asdouble(P7[0]) + z * asdouble(P7[1]))
                    + z2 * (asdouble(P7[2]) + z * asdouble(P7[3])))
                    + (z2 * z2)
                        * ((asdouble(P7[4]) + z * asdouble(P7[5]))
                            + z2 * (asdouble(P7[6]) + z * asdouble(P7[7])))
            }
        } else {
            ((asdouble(P8[0]) + z * asdouble(P8[1]))
                + z2 * (asdouble(P8[2]) + z * asdouble(P8[3])))
                + (z2 * z2)
                    * ((asdouble(P8[4]) + z * asdouble(P8[5]))
                        + z2 * (asdouble(P8[6])
                            + z * (asdouble(P8[7]) + z * asdouble(P8[8]))))
        };
        return narrow(r * z, rnd);
    }
    if ux << 11 == 0 {
        // few mantissa bits: integer arguments with exact 10^k - 1
        let k = (ux >> 21).wrapping_sub(0x1fc);
        let exact: [(u32, f32); 7] = [
            (0, 9.0),
            (4, 99.0),
            (6, 999.0),
            (8, 9999.0),
            (9, 99999.0),
            (10, 999999.0),
            (11, 9999999.0),
        ];
        for &(kk, r) in &exact {
            if k == kk {
                return r;
            }
        }
    }
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
    narrow((s - 1.0) + w * c0, rnd)
}

/// 10^x - 1, correctly rounded to nearest.
pub fn exp10m1f(x: f32) -> f32 {
    exp10m1f_rnd(x, Round::Nearest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_integers() {
        let cases = [
            (1.0f32, 9.0f32),
            (2.0, 99.0),
            (3.0, 999.0),
            (4.0, 9999.0),
            (5.0, 99999.0),
            (6.0, 999999.0),
            (7.0, 9999999.0),
        ];
        for &(x, want) in &cases {
            for rnd in Round::ALL {
                assert_eq!(exp10m1f_rnd(x, rnd), want, "10^{x}-1");
            }
        }
    }

    #[test]
    fn test_specials() {
        assert!(exp10m1f(f32::NAN).is_nan());
        assert!(exp10m1f(-f32::NAN).is_nan());
        assert_eq!(exp10m1f(f32::INFINITY), f32::INFINITY);
        assert_eq!(exp10m1f(f32::NEG_INFINITY), -1.0);
        assert_eq!(exp10m1f(0.0).to_bits(), 0.0f32.to_bits());
        assert_eq!(exp10m1f(-0.0).to_bits(), (-0.0f32).to_bits());
    }

    #[test]
    fn test_saturation() {
        assert_eq!(exp10m1f(-8.0), -1.0);
        assert_eq!(exp10m1f_rnd(-8.0, Round::Upward), -f32::from_bits(0x3f7f_ffff));
        assert_eq!(exp10m1f_rnd(-8.0, Round::TowardZero), -f32::from_bits(0x3f7f_ffff));
        assert_eq!(exp10m1f(39.0), f32::INFINITY);
        assert_eq!(exp10m1f_rnd(39.0, Round::TowardZero), f32::MAX);
    }

    #[test]
    fn test_hard_inputs() {
        let x = f32::from_bits(0x2c99_4b7b);
        assert_eq!(exp10m1f(x).to_bits(), 0x2d30_7cba);
        let y = f32::from_bits(0xb6fa_215b);
        assert_eq!(exp10m1f(y).to_bits(), 0xb88f_fc3f);
    }

    #[test]
    fn test_matches_reference() {
        for &x in &[0.001f32, -0.002, 0.04, -0.1, 1.5, 7.25, -5.0, 25.0] {
            let r = exp10m1f(x) as f64;
            let want = 10f64.powf(x as f64) - 1.0;
            let rel = ((r - want) / want).abs();
            assert!(rel < 1e-7, "exp10m1f({x}) = {r:e} want {want:e}");
        }
    }

    #[test]
    fn test_mode_coherence() {
        for &x in &[0.01f32, -0.3, 2.5, -6.0, 20.0] {
            let dn = exp10m1f_rnd(x, Round::Downward);
            let up = exp10m1f_rnd(x, Round::Upward);
            let ne = exp10m1f_rnd(x, Round::Nearest);
            assert!(dn <= ne && ne <= up, "order at {x}");
            assert!(up == ne || dn == ne);
        }
    }
}
