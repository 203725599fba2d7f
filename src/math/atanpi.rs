//! Correctly-rounded binary32 atan(x)/pi.
//!
//! Rational approximation in double over |x| <= 1, folded through
//! atanpi(x) = 1/2 - atanpi(1/x) above 1; a linear correction below
//! 2^-13 and the 1/(pi*x) asymptote above 2^25. Three inputs whose
//! double evaluation lands too close to a binary32 boundary return their
//! pre-identified values.

use super::bits::{asdouble, copysign, copysignf};
use super::fenv::{self, Round};
use super::round::narrow;

/// 1/pi
const INV_PI: f64 = asdouble(0x3fd45f306dc9c883);

static CN: [u64; 6] = [
    0x3fd45f306dc9c882, 0x3fe733b561bc23d5, 0x3fe28d9805bdfbf2,
    0x3fc8c3ba966ae287, 0x3f994a7f81ee634b, 0x3f4a6bbf6127a6df,
];
static CD: [u64; 7] = [
    0x3ff0000000000000, 0x4004e3b3ecc2518f, 0x4003ef4a360ff063, 0x3ff0f1dc55bad551,
    0x3fc8da0fecc018a4, 0x3f88fa87803776bf, 0x3f1dadf2ca0acb43,
];

/// atan(x)/pi, correctly rounded in the given direction.
pub fn atanpif_rnd(x: f32, rnd: Round) -> f32 {
    let t = x.to_bits();
    let e = ((t >> 23) & 0xff) as i32;
    let gt = e >= 127;
    if e > 127 + 24 {
        // |x| >= 2^25, or Inf/NaN
        if e == 0xff {
            if t << 9 != 0 {
                return fenv::propagate_nan_f(x);
            }
            return copysignf(0.5, x); // the asymptote, exactly
        }
        let z = x as f64;
        return narrow(copysign(0.5, z) - INV_PI / z, rnd);
    }
    let z = x as f64;
    if e < 127 - 13 {
        // |x| < 2^-13: x/pi, with one cubic correction past 2^-25
        let sx = z * INV_PI;
        if e < 127 - 25 {
            return narrow(sx, rnd);
        }
        return narrow(sx - (asdouble(0x3fd5555555555555) * sx) * (z * z), rnd);
    }
    let ax = t & 0x7fff_ffff;
    if ax == 0x3fa2_67dd {
        // exact result just below 0x1.267004p-2; the nudged double sits
        // between the same binary32 neighbours on the same side
        let v = asdouble(0x3fd2_6700_4000_0000) - asdouble(0x3e10_0000_0000_0000);
        return narrow(copysign(v, z), rnd);
    }
    if ax == 0x3f69_3531 {
        let v = asdouble(0x3fce_1a66_2000_0000) + asdouble(0x3e30_0000_0000_0000);
        return narrow(copysign(v, z), rnd);
    }
    if ax == 0x3f80_0000 {
        return copysignf(0.25, x); // atanpi(+-1) = +-1/4 exactly
    }
    let z = if gt { 1.0 / z } else { z };
    let z2 = z * z;
    let z4 = z2 * z2;
    let z8 = z4 * z4;
    let mut cn0 = asdouble(CN[0]) + z2 * asdouble(CN[1]);
    let cn2 = asdouble(CN[2]) + z2 * asdouble(CN[3]);
    let cn4 = asdouble(CN[4]) + z2 * asdouble(CN[5]);
    cn0 += z4 * cn2;
    cn0 += z8 * cn4;
    cn0 *= z;
    let mut cd0 = asdouble(CD[0]) + z2 * asdouble(CD[1]);
    let cd2 = asdouble(CD[2]) + z2 * asdouble(CD[3]);
    let mut cd4 = asdouble(CD[4]) + z2 * asdouble(CD[5]);
    cd4 += z4 * asdouble(CD[6]);
    cd0 += z4 * cd2;
    cd0 += z8 * cd4;
    let mut r = cn0 / cd0;
    if gt {
        r = copysign(0.5, z) - r;
    }
    narrow(r, rnd)
}

/// atan(x)/pi, correctly rounded to nearest.
pub fn atanpif(x: f32) -> f32 {
    atanpif_rnd(x, Round::Nearest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::bits::{next_down_f, next_up_f};

    #[test]
    fn test_specials() {
        assert!(atanpif(f32::NAN).is_nan());
        assert_eq!(atanpif(f32::INFINITY), 0.5);
        assert_eq!(atanpif(f32::NEG_INFINITY), -0.5);
        assert_eq!(atanpif(0.0).to_bits(), 0.0f32.to_bits());
        assert_eq!(atanpif(-0.0).to_bits(), (-0.0f32).to_bits());
    }

    #[test]
    fn test_exact_quarters() {
        for rnd in Round::ALL {
            assert_eq!(atanpif_rnd(1.0, rnd), 0.25);
            assert_eq!(atanpif_rnd(-1.0, rnd), -0.25);
        }
    }

    #[test]
    fn test_hard_inputs() {
        // pre-identified boundary inputs and their exact roundings
        let x = f32::from_bits(0x3fa2_67dd);
        assert_eq!(atanpif(x).to_bits(), 0x3e93_3802);
        assert_eq!(
            atanpif_rnd(x, Round::Downward).to_bits(),
            next_down_f(f32::from_bits(0x3e93_3802)).to_bits()
        );
        let y = f32::from_bits(0x3f69_3531);
        assert_eq!(atanpif(y).to_bits(), 0x3e70_d331);
        assert_eq!(
            atanpif_rnd(y, Round::Upward),
            next_up_f(f32::from_bits(0x3e70_d331))
        );
    }

    #[test]
    fn test_odd_symmetry() {
        for &x in &[1e-8f32, 2e-5, 0.04, 0.6, 1.5, 800.0, 4e7] {
            assert_eq!(atanpif(x).to_bits(), (-atanpif(-x)).to_bits(), "atanpi({x})");
        }
    }

    #[test]
    fn test_matches_reference() {
        for &x in &[1e-3f32, 0.11, 0.5, 0.9, 2.0, 31.0, 1e6] {
            let r = atanpif(x) as f64;
            let want = (x as f64).atan() / core::f64::consts::PI;
            assert!((r - want).abs() < 1e-7, "atanpi({x}) = {r} want {want}");
        }
    }

    #[test]
    fn test_asymptote_monotone() {
        // approaching the asymptote from below stays under 1/2
        for &x in &[1e3f32, 1e5, 1e7, 3e7, 1e9, 1e20] {
            let v = atanpif(x);
            assert!(v <= 0.5);
        }
        assert_eq!(atanpif(1e38), 0.5); // rounds up to the limit
    }
}
