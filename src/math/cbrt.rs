//! Correctly-rounded binary32 cbrt.
//!
//! The exponent (rebased by 899 so subnormals stay positive) splits as
//! 3*et + it; the mantissa is evaluated in [1, 2) by a rational seed plus
//! one Newton-like correction in double, and the 2^(it/3) scale plus sign
//! re-enter through the exponent bits. A final snap rounds doubles that
//! sit within 2^-21 of a 32-bit boundary onto it, so perfect cubes narrow
//! exactly.

use super::bits::asdouble;
use super::fenv::{self, Round};
use super::round::narrow;

/// 1, 2^(1/3), 2^(2/3)
static ESCALE: [u64; 3] = [
    0x3ff0000000000000,
    0x3ff428a2f98d728b,
    0x3ff965fea53d6e3d,
];

/// Rational seed for z^(1/3) on [1, 2).
static C: [u64; 4] = [
    0x3fe1b0babccfef9c, 0x3fe2c9a3e94d1da5, 0xbfc4dc30b1a1ddba, 0x3f97a8d3e4ec9b07,
];

/// cbrt, correctly rounded in the given direction.
pub fn cbrtf_rnd(x: f32, rnd: Round) -> f32 {
    let hx = x.to_bits();
    let ix = hx & 0x7fff_ffff;
    let mut e = (ix >> 23) as i64;
    let mut mant = (hx & 0x7f_ffff) as u64;
    let sign = (hx >> 31) as u64;
    if ((e + 1) & 0xff) < 2 {
        if e == 0xff {
            if ix > 0x7f80_0000 {
                return fenv::propagate_nan_f(x);
            }
            return x; // +-Inf
        }
        if ix == 0 {
            return x; // +-0
        }
        // subnormal: renormalize the mantissa into the implicit-bit form
        let nz = (ix.leading_zeros() - 8) as i64;
        mant <<= nz;
        mant &= 0x7f_ffff;
        e -= nz - 1;
    }
    e += 899;
    let z = asdouble((mant << 29) | (0x3ffu64 << 52));
    let et = (e / 3) as u64;
    let it = (e % 3) as usize;
    let mut isc = ESCALE[it];
    isc = isc.wrapping_add(et.wrapping_sub(342) << 52);
    isc |= sign << 63;
    let scale = asdouble(isc);
    const U0: f64 = asdouble(0x3fd5555555555555);
    const U1: f64 = asdouble(0x3fcc71c71c71c71c);
    const U2: f64 = asdouble(0x3fc61f9add3c0ca4);
    let r = 1.0 / z;
    let z2 = z * z;
    let c0 = asdouble(C[0]) + z * asdouble(C[1]);
    let c2 = asdouble(C[2]) + z * asdouble(C[3]);
    let mut y = c0 + z2 * c2;
    let y2 = y * y;
    let w0 = y * U0;
    let w1 = y * U1;
    let w2 = y * U2;
    let h = y2 * (y * r) - 1.0;
    let h2 = h * h;
    y -= h * ((w0 - w1 * h) + w2 * h2);
    y *= scale;
    // snap values within 2^-21 of the binary32 grid onto it: exact cube
    // roots land on the grid and must narrow without residue
    let cvt = y.to_bits();
    let m0 = (cvt << 19) as i64;
    let m1 = m0 >> 63;
    if (m0 ^ m1) < (1i64 << 31) {
        y = f64::from_bits(cvt.wrapping_add(1u64 << 31) & 0xffff_ffff_0000_0000);
    }
    narrow(y, rnd)
}

/// cbrt, correctly rounded to nearest.
pub fn cbrtf(x: f32) -> f32 {
    cbrtf_rnd(x, Round::Nearest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_cubes() {
        for n in 1..=100i32 {
            let x = (n * n * n) as f32;
            for rnd in Round::ALL {
                assert_eq!(cbrtf_rnd(x, rnd), n as f32, "cbrt({x}) {rnd:?}");
                assert_eq!(cbrtf_rnd(-x, rnd), -n as f32);
            }
        }
        assert_eq!(cbrtf(8.0), 2.0);
        assert_eq!(cbrtf(0.125), 0.5);
        assert_eq!(cbrtf(1e-6), 0.01);
    }

    #[test]
    fn test_specials() {
        assert!(cbrtf(f32::NAN).is_nan());
        assert_eq!(cbrtf(f32::INFINITY), f32::INFINITY);
        assert_eq!(cbrtf(f32::NEG_INFINITY), f32::NEG_INFINITY);
        assert_eq!(cbrtf(0.0).to_bits(), 0.0f32.to_bits());
        assert_eq!(cbrtf(-0.0).to_bits(), (-0.0f32).to_bits());
    }

    #[test]
    fn test_subnormals() {
        let m = f32::from_bits(1); // 2^-149
        let r = cbrtf(m);
        // cbrt(2^-149) = 2^(-149/3) ~ 2^-49.67, a normal float
        assert!((r as f64 - (2f64).powf(-149.0 / 3.0)).abs() < 1e-17);
        assert_eq!(cbrtf(-m), -r);
        // 2^-120 is an exact cube: cbrt = 2^-40
        let c = f32::from_bits((2f32).powi(-120).to_bits());
        assert_eq!(cbrtf(c), (2f32).powi(-40));
    }

    #[test]
    fn test_odd_symmetry_and_monotone() {
        for &x in &[0.3f32, 1.7, 9.9, 1234.5, 7e30] {
            assert_eq!(cbrtf(x).to_bits(), (-cbrtf(-x)).to_bits());
        }
        let mut prev = 0.0f32;
        for i in 1..2000u32 {
            let v = cbrtf(i as f32 * 0.25);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_matches_std_loosely() {
        for &x in &[2.0f32, 3.0, 10.0, 0.9, 6.02e23, 1.3e-30] {
            let r = cbrtf(x) as f64;
            let want = (x as f64).cbrt();
            assert!((r - want).abs() / want < 1e-7, "cbrt({x})");
        }
    }
}
