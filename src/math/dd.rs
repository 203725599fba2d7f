//! Double-double arithmetic kernel.
//!
//! Exact-error building blocks shared by every evaluation path. A value is
//! carried as an unevaluated pair (hi, lo) with |lo| <= ulp(hi)/2 after
//! renormalization. All arithmetic is round-to-nearest internally; rounding
//! directions are applied only by the final rounder.

use super::fma::fma;

/// hi + lo = a + b exactly, assuming |a| >= |b| (or a == 0).
#[inline(always)]
pub(crate) fn fast_two_sum(a: f64, b: f64) -> (f64, f64) {
    let hi = a + b;
    let e = hi - a; // exact
    (hi, b - e)
}

/// hi + lo = a + b exactly, no magnitude precondition.
#[inline(always)]
pub(crate) fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let bb = s - a;
    let err = (a - (s - bb)) + (b - bb);
    (s, err)
}

/// hi + lo = a * b exactly (FMA-based product error).
#[inline(always)]
pub(crate) fn two_prod(a: f64, b: f64) -> (f64, f64) {
    let hi = a * b;
    let lo = fma(a, b, -hi);
    (hi, lo)
}

/// a * (bh + bl); error bounded by ulp(lo).
#[inline(always)]
pub(crate) fn s_mul(a: f64, bh: f64, bl: f64) -> (f64, f64) {
    let (hi, s) = two_prod(a, bh); // exact
    (hi, fma(a, bl, s))
}

/// (ah + al) * (bh + bl), ignoring al*bl.
#[inline(always)]
pub(crate) fn d_mul(ah: f64, al: f64, bh: f64, bl: f64) -> (f64, f64) {
    let (hi, s) = two_prod(ah, bh); // exact
    let t = fma(al, bh, s);
    (hi, fma(ah, bl, t))
}

/// a + (bh + bl), assuming |a| >= |bh|.
/// |(a+bh+bl)-(hi+lo)| <= 2^-105 |hi| + ulp(lo).
#[inline(always)]
pub(crate) fn fast_sum(a: f64, bh: f64, bl: f64) -> (f64, f64) {
    let (hi, lo) = fast_two_sum(a, bh);
    (hi, lo + bl)
}

/// (ah + al) + (bh + bl), assuming |ah| >= |bh|.
#[inline(always)]
pub(crate) fn fast_sum2(ah: f64, al: f64, bh: f64, bl: f64) -> (f64, f64) {
    let (hi, lo) = fast_two_sum(ah, bh);
    (hi, lo + (al + bl))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_sum_exact() {
        let cases = [
            (1.0, 1e-30),
            (1e30, -1.0),
            (0.1, 0.2),
            (-1.5, 1e-17),
            (4503599627370496.0, 0.5),
        ];
        for &(a, b) in &cases {
            let (hi, lo) = two_sum(a, b);
            assert_eq!(hi, a + b);
            // residual reconstructs the exact sum
            assert_eq!(hi + lo, a + b);
            assert!(lo.abs() <= (f64::from_bits(hi.to_bits() + 1) - hi).abs());
        }
    }

    #[test]
    fn test_two_prod_exact() {
        let cases: [(f64, f64); 4] = [
            (0.1, 0.1),
            (1.0 + f64::EPSILON, 1.0 - f64::EPSILON),
            (3.141592653589793, 2.718281828459045),
            (1e150, 1e-150),
        ];
        for &(a, b) in &cases {
            let (hi, lo) = two_prod(a, b);
            assert_eq!(hi, a * b);
            // check against 128-bit integer reference on the mantissas
            let (ea, ma) = ((a.to_bits() >> 52) & 0x7ff, (a.to_bits() & 0xf_ffff_ffff_ffff) | (1 << 52));
            let (eb, mb) = ((b.to_bits() >> 52) & 0x7ff, (b.to_bits() & 0xf_ffff_ffff_ffff) | (1 << 52));
            let prod = ma as u128 * mb as u128;
            // reconstruct hi+lo as an integer at the product scale and compare
            let sc = |v: f64| -> i128 {
                let eo = ea as i32 + eb as i32 - 2 * 1075;
                let (ev, mv) = (((v.to_bits() >> 52) & 0x7ff) as i32, (v.to_bits() & 0xf_ffff_ffff_ffff) | (1 << 52));
                let sh = (ev - 1075) - eo;
                assert!((0..75).contains(&sh), "scale {sh}");
                (mv as i128) << sh
            };
            let mut sum = sc(hi);
            if lo != 0.0 {
                sum += if lo < 0.0 { -sc(-lo) } else { sc(lo) };
            }
            assert_eq!(sum as u128, prod, "two_prod({a},{b})");
        }
    }

    #[test]
    fn test_fast_two_sum_residual() {
        let (hi, lo) = fast_two_sum(1.0, f64::EPSILON / 4.0);
        assert_eq!(hi, 1.0);
        assert_eq!(lo, f64::EPSILON / 4.0);
    }
}
