//! Final rounding and the rounding certifier.
//!
//! A hardware libm lets the ambient rounding mode do the last addition;
//! here the direction is an explicit parameter, so the last
//! rounding is done in software from an exact residual. `round_sum` covers
//! normal-range results, `round_scaled` the general case including
//! subnormal targets, and `narrow` the binary64 -> binary32 conversions.

use super::bits::{self, next_down, next_down_f, next_up, next_up_f, MANT_MASK, SIGN_MASK};
use super::dd::two_sum;
use super::fenv::{self, Round, INEXACT, OVERFLOW, UNDERFLOW};

/// Correctly round the exact value h + l (normal range, no overflow at
/// h's binade). Nearest is free: two_sum's high word is already it.
pub(crate) fn round_sum(h: f64, l: f64, rnd: Round) -> f64 {
    let (s, t) = two_sum(h, l);
    if t != 0.0 {
        fenv::raise(INEXACT);
    }
    let r = match rnd {
        Round::Nearest => s,
        Round::Upward => {
            if t > 0.0 {
                next_up(s)
            } else {
                s
            }
        }
        Round::Downward => {
            if t < 0.0 {
                next_down(s)
            } else {
                s
            }
        }
        Round::TowardZero => {
            if t < 0.0 && s > 0.0 {
                next_down(s)
            } else if t > 0.0 && s < 0.0 {
                next_up(s)
            } else {
                s
            }
        }
    };
    if r.is_infinite() && h.is_finite() {
        fenv::raise(OVERFLOW);
    }
    r
}

/// Ziv's rounding test: round both ends of [h+l-err, h+l+err]; if they
/// agree the common value is the correct rounding of the exact result.
/// Consumes the fast path's certified bound, introduces no error itself.
#[inline]
pub(crate) fn ziv_round(h: f64, l: f64, err: f64, rnd: Round) -> Option<f64> {
    let left = round_sum_quiet(h, l - err, rnd);
    let right = round_sum_quiet(h, l + err, rnd);
    if left.is_nan() {
        return None;
    }
    if left.to_bits() == right.to_bits() {
        fenv::raise(INEXACT);
        if left.is_infinite() {
            fenv::raise(OVERFLOW);
        }
        return Some(left);
    }
    None
}

fn round_sum_quiet(h: f64, l: f64, rnd: Round) -> f64 {
    let (s, t) = two_sum(h, l);
    match rnd {
        Round::Nearest => s,
        Round::Upward => {
            if t > 0.0 {
                next_up(s)
            } else {
                s
            }
        }
        Round::Downward => {
            if t < 0.0 {
                next_down(s)
            } else {
                s
            }
        }
        Round::TowardZero => {
            if t < 0.0 && s > 0.0 {
                next_down(s)
            } else if t > 0.0 && s < 0.0 {
                next_up(s)
            } else {
                s
            }
        }
    }
}

/// Correctly round (h + l) * 2^e2, subnormal- and overflow-aware.
/// The heavy door of the final rounder: integer mantissa, explicit ulp
/// grid, ties-to-even, with the exact residual breaking grid/tie cases.
pub(crate) fn round_scaled(h: f64, l: f64, e2: i32, rnd: Round) -> f64 {
    let (s, t) = two_sum(h, l);
    if s == 0.0 {
        return s;
    }
    let neg = s < 0.0;
    // |s| = m * 2^e with m an integer < 2^53
    let u = s.to_bits() & !SIGN_MASK;
    let be = (u >> 52) as i32;
    let (mut m, e0) = if be == 0 {
        (u, -1074)
    } else {
        ((u & MANT_MASK) | (1u64 << 52), be - 1075)
    };
    let e = e0 + e2;
    let msb = 63 - m.leading_zeros() as i32;
    let vexp = msb + e;
    if vexp > 1023 {
        return fenv::overflow(neg, rnd);
    }
    if vexp < -1080 {
        // far below half the minimum subnormal
        return fenv::underflow(neg, rnd);
    }
    // target grid
    let ulp_exp = if vexp >= -1022 { vexp - 52 } else { -1074 };
    let mut sh = ulp_exp - e;
    if sh <= 0 {
        m <<= (-sh) as u32; // < 2^53 afterwards
        sh = 0;
    }
    let mut q = m >> sh;
    let rem = m & ((1u64 << sh) - 1); // sh <= 58 given vexp >= -1080
    // does the residual t push the magnitude up or down off the m grid?
    let t_inc = t != 0.0 && (t > 0.0) != neg;
    let t_dec = t != 0.0 && !t_inc;
    let half = if sh > 0 { 1u64 << (sh - 1) } else { 0 };
    let away = matches!(
        (rnd, neg),
        (Round::Upward, false) | (Round::Downward, true)
    );
    let inexact = rem != 0 || t != 0.0;
    match rnd {
        Round::Nearest => {
            if sh > 0 && (rem > half || (rem == half && (t_inc || (!t_dec && q & 1 == 1)))) {
                q += 1;
            }
        }
        _ if away => {
            if rem > 0 || t_inc {
                q += 1;
            }
        }
        _ => {
            // truncation toward zero on the magnitude
            if rem == 0 && t_dec {
                q -= 1;
            }
        }
    }
    if inexact {
        fenv::raise(INEXACT);
    }
    // q * 2^ulp_exp is exactly representable by construction
    let mag = if ulp_exp >= -1022 {
        if q == 1 << 53 {
            // carried into the next binade
            q = 1 << 52;
            if ulp_exp + 1 > 971 {
                return fenv::overflow(neg, rnd);
            }
            (q as f64) * bits::asdouble(((ulp_exp + 1024) as u64) << 52)
        } else {
            (q as f64) * bits::asdouble(((ulp_exp + 1023) as u64) << 52)
        }
    } else {
        // subnormal target: scale in two exact steps
        let part = (q as f64) * bits::asdouble(((ulp_exp + 1022 + 1023) as u64) << 52);
        if inexact {
            fenv::raise(UNDERFLOW);
        }
        part * bits::asdouble(1u64 << 52) // * 2^-1022
    };
    if inexact && mag.is_infinite() {
        fenv::raise(OVERFLOW);
    }
    if neg {
        -mag
    } else {
        mag
    }
}

/// Correctly round an (already >= 2x-precision-correct) binary64 value to
/// binary32 under rnd. The residual of the to-nearest narrowing is exact
/// in binary64, which decides the directed modes.
pub(crate) fn narrow(y: f64, rnd: Round) -> f32 {
    let r = y as f32; // to nearest, ties to even
    if r.is_nan() {
        return r;
    }
    if r.is_infinite() && y.is_finite() {
        return fenv::overflow_f(y < 0.0, rnd);
    }
    let d = y - r as f64; // exact
    if d == 0.0 {
        return r;
    }
    fenv::raise(INEXACT);
    if r == 0.0 || (r.to_bits() & 0x7f80_0000) == 0 {
        fenv::raise(UNDERFLOW);
    }
    match rnd {
        Round::Nearest => r,
        Round::Upward => {
            if d > 0.0 {
                next_up_f(r)
            } else {
                r
            }
        }
        Round::Downward => {
            if d < 0.0 {
                next_down_f(r)
            } else {
                r
            }
        }
        Round::TowardZero => {
            if d < 0.0 && y > 0.0 {
                next_down_f(r)
            } else if d > 0.0 && y < 0.0 {
                next_up_f(r)
            } else {
                r
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_sum_directed() {
        // exact value 1 + 2^-60: above 1, below next_up(1)
        let h = 1.0;
        let l = f64::from_bits(0x3c30_0000_0000_0000); // 2^-60
        assert_eq!(round_sum(h, l, Round::Nearest), 1.0);
        assert_eq!(round_sum(h, l, Round::Upward), next_up(1.0));
        assert_eq!(round_sum(h, l, Round::Downward), 1.0);
        assert_eq!(round_sum(h, l, Round::TowardZero), 1.0);
        assert_eq!(round_sum(-h, -l, Round::Downward), next_down(-1.0));
        assert_eq!(round_sum(-h, -l, Round::Upward), -1.0);
        assert_eq!(round_sum(-h, -l, Round::TowardZero), -1.0);
    }

    #[test]
    fn test_round_sum_exact() {
        for rnd in Round::ALL {
            assert_eq!(round_sum(1.5, 0.0, rnd), 1.5);
            assert_eq!(round_sum(-2.25, 0.0, rnd), -2.25);
        }
    }

    #[test]
    fn test_ziv_certifies_wide_gap() {
        // value far from a boundary: any small err certifies
        let r = ziv_round(1.25, 1e-20, 1e-22, Round::Nearest);
        assert_eq!(r, Some(1.25));
        // err straddling the halfway point: must refuse
        let l = f64::EPSILON / 2.0; // exactly the tie for 1.0
        assert_eq!(ziv_round(1.0, l, 1e-20, Round::Nearest), None);
    }

    #[test]
    fn test_round_scaled_matches_round_sum() {
        let cases = [(1.0, 1e-20), (1.5, -1e-17), (-0.3, 1e-18)];
        for &(h, l) in &cases {
            for rnd in Round::ALL {
                assert_eq!(round_scaled(h, l, 0, rnd), round_sum(h, l, rnd), "{h} {l} {rnd:?}");
            }
        }
    }

    #[test]
    fn test_round_scaled_subnormal() {
        // exact value (1 + 2^-30) * 2^-1074: between the two smallest subnormals
        let h = 1.0 + f64::from_bits(0x3e10_0000_0000_0000);
        assert_eq!(round_scaled(h, 0.0, -1074, Round::Nearest), f64::from_bits(1));
        assert_eq!(round_scaled(h, 0.0, -1074, Round::Upward), f64::from_bits(2));
        assert_eq!(round_scaled(h, 0.0, -1074, Round::Downward), f64::from_bits(1));
        // halfway between 0 and min subnormal: tie to even -> 0
        assert_eq!(round_scaled(1.0, 0.0, -1075, Round::Nearest), 0.0);
        assert_eq!(round_scaled(1.0, 0.0, -1075, Round::Upward), f64::from_bits(1));
        // just above the tie thanks to the residual
        assert_eq!(
            round_scaled(1.0, f64::EPSILON, -1075, Round::Nearest),
            f64::from_bits(1)
        );
    }

    #[test]
    fn test_round_scaled_carry() {
        // (2 - 2^-52) + tiny positive residual: upward must carry to 2
        let h = f64::from_bits(0x3fff_ffff_ffff_ffff); // just below 2
        assert_eq!(round_scaled(h, 1e-18, 0, Round::Upward), 2.0);
        assert_eq!(round_scaled(h, 1e-18, 0, Round::Nearest), h);
        assert_eq!(round_scaled(h, 1e-18, 0, Round::TowardZero), h);
    }

    #[test]
    fn test_narrow() {
        assert_eq!(narrow(1.0, Round::Nearest), 1.0f32);
        let y = 1.0f64 + 2f64.powi(-26);
        assert_eq!(narrow(y, Round::Nearest), 1.0f32);
        assert_eq!(narrow(y, Round::Upward), next_up_f(1.0f32));
        assert_eq!(narrow(y, Round::TowardZero), 1.0f32);
        assert_eq!(narrow(-y, Round::Downward), next_down_f(-1.0f32));
        assert_eq!(narrow(-y, Round::TowardZero), -1.0f32);
        // tie to even: 1 - 2^-25 is halfway between 1-2^-24 and 1
        assert_eq!(narrow(1.0 - 2f64.powi(-25), Round::Nearest), 1.0f32);
        assert_eq!(
            narrow(1.0 - 2f64.powi(-25), Round::TowardZero),
            f32::from_bits(0x3f7f_ffff)
        );
        // overflow handling
        assert_eq!(narrow(1e39, Round::Nearest), f32::INFINITY);
        assert_eq!(narrow(1e39, Round::TowardZero), f32::MAX);
        assert_eq!(narrow(-1e39, Round::Upward), -f32::MAX);
    }
}
