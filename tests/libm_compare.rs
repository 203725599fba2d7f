//! Spot comparison against a dlopened glibc libm, round-to-nearest only.
//!
//! glibc is faithfully rounded, so agreement is asserted within one ulp
//! rather than bit-for-bit; the bit-exact reference lives in the MPFR
//! oracle. Set CRMATHS_GLIBC_LIBM to the shared object, or the test skips.

use crmaths::math;
use libloading::Library;
use std::env;
use std::path::Path;

const RNG_A: u64 = 6364136223846793005;
const RNG_C: u64 = 1442695040888963407;

fn lcg(state: &mut u64) -> u64 {
    *state = state.wrapping_mul(RNG_A).wrapping_add(RNG_C);
    *state
}

fn uniform(state: &mut u64, lo: f64, hi: f64) -> f64 {
    let u = (lcg(state) >> 11) as f64 / (1u64 << 53) as f64;
    lo + u * (hi - lo)
}

struct LibmFns {
    sinh: unsafe extern "C" fn(f64) -> f64,
    asin: unsafe extern "C" fn(f64) -> f64,
    hypot: unsafe extern "C" fn(f64, f64) -> f64,
    exp10: unsafe extern "C" fn(f64) -> f64,
    erff: unsafe extern "C" fn(f32) -> f32,
    cbrtf: unsafe extern "C" fn(f32) -> f32,
    exp10f: unsafe extern "C" fn(f32) -> f32,
}

fn glibc_opt() -> Option<LibmFns> {
    let path = env::var("CRMATHS_GLIBC_LIBM")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| {
            let default = "/usr/lib/x86_64-linux-gnu/libm.so.6";
            if Path::new(default).exists() {
                Some(default.to_string())
            } else {
                None
            }
        })?;
    let lib = unsafe { Library::new(&path).ok()? };
    let lib = Box::leak(Box::new(lib));
    unsafe {
        macro_rules! sym {
            ($name:literal, $ty:ty) => {
                *lib.get::<$ty>($name).ok()?
            };
        }
        Some(LibmFns {
            sinh: sym!(b"sinh", unsafe extern "C" fn(f64) -> f64),
            asin: sym!(b"asin", unsafe extern "C" fn(f64) -> f64),
            hypot: sym!(b"hypot", unsafe extern "C" fn(f64, f64) -> f64),
            exp10: sym!(b"exp10", unsafe extern "C" fn(f64) -> f64),
            erff: sym!(b"erff", unsafe extern "C" fn(f32) -> f32),
            cbrtf: sym!(b"cbrtf", unsafe extern "C" fn(f32) -> f32),
            exp10f: sym!(b"exp10f", unsafe extern "C" fn(f32) -> f32),
        })
    }
}

fn ulp_diff(a: f64, b: f64) -> u64 {
    if a.to_bits() == b.to_bits() {
        return 0;
    }
    if a.is_nan() || b.is_nan() {
        return u64::MAX;
    }
    let ka = if a < 0.0 { !a.to_bits() } else { a.to_bits() | 1 << 63 };
    let kb = if b < 0.0 { !b.to_bits() } else { b.to_bits() | 1 << 63 };
    ka.abs_diff(kb)
}

fn ulp_diff_f(a: f32, b: f32) -> u32 {
    if a.to_bits() == b.to_bits() {
        return 0;
    }
    if a.is_nan() || b.is_nan() {
        return u32::MAX;
    }
    let ka = if a < 0.0 { !a.to_bits() } else { a.to_bits() | 1 << 31 };
    let kb = if b < 0.0 { !b.to_bits() } else { b.to_bits() | 1 << 31 };
    ka.abs_diff(kb)
}

#[test]
fn glibc_agreement_within_one_ulp() {
    let Some(g) = glibc_opt() else {
        eprintln!("glibc libm not found; set CRMATHS_GLIBC_LIBM to run this test");
        return;
    };
    let mut state = 0x9e3779b97f4a7c15u64;
    for _ in 0..50_000 {
        let x = uniform(&mut state, -710.0, 710.0);
        let want = unsafe { (g.sinh)(x) };
        assert!(
            ulp_diff(math::sinh(x), want) <= 1,
            "sinh({x:e}): {:e} vs glibc {want:e}",
            math::sinh(x)
        );

        let a = uniform(&mut state, -1.0, 1.0);
        let want = unsafe { (g.asin)(a) };
        assert!(ulp_diff(math::asin(a), want) <= 1, "asin({a:e})");

        let hx = uniform(&mut state, -1e150, 1e150);
        let hy = uniform(&mut state, -1e150, 1e150);
        let want = unsafe { (g.hypot)(hx, hy) };
        assert!(ulp_diff(math::hypot(hx, hy), want) <= 1, "hypot({hx:e},{hy:e})");

        let e = uniform(&mut state, -300.0, 300.0);
        let want = unsafe { (g.exp10)(e) };
        assert!(ulp_diff(math::exp10(e), want) <= 1, "exp10({e:e})");

        let xf = uniform(&mut state, -4.2, 4.2) as f32;
        let want = unsafe { (g.erff)(xf) };
        assert!(ulp_diff_f(math::erff(xf), want) <= 1, "erff({xf:e})");

        let cf = uniform(&mut state, -1e20, 1e20) as f32;
        let want = unsafe { (g.cbrtf)(cf) };
        assert!(ulp_diff_f(math::cbrtf(cf), want) <= 1, "cbrtf({cf:e})");

        let tf = uniform(&mut state, -45.0, 38.0) as f32;
        let want = unsafe { (g.exp10f)(tf) };
        assert!(ulp_diff_f(math::exp10f(tf), want) <= 1, "exp10f({tf:e})");
    }
}
