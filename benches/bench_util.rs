#![allow(dead_code)]

use criterion::{BenchmarkGroup, Criterion, black_box};
use std::sync::OnceLock;
use std::time::Duration;

const RNG_A: u64 = 6364136223846793005;
const RNG_C: u64 = 1442695040888963407;
const RNG_DENOM: f64 = (1u64 << 53) as f64;

pub fn lcg_next(state: &mut u64) -> u64 {
    *state = state.wrapping_mul(RNG_A).wrapping_add(RNG_C);
    *state
}

pub fn uniform_f64(state: &mut u64) -> f64 {
    let bits = lcg_next(state) >> 11;
    (bits as f64) / RNG_DENOM
}

pub fn gen_range(count: usize, min: f64, max: f64, seed: u64) -> Vec<f64> {
    let mut state = seed;
    let span = max - min;
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        values.push(min + uniform_f64(&mut state) * span);
    }
    values
}

pub fn gen_range_f32(count: usize, min: f32, max: f32, seed: u64) -> Vec<f32> {
    gen_range(count, min as f64, max as f64, seed)
        .into_iter()
        .map(|x| x as f32)
        .collect()
}

pub fn gen_pairs(count: usize, min: f64, max: f64, seed: u64) -> Vec<(f64, f64)> {
    let mut state = seed;
    let span = max - min;
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        let x = min + uniform_f64(&mut state) * span;
        let y = min + uniform_f64(&mut state) * span;
        values.push((x, y));
    }
    values
}

pub fn bench_inputs<F, G>(
    group: &mut BenchmarkGroup<'_, criterion::measurement::WallTime>,
    inputs: &[f64],
    ours: F,
    libm: G,
) where
    F: Fn(f64) -> f64 + Copy,
    G: Fn(f64) -> f64 + Copy,
{
    group.bench_function("crmaths", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in inputs {
                acc += ours(black_box(x));
            }
            black_box(acc)
        })
    });
    group.bench_function("libm", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in inputs {
                acc += libm(black_box(x));
            }
            black_box(acc)
        })
    });
}

pub fn bench_inputs2<F, G>(
    group: &mut BenchmarkGroup<'_, criterion::measurement::WallTime>,
    inputs: &[(f64, f64)],
    ours: F,
    libm: G,
) where
    F: Fn(f64, f64) -> f64 + Copy,
    G: Fn(f64, f64) -> f64 + Copy,
{
    group.bench_function("crmaths", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &(x, y) in inputs {
                acc += ours(black_box(x), black_box(y));
            }
            black_box(acc)
        })
    });
    group.bench_function("libm", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &(x, y) in inputs {
                acc += libm(black_box(x), black_box(y));
            }
            black_box(acc)
        })
    });
}

pub fn bench_inputs_f32<F, G>(
    group: &mut BenchmarkGroup<'_, criterion::measurement::WallTime>,
    inputs: &[f32],
    ours: F,
    libm: G,
) where
    F: Fn(f32) -> f32 + Copy,
    G: Fn(f32) -> f32 + Copy,
{
    group.bench_function("crmaths", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for &x in inputs {
                acc += ours(black_box(x));
            }
            black_box(acc)
        })
    });
    group.bench_function("libm", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for &x in inputs {
                acc += libm(black_box(x));
            }
            black_box(acc)
        })
    });
}

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(200)
        .measurement_time(Duration::from_secs(10))
        .warm_up_time(Duration::from_secs(5))
}

// The comparison lane prefers a dlopened glibc libm (CRMATHS_GLIBC_LIBM);
// when none is present it falls back to std so the benches still run.

struct LibmFns {
    sinh: unsafe extern "C" fn(f64) -> f64,
    asin: unsafe extern "C" fn(f64) -> f64,
    hypot: unsafe extern "C" fn(f64, f64) -> f64,
    exp10: unsafe extern "C" fn(f64) -> f64,
    erff: unsafe extern "C" fn(f32) -> f32,
}

static LIBM_FNS: OnceLock<Option<LibmFns>> = OnceLock::new();

fn load_libm() -> Option<LibmFns> {
    let path = std::env::var("CRMATHS_GLIBC_LIBM")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| {
            let default = "/usr/lib/x86_64-linux-gnu/libm.so.6";
            if std::path::Path::new(default).exists() {
                Some(default.to_string())
            } else {
                None
            }
        })?;
    let lib = unsafe { libloading::Library::new(&path).ok()? };
    let lib = Box::leak(Box::new(lib));
    unsafe {
        let sinh = *lib.get::<unsafe extern "C" fn(f64) -> f64>(b"sinh").ok()?;
        let asin = *lib.get::<unsafe extern "C" fn(f64) -> f64>(b"asin").ok()?;
        let hypot = *lib
            .get::<unsafe extern "C" fn(f64, f64) -> f64>(b"hypot")
            .ok()?;
        let exp10 = *lib.get::<unsafe extern "C" fn(f64) -> f64>(b"exp10").ok()?;
        let erff = *lib.get::<unsafe extern "C" fn(f32) -> f32>(b"erff").ok()?;
        eprintln!("comparison lane: libm from {path}");
        Some(LibmFns {
            sinh,
            asin,
            hypot,
            exp10,
            erff,
        })
    }
}

fn libm() -> &'static Option<LibmFns> {
    LIBM_FNS.get_or_init(load_libm)
}

#[inline(never)]
pub fn libm_sinh(x: f64) -> f64 {
    match libm() {
        Some(g) => unsafe { (g.sinh)(x) },
        None => x.sinh(),
    }
}

#[inline(never)]
pub fn libm_asin(x: f64) -> f64 {
    match libm() {
        Some(g) => unsafe { (g.asin)(x) },
        None => x.asin(),
    }
}

#[inline(never)]
pub fn libm_hypot(x: f64, y: f64) -> f64 {
    match libm() {
        Some(g) => unsafe { (g.hypot)(x, y) },
        None => x.hypot(y),
    }
}

#[inline(never)]
pub fn libm_exp10(x: f64) -> f64 {
    match libm() {
        Some(g) => unsafe { (g.exp10)(x) },
        None => 10f64.powf(x),
    }
}

#[inline(never)]
pub fn libm_erff(x: f32) -> f32 {
    match libm() {
        Some(g) => unsafe { (g.erff)(x) },
        // std has no erf; degrade to self-comparison
        None => crmaths::math::erff(x),
    }
}
