//! Correctly-rounded elementary functions and the shared machinery they
//! stand on.
//!
//! Every entry point comes in two forms: `f(x)` rounds to nearest and
//! `f_rnd(x, Round)` takes the direction explicitly. The numeric pipeline
//! is the same for all of them: bit-level classification, a table-driven
//! range reduction, a fast double-double evaluation carrying a proven
//! error bound, a rounding certification of that bound, and a higher
//! precision fallback for the inputs the fast bound cannot settle.

#![allow(clippy::excessive_precision)]
#![allow(clippy::unusual_byte_groupings)]

mod arch;
mod asin;
mod asin_data;
mod atanpi;
mod bits;
mod cbrt;
mod dd;
mod erf;
mod erf_data;
mod exp10;
mod exp10f;
mod exp10m1f;
mod exp2m1;
mod exp_data;
mod exp_kernel;
mod fenv;
mod fma;
mod hypot;
mod round;
mod sinh;
mod sinh_data;
mod sqrt;
mod wide;

pub use asin::{asin, asin_rnd};
pub use atanpi::{atanpif, atanpif_rnd};
pub use bits::{
    FP_INFINITE, FP_NAN, FP_NORMAL, FP_SUBNORMAL, FP_ZERO, compose, decompose, fpclassify,
    fpclassifyf, issignaling, issignalingf,
};
pub use cbrt::{cbrtf, cbrtf_rnd};
pub use erf::{erff, erff_rnd};
pub use exp10::{exp10, exp10_rnd};
pub use exp10f::{exp10f, exp10f_rnd};
pub use exp10m1f::{exp10m1f, exp10m1f_rnd};
pub use exp2m1::{exp2m1, exp2m1_rnd};
pub use fenv::{
    ERR_DOMAIN, ERR_RANGE, INEXACT, INVALID, OVERFLOW, Round, UNDERFLOW, clear_except,
    test_except,
};
pub use fma::fma;
pub use hypot::{hypot, hypot_rnd};
pub use sinh::{sinh, sinh_rnd};
