//! Correctly-rounded elementary functions for binary32/binary64.
//!
//! Every function returns the representable value the exact mathematical
//! result rounds to, in any of the four IEEE-754 directions, not merely a
//! faithful approximation. The rounding direction is an explicit parameter
//! of the `*_rnd` entry points; the bare entry points round to nearest.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod math;

pub use math::{
    Round, asin, asin_rnd, atanpif, atanpif_rnd, cbrtf, cbrtf_rnd, erff, erff_rnd, exp10,
    exp10_rnd, exp10f, exp10f_rnd, exp10m1f, exp10m1f_rnd, exp2m1, exp2m1_rnd, hypot, hypot_rnd,
    sinh, sinh_rnd,
};
