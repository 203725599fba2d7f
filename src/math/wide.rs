//! Wide-integer primitives for the fixed-point accurate paths.
//!
//! High-word multiplies over u64/u128 and signed 128-bit products with
//! two's-complement semantics. All operations are total; error contracts
//! (one ulp of the 64- or 128-bit fixed-point grid per truncated product)
//! are established offline where these are used.

/// floor(a*b / 2^64)
#[inline(always)]
pub(crate) fn muuh(a: u64, b: u64) -> u64 {
    ((a as u128 * b as u128) >> 64) as u64
}

/// floor(a*b / 2^64), signed (arithmetic shift).
#[inline(always)]
pub(crate) fn mh(a: i64, b: i64) -> i64 {
    ((a as i128 * b as i128) >> 64) as i64
}

/// full signed 128-bit product
#[inline(always)]
pub(crate) fn imul(a: i64, b: i64) -> i128 {
    a as i128 * b as i128
}

/// floor(a*b / 2^128) over u128 operands, dropping the low*low cross term.
#[inline(always)]
pub(crate) fn m_uu(a: u128, b: u128) -> u128 {
    let (a0, a1) = (a as u64, (a >> 64) as u64);
    let (b0, b1) = (b as u64, (b >> 64) as u64);
    let mut o = a1 as u128 * b1 as u128;
    o += (a0 as u128 * b1 as u128) >> 64;
    o += (a1 as u128 * b0 as u128) >> 64;
    o
}

/// floor(a*b / 2^64) for a u64 by u128 product.
#[inline(always)]
pub(crate) fn mu_u(a: u64, b: u128) -> u128 {
    let (b0, b1) = (b as u64, (b >> 64) as u64);
    let mut o = a as u128 * b1 as u128;
    o += (a as u128 * b0 as u128) >> 64;
    o
}

/// floor(a^2 / 2^128) with the cross term rounded in at 2^-63.
#[inline(always)]
pub(crate) fn sqr_u(a: u128) -> u128 {
    let (a0, a1) = (a as u64, (a >> 64) as u64);
    let os = (a0 as u128 * a1 as u128) >> 63;
    a1 as u128 * a1 as u128 + os
}
