//! Coordinate compression for sets concentrated in a high, narrow range.
//!
//! When every value of interest has the form `x = q·d + r` with a small
//! remainder `r < l`, the map `h(x) = 2l·q + r` squeezes the gap between
//! consecutive multiples of `d` down to `2l`. With `d >= 2l`:
//! - `h` is injective and [`inverse_h`] undoes it exactly;
//! - `h(x) + h(y) = 2l·(qx + qy) + (rx + ry)` with `rx + ry < 2l`, so no
//!   carry crosses a quotient boundary and the inverse of a compressed sum
//!   is the original sum.
//!
//! This is what lets the merge protocol convolve over a range of roughly
//! `2l·(u/d)` slots instead of `u`. When `d < 2l` both functions are the
//! identity.

use std::collections::BTreeSet;

/// True when `d >= 2l` (and `l > 0`), i.e. the remap is a genuine compression.
#[inline]
pub fn compresses(d: u64, l: u64) -> bool {
    l > 0 && l <= d / 2
}

/// `h(S) = { 2l·⌊x/d⌋ + (x mod d) | x ∈ S }`, or `S` itself when `d < 2l`.
pub fn perfect_h(s: &BTreeSet<u64>, d: u64, l: u64) -> BTreeSet<u64> {
    if !compresses(d, l) {
        return s.clone();
    }
    let stride = 2 * l;
    s.iter().map(|&x| stride * (x / d) + x % d).collect()
}

/// `h⁻¹(hS) = { d·⌊y/2l⌋ + (y mod 2l) | y ∈ hS }`, or `hS` itself when `d < 2l`.
pub fn inverse_h(hs: &BTreeSet<u64>, d: u64, l: u64) -> BTreeSet<u64> {
    if !compresses(d, l) {
        return hs.clone();
    }
    let stride = 2 * l;
    hs.iter().map(|&y| d * (y / stride) + y % stride).collect()
}
