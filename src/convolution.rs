//! Minkowski sums of bounded integer sets via FFT convolution.
//!
//! For sets `A` and `B` of non-negative integers, `A ⊕ B = {a + b}` is the
//! support of the convolution of their characteristic vectors. We compute
//! that convolution with a complex FFT (forward on both operands, pointwise
//! product, inverse) and read the support back off the real parts.
//!
//! Coefficients of the exact convolution are non-negative integers: the
//! number of ways `a + b = i`. Floating-point rounding leaves noise around
//! those integers, so an index counts as present when its coefficient
//! exceeds [`PRESENCE_THRESHOLD`]. The threshold sits halfway between the
//! "absent" value 0 and the smallest "present" value 1.

use std::collections::BTreeSet;

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use crate::error::{Error, Result};

/// Default ceiling on the convolution length, `2^29` slots.
///
/// Each slot is a `Complex<f64>` (16 bytes) and both operands get their own
/// buffer, so a convolution at the ceiling holds about 16 GiB. Lower it with
/// [`FastIntervalSummerBuilder::with_max_convolution_len`] on smaller hosts.
///
/// [`FastIntervalSummerBuilder::with_max_convolution_len`]: crate::FastIntervalSummerBuilder::with_max_convolution_len
pub const DEFAULT_MAX_CONVOLUTION_LEN: u64 = 1 << 29;

/// Coefficients strictly above this value are read as "sum present".
pub const PRESENCE_THRESHOLD: f64 = 0.5;

/// `A ⊕ B` under the default length ceiling.
pub fn minkowski_sum(a: &BTreeSet<u64>, b: &BTreeSet<u64>) -> Result<BTreeSet<u64>> {
    minkowski_sum_bounded(a, b, DEFAULT_MAX_CONVOLUTION_LEN)
}

/// `A ⊕ B`, failing with [`Error::CapacityExceeded`] when the convolution
/// length `limit = 2 + 2·max(A ∪ B)` exceeds `max_len`.
///
/// Both characteristic vectors are laid out over `limit` slots. Every
/// pairwise sum is at most `limit - 2`, so the circular convolution computed
/// by the FFT never wraps around onto a real index.
pub fn minkowski_sum_bounded(
    a: &BTreeSet<u64>,
    b: &BTreeSet<u64>,
    max_len: u64,
) -> Result<BTreeSet<u64>> {
    let (Some(&max_a), Some(&max_b)) = (a.last(), b.last()) else {
        return Ok(BTreeSet::new());
    };

    let limit = max_a
        .max(max_b)
        .checked_mul(2)
        .and_then(|v| v.checked_add(2))
        .ok_or(Error::CapacityExceeded {
            required: u64::MAX,
            limit: max_len,
        })?;
    if limit > max_len {
        return Err(Error::CapacityExceeded {
            required: limit,
            limit: max_len,
        });
    }
    let len = usize::try_from(limit).map_err(|_| Error::CapacityExceeded {
        required: limit,
        limit: usize::MAX as u64,
    })?;

    let mut fa = characteristic(a, len);
    let mut fb = characteristic(b, len);

    let mut planner = FftPlanner::<f64>::new();
    let forward = planner.plan_fft_forward(len);
    forward.process(&mut fa);
    forward.process(&mut fb);

    for (x, y) in fa.iter_mut().zip(fb.iter()) {
        *x = *x * *y;
    }

    let inverse = planner.plan_fft_inverse(len);
    inverse.process(&mut fa);

    // rustfft leaves the inverse unnormalised.
    let scale = 1.0 / len as f64;

    #[cfg(feature = "tracing")]
    trace_coefficient_stats(&fa, scale);

    Ok(fa
        .iter()
        .enumerate()
        .filter(|(_, c)| (c.re * scale).abs() > PRESENCE_THRESHOLD)
        .map(|(i, _)| i as u64)
        .collect())
}

/// Reference double loop, `O(|A|·|B|)`.
pub fn minkowski_sum_naive(a: &BTreeSet<u64>, b: &BTreeSet<u64>) -> BTreeSet<u64> {
    a.iter()
        .flat_map(|&x| b.iter().map(move |&y| x + y))
        .collect()
}

fn characteristic(set: &BTreeSet<u64>, len: usize) -> Vec<Complex<f64>> {
    let mut c = vec![Complex::new(0.0, 0.0); len];
    for &e in set {
        c[e as usize] = Complex::new(1.0, 0.0);
    }
    c
}

#[cfg(feature = "tracing")]
fn trace_coefficient_stats(coeffs: &[Complex<f64>], scale: f64) {
    let mut min = 0.0f64;
    let mut max = 0.0f64;
    let mut min_present = f64::MAX;
    let mut total = 0.0f64;
    for c in coeffs {
        let v = c.re * scale;
        min = min.min(v);
        max = max.max(v);
        total += v.abs();
        if v.abs() > PRESENCE_THRESHOLD {
            min_present = min_present.min(v.abs());
        }
    }
    tracing::trace!(
        len = coeffs.len(),
        min,
        max,
        min_present,
        mean_abs = total / coeffs.len() as f64,
        "convolution coefficients"
    );
}
