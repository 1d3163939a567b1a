//! Integer helpers and the interval schedule used by the fast solver.

/// `⌈log2 n⌉`, with `ceil_log2(0) == ceil_log2(1) == 0`.
#[inline]
pub fn ceil_log2(n: u64) -> u32 {
    if n <= 1 {
        0
    } else {
        u64::BITS - (n - 1).leading_zeros()
    }
}

/// `⌈a / b⌉` for `b > 0`.
#[inline]
pub fn ceil_div(a: u64, b: u64) -> u64 {
    debug_assert!(b > 0);
    a / b + u64::from(a % b != 0)
}

/// Boundaries `a_0 = 0 <= a_1 <= … <= a_k <= a_{k+1} = u` splitting `[0, u)`
/// into `k + 1` intervals for an input of `n` elements, where
/// `k = ⌈log2(max(⌈log2 n⌉, 1))⌉` and
/// `a_i = ⌈u / n^((2^k - 2^i + 2) / 2^(k+1))⌉`.
///
/// Interval weights shrink geometrically towards `u`, which bounds the merge
/// cost inside each interval. Consecutive boundaries may coincide; the
/// corresponding interval is then empty.
pub fn interval_boundaries(n: usize, u: u64) -> Vec<u64> {
    let n = n as u64;
    let k = ceil_log2(u64::from(ceil_log2(n).max(1)));
    let mut bounds = Vec::with_capacity(k as usize + 2);
    bounds.push(0);

    let denom = (1u64 << (k + 1)) as f64;
    let mut prev = 0u64;
    for i in 1..=k {
        let power = ((1u64 << k) - (1u64 << i) + 2) as f64 / denom;
        let weight = (n as f64).powf(power);
        let a_i = ((u as f64) / weight).ceil() as u64;
        // Clamp float drift back into a monotone schedule inside [0, u].
        let a_i = a_i.clamp(prev, u);
        bounds.push(a_i);
        prev = a_i;
    }
    bounds.push(u);
    bounds
}
