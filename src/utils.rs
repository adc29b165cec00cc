//! Shared numeric helpers.

/// Integer square root, exact for all `u64` values.
///
/// Seeds from `f64::sqrt` and corrects with checked multiplies, so inputs
/// past the f64 mantissa (≥ 2^53) still round to the true floor.
#[inline]
pub(crate) fn isqrt(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    let mut x = (n as f64).sqrt() as u64;
    while x > 0 && x.checked_mul(x).map_or(true, |sq| sq > n) {
        x -= 1;
    }
    while (x + 1).checked_mul(x + 1).map_or(false, |sq| sq <= n) {
        x += 1;
    }
    x
}

/// Upper estimate of π(limit) used to pre-allocate prime vectors.
///
/// Overshoots by ~15%, so the collection phase never reallocates.
#[inline]
pub(crate) fn prime_vec_capacity(limit: u64) -> usize {
    if limit < 10 {
        return 4;
    }
    let lf = limit as f64;
    (lf / lf.ln() * 1.15) as usize + 1
}
