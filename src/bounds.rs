//! Analytic bounds on the k-th prime.
//!
//! Dusart-style closed forms used to size sieves up front and to seed the
//! binary search in the counting strategy. For every k ≥ 1 the true k-th
//! prime (1-based) lies in `[nth_prime_lower(k), nth_prime_upper(k)]`.
//! The locator tolerates an undershoot by growing geometrically, but the
//! 1.25 / 0.95 safety factors keep these comfortably one-shot.

/// Upper bound on the k-th prime, 1-based.
pub fn nth_prime_upper(k: u64) -> u64 {
    if k < 6 {
        return 30;
    }
    if k < 100 {
        return 15 * k;
    }
    let kf = k as f64;
    let ln = kf.ln();
    let ln_ln = ln.ln();
    (1.25 * kf * (ln + ln_ln - 1.0 + (ln_ln - 2.0) / ln)) as u64
}

/// Lower bound on the k-th prime, 1-based.
pub fn nth_prime_lower(k: u64) -> u64 {
    if k < 6 {
        return 2;
    }
    let kf = k as f64;
    let ln = kf.ln();
    let ln_ln = ln.ln();
    ((0.95 * kf * (ln + ln_ln - 1.0)) as u64).max(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    // p_k for k = 1, 2, 3, ... (1-based)
    const SMALL_PRIMES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

    #[test]
    fn brackets_small_primes() {
        for (i, &p) in SMALL_PRIMES.iter().enumerate() {
            let k = (i + 1) as u64;
            assert!(nth_prime_lower(k) <= p, "lower bound fails at k={k}");
            assert!(nth_prime_upper(k) >= p, "upper bound fails at k={k}");
        }
    }

    #[test]
    fn brackets_known_milestones() {
        // (k 1-based, p_k)
        for (k, p) in [
            (100, 541),
            (1_000, 7_919),
            (10_000, 104_729),
            (100_000, 1_299_709),
            (1_000_000, 15_485_863),
            (10_000_000, 179_424_673),
        ] {
            assert!(nth_prime_lower(k) <= p, "lower bound fails at k={k}");
            assert!(nth_prime_upper(k) >= p, "upper bound fails at k={k}");
        }
    }

    #[test]
    fn bounds_are_ordered() {
        for k in [1, 5, 6, 99, 100, 101, 1 << 20, 1 << 34] {
            assert!(nth_prime_lower(k) <= nth_prime_upper(k), "crossed at k={k}");
        }
    }
}
