//! Prime counting via the Lucy_Hedgehog recurrence.
//!
//! Computes π(x) in O(x^{3/4}) time and O(√x) space. For every pivot
//! value v ∈ {⌊x/k⌋} the recurrence tracks how many integers in `2..=v`
//! survive sieving by successive primes; once every prime `≤ ⌊√x⌋` has
//! been applied, the survivor count at v is exactly π(v).

use crate::sieve::{base_covers, odds_only_sieve};
use crate::utils::isqrt;
use crate::Result;

/// Returns π(x), sieving its own base primes up to `⌊√x⌋`.
pub fn prime_count(x: u64) -> Result<u64> {
    let base = odds_only_sieve(isqrt(x) as u32)?;
    Ok(prime_count_with_base(x, &base))
}

/// Returns π(x) given base primes covering `⌊√x⌋`.
///
/// `base_primes` must be a prefix of the prime sequence containing every
/// prime `≤ ⌊√x⌋`; a short list yields an undercount. The coverage
/// precondition is asserted in debug builds.
pub fn prime_count_with_base(x: u64, base_primes: &[u32]) -> u64 {
    if x < 2 {
        return 0;
    }
    if x == 2 {
        return 1;
    }
    let r = isqrt(x);
    debug_assert!(
        base_covers(base_primes, r),
        "base primes do not cover sqrt({x})"
    );

    // Pivot values ⌊x/k⌋ in descending order: the r large quotients,
    // then every value below ⌊x/r⌋. The set is closed under v ↦ ⌊v/p⌋,
    // which is all the recurrence ever looks up.
    let m = x / r;
    let len = (r + m - 1) as usize;
    let mut pivots: Vec<u64> = Vec::with_capacity(len);
    for k in 1..=r {
        pivots.push(x / k);
    }
    for v in (1..m).rev() {
        pivots.push(v);
    }

    // Position of pivot value v. Large quotients sit at k − 1 for
    // v = ⌊x/k⌋; small values count back from the end.
    let index_of = |v: u64| -> usize {
        if v >= m {
            (x / v - 1) as usize
        } else {
            len - v as usize
        }
    };

    // counts[i] starts as |2..=pivots[i]|: every integer is a survivor
    // before any prime has been applied.
    let mut counts: Vec<u64> = pivots.iter().map(|&v| v - 1).collect();

    for &p in base_primes {
        let p = u64::from(p);
        if p * p > x {
            break;
        }
        // π(p − 1): primes below p are fully resolved at this point.
        let below = counts[index_of(p - 1)];
        for i in 0..len {
            let v = pivots[i];
            if v < p * p {
                break;
            }
            // Integers ≤ v whose smallest prime factor is p.
            let struck = counts[index_of(v / p)] - below;
            counts[i] -= struck;
        }
    }

    // pivots[0] is x itself.
    counts[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiny_values() {
        assert_eq!(prime_count(0).unwrap(), 0);
        assert_eq!(prime_count(1).unwrap(), 0);
        assert_eq!(prime_count(2).unwrap(), 1);
        assert_eq!(prime_count(3).unwrap(), 2);
        assert_eq!(prime_count(4).unwrap(), 2);
        assert_eq!(prime_count(5).unwrap(), 3);
    }

    #[test]
    fn matches_sieve_exhaustively() {
        let primes = odds_only_sieve(500).unwrap();
        for x in 0..=500u64 {
            let expected = primes.iter().filter(|&&p| u64::from(p) <= x).count() as u64;
            assert_eq!(prime_count(x).unwrap(), expected, "mismatch at x={x}");
        }
    }

    #[test]
    fn shared_base_across_queries() {
        let base = odds_only_sieve(1_000).unwrap();
        assert_eq!(prime_count_with_base(100, &base), 25);
        assert_eq!(prime_count_with_base(1_000, &base), 168);
        assert_eq!(prime_count_with_base(10_000, &base), 1_229);
        assert_eq!(prime_count_with_base(100_000, &base), 9_592);
        assert_eq!(prime_count_with_base(1_000_000, &base), 78_498);
    }
}
