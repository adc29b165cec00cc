use prime_locator::lucy::{prime_count, prime_count_with_base};
use prime_locator::sieve::odds_only_sieve;

#[test]
fn checkpoint_values() {
    for (x, pi) in [
        (10, 4),
        (100, 25),
        (1_000, 168),
        (10_000, 1_229),
        (100_000, 9_592),
        (1_000_000, 78_498),
        (10_000_000, 664_579),
        (100_000_000, 5_761_455),
    ] {
        assert_eq!(prime_count(x).unwrap(), pi, "mismatch at x={x}");
    }
}

#[test]
#[ignore]
fn checkpoint_values_large() {
    assert_eq!(prime_count(1_000_000_000).unwrap(), 50_847_534);
    assert_eq!(prime_count(10_000_000_000).unwrap(), 455_052_511);
}

#[test]
fn agrees_with_flat_sieve() {
    let primes = odds_only_sieve(20_000).unwrap();
    for x in [0u64, 1, 2, 3, 4, 16, 17, 100, 1_023, 5_000, 19_999, 20_000] {
        let expected = primes.iter().filter(|&&p| u64::from(p) <= x).count() as u64;
        assert_eq!(prime_count(x).unwrap(), expected, "mismatch at x={x}");
    }
}

#[test]
fn count_is_monotonic() {
    let mut last = 0;
    for x in 0..=1_000 {
        let pi = prime_count(x).unwrap();
        assert!(pi >= last, "pi decreased at x={x}");
        assert!(pi - last <= 1, "pi jumped by more than one at x={x}");
        last = pi;
    }
}

#[test]
fn shared_base_serves_many_queries() {
    // One base-prime list covering sqrt(10^8) answers any x below 10^8.
    let base = odds_only_sieve(10_000).unwrap();
    assert_eq!(prime_count_with_base(999, &base), 168);
    assert_eq!(prime_count_with_base(1_000, &base), 168);
    assert_eq!(prime_count_with_base(1_001, &base), 168);
    assert_eq!(prime_count_with_base(99_999_989, &base), 5_761_455);
    assert_eq!(prime_count_with_base(100_000_000, &base), 5_761_455);
}

#[test]
fn counts_at_prime_boundaries() {
    // π steps exactly at primes.
    assert_eq!(prime_count(6).unwrap(), 3);
    assert_eq!(prime_count(7).unwrap(), 4);
    assert_eq!(prime_count(8).unwrap(), 4);
    assert_eq!(prime_count(2_147_483_647).unwrap() - prime_count(2_147_483_646).unwrap(), 1);
}
