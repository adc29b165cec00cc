//! Top-level n-th prime dispatch.
//!
//! Resolves a 0-based index to its prime through one of three strategies,
//! chosen from the index and the configured thresholds (or forced by the
//! caller). All strategies agree exactly wherever their domains overlap.

use tracing::{debug, trace};

use crate::bounds::{nth_prime_lower, nth_prime_upper};
use crate::error::Error;
use crate::lucy::prime_count_with_base;
use crate::options::{Method, Options};
use crate::segment::segment_primes;
use crate::sieve::{odds_only_sieve, SIEVE_LIMIT_CAP};
use crate::utils::isqrt;
use crate::Result;

/// Binary-search iteration ceiling. The initial span U(k) − L(k) stays
/// below 2^50 for every k ≤ 10^10 + 1, so 50 halvings always converge.
const MAX_BISECTION_STEPS: u32 = 50;

/// Returns the n-th prime, 0-based, under default options.
///
/// Index 0 yields 2.
pub fn nth_prime(n: u64) -> Result<u64> {
    nth_prime_with_options(n, &Options::default())
}

/// Returns the n-th prime, 0-based, under the given options.
///
/// With `Method::Auto` the strategy is picked from `n` and the
/// thresholds; a forced method is always honored, with an advisory sent
/// to `opts.logger` when it is clearly outside its comfort range.
pub fn nth_prime_with_options(n: u64, opts: &Options<'_>) -> Result<u64> {
    opts.validate()?;
    match opts.method {
        Method::Auto => {
            if n > opts.prime_counting_threshold {
                debug!("auto: counting strategy for n={n}");
                find_nth_by_counting(n, opts)
            } else if n > opts.regular_threshold {
                debug!("auto: segmented strategy for n={n}");
                find_nth_segmented(n, opts)
            } else {
                debug!("auto: regular strategy for n={n}");
                find_nth_regular(n)
            }
        }
        Method::Regular => {
            if n > opts.regular_threshold {
                opts.advise(&format!(
                    "regular method forced for n={n}, above the threshold of {}; \
                     a single flat sieve may be slow or overflow its cap",
                    opts.regular_threshold
                ));
            }
            find_nth_regular(n)
        }
        Method::Segmented => {
            if n > opts.prime_counting_threshold {
                opts.advise(&format!(
                    "segmented method forced for n={n}, above the threshold of {}; \
                     prime counting would reach the answer sublinearly",
                    opts.prime_counting_threshold
                ));
            }
            find_nth_segmented(n, opts)
        }
        Method::PrimeCounting => {
            if n <= opts.regular_threshold {
                opts.advise(&format!(
                    "prime counting forced for small n={n}; \
                     a flat sieve would be cheaper"
                ));
            }
            find_nth_by_counting(n, opts)
        }
    }
}

/// One flat odds-only sieve sized from the upper bound, regrown ×1.25 on
/// an undershoot, capped at the 32-bit sieve limit.
fn find_nth_regular(n: u64) -> Result<u64> {
    let k = n + 1;
    let cap = u64::from(SIEVE_LIMIT_CAP);
    let mut ub = nth_prime_upper(k).min(cap);
    loop {
        let primes = odds_only_sieve(ub as u32)?;
        if let Some(&p) = primes.get(n as usize) {
            return Ok(u64::from(p));
        }
        if ub == cap {
            return Err(Error::SieveLimitOverflow(ub + ub / 4));
        }
        let grown = (ub + ub / 4).min(cap);
        debug!(
            "sieve to {ub} produced only {} primes, need {k}; growing to {grown}",
            primes.len()
        );
        ub = grown;
    }
}

/// Fixed-width windows sieved in sequence, counting primes until index
/// `n` is reached. The base-prime list is regrown whenever a window's
/// `⌊√hi⌋` outruns it.
fn find_nth_segmented(n: u64, opts: &Options<'_>) -> Result<u64> {
    let seg = opts.segment_size;
    let mut lo: u64 = 2;
    let mut produced: u64 = 0;
    let mut base_limit: u64 = 1024;
    let mut base = odds_only_sieve(base_limit as u32)?;
    loop {
        let hi = lo + seg - 1;
        let need = isqrt(hi.max(4));
        if base_limit < need {
            base_limit = (need + 1024).max(base_limit * 2).min(u64::from(SIEVE_LIMIT_CAP));
            debug!("regrowing base primes to {base_limit} for window [{lo}, {hi}]");
            base = odds_only_sieve(base_limit as u32)?;
        }
        let primes = segment_primes(lo, hi, &base);
        trace!("window [{lo}, {hi}] holds {} primes", primes.len());
        for p in primes {
            if produced == n {
                return Ok(p);
            }
            produced += 1;
        }
        lo = hi + 1;
    }
}

/// Binary search on π(x) to bracket the target, then a local segmented
/// sieve around the estimate to emit it exactly.
fn find_nth_by_counting(n: u64, opts: &Options<'_>) -> Result<u64> {
    let target = n + 1;
    let mut lo = nth_prime_lower(target);
    let mut hi = nth_prime_upper(target);
    opts.advise(&format!(
        "counting: binary search over [{lo}, {hi}] for the {target}th prime"
    ));
    debug!("bisecting [{lo}, {hi}] for pi(x) >= {target}");

    let base = odds_only_sieve(isqrt(hi) as u32)?;
    let mut steps = 0;
    while lo < hi && steps < MAX_BISECTION_STEPS {
        let mid = lo + (hi - lo) / 2;
        if prime_count_with_base(mid, &base) < target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
        steps += 1;
    }
    let estimate = lo;
    debug!("bisection converged on {estimate} after {steps} steps");

    // Narrow window first; the estimate already equals the answer when
    // the bounds and the counter are exact, so this almost always hits.
    let window = (estimate / 10_000).clamp(10_000, 1_000_000);
    let start = estimate.saturating_sub(window / 4).max(2);
    let end = estimate + window;
    opts.advise(&format!("resolving locally in [{start}, {end}]"));
    if let Some(p) =
        resolve_in_window(n, start, end, opts.segment_size.min(100_000), opts)?
    {
        return Ok(p);
    }

    // Wide fallback window.
    let window = (estimate / 100).max(10_000_000);
    let start = estimate.saturating_sub(window / 2).max(2);
    let end = estimate + window;
    opts.advise(&format!(
        "narrow window missed; expanding to [{start}, {end}]"
    ));
    if let Some(p) = resolve_in_window(n, start, end, opts.segment_size, opts)? {
        return Ok(p);
    }

    Err(Error::SearchExhausted {
        n,
        estimate,
        start,
        end,
    })
}

/// Walks `[start, end]` in sub-segments, counting primes from π(start−1)
/// upward, and returns the one landing on index `n` (if any).
fn resolve_in_window(
    n: u64,
    start: u64,
    end: u64,
    step: u64,
    opts: &Options<'_>,
) -> Result<Option<u64>> {
    let base = odds_only_sieve(isqrt(end) as u32)?;
    let mut counted = if start > 2 {
        prime_count_with_base(start - 1, &base)
    } else {
        0
    };
    debug!("resolving in [{start}, {end}]: {counted} primes precede the window");

    let mut lo = start;
    while lo <= end {
        let hi = (lo + step - 1).min(end);
        for p in segment_primes(lo, hi, &base) {
            if counted == n {
                opts.advise(&format!("found prime {p} at index {n}"));
                return Ok(Some(p));
            }
            counted += 1;
        }
        lo = hi + 1;
    }
    Ok(None)
}
