//! Bounded-window sieve over an arbitrary `[lo, hi]` range.
//!
//! Uses the same odds-only slot layout as the flat sieve, anchored at the
//! first odd value of the window, so memory stays proportional to the
//! window width no matter how far out the window sits.

use crate::sieve::{base_covers, OddBitmap};
use crate::utils::isqrt;

/// Returns all primes in `[lo, hi]` in increasing order.
///
/// `base_primes` must be a prefix of the prime sequence containing every
/// prime `≤ ⌊√hi⌋`; with a short list the output may contain composites.
/// The coverage precondition is asserted in debug builds.
pub fn segment_primes(lo: u64, hi: u64, base_primes: &[u32]) -> Vec<u64> {
    debug_assert!(2 <= lo && lo <= hi, "invalid window [{lo}, {hi}]");
    debug_assert!(
        base_covers(base_primes, isqrt(hi)),
        "base primes do not cover sqrt({hi})"
    );

    let mut primes = Vec::new();
    if lo <= 2 && 2 <= hi {
        primes.push(2);
    }

    // First odd candidate of the window.
    let lo_odd = if lo <= 2 {
        3
    } else if lo % 2 == 1 {
        lo
    } else {
        lo + 1
    };
    if lo_odd > hi {
        return primes;
    }

    let slots = ((hi - lo_odd) / 2 + 1) as usize;
    let mut bits = OddBitmap::new(slots);

    for &p in base_primes {
        if p == 2 {
            continue;
        }
        let p = u64::from(p);
        if p * p > hi {
            break;
        }
        // First odd multiple of p inside the window, never below p²
        // (everything smaller was struck by a smaller prime).
        let mut first = p * p;
        if first < lo_odd {
            first = ((lo_odd + p - 1) / p) * p;
            if first % 2 == 0 {
                first += p;
            }
        }
        // Stepping by 2p in value is a stride of p in slot space.
        let mut slot = ((first - lo_odd) / 2) as usize;
        while slot < slots {
            bits.mark(slot);
            slot += p as usize;
        }
    }

    for (wi, &word) in bits.words().iter().enumerate() {
        let mut w = !word;
        while w != 0 {
            let slot = (wi << 6) + w.trailing_zeros() as usize;
            if slot >= slots {
                break;
            }
            primes.push(lo_odd + 2 * slot as u64);
            w &= w - 1;
        }
    }
    primes
}
