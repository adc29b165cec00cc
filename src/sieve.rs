//! Odds-only sieve of Eratosthenes.
//!
//! Slot `i` of the bit buffer stands for the odd integer `2i + 1`; a set
//! bit means composite. Tracking odd values only halves both the memory
//! footprint and the number of strikes of a naive sieve, and packing
//! eight slots per byte keeps the whole buffer at `limit / 16` bytes.

use crate::error::Error;
use crate::utils::{isqrt, prime_vec_capacity};
use crate::Result;

/// Largest limit [`odds_only_sieve`] accepts: 2³¹ − 2.
///
/// Past this the slot count no longer fits sieving arithmetic on 32-bit
/// prime values; callers wanting more switch to the segmented or
/// counting strategy.
pub const SIEVE_LIMIT_CAP: u32 = i32::MAX as u32 - 1;

/// Bit buffer over odd integers. Slot `i` stands for `2i + 1`.
pub(crate) struct OddBitmap {
    words: Vec<u64>,
    slots: usize,
}

impl OddBitmap {
    pub(crate) fn new(slots: usize) -> Self {
        OddBitmap {
            words: vec![0u64; (slots + 63) / 64],
            slots,
        }
    }

    #[inline]
    pub(crate) fn mark(&mut self, slot: usize) {
        debug_assert!(slot < self.slots);
        self.words[slot >> 6] |= 1u64 << (slot & 63);
    }

    #[inline]
    pub(crate) fn is_marked(&self, slot: usize) -> bool {
        (self.words[slot >> 6] >> (slot & 63)) & 1 == 1
    }

    /// Words of the buffer, for Kernighan-style iteration over clear bits.
    #[inline]
    pub(crate) fn words(&self) -> &[u64] {
        &self.words
    }
}

/// Returns all primes `p ≤ limit` in increasing order.
///
/// `limit < 2` yields an empty vector; limits above [`SIEVE_LIMIT_CAP`]
/// fail with [`Error::SieveLimitOverflow`].
pub fn odds_only_sieve(limit: u32) -> Result<Vec<u32>> {
    if limit > SIEVE_LIMIT_CAP {
        return Err(Error::SieveLimitOverflow(u64::from(limit)));
    }
    if limit < 2 {
        return Ok(Vec::new());
    }
    if limit == 2 {
        return Ok(vec![2]);
    }

    let limit = limit as usize;
    let slots = (limit - 1) / 2 + 1;
    let mut bits = OddBitmap::new(slots);
    let root = isqrt(limit as u64) as usize;

    // Strike odd composites. For an unmarked slot i the value p = 2i + 1
    // is prime; its first unstruck multiple is p², at slot (p² − 1) / 2 =
    // 2i(i + 1), and stepping by 2p in value is a stride of p in slot
    // space.
    let mut i = 1usize;
    while 2 * i + 1 <= root {
        if !bits.is_marked(i) {
            let p = 2 * i + 1;
            let mut j = 2 * i * (i + 1);
            while j < slots {
                bits.mark(j);
                j += p;
            }
        }
        i += 1;
    }

    // Collect survivors, seeding with 2. Slot 0 is the integer 1 and is
    // never emitted.
    let mut primes = Vec::with_capacity(prime_vec_capacity(limit as u64));
    primes.push(2u32);
    for (wi, &word) in bits.words().iter().enumerate() {
        let mut w = !word;
        if wi == 0 {
            w &= !1;
        }
        while w != 0 {
            let slot = (wi << 6) + w.trailing_zeros() as usize;
            if slot >= slots {
                break;
            }
            primes.push((2 * slot + 1) as u32);
            w &= w - 1;
        }
    }
    Ok(primes)
}

/// True when `base` contains every prime `≤ root`.
///
/// Only meaningful under `debug_assert!`; trial-divides the tail beyond
/// the last base prime, which is far too slow for release paths.
pub(crate) fn base_covers(base: &[u32], root: u64) -> bool {
    let Some(&last) = base.last() else {
        return root < 2;
    };
    let last = u64::from(last);
    if last >= root {
        return true;
    }
    // No prime may hide in (last, root].
    ((last + 1)..=root).all(|v| {
        base.iter()
            .take_while(|&&p| u64::from(p) * u64::from(p) <= v)
            .any(|&p| v % u64::from(p) == 0)
    })
}
