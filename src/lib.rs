//! n-th prime lookup at billion scale.
//!
//! Three strategies share one numeric kernel and agree exactly on every
//! index they can reach:
//!
//! - **Regular** — one flat odds-only sieve sized from an analytic upper
//!   bound; fastest for small indices, capped by 32-bit sieve limits.
//! - **Segmented** — fixed-width windows sieved in sequence with a growing
//!   base-prime list; bounded memory, linear in the answer.
//! - **PrimeCounting** — binary search on π(x) computed by the
//!   Lucy_Hedgehog recurrence, finished by a local segmented sieve around
//!   the bracketed estimate; sublinear, reaches indices past 10^10.
//!
//! [`nth_prime`] picks a strategy from the index and the configured
//! thresholds; [`nth_prime_with_options`] lets callers force one.
//!
//! Indices are 0-based: index 0 yields 2.
//!
//! # Example
//!
//! ```
//! assert_eq!(prime_locator::nth_prime(10).unwrap(), 31);
//! ```

mod error;
mod locator;
mod options;
mod utils;

pub mod bounds;
pub mod lucy;
pub mod segment;
pub mod sieve;

pub use error::Error;
pub use locator::{nth_prime, nth_prime_with_options};
pub use options::{Method, Options};

pub type Result<T> = std::result::Result<T, Error>;
