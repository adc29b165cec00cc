//! Call options for the locator.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Strategy used to resolve an n-th prime query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Pick a strategy from the index and the configured thresholds.
    #[default]
    Auto,
    /// One flat odds-only sieve sized from the analytic upper bound.
    Regular,
    /// Fixed-width windows sieved in sequence until the index is reached.
    Segmented,
    /// Binary search on π(x), finished by a local segmented sieve.
    PrimeCounting,
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "auto" => Ok(Method::Auto),
            "regular" => Ok(Method::Regular),
            "segmented" => Ok(Method::Segmented),
            "counting" | "prime-counting" => Ok(Method::PrimeCounting),
            other => Err(Error::InvalidArgument(format!(
                "unknown method '{other}' (expected auto, regular, segmented, or counting)"
            ))),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Auto => "auto",
            Method::Regular => "regular",
            Method::Segmented => "segmented",
            Method::PrimeCounting => "prime-counting",
        };
        f.write_str(name)
    }
}

/// Tuning knobs for [`nth_prime_with_options`](crate::nth_prime_with_options).
///
/// Read-only during a call; buffers are sized from these values at entry.
/// The logger, if any, is borrowed for the duration of the call and
/// receives purely advisory text — it never affects the result.
pub struct Options<'a> {
    /// Strategy to use.
    pub method: Method,
    /// Integers per segmented window. Must be positive.
    pub segment_size: u64,
    /// Auto switches Regular → Segmented above this index.
    pub regular_threshold: u64,
    /// Auto switches Segmented → PrimeCounting above this index.
    pub prime_counting_threshold: u64,
    /// Optional sink for advisory diagnostics.
    pub logger: Option<&'a dyn Fn(&str)>,
}

impl Default for Options<'_> {
    fn default() -> Self {
        Options {
            method: Method::Auto,
            segment_size: 1_000_000,
            regular_threshold: 1_000_000,
            prime_counting_threshold: 10_000_000,
            logger: None,
        }
    }
}

impl fmt::Debug for Options<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("method", &self.method)
            .field("segment_size", &self.segment_size)
            .field("regular_threshold", &self.regular_threshold)
            .field("prime_counting_threshold", &self.prime_counting_threshold)
            .field("logger", &self.logger.map(|_| "<sink>"))
            .finish()
    }
}

impl Options<'_> {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.segment_size == 0 {
            return Err(Error::InvalidArgument(
                "segment_size must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Forward an advisory line to the logger, if one is attached.
    pub(crate) fn advise(&self, msg: &str) {
        if let Some(sink) = self.logger {
            sink(msg);
        }
    }
}
