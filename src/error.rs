use thiserror::Error;

/// Errors surfaced by the prime locator.
#[derive(Error, Debug)]
pub enum Error {
    /// A caller-supplied option is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A flat sieve was asked to cover more than the 32-bit cap allows.
    ///
    /// The regular strategy cannot reach this index; re-invoke with
    /// the segmented or prime-counting strategy instead.
    #[error("sieve limit overflow: {0} exceeds the 32-bit sieve cap")]
    SieveLimitOverflow(u64),

    /// The zoom windows around the π-estimate failed to contain the
    /// target prime. Indicates a bounds or counting defect.
    #[error(
        "search exhausted for n={n}: estimate {estimate}, final window [{start}, {end}]"
    )]
    SearchExhausted {
        n: u64,
        estimate: u64,
        start: u64,
        end: u64,
    },
}
