//! Resolves n-th prime queries from the command line.
//!
//! ```text
//! cargo run --example nth_prime -- 999999999
//! cargo run --example nth_prime -- --method segmented 1000000
//! ```

use clap::Parser;
use prime_locator::{nth_prime_with_options, Method, Options};
use tracing::info;

#[derive(Parser)]
#[command(name = "nth_prime")]
struct Cli {
    /// 0-based prime index to resolve (0 yields 2).
    index: u64,

    /// Strategy: auto, regular, segmented, or counting.
    #[clap(long, default_value = "auto")]
    method: String,

    /// Integers per segmented window.
    #[clap(long, default_value_t = 1_000_000)]
    segment_size: u64,

    /// Forward the library's advisory messages to the log.
    #[clap(long)]
    advisories: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let args = Cli::parse();

    let method: Method = args.method.parse()?;
    let sink = |msg: &str| info!("{msg}");
    let opts = Options {
        method,
        segment_size: args.segment_size,
        logger: args.advisories.then_some(&sink as &dyn Fn(&str)),
        ..Options::default()
    };

    let prime = nth_prime_with_options(args.index, &opts)?;
    println!("{prime}");
    Ok(())
}
