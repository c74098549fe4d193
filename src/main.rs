// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use multper::search::{render_outcome, ReportOptions};
use multper::{Search, SearchConfig};
use tracing::Level;

const ABOUT: &str = "Search for the smallest numbers with the highest multiplicative persistence \
for base10 numbers with lengths in the range of [START:END)";

const LONG_ABOUT: &str = "\
Search for the smallest numbers with the highest multiplicative persistence for base10 numbers \
with lengths in the range of [START:END)
   Or in other words: START < log10(number) < END

Any number found with persistence greater than MAX prints a line starting with \"NEW MAX\", \
with empty lines before/after for visibility. Otherwise a single line is printed for each \
length indicating the best match (smallest number with highest persistence for that length).";

#[derive(Debug, Parser)]
#[command(name = "multper", version, about = ABOUT, long_about = LONG_ABOUT)]
struct Args {
    /// Range lower bound (inclusive). START must be >= 2
    #[arg(value_name = "START")]
    start: usize,

    /// Range upper bound (exclusive)
    #[arg(value_name = "END")]
    end: usize,

    /// Maximum persistence to treat specially (default 0 regardless of START length)
    #[arg(value_name = "MAX", default_value_t = 0)]
    max: u32,

    /// Search lengths in parallel
    #[arg(short, long)]
    parallel: bool,

    /// Append the smallest number with the winning digits
    #[arg(short, long)]
    number: bool,

    /// Print the chain of digit products for each winner
    #[arg(short, long)]
    chain: bool,

    /// Recheck each winner by multiplying the digits of the literal number
    #[arg(long)]
    verify: bool,

    /// Log progress per length
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = SearchConfig::new(args.start, args.end)
        .with_threshold(args.max)
        .with_parallel(args.parallel)
        .with_verify(args.verify);
    let options = ReportOptions {
        show_number: args.number,
        show_chain: args.chain,
    };

    let search = Search::new(config).context("Invalid search range")?;
    search.run_with(|outcome| {
        println!("{}", render_outcome(outcome, search.cache(), options));
    })?;
    Ok(())
}
