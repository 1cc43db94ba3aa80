use std::error::Error;
use std::io;
use std::time::Instant;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use inversion::{CountAlgorithm, parse_sequence, sort_in_place_and_count};

const DEMO_SEQUENCE: [i64; 5] = [2, 4, 1, 3, 5];

/// Sort a sequence of integers and count its inversions.
///
/// Values are taken from the command line, or read from stdin (separated by
/// whitespace or commas) when none are given.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Values to sort.
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,

    /// Algorithm variant: top_down, top_down_buffered, bottom_up or parallel.
    #[arg(long, short, default_value_t = CountAlgorithm::TopDown)]
    algorithm: CountAlgorithm,

    /// Use the sequence 2 4 1 3 5 instead of reading stdin.
    #[arg(long, conflicts_with = "values")]
    demo: bool,

    /// Only print the inversion count.
    #[arg(long)]
    count_only: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let mut values = if args.demo {
        DEMO_SEQUENCE.to_vec()
    } else if !args.values.is_empty() {
        args.values
    } else {
        tracing::debug!("reading values from stdin");
        parse_sequence(&io::read_to_string(io::stdin())?)?
    };

    tracing::debug!(algorithm = %args.algorithm, len = values.len(), "sorting");
    let start = Instant::now();
    let inversions = sort_in_place_and_count(args.algorithm, &mut values);
    tracing::debug!(elapsed = ?start.elapsed(), "done");
    tracing::info!(inversions, "counted inversions");

    if !args.count_only {
        let sorted = values
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        println!("{sorted}");
    }
    println!("inversions: {inversions}");

    Ok(())
}

fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
