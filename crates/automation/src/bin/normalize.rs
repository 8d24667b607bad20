//! Normalizes numbers into [0, 1] and prints them as a JSON array.
//!
//! Run with: cargo run --bin normalize -- 0 5 10

use anyhow::Context;
use clap::Parser;
use std::io::Read;
use toolkit_automation::cli::{parse_values, NormalizeArgs};
use toolkit_features::{normalize, normalize_checked};

fn main() -> anyhow::Result<()> {
    toolkit_automation::cli::init_logging();

    let args = NormalizeArgs::parse();
    let config = args.resolve_config().context("failed to load configuration")?;

    let values = if args.values.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        parse_values(input.split_whitespace())?
    } else {
        parse_values(&args.values)?
    };

    let scaled = if config.normalize.reject_non_finite {
        normalize_checked(&values)?
    } else {
        normalize(&values)
    };
    tracing::debug!(count = scaled.len(), "normalized values");

    println!("{}", serde_json::to_string(&scaled)?);
    Ok(())
}
