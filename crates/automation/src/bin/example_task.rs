//! Writes a UTC run stamp into a file.
//!
//! Run with: cargo run --bin example-task -- --output stamp.txt

use anyhow::Context;
use clap::Parser;
use toolkit_automation::{cli::TaskArgs, SystemClock, TimestampTask};

fn main() -> anyhow::Result<()> {
    toolkit_automation::cli::init_logging();

    let args = TaskArgs::parse();
    let config = args.resolve_config().context("failed to load configuration")?;

    let task = TimestampTask::new(&config.automation);
    task.run(&SystemClock)
        .with_context(|| format!("failed to write {}", task.output().display()))?;

    Ok(())
}
