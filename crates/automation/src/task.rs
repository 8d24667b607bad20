//! Timestamp task.
//!
//! Writes a single `Ran at <timestamp>` line into the configured output file,
//! replacing any previous content.

use crate::clock::Clock;
use std::path::{Path, PathBuf};
use toolkit_core::{config::AutomationConfig, Result, RunStamp};

/// Writes run stamps to a file.
#[derive(Debug, Clone)]
pub struct TimestampTask {
    /// Destination file.
    output: PathBuf,
    /// Text before the timestamp.
    prefix: String,
}

impl TimestampTask {
    /// Create a task from configuration.
    pub fn new(config: &AutomationConfig) -> Self {
        Self {
            output: config.output.clone(),
            prefix: config.message_prefix.clone(),
        }
    }

    /// Destination file.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Stamp the current time from `clock` and write it out.
    pub fn run(&self, clock: &impl Clock) -> Result<RunStamp> {
        let stamp = RunStamp::new(clock.now());
        std::fs::write(&self.output, stamp.line_with_prefix(&self.prefix))?;

        tracing::info!(
            output = %self.output.display(),
            ts_ms = stamp.ts_ms(),
            "wrote run stamp"
        );
        Ok(stamp)
    }
}
