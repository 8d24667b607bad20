//! Automation tasks for the data toolkit.
//!
//! This crate provides:
//! - A clock abstraction (wall clock and fixed clock)
//! - The timestamp task that writes a run stamp to a file
//! - Command-line argument definitions and logging setup for the binaries

pub mod cli;
pub mod clock;
pub mod task;

pub use clock::{Clock, FixedClock, SystemClock};
pub use task::TimestampTask;
