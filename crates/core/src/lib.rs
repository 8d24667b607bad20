//! Core types and configuration for the data toolkit.
//!
//! This crate provides shared types used across all other crates:
//! - Run stamps and the timestamp format
//! - Configuration structures
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use types::*;
