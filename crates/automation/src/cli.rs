//! Command-line interface definitions shared across binaries.

use clap::Parser;
use std::path::PathBuf;
use toolkit_core::{Config, Error, Result};
use tracing_subscriber::EnvFilter;

/// Example automation task.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Example automation task.", long_about = None)]
pub struct TaskArgs {
    /// File to write a timestamp into [default: automation-output.txt]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl TaskArgs {
    /// Build the effective configuration. `--output` wins over the file.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_json_file(path)?,
            None => Config::default(),
        };
        if let Some(output) = &self.output {
            config.automation.output = output.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

/// Scale numbers into the range 0.0 to 1.0 and print them as JSON.
#[derive(Parser, Debug, Clone)]
#[command(author, version, long_about = None)]
pub struct NormalizeArgs {
    /// Values to normalize; read whitespace-separated from stdin when omitted
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl NormalizeArgs {
    /// Build the effective configuration.
    pub fn resolve_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::from_json_file(path),
            None => Ok(Config::default()),
        }
    }
}

/// Parse textual numbers, reporting the first token that is not a number.
pub fn parse_values<I, S>(tokens: I) -> Result<Vec<f64>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|tok| {
            let tok = tok.as_ref();
            tok.parse::<f64>()
                .map_err(|_| Error::data(format!("not a number: {:?}", tok)))
        })
        .collect()
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the `info` default.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
