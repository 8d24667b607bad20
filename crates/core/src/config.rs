//! Configuration structures for the data toolkit.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default file the automation task writes into.
pub const DEFAULT_OUTPUT: &str = "automation-output.txt";

/// Main configuration for the toolkit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Automation task configuration.
    pub automation: AutomationConfig,
    /// Normalization configuration.
    pub normalize: NormalizeConfig,
}

impl Config {
    /// Load a configuration from a JSON file.
    ///
    /// Missing sections and fields fall back to their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values that cannot be used.
    pub fn validate(&self) -> Result<()> {
        if self.automation.output.as_os_str().is_empty() {
            return Err(Error::config("automation.output must not be empty"));
        }
        if self.automation.message_prefix.trim().is_empty() {
            return Err(Error::config("automation.message_prefix must not be empty"));
        }
        Ok(())
    }
}

/// Automation task configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomationConfig {
    /// File to write the timestamp into.
    pub output: PathBuf,
    /// Text written before the timestamp.
    pub message_prefix: String,
}

impl Default for AutomationConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            message_prefix: "Ran at".to_string(),
        }
    }
}

/// Normalization configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Reject NaN and infinite values instead of passing them through.
    pub reject_non_finite: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            reject_non_finite: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.automation.output, PathBuf::from("automation-output.txt"));
        assert_eq!(config.automation.message_prefix, "Ran at");
        assert!(config.normalize.reject_non_finite);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"automation": {{"output": "stamp.txt"}}}}"#).unwrap();

        let config = Config::from_json_file(file.path()).unwrap();
        assert_eq!(config.automation.output, PathBuf::from("stamp.txt"));
        assert_eq!(config.automation.message_prefix, "Ran at");
        assert!(config.normalize.reject_non_finite);
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let mut config = Config::default();
        config.automation.message_prefix = "  ".to_string();
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(Config::from_json_file(file.path()), Err(Error::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Config::from_json_file("/definitely/not/here.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
