//! TOML configuration file support.
//!
//! Output naming and compression can be kept in a config file instead of
//! being repeated on every invocation; command-line flags take precedence.
//!
//! ```toml
//! # imagcdf.toml
//! [output]
//! prefix = "/data/imag/"
//! lowercase = true
//! cadence = "minute"
//! coverage = "daily"
//! compression = "gzip6"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use imagcdf::container::Compression;
use imagcdf::filename::{Cadence, Coverage};

/// Root configuration structure for imagcdf.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Output naming and storage settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Settings for files the tool names or writes.
#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Text prepended to generated file names.
    pub prefix: Option<String>,

    /// Lowercase generated file names.
    pub lowercase: Option<bool>,

    /// Default sample cadence for file names.
    pub cadence: Option<Cadence>,

    /// Default file coverage for file names.
    pub coverage: Option<Coverage>,

    /// Compression for written containers.
    pub compression: Option<Compression>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
    }

    /// Load `path` if given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::from_file)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [output]
            prefix = "/data/imag/"
            lowercase = true
            cadence = "minute"
            coverage = "monthly"
            compression = "gzip9"
        "#;

        let config = Config::parse(toml).unwrap();
        assert_eq!(config.output.prefix.as_deref(), Some("/data/imag/"));
        assert_eq!(config.output.lowercase, Some(true));
        assert_eq!(config.output.cadence, Some(Cadence::Minute));
        assert_eq!(config.output.coverage, Some(Coverage::Monthly));
        assert_eq!(config.output.compression, Some(Compression::Gzip(9)));
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [output]
            lowercase = false
        "#;

        let config = Config::parse(toml).unwrap();
        assert_eq!(config.output.lowercase, Some(false));
        assert_eq!(config.output.cadence, None);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::parse("").unwrap();
        assert!(config.output.prefix.is_none());
        assert!(Config::load(None).unwrap().output.compression.is_none());
    }

    #[test]
    fn test_bad_compression() {
        assert!(Config::parse("[output]\ncompression = \"zstd\"").is_err());
    }
}
