//! Configuration file parsing and validation.
//!
//! This module handles loading TOML files that set the process-wide call
//! depth and formatter, so applications can configure tracing once at startup:
//!
//! ```toml
//! call_depth = 3
//! formatter = "json"
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants::depth::MAX_CALL_DEPTH;
use crate::errors::ConfigError;
use crate::formatter::FormatterKind;

/// Trace configuration. Absent keys leave the current settings untouched.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Frames skipped when capturing a call site.
    #[serde(default)]
    pub call_depth: Option<usize>,
    /// Built-in formatter to activate.
    #[serde(default)]
    pub formatter: Option<FormatterKind>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|err| ConfigError::ReadError(format!("{}: {}", path.display(), err)))?;
        Self::parse(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;

        if let Some(depth) = config.call_depth
            && depth > MAX_CALL_DEPTH
        {
            return Err(ConfigError::InvalidCallDepth {
                depth,
                max: MAX_CALL_DEPTH,
            });
        }

        Ok(config)
    }

    /// Push the configured values into the process-wide settings.
    pub fn apply(&self) {
        if let Some(depth) = self.call_depth {
            crate::settings::set_call_depth(depth);
        }
        if let Some(kind) = self.formatter {
            kind.install();
        }
    }
}
