use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading trace configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),
    #[error("Failed to parse config file: {0}")]
    ParseError(String),
    #[error("{var} names a config file that does not exist: {}", .path.display())]
    MissingFile { var: &'static str, path: PathBuf },
    #[error("Call depth {depth} exceeds the maximum of {max}")]
    InvalidCallDepth { depth: usize, max: usize },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseError(err.message().to_string())
    }
}
