//! Error types for reordering and configuration.

use thiserror::Error;

/// Errors produced by [`BidiReorderer`](crate::bidi::BidiReorderer).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReorderError {
    /// Input could not be decoded into characters (e.g. an unpaired
    /// UTF-16 surrogate). `offset` is the index of the offending code unit.
    #[error("malformed input at code unit {offset}")]
    MalformedInput { offset: usize },
}

/// Errors that can occur while loading paragraph configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for this schema.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Target width must be finite and greater than zero.
    #[error("target width must be a positive number, got {0}")]
    InvalidWidth(f32),

    /// Unknown alignment name.
    #[error("unknown alignment `{0}` (expected start, center, end or justify)")]
    InvalidAlignment(String),
}
