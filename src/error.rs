//! Error types for the ledger codec

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// An element is not valid hex, or does not decode to the expected width.
    #[error("Format error: {0}")]
    Format(String),
    /// A buffer length is not a whole number of elements.
    #[error("Invalid length: {len} bytes is not a multiple of {width}")]
    InvalidLength { len: usize, width: usize },
    /// Too many elements for the configured decode limit.
    #[error("Too many hashes: {count} exceeds limit of {limit}")]
    TooManyHashes { count: usize, limit: usize },
    /// The cursor ran out of bytes.
    #[error("Stream underrun: requested {requested} bytes, {remaining} remaining")]
    StreamUnderrun { requested: usize, remaining: usize },
    #[error("JSON error: {0}")]
    Json(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(String),
}

impl From<hex::FromHexError> for CodecError {
    fn from(err: hex::FromHexError) -> Self {
        CodecError::Format(format!("Invalid hex: {}", err))
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError::Json(err.to_string())
    }
}

impl From<toml::de::Error> for CodecError {
    fn from(err: toml::de::Error) -> Self {
        CodecError::Config(err.to_string())
    }
}

impl From<std::io::Error> for CodecError {
    fn from(err: std::io::Error) -> Self {
        CodecError::Io(err.to_string())
    }
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, CodecError>;
