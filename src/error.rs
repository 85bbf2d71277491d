use thiserror::Error;

/// Crate error type
#[derive(Error, Debug)]
pub enum Error {
    /// Input could not be read as a finite number
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    /// Input is not a 20-byte hex address
    #[error("Invalid address: {0:?}")]
    InvalidAddress(String),

    /// Unix timestamp outside the representable date range
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(i64),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// TOML serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] toml::ser::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
