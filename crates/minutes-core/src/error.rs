use thiserror::Error;

/// Top-level error type for the minutes system.
///
/// The extraction engine never produces these: every cascade stage absorbs
/// its own failures. They belong to the caller layer (configuration, input
/// decoding, reference date parsing).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MinutesError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid reference date: {0}")]
    InvalidDate(String),
}

impl From<toml::de::Error> for MinutesError {
    fn from(err: toml::de::Error) -> Self {
        MinutesError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for MinutesError {
    fn from(err: serde_json::Error) -> Self {
        MinutesError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for minutes operations.
pub type Result<T> = std::result::Result<T, MinutesError>;
