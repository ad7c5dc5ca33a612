use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("text is required")]
    EmptyInput,

    #[error("invalid hex token: {token}")]
    InvalidHex { token: String },

    #[error("invalid binary token: {token}")]
    InvalidBinary { token: String },

    #[error("code point {0:#x} is not a valid character")]
    InvalidCodePoint(u32),
}

/// Failures of the remote sentiment classifier. These never reach the caller;
/// they are swapped for the keyword heuristic.
#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("classifier timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("classifier returned status {0}")]
    Status(u16),

    #[error("malformed classifier response: {0}")]
    Malformed(String),

    #[error("classifier disabled")]
    Disabled,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{key} has an invalid value: '{value}'")]
    InvalidVar { key: String, value: String },
}

pub type Result<T> = std::result::Result<T, PipelineError>;
