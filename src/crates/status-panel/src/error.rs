//! Error types for the status panel

use thiserror::Error;

/// Errors that can occur in the status panel application
#[derive(Debug, Error)]
pub enum PanelError {
    /// IO error (terminal setup, config files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Result type for status panel operations
pub type Result<T> = std::result::Result<T, PanelError>;

/// The single, collapsed failure kind of a backend probe.
///
/// Network failures, transport errors and undecodable bodies all end up
/// here; callers never distinguish between them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    #[error("probe failed: {0}")]
    ProbeFailed(String),
}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        Self::ProbeFailed(err.to_string())
    }
}

impl From<serde_json::Error> for ProbeError {
    fn from(err: serde_json::Error) -> Self {
        Self::ProbeFailed(format!("malformed JSON body: {}", err))
    }
}
