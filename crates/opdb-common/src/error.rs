//! Error types for opdb

use thiserror::Error;

/// Result type alias for opdb operations
pub type Result<T> = std::result::Result<T, OpdbError>;

/// Main error type for opdb
#[derive(Error, Debug)]
pub enum OpdbError {
    /// Non-success HTTP status on a record or structure fetch
    #[error("Retrieval failed for {url}: HTTP {status}")]
    Retrieval { url: String, status: u16 },

    /// Malformed cross-reference line
    #[error("Parse error: {0}")]
    Parse(String),

    /// File system operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport failure (connection, timeout, body read)
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// CSV report writing failed
    #[error("Report error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl OpdbError {
    /// Create a retrieval error from a URL and status code
    pub fn retrieval(url: impl Into<String>, status: u16) -> Self {
        Self::Retrieval {
            url: url.into(),
            status,
        }
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
