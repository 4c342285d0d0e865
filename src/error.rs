use thiserror::Error;

/// Custom error types for mandi
#[derive(Debug, Error)]
pub enum MandiError {
    #[error("invalid server URL: {0}")]
    InvalidServerUrl(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
