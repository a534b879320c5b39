//! Error types for the core library.
//!
//! Ring operations never fail; errors only arise while turning configuration
//! into a ring (hash names, config files).

use thiserror::Error;

/// Result type alias for the core library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the core library.
#[derive(Debug, Error)]
pub enum Error {
    /// Hash algorithm name not recognized
    #[error("unknown hash algorithm: {0}")]
    UnknownHash(String),
    /// Malformed ring configuration
    #[error("invalid ring config: {0}")]
    Config(#[from] serde_json::Error),
    /// Config file could not be read
    #[error("failed to read ring config: {0}")]
    Io(#[from] std::io::Error),
}
