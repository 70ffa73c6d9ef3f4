//! Error types for Cloak core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these to
//! user-friendly messages and hints.

use thiserror::Error;

/// Result type alias for Cloak operations.
pub type Result<T> = std::result::Result<T, CloakError>;

/// Core error type for Cloak operations.
#[derive(Debug, Error)]
pub enum CloakError {
    /// Wrong key, or ciphertext that is corrupted / not produced by Cloak
    #[error("Incorrect key or corrupted data")]
    IncorrectKey,

    /// Internal encryption failure
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// Invalid user input (empty text, empty key, empty name)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A key with this name is already saved
    #[error("A key named \"{0}\" already exists")]
    DuplicateKeyName(String),

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}
