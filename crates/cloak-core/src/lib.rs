//! # Cloak Core
//!
//! Core library for Cloak - a local tool for passphrase-based text
//! encryption with a named key store.
//!
//! This crate provides the encryption contract and key management logic
//! independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **crypto**: Cipher adapter (Age) and key generation
//! - **keystore**: Named keys persisted as a single JSON file
//! - **error**: Error hierarchy shared by all operations
//!
//! The cipher and key generator are pure functions; the key store is the
//! only component that touches the filesystem.

pub mod crypto;
pub mod error;
pub mod keystore;

pub use error::{CloakError, Result};
pub use keystore::{KeyRecord, KeyStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
