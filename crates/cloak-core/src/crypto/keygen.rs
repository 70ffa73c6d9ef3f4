//! Random key generation.
//!
//! Keys are random bytes from the OS CSPRNG, base64-encoded so the result
//! is safe to display, copy, and retype.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{CloakError, Result};

/// Default key length in random bytes (256 bits).
pub const DEFAULT_KEY_LENGTH: usize = 32;

/// Generate a random key of `length` bytes, encoded as standard base64.
///
/// Uses the operating system's cryptographically secure random source,
/// never a general-purpose PRNG.
///
/// # Errors
///
/// Returns `CloakError::InvalidInput` if `length` is zero, and
/// `CloakError::Crypto` if the OS random source fails (effectively
/// unreachable on supported platforms).
///
/// # Examples
///
/// ```
/// use cloak_core::crypto::{generate_key, DEFAULT_KEY_LENGTH};
///
/// let key = generate_key(DEFAULT_KEY_LENGTH).unwrap();
/// assert_eq!(key.len(), 44); // 32 bytes -> 44 base64 characters
/// ```
pub fn generate_key(length: usize) -> Result<String> {
    if length == 0 {
        return Err(CloakError::InvalidInput(
            "Key length must be at least 1 byte".to_string(),
        ));
    }

    let mut bytes = vec![0u8; length];
    getrandom::getrandom(&mut bytes)
        .map_err(|e| CloakError::Crypto(format!("Random source failed: {}", e)))?;

    Ok(STANDARD.encode(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_length_key() {
        let key = generate_key(DEFAULT_KEY_LENGTH).unwrap();
        // 32 bytes -> ceil(32/3)*4 = 44 characters with padding
        assert_eq!(key.len(), 44);
    }

    #[test]
    fn test_key_uses_base64_alphabet() {
        let key = generate_key(DEFAULT_KEY_LENGTH).unwrap();
        assert!(key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '='));
    }

    #[test]
    fn test_successive_keys_differ() {
        let first = generate_key(DEFAULT_KEY_LENGTH).unwrap();
        let second = generate_key(DEFAULT_KEY_LENGTH).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_zero_length_rejected() {
        let result = generate_key(0);
        assert!(matches!(result, Err(CloakError::InvalidInput(_))));
    }

    #[test]
    fn test_custom_length() {
        let key = generate_key(16).unwrap();
        assert_eq!(key.len(), 24); // 16 bytes -> 24 base64 characters

        let decoded = STANDARD.decode(&key).unwrap();
        assert_eq!(decoded.len(), 16);
    }
}
