//! Age encryption/decryption for text.
//!
//! This module wraps the Age encryption library for encrypting and
//! decrypting text using passphrase-based encryption. Output is ASCII
//! armored so ciphertext is a printable string that survives clipboards,
//! text files, and retyping.
//!
//! Note: Age uses scrypt internally for passphrase-based encryption and
//! embeds its own salt in the ciphertext, so every call with the same
//! inputs produces a different (but equivalent) result.

use std::io::{Read, Write};
use std::iter;

use age::armor::{ArmoredReader, ArmoredWriter, Format};
use age::secrecy::SecretString;

use crate::error::{CloakError, Result};

/// First line of armored Age output. Used to distinguish "looks like
/// ciphertext" from "looks like plaintext" for UI hinting only.
pub const ARMOR_HEADER: &str = "-----BEGIN AGE ENCRYPTED FILE-----";

/// Encrypt text using Age passphrase-based encryption.
///
/// # Arguments
///
/// * `plaintext` - The text to encrypt (may be empty)
/// * `secret` - The passphrase; must be non-empty
///
/// # Returns
///
/// Returns an armored ciphertext string that embeds everything needed for
/// later decryption (salt, header, authentication tag).
///
/// # Examples
///
/// ```
/// use cloak_core::crypto::{encrypt_text, ARMOR_HEADER};
///
/// let ciphertext = encrypt_text("secret data", "my-secure-passphrase").unwrap();
/// assert!(ciphertext.starts_with(ARMOR_HEADER));
/// ```
pub fn encrypt_text(plaintext: &str, secret: &str) -> Result<String> {
    if secret.is_empty() {
        return Err(CloakError::InvalidInput("Key cannot be empty".to_string()));
    }

    let encryptor = age::Encryptor::with_user_passphrase(SecretString::from(secret.to_string()));

    let mut armored = Vec::new();
    let armor = ArmoredWriter::wrap_output(&mut armored, Format::AsciiArmor)
        .map_err(|e| CloakError::Crypto(format!("Failed to start armored output: {}", e)))?;

    let mut writer = encryptor
        .wrap_output(armor)
        .map_err(|e| CloakError::Crypto(format!("Failed to create encryptor: {}", e)))?;

    writer
        .write_all(plaintext.as_bytes())
        .map_err(|e| CloakError::Crypto(format!("Encryption write failed: {}", e)))?;

    writer
        .finish()
        .and_then(|armor| armor.finish())
        .map_err(|e| CloakError::Crypto(format!("Encryption finish failed: {}", e)))?;

    String::from_utf8(armored)
        .map_err(|e| CloakError::Crypto(format!("Armored output was not ASCII: {}", e)))
}

/// Decrypt armored Age ciphertext back into text.
///
/// Authentication is the primary corruption signal: a wrong key or a
/// tampered payload fails the Age authentication check. An authenticated
/// empty payload is valid empty plaintext, not an error.
///
/// # Errors
///
/// Returns `CloakError::IncorrectKey` if:
/// - The key is wrong
/// - The ciphertext is corrupted or was not produced by Age
/// - The authenticated payload is not valid UTF-8 text
///
/// # Examples
///
/// ```
/// use cloak_core::crypto::{decrypt_text, encrypt_text};
///
/// let ciphertext = encrypt_text("secret data", "my-secure-passphrase").unwrap();
/// let plaintext = decrypt_text(&ciphertext, "my-secure-passphrase").unwrap();
/// assert_eq!(plaintext, "secret data");
/// ```
pub fn decrypt_text(ciphertext: &str, secret: &str) -> Result<String> {
    if secret.is_empty() {
        return Err(CloakError::InvalidInput("Key cannot be empty".to_string()));
    }

    // A failure here means the input is not Age data at all.
    let decryptor = age::Decryptor::new(ArmoredReader::new(ciphertext.as_bytes()))
        .map_err(|_| CloakError::IncorrectKey)?;

    let identity = age::scrypt::Identity::new(SecretString::from(secret.to_string()));
    let mut reader = decryptor
        .decrypt(iter::once(&identity as &dyn age::Identity))
        .map_err(|e| match e {
            age::DecryptError::NoMatchingKeys
            | age::DecryptError::DecryptionFailed
            | age::DecryptError::KeyDecryptionFailed => CloakError::IncorrectKey,
            _ => CloakError::Crypto(format!("Decryption failed: {}", e)),
        })?;

    let mut decrypted = Vec::new();
    // Payload corruption past the header surfaces as a read error.
    reader
        .read_to_end(&mut decrypted)
        .map_err(|_| CloakError::IncorrectKey)?;

    String::from_utf8(decrypted).map_err(|_| CloakError::IncorrectKey)
}

/// Cheap format check: does this text look like Cloak ciphertext?
///
/// For UI hinting only - never a substitute for attempting decryption and
/// checking its outcome.
pub fn is_plausible_ciphertext(text: &str) -> bool {
    text.trim_start().starts_with(ARMOR_HEADER)
}
