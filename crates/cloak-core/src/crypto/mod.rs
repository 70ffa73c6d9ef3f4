//! Cryptographic operations for Cloak.
//!
//! This module wraps well-audited libraries rather than implementing any
//! primitive itself:
//! - **Age**: Passphrase-based authenticated encryption (https://age-encryption.org/)
//! - **getrandom**: OS-level CSPRNG for key generation
//!
//! ## Security Model
//!
//! - Passphrase-based encryption using Age's scrypt recipient
//! - Ciphertext is ASCII-armored so it is safe to display, copy, and retype
//! - Secrets zeroized from memory on drop
//! - No plaintext secrets stored outside the key store file
//!
//! ## Threat Model
//!
//! We defend against:
//! - Theft of ciphertext
//! - Offline brute-force attacks on the passphrase
//!
//! We do NOT defend against:
//! - Compromised OS / keylogger
//! - An attacker who can read the key store file

pub mod cipher;
pub mod keygen;
pub mod secret;

pub use cipher::{decrypt_text, encrypt_text, is_plausible_ciphertext, ARMOR_HEADER};
pub use keygen::{generate_key, DEFAULT_KEY_LENGTH};
pub use secret::Secret;
