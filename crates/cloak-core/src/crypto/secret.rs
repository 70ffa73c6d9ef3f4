//! In-memory secret handling.

use zeroize::ZeroizeOnDrop;

/// A passphrase or generated key held in memory.
///
/// The backing string is zeroized when dropped, and the Debug
/// representation never exposes the value.
#[derive(Clone, ZeroizeOnDrop)]
pub struct Secret {
    value: String,
}

impl Secret {
    pub fn new(value: String) -> Self {
        Self { value }
    }

    /// Borrow the secret for an immediate cipher operation.
    ///
    /// Avoid storing or logging the returned value.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secret")
            .field("value", &"[REDACTED]")
            .finish()
    }
}
