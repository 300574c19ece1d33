use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Password held by the login form.
///
/// The buffer is zeroed on drop and whenever it is replaced by an edit, so
/// earlier keystrokes do not linger in freed memory. `Debug` and `Display`
/// never print the contents.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
pub struct SecureCredential {
    data: String,
}

impl SecureCredential {
    pub fn new(data: String) -> Self {
        Self { data }
    }

    /// Swap in a new value, zeroing the previous one first
    pub fn replace(&mut self, data: String) {
        self.data.zeroize();
        self.data = data;
    }

    pub fn clear(&mut self) {
        self.data.zeroize();
    }

    /// Borrow the secret. Do not keep the reference past the credential's
    /// lifetime.
    pub fn expose_secret(&self) -> &str {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Clone for SecureCredential {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }
}

impl From<String> for SecureCredential {
    fn from(data: String) -> Self {
        Self::new(data)
    }
}

impl From<&str> for SecureCredential {
    fn from(data: &str) -> Self {
        Self::new(data.to_string())
    }
}

impl fmt::Debug for SecureCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureCredential")
            .field("len", &self.data.len())
            .field("data", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for SecureCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[SecureCredential: {} bytes]", self.data.len())
    }
}

impl PartialEq for SecureCredential {
    fn eq(&self, other: &Self) -> bool {
        self.data.len() == other.data.len()
            && self.data.as_bytes() == other.data.as_bytes()
    }
}

impl Eq for SecureCredential {}
