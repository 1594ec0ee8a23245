//! Credential Handling
//!
//! Passwords are stored as salted hashes behind a replaceable hasher.

mod hasher;

pub use hasher::{Blake3Hasher, CredentialHasher};

/// Shortest password accepted at signup and login
pub const MIN_PASSWORD_LEN: usize = 6;

/// Canonical form used for lookups and storage
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
