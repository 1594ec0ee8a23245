//! Password Hashing
//!
//! Stored form: `blake3$<salt>$<hex digest>` with a random salt per account.

use uuid::Uuid;

const SCHEME: &str = "blake3";

/// Hashes and verifies passwords
pub trait CredentialHasher: Send + Sync {
    fn hash(&self, password: &str) -> String;

    /// Malformed stored values never verify
    fn verify(&self, password: &str, stored: &str) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Hasher;

impl Blake3Hasher {
    fn digest(salt: &str, password: &str) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(salt.as_bytes());
        hasher.update(b"$");
        hasher.update(password.as_bytes());
        hasher.finalize()
    }
}

impl CredentialHasher for Blake3Hasher {
    fn hash(&self, password: &str) -> String {
        let salt = Uuid::new_v4().simple().to_string();
        let digest = Self::digest(&salt, password);
        format!("{}${}${}", SCHEME, salt, digest.to_hex())
    }

    fn verify(&self, password: &str, stored: &str) -> bool {
        let mut parts = stored.splitn(3, '$');
        let (Some(SCHEME), Some(salt), Some(hex)) = (parts.next(), parts.next(), parts.next()) else {
            return false;
        };
        match blake3::Hash::from_hex(hex) {
            // blake3::Hash equality is constant-time
            Ok(expected) => Self::digest(salt, password) == expected,
            Err(_) => false,
        }
    }
}
