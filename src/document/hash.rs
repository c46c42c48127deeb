//! Content digests for sanitized documents.
//!
//! A digest is recorded alongside each sanitized plan so that a stored
//! artifact can later be checked against the run that produced it.

use sha2::{Digest, Sha256};

/// Hasher for computing document digests.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentHasher;

impl DocumentHasher {
    /// Creates a new document hasher.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Computes the hex-encoded SHA-256 digest of an encoded document.
    #[must_use]
    pub fn digest(&self, content: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content);
        hex::encode(hasher.finalize())
    }

    /// Computes a short hash (first 12 characters) for display purposes.
    #[must_use]
    pub fn short_hash(&self, hash: &str) -> String {
        hash.chars().take(12).collect()
    }

    /// Compares two digests without short-circuiting on the first mismatch.
    #[must_use]
    pub fn digests_match(digest1: &str, digest2: &str) -> bool {
        if digest1.len() != digest2.len() {
            return false;
        }

        digest1
            .bytes()
            .zip(digest2.bytes())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}
