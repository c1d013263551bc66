//! Cache key generation using SHA-256 hashes

use sha2::{Digest, Sha256};

/// Generate a deterministic cache key from an avatar URL.
///
/// The key is a SHA-256 hash of the URL, hex encoded, so it is safe to use
/// as a file name regardless of what characters the URL contains.
pub fn cache_key(url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    format!("{:x}", hasher.finalize())
}
