//! Local cache for avatar images
//!
//! SQLite-backed index with file blob storage for large images. There is no
//! eviction policy: a re-fetched avatar replaces the stored one in place.

pub mod client;
pub mod key;
pub mod storage;

pub use client::CachedAvatarClient;
pub use key::cache_key;
pub use storage::CacheStorage;
