//! Cached wrapper for the organizations API client
//!
//! Serves avatar images from local storage when available. Organization
//! listing always passes through: the browser's fetch semantics require
//! fresh data on every call.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::cache::{CacheStorage, cache_key};
use crate::client::{ApiResult, Organization, OrganizationsApi};

/// Cached wrapper for any [`OrganizationsApi`] implementation.
///
/// The cache can be disabled via the `enabled` flag (for `--no-cache`).
/// The storage handle is wrapped in a Mutex for thread-safety.
pub struct CachedAvatarClient<C: OrganizationsApi> {
    inner: Arc<C>,
    cache: Option<Mutex<CacheStorage>>,
}

impl<C: OrganizationsApi> CachedAvatarClient<C> {
    /// Create a new cached client wrapper.
    ///
    /// # Arguments
    /// * `inner` - The underlying API client to wrap
    /// * `enabled` - Whether caching is enabled (false for --no-cache)
    pub fn new(inner: C, enabled: bool) -> Self {
        let cache = if enabled {
            CacheStorage::open().ok().map(Mutex::new)
        } else {
            None
        };
        Self {
            inner: Arc::new(inner),
            cache,
        }
    }

    #[cfg(test)]
    fn with_storage(inner: C, storage: Option<CacheStorage>) -> Self {
        Self {
            inner: Arc::new(inner),
            cache: storage.map(Mutex::new),
        }
    }

    /// Try to get cached avatar bytes
    fn get_cached(&self, key: &str) -> Option<Vec<u8>> {
        let cache = self.cache.as_ref()?;
        let guard = cache.lock().ok()?;
        guard.get(key).ok().flatten()
    }

    /// Store avatar bytes in the cache
    fn set_cached(&self, key: &str, url: &str, data: &[u8]) {
        if let Some(ref cache) = self.cache
            && let Ok(guard) = cache.lock()
        {
            let _ = guard.put(key, url, data);
        }
    }
}

#[async_trait]
impl<C: OrganizationsApi + 'static> OrganizationsApi for CachedAvatarClient<C> {
    /// Organization listing - NEVER cached (every fetch replaces the list)
    async fn list_organizations(&self) -> ApiResult<Vec<Organization>> {
        self.inner.list_organizations().await
    }

    async fn fetch_avatar(&self, org: &Organization) -> ApiResult<Vec<u8>> {
        let Some(url) = org.avatar_url.as_deref() else {
            // No URL means nothing to cache; let the inner client report it
            return self.inner.fetch_avatar(org).await;
        };

        let key = cache_key(url);
        if let Some(cached) = self.get_cached(&key) {
            log::debug!("Avatar cache hit: {}", org.login);
            return Ok(cached);
        }

        let bytes = self.inner.fetch_avatar(org).await?;
        self.set_cached(&key, url, &bytes);
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockOrgClient;
    use tempfile::TempDir;

    fn org(id: u64, login: &str) -> Organization {
        Organization {
            id,
            login: login.to_string(),
            avatar_url: Some(format!("http://avatars.test/{id}")),
        }
    }

    fn create_test_client(enabled: bool) -> (CachedAvatarClient<MockOrgClient>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let mock = MockOrgClient::new()
            .with_orgs(vec![org(1, "acme")])
            .with_avatar(1, vec![9, 9, 9]);

        let storage = if enabled {
            CacheStorage::open_at(temp_dir.path()).ok()
        } else {
            None
        };

        (CachedAvatarClient::with_storage(mock, storage), temp_dir)
    }

    #[tokio::test]
    async fn test_list_never_cached() {
        let (client, _dir) = create_test_client(true);

        let _ = client.list_organizations().await;
        let _ = client.list_organizations().await;

        let counts = client.inner.call_counts().await;
        assert_eq!(counts.list_organizations, 2);
    }

    #[tokio::test]
    async fn test_avatar_served_from_cache_on_second_fetch() {
        let (client, _dir) = create_test_client(true);
        let target = org(1, "acme");

        let first = client.fetch_avatar(&target).await.unwrap();
        let second = client.fetch_avatar(&target).await.unwrap();
        assert_eq!(first, second);

        // Only the first call should have gone to the inner client
        let counts = client.inner.call_counts().await;
        assert_eq!(counts.fetch_avatar, 1);
    }

    #[tokio::test]
    async fn test_cache_disabled_bypasses_cache() {
        let (client, _dir) = create_test_client(false);
        let target = org(1, "acme");

        let _ = client.fetch_avatar(&target).await;
        let _ = client.fetch_avatar(&target).await;

        let counts = client.inner.call_counts().await;
        assert_eq!(counts.fetch_avatar, 2);
    }

    #[tokio::test]
    async fn test_avatar_failure_is_not_cached() {
        let temp_dir = TempDir::new().unwrap();
        let mock = MockOrgClient::new(); // no avatar bytes configured
        let storage = CacheStorage::open_at(temp_dir.path()).ok();
        let client = CachedAvatarClient::with_storage(mock, storage);

        assert!(client.fetch_avatar(&org(5, "ghost")).await.is_err());
        assert!(client.fetch_avatar(&org(5, "ghost")).await.is_err());

        let counts = client.inner.call_counts().await;
        assert_eq!(counts.fetch_avatar, 2);
    }
}
