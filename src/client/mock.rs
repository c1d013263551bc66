//! Mock organizations API client for testing
//!
//! Provides a configurable implementation of [`OrganizationsApi`] for unit
//! testing without making real API calls.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::{ApiResult, Organization, OrganizationsApi};
use crate::error::ApiError;

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockOrgClient::new()
///     .with_orgs(vec![Organization { id: 1, login: "acme".into(), avatar_url: None }]);
///
/// let orgs = mock.list_organizations().await?;
/// assert_eq!(orgs.len(), 1);
/// ```
pub struct MockOrgClient {
    /// Organizations to return from list_organizations
    orgs: Arc<Mutex<Vec<Organization>>>,
    /// Avatar bytes per organization id
    avatars: Arc<Mutex<HashMap<u64, Vec<u8>>>>,
    /// Error to return from the next list call - consumed on first use
    list_error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub list_organizations: usize,
    pub fetch_avatar: usize,
}

impl Default for MockOrgClient {
    fn default() -> Self {
        Self {
            orgs: Arc::new(Mutex::new(Vec::new())),
            avatars: Arc::new(Mutex::new(HashMap::new())),
            list_error: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
        }
    }
}

impl MockOrgClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set organizations returned by list_organizations
    pub fn with_orgs(self, orgs: Vec<Organization>) -> Self {
        Self {
            orgs: Arc::new(Mutex::new(orgs)),
            ..self
        }
    }

    /// Set avatar bytes served for an organization id
    pub fn with_avatar(self, org_id: u64, bytes: Vec<u8>) -> Self {
        // Sole owner during construction; the lock is uncontended
        self.avatars
            .try_lock()
            .expect("mock configured while in use")
            .insert(org_id, bytes);
        self
    }

    /// Fail the next list_organizations call with the given error
    pub fn with_list_error(self, error: ApiError) -> Self {
        Self {
            list_error: Arc::new(Mutex::new(Some(error))),
            ..self
        }
    }

    /// Get current call counts
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Queue an error for the next list_organizations call
    pub async fn fail_next_list(&self, error: ApiError) {
        *self.list_error.lock().await = Some(error);
    }

    /// Replace the configured organizations
    pub async fn set_orgs(&self, orgs: Vec<Organization>) {
        *self.orgs.lock().await = orgs;
    }
}

#[async_trait]
impl OrganizationsApi for MockOrgClient {
    async fn list_organizations(&self) -> ApiResult<Vec<Organization>> {
        self.call_count.lock().await.list_organizations += 1;

        if let Some(error) = self.list_error.lock().await.take() {
            return Err(error);
        }

        Ok(self.orgs.lock().await.clone())
    }

    async fn fetch_avatar(&self, org: &Organization) -> ApiResult<Vec<u8>> {
        self.call_count.lock().await.fetch_avatar += 1;

        if org.avatar_url.is_none() {
            return Err(ApiError::InvalidUrl);
        }

        self.avatars
            .lock()
            .await
            .get(&org.id)
            .cloned()
            .ok_or(ApiError::InvalidData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org(id: u64, login: &str) -> Organization {
        Organization {
            id,
            login: login.to_string(),
            avatar_url: Some(format!("http://avatars.test/{id}")),
        }
    }

    #[tokio::test]
    async fn test_mock_returns_configured_orgs() {
        let mock = MockOrgClient::new().with_orgs(vec![org(1, "acme"), org(2, "beta")]);

        let orgs = mock.list_organizations().await.unwrap();
        assert_eq!(orgs.len(), 2);

        let counts = mock.call_counts().await;
        assert_eq!(counts.list_organizations, 1);
    }

    #[tokio::test]
    async fn test_mock_error_is_consumed_once() {
        let mock = MockOrgClient::new()
            .with_orgs(vec![org(1, "acme")])
            .with_list_error(ApiError::InvalidData);

        assert!(mock.list_organizations().await.is_err());
        assert!(mock.list_organizations().await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_avatar_round_trip() {
        let mock = MockOrgClient::new()
            .with_orgs(vec![org(1, "acme")])
            .with_avatar(1, vec![1, 2, 3]);

        let bytes = mock.fetch_avatar(&org(1, "acme")).await.unwrap();
        assert_eq!(bytes, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_mock_avatar_missing_url() {
        let mock = MockOrgClient::new();
        let no_avatar = Organization {
            id: 9,
            login: "bare".to_string(),
            avatar_url: None,
        };

        let err = mock.fetch_avatar(&no_avatar).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl));
    }
}
