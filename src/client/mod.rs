//! Organizations API client

use async_trait::async_trait;

use crate::error::ApiError;

pub mod github;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use github::GithubClient;
#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockOrgClient;
pub use models::Organization;

/// Result type for API operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Organizations API client trait
///
/// The seam between the browser and the network. Implementations must keep
/// avatar failures isolated per call; they never affect list state.
#[async_trait]
pub trait OrganizationsApi: Send + Sync {
    /// Fetch the full list of organizations, in API order
    async fn list_organizations(&self) -> ApiResult<Vec<Organization>>;

    /// Fetch the raw avatar image bytes for one organization
    async fn fetch_avatar(&self, org: &Organization) -> ApiResult<Vec<u8>>;
}
