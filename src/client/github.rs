//! GitHub-backed organizations API client implementation

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::{Client as HttpClient, StatusCode};

use super::{ApiResult, Organization, OrganizationsApi};
use crate::error::ApiError;

/// Default API base URL
const API_BASE_URL: &str = "https://api.github.com";

/// The API rejects requests without a User-Agent
const USER_AGENT: &str = concat!("browsr/", env!("CARGO_PKG_VERSION"));

/// Rate limit: 6 requests per second, matching the unauthenticated API's
/// tolerance for short bursts
const RATE_LIMIT_PER_SECOND: u32 = 6;

/// Organizations API client backed by the GitHub REST API
pub struct GithubClient {
    http: HttpClient,
    base_url: String,
    token: Option<String>,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl GithubClient {
    /// Create a new client against the default API host
    pub fn new(token: Option<String>) -> ApiResult<Self> {
        Self::with_host(token, None)
    }

    /// Create a new client with an optional API host override
    pub fn with_host(token: Option<String>, host: Option<String>) -> ApiResult<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let quota = Quota::per_second(std::num::NonZeroU32::new(RATE_LIMIT_PER_SECOND).unwrap());
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        Ok(Self {
            http,
            base_url: host.unwrap_or_else(|| API_BASE_URL.to_string()),
            token,
            rate_limiter,
        })
    }

    /// Issue a GET and return the raw response after status mapping
    async fn get(&self, url: &str) -> ApiResult<reqwest::Response> {
        self.rate_limiter.until_ready().await;

        let mut request = self
            .http
            .get(url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github+json");

        if let Some(ref token) = self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        match status {
            StatusCode::OK => Ok(response),
            StatusCode::NOT_FOUND => Err(ApiError::InvalidUrl),
            StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => Err(ApiError::Network(
                "API rate limit exceeded or access denied".to_string(),
            )),
            status => Err(ApiError::Status(status.as_u16())),
        }
    }
}

#[async_trait]
impl OrganizationsApi for GithubClient {
    async fn list_organizations(&self) -> ApiResult<Vec<Organization>> {
        let url = format!("{}/organizations", self.base_url);
        let response = self.get(&url).await?;

        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if body.is_empty() {
            return Err(ApiError::InvalidData);
        }

        serde_json::from_slice(&body).map_err(|e| ApiError::Decoding(e.to_string()))
    }

    async fn fetch_avatar(&self, org: &Organization) -> ApiResult<Vec<u8>> {
        let url = org.avatar_url.as_deref().ok_or(ApiError::InvalidUrl)?;
        let response = self.get(url).await?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if bytes.is_empty() {
            return Err(ApiError::InvalidData);
        }

        Ok(bytes.to_vec())
    }
}
