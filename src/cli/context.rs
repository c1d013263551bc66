//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, client construction, and store location.

use std::path::Path;
use std::sync::Arc;

use crate::browser::OrganizationBrowser;
use crate::cache::CachedAvatarClient;
use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::GithubClient;
use crate::config::Config;
use crate::error::Result;
use crate::store::FavoritesStore;

/// Context for command execution containing config, client, and runtime
/// options.
pub struct CommandContext {
    /// Loaded configuration (defaults when no file exists yet)
    pub config: Config,
    /// API client with avatar caching (Arc-wrapped for concurrent fetches)
    pub client: Arc<CachedAvatarClient<GithubClient>>,
    /// Resolved output format
    pub format: OutputFormat,
    /// Data directory override for the favorites slot
    data_dir: Option<String>,
}

impl CommandContext {
    /// Create a new command context with full initialization.
    ///
    /// This handles:
    /// - Loading config from path (or default location), tolerating absence
    /// - Resolving the API host (flag/env beats config, then the default)
    /// - Resolving the output format (flag/env, config preference, default)
    /// - Creating the API client with the caching wrapper
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_or_default(opts.config_ref());

        let api_host = opts
            .api_host
            .clone()
            .or_else(|| config.api_host.clone());

        let raw_client = GithubClient::with_host(config.token.clone(), api_host)?;
        let client = Arc::new(CachedAvatarClient::new(raw_client, !opts.no_cache));

        let format = opts
            .format
            .or_else(|| {
                config
                    .preferences
                    .format
                    .as_deref()
                    .and_then(OutputFormat::from_preference)
            })
            .unwrap_or_default();

        Ok(Self {
            config,
            client,
            format,
            data_dir: opts.data_dir.clone(),
        })
    }

    /// Open the favorites store at the configured location
    pub fn store(&self) -> Result<FavoritesStore> {
        match self.data_dir.as_deref() {
            Some(dir) => Ok(FavoritesStore::open_at(Path::new(dir))),
            None => FavoritesStore::open(),
        }
    }

    /// Build an organization browser over the context's client and store
    pub fn browser(&self) -> Result<OrganizationBrowser> {
        Ok(OrganizationBrowser::new(self.client.clone(), self.store()?))
    }
}
