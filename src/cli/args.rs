//! Common CLI types and global options

use crate::cli::Cli;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format - one row per entry (default)
    #[default]
    Table,
    /// JSON format - structured for scripts/APIs
    Json,
}

impl OutputFormat {
    /// Parse a config-file preference value
    pub fn from_preference(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Global CLI options passed to all command handlers.
///
/// Consolidates the global flags into a single unit so handler signatures
/// stay small. Precedence for the output format is CLI flag > environment
/// variable > config file preference > default.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format override (config preference applies when unset)
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.browsr/config.yaml)
    pub config: Option<String>,

    /// Custom data directory for the favorites slot
    pub data_dir: Option<String>,

    /// Custom API host for development/testing
    pub api_host: Option<String>,

    /// Bypass the avatar cache and fetch fresh data
    pub no_cache: bool,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    ///
    /// This is the primary constructor, called once in main.rs after parsing.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            data_dir: cli.data_dir.clone(),
            api_host: cli.api_host.clone(),
            no_cache: cli.no_cache,
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get data directory as `Option<&str>`.
    pub fn data_dir_ref(&self) -> Option<&str> {
        self.data_dir.as_deref()
    }

    /// Get API host override as `Option<&str>`.
    pub fn api_host_ref(&self) -> Option<&str> {
        self.api_host.as_deref()
    }
}
