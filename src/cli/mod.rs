//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;
use std::path::PathBuf;

pub mod args;
pub mod avatar;
pub mod cache;
pub mod context;
pub mod favorite;
pub mod init;
pub mod org;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// Browsr CLI - companion for browsing organizations with local favorites
#[derive(Parser, Debug)]
#[command(name = "browsr")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "BROWSR_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "BROWSR_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override data directory (favorites storage)
    #[arg(long, global = true, env = "BROWSR_DATA_DIR", hide_env = true)]
    pub data_dir: Option<String>,

    /// Override API host (for testing against a local server)
    #[arg(long, global = true, env = "BROWSR_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "BROWSR_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Bypass the avatar cache, fetch fresh data
    #[arg(long, global = true, env = "BROWSR_NO_CACHE", hide_env = true)]
    pub no_cache: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize Browsr configuration
    Init,

    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// Browse organizations
    #[command(subcommand)]
    Org(OrgCommands),

    /// Manage favorite organizations
    #[command(subcommand)]
    Fav(FavCommands),

    /// Fetch avatar images
    #[command(subcommand)]
    Avatar(AvatarCommands),

    /// Manage the local avatar cache
    #[command(subcommand)]
    Cache(CacheCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   browsr completion bash > /etc/bash_completion.d/browsr
  zsh:    browsr completion zsh > \"${fpath[1]}/_browsr\"
  fish:   browsr completion fish > ~/.config/fish/completions/browsr.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Organization browsing subcommands
#[derive(Subcommand, Debug)]
pub enum OrgCommands {
    /// List organizations, with favorites marked
    List {
        /// Show only organizations whose login contains this substring
        #[arg(long, short = 'f')]
        filter: Option<String>,
    },
}

/// Favorites management subcommands
#[derive(Subcommand, Debug)]
pub enum FavCommands {
    /// List locally persisted favorites
    List,

    /// Mark an organization as favorite
    Add {
        /// Organization login or numeric ID
        org: String,
    },

    /// Remove an organization from favorites
    Remove {
        /// Organization login or numeric ID
        org: String,
    },

    /// Flip the favorite status of an organization
    Toggle {
        /// Organization login or numeric ID
        org: String,
    },

    /// Delete all persisted favorites
    Clear {
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Avatar subcommands
#[derive(Subcommand, Debug)]
pub enum AvatarCommands {
    /// Fetch one organization's avatar and write it to a file
    Get {
        /// Organization login or numeric ID
        org: String,

        /// Output file (defaults to <login>.png)
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,
    },

    /// Prefetch avatars for all listed organizations into the cache
    Sync,
}

/// Cache management subcommands
#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Show cache statistics
    Status,
    /// Clear all cached avatars
    Clear,
    /// Print cache directory path
    Path,
}
