//! Status command implementation

use colored::Colorize;

use crate::cache::CacheStorage;
use crate::cli::{CommandContext, GlobalOptions};
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "Browsr Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not created yet - run 'browsr init')".dimmed()
        );
    }

    let ctx = CommandContext::new(opts)?;

    // API host
    match opts.api_host_ref().or(ctx.config.api_host.as_deref()) {
        Some(host) => println!("{} API host override: {}", "✓".green(), host),
        None => println!("{} Using default API host", "○".dimmed()),
    }

    // Token status
    if ctx.config.token.is_some() {
        println!("{} API token configured", "✓".green());
    } else {
        println!(
            "{} No API token (unauthenticated rate limits apply)",
            "○".dimmed()
        );
    }

    // Favorites
    let store = ctx.store()?;
    let favorites = store.load();
    println!(
        "{} Favorites: {} ({})",
        "✓".green(),
        favorites.len(),
        store.path().display()
    );

    // Avatar cache
    match CacheStorage::open().and_then(|c| c.stats()) {
        Ok(stats) => println!("{} Cached avatars: {}", "✓".green(), stats.total_entries),
        Err(err) => println!("{} Avatar cache unavailable: {}", "⚠".yellow(), err),
    }

    Ok(())
}
