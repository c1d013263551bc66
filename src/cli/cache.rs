//! Cache management commands

use crate::cache::CacheStorage;
use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::error::Result;

/// Show cache status/statistics
pub fn status(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let cache = CacheStorage::open()?;
    let stats = cache.stats()?;

    match ctx.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "total_entries": stats.total_entries,
                "total_size_bytes": stats.total_size_bytes,
                "total_size_human": format_size(stats.total_size_bytes),
                "oldest_entry_timestamp": stats.oldest_entry,
                "newest_entry_timestamp": stats.newest_entry,
                "path": CacheStorage::cache_dir()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|_| "unknown".to_string()),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        _ => {
            let path = CacheStorage::cache_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "unknown".to_string());

            println!("Avatar Cache Status");
            println!("────────────────────────────────────────");
            println!("Location:       {}", path);
            println!("Cached avatars: {}", stats.total_entries);
            println!("Total size:     {}", format_size(stats.total_size_bytes));

            if let Some(oldest) = stats.oldest_entry {
                println!("Oldest entry:   {}", format_timestamp(oldest));
            }

            if let Some(newest) = stats.newest_entry {
                println!("Newest entry:   {}", format_timestamp(newest));
            }
        }
    }

    Ok(())
}

/// Clear all cached avatars
pub fn clear(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let cache = CacheStorage::open()?;
    let stats = cache.clear_all()?;

    match ctx.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "entries_removed": stats.entries_removed,
                "success": true,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        _ => {
            if stats.entries_removed > 0 {
                println!("Cleared {} cached avatars", stats.entries_removed);
            } else {
                println!("Cache was already empty");
            }
        }
    }

    Ok(())
}

/// Show cache path
pub fn path() -> Result<()> {
    let path = CacheStorage::cache_dir()?;
    println!("{}", path.display());
    Ok(())
}

/// Format bytes as human-readable size
fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;
    const GB: usize = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

/// Format a Unix timestamp in local time
fn format_timestamp(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|d| {
            d.with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M")
                .to_string()
        })
        .unwrap_or_else(|| "unknown".to_string())
}
