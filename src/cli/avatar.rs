//! Avatar command implementations

use std::path::{Path, PathBuf};

use colored::Colorize;
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::{CommandContext, GlobalOptions, org};
use crate::client::OrganizationsApi;
use crate::error::Result;

/// How many avatar downloads run at once during sync.
///
/// Avatar fetches are independent of each other and of the organization list.
const SYNC_CONCURRENCY: usize = 4;

/// Fetch one organization's avatar and write it to a file
pub async fn get(opts: &GlobalOptions, reference: &str, out: Option<&Path>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let mut browser = ctx.browser()?;
    org::FetchSpinner::attach(&mut browser);
    browser.fetch_organizations().await?;

    let target = org::resolve(&browser, reference)?;
    let bytes = ctx.client.fetch_avatar(&target).await?;

    let path = match out {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(format!("{}.png", target.login)),
    };
    std::fs::write(&path, &bytes)?;

    println!(
        "{} Saved avatar for {} to {} ({} bytes)",
        "✓".green(),
        target.login.bold(),
        path.display(),
        bytes.len()
    );
    Ok(())
}

/// Prefetch avatars for all listed organizations into the cache
pub async fn sync(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let mut browser = ctx.browser()?;
    org::FetchSpinner::attach(&mut browser);
    browser.fetch_organizations().await?;

    let targets: Vec<_> = browser
        .organizations()
        .iter()
        .filter(|org| org.avatar_url.is_some())
        .cloned()
        .collect();
    let skipped = browser.len() - targets.len();

    if targets.is_empty() {
        println!("No avatars to fetch");
        return Ok(());
    }

    let bar = ProgressBar::new(targets.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}").expect("valid template"),
    );

    let client = ctx.client.clone();
    let results: Vec<(String, bool)> = stream::iter(targets)
        .map(|org| {
            let client = client.clone();
            let bar = bar.clone();
            async move {
                let outcome = client.fetch_avatar(&org).await;
                if let Err(ref err) = outcome {
                    log::warn!("Avatar fetch failed for {}: {}", org.login, err);
                }
                bar.inc(1);
                (org.login, outcome.is_ok())
            }
        })
        .buffer_unordered(SYNC_CONCURRENCY)
        .collect()
        .await;
    bar.finish_and_clear();

    let fetched = results.iter().filter(|(_, ok)| *ok).count();
    let failed: Vec<&str> = results
        .iter()
        .filter(|(_, ok)| !ok)
        .map(|(login, _)| login.as_str())
        .collect();

    println!("{} Fetched {} avatars", "✓".green(), fetched);
    if skipped > 0 {
        println!("  {} organizations have no avatar URL", skipped);
    }
    if !failed.is_empty() {
        println!("  {} failed: {}", "✗".red(), failed.join(", "));
    }

    Ok(())
}
