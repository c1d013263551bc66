//! Favorites command implementations

use colored::Colorize;
use dialoguer::Confirm;
use tabled::Tabled;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat, org};
use crate::error::Result;
use crate::output::{json, table};

/// Favorite row for table display
#[derive(Tabled)]
struct FavRow {
    #[tabled(rename = "ORG ID")]
    organization_id: u64,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "AVATAR URL")]
    avatar_url: String,
}

/// List the locally persisted favorites (no network access)
pub fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let favorites = ctx.store()?.load();

    match ctx.format {
        OutputFormat::Table => {
            let rows: Vec<FavRow> = favorites
                .iter()
                .map(|f| FavRow {
                    organization_id: f.organization_id,
                    name: f.name.clone(),
                    avatar_url: f.avatar_url.clone(),
                })
                .collect();
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&favorites)?);
        }
    }

    Ok(())
}

/// Mark an organization as favorite
pub async fn add(opts: &GlobalOptions, reference: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let mut browser = ctx.browser()?;
    org::FetchSpinner::attach(&mut browser);
    browser.fetch_organizations().await?;

    let target = org::resolve(&browser, reference)?;
    if browser.is_favorite(target.id) {
        println!("{} is already a favorite", target.login.bold());
        return Ok(());
    }

    browser.add_to_favorites(&target);
    println!("{} Added {} to favorites", "★".yellow(), target.login.bold());
    Ok(())
}

/// Remove an organization from favorites
pub async fn remove(opts: &GlobalOptions, reference: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let mut browser = ctx.browser()?;
    org::FetchSpinner::attach(&mut browser);
    browser.fetch_organizations().await?;

    let target = org::resolve(&browser, reference)?;
    if !browser.is_favorite(target.id) {
        println!("{} is not a favorite", target.login.bold());
        return Ok(());
    }

    browser.remove_from_favorites(&target);
    println!("{} Removed {} from favorites", "✓".green(), target.login.bold());
    Ok(())
}

/// Flip the favorite status of an organization
pub async fn toggle(opts: &GlobalOptions, reference: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let mut browser = ctx.browser()?;
    org::FetchSpinner::attach(&mut browser);
    browser.fetch_organizations().await?;

    let target = org::resolve(&browser, reference)?;
    if browser.toggle_favorite(&target) {
        println!("{} Added {} to favorites", "★".yellow(), target.login.bold());
    } else {
        println!("{} Removed {} from favorites", "✓".green(), target.login.bold());
    }
    Ok(())
}

/// Delete all persisted favorites
pub fn clear(opts: &GlobalOptions, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let store = ctx.store()?;
    let count = store.load().len();

    if count == 0 {
        println!("No favorites to clear");
        return Ok(());
    }

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete all {} favorites?", count))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted");
            return Ok(());
        }
    }

    store.clear();
    println!("{} Cleared {} favorites", "✓".green(), count);
    Ok(())
}
