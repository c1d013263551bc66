//! Organization command implementations

use std::time::Duration;

use indicatif::ProgressBar;
use serde::Serialize;
use tabled::Tabled;

use crate::browser::{BrowserObserver, OrganizationBrowser};
use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::Organization;
use crate::error::{Error, Result};
use crate::output::{json, table};

/// Spinner driven by the browser's loading notifications
pub(crate) struct FetchSpinner {
    bar: ProgressBar,
}

impl FetchSpinner {
    /// Subscribe a spinner to a browser's fetch lifecycle
    pub(crate) fn attach(browser: &mut OrganizationBrowser) {
        let bar = ProgressBar::new_spinner();
        bar.set_message("Fetching organizations...");
        browser.subscribe(Box::new(FetchSpinner { bar }));
    }
}

impl BrowserObserver for FetchSpinner {
    fn loading_started(&self) {
        self.bar.enable_steady_tick(Duration::from_millis(80));
    }

    fn loading_ended(&self) {
        self.bar.finish_and_clear();
    }
}

/// Organization row for table display
#[derive(Tabled)]
struct OrgRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "LOGIN")]
    login: String,
    #[tabled(rename = "FAV")]
    favorite: String,
}

/// Organization entry for JSON output
#[derive(Serialize)]
struct OrgListing {
    id: u64,
    login: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar_url: Option<String>,
    favorite: bool,
}

/// Run the org list command
pub async fn list(opts: &GlobalOptions, filter: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let mut browser = ctx.browser()?;
    FetchSpinner::attach(&mut browser);

    browser.fetch_organizations().await?;

    // Client-side substring filter; the list itself stays untouched
    let matches: Vec<&Organization> = browser
        .organizations()
        .iter()
        .filter(|org| match filter {
            Some(needle) => org.login.to_lowercase().contains(&needle.to_lowercase()),
            None => true,
        })
        .collect();

    match ctx.format {
        OutputFormat::Table => {
            let rows: Vec<OrgRow> = matches
                .iter()
                .map(|org| OrgRow {
                    id: org.id,
                    login: org.login.clone(),
                    favorite: if browser.is_favorite(org.id) {
                        "★".to_string()
                    } else {
                        String::new()
                    },
                })
                .collect();
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Json => {
            let listings: Vec<OrgListing> = matches
                .iter()
                .map(|org| OrgListing {
                    id: org.id,
                    login: org.login.clone(),
                    avatar_url: org.avatar_url.clone(),
                    favorite: browser.is_favorite(org.id),
                })
                .collect();
            println!("{}", json::format_json(&listings)?);
        }
    }

    Ok(())
}

/// Resolve a user-supplied organization reference (login or numeric ID)
/// against the browser's fetched list
pub fn resolve(browser: &OrganizationBrowser, reference: &str) -> Result<Organization> {
    let by_id = reference.parse::<u64>().ok();

    browser
        .organizations()
        .iter()
        .find(|org| Some(org.id) == by_id || org.login.eq_ignore_ascii_case(reference))
        .cloned()
        .ok_or_else(|| Error::Other(format!("Organization not found: {}", reference)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockOrgClient;
    use crate::store::FavoritesStore;
    use std::sync::Arc;
    use tempfile::TempDir;

    async fn fetched_browser() -> (OrganizationBrowser, TempDir) {
        let mock = MockOrgClient::new().with_orgs(vec![
            Organization {
                id: 1,
                login: "acme".to_string(),
                avatar_url: None,
            },
            Organization {
                id: 2,
                login: "Beta".to_string(),
                avatar_url: None,
            },
        ]);
        let dir = TempDir::new().unwrap();
        let store = FavoritesStore::open_at(dir.path());
        let mut browser = OrganizationBrowser::new(Arc::new(mock), store);
        browser.fetch_organizations().await.unwrap();
        (browser, dir)
    }

    #[tokio::test]
    async fn test_resolve_by_login_case_insensitive() {
        let (browser, _dir) = fetched_browser().await;

        let org = resolve(&browser, "beta").unwrap();
        assert_eq!(org.id, 2);
    }

    #[tokio::test]
    async fn test_resolve_by_numeric_id() {
        let (browser, _dir) = fetched_browser().await;

        let org = resolve(&browser, "1").unwrap();
        assert_eq!(org.login, "acme");
    }

    #[tokio::test]
    async fn test_resolve_unknown_reference() {
        let (browser, _dir) = fetched_browser().await;

        let err = resolve(&browser, "nope").unwrap_err();
        assert!(err.to_string().contains("nope"));
    }
}
