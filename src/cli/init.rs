//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, Password, Select, theme::ColorfulTheme};

use crate::cli::GlobalOptions;
use crate::client::{GithubClient, OrganizationsApi};
use crate::config::{Config, Preferences};
use crate::error::Result;

/// Run the init command
///
/// Walks through host, token, and output-format setup, verifies the host by
/// listing organizations once, and saves the configuration.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to Browsr!".bold().green());
    println!("Let's set up your configuration.\n");

    // Prompt for API host (empty keeps the default)
    let host: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("API host (leave empty for the public GitHub API)")
        .allow_empty(true)
        .interact_text()?;
    let api_host = match opts.api_host_ref() {
        Some(flag_host) => Some(flag_host.to_string()),
        None if host.trim().is_empty() => None,
        None => Some(host.trim().to_string()),
    };

    // Prompt for an optional access token
    let token: String = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("API token (optional, raises rate limits)")
        .allow_empty_password(true)
        .interact()?;
    let token = if token.is_empty() { None } else { Some(token) };

    // Verify the host before saving
    println!("\n{}", "Checking API access...".cyan());
    let client = GithubClient::with_host(token.clone(), api_host.clone())?;
    let orgs = client.list_organizations().await?;
    println!(
        "{} API reachable ({} organizations in the first page)",
        "✓".green(),
        orgs.len()
    );

    // Prompt for default output format
    let formats = ["table", "json"];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Default output format")
        .items(&formats)
        .default(0)
        .interact()?;

    let config = Config {
        api_host,
        token,
        preferences: Preferences {
            format: Some(formats[selection].to_string()),
        },
    };
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - List organizations", "browsr org list".cyan());
    println!("  {} - Mark one as favorite", "browsr fav toggle <org>".cyan());

    Ok(())
}
