//! Browsr CLI - companion for browsing organizations with local favorites

use clap::{CommandFactory, Parser};

mod browser;
mod cache;
mod cli;
mod client;
mod config;
mod error;
mod output;
mod store;

use cli::{AvatarCommands, CacheCommands, Cli, Commands, FavCommands, GlobalOptions, OrgCommands};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Debug flag raises the log level for our own modules
    let default_level = if cli.debug { "browsr=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("browsr version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Org(org_cmd) => match org_cmd {
            OrgCommands::List { filter } => cli::org::list(&opts, filter.as_deref()).await,
        },
        Commands::Fav(fav_cmd) => match fav_cmd {
            FavCommands::List => cli::favorite::list(&opts),
            FavCommands::Add { org } => cli::favorite::add(&opts, &org).await,
            FavCommands::Remove { org } => cli::favorite::remove(&opts, &org).await,
            FavCommands::Toggle { org } => cli::favorite::toggle(&opts, &org).await,
            FavCommands::Clear { yes } => cli::favorite::clear(&opts, yes),
        },
        Commands::Avatar(avatar_cmd) => match avatar_cmd {
            AvatarCommands::Get { org, out } => {
                cli::avatar::get(&opts, &org, out.as_deref()).await
            }
            AvatarCommands::Sync => cli::avatar::sync(&opts).await,
        },
        Commands::Cache(cache_cmd) => match cache_cmd {
            CacheCommands::Status => cli::cache::status(&opts),
            CacheCommands::Clear => cli::cache::clear(&opts),
            CacheCommands::Path => cli::cache::path(),
        },
        Commands::Completion { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "browsr",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
