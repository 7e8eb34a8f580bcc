//! CLI administration tool for golinks.
//!
//! Manages the redirects file directly, without going through the HTTP
//! server. Stop the server first: it keeps its own in-memory copy and would
//! overwrite these changes on its next save.
//!
//! # Usage
//!
//! ```bash
//! # List redirects
//! cargo run --bin admin -- list
//!
//! # Add a redirect (same syntax as /add/...)
//! cargo run --bin admin -- add http/wiki/example.com/Wiki
//!
//! # Delete a redirect
//! cargo run --bin admin -- delete wiki
//!
//! # Check that the file loads cleanly
//! cargo run --bin admin -- check
//! ```
//!
//! # Environment Variables
//!
//! - `REDIRECTS_FILE`: Path of the redirects file (default: `redirects.json`),
//!   overridden by `--file`

use golinks::application::services::LinkService;
use golinks::domain::registry::{CorruptFilePolicy, RedirectRegistry, RegistryError};
use golinks::infrastructure::persistence::JsonFileStore;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for managing golinks redirects.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Redirects file (overrides REDIRECTS_FILE)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// List all redirects
    List,

    /// Add a redirect given as protocol/shortname/target
    Add {
        /// e.g. "https/docs/docs.rs"
        path: String,
    },

    /// Delete a redirect
    Delete {
        /// Shortname to delete
        shortname: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Load the file and report problems
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let path = match cli.file {
        Some(path) => path,
        None => golinks::config::Config::from_env()?.redirects_file,
    };

    // Never reset a corrupt file from the CLI; the operator has to fix it.
    let store = Arc::new(JsonFileStore::new(&path));
    let registry = RedirectRegistry::open(store, CorruptFilePolicy::Fail)
        .await
        .with_context(|| format!("Failed to load {}", path.display()))?;
    let service = LinkService::new(Arc::new(registry));

    match cli.command {
        Commands::List => list_links(&service).await,
        Commands::Add { path } => add_link(&service, &path).await,
        Commands::Delete { shortname, yes } => delete_link(&service, &shortname, yes).await,
        Commands::Check => check(&service, &path).await,
    }
}

/// Prints every redirect with its request count.
///
/// # Output Format
///
/// ```text
/// Redirects
///
///   Shortname       Target                                    Requests
///   ──────────────────────────────────────────────────────────────────
///   wiki            http://example.com/Wiki                   12
/// ```
async fn list_links(service: &LinkService) -> Result<()> {
    println!("{}", "Redirects".bright_blue().bold());
    println!();

    let links = service.list_links().await;

    if links.is_empty() {
        println!("{}", "  No redirects found".yellow());
        println!();
        println!(
            "  Add one with: {} admin add http/name/example.com",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<15} {:<41} {}",
        "Shortname".bright_white().bold(),
        "Target".bright_white().bold(),
        "Requests".bright_white().bold()
    );
    println!("  {}", "─".repeat(66).bright_black());

    for link in &links {
        println!(
            "  {:<15} {:<41} {}",
            link.shortname.cyan(),
            link.target,
            link.request_count.to_string().bright_black()
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Validates and adds a redirect.
async fn add_link(service: &LinkService, path: &str) -> Result<()> {
    match service.add_link(path).await {
        Ok(entry) => {
            println!(
                "{} {} -> {}",
                "Added".green().bold(),
                entry.shortname.cyan(),
                entry.target
            );
            Ok(())
        }
        Err(RegistryError::DuplicateShortname {
            shortname,
            existing_target,
        }) => {
            println!(
                "{} {} already points to {}",
                "Not added:".yellow().bold(),
                shortname.cyan(),
                existing_target
            );
            Ok(())
        }
        Err(RegistryError::Validation(e)) => {
            anyhow::bail!("{}\n{}", e, golinks::utils::add_request::ADD_REQUEST_USAGE)
        }
        Err(e) => Err(e).context("Failed to save redirects"),
    }
}

/// Deletes a redirect after confirmation (default: No).
async fn delete_link(service: &LinkService, shortname: &str, skip_confirm: bool) -> Result<()> {
    let shortname = shortname.trim();

    let Some(entry) = service
        .list_links()
        .await
        .into_iter()
        .find(|e| e.shortname == shortname)
    else {
        println!("{} {}", "No redirect named".yellow(), shortname.cyan());
        return Ok(());
    };

    println!("  Shortname: {}", entry.shortname.cyan());
    println!("  Target:    {}", entry.target);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this redirect?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_link(shortname)
        .await
        .context("Failed to save redirects")?;

    println!("{}", "Redirect deleted".green().bold());

    Ok(())
}

/// Reports whether the file loaded and how many redirects it holds.
async fn check(service: &LinkService, path: &std::path::Path) -> Result<()> {
    let count = service.list_links().await.len();

    if path.exists() {
        println!(
            "{} {} ({} redirects)",
            "OK".green().bold(),
            path.display(),
            count
        );
    } else {
        println!(
            "{} {} does not exist yet; it will be created on the first add",
            "OK".green().bold(),
            path.display()
        );
    }

    Ok(())
}
