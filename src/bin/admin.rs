//! CLI administration tool for kv-shortener.
//!
//! Operates directly on the configured store (Redis, or a throwaway in-memory
//! store when `REDIS_URL` is unset), without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin admin -- shorten https://example.com/long/path
//! cargo run --bin admin -- shorten https://example.com --code promo24
//! cargo run --bin admin -- resolve promo24
//! cargo run --bin admin -- lookup https://example.com
//! cargo run --bin admin -- replace promo24 promo25
//! cargo run --bin admin -- delete promo25
//! cargo run --bin admin -- ping
//! ```

use kv_shortener::AppError;
use kv_shortener::config;
use kv_shortener::server::build_service;
use kv_shortener::state::DynMappingService;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing kv-shortener mappings.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL
    Shorten {
        /// Original URL
        url: String,

        /// Use this short code instead of a generated one
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Resolve a short code to its URL
    Resolve {
        code: String,
    },

    /// Find the short code recorded for a URL
    Lookup {
        url: String,
    },

    /// Move a mapping to a new short code
    Replace {
        old_code: String,
        new_code: String,
    },

    /// Delete a mapping
    Delete {
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Check store connection
    Ping,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    if config.redis_url.is_none() {
        println!(
            "{}",
            "⚠️  REDIS_URL not set, changes go to a temporary in-memory store".yellow()
        );
    }

    let service = build_service(&config).await?;

    match cli.command {
        Commands::Shorten { url, code } => shorten(&service, url, code).await?,
        Commands::Resolve { code } => resolve(&service, &code).await?,
        Commands::Lookup { url } => lookup(&service, &url).await?,
        Commands::Replace { old_code, new_code } => {
            replace(&service, &old_code, new_code).await?
        }
        Commands::Delete { code, yes } => delete(&service, &code, yes).await?,
        Commands::Ping => ping(&service).await,
    }

    Ok(())
}

async fn shorten(service: &DynMappingService, url: String, code: Option<String>) -> Result<()> {
    let mapping = match code {
        Some(code) => service.create_specific(url, code).await?,
        None => service.create_random(url).await?,
    };

    println!("{}", "✅ Mapping ready".green().bold());
    println!("  Code: {}", mapping.short_url.bright_yellow().bold());
    println!("  URL:  {}", mapping.original_url.cyan());

    Ok(())
}

async fn resolve(service: &DynMappingService, code: &str) -> Result<()> {
    let url = service.resolve(code).await?;
    println!("  {} → {}", code.bright_yellow(), url.cyan());
    Ok(())
}

async fn lookup(service: &DynMappingService, url: &str) -> Result<()> {
    match service.lookup_by_original(url).await? {
        Some(mapping) => println!(
            "  {} → {}",
            mapping.original_url.cyan(),
            mapping.short_url.bright_yellow()
        ),
        None => println!("{}", "  No mapping for this URL".yellow()),
    }
    Ok(())
}

async fn replace(service: &DynMappingService, old_code: &str, new_code: String) -> Result<()> {
    let mapping = service.replace(old_code, new_code).await?;

    println!("{}", "✅ Mapping moved".green().bold());
    println!(
        "  {} → {} ({})",
        old_code.bright_black(),
        mapping.short_url.bright_yellow().bold(),
        mapping.original_url.cyan()
    );

    Ok(())
}

/// Deletes a mapping after confirmation (default: No).
async fn delete(service: &DynMappingService, code: &str, skip_confirm: bool) -> Result<()> {
    let url = match service.resolve(code).await {
        Ok(url) => url,
        Err(AppError::NotFound { .. }) => {
            println!("{}", "⚠️  Short code not found, nothing to delete".yellow());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("  Code: {}", code.bright_yellow());
    println!("  URL:  {}", url.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this mapping?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service.delete(code).await?;
    println!("{}", "✅ Mapping deleted".green().bold());

    Ok(())
}

async fn ping(service: &DynMappingService) {
    println!("{}", "🔍 Checking store connection...".bright_blue());

    if service.store().health_check().await {
        println!("{}", "✅ Store connection OK".green().bold());
    } else {
        println!("{}", "❌ Store unreachable".red().bold());
    }
}
