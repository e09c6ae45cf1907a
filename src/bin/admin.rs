//! CLI administration tool for shortlink-proxy.
//!
//! Manages links and reads usage counts straight from the database, without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create a link with a random code
//! cargo run --bin admin -- link create --tenant team-a --url https://example.org
//!
//! # Create a link with a chosen code that expires
//! cargo run --bin admin -- link create -t team-a -u https://example.org -c promo \
//!     --expire-at 2030-01-01T00:00:00Z
//!
//! # List a tenant's codes
//! cargo run --bin admin -- link list --tenant team-a
//!
//! # Delete a link
//! cargo run --bin admin -- link delete --tenant team-a promo
//!
//! # Usage count
//! cargo run --bin admin -- analytics promo --window 7d
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database settings as the server (`DATABASE_URL` or `DB_*`).

use shortlink_proxy::application::services::{AnalyticsService, LinkService};
use shortlink_proxy::config;
use shortlink_proxy::domain::window::LookbackWindow;
use shortlink_proxy::infrastructure::persistence::{self, PgLinkRepository, PgUsageRepository};

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shortlink-proxy.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show how often a code was redirected
    Analytics {
        /// Short code
        code: String,

        /// Lookback window: all, 24h or 7d
        #[arg(short, long, default_value = "all")]
        window: LookbackWindow,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Create a new short link
    Create {
        /// Owning tenant (prompted if omitted)
        #[arg(short, long)]
        tenant: Option<String>,

        /// Destination URL (prompted if omitted)
        #[arg(short, long)]
        url: Option<String>,

        /// Chosen code (random if omitted)
        #[arg(short, long)]
        code: Option<String>,

        /// Expiry as an RFC 3339 timestamp
        #[arg(long)]
        expire_at: Option<DateTime<Utc>>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List a tenant's codes
    List {
        #[arg(short, long)]
        tenant: String,
    },

    /// Delete a short link
    Delete {
        #[arg(short, long)]
        tenant: String,

        /// Code to delete
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = persistence::connect(&config).await?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &pool).await?,
        Commands::Analytics { code, window } => handle_analytics(&code, window, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, pool: &PgPool) -> Result<()> {
    let service = LinkService::new(Arc::new(PgLinkRepository::new(Arc::new(pool.clone()))));

    match action {
        LinkAction::Create {
            tenant,
            url,
            code,
            expire_at,
            yes,
        } => create_link(&service, tenant, url, code, expire_at, yes).await?,
        LinkAction::List { tenant } => list_links(&service, &tenant).await?,
        LinkAction::Delete { tenant, code, yes } => {
            delete_link(&service, &tenant, &code, yes).await?
        }
    }

    Ok(())
}

/// Creates a link, prompting for whatever was not given on the command line.
async fn create_link(
    service: &LinkService,
    tenant: Option<String>,
    url: Option<String>,
    code: Option<String>,
    expire_at: Option<DateTime<Utc>>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔗 Create Short Link".bright_blue().bold());
    println!();

    let tenant = match tenant {
        Some(t) => t,
        None => Input::new().with_prompt("Tenant").interact_text()?,
    };

    let url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("Destination URL")
            .with_initial_text("https://")
            .interact_text()?,
    };

    println!("{}", "Link details:".bright_white().bold());
    println!("  Tenant:      {}", tenant.cyan());
    println!("  Destination: {}", url.cyan());
    println!(
        "  Code:        {}",
        code.as_deref().unwrap_or("(random)").bright_yellow()
    );
    if let Some(expiry) = expire_at {
        println!("  Expires:     {}", expiry.to_rfc3339().bright_black());
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this link?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let link = service
        .create_short_link(&tenant, &url, code.as_deref(), expire_at)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!();
    println!("{}", "✅ Link created successfully!".green().bold());
    println!("  Code: {}", link.code.bright_yellow().bold());
    println!();
    println!("{}", "Try it:".bright_white());
    println!(
        "  curl -i http://localhost:3000/s/{}",
        link.code.bright_yellow()
    );
    println!();

    Ok(())
}

/// Lists a tenant's codes.
async fn list_links(service: &LinkService, tenant: &str) -> Result<()> {
    println!(
        "{} {}",
        "📋 Short links for".bright_blue().bold(),
        tenant.cyan().bold()
    );
    println!();

    let codes = service
        .list_codes(tenant)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if codes.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    for code in &codes {
        println!("  {}", code.bright_white());
    }

    println!();
    println!("  Total: {}", codes.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Deletes a link after confirmation (default: No).
async fn delete_link(
    service: &LinkService,
    tenant: &str,
    code: &str,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🗑  Delete Short Link".bright_blue().bold());
    println!();
    println!("  Tenant: {}", tenant.cyan());
    println!("  Code:   {}", code.bright_yellow());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link? Recorded usage is kept.")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_short_link(tenant, code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!("{}", "✅ Link deleted".green().bold());
    println!();

    Ok(())
}

/// Prints the usage line for a code.
async fn handle_analytics(code: &str, window: LookbackWindow, pool: &PgPool) -> Result<()> {
    let service = AnalyticsService::new(Arc::new(PgUsageRepository::new(Arc::new(pool.clone()))));
    let code = code.to_ascii_lowercase();

    let count = service
        .count(&code, window)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count usage: {}", e))?;

    print!(
        "{}",
        AnalyticsService::summary_line(&code, window, count).bright_green()
    );

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            let service = LinkService::new(Arc::new(PgLinkRepository::new(Arc::new(pool.clone()))));
            service
                .check_store()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
    }

    Ok(())
}
