//! FastFood Online CLI - Database migrations and seeding.
//!
//! # Usage
//!
//! ```bash
//! # Apply database migrations
//! ff-cli migrate
//!
//! # Seed everything (roles, administrator, sample catalog)
//! ff-cli seed
//!
//! # Seed one step
//! ff-cli seed roles
//! ff-cli seed admin
//! ff-cli seed sample
//!
//! # Run the seeders against an in-memory store
//! ff-cli seed --dry-run
//!
//! # Show what is in the database
//! ff-cli status --json
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed` - Seed roles, the administrator account and sample data
//! - `status` - Report role, user and catalog counts

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

use commands::CommandError;
use commands::seed::SeedTarget;

#[derive(Parser)]
#[command(name = "ff-cli")]
#[command(author, version, about = "FastFood Online CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Seed baseline data
    Seed {
        /// Which seeder to run
        #[arg(value_enum, default_value_t = SeedTarget::All)]
        target: SeedTarget,

        /// Run against an in-memory store instead of the database
        #[arg(long)]
        dry_run: bool,
    },
    /// Report what the database holds
    Status {
        /// Print the report as JSON on stdout
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "fastfood_seed=info,ff_cli=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CommandError> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed { target, dry_run } => {
            if dry_run {
                commands::seed::dry_run(target).await?;
            } else {
                commands::seed::run(target).await?;
            }
        }
        Commands::Status { json } => commands::status::run(json).await?,
    }
    Ok(())
}
