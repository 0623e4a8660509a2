//! RocketCall CLI - Database migrations and operator tools.
//!
//! # Usage
//!
//! ```bash
//! # Create the inquiries table and the admin session table
//! rc-cli migrate
//!
//! # Print stored inquiries, newest first
//! rc-cli inquiries list
//! rc-cli inquiries list --status pending
//!
//! # Post a sample notification to DISCORD_WEBHOOK_URL
//! rc-cli webhook test
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "rc-cli")]
#[command(author, version, about = "RocketCall CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations (inquiries + admin sessions)
    Migrate,
    /// Inspect stored inquiries
    Inquiries {
        #[command(subcommand)]
        action: InquiriesAction,
    },
    /// Check the Discord webhook
    Webhook {
        #[command(subcommand)]
        action: WebhookAction,
    },
}

#[derive(Subcommand)]
enum InquiriesAction {
    /// List inquiries, newest first
    List {
        /// Only show one status (`pending`, `contacted`, `completed`)
        #[arg(short, long)]
        status: Option<String>,
    },
}

#[derive(Subcommand)]
enum WebhookAction {
    /// Send a sample inquiry notification
    Test,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Inquiries { action } => match action {
            InquiriesAction::List { status } => {
                commands::inquiries::list(status.as_deref()).await?;
            }
        },
        Commands::Webhook { action } => match action {
            WebhookAction::Test => commands::webhook::test().await?,
        },
    }
    Ok(())
}
