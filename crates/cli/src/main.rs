//! Slack todo CLI - database migrations and operator tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! todo-cli migrate
//!
//! # Produce Slack headers for a hand-crafted request
//! todo-cli sign --body 'command=%2Flist&user_id=U1'
//!
//! # Inspect a user's todos
//! todo-cli todos list --user U1
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `sign` - Sign a request body the way Slack does
//! - `todos list` - Print a user's todos

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "todo-cli")]
#[command(author, version, about = "Slack todo CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Sign a request body with the Slack `v0` scheme
    Sign {
        /// Signing secret (defaults to `SLACK_SIGNING_SECRET`)
        #[arg(short, long)]
        secret: Option<String>,

        /// Unix timestamp to sign with (defaults to now)
        #[arg(short, long)]
        timestamp: Option<i64>,

        /// Raw URL-encoded request body
        #[arg(short, long)]
        body: String,
    },
    /// Inspect stored todos
    Todos {
        #[command(subcommand)]
        action: TodosAction,
    },
}

#[derive(Subcommand)]
enum TodosAction {
    /// List a user's todos, newest first
    List {
        /// Slack user ID (e.g. `U0123ABCD`)
        #[arg(short, long)]
        user: String,
    },
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
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Sign {
            secret,
            timestamp,
            body,
        } => commands::sign::run(secret, timestamp, &body)?,
        Commands::Todos { action } => match action {
            TodosAction::List { user } => commands::todos::list(&user).await?,
        },
    }
    Ok(())
}
