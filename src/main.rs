use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod cli;
mod client;
mod config;
mod error;
mod session;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "robolearn=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => cli::commands::init().await,
        Commands::Login { email, password } => cli::commands::login(&email, password).await,
        Commands::Register {
            email,
            name,
            password,
        } => cli::commands::register(&email, &name, password).await,
        Commands::Logout => cli::commands::logout().await,
        Commands::Whoami { refresh } => cli::commands::whoami(refresh).await,
        Commands::Profile { action } => cli::commands::profile(action).await,
        Commands::Courses { action } => cli::commands::courses(action).await,
        Commands::Learn { action } => cli::commands::learn(action).await,
        Commands::Paths { action } => cli::commands::paths(action).await,
        Commands::Products { action } => cli::commands::products(action).await,
        Commands::Certs { action } => cli::commands::certs(action).await,
        Commands::Mentoring { action } => cli::commands::mentoring(action).await,
        Commands::Contact { action } => cli::commands::contact(action).await,
        Commands::Links { action } => cli::commands::links(action).await,
        Commands::Pay { action } => cli::commands::pay(action).await,
    }
}
