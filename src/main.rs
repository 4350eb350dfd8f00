// src/main.rs
// Resolve.Ai proxy server

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use resolve::config::{self, Credentials, FileConfig, Overrides, Settings};
use resolve::prompt::PromptCatalog;

#[derive(Parser)]
#[command(name = "resolve")]
#[command(about = "Generation proxy for the Resolve.Ai recovery assistant")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    args: ServeArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate configuration and prompt catalog, then exit
    Check,
}

#[derive(clap::Args)]
struct ServeArgs {
    /// Address to bind (default: 0.0.0.0)
    #[arg(long, env = "RESOLVE_HOST")]
    host: Option<String>,

    /// Port to listen on (default: 3000)
    #[arg(long, short = 'p', env = "PORT")]
    port: Option<u16>,

    /// Config file (default: ~/.resolve/config.toml)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Gemini model name
    #[arg(long, env = "GEMINI_MODEL")]
    model: Option<String>,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    gemini_api_key: Option<String>,
}

impl ServeArgs {
    fn settings(&self) -> Result<Settings> {
        let file = FileConfig::load(self.config.as_deref());
        let overrides = Overrides {
            host: self.host.clone(),
            port: self.port,
            model: self.model.clone(),
            gemini_api_key: self.gemini_api_key.clone(),
        };
        Settings::resolve(overrides, file, Credentials::from_env()).context("invalid configuration")
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env.local then .env, before clap reads env fallbacks and before the
    // filter reads RUST_LOG
    let dotenv = std::env::current_dir()
        .map(|cwd| config::load_dotenv(&cwd))
        .unwrap_or_default();

    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    for load in &dotenv {
        load.log();
    }

    let cli = Cli::parse();

    let settings = cli.args.settings()?;
    let catalog = PromptCatalog::load().context("prompt catalog is incomplete")?;

    match cli.command {
        None => {
            info!(settings = ?settings, "Starting Resolve proxy");
            resolve::web::run(settings, catalog).await
        }
        Some(Commands::Check) => {
            println!("Configuration OK");
            println!("  bind:       {}", settings.bind_address());
            println!("  model:      {}", settings.gemini.model);
            println!(
                "  credential: {}",
                if settings.has_credential() { "present" } else { "MISSING (set GEMINI_API_KEY)" }
            );
            Ok(())
        }
    }
}
