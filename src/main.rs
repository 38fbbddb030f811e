use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use agent_host::tools::RollDieTool;
use agent_host::{initialize, AgentHostConfig, Delegate, RuntimeEnv, Settings, Tool};

/// Agent Host - configure a root agent with local and remote sub-agents
#[derive(Parser, Debug)]
#[command(name = "agent-host")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Settings file (defaults to ~/.config/agent-host/config.toml)
    #[arg(short, long, env = "AGENT_HOST_CONFIG")]
    config: Option<PathBuf>,

    /// Remote agent registry file
    #[arg(short, long, env = "AGENT_HOST_REGISTRY")]
    registry: Option<PathBuf>,

    /// Model for the root agent
    #[arg(short, long)]
    model: Option<String>,

    /// Log file path
    #[arg(long, default_value = "/tmp/agent-host.log")]
    log_file: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the host configuration as JSON (default)
    Manifest,
    /// List the root agent's delegates in routing order
    Delegates,
    /// Roll a die with the local roll_die tool
    Roll {
        /// Number of sides
        #[arg(short, long, default_value_t = 6)]
        sides: i64,
    },
}

/// Load settings, apply CLI overrides, and build the host configuration
fn load_config(args: Args) -> Result<AgentHostConfig> {
    let mut settings = match &args.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    // Apply CLI overrides
    if let Some(registry) = args.registry {
        settings.registry.path = registry;
    }
    if let Some(model) = args.model {
        settings.root.model = model;
    }

    initialize(&settings, &RuntimeEnv::from_env()).context("Failed to initialize agent host")
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env files (local first, then home directory) before parsing,
    // so clap picks up AGENT_HOST_* values set there
    // Errors are ignored - files are optional
    let _ = dotenvy::from_filename(".env");
    if let Some(home) = dirs::home_dir() {
        let _ = dotenvy::from_path(home.join(".env"));
    }

    let mut args = Args::parse();

    // Set up file-based logging
    let log_file = std::fs::File::create(&args.log_file)
        .with_context(|| format!("Failed to create log file: {}", args.log_file.display()))?;
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,agent_host=debug")),
        )
        .with(fmt::layer().with_writer(log_file).with_ansi(false))
        .init();

    match args.command.take().unwrap_or(Command::Manifest) {
        Command::Roll { sides } => {
            let rolled = RollDieTool.call(json!({ "sides": sides })).await?;
            println!("{}", rolled);
        }
        Command::Manifest => {
            let config = load_config(args)?;
            println!("{}", config.to_manifest()?);
        }
        Command::Delegates => {
            let config = load_config(args)?;
            for delegate in config.delegates() {
                match delegate {
                    Delegate::Local(agent) => {
                        println!("local\t{}\t{}", agent.name(), agent.description())
                    }
                    Delegate::Remote(remote) => {
                        println!("remote\t{}\t{}", remote.name(), remote.agent_card_url())
                    }
                }
            }
        }
    }

    Ok(())
}
