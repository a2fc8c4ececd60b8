//! Alaska CLI - Command-line interface for the Alaska bear service.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "alaska")]
#[command(about = "Talk to a running Alaska bear service", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (TOML)
    #[arg(short, long, global = true, default_value = "alaska.toml")]
    config: PathBuf,
    /// Service root, overrides the config file and ALASKA_BASE_URL
    #[arg(long, global = true)]
    base_url: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the service description
    Info,
    /// List all bears
    List {
        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show one bear
    Get {
        /// Bear ID
        id: u64,
    },
    /// Create a bear
    Create {
        /// POLAR, BROWN, BLACK or GUMMY
        bear_type: String,
        /// Bear name
        name: String,
        /// Bear age
        age: f64,
    },
    /// Replace a bear's type, name and age
    Update {
        /// Bear ID
        id: u64,
        /// POLAR, BROWN, BLACK or GUMMY
        bear_type: String,
        /// Bear name
        name: String,
        /// Bear age
        age: f64,
    },
    /// Delete one bear
    Delete {
        /// Bear ID
        id: u64,
    },
    /// Delete every bear
    Clean,
    /// Block until the service answers its info endpoint
    Wait {
        /// Give up after this many seconds
        #[arg(long)]
        timeout_secs: Option<f64>,
        /// Pause between probes
        #[arg(long)]
        pause_ms: Option<u64>,
    },
}

fn main() -> Result<()> {
    // Initialize tracing subscriber
    // Respects RUST_LOG environment variable (e.g., RUST_LOG=debug)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let opts = commands::GlobalOpts {
        config: cli.config,
        base_url: cli.base_url,
    };

    let result = match cli.command {
        Commands::Info => commands::info::run(&opts),
        Commands::List { format } => commands::bears::list(&opts, &format),
        Commands::Get { id } => commands::bears::get(&opts, id),
        Commands::Create {
            bear_type,
            name,
            age,
        } => commands::bears::create(&opts, &bear_type, &name, age),
        Commands::Update {
            id,
            bear_type,
            name,
            age,
        } => commands::bears::update(&opts, id, &bear_type, &name, age),
        Commands::Delete { id } => commands::bears::delete(&opts, id),
        Commands::Clean => commands::bears::clean(&opts),
        Commands::Wait {
            timeout_secs,
            pause_ms,
        } => commands::wait::run(&opts, timeout_secs, pause_ms),
    };

    if let Err(e) = &result {
        commands::print_suggestion(e);
    }
    result
}
