use anyhow::Result;
use clap::{Parser, Subcommand};

/// sofreh - household meal suggestion helper
#[derive(Parser)]
#[command(name = "sofreh")]
#[command(about = "Dish suggestions, family allergies and the shopping list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the dish catalog
    Dishes {
        /// Emit the catalog as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Suggest one dish and exit
    Suggest {
        /// Comma-separated allergy list to filter by
        #[arg(long)]
        allergies: Option<String>,

        /// Fixed seed for a reproducible pick (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run the interactive session
    Shell {
        /// Fixed seed for reproducible picks (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = sofreh::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    // Initialize observability (tracing + logging)
    sofreh::observability::init_observability(
        "sofreh",
        env!("CARGO_PKG_VERSION"),
        &config.logging.level,
        &config.logging.format,
    )?;

    match cli.command {
        Commands::Dishes { json } => sofreh::cli::dishes::run(json),
        Commands::Suggest { allergies, seed } => sofreh::cli::suggest::run(&config, allergies, seed),
        Commands::Shell { seed } => sofreh::cli::shell::run(&config, seed),
    }
}
