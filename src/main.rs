use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use threadmint::config::Config;
use threadmint::edition::classify_edition;
use threadmint::mind::{weigh_items, CollectedItem};
use threadmint::output::terminal;
use threadmint::reactions::validator::validate_reaction_input;
use threadmint::scoring::absorption::absorption_weight_for;

/// ThreadMint: reaction pricing and absorption weighting.
///
/// Checks reaction payments against the price table and computes how much
/// a collected post weighs in its collector's mind.
#[derive(Parser)]
#[command(name = "threadmint", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the active reaction price table
    Prices,

    /// Compute the absorption weight of an edition
    Weight {
        /// Edition type: 1of1 | limited | open | allowlist
        #[arg(long)]
        edition: String,

        /// Number of copies (limited/allowlist/open)
        #[arg(long, allow_negative_numbers = true)]
        supply: Option<i64>,
    },

    /// Check a reaction payment against the price table
    Validate {
        /// Reaction kind: like | comment | quote
        #[arg(long)]
        kind: String,

        /// Offered amount in wei (base-10 integer)
        #[arg(long)]
        amount: String,
    },

    /// Weigh a collection read from a JSON file
    Absorb {
        /// JSON array of {"editionType": ..., "editions": ...} items
        file: std::path::PathBuf,
    },

    /// Start the HTTP API
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: 3000)
        #[arg(long, default_value = "3000")]
        port: u16,

        /// Address to bind (default: 0.0.0.0)
        #[arg(long, default_value = "0.0.0.0")]
        bind: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("threadmint=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Prices => {
            terminal::display_price_table(&config.prices);
        }

        Commands::Weight { edition, supply } => {
            let weight = absorption_weight_for(&edition, supply, config.unknown_edition)?;
            match classify_edition(&edition, supply) {
                Ok(classified) => {
                    let total = classified.total_supply(config.open_edition_supply);
                    terminal::display_weight(&classified, weight, total);
                }
                // Only reachable in fallback mode with an unknown type
                Err(_) => {
                    warn!(edition = %edition, "Unknown edition type, using base weight");
                    println!("Weight: {}", threadmint::output::format_weight(weight));
                }
            }
        }

        Commands::Validate { kind, amount } => {
            match validate_reaction_input(&config.prices, &kind, &amount) {
                Ok(reaction) => terminal::display_accepted(&reaction),
                Err(e) => {
                    terminal::display_rejected(&e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Absorb { file } => {
            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let items: Vec<CollectedItem> = serde_json::from_str(&raw)
                .with_context(|| format!("{} is not a JSON array of editions", file.display()))?;
            info!(count = items.len(), "Weighing collection");
            let weighted = weigh_items(&items)?;
            terminal::display_collection(&weighted);
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            threadmint::web::run_server(config, port, &bind).await?;
        }
    }

    Ok(())
}
