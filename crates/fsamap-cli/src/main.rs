mod districts;
mod fsas;
mod ldus;
mod search;
mod store;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::store::Store;

#[derive(Debug, Parser)]
#[command(name = "fsamap")]
#[command(about = "Build the FSA and Ontario electoral district reference dataset")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch FSA listing pages and write fsas.json
    Fsas {
        /// Leading letters to fetch (default: all)
        letters: Vec<String>,
        /// Log the pages that would be fetched without fetching or writing
        #[arg(long)]
        dry_run: bool,
    },
    /// Enrich electoral districts with member details and write districts.json
    Districts {
        /// District ids to process (default: all)
        ids: Vec<u16>,
        /// Log the work plan without fetching or writing
        #[arg(long)]
        dry_run: bool,
    },
    /// Generate the shuffled LDU pool and write ldus.json
    Ldus {
        /// Shuffle seed (default: random, logged)
        #[arg(long)]
        seed: Option<u64>,
        /// Overwrite an existing pool
        #[arg(long)]
        force: bool,
    },
    /// Look up electoral districts for Ontario postal codes
    Search {
        /// FSAs to search (default: every Ontario FSA in fsas.json)
        fsas: Vec<String>,
        /// Log pending lookups per FSA without querying or writing
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = fsamap_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let store = Store::new(&config.data_dir);
    match cli.command {
        Commands::Fsas { letters, dry_run } => {
            fsas::run_fsas(&config, &store, &letters, dry_run).await?;
        }
        Commands::Districts { ids, dry_run } => {
            districts::run_districts(&config, &store, &ids, dry_run).await?;
        }
        Commands::Ldus { seed, force } => ldus::run_ldus(&store, seed, force)?,
        Commands::Search { fsas, dry_run } => {
            search::run_search(&config, &store, &fsas, dry_run).await?;
        }
    }

    Ok(())
}
