//! Screener entrypoint: analyze addresses, dump their features, or prune the
//! transaction cache.

use clap::{Parser, Subcommand};
use ransomware_screener::{
    config::ScreenerConfig,
    features::FeatureExtractor,
    fetch::{BlockchainInfoFetcher, CachedFetcher, TransactionFetcher},
    logging::StructuredLogger,
    model::{ModelBundle, OnnxClassifier},
    screener::Screener,
    storage::TxCache,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

type BoxError = Box<dyn std::error::Error>;

#[derive(Parser)]
#[command(name = "ransomware-screener", version, about = "Screen Bitcoin addresses for ransomware activity")]
struct Cli {
    /// JSON configuration file
    #[arg(long, env = "SCREENER_CONFIG_PATH", default_value = "config.json")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score addresses; prints one verdict JSON line per address
    Analyze {
        #[arg(required = true)]
        addresses: Vec<String>,
    },
    /// Print the derived feature vector of an address (no model needed)
    Features { address: String },
    /// Delete cached histories older than the given age
    PruneCache {
        #[arg(long)]
        older_than_days: i64,
    },
}

fn open_fetcher(config: &ScreenerConfig) -> Result<CachedFetcher<BlockchainInfoFetcher>, BoxError> {
    std::fs::create_dir_all(&config.data_dir)?;
    let cache = TxCache::open(&config.cache_path())?;
    let remote = BlockchainInfoFetcher::new(&config.fetcher)?;
    Ok(CachedFetcher::new(remote, cache))
}

fn analyze(config: &ScreenerConfig, addresses: &[String]) -> Result<ExitCode, BoxError> {
    let bundle = ModelBundle::load(&config.model.bundle_path)?;
    info!(
        features = bundle.feature_count(),
        threshold = bundle.threshold,
        "model bundle loaded"
    );
    let classifier = OnnxClassifier::load(&config.model.model_path, bundle.feature_count())?;
    let screener = Screener::new(open_fetcher(config)?, classifier, bundle, config.risk.clone());

    let mut stdout = std::io::stdout().lock();
    let mut failed = 0usize;
    for address in addresses {
        match screener.analyze(address) {
            Ok(verdict) => StructuredLogger::emit_json(&verdict, &mut stdout)?,
            Err(e) => {
                failed += 1;
                let cause = std::error::Error::source(&e).map(|s| s.to_string());
                warn!(address = %address, error = %e, cause = ?cause, "analysis failed");
            }
        }
    }

    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn features(config: &ScreenerConfig, address: &str) -> Result<ExitCode, BoxError> {
    let transactions = open_fetcher(config)?.fetch(address)?;
    let vector = FeatureExtractor::derive(address, &transactions)?;
    StructuredLogger::emit_json(&vector, &mut std::io::stdout().lock())?;
    Ok(ExitCode::SUCCESS)
}

fn prune_cache(config: &ScreenerConfig, older_than_days: i64) -> Result<ExitCode, BoxError> {
    let cache = TxCache::open(&config.cache_path())?;
    let removed = cache.prune_older_than(older_than_days)?;
    info!(removed, older_than_days, "cache pruned");
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = ScreenerConfig::load(&cli.config);

    StructuredLogger::init(config.log.json, &config.log.level);
    info!(data_dir = ?config.data_dir, "ransomware screener starting");

    let result = match &cli.command {
        Command::Analyze { addresses } => analyze(&config, addresses),
        Command::Features { address } => features(&config, address),
        Command::PruneCache { older_than_days } => prune_cache(&config, *older_than_days),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "screener failed");
            ExitCode::FAILURE
        }
    }
}
