pub mod cache;
pub mod cli;
pub mod clients;
pub mod config;
pub mod constants;
pub mod db;
pub mod entities;
pub mod models;
pub mod services;

use std::sync::Arc;

use clap::Parser;
use cli::{Cli, Commands, cmd_init, cmd_random, cmd_search, cmd_show};
use clients::cocktaildb::CocktailDbClient;
pub use config::Config;
use db::Store;
use services::LookupService;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::cache::{CacheStore, MemoryStore, SystemClock};

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    config.validate()?;

    init_logging(&config);

    match cli.command.unwrap_or(Commands::Random) {
        Commands::Init => cmd_init(),
        Commands::Search {
            query,
            non_alcoholic,
        } => {
            let service = build_lookup_service(&config, !cli.no_cache).await;
            cmd_search(&service, &query.join(" "), non_alcoholic).await
        }
        Commands::Show { id } => {
            let service = build_lookup_service(&config, !cli.no_cache).await;
            cmd_show(&service, &id).await
        }
        Commands::Random => {
            let service = build_lookup_service(&config, !cli.no_cache).await;
            cmd_random(&service).await
        }
    }
}

fn init_logging(config: &Config) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

/// Wires the HTTP client, cache store and system clock together. Falls back
/// to an in-memory cache when persistence is off or the database can't open.
pub async fn build_lookup_service(config: &Config, persist: bool) -> LookupService {
    let api = Arc::new(CocktailDbClient::new(&config.api));

    let cache: Arc<dyn CacheStore> = if persist && config.cache.enabled {
        match Store::new(&config.general.cache_path).await {
            Ok(store) => Arc::new(store),
            Err(e) => {
                warn!("Cache database unavailable, keeping results in memory: {e:#}");
                Arc::new(MemoryStore::new())
            }
        }
    } else {
        debug!("Persistent cache disabled for this run");
        Arc::new(MemoryStore::new())
    };

    LookupService::new(api, cache, Arc::new(SystemClock), config.cache.ttl())
}
