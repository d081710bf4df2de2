use axum::{
    Extension, Router,
    routing::{get, put},
};
use clap::Parser;
use service_directory::catalog::defaults;
use service_directory::catalog::service_catalog::CatalogHandle;
use service_directory::catalog::watcher::spawn_catalog_watcher;
use service_directory::config::SearchConfig;
use service_directory::search::handlers::{
    ENDPOINT_SEARCH, ENDPOINT_SUGGEST, handle_search, handle_suggest,
};
use service_directory::search::pipeline::SearchPipeline;
use service_directory::search::remote::RemoteLookup;
use service_directory::store::handlers::{
    handle_create_provider, handle_delete_provider, handle_list_providers, handle_put_provider,
};
use service_directory::store::http::HttpProviderStore;
use service_directory::store::memory::MemoryProviderStore;
use service_directory::store::protocol::{ENDPOINT_PROVIDER, ENDPOINT_PROVIDERS};
use service_directory::store::types::ProviderStore;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

const REMOTE_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Provider directory node: hosts or mirrors a provider collection and serves search.
#[derive(Parser, Debug)]
#[command(name = "service-directory", version)]
struct Args {
    /// Address the HTTP API listens on.
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// Read providers from another node instead of hosting them (e.g. http://10.0.0.2:8080).
    #[arg(long)]
    remote: Option<String>,

    /// JSON seed for the hosted collection ({"users": {...}} or an array of documents).
    #[arg(long)]
    seed_file: Option<PathBuf>,

    /// JSON search config; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    timeout_ms: Option<u64>,

    #[arg(long)]
    debounce_ms: Option<u64>,

    #[arg(long)]
    max_suggestions: Option<usize>,
}

impl Args {
    fn search_config(&self) -> anyhow::Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::from_file(path)?,
            None => SearchConfig::default(),
        };

        if let Some(timeout_ms) = self.timeout_ms {
            config.remote_timeout_ms = timeout_ms;
        }
        if let Some(debounce_ms) = self.debounce_ms {
            config.debounce_ms = debounce_ms;
        }
        if let Some(max_suggestions) = self.max_suggestions {
            config.max_suggestions = max_suggestions;
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();
    let config = Arc::new(args.search_config()?);
    tracing::info!("Search config: {:?}", config);

    let catalog = CatalogHandle::new(defaults::static_services(), defaults::fallback_snapshot());

    // 1. Provider store (hosted or remote) + change feed:
    let mut app = Router::new();
    let store: Arc<dyn ProviderStore> = match &args.remote {
        Some(base_url) => {
            tracing::info!("Reading providers from {}", base_url);
            let remote = Arc::new(HttpProviderStore::new(base_url));
            let (feed, _poller) = remote.clone().spawn_poller(REMOTE_POLL_INTERVAL);
            spawn_catalog_watcher(catalog.clone(), feed);
            remote as Arc<dyn ProviderStore>
        }
        None => {
            let hosted = match &args.seed_file {
                Some(path) => {
                    let raw = std::fs::read_to_string(path)?;
                    let seed: serde_json::Value = serde_json::from_str(&raw)?;
                    MemoryProviderStore::from_seed_json(&seed)
                }
                None => MemoryProviderStore::new(),
            };
            tracing::info!("Hosting {} providers", hosted.len());
            spawn_catalog_watcher(catalog.clone(), hosted.subscribe());

            app = app
                .route(
                    ENDPOINT_PROVIDERS,
                    get(handle_list_providers).post(handle_create_provider),
                )
                .route(
                    ENDPOINT_PROVIDER,
                    put(handle_put_provider).delete(handle_delete_provider),
                )
                .layer(Extension(hosted.clone()));
            hosted as Arc<dyn ProviderStore>
        }
    };

    // 2. Search pipeline:
    let remote = Arc::new(RemoteLookup::new(store, config.remote_timeout()));
    let pipeline = Arc::new(SearchPipeline::new(remote, catalog.clone()));
    tracing::info!(
        "Catalog ready: {} services, {} fallback providers",
        catalog.catalog().len(),
        catalog.fallback().len()
    );

    // 3. HTTP Router:
    let app = app
        .route(ENDPOINT_SEARCH, get(handle_search))
        .route(ENDPOINT_SUGGEST, get(handle_suggest))
        .layer(Extension(pipeline))
        .layer(Extension(config));

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", args.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
