use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use book_finder::catalog::CatalogClient;
use book_finder::config::Config;
use book_finder::state::AppState;
use book_finder::{build_router, cors_layer};

#[tokio::main]
async fn main() {
    // Load configuration first: APP_ENV decides the log format.
    let config = Config::from_env().expect("Failed to load configuration");

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "book_finder=info,tower_http=info"
            .parse()
            .expect("valid default log filter")
    });

    if config.is_production {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!("Book Finder starting...");

    if config.api_key.is_none() {
        info!("API_KEY not set, querying the catalog anonymously");
    }

    let http_client = reqwest::Client::builder()
        .build()
        .expect("Failed to build HTTP client");

    let state = AppState {
        catalog: CatalogClient::new(
            http_client,
            config.catalog_url.clone(),
            config.api_key.clone(),
        ),
        hostname: config.hostname.as_deref().map(Arc::from),
        static_dir: config.static_dir.clone(),
    };

    info!(origins = ?config.allowed_origins, "CORS allow-list");
    let app = build_router(state, cors_layer(&config.allowed_origins));

    let addr = config.server_addr();
    info!("Serving static from: {}", config.static_dir.display());
    info!("Server is running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server failed to start");
}
