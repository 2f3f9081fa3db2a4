//! fxgate API Server
//!
//! A currency-conversion gateway: validates conversion requests, proxies them
//! to an upstream exchange-rate provider, and serves the browser UI.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::any::Any;
use std::path::Path;
use std::sync::Arc;

use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::ExchangeRateClient;
use app::RateGateway;
use config::Config;
use error::AppError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<RateGateway<ExchangeRateClient>>,
    /// Static UI files, with `index.html` for any path that has no file
    pub ui: ServeDir<ServeFile>,
}

impl AppState {
    pub fn new(gateway: Arc<RateGateway<ExchangeRateClient>>, static_dir: &Path) -> Self {
        let index = ServeFile::new(static_dir.join("index.html"));
        Self {
            gateway,
            ui: ServeDir::new(static_dir).fallback(index),
        }
    }
}

/// Build the HTTP surface
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/currencies",
            get(handlers::list_currencies).fallback(handlers::api_not_found),
        )
        .route(
            "/api/convert",
            post(handlers::convert).fallback(handlers::api_not_found),
        )
        // Unknown /api/ paths and the UI
        .fallback(handlers::fallback)
        // Middleware
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            CorsLayer::new()
                .allow_origin(cors::Any)
                .allow_methods(cors::Any)
                .allow_headers(cors::Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Turn a handler panic into the uniform 500 body
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    AppError::Internal(format!("Handler panicked: {}", detail)).into_response()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,fxgate_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting fxgate API...");

    // Load configuration
    let config = Config::from_env();

    // Create adapters
    let rate_client = Arc::new(ExchangeRateClient::new(
        &config.exchange_api_url,
        config.upstream_timeout,
    )?);

    // Create application services
    let gateway = Arc::new(RateGateway::new(
        rate_client,
        config.exchange_api_key.clone(),
    ));

    if gateway.is_configured() {
        tracing::info!("API key configured");
    } else {
        tracing::warn!("EXCHANGE_API_KEY not found in environment variables");
        tracing::warn!("Please set EXCHANGE_API_KEY in your .env file");
    }

    let state = AppState::new(gateway, &config.static_dir);

    let app = router(state);

    // Start server
    let addr = config.listen_addr();
    tracing::info!("Listening on {}", addr);
    tracing::info!("Serving UI from {}", config.static_dir.display());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
