//! Crop Recommendation Platform - Backend Server
//!
//! A rule-based recommendation service for farmers: scores a catalog of 24
//! crops against seven soil/climate measurements and returns the best match
//! with yield and sustainability estimates and multilingual crop names.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shared::CropCatalog;

mod config;
mod error;
mod handlers;
mod routes;
mod services;

pub use config::Config;

use services::UsageService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<CropCatalog>,
    pub usage: UsageService,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crop_rec_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Crop Recommendation Server");
    tracing::info!("Environment: {}", config.environment);

    // Build the crop catalog once; it is read-only for the process lifetime
    let catalog = Arc::new(CropCatalog::bundled()?);
    tracing::info!("Catalog loaded with {} crops", catalog.len());

    // Restore usage counters from the analytics log
    let usage = UsageService::load(&config.usage).await;

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
        catalog,
        usage,
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration: the API is consumed by mobile and web clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::service_info))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
