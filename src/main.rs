//! Daak Register Backend
//!
//! A small REST backend for a correspondence register, keeping the whole
//! register as one JSON blob in a SQLite key-value table.

mod api;
mod auth;
mod config;
mod db;
mod errors;
mod models;
mod search;
mod store;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth::LoginGate;
use config::Config;
use db::{KeyValueStorage, MemoryStorage, SqliteStorage};
use store::EntryStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<EntryStore>,
    pub login: Arc<LoginGate>,
}

impl AppState {
    pub fn new(store: EntryStore, config: &Config) -> Self {
        Self {
            store: Arc::new(store),
            login: Arc::new(LoginGate::new(
                config.login_username.clone(),
                config.login_password.clone(),
            )),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Daak Register Backend");
    tracing::info!("Storage key: {}", config.storage_key);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize storage
    let storage: Arc<dyn KeyValueStorage> = if config.in_memory {
        tracing::warn!("DAAK_IN_MEMORY is set. Entries will not survive a restart!");
        Arc::new(MemoryStorage::new())
    } else {
        tracing::info!("Database path: {:?}", config.db_path);
        let pool = db::init_database(&config.db_path).await?;
        Arc::new(SqliteStorage::new(pool))
    };
    let store = EntryStore::new(storage, config.storage_key.clone());

    // An unreadable register stops startup
    let entries = store.list().await?;
    tracing::info!("Register loaded with {} entries", entries.len());

    let state = AppState::new(store, &config);
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // The browser frontend is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Login gate
        .route("/login", post(api::login))
        // Snapshot
        .route("/datastore", get(api::get_datastore))
        // Entries
        .route("/entries", get(api::list_entries).post(api::create_entry))
        .route("/entries/", get(api::track_without_id))
        .route(
            "/entries/{id}",
            get(api::track_entry).delete(api::delete_entry),
        );

    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
