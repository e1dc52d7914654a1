//! Example App API Server
//!
//! A minimal service showing hexagonal (ports & adapters) architecture:
//! entities and port traits in `domain`, use cases in `app`, the in-memory
//! repository in `adapters`, and HTTP handlers as the inbound adapter.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
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


use adapters::InMemoryExampleEntityRepository;
use app::{
    CreateEntityUseCase, DeleteEntityUseCase, GetEntityUseCase, ListEntitiesUseCase,
    RenameEntityUseCase,
};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub create_entity: Arc<CreateEntityUseCase<InMemoryExampleEntityRepository>>,
    pub get_entity: Arc<GetEntityUseCase<InMemoryExampleEntityRepository>>,
    pub list_entities: Arc<ListEntitiesUseCase<InMemoryExampleEntityRepository>>,
    pub rename_entity: Arc<RenameEntityUseCase<InMemoryExampleEntityRepository>>,
    pub delete_entity: Arc<DeleteEntityUseCase<InMemoryExampleEntityRepository>>,
}

impl AppState {
    /// Wire every use case to the same repository
    pub fn new(entity_repo: Arc<InMemoryExampleEntityRepository>) -> Self {
        Self {
            create_entity: Arc::new(CreateEntityUseCase::new(entity_repo.clone())),
            get_entity: Arc::new(GetEntityUseCase::new(entity_repo.clone())),
            list_entities: Arc::new(ListEntitiesUseCase::new(entity_repo.clone())),
            rename_entity: Arc::new(RenameEntityUseCase::new(entity_repo.clone())),
            delete_entity: Arc::new(DeleteEntityUseCase::new(entity_repo)),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/entities",
            get(handlers::list_entities).post(handlers::create_entity),
        )
        .route(
            "/entities/:id",
            get(handlers::get_entity)
                .patch(handlers::rename_entity)
                .delete(handlers::delete_entity),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,example_app=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting example app...");

    let config = Config::from_env();

    // Create adapters
    let entity_repo = Arc::new(InMemoryExampleEntityRepository::new());

    let state = AppState::new(entity_repo);
    let app = build_router(state);

    let addr: SocketAddr = config.socket_addr();
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
