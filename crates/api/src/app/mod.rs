//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: catalog store wiring and the query operations handlers call
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use showcase_core::CatalogResult;
use showcase_products::{CatalogStore, InMemoryCatalog};

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router over the built-in catalog (entrypoint used by `main.rs`).
pub fn build_app(config: &ApiConfig) -> CatalogResult<Router> {
    let store = Arc::new(InMemoryCatalog::seeded()?);
    tracing::info!(products = store.len(), "catalog loaded");
    Ok(build_app_with_store(store, config))
}

/// Build the router over an arbitrary catalog store.
pub fn build_app_with_store(store: Arc<dyn CatalogStore>, config: &ApiConfig) -> Router {
    let services = Arc::new(services::AppServices::new(store, config.featured_limit));

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_logging))
                .layer(Extension(services)),
        )
}
