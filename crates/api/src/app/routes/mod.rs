use axum::{routing::get, Router};

pub mod categories;
pub mod products;
pub mod system;

/// Router for the catalog endpoints (mounted under `/api`).
pub fn router() -> Router {
    Router::new()
        .nest("/products", products::router())
        .route("/categories", get(categories::list_categories))
}
