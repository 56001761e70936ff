use std::sync::Arc;

use axum::{
    extract::{Extension, Path, RawQuery},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use showcase_core::ProductId;
use showcase_products::QueryState;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::RequestContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/featured", get(featured_products))
        .route("/:id", get(get_product))
}

/// `GET /api/products?category=&search=` or `GET /api/products?id=`.
pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<RequestContext>,
    RawQuery(raw): RawQuery,
) -> axum::response::Response {
    let params = dto::ListProductsQuery::from_query(raw.as_deref());
    if let Some(id) = params.product_id() {
        return product_response(&services, ctx, id);
    }

    let query = QueryState::from_params(params.category.as_deref(), params.search.as_deref());
    match services.products_list(&query) {
        Ok(listing) => {
            tracing::debug!(
                request_id = %ctx.request_id(),
                category = %listing.query.category,
                search = %listing.query.search,
                results = listing.total(),
                "products resolved"
            );
            (StatusCode::OK, Json(dto::listing_to_json(&listing))).into_response()
        }
        Err(e) => errors::catalog_error_to_response(e),
    }
}

/// `GET /api/products/:id`.
pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    product_response(&services, ctx, &id)
}

/// `GET /api/products/featured`.
pub async fn featured_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.products_featured() {
        Ok(products) => {
            let items = products.iter().map(dto::product_to_json).collect::<Vec<_>>();
            (StatusCode::OK, Json(serde_json::json!({ "products": items }))).into_response()
        }
        Err(e) => errors::catalog_error_to_response(e),
    }
}

fn product_response(services: &AppServices, ctx: RequestContext, raw_id: &str) -> axum::response::Response {
    let id: ProductId = match raw_id.parse() {
        Ok(v) => v,
        Err(e) => return errors::catalog_error_to_response(e),
    };

    match services.products_get(&id) {
        Ok(product) => (
            StatusCode::OK,
            Json(serde_json::json!({ "product": dto::product_to_json(&product) })),
        )
            .into_response(),
        Err(e) => {
            if e.is_not_found() {
                tracing::debug!(request_id = %ctx.request_id(), product_id = %id, "product not found");
            }
            errors::catalog_error_to_response(e)
        }
    }
}
