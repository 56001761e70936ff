use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::app::services::AppServices;

pub async fn list_categories(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let categories = services.categories();
    (
        StatusCode::OK,
        Json(serde_json::json!({ "categories": categories })),
    )
        .into_response()
}
