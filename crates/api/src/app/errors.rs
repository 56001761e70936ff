use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use showcase_core::CatalogError;

pub fn catalog_error_to_response(err: CatalogError) -> axum::response::Response {
    match err {
        CatalogError::NotFound(_) => {
            json_error(StatusCode::NOT_FOUND, "not_found", "product not found")
        }
        CatalogError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        // Request parsing degrades unknown labels to an empty filter, so a raised
        // InvalidCategory means an internal caller broke that contract.
        CatalogError::InvalidCategory(label) => {
            tracing::error!(category = %label, "category error escaped query parsing");
            internal_error()
        }
        CatalogError::InvariantViolation(msg) | CatalogError::Internal(msg) => {
            tracing::error!(error = %msg, "catalog request failed");
            internal_error()
        }
    }
}

fn internal_error() -> axum::response::Response {
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal_error",
        "internal server error",
    )
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_core::ProductId;

    fn status_of(err: CatalogError) -> StatusCode {
        catalog_error_to_response(err).status()
    }

    #[test]
    fn client_errors_keep_their_status() {
        let id: ProductId = "42".parse().unwrap();
        assert_eq!(status_of(CatalogError::not_found(id)), StatusCode::NOT_FOUND);
        assert_eq!(status_of(CatalogError::invalid_id("blank id")), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn category_errors_are_server_faults() {
        assert_eq!(
            status_of(CatalogError::invalid_category("Garden")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(CatalogError::internal("store unavailable")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
