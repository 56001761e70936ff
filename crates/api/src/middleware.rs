use std::time::{Duration, Instant};

use axum::{
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::context::RequestContext;

/// Response header echoing the id assigned to the request.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Assign a request id, run the request inside a span, and log its outcome.
pub async fn request_logging(
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let request_id = Uuid::now_v7();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    req.extensions_mut().insert(RequestContext::new(request_id));

    let span = tracing::info_span!("http_request", %request_id, %method, %path);
    let started = Instant::now();
    let mut response = next.run(req).instrument(span.clone()).await;

    let status = response.status();
    span.in_scope(|| {
        tracing::info!(
            status = status.as_u16(),
            elapsed_ms = elapsed_ms(started.elapsed()),
            "request completed"
        );
    });

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

/// Whole milliseconds in `elapsed`, saturating at `u64::MAX`.
fn elapsed_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_ms_truncates_sub_millisecond_parts() {
        assert_eq!(elapsed_ms(Duration::from_micros(2_750)), 2);
        assert_eq!(elapsed_ms(Duration::ZERO), 0);
    }

    #[test]
    fn elapsed_ms_saturates_instead_of_wrapping() {
        assert_eq!(elapsed_ms(Duration::MAX), u64::MAX);
    }
}
