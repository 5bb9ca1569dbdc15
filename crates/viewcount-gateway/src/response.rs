use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
pub const NO_STORE: &str = "no-store";

/// Serializes `body` into a JSON response that must never be cached.
///
/// Every response from the view endpoint, success or error, goes through
/// here so the headers are identical across all of them.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => (
            status,
            [
                (CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE)),
                (CACHE_CONTROL, HeaderValue::from_static(NO_STORE)),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "failed to serialize response body");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(CACHE_CONTROL, HeaderValue::from_static(NO_STORE))],
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ErrorResponse;

    #[test]
    fn sets_json_and_no_store_headers() {
        let response = json_response(StatusCode::BAD_REQUEST, &ErrorResponse::new("Missing slug"));

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()[CONTENT_TYPE], JSON_CONTENT_TYPE);
        assert_eq!(response.headers()[CACHE_CONTROL], NO_STORE);
    }
}
