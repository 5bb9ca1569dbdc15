use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;
use viewcount_core::CounterError;

use crate::model::ErrorResponse;
use crate::response::json_response;

pub type Result<T> = std::result::Result<T, AppError>;

/// Message sent when the store fails; the cause is only logged.
const INTERNAL_ERROR: &str = "Internal server error";

#[derive(Debug)]
pub struct AppError(CounterError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            CounterError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            CounterError::MissingSlug | CounterError::InvalidSlug => StatusCode::BAD_REQUEST,
            CounterError::MissingBinding | CounterError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn inner(&self) -> &CounterError {
        &self.0
    }
}

impl From<CounterError> for AppError {
    fn from(value: CounterError) -> Self {
        Self(value)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self.0 {
            CounterError::Storage(source) => {
                error!(error = %source, "counter store operation failed");
                INTERNAL_ERROR.to_string()
            }
            CounterError::MissingBinding => {
                error!("VIEW_COUNTERS binding is not configured");
                self.0.to_string()
            }
            other => other.to_string(),
        };
        json_response(status, &ErrorResponse::new(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewcount_core::StorageError;

    #[test]
    fn status_codes() {
        let cases = [
            (CounterError::MethodNotAllowed, StatusCode::METHOD_NOT_ALLOWED),
            (CounterError::MissingSlug, StatusCode::BAD_REQUEST),
            (CounterError::InvalidSlug, StatusCode::BAD_REQUEST),
            (CounterError::MissingBinding, StatusCode::INTERNAL_SERVER_ERROR),
            (
                CounterError::Storage(StorageError::Timeout("get".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(AppError::from(error).status(), expected);
        }
    }
}
