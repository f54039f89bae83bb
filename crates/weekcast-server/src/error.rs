use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use weekcast_core::error::{AppError, FetchError};

use crate::dto::ErrorResponse;

/// Wrapper so we can implement `IntoResponse` for `AppError`.
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn status_and_kind(&self) -> (StatusCode, &'static str) {
        match &self.0 {
            AppError::InvalidCity(_) => (StatusCode::BAD_REQUEST, "invalid_city"),
            err if err.is_client_error() => (StatusCode::NOT_FOUND, "unknown_date"),
            err if err.is_markup_error() => (StatusCode::BAD_GATEWAY, "upstream_markup"),
            AppError::Fetch(FetchError::Timeout(_)) => (StatusCode::GATEWAY_TIMEOUT, "timeout"),
            AppError::Fetch(FetchError::Client(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
            AppError::Fetch(_) => (StatusCode::BAD_GATEWAY, "upstream_error"),
            AppError::Extract(_) | AppError::ConfigError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "config_error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status_and_kind();

        if status.is_server_error() {
            tracing::warn!(error = %self.0, "Forecast request failed");
        }

        let body = ErrorResponse {
            error: error_type.to_string(),
            message: self.0.to_string(),
        };

        (status, axum::Json(body)).into_response()
    }
}
