//! Error types for the dashboard API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// API error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid date range
    InvalidDateRange(String),
    /// Unknown chart identifier
    ChartNotFound(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::InvalidDateRange(msg) => write!(f, "Invalid date range: {}", msg),
            ApiError::ChartNotFound(id) => write!(f, "Chart not found: {}", id),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// HTTP status and machine-readable kind of the error.
    pub fn status_and_kind(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::InvalidDateRange(_) => (StatusCode::BAD_REQUEST, "InvalidDateRange"),
            ApiError::ChartNotFound(_) => (StatusCode::NOT_FOUND, "ChartNotFound"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status_and_kind();
        let message = match &self {
            ApiError::ChartNotFound(id) => format!("Chart '{}' does not exist", id),
            ApiError::InvalidDateRange(msg) => msg.clone(),
        };

        tracing::debug!(error = %self, "request rejected");

        let body = Json(json!({
            "error": error_type,
            "message": message,
        }));

        (status, body).into_response()
    }
}

impl From<chrono::ParseError> for ApiError {
    fn from(err: chrono::ParseError) -> Self {
        ApiError::InvalidDateRange(format!("Dates must be YYYY-MM-DD: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::ChartNotFound("x".into()).status_and_kind(),
            (StatusCode::NOT_FOUND, "ChartNotFound")
        );
        assert_eq!(
            ApiError::InvalidDateRange("x".into()).status_and_kind().0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidDateRange("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_parse_error_converts_to_date_range_error() {
        let err: ApiError = chrono::NaiveDate::parse_from_str("nope", "%Y-%m-%d")
            .unwrap_err()
            .into();
        assert!(matches!(err, ApiError::InvalidDateRange(ref msg) if msg.starts_with("Dates must be YYYY-MM-DD")));
    }
}
