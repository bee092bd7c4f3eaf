use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InsightsError {
    #[error("Database error: {0}")]
    Database(#[from] libsql::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("LLM provider '{0}' not found")]
    ProviderNotFound(String),

    #[error("Vendor request failed (status {status:?}): {body}")]
    VendorRequestFailed { status: Option<u16>, body: String },

    #[error("Malformed vendor response: {0}")]
    MalformedVendorResponse(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for InsightsError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            InsightsError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            InsightsError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            InsightsError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            InsightsError::Auth(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            InsightsError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            InsightsError::ProviderNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            InsightsError::VendorRequestFailed { .. } => {
                (StatusCode::BAD_GATEWAY, self.to_string())
            }
            InsightsError::MalformedVendorResponse(_) => {
                (StatusCode::BAD_GATEWAY, self.to_string())
            }
            InsightsError::Http(e) => (StatusCode::BAD_GATEWAY, e.to_string()),
            InsightsError::Json(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            InsightsError::Database(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            InsightsError::Io(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            InsightsError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message,
            "code": status.as_u16()
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, InsightsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_not_found_names_the_provider() {
        let err = InsightsError::ProviderNotFound("mistral".to_string());
        assert!(err.to_string().contains("mistral"));
    }

    #[test]
    fn vendor_request_failed_carries_status_and_body() {
        let err = InsightsError::VendorRequestFailed {
            status: Some(429),
            body: "rate limited".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("429"));
        assert!(msg.contains("rate limited"));
    }
}
