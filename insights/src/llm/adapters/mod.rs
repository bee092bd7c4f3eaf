//! One module per vendor. Each adapter owns its request shape, auth header,
//! and reply normalization; nothing is shared across vendors beyond the
//! plumbing below.

pub mod anthropic;
pub mod cohere;
pub mod deepseek;
pub mod gemini;
pub mod openai;

use serde_json::Value;

use crate::error::{InsightsError, Result};
use crate::models::Metadata;

/// Caller-supplied parameter, falling back to the vendor default.
pub(crate) fn param_or(params: &Metadata, key: &str, default: Value) -> Value {
    params.get(key).cloned().unwrap_or(default)
}

/// Sends a prepared request and decodes the JSON body. Non-2xx statuses are
/// surfaced with the raw body text; no retries at this layer.
pub(crate) async fn send(request: reqwest::RequestBuilder) -> Result<Value> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(InsightsError::VendorRequestFailed {
            status: Some(status.as_u16()),
            body,
        });
    }
    Ok(response.json().await?)
}

pub(crate) fn malformed(detail: &str) -> InsightsError {
    InsightsError::MalformedVendorResponse(detail.to_string())
}
