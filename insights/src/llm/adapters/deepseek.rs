use serde_json::{json, Value};

use crate::config::VendorConfig;
use crate::error::Result;
use crate::models::Metadata;

use super::{malformed, param_or, send};

pub async fn call(
    client: &reqwest::Client,
    cfg: &VendorConfig,
    prompt: &str,
    params: &Metadata,
) -> Result<(String, Metadata)> {
    let url = format!("{}/generate", cfg.base_url);
    // No default model for this vendor; the endpoint picks one.
    let payload = json!({
        "prompt": prompt,
        "temperature": param_or(params, "temperature", json!(0.7)),
    });

    let reply = send(
        client
            .post(&url)
            .bearer_auth(cfg.api_key.as_deref().unwrap_or_default())
            .json(&payload),
    )
    .await?;

    parse_reply(&reply)
}

/// Extracts the flat `response` field and `usage.total_tokens`.
pub fn parse_reply(reply: &Value) -> Result<(String, Metadata)> {
    let text = reply
        .get("response")
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("deepseek reply missing response field"))?;

    let token_count = reply
        .pointer("/usage/total_tokens")
        .and_then(Value::as_i64)
        .unwrap_or(0);

    let mut metadata = Metadata::new();
    metadata.insert(
        "model".to_string(),
        reply.get("model").cloned().unwrap_or(json!("")),
    );
    metadata.insert("token_count".to_string(), json!(token_count));

    Ok((text.to_string(), metadata))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_flat_response() {
        let reply = json!({"response": "done", "usage": {"total_tokens": 4}});
        let (text, metadata) = parse_reply(&reply).unwrap();
        assert_eq!(text, "done");
        assert_eq!(metadata["token_count"], json!(4));
    }

    #[test]
    fn missing_response_is_malformed() {
        let reply = json!({"usage": {"total_tokens": 4}});
        assert!(parse_reply(&reply).is_err());
    }
}
