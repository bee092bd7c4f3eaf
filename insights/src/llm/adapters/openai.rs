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
    let url = format!("{}/chat/completions", cfg.base_url);
    let payload = json!({
        "model": param_or(params, "model", json!("gpt-4o")),
        "messages": [{"role": "user", "content": prompt}],
        "temperature": param_or(params, "temperature", json!(0.7)),
        "max_tokens": param_or(params, "max_tokens", json!(500)),
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

/// Extracts `choices[0].message.content` and `usage.total_tokens`.
pub fn parse_reply(reply: &Value) -> Result<(String, Metadata)> {
    let text = reply
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("openai reply missing choices[0].message.content"))?;

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
