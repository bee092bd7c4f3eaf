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
    let url = format!("{}/v1/messages", cfg.base_url);
    let payload = json!({
        "model": param_or(params, "model", json!("claude-3-opus-20240229")),
        "messages": [{"role": "user", "content": prompt}],
        "temperature": param_or(params, "temperature", json!(0.7)),
        "max_tokens": param_or(params, "max_tokens", json!(500)),
    });

    let reply = send(
        client
            .post(&url)
            .header("x-api-key", cfg.api_key.as_deref().unwrap_or_default())
            .json(&payload),
    )
    .await?;

    parse_reply(&reply)
}

/// Extracts `content[0].text`; token_count comes from `usage.input_tokens`.
pub fn parse_reply(reply: &Value) -> Result<(String, Metadata)> {
    let text = reply
        .pointer("/content/0/text")
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("anthropic reply missing content[0].text"))?;

    let token_count = reply
        .pointer("/usage/input_tokens")
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
    fn extracts_text_and_input_tokens() {
        let reply = json!({
            "model": "claude-3-opus-20240229",
            "content": [{"text": "hello"}],
            "usage": {"input_tokens": 12, "output_tokens": 40}
        });
        let (text, metadata) = parse_reply(&reply).unwrap();
        assert_eq!(text, "hello");
        assert_eq!(metadata["token_count"], json!(12));
    }

    #[test]
    fn missing_usage_yields_zero_tokens() {
        let reply = json!({"content": [{"text": "hello"}]});
        let (_, metadata) = parse_reply(&reply).unwrap();
        assert_eq!(metadata["token_count"], json!(0));
    }

    #[test]
    fn empty_content_is_malformed() {
        let reply = json!({"content": []});
        assert!(parse_reply(&reply).is_err());
    }
}
