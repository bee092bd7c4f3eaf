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
    let url = format!("{}/v1/generate", cfg.base_url);
    let payload = json!({
        "model": param_or(params, "model", json!("command")),
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

/// Extracts `generations[0].text`; token_count is the sum of every value in
/// `meta.billed_units` (input plus output units).
pub fn parse_reply(reply: &Value) -> Result<(String, Metadata)> {
    let text = reply
        .pointer("/generations/0/text")
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("cohere reply missing generations[0].text"))?;

    let token_count: i64 = reply
        .pointer("/meta/billed_units")
        .and_then(Value::as_object)
        .map(|units| units.values().filter_map(Value::as_i64).sum())
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
    fn sums_billed_units() {
        let reply = json!({
            "generations": [{"text": "out"}],
            "meta": {"billed_units": {"input_tokens": 3, "output_tokens": 9}}
        });
        let (text, metadata) = parse_reply(&reply).unwrap();
        assert_eq!(text, "out");
        assert_eq!(metadata["token_count"], json!(12));
    }

    #[test]
    fn missing_meta_yields_zero_tokens() {
        let reply = json!({"generations": [{"text": "out"}]});
        let (_, metadata) = parse_reply(&reply).unwrap();
        assert_eq!(metadata["token_count"], json!(0));
    }

    #[test]
    fn missing_generations_is_malformed() {
        let reply = json!({"meta": {}});
        assert!(parse_reply(&reply).is_err());
    }
}
