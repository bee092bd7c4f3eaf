use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Metadata;

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct SubmitPromptRequest {
    pub content: String,
    /// Registry name of the provider to dispatch to.
    pub llm_provider: String,
    /// Vendor parameter overrides (model, temperature, max_tokens, ...).
    #[serde(default)]
    #[schema(value_type = Object)]
    pub parameters: Metadata,
}

/// Combined prompt + reply payload returned by submit and get.
///
/// The response fields are null when a prompt has no recorded reply yet.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct PromptWithResponse {
    pub prompt_id: String,
    pub prompt_content: String,
    pub response_id: Option<String>,
    pub response_content: Option<String>,
    pub llm_provider: Option<String>,
    pub latency: Option<f64>,
    pub token_count: Option<i64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct ListPromptsQuery {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// List the whole organization's prompts instead of the caller's own.
    #[serde(default)]
    pub org_only: bool,
}

fn default_limit() -> u32 {
    100
}

/// Listing row: content truncated to a preview, plus the reply count.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct PromptSummary {
    pub prompt_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub response_count: i64,
}

/// Truncates prompt content to at most 100 characters for list views.
pub fn content_preview(content: &str) -> String {
    if content.chars().count() > 100 {
        let preview: String = content.chars().take(100).collect();
        format!("{preview}...")
    } else {
        content.to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn short_content_is_untouched() {
        assert_eq!(content_preview("hello"), "hello");
    }

    #[test]
    fn long_content_is_truncated_with_ellipsis() {
        let long = "x".repeat(150);
        let preview = content_preview(&long);
        assert_eq!(preview.chars().count(), 103);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn exactly_100_chars_is_untouched() {
        let content = "y".repeat(100);
        assert_eq!(content_preview(&content), content);
    }
}
