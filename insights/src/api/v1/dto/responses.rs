use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{LlmResponse, Metadata};

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct ResponseRead {
    pub id: String,
    pub content: String,
    #[schema(value_type = Object)]
    pub metadata: Metadata,
    pub prompt_id: String,
    pub llm_provider_id: Option<String>,
    pub latency: f64,
    pub token_count: i64,
    pub created_at: DateTime<Utc>,
}

impl From<LlmResponse> for ResponseRead {
    fn from(response: LlmResponse) -> Self {
        Self {
            id: response.id,
            content: response.content,
            metadata: response.metadata,
            prompt_id: response.prompt_id,
            llm_provider_id: response.llm_provider_id,
            latency: response.latency,
            token_count: response.token_count,
            created_at: response.created_at,
        }
    }
}
