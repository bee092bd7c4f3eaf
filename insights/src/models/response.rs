use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Metadata;

/// A recorded vendor reply. Created once per successful dispatch and never
/// mutated; a prompt may accumulate several through regeneration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmResponse {
    pub id: String,
    pub content: String,
    pub metadata: Metadata,
    pub prompt_id: String,
    pub llm_provider_id: Option<String>,
    /// Wall-clock seconds spent in the vendor round trip. Never negative.
    pub latency: f64,
    /// Vendor-reported token usage, 0 when the vendor omits it.
    pub token_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LlmResponse {
    pub fn new(content: String, prompt_id: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            content,
            metadata: Metadata::new(),
            prompt_id,
            llm_provider_id: None,
            latency: 0.0,
            token_count: 0,
            created_at: now,
            updated_at: now,
        }
    }
}
