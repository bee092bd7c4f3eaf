use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{AuthMethod, LlmProvider, Metadata};

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct RegisterProviderRequest {
    /// Registry name, matched case-insensitively at dispatch time.
    pub name: String,
    pub api_base_url: String,
    #[serde(default)]
    pub auth_method: AuthMethod,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub config: Metadata,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct ProviderResponse {
    pub id: String,
    pub name: String,
    pub api_base_url: String,
    pub auth_method: AuthMethod,
    #[schema(value_type = Object)]
    pub config: Metadata,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<LlmProvider> for ProviderResponse {
    fn from(provider: LlmProvider) -> Self {
        Self {
            id: provider.id,
            name: provider.name,
            api_base_url: provider.api_base_url,
            auth_method: provider.auth_method,
            config: provider.config,
            is_active: provider.is_active,
            created_at: provider.created_at,
        }
    }
}
