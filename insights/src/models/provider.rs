use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Metadata;

/// How a vendor authenticates requests. Only API keys are exercised today;
/// OAuth exists for administrator-registered providers that will need it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuthMethod {
    #[default]
    ApiKey,
    Oauth,
}

impl std::fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ApiKey => write!(f, "api_key"),
            Self::Oauth => write!(f, "oauth"),
        }
    }
}

impl std::str::FromStr for AuthMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "api_key" => Ok(Self::ApiKey),
            "oauth" => Ok(Self::Oauth),
            other => Err(format!("unknown auth method: {other}")),
        }
    }
}

/// Administrator-managed registry entry for a third-party LLM vendor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmProvider {
    pub id: String,
    /// Unique display name, matched case-insensitively on lookup.
    pub name: String,
    pub api_base_url: String,
    pub auth_method: AuthMethod,
    pub config: Metadata,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LlmProvider {
    pub fn new(name: String, api_base_url: String, auth_method: AuthMethod) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            api_base_url,
            auth_method,
            config: Metadata::new(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
