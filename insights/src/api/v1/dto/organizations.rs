use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Organization;

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct CreateOrganizationRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct OrganizationResponse {
    pub id: String,
    pub name: String,
    pub api_key: String,
    pub created_at: DateTime<Utc>,
}

impl From<Organization> for OrganizationResponse {
    fn from(org: Organization) -> Self {
        Self {
            id: org.id,
            name: org.name,
            api_key: org.api_key,
            created_at: org.created_at,
        }
    }
}
