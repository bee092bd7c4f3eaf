use serde::{Deserialize, Serialize};

use crate::db::{OrgTokenUsage, UserPromptCount, UserUsage};

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct UsageReportResponse {
    pub users: Vec<UserUsage>,
}

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct TopUsersQuery {
    #[serde(default = "default_top_limit")]
    pub limit: u32,
}

fn default_top_limit() -> u32 {
    5
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct TopUsersResponse {
    pub users: Vec<UserPromptCount>,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct OrgUsageResponse {
    pub organizations: Vec<OrgTokenUsage>,
}
