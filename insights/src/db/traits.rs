use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;
use crate::models::{LlmProvider, LlmResponse, Organization, Prompt, Team, TeamMember, User};

// ---------------------------------------------------------------------------
// Supporting types
// ---------------------------------------------------------------------------

/// Per-user usage aggregation row.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct UserUsage {
    pub user_id: String,
    pub email: String,
    pub prompt_count: i64,
    pub total_tokens_used: i64,
}

/// Per-user prompt count row, ordered by activity.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct UserPromptCount {
    pub user_id: String,
    pub email: String,
    pub prompt_count: i64,
}

/// Per-organization token consumption row.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct OrgTokenUsage {
    pub organization_id: Option<String>,
    pub prompt_count: i64,
    pub total_tokens_used: i64,
}

// ---------------------------------------------------------------------------
// Individual store traits
// ---------------------------------------------------------------------------

/// CRUD operations for user accounts.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create_user(&self, user: &User) -> Result<()>;
    async fn get_user_by_id(&self, id: &str) -> Result<Option<User>>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn list_users_by_organization(&self, organization_id: &str) -> Result<Vec<User>>;
    async fn update_user(&self, user: &User) -> Result<()>;
    async fn delete_user(&self, id: &str) -> Result<bool>;
}

/// CRUD operations for organizations.
#[async_trait]
pub trait OrganizationStore: Send + Sync {
    async fn create_organization(&self, org: &Organization) -> Result<()>;
    async fn get_organization_by_id(&self, id: &str) -> Result<Option<Organization>>;
    async fn get_organization_by_name(&self, name: &str) -> Result<Option<Organization>>;
    async fn list_organizations(&self) -> Result<Vec<Organization>>;
    async fn delete_organization(&self, id: &str) -> Result<bool>;
}

/// CRUD operations for teams and their membership.
#[async_trait]
pub trait TeamStore: Send + Sync {
    async fn create_team(&self, team: &Team) -> Result<()>;
    async fn get_team_by_id(&self, id: &str) -> Result<Option<Team>>;
    async fn list_teams_by_organization(&self, organization_id: &str) -> Result<Vec<Team>>;
    async fn delete_team(&self, id: &str) -> Result<bool>;
    async fn add_team_member(&self, member: &TeamMember) -> Result<()>;
    async fn list_team_members(&self, team_id: &str) -> Result<Vec<TeamMember>>;
    async fn remove_team_member(&self, team_id: &str, user_id: &str) -> Result<bool>;
}

/// The provider registry. Name lookup is case-insensitive and only ever
/// returns active rows; dispatch treats a miss as `ProviderNotFound`.
#[async_trait]
pub trait ProviderStore: Send + Sync {
    async fn create_provider(&self, provider: &LlmProvider) -> Result<()>;
    async fn get_provider_by_id(&self, id: &str) -> Result<Option<LlmProvider>>;
    async fn get_provider_by_name(&self, name: &str) -> Result<Option<LlmProvider>>;
    async fn list_active_providers(&self) -> Result<Vec<LlmProvider>>;
}

/// CRUD and listing for submitted prompts.
#[async_trait]
pub trait PromptStore: Send + Sync {
    async fn create_prompt(&self, prompt: &Prompt) -> Result<()>;
    async fn get_prompt_by_id(&self, id: &str) -> Result<Option<Prompt>>;
    async fn list_prompts_by_user(&self, user_id: &str, skip: u32, limit: u32)
        -> Result<Vec<Prompt>>;
    async fn list_prompts_by_organization(
        &self,
        organization_id: &str,
        skip: u32,
        limit: u32,
    ) -> Result<Vec<Prompt>>;
}

/// Persistence for recorded vendor responses.
#[async_trait]
pub trait ResponseStore: Send + Sync {
    async fn create_response(&self, response: &LlmResponse) -> Result<()>;
    async fn get_response_by_id(&self, id: &str) -> Result<Option<LlmResponse>>;
    async fn list_responses_by_prompt(&self, prompt_id: &str) -> Result<Vec<LlmResponse>>;
    async fn latest_response_for_prompt(&self, prompt_id: &str) -> Result<Option<LlmResponse>>;
    async fn count_responses_for_prompt(&self, prompt_id: &str) -> Result<i64>;
}

/// Usage aggregation queries backing the analytics endpoints.
#[async_trait]
pub trait AnalyticsStore: Send + Sync {
    async fn usage_report(&self) -> Result<Vec<UserUsage>>;
    async fn top_users_by_prompt_count(&self, limit: u32) -> Result<Vec<UserPromptCount>>;
    async fn token_usage_by_organization(&self) -> Result<Vec<OrgTokenUsage>>;
}

// ---------------------------------------------------------------------------
// Unified backend supertrait
// ---------------------------------------------------------------------------

/// A complete database backend combining all store traits.
#[async_trait]
pub trait DatabaseBackend:
    UserStore
    + OrganizationStore
    + TeamStore
    + ProviderStore
    + PromptStore
    + ResponseStore
    + AnalyticsStore
{
}
