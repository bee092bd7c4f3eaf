use async_trait::async_trait;

use crate::db::connection::Database;
use crate::db::repository::{
    AnalyticsRepository, OrganizationRepository, PromptRepository, ProviderRepository,
    ResponseRepository, TeamRepository, UserRepository,
};
use crate::db::traits::{
    AnalyticsStore, DatabaseBackend, OrgTokenUsage, OrganizationStore, PromptStore, ProviderStore,
    ResponseStore, TeamStore, UserPromptCount, UserStore, UserUsage,
};
use crate::error::Result;
use crate::models::{LlmProvider, LlmResponse, Organization, Prompt, Team, TeamMember, User};

pub struct LibSqlBackend {
    db: Database,
}

impl LibSqlBackend {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for LibSqlBackend {
    async fn create_user(&self, user: &User) -> Result<()> {
        let conn = self.db.connect()?;
        UserRepository::create(&conn, user).await
    }
    async fn get_user_by_id(&self, id: &str) -> Result<Option<User>> {
        let conn = self.db.connect()?;
        UserRepository::get_by_id(&conn, id).await
    }
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let conn = self.db.connect()?;
        UserRepository::get_by_email(&conn, email).await
    }
    async fn list_users_by_organization(&self, organization_id: &str) -> Result<Vec<User>> {
        let conn = self.db.connect()?;
        UserRepository::list_by_organization(&conn, organization_id).await
    }
    async fn update_user(&self, user: &User) -> Result<()> {
        let conn = self.db.connect()?;
        UserRepository::update(&conn, user).await
    }
    async fn delete_user(&self, id: &str) -> Result<bool> {
        let conn = self.db.connect()?;
        UserRepository::delete(&conn, id).await
    }
}

#[async_trait]
impl OrganizationStore for LibSqlBackend {
    async fn create_organization(&self, org: &Organization) -> Result<()> {
        let conn = self.db.connect()?;
        OrganizationRepository::create(&conn, org).await
    }
    async fn get_organization_by_id(&self, id: &str) -> Result<Option<Organization>> {
        let conn = self.db.connect()?;
        OrganizationRepository::get_by_id(&conn, id).await
    }
    async fn get_organization_by_name(&self, name: &str) -> Result<Option<Organization>> {
        let conn = self.db.connect()?;
        OrganizationRepository::get_by_name(&conn, name).await
    }
    async fn list_organizations(&self) -> Result<Vec<Organization>> {
        let conn = self.db.connect()?;
        OrganizationRepository::list(&conn).await
    }
    async fn delete_organization(&self, id: &str) -> Result<bool> {
        let conn = self.db.connect()?;
        OrganizationRepository::delete(&conn, id).await
    }
}

#[async_trait]
impl TeamStore for LibSqlBackend {
    async fn create_team(&self, team: &Team) -> Result<()> {
        let conn = self.db.connect()?;
        TeamRepository::create(&conn, team).await
    }
    async fn get_team_by_id(&self, id: &str) -> Result<Option<Team>> {
        let conn = self.db.connect()?;
        TeamRepository::get_by_id(&conn, id).await
    }
    async fn list_teams_by_organization(&self, organization_id: &str) -> Result<Vec<Team>> {
        let conn = self.db.connect()?;
        TeamRepository::list_by_organization(&conn, organization_id).await
    }
    async fn delete_team(&self, id: &str) -> Result<bool> {
        let conn = self.db.connect()?;
        TeamRepository::delete(&conn, id).await
    }
    async fn add_team_member(&self, member: &TeamMember) -> Result<()> {
        let conn = self.db.connect()?;
        TeamRepository::add_member(&conn, member).await
    }
    async fn list_team_members(&self, team_id: &str) -> Result<Vec<TeamMember>> {
        let conn = self.db.connect()?;
        TeamRepository::list_members(&conn, team_id).await
    }
    async fn remove_team_member(&self, team_id: &str, user_id: &str) -> Result<bool> {
        let conn = self.db.connect()?;
        TeamRepository::remove_member(&conn, team_id, user_id).await
    }
}

#[async_trait]
impl ProviderStore for LibSqlBackend {
    async fn create_provider(&self, provider: &LlmProvider) -> Result<()> {
        let conn = self.db.connect()?;
        ProviderRepository::create(&conn, provider).await
    }
    async fn get_provider_by_id(&self, id: &str) -> Result<Option<LlmProvider>> {
        let conn = self.db.connect()?;
        ProviderRepository::get_by_id(&conn, id).await
    }
    async fn get_provider_by_name(&self, name: &str) -> Result<Option<LlmProvider>> {
        let conn = self.db.connect()?;
        ProviderRepository::get_by_name(&conn, name).await
    }
    async fn list_active_providers(&self) -> Result<Vec<LlmProvider>> {
        let conn = self.db.connect()?;
        ProviderRepository::list_active(&conn).await
    }
}

#[async_trait]
impl PromptStore for LibSqlBackend {
    async fn create_prompt(&self, prompt: &Prompt) -> Result<()> {
        let conn = self.db.connect()?;
        PromptRepository::create(&conn, prompt).await
    }
    async fn get_prompt_by_id(&self, id: &str) -> Result<Option<Prompt>> {
        let conn = self.db.connect()?;
        PromptRepository::get_by_id(&conn, id).await
    }
    async fn list_prompts_by_user(
        &self,
        user_id: &str,
        skip: u32,
        limit: u32,
    ) -> Result<Vec<Prompt>> {
        let conn = self.db.connect()?;
        PromptRepository::list_by_user(&conn, user_id, skip, limit).await
    }
    async fn list_prompts_by_organization(
        &self,
        organization_id: &str,
        skip: u32,
        limit: u32,
    ) -> Result<Vec<Prompt>> {
        let conn = self.db.connect()?;
        PromptRepository::list_by_organization(&conn, organization_id, skip, limit).await
    }
}

#[async_trait]
impl ResponseStore for LibSqlBackend {
    async fn create_response(&self, response: &LlmResponse) -> Result<()> {
        let conn = self.db.connect()?;
        ResponseRepository::create(&conn, response).await
    }
    async fn get_response_by_id(&self, id: &str) -> Result<Option<LlmResponse>> {
        let conn = self.db.connect()?;
        ResponseRepository::get_by_id(&conn, id).await
    }
    async fn list_responses_by_prompt(&self, prompt_id: &str) -> Result<Vec<LlmResponse>> {
        let conn = self.db.connect()?;
        ResponseRepository::list_by_prompt(&conn, prompt_id).await
    }
    async fn latest_response_for_prompt(&self, prompt_id: &str) -> Result<Option<LlmResponse>> {
        let conn = self.db.connect()?;
        ResponseRepository::latest_for_prompt(&conn, prompt_id).await
    }
    async fn count_responses_for_prompt(&self, prompt_id: &str) -> Result<i64> {
        let conn = self.db.connect()?;
        ResponseRepository::count_for_prompt(&conn, prompt_id).await
    }
}

#[async_trait]
impl AnalyticsStore for LibSqlBackend {
    async fn usage_report(&self) -> Result<Vec<UserUsage>> {
        let conn = self.db.connect()?;
        AnalyticsRepository::usage_report(&conn).await
    }
    async fn top_users_by_prompt_count(&self, limit: u32) -> Result<Vec<UserPromptCount>> {
        let conn = self.db.connect()?;
        AnalyticsRepository::top_users_by_prompt_count(&conn, limit).await
    }
    async fn token_usage_by_organization(&self) -> Result<Vec<OrgTokenUsage>> {
        let conn = self.db.connect()?;
        AnalyticsRepository::token_usage_by_organization(&conn).await
    }
}

#[async_trait]
impl DatabaseBackend for LibSqlBackend {}
