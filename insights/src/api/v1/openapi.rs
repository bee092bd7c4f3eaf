use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;
use super::response;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Insights API",
        version = "1.0.0",
        description = "Prompt dispatch and recording across heterogeneous LLM vendors.",
    ),
    paths(
        handlers::health::health_check,
        handlers::auth::issue_token,
        handlers::users::create_user,
        handlers::users::get_user,
        handlers::users::list_users,
        handlers::users::update_user,
        handlers::users::delete_user,
        handlers::organizations::create_organization,
        handlers::organizations::get_organization,
        handlers::organizations::list_organizations,
        handlers::organizations::delete_organization,
        handlers::teams::create_team,
        handlers::teams::get_team,
        handlers::teams::list_teams,
        handlers::teams::delete_team,
        handlers::teams::add_team_member,
        handlers::teams::list_team_members,
        handlers::teams::remove_team_member,
        handlers::providers::register_provider,
        handlers::providers::get_provider,
        handlers::providers::list_providers,
        handlers::prompts::submit_prompt,
        handlers::prompts::get_prompt,
        handlers::prompts::list_prompts,
        handlers::responses::get_response,
        handlers::analytics::usage_report,
        handlers::analytics::top_users,
        handlers::analytics::organization_usage,
    ),
    components(schemas(
        // Response envelope
        response::ErrorCode,
        response::ApiError,
        // Auth
        dto::auth::TokenRequest,
        dto::auth::TokenResponse,
        // Users
        dto::users::CreateUserRequest,
        dto::users::UpdateUserRequest,
        dto::users::UserResponse,
        // Organizations
        dto::organizations::CreateOrganizationRequest,
        dto::organizations::OrganizationResponse,
        // Teams
        dto::teams::CreateTeamRequest,
        dto::teams::TeamResponse,
        dto::teams::AddTeamMemberRequest,
        dto::teams::TeamMemberResponse,
        // Providers
        dto::providers::RegisterProviderRequest,
        dto::providers::ProviderResponse,
        // Prompts
        dto::prompts::SubmitPromptRequest,
        dto::prompts::PromptWithResponse,
        dto::prompts::ListPromptsQuery,
        dto::prompts::PromptSummary,
        // Responses
        dto::responses::ResponseRead,
        // Analytics
        dto::analytics::UsageReportResponse,
        dto::analytics::TopUsersQuery,
        dto::analytics::TopUsersResponse,
        dto::analytics::OrgUsageResponse,
        // Domain enums
        crate::models::TeamRole,
        crate::models::AuthMethod,
        // Analytics rows
        crate::db::traits::UserUsage,
        crate::db::traits::UserPromptCount,
        crate::db::traits::OrgTokenUsage,
        // Health (handler-local types)
        handlers::health::HealthData,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "authentication", description = "Token issuance"),
        (name = "users", description = "User accounts"),
        (name = "organizations", description = "Organizations"),
        (name = "teams", description = "Teams and membership"),
        (name = "llm-providers", description = "LLM provider registry"),
        (name = "prompts", description = "Prompt submission and history"),
        (name = "responses", description = "Recorded vendor responses"),
        (name = "analytics", description = "Usage reporting (superuser only)"),
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            utoipa::openapi::security::SecurityScheme::Http(utoipa::openapi::security::Http::new(
                utoipa::openapi::security::HttpAuthScheme::Bearer,
            )),
        );
    }
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
